//! Runs lookups queued by the app on the tokio runtime.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use scopeguard::ScopeGuard;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::debug;

use crate::github::ProfileSource;
use crate::search::{lookup, FailureKind, LookupOutcome};
use crate::ui::app::{UiCommand, UiCommandSender};
use crate::ui::events::AppEvent;

const COMMAND_BUFFER: usize = 8;

/// Spawns the worker and returns the sender the app queues commands on.
///
/// Every `UiCommand::Lookup` produces exactly one
/// `AppEvent::LookupSettled` for its generation, even if the lookup task
/// panics.
pub fn spawn_lookup_worker<S>(
    handle: &Handle,
    source: Arc<S>,
    events: Sender<AppEvent>,
) -> UiCommandSender
where
    S: ProfileSource + 'static,
{
    let (tx, mut rx) = mpsc::channel(COMMAND_BUFFER);
    let spawner = handle.clone();

    handle.spawn(async move {
        while let Some(command) = rx.recv().await {
            match command {
                UiCommand::Lookup { generation, login } => {
                    spawner.spawn(settle_lookup(
                        Arc::clone(&source),
                        events.clone(),
                        generation,
                        login,
                    ));
                }
            }
        }
        debug!("lookup worker stopped");
    });

    tx
}

async fn settle_lookup<S: ProfileSource>(
    source: Arc<S>,
    events: Sender<AppEvent>,
    generation: u64,
    login: String,
) {
    let events = scopeguard::guard(events, move |events| {
        let _ = events.send(AppEvent::LookupSettled {
            generation,
            outcome: LookupOutcome::Failed(FailureKind::Network),
        });
    });

    let outcome = lookup(source.as_ref(), &login).await;

    let events = ScopeGuard::into_inner(events);
    if events
        .send(AppEvent::LookupSettled {
            generation,
            outcome,
        })
        .is_err()
    {
        debug!(generation, "event loop gone before lookup settled");
    }
}
