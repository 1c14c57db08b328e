use crate::config::Config;
use crate::github::GitHubClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::spawn_lookup_worker;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{info, warn};

/// Runs the interactive finder until the user quits.
///
/// Blocks the calling thread; lookups run on `handle`.
pub fn run(config: &Config, client: GitHubClient, handle: &Handle) -> io::Result<()> {
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(&config.ui);
    let events = EventHandler::new(tick_rate);
    info!(api = %client.base_url(), "interactive finder started");
    app.set_command_sender(spawn_lookup_worker(
        handle,
        Arc::new(client),
        events.sender(),
    ));

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => apply_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    info!("interactive finder stopped");
    Ok(())
}

/// Feeds one event into the app.
pub fn apply_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Tick => app.on_tick(),
        AppEvent::Resize => {}
        // Without input there is no way to quit from the keyboard.
        AppEvent::InputClosed => {
            warn!("terminal input closed, exiting");
            app.request_quit();
        }
        AppEvent::LookupSettled {
            generation,
            outcome,
        } => app.on_lookup_settled(generation, outcome),
    }
}
