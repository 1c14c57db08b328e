use crossterm::event::{self, Event, KeyEvent};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};
use tracing::error;

use crate::search::LookupOutcome;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    /// Terminal size changed; the next frame picks up the new area.
    Resize,
    /// The terminal input thread stopped; no more keys will arrive.
    InputClosed,
    /// A lookup queued by the app finished.
    LookupSettled {
        generation: u64,
        outcome: LookupOutcome,
    },
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                let forwarded = match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                        Ok(Event::Resize(_, _)) => event_tx.send(AppEvent::Resize),
                        Ok(_) => Ok(()),
                        Err(err) => {
                            error!(error = %err, "terminal event read failed");
                            let _ = event_tx.send(AppEvent::InputClosed);
                            break;
                        }
                    },
                    Ok(false) => Ok(()),
                    Err(err) => {
                        error!(error = %err, "terminal event poll failed");
                        let _ = event_tx.send(AppEvent::InputClosed);
                        break;
                    }
                };
                if forwarded.is_err() {
                    // Event loop is gone.
                    break;
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
