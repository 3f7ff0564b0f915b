use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::api::FetchCompletion;

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    Resize(u16, u16),
    /// A search request resolved (successfully or not).
    StoriesFetched(FetchCompletion),
}

impl From<FetchCompletion> for AppEvent {
    fn from(completion: FetchCompletion) -> Self {
        AppEvent::StoriesFetched(completion)
    }
}

/// Funnels terminal input, ticks and fetch completions into one queue.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::Builder::new()
            .name("terminal-input".to_string())
            .spawn(move || input_loop(event_tx, tick_rate))
            .ok();

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

fn input_loop(event_tx: Sender<AppEvent>, tick_rate: Duration) {
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        let forwarded = match event::poll(timeout) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                Ok(Event::Paste(text)) => event_tx.send(AppEvent::Paste(text)),
                Ok(Event::Resize(cols, rows)) => event_tx.send(AppEvent::Resize(cols, rows)),
                Ok(_) => Ok(()),
                Err(err) => {
                    tracing::error!("terminal read failed: {}", err);
                    break;
                }
            },
            Ok(false) => Ok(()),
            Err(err) => {
                tracing::error!("terminal poll failed: {}", err);
                break;
            }
        };
        if forwarded.is_err() {
            // UI loop is gone.
            break;
        }

        if last_tick.elapsed() >= tick_rate {
            if event_tx.send(AppEvent::Tick).is_err() {
                break;
            }
            last_tick = Instant::now();
        }
    }
}
