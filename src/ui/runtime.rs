use crate::api::{FetchOrchestrator, StoriesClient};
use crate::config::Config;
use crate::ui::app::{App, SearchTerm};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;

/// Runs the interactive UI until the user quits.
///
/// Fetches run on `runtime`; everything else happens on this thread.
pub fn run(config: &Config, search_term: SearchTerm, runtime: Handle) -> io::Result<()> {
    let client = StoriesClient::new(&config.api).map_err(io::Error::other)?;

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let fetcher = FetchOrchestrator::new(
        client,
        runtime,
        events.sender(),
        config.api.discard_stale_responses,
    );
    let mut app = App::new(search_term, fetcher);
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::StoriesFetched(completion)) => app.on_fetch_completed(completion),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("ui closed");
    Ok(())
}
