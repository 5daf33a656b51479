use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_paste};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;

/// Runs the shopping list screen until the user quits.
///
/// Single-threaded: draw, wait for one event, reduce, repeat.
pub fn run(config: Config) -> io::Result<()> {
    let poll_interval = config.poll_interval();
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(config.ui);
    let events = EventHandler::new();
    tracing::info!("shopping list started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(poll_interval)? {
            Some(AppEvent::Key(key)) => handle_key(&mut app, key),
            Some(AppEvent::Paste(text)) => handle_paste(&mut app, &text),
            Some(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "terminal resized");
            }
            None => {}
        }
    }

    drop(guard);
    tracing::info!(items = app.state().items.len(), "shopping list closed");
    Ok(())
}
