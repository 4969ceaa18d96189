use crate::container::Container;
use crate::navigation::NavStack;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Runs the terminal UI until the user quits.
///
/// Fetches run on the runtime behind `container`; this loop only reads
/// state snapshots, so it never blocks on them.
pub fn run(container: Container, navigator: Arc<NavStack>, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(container, navigator);
    let events = EventHandler::new(tick_rate);

    loop {
        app.sync_route();
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Resize(..)) | Ok(AppEvent::Tick) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(app);
    drop(guard);
    Ok(())
}
