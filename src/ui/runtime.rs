use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::layout::body_rect;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::layout::Rect;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};
use tracing::info;

/// Fast enough for the page-turn and reveal transitions to read as motion.
const TICK_RATE: Duration = Duration::from_millis(100);

pub fn run(mut app: App, shutdown: ShutdownHandle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(TICK_RATE, shutdown.clone());
    let started = Instant::now();

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        resize(&mut app, cols, rows);
    }
    info!("ui: started");

    loop {
        app.on_tick(started.elapsed());
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() || shutdown.is_shutting_down() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(event) => handle_event(&mut app, event, started.elapsed()),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    info!("ui: stopped");
    Ok(())
}

/// Bring the clock up to `now` first so timers started by the event are
/// measured from when it arrived.
fn handle_event(app: &mut App, event: AppEvent, now: Duration) {
    app.on_tick(now);
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Resize(cols, rows) => resize(app, cols, rows),
        AppEvent::Tick => {}
    }
}

fn resize(app: &mut App, cols: u16, rows: u16) {
    let body = body_rect(Rect {
        x: 0,
        y: 0,
        width: cols,
        height: rows,
    });
    app.on_resize(body.height.max(1));
}
