use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Screen, GRID_COLUMNS};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
        app.request_quit();
        return;
    }

    let in_grid = matches!(app.screen(), Screen::Categories(_));
    let row = if in_grid { GRID_COLUMNS as isize } else { 1 };

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-row),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(row),
        KeyCode::Left | KeyCode::Char('h') if in_grid => app.move_cursor(-1),
        KeyCode::Right | KeyCode::Char('l') if in_grid => app.move_cursor(1),
        KeyCode::Enter => app.activate(),
        KeyCode::Char('r') => app.retry(),
        KeyCode::Char('c') => app.open_categories(),
        KeyCode::Esc | KeyCode::Backspace => app.back(),
        _ => {}
    }
}
