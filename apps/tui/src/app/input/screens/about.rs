use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_about_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Char('1') => {
            app.screen = AppScreen::Dashboard;
        }
        KeyCode::Char('2') => {
            app.screen = AppScreen::Globe;
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        _ => {}
    }
}
