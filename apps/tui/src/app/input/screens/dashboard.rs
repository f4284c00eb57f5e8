use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_dashboard_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('2') | KeyCode::Char('g') => {
            app.screen = AppScreen::Globe;
        }
        KeyCode::Char('3') => {
            app.screen = AppScreen::About;
        }
        KeyCode::Char('o') | KeyCode::Enter => {
            app.screen = AppScreen::Objects;
            app.selected_object_index = 0;
        }
        _ => {}
    }
}
