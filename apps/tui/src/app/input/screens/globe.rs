use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

const YAW_STEP: f64 = 6.0;
const PITCH_STEP: f64 = 4.0;

pub fn handle_globe_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Char('1') => {
            app.screen = AppScreen::Dashboard;
        }
        KeyCode::Char('3') => {
            app.screen = AppScreen::About;
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Left => app.globe.rotate(YAW_STEP, 0.0),
        KeyCode::Right => app.globe.rotate(-YAW_STEP, 0.0),
        KeyCode::Up => app.globe.rotate(0.0, PITCH_STEP),
        KeyCode::Down => app.globe.rotate(0.0, -PITCH_STEP),
        KeyCode::Char('+' | '=') => app.globe.zoom_in(),
        KeyCode::Char('-') => app.globe.zoom_out(),
        KeyCode::Char('a') => {
            app.globe.auto_rotate = !app.globe.auto_rotate;
        }
        KeyCode::Tab | KeyCode::Char('n') => {
            if !app.points.is_empty() {
                let next = app
                    .globe
                    .selected
                    .map_or(0, |index| wrap_increment(index, app.points.len()));
                app.globe.selected = Some(next);
            }
        }
        KeyCode::Char('p') => {
            if !app.points.is_empty() {
                let prev = app
                    .globe
                    .selected
                    .map_or(0, |index| wrap_decrement(index, app.points.len()));
                app.globe.selected = Some(prev);
            }
        }
        KeyCode::Enter => {
            let selected_id = app
                .globe
                .selected
                .and_then(|index| app.points.get(index))
                .map(|point| point.id);
            if let Some(id) = selected_id {
                app.open_details(id, AppScreen::Globe);
            }
        }
        _ => {}
    }
}
