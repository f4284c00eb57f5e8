use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_objects_input(app: &mut App, key: KeyCode) {
    if app.search_active {
        match key {
            KeyCode::Esc => app.clear_search(),
            KeyCode::Enter => {
                // Keep the filter, release the keyboard.
                app.search_active = false;
            }
            KeyCode::Backspace => {
                app.search_input.pop();
                app.update_search_filter();
            }
            KeyCode::Char(ch) => {
                app.search_input.push(ch);
                app.update_search_filter();
            }
            _ => {}
        }
        return;
    }

    let total_rows = app.visible_rows().len();

    match key {
        KeyCode::Esc => {
            if app.search_input.is_empty() {
                app.screen = AppScreen::Dashboard;
            } else {
                app.clear_search();
            }
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('/') => {
            app.search_active = true;
            app.search_input.clear();
            app.update_search_filter();
        }
        KeyCode::Enter => {
            if let Some(id) = app.selected_object().map(|obj| obj.id) {
                app.open_details(id, AppScreen::Objects);
            }
        }
        KeyCode::Up => {
            if app.selected_object_index > 0 {
                app.selected_object_index -= 1;
            }
        }
        KeyCode::Down => {
            if total_rows > 0 && app.selected_object_index + 1 < total_rows {
                app.selected_object_index += 1;
            }
        }
        KeyCode::PageUp => {
            if app.selected_object_index > 0 {
                app.selected_object_index = app.selected_object_index.saturating_sub(5);
            }
        }
        KeyCode::PageDown => {
            if total_rows > 0 {
                let new_index = app.selected_object_index + 5;
                app.selected_object_index = if new_index >= total_rows {
                    total_rows - 1
                } else {
                    new_index
                };
            }
        }
        KeyCode::Home => {
            app.selected_object_index = 0;
        }
        KeyCode::End => {
            if total_rows > 0 {
                app.selected_object_index = total_rows - 1;
            }
        }
        _ => {}
    }
}
