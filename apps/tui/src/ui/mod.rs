// UI module for clearorbit-tui
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::state::{AppScreen, LoadState};
use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &mut App, f: &mut Frame<'_>) {
    if app.screen == AppScreen::About {
        // The about page is static and renders even while the data
        // load is still pending or has failed.
        screens::about::render_about(f);
    } else if app.load_state == LoadState::Loading {
        screens::loading::render_loading(app, f);
    } else if let LoadState::Failed(message) = &app.load_state {
        screens::loading::render_load_error(message, f);
    } else {
        match app.screen {
            AppScreen::Dashboard => screens::dashboard::render_dashboard(app, f),
            AppScreen::Objects => screens::objects::render_objects_view(app, f),
            AppScreen::Globe => screens::globe::render_globe_view(app, f),
            AppScreen::ObjectDetails => screens::object_details::render_object_details(app, f),
            AppScreen::About => {}
        }
    }

    if app.show_help {
        screens::help::render_help_popup(f);
    }
}
