use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

mod about;
mod dashboard;
mod globe;
mod help;
mod object_details;
mod objects;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    // Text entry owns the keyboard while the search prompt is open.
    if app.screen == AppScreen::Objects && app.search_active {
        objects::handle_objects_input(app, key);
        return;
    }

    if help::handle_help_toggle(app, key) {
        return;
    }

    if help::handle_animation_toggle(app, key) {
        return;
    }

    match app.screen {
        AppScreen::Dashboard => dashboard::handle_dashboard_input(app, key),
        AppScreen::Objects => objects::handle_objects_input(app, key),
        AppScreen::Globe => globe::handle_globe_input(app, key),
        AppScreen::ObjectDetails => object_details::handle_object_details_input(app, key),
        AppScreen::About => about::handle_about_input(app, key),
    }
}
