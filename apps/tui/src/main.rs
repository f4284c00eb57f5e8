mod app;
mod cli;
mod config;
mod data;
mod domain;
mod event;
mod geo;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let data_path = config::debris_data_path();
    if config::debug_enabled() {
        eprintln!("Using debris data from {}", data_path.display());
    }

    // Headless mode: print the stats and exit
    if args.headless || !is_terminal() {
        return event::run_headless(&data_path, args.json).await;
    }

    // Initialize application state; the data load runs in the
    // background while the UI comes up.
    let mut app = App::new();
    app.start_loading(&data_path);

    // Setup terminal
    let mut terminal = terminal::setup()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup(true, true);

    // Return the result
    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
