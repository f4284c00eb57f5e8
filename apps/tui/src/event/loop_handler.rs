use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::path::Path;

use crate::app::{handle_input, App};
use crate::data::{load_debris, summarize, DebrisObject};
use crate::domain::{ObjectType, OrbitType};
use crate::ui;

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        // Update animations and poll the background data load
        app.update();

        // Draw the UI with better error context
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        // Handle events with improved error context
        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_))
                | Err(_) => {
                    // Ignore non-key events for now
                }
            }
        }
    }
    Ok(())
}

/// Run without a UI: load the data, print the summary, exit.
pub async fn run_headless(data_path: &Path, json: bool) -> Result<()> {
    let objects = load_debris(data_path).await?;
    let report = build_headless_report(&objects);

    if json {
        let json = serde_json::to_string_pretty(&report)?;
        println!("{json}");
    } else {
        render_headless_text(&report);
    }

    Ok(())
}

fn render_headless_text(report: &HeadlessReport) {
    println!("\nClearOrbit Debris Stats");
    println!("=======================");
    println!("Generated: {}", report.generated_at);
    println!("Total objects: {}", report.total);
    println!("Critical (score >= 100): {}", report.critical);
    println!("High risk (score >= 80): {}", report.high_risk);

    println!("\nObjects by Orbit:");
    for (orbit, count) in &report.by_orbit {
        println!("- {orbit}: {count}");
    }

    println!("\nObjects by Type:");
    for (object_type, count) in &report.by_type {
        println!("- {object_type}: {count}");
    }

    println!("\nTop Urgency:");
    for obj in &report.top_urgency {
        println!(
            "- {} | {} | {} | {}",
            obj.name, obj.orbit, obj.altitude, obj.urgency
        );
    }
}

fn build_headless_report(objects: &[DebrisObject]) -> HeadlessReport {
    let stats = summarize(objects);

    let by_orbit = vec![
        (OrbitType::Leo.as_str().to_string(), stats.leo),
        (OrbitType::Meo.as_str().to_string(), stats.meo),
        (OrbitType::Geo.as_str().to_string(), stats.geo),
    ];

    let by_type = vec![
        (ObjectType::Debris.as_str().to_string(), stats.debris),
        (
            ObjectType::RocketBody.as_str().to_string(),
            stats.rocket_bodies,
        ),
        (ObjectType::Satellite.as_str().to_string(), stats.satellites),
    ];

    let top_urgency = crate::data::sorted_by_urgency(objects)
        .into_iter()
        .take(5)
        .map(|obj| HeadlessObject {
            name: obj.name.clone(),
            orbit: obj
                .orbit_type
                .clone()
                .unwrap_or_else(|| "(none)".to_string()),
            altitude: obj.altitude_text(),
            urgency: obj.score_text(),
        })
        .collect();

    HeadlessReport {
        generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        total: stats.total,
        critical: stats.critical,
        high_risk: stats.high_risk,
        by_orbit,
        by_type,
        top_urgency,
    }
}

#[derive(serde::Serialize)]
struct HeadlessReport {
    generated_at: String,
    total: usize,
    critical: usize,
    high_risk: usize,
    by_orbit: Vec<(String, usize)>,
    by_type: Vec<(String, usize)>,
    top_urgency: Vec<HeadlessObject>,
}

#[derive(serde::Serialize)]
struct HeadlessObject {
    name: String,
    orbit: String,
    altitude: String,
    urgency: String,
}

#[cfg(test)]
mod tests {
    use super::build_headless_report;
    use crate::data::DebrisObject;

    #[test]
    fn report_ranks_top_urgency_and_counts_tiers() {
        let objects: Vec<DebrisObject> = [55.0, 150.0, 88.0]
            .iter()
            .enumerate()
            .map(|(i, &score)| DebrisObject {
                id: i as i64,
                name: format!("OBJECT {i}"),
                object_type: Some("Debris".to_string()),
                orbit_type: Some("LEO".to_string()),
                altitude: Some(700.0),
                urgency_score: Some(score),
                tle_line1: None,
                tle_line2: None,
            })
            .collect();

        let report = build_headless_report(&objects);
        assert_eq!(report.total, 3);
        assert_eq!(report.critical, 1);
        assert_eq!(report.high_risk, 2);
        assert_eq!(report.top_urgency[0].name, "OBJECT 1");
        assert_eq!(report.top_urgency[0].urgency, "150.0");
    }
}
