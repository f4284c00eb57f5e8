use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::domain::RiskBand;
use crate::geo::MAX_RENDER_POINTS;
use crate::ui::screens::key_hint_line;
use crate::ui::widgets::charts::render_orbit_distribution;
use crate::ui::widgets::globe::{band_color, render_globe};

pub fn render_globe_view(app: &App, f: &mut Frame<'_>) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(1)])
        .split(f.area().inner(Margin::new(1, 0)));

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(main_layout[0]);

    render_globe_panel(app, f, content[0]);
    render_side_panel(app, f, content[1]);
    render_shortcuts(app, f, main_layout[1]);
}

fn render_globe_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Earth View")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.points.is_empty() {
        let paragraph = Paragraph::new("No debris objects to display")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    }

    let panel = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(6)])
        .split(inner);

    let overlay = TextLine::from(vec![
        Span::styled(
            format!("Showing {} of {} objects", app.points.len(), app.stats.total),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("  (cap {MAX_RENDER_POINTS})"),
            Style::default().fg(Color::Gray),
        ),
    ]);
    f.render_widget(Paragraph::new(overlay).alignment(Alignment::Left), panel[0]);

    render_globe(f, panel[1], &app.points, &app.globe);
}

fn render_side_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let panels = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(9),
            Constraint::Min(8),
        ])
        .split(area);

    render_legend(f, panels[0]);
    render_orbit_distribution(&app.stats, f, panels[1]);
    render_selection_panel(app, f, panels[2]);
}

fn render_legend(f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Risk Level Legend")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let lines: Vec<TextLine<'_>> = [RiskBand::High, RiskBand::Medium, RiskBand::Low]
        .iter()
        .map(|band| {
            TextLine::from(vec![
                Span::styled("● ", Style::default().fg(band_color(*band))),
                Span::styled(band.label(), Style::default().fg(Color::White)),
                Span::styled(
                    format!("  {}", band.bounds()),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(Text::from(lines)).block(block);
    f.render_widget(paragraph, area);
}

/// Non-blocking detail panel for the point under the selection cursor.
fn render_selection_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Selected Object")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let point = app
        .globe
        .selected
        .and_then(|index| app.points.get(index));

    let Some(point) = point else {
        let paragraph = Paragraph::new("Tab to cycle through points, Enter for full details")
            .block(block)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
        return;
    };

    let altitude = point
        .altitude
        .map_or_else(|| "N/A".to_string(), |altitude| format!("{altitude:.0} km"));
    let urgency = point
        .urgency_score
        .map_or_else(|| "N/A".to_string(), |score| format!("{score:.1}"));

    let lines = vec![
        TextLine::from(vec![
            Span::styled("Name: ", Style::default().fg(Color::Gray)),
            Span::styled(
                point.name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        TextLine::from(vec![
            Span::styled("ID: ", Style::default().fg(Color::Gray)),
            Span::styled(point.id.to_string(), Style::default().fg(Color::White)),
        ]),
        TextLine::from(vec![
            Span::styled("Orbit: ", Style::default().fg(Color::Gray)),
            Span::styled(
                point
                    .orbit_type
                    .clone()
                    .unwrap_or_else(|| "N/A".to_string()),
                Style::default().fg(Color::White),
            ),
        ]),
        TextLine::from(vec![
            Span::styled("Altitude: ", Style::default().fg(Color::Gray)),
            Span::styled(altitude, Style::default().fg(Color::White)),
        ]),
        TextLine::from(vec![
            Span::styled("Urgency: ", Style::default().fg(Color::Gray)),
            Span::styled(
                urgency,
                Style::default().fg(crate::ui::widgets::globe::point_color(
                    point.urgency_score,
                )),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_shortcuts(app: &App, f: &mut Frame<'_>, area: Rect) {
    let auto = if app.globe.auto_rotate {
        "Auto-rotate on"
    } else {
        "Auto-rotate off"
    };

    let hints = key_hint_line(&[
        ("←→↑↓", "Rotate"),
        ("+/-", "Zoom"),
        ("Tab", "Select point"),
        ("Enter", "Details"),
        ("a", auto),
        ("1", "Dashboard"),
        ("q", "Quit"),
    ]);
    let paragraph = Paragraph::new(hints).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
