use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::ui::screens::key_hint_line;
use crate::ui::widgets::badge::{object_type_color, orbit_color, score_badge_spans};
use crate::ui::widgets::globe::render_mini_globe;

const TOP_OBJECT_ROWS: usize = 10;

pub fn render_dashboard(app: &App, f: &mut Frame<'_>) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Title area
            Constraint::Length(5), // Stats cards
            Constraint::Min(8),    // Top objects table
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(2, 1)));

    render_title_section(app, f, main_layout[0]);
    render_stats_section(app, f, main_layout[1]);
    render_table_section(app, f, main_layout[2]);
    render_shortcuts(f, main_layout[3]);
}

fn render_title_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .title("== ClearOrbit Dashboard ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(title_block, area);

    let title_inner = area.inner(Margin::new(1, 1));
    let title_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(title_inner);

    let title_paragraph = Paragraph::new(Text::from(vec![
        TextLine::from(vec![
            Span::styled(
                "ClearOrbit ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Debris Dashboard",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        TextLine::from(Span::styled(
            "Monitoring and tracking of space debris objects",
            Style::default().fg(Color::Gray),
        )),
    ]))
    .alignment(Alignment::Left);
    f.render_widget(title_paragraph, title_chunks[0]);

    render_mini_globe(f, title_chunks[1], app.animation_counter);
}

fn render_stats_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    render_stat_card(
        f,
        cards[0],
        "Total Objects",
        app.stats.total,
        "Currently tracked",
        Color::Blue,
    );
    render_stat_card(
        f,
        cards[1],
        "Critical Risk",
        app.stats.critical,
        "Urgency >= 100",
        Color::Red,
    );
    render_stat_card(
        f,
        cards[2],
        "High Risk",
        app.stats.high_risk,
        "Urgency >= 80",
        Color::Rgb(255, 165, 0),
    );
}

fn render_stat_card(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    value: usize,
    caption: &str,
    color: Color,
) {
    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let lines = vec![
        TextLine::from(Span::styled(
            value.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(
            caption.to_string(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_table_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Top 10 High Urgency Debris")
        .title_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    if app.sorted.is_empty() {
        let paragraph = Paragraph::new("No debris data available")
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("ID"),
        Cell::from("Name"),
        Cell::from("Type"),
        Cell::from("Orbit"),
        Cell::from("Altitude (km)"),
        Cell::from("Urgency Score"),
    ])
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows = app.sorted.iter().take(TOP_OBJECT_ROWS).map(|obj| {
        Row::new(vec![
            Cell::from(obj.id.to_string()),
            Cell::from(obj.name.clone()).style(Style::default().fg(Color::White)),
            Cell::from(
                obj.object_type
                    .clone()
                    .unwrap_or_else(|| "N/A".to_string()),
            )
            .style(Style::default().fg(object_type_color(obj.object_type.as_deref()))),
            Cell::from(obj.orbit_type.clone().unwrap_or_else(|| "N/A".to_string()))
                .style(Style::default().fg(orbit_color(obj.orbit_type.as_deref()))),
            Cell::from(obj.altitude_text()),
            Cell::from(TextLine::from(score_badge_spans(obj.urgency_score))),
        ])
    });

    let widths = [
        Constraint::Length(7),
        Constraint::Min(20),
        Constraint::Length(12),
        Constraint::Length(7),
        Constraint::Length(14),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1);

    f.render_widget(table, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let hints = key_hint_line(&[
        ("o", "Objects table"),
        ("2", "Globe"),
        ("3", "About"),
        ("Space", "Pause"),
        ("F1", "Help"),
        ("q", "Quit"),
    ]);
    let paragraph = Paragraph::new(hints).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
