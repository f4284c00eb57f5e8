use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::screens::key_hint_line;

pub fn render_about(f: &mut Frame<'_>) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(1)])
        .split(f.area().inner(Margin::new(2, 1)));

    let block = Block::default()
        .title("== About ClearOrbit ==")
        .title_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let heading = |text: &'static str| {
        TextLine::from(Span::styled(
            text,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let bullet = |color: Color, title: &'static str, body: &'static str| {
        TextLine::from(vec![
            Span::styled("● ", Style::default().fg(color)),
            Span::styled(
                format!("{title}: "),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(body, Style::default().fg(Color::Gray)),
        ])
    };

    let lines = vec![
        heading("Our Mission"),
        TextLine::from(
            "ClearOrbit tracks and monitors space debris to support the safety of \
             active satellites and future missions. It provides data and visualization \
             tools for collision avoidance and space traffic management decisions.",
        ),
        TextLine::from(""),
        heading("What We Track"),
        bullet(
            Color::Blue,
            "Active Satellites",
            "Operational spacecraft from space agencies and commercial entities",
        ),
        bullet(
            Color::Red,
            "Space Debris",
            "Non-functional objects including fragments from collisions and explosions",
        ),
        bullet(
            Color::Green,
            "Rocket Bodies",
            "Spent rocket stages and boosters left in orbit after missions",
        ),
        bullet(
            Color::Magenta,
            "Mission Objects",
            "Objects released during missions such as lens covers and deployment mechanisms",
        ),
        TextLine::from(""),
        heading("Data Sources"),
        bullet(
            Color::Cyan,
            "CelesTrak",
            "Two-Line Element (TLE) data for orbital tracking",
        ),
        bullet(
            Color::Cyan,
            "SGP4 Propagation",
            "Position and velocity calculations",
        ),
        bullet(
            Color::Cyan,
            "Space Agencies",
            "Official reports and collision assessments",
        ),
        bullet(
            Color::Cyan,
            "Ground-based Radar",
            "Tracking and monitoring observations",
        ),
        TextLine::from(""),
        heading("Key Features"),
        bullet(
            Color::Yellow,
            "Globe View",
            "Interactive globe with risk-based color coding",
        ),
        bullet(
            Color::Yellow,
            "Urgency Scoring",
            "Dashboard with tiered risk classification per object",
        ),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "This dashboard renders a pre-computed snapshot; scoring and propagation \
             happen in the upstream pipeline.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, main_layout[0]);

    let hints = key_hint_line(&[("1", "Dashboard"), ("2", "Globe"), ("q", "Quit")]);
    let footer = Paragraph::new(hints).alignment(Alignment::Center);
    f.render_widget(footer, main_layout[1]);
}
