use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::ui::widgets::badge::{object_type_color, orbit_color, score_badge_spans};
use crate::ui::widgets::popup::{centered_rect, ClearWidget};

pub fn render_object_details(app: &App, f: &mut Frame<'_>) {
    let area = f.area();

    let Some(obj) = app.details_id.and_then(|id| app.object_by_id(id)) else {
        let paragraph = Paragraph::new("Object no longer available")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, area);
        return;
    };

    let popup_area = centered_rect(70, 70, area);
    f.render_widget(ClearWidget, popup_area);

    let block = Block::default()
        .title(format!("Object Details: {}", obj.name))
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let mut lines = vec![
        detail_line("Name", &obj.name, Color::White),
        detail_line("ID", &obj.id.to_string(), Color::White),
        detail_line(
            "Type",
            obj.object_type.as_deref().unwrap_or("N/A"),
            object_type_color(obj.object_type.as_deref()),
        ),
        detail_line(
            "Orbit",
            obj.orbit_type.as_deref().unwrap_or("N/A"),
            orbit_color(obj.orbit_type.as_deref()),
        ),
        detail_line("Altitude (km)", &obj.altitude_text(), Color::White),
    ];

    let mut urgency_spans = vec![Span::styled(
        "Urgency: ",
        Style::default().fg(Color::Gray),
    )];
    urgency_spans.extend(score_badge_spans(obj.urgency_score));
    lines.push(TextLine::from(urgency_spans));

    if obj.tle_line1.is_some() || obj.tle_line2.is_some() {
        lines.push(TextLine::from(""));
        lines.push(TextLine::from(Span::styled(
            "TLE",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )));
        if let Some(line1) = &obj.tle_line1 {
            lines.push(TextLine::from(Span::styled(
                line1.clone(),
                Style::default().fg(Color::DarkGray),
            )));
        }
        if let Some(line2) = &obj.tle_line2 {
            lines.push(TextLine::from(Span::styled(
                line2.clone(),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled(
        "Press Esc or Enter to close",
        Style::default().fg(Color::Gray),
    )));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

fn detail_line(label: &str, value: &str, value_color: Color) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::Gray)),
        Span::styled(value.to_string(), Style::default().fg(value_color)),
    ])
}
