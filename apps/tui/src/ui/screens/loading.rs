use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use throbber_widgets_tui::Throbber;

use crate::app::App;
use crate::ui::widgets::popup::centered_rect;

pub fn render_loading(app: &mut App, f: &mut Frame<'_>) {
    let area = f.area();

    let block = Block::default()
        .title("ClearOrbit")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(block, area);

    let spinner_area = centered_rect(40, 10, area);
    let throbber = Throbber::default()
        .label("Loading debris data...")
        .style(Style::default().fg(Color::Cyan))
        .throbber_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    f.render_stateful_widget(throbber, spinner_area, &mut app.throbber_state);
}

/// Terminal failure banner; there is no retry path, only a restart.
pub fn render_load_error(message: &str, f: &mut Frame<'_>) {
    let area = f.area();

    let block = Block::default()
        .title("ClearOrbit")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    f.render_widget(block, area);

    let banner_area = centered_rect(60, 30, area);
    let banner = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let lines = vec![
        TextLine::from(vec![
            Span::styled(
                "Error: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(message.to_string(), Style::default().fg(Color::Red)),
        ]),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Restart the application to try again.",
            Style::default().fg(Color::Gray),
        )),
        TextLine::from(Span::styled(
            "Press q to quit, 3 for the about page.",
            Style::default().fg(Color::Gray),
        )),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(banner)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, banner_area);
}
