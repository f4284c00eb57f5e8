use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::widgets::popup::{centered_rect, ClearWidget};

pub fn render_help_popup(f: &mut Frame<'_>) {
    let popup_area = centered_rect(80, 80, f.area());
    f.render_widget(ClearWidget, popup_area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let help_paragraph = Paragraph::new(Text::from(build_help_lines()))
        .block(help_block)
        .wrap(Wrap { trim: true });

    f.render_widget(help_paragraph, popup_area);

    let hint = Paragraph::new(Text::from(TextLine::from(vec![Span::styled(
        "Press F1 or Esc to close",
        Style::default().fg(Color::Gray),
    )])))
    .alignment(Alignment::Center);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };

    f.render_widget(hint, hint_area);
}

fn key_line(key: &'static str, action: &'static str) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(
            format!("  {key}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" - {action}"), Style::default()),
    ])
}

fn build_help_lines() -> Vec<TextLine<'static>> {
    let mut lines = vec![
        TextLine::from(vec![Span::styled(
            "ClearOrbit Debris Dashboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]),
        TextLine::from(""),
        TextLine::from(
            "Browse pre-computed space-debris tracking data: summary statistics, \
             a high-urgency table and an interactive globe.",
        ),
        TextLine::from(""),
        TextLine::from(vec![Span::styled(
            "Keyboard Shortcuts:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        key_line("F1 / ?", "Toggle this help popup"),
        key_line("1 / 2 / 3", "Dashboard / Globe / About"),
        key_line("o", "Objects table (from the dashboard)"),
        key_line("/", "Fuzzy search in the objects table"),
        key_line("Arrows", "Navigate tables, rotate the globe"),
        key_line("+ / -", "Zoom the globe"),
        key_line("Tab / n / p", "Cycle through globe points"),
        key_line("Enter", "Open details for the selection"),
        key_line("a", "Toggle globe auto-rotation"),
        key_line("Space", "Pause/resume animations"),
        key_line("Esc", "Go back / close popups"),
        key_line("q", "Quit application"),
        TextLine::from(""),
        TextLine::from(vec![Span::styled(
            "Risk Scales:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        TextLine::from("  Badge tiers: Critical >= 100, High >= 80, Medium >= 60, Low below"),
        TextLine::from("  Globe colors: red > 70, orange 40-70, green < 40"),
        TextLine::from(""),
        TextLine::from(vec![Span::styled(
            "CLI Options:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
    ];

    let help_text = crate::cli::CliArgs::help_text();
    for line in help_text.lines() {
        if line.starts_with("Usage") || line.starts_with("Options") || line.trim().is_empty() {
            continue;
        }
        lines.push(TextLine::from(line.to_string()));
    }

    lines
}
