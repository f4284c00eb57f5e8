pub mod about;
pub mod dashboard;
pub mod globe;
pub mod help;
pub mod loading;
pub mod object_details;
pub mod objects;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};

/// Footer line of "key: action" hints shared by the screens.
pub(crate) fn key_hint_line(pairs: &[(&str, &str)]) -> TextLine<'static> {
    let mut spans = Vec::new();
    for (index, (key, action)) in pairs.iter().enumerate() {
        spans.push(Span::styled(
            (*key).to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        let suffix = if index + 1 < pairs.len() {
            format!(": {action} | ")
        } else {
            format!(": {action}")
        };
        spans.push(Span::styled(suffix, Style::default().fg(Color::Gray)));
    }
    TextLine::from(spans)
}
