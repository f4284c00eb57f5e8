use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::domain::{classify, ObjectType, OrbitType, Tier};

pub const fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Critical => Color::Red,
        Tier::High => Color::Rgb(255, 165, 0),
        Tier::Medium => Color::Yellow,
        Tier::Low => Color::Green,
    }
}

/// Urgency badge: the score with one decimal place plus the tier
/// label, both in the tier color. Unscored objects get a neutral N/A.
pub fn score_badge_spans(score: Option<f64>) -> Vec<Span<'static>> {
    score.map_or_else(
        || vec![Span::styled("N/A", Style::default().fg(Color::DarkGray))],
        |score| {
            let tier = classify(score);
            let color = tier_color(tier);
            vec![
                Span::styled(
                    format!("{score:.1} "),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(tier.label(), Style::default().fg(color)),
            ]
        },
    )
}

pub fn object_type_color(object_type: Option<&str>) -> Color {
    match object_type.and_then(ObjectType::parse) {
        Some(ObjectType::Debris) => Color::Red,
        Some(ObjectType::RocketBody) => Color::Rgb(255, 165, 0),
        // Payloads and anything unclassified share the blue bucket.
        Some(ObjectType::Satellite) | None => Color::Blue,
    }
}

pub fn orbit_color(orbit_type: Option<&str>) -> Color {
    match orbit_type.and_then(OrbitType::parse) {
        Some(OrbitType::Leo) => Color::Green,
        Some(OrbitType::Meo) => Color::Yellow,
        Some(OrbitType::Geo) | None => Color::Magenta,
    }
}

#[cfg(test)]
mod tests {
    use super::{score_badge_spans, tier_color};
    use crate::domain::{classify, Tier};
    use ratatui::style::Color;

    #[test]
    fn critical_badge_shows_one_decimal_and_label() {
        let spans = score_badge_spans(Some(150.0));
        assert_eq!(spans[0].content.as_ref(), "150.0 ");
        assert_eq!(spans[1].content.as_ref(), "Critical");
        assert_eq!(spans[0].style.fg, Some(Color::Red));
    }

    #[test]
    fn missing_score_renders_neutral_na() {
        let spans = score_badge_spans(None);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content.as_ref(), "N/A");
    }

    #[test]
    fn tier_colors_follow_the_badge_scale() {
        assert_eq!(tier_color(classify(100.0)), Color::Red);
        assert_eq!(tier_color(classify(85.0)), Color::Rgb(255, 165, 0));
        assert_eq!(tier_color(classify(65.0)), Color::Yellow);
        assert_eq!(tier_color(classify(10.0)), Color::Green);
        assert_eq!(tier_color(Tier::High), Color::Rgb(255, 165, 0));
    }
}
