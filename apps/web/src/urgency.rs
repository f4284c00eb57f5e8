/// Badge tier label for an urgency score. Boundaries are inclusive on
/// the lower edge of each tier; Critical is open-ended.
pub fn badge_tier(score: f64) -> &'static str {
    if score >= 100.0 {
        "Critical"
    } else if score >= 80.0 {
        "High"
    } else if score >= 60.0 {
        "Medium"
    } else {
        "Low"
    }
}

pub fn badge_color_name(score: f64) -> &'static str {
    if score >= 100.0 {
        "red"
    } else if score >= 80.0 {
        "orange"
    } else if score >= 60.0 {
        "yellow"
    } else {
        "green"
    }
}

/// Globe point color, on the coarse scale. Deliberately distinct from
/// the badge thresholds; the two scales serve different visuals and
/// must not be unified.
pub fn point_color_name(score: Option<f64>) -> Option<&'static str> {
    let score = score?;
    Some(if score > 70.0 {
        "red"
    } else if score >= 40.0 {
        "orange"
    } else {
        "green"
    })
}

#[cfg(test)]
mod tests {
    use super::{badge_color_name, badge_tier, point_color_name};

    #[test]
    fn badge_boundaries_are_inclusive_below() {
        assert_eq!(badge_tier(100.0), "Critical");
        assert_eq!(badge_tier(99.999), "High");
        assert_eq!(badge_tier(80.0), "High");
        assert_eq!(badge_tier(60.0), "Medium");
        assert_eq!(badge_tier(59.9), "Low");
        assert_eq!(badge_tier(2.0e6), "Critical");
    }

    #[test]
    fn globe_scale_boundaries() {
        assert_eq!(point_color_name(Some(70.5)), Some("red"));
        assert_eq!(point_color_name(Some(70.0)), Some("orange"));
        assert_eq!(point_color_name(Some(40.0)), Some("orange"));
        assert_eq!(point_color_name(Some(39.9)), Some("green"));
        assert_eq!(point_color_name(None), None);
    }

    #[test]
    fn scales_never_cross_contaminate() {
        // Score 75: red point on the globe, but only a High/orange badge.
        assert_eq!(point_color_name(Some(75.0)), Some("red"));
        assert_eq!(badge_tier(75.0), "High");
        assert_eq!(badge_color_name(75.0), "orange");
    }
}
