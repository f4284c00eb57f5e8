use serde::Deserialize;
use std::cmp::Ordering;

/// One record from debris.json, produced by the external tracking
/// pipeline. Every field except `id` and `name` may be missing; the
/// UI falls back to "N/A" rather than rejecting the entry.
#[derive(Debug, Clone, Deserialize)]
pub struct DebrisObject {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub object_type: Option<String>,
    #[serde(default)]
    pub orbit_type: Option<String>,
    #[serde(default)]
    pub altitude: Option<f64>,
    #[serde(default)]
    pub urgency_score: Option<f64>,
    #[serde(default)]
    pub tle_line1: Option<String>,
    #[serde(default)]
    pub tle_line2: Option<String>,
}

impl DebrisObject {
    /// Altitude in kilometers as display text.
    pub fn altitude_text(&self) -> String {
        self.altitude
            .map_or_else(|| "N/A".to_string(), |altitude| format!("{altitude:.0}"))
    }

    /// Urgency score with one decimal place, or "N/A".
    pub fn score_text(&self) -> String {
        self.urgency_score
            .map_or_else(|| "N/A".to_string(), |score| format!("{score:.1}"))
    }
}

/// Copy of the collection ordered by urgency score, highest first.
/// Entries without a score sink to the bottom.
pub fn sorted_by_urgency(objects: &[DebrisObject]) -> Vec<DebrisObject> {
    let mut sorted = objects.to_vec();
    sorted.sort_by(|a, b| {
        let a_score = a.urgency_score.unwrap_or(f64::NEG_INFINITY);
        let b_score = b.urgency_score.unwrap_or(f64::NEG_INFINITY);
        b_score.partial_cmp(&a_score).unwrap_or(Ordering::Equal)
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::{sorted_by_urgency, DebrisObject};

    fn object(id: i64, score: Option<f64>) -> DebrisObject {
        DebrisObject {
            id,
            name: format!("OBJECT {id}"),
            object_type: None,
            orbit_type: None,
            altitude: None,
            urgency_score: score,
            tle_line1: None,
            tle_line2: None,
        }
    }

    #[test]
    fn sorts_highest_urgency_first() {
        let objects = vec![
            object(1, Some(42.0)),
            object(2, Some(110.5)),
            object(3, Some(87.3)),
        ];

        let sorted = sorted_by_urgency(&objects);
        let ids: Vec<i64> = sorted.iter().map(|obj| obj.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn missing_scores_sink_to_the_bottom() {
        let objects = vec![object(1, None), object(2, Some(5.0))];

        let sorted = sorted_by_urgency(&objects);
        assert_eq!(sorted[0].id, 2);
        assert_eq!(sorted[1].id, 1);
    }

    #[test]
    fn display_text_falls_back_to_na() {
        let obj = object(7, None);
        assert_eq!(obj.altitude_text(), "N/A");
        assert_eq!(obj.score_text(), "N/A");

        let scored = object(8, Some(150.0));
        assert_eq!(scored.score_text(), "150.0");
    }
}
