use serde::Serialize;

use super::models::DebrisObject;
use crate::domain::{classify, ObjectType, OrbitType, Tier};

/// Derived counts for the dashboard header and the headless report.
/// Critical and high-risk counts come from the badge tiers, so the
/// thresholds cannot drift apart from the badge rendering.
#[derive(Debug, Default, Clone, Serialize)]
pub struct DebrisStats {
    pub total: usize,
    pub critical: usize,
    pub high_risk: usize,
    pub leo: usize,
    pub meo: usize,
    pub geo: usize,
    pub debris: usize,
    pub rocket_bodies: usize,
    pub satellites: usize,
}

pub fn summarize(objects: &[DebrisObject]) -> DebrisStats {
    let mut stats = DebrisStats {
        total: objects.len(),
        ..DebrisStats::default()
    };

    for obj in objects {
        if let Some(score) = obj.urgency_score {
            match classify(score) {
                Tier::Critical => {
                    stats.critical += 1;
                    stats.high_risk += 1;
                }
                Tier::High => stats.high_risk += 1,
                Tier::Medium | Tier::Low => {}
            }
        }

        match obj.orbit_type.as_deref().and_then(OrbitType::parse) {
            Some(OrbitType::Leo) => stats.leo += 1,
            Some(OrbitType::Meo) => stats.meo += 1,
            Some(OrbitType::Geo) => stats.geo += 1,
            None => {}
        }

        match obj.object_type.as_deref().and_then(ObjectType::parse) {
            Some(ObjectType::Debris) => stats.debris += 1,
            Some(ObjectType::RocketBody) => stats.rocket_bodies += 1,
            Some(ObjectType::Satellite) => stats.satellites += 1,
            None => {}
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::summarize;
    use crate::data::models::DebrisObject;

    fn object(id: i64, orbit: &str, score: f64) -> DebrisObject {
        DebrisObject {
            id,
            name: format!("OBJECT {id}"),
            object_type: Some("Debris".to_string()),
            orbit_type: Some(orbit.to_string()),
            altitude: Some(780.0),
            urgency_score: Some(score),
            tle_line1: None,
            tle_line2: None,
        }
    }

    #[test]
    fn empty_input_yields_all_zeros() {
        let stats = summarize(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.critical, 0);
        assert_eq!(stats.high_risk, 0);
    }

    #[test]
    fn critical_objects_also_count_as_high_risk() {
        let objects = vec![
            object(1, "LEO", 150.0),
            object(2, "LEO", 85.0),
            object(3, "MEO", 42.0),
        ];

        let stats = summarize(&objects);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.critical, 1);
        assert_eq!(stats.high_risk, 2);
        assert_eq!(stats.leo, 2);
        assert_eq!(stats.meo, 1);
        assert_eq!(stats.geo, 0);
    }

    #[test]
    fn unscored_and_unclassified_entries_count_toward_total_only() {
        let mut obj = object(9, "HEO", 0.0);
        obj.urgency_score = None;
        obj.object_type = None;

        let stats = summarize(&[obj]);
        assert_eq!(stats.total, 1);
        assert_eq!(stats.high_risk, 0);
        assert_eq!(stats.leo + stats.meo + stats.geo, 0);
        assert_eq!(stats.debris + stats.rocket_bodies + stats.satellites, 0);
    }
}
