use crate::data::DebrisObject;
use crate::domain::OrbitType;

/// Rendering caps out at 100 points regardless of collection size.
pub const MAX_RENDER_POINTS: usize = 100;

/// Per-object visualization record: a copy of the display fields plus
/// a synthesized surface position. The source data carries no ground
/// coordinates, so these are decorative, not orbital truth.
#[derive(Debug, Clone)]
pub struct RenderPoint {
    pub id: i64,
    pub name: String,
    pub orbit_type: Option<String>,
    pub altitude: Option<f64>,
    pub urgency_score: Option<f64>,
    pub lat: f64,
    pub lng: f64,
}

/// Takes the first `MAX_RENDER_POINTS` entries in collection order and
/// attaches synthesized positions. Truncation happens before synthesis,
/// so whatever ordering the pipeline applied upstream decides which
/// objects make it onto the globe.
pub fn synthesize_points(objects: &[DebrisObject]) -> Vec<RenderPoint> {
    objects
        .iter()
        .take(MAX_RENDER_POINTS)
        .map(|obj| {
            let orbit = obj.orbit_type.as_deref().and_then(OrbitType::parse);
            let (lat, lng) = synthesize_position(obj.id, orbit);
            RenderPoint {
                id: obj.id,
                name: obj.name.clone(),
                orbit_type: obj.orbit_type.clone(),
                altitude: obj.altitude,
                urgency_score: obj.urgency_score,
                lat,
                lng,
            }
        })
        .collect()
}

/// Plausible-looking surface position for an object, spread by orbit
/// class: LEO within +/-60 degrees latitude, MEO within +/-70, GEO and
/// anything unclassified near the equator. Longitude spans the full
/// range. Seeded by the object id, so a point keeps its position
/// across frames and camera interaction.
pub fn synthesize_position(id: i64, orbit: Option<OrbitType>) -> (f64, f64) {
    let lat_span = match orbit {
        Some(OrbitType::Leo) => 120.0,
        Some(OrbitType::Meo) => 140.0,
        _ => 30.0,
    };

    let lat = (unit_hash(id, "lat") - 0.5) * lat_span;
    let lng = (unit_hash(id, "lng") - 0.5) * 360.0;
    (lat, lng)
}

/// Deterministic stand-in for the unseeded RNG the data decorates
/// fine without: a multiply-by-31 byte fold over the id, salted per
/// axis, scaled into [0, 1).
fn unit_hash(id: i64, axis: &str) -> f64 {
    let key = format!("{id}:{axis}");
    let hash = key
        .bytes()
        .fold(0_u64, |acc, b| acc.wrapping_mul(31).wrapping_add(u64::from(b)));

    #[allow(clippy::cast_precision_loss)]
    let unit = (hash % 10_000) as f64 / 10_000.0;
    unit
}

/// Orthographic projection of a surface point onto the view plane.
/// The camera looks along +z; yaw spins the globe around its polar
/// axis, pitch tilts it toward the viewer. Returns (x, y, depth) on
/// the unit sphere; depth < 0 means the point is on the far side.
pub fn project_point(lat_deg: f64, lng_deg: f64, yaw_deg: f64, pitch_deg: f64) -> (f64, f64, f64) {
    let lat = lat_deg.to_radians();
    let lng = (lng_deg + yaw_deg).to_radians();
    let pitch = pitch_deg.to_radians();

    let x = lat.cos() * lng.sin();
    let y = lat.sin();
    let z = lat.cos() * lng.cos();

    let tilted_y = y.mul_add(pitch.cos(), -(z * pitch.sin()));
    let tilted_z = y.mul_add(pitch.sin(), z * pitch.cos());

    (x, tilted_y, tilted_z)
}

#[cfg(test)]
mod tests {
    use super::{
        project_point, synthesize_points, synthesize_position, MAX_RENDER_POINTS,
    };
    use crate::data::DebrisObject;
    use crate::domain::OrbitType;

    fn object(id: i64, orbit: &str) -> DebrisObject {
        DebrisObject {
            id,
            name: format!("OBJECT {id}"),
            object_type: Some("Debris".to_string()),
            orbit_type: Some(orbit.to_string()),
            altitude: Some(800.0),
            urgency_score: Some(50.0),
            tle_line1: None,
            tle_line2: None,
        }
    }

    #[test]
    fn positions_respect_per_class_latitude_ranges() {
        for id in 0..500 {
            let (lat, lng) = synthesize_position(id, Some(OrbitType::Leo));
            assert!((-60.0..=60.0).contains(&lat), "LEO lat out of range: {lat}");
            assert!((-180.0..=180.0).contains(&lng));

            let (lat, _) = synthesize_position(id, Some(OrbitType::Meo));
            assert!((-70.0..=70.0).contains(&lat), "MEO lat out of range: {lat}");

            let (lat, _) = synthesize_position(id, Some(OrbitType::Geo));
            assert!((-15.0..=15.0).contains(&lat), "GEO lat out of range: {lat}");

            let (lat, _) = synthesize_position(id, None);
            assert!((-15.0..=15.0).contains(&lat), "unclassified lat out of range: {lat}");
        }
    }

    #[test]
    fn positions_are_stable_per_id() {
        let first = synthesize_position(33757, Some(OrbitType::Leo));
        let second = synthesize_position(33757, Some(OrbitType::Leo));
        assert_eq!(first, second);
    }

    #[test]
    fn different_ids_spread_out() {
        let positions: Vec<(f64, f64)> = (1..=20)
            .map(|id| synthesize_position(id, Some(OrbitType::Leo)))
            .collect();

        let distinct_lngs = positions
            .iter()
            .map(|(_, lng)| format!("{lng:.3}"))
            .collect::<std::collections::HashSet<_>>();
        assert!(distinct_lngs.len() > 15, "longitudes collapsed: {positions:?}");
    }

    #[test]
    fn point_count_is_capped_at_one_hundred() {
        for count in [0_usize, 1, 100, 150] {
            let objects: Vec<DebrisObject> =
                (0..count).map(|i| object(i as i64, "LEO")).collect();
            let points = synthesize_points(&objects);
            assert_eq!(points.len(), count.min(MAX_RENDER_POINTS));
        }
    }

    #[test]
    fn truncation_is_a_prefix_take() {
        let objects: Vec<DebrisObject> =
            (0..150).map(|i| object(i, "LEO")).collect();
        let points = synthesize_points(&objects);

        assert_eq!(points[0].id, 0);
        assert_eq!(points[99].id, 99);
    }

    #[test]
    fn projection_splits_hemispheres() {
        // Facing the prime meridian: lng 0 is in front, lng 180 behind.
        let (_, _, front) = project_point(0.0, 0.0, 0.0, 0.0);
        let (_, _, back) = project_point(0.0, 180.0, 0.0, 0.0);
        assert!(front > 0.0);
        assert!(back < 0.0);

        // A half-turn of yaw swaps them.
        let (_, _, swapped) = project_point(0.0, 180.0, 180.0, 0.0);
        assert!(swapped > 0.0);
    }

    #[test]
    fn projection_stays_on_the_unit_sphere() {
        for lat in [-80.0, -15.0, 0.0, 45.0, 89.0] {
            for lng in [-170.0, -45.0, 0.0, 90.0] {
                let (x, y, z) = project_point(lat, lng, 33.0, -20.0);
                let norm = z.mul_add(z, x.mul_add(x, y * y));
                assert!((norm - 1.0).abs() < 1e-9);
            }
        }
    }
}
