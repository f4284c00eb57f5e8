/// Rendering caps out at 100 points regardless of collection size.
pub const MAX_RENDER_POINTS: usize = 100;

const VIEWPORT_PADDING: f64 = 40.0;
const VIEWPORT_MAX_WIDTH: f64 = 900.0;
const VIEWPORT_MAX_HEIGHT: f64 = 650.0;
const VIEWPORT_ASPECT: f64 = 0.75;

/// Globe viewport in pixels for a given container width: the width
/// loses the container padding and caps at 900, the height is 3:4 of
/// the width capped at 650.
pub fn viewport_size(container_width: f64) -> (f64, f64) {
    let width = (container_width - VIEWPORT_PADDING).min(VIEWPORT_MAX_WIDTH).max(0.0);
    let height = (width * VIEWPORT_ASPECT).min(VIEWPORT_MAX_HEIGHT);
    (width, height)
}

/// Converts a pixel extent into terminal cells, given the window size
/// the whole cell grid spans. Never returns zero for a non-empty grid.
pub fn cells_for_px(px: f64, window_px: f64, grid_cells: u16) -> u16 {
    if grid_cells == 0 || window_px <= 0.0 {
        return 0;
    }

    let px_per_cell = window_px / f64::from(grid_cells);
    let cells = (px / px_per_cell).round();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cells = cells.clamp(1.0, f64::from(grid_cells)) as u16;
    cells
}

pub fn rendered_count(total: usize) -> usize {
    total.min(MAX_RENDER_POINTS)
}

/// Camera state for the globe: yaw spins the polar axis, pitch tilts
/// toward the viewer, zoom scales the projected radius.
#[derive(Clone, Copy)]
pub struct Camera {
    pub yaw: f64,
    pub pitch: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: -18.0,
            zoom: 1.0,
        }
    }
}

impl Camera {
    const MIN_ZOOM: f64 = 0.4;
    const MAX_ZOOM: f64 = 2.5;
    const MAX_PITCH: f64 = 89.0;

    pub fn rotate(&mut self, delta_yaw: f64, delta_pitch: f64) {
        self.yaw = (self.yaw + delta_yaw).rem_euclid(360.0);
        self.pitch = (self.pitch + delta_pitch).clamp(-Self::MAX_PITCH, Self::MAX_PITCH);
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * 1.1).min(Self::MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom / 1.1).max(Self::MIN_ZOOM);
    }
}

/// Plausible-looking surface position for an object, spread by orbit
/// class. Seeded by the object id so a point keeps its spot across
/// frames; the source data carries no real coordinates.
pub fn synthesize_position(id: i64, orbit_type: Option<&str>) -> (f64, f64) {
    let lat_span = match orbit_type {
        Some("LEO") => 120.0,
        Some("MEO") => 140.0,
        _ => 30.0,
    };

    let lat = (unit_hash(id, "lat") - 0.5) * lat_span;
    let lng = (unit_hash(id, "lng") - 0.5) * 360.0;
    (lat, lng)
}

fn unit_hash(id: i64, axis: &str) -> f64 {
    let key = format!("{id}:{axis}");
    let hash = key
        .bytes()
        .fold(0_u64, |acc, b| acc.wrapping_mul(31).wrapping_add(u64::from(b)));

    #[allow(clippy::cast_precision_loss)]
    let unit = (hash % 10_000) as f64 / 10_000.0;
    unit
}

/// Orthographic projection onto the view plane. Returns (x, y, depth)
/// on the unit sphere; depth < 0 means the far hemisphere.
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
        cells_for_px, project_point, rendered_count, synthesize_position, viewport_size, Camera,
        MAX_RENDER_POINTS,
    };

    #[test]
    fn viewport_caps_at_900_by_650() {
        for container in [940.0, 1200.0, 5000.0] {
            let (width, height) = viewport_size(container);
            assert!(width <= 900.0);
            assert!(height <= 650.0);
        }

        let (width, height) = viewport_size(2000.0);
        assert!((width - 900.0).abs() < f64::EPSILON);
        assert!((height - 650.0).abs() < f64::EPSILON);
    }

    #[test]
    fn viewport_scales_proportionally_below_the_knee() {
        let (width, height) = viewport_size(640.0);
        assert!((width - 600.0).abs() < f64::EPSILON);
        assert!((height - 450.0).abs() < f64::EPSILON);
    }

    #[test]
    fn viewport_floors_at_zero_for_tiny_containers() {
        let (width, height) = viewport_size(10.0);
        assert!((width - 0.0).abs() < f64::EPSILON);
        assert!((height - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn pixel_extents_map_to_cells() {
        // 1280 px across 160 cells is 8 px per cell.
        assert_eq!(cells_for_px(800.0, 1280.0, 160), 100);
        assert_eq!(cells_for_px(0.0, 1280.0, 160), 1);
        assert_eq!(cells_for_px(99_999.0, 1280.0, 160), 160);
        assert_eq!(cells_for_px(800.0, 0.0, 160), 0);
    }

    #[test]
    fn render_count_is_min_of_total_and_cap() {
        assert_eq!(rendered_count(0), 0);
        assert_eq!(rendered_count(100), 100);
        assert_eq!(rendered_count(150), MAX_RENDER_POINTS);
    }

    #[test]
    fn positions_are_deterministic_and_ranged() {
        for id in 0..300 {
            let (lat, lng) = synthesize_position(id, Some("LEO"));
            assert!((-60.0..=60.0).contains(&lat));
            assert!((-180.0..=180.0).contains(&lng));
            assert_eq!(synthesize_position(id, Some("LEO")), (lat, lng));

            let (lat, _) = synthesize_position(id, Some("MEO"));
            assert!((-70.0..=70.0).contains(&lat));

            let (lat, _) = synthesize_position(id, Some("GEO"));
            assert!((-15.0..=15.0).contains(&lat));

            let (lat, _) = synthesize_position(id, None);
            assert!((-15.0..=15.0).contains(&lat));
        }
    }

    #[test]
    fn projection_culls_the_far_hemisphere() {
        let (_, _, front) = project_point(0.0, 0.0, 0.0, 0.0);
        let (_, _, back) = project_point(0.0, 180.0, 0.0, 0.0);
        assert!(front > 0.0);
        assert!(back < 0.0);
    }

    #[test]
    fn camera_clamps_pitch_and_zoom() {
        let mut camera = Camera::default();
        camera.rotate(400.0, -300.0);
        assert!((0.0..360.0).contains(&camera.yaw));
        assert!(camera.pitch >= -89.0);

        for _ in 0..50 {
            camera.zoom_in();
        }
        assert!(camera.zoom <= 2.5);
        for _ in 0..50 {
            camera.zoom_out();
        }
        assert!(camera.zoom >= 0.4);
    }
}
