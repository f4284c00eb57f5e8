use std::path::Path;
use std::time::Instant;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use throbber_widgets_tui::ThrobberState;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

use crate::data::{
    load_debris, sorted_by_urgency, summarize, DataError, DebrisObject, DebrisStats,
};
use crate::geo::{synthesize_points, RenderPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Dashboard,
    Objects,
    Globe,
    ObjectDetails,
    About,
}

/// One-shot load lifecycle: both end states are terminal, recovery is
/// a restart.
#[derive(Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// Camera state for the globe screen.
#[derive(Debug)]
pub struct GlobeView {
    pub yaw: f64,
    pub pitch: f64,
    pub zoom: f64,
    pub auto_rotate: bool,
    pub selected: Option<usize>,
}

impl GlobeView {
    const MIN_ZOOM: f64 = 0.4;
    const MAX_ZOOM: f64 = 2.5;
    const MAX_PITCH: f64 = 89.0;

    pub const fn new() -> Self {
        Self {
            yaw: 0.0,
            pitch: -18.0,
            zoom: 1.0,
            auto_rotate: true,
            selected: None,
        }
    }

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

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub load_state: LoadState,
    pub load_rx: Option<oneshot::Receiver<Result<Vec<DebrisObject>, DataError>>>,
    /// Collection order as fetched; the pipeline pre-sorts by urgency.
    pub objects: Vec<DebrisObject>,
    /// Re-sorted by urgency descending for the table views.
    pub sorted: Vec<DebrisObject>,
    pub points: Vec<RenderPoint>,
    pub stats: DebrisStats,
    pub animation_counter: f64,
    pub animation_paused: bool,
    pub last_frame: Instant,
    pub show_help: bool,
    pub throbber_state: ThrobberState,
    pub selected_object_index: usize,
    pub search_active: bool,
    pub search_input: String,
    pub filtered_indices: Vec<usize>,
    pub globe: GlobeView,
    pub details_id: Option<i64>,
    pub details_from: AppScreen,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            screen: AppScreen::Dashboard,
            load_state: LoadState::Loading,
            load_rx: None,
            objects: Vec::new(),
            sorted: Vec::new(),
            points: Vec::new(),
            stats: DebrisStats::default(),
            animation_counter: 0.0,
            animation_paused: false,
            last_frame: Instant::now(),
            show_help: false,
            throbber_state: ThrobberState::default(),
            selected_object_index: 0,
            search_active: false,
            search_input: String::new(),
            filtered_indices: Vec::new(),
            globe: GlobeView::new(),
            details_id: None,
            details_from: AppScreen::Dashboard,
        }
    }

    /// Kicks off the one-shot background load. If the user quits
    /// before it finishes, the receiver is dropped and the task's
    /// send fails harmlessly.
    pub fn start_loading(&mut self, path: &Path) {
        let (tx, rx) = oneshot::channel();
        let path = path.to_path_buf();

        tokio::spawn(async move {
            let result = load_debris(&path).await;
            let _ = tx.send(result);
        });

        self.load_rx = Some(rx);
        self.load_state = LoadState::Loading;
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;

        if !self.animation_paused {
            // Update animation counter (cycles between 0 and 2*PI)
            self.animation_counter += delta * 2.0;
            if self.animation_counter > 2.0 * std::f64::consts::PI {
                self.animation_counter -= 2.0 * std::f64::consts::PI;
            }

            if self.globe.auto_rotate && self.screen == AppScreen::Globe {
                self.globe.yaw = (self.globe.yaw + delta * 12.0).rem_euclid(360.0);
            }
        }

        if self.load_state == LoadState::Loading {
            self.throbber_state.calc_next();
        }

        self.poll_load();
    }

    fn poll_load(&mut self) {
        let Some(rx) = self.load_rx.as_mut() else {
            return;
        };

        match rx.try_recv() {
            Ok(Ok(objects)) => {
                self.apply_loaded(objects);
                self.load_rx = None;
            }
            Ok(Err(error)) => {
                self.load_state = LoadState::Failed(error.to_string());
                self.load_rx = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Closed) => {
                self.load_state =
                    LoadState::Failed("data loader stopped unexpectedly".to_string());
                self.load_rx = None;
            }
        }
    }

    fn apply_loaded(&mut self, objects: Vec<DebrisObject>) {
        self.stats = summarize(&objects);
        self.sorted = sorted_by_urgency(&objects);
        self.points = synthesize_points(&objects);
        self.objects = objects;
        self.load_state = LoadState::Ready;
        self.selected_object_index = 0;
        self.globe.selected = None;
    }

    pub fn toggle_animation_pause(&mut self) {
        self.animation_paused = !self.animation_paused;
    }

    /// Row indices into `sorted` currently visible in the objects
    /// table, honoring the fuzzy filter when one is in effect.
    pub fn visible_rows(&self) -> Vec<usize> {
        if self.search_input.is_empty() {
            (0..self.sorted.len()).collect()
        } else {
            self.filtered_indices.clone()
        }
    }

    pub fn update_search_filter(&mut self) {
        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, usize)> = self
            .sorted
            .iter()
            .enumerate()
            .filter_map(|(index, obj)| {
                matcher
                    .fuzzy_match(&obj.name, &self.search_input)
                    .map(|score| (score, index))
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0));
        self.filtered_indices = scored.into_iter().map(|(_, index)| index).collect();
        self.selected_object_index = 0;
    }

    pub fn clear_search(&mut self) {
        self.search_active = false;
        self.search_input.clear();
        self.filtered_indices.clear();
        self.selected_object_index = 0;
    }

    /// The object under the cursor in the objects table.
    pub fn selected_object(&self) -> Option<&DebrisObject> {
        let rows = self.visible_rows();
        rows.get(self.selected_object_index)
            .and_then(|&index| self.sorted.get(index))
    }

    pub fn object_by_id(&self, id: i64) -> Option<&DebrisObject> {
        self.objects.iter().find(|obj| obj.id == id)
    }

    pub fn open_details(&mut self, id: i64, from: AppScreen) {
        self.details_id = Some(id);
        self.details_from = from;
        self.screen = AppScreen::ObjectDetails;
    }

    pub fn close_details(&mut self) {
        self.details_id = None;
        self.screen = self.details_from;
    }
}

#[cfg(test)]
mod tests {
    use super::{App, AppScreen, GlobeView, LoadState};
    use crate::data::DebrisObject;

    fn object(id: i64, name: &str, score: f64) -> DebrisObject {
        DebrisObject {
            id,
            name: name.to_string(),
            object_type: Some("Debris".to_string()),
            orbit_type: Some("LEO".to_string()),
            altitude: Some(780.0),
            urgency_score: Some(score),
            tle_line1: None,
            tle_line2: None,
        }
    }

    #[test]
    fn loaded_data_is_sorted_and_summarized() {
        let mut app = App::new();
        app.apply_loaded(vec![
            object(1, "COSMOS 2251 DEB", 42.0),
            object(2, "FENGYUN 1C DEB", 120.0),
        ]);

        assert_eq!(app.load_state, LoadState::Ready);
        assert_eq!(app.sorted[0].id, 2);
        assert_eq!(app.stats.total, 2);
        assert_eq!(app.stats.critical, 1);
        assert_eq!(app.points.len(), 2);
    }

    #[test]
    fn fuzzy_filter_narrows_visible_rows() {
        let mut app = App::new();
        app.apply_loaded(vec![
            object(1, "COSMOS 2251 DEB", 42.0),
            object(2, "IRIDIUM 33 DEB", 55.0),
            object(3, "FENGYUN 1C DEB", 61.0),
        ]);

        app.search_active = true;
        app.search_input = "cosmos".to_string();
        app.update_search_filter();

        let rows = app.visible_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(app.sorted[rows[0]].id, 1);

        app.clear_search();
        assert_eq!(app.visible_rows().len(), 3);
    }

    #[test]
    fn details_round_trip_returns_to_origin_screen() {
        let mut app = App::new();
        app.apply_loaded(vec![object(7, "SL-16 R/B", 88.0)]);

        app.screen = AppScreen::Globe;
        app.open_details(7, AppScreen::Globe);
        assert_eq!(app.screen, AppScreen::ObjectDetails);
        assert_eq!(app.object_by_id(7).map(|obj| obj.id), Some(7));

        app.close_details();
        assert_eq!(app.screen, AppScreen::Globe);
        assert_eq!(app.details_id, None);
    }

    #[test]
    fn globe_view_clamps_pitch_and_zoom() {
        let mut view = GlobeView::new();
        view.rotate(0.0, -500.0);
        assert!(view.pitch >= -89.0);
        view.rotate(725.0, 600.0);
        assert!((0.0..360.0).contains(&view.yaw));
        assert!(view.pitch <= 89.0);

        for _ in 0..100 {
            view.zoom_in();
        }
        assert!(view.zoom <= 2.5);
        for _ in 0..100 {
            view.zoom_out();
        }
        assert!(view.zoom >= 0.4);
    }
}
