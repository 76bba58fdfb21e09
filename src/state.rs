use std::path::Path;

use crate::color::SeriesColors;
use crate::data::loader;
use crate::data::model::Dataset;
use crate::data::sample::{random_indices, SimpleRng};

// ---------------------------------------------------------------------------
// Analysis views
// ---------------------------------------------------------------------------

/// The analysis pages offered in the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisView {
    Overview,
    TimeSeries,
    Statistical,
    Comparative,
}

impl AnalysisView {
    pub const ALL: [AnalysisView; 4] = [
        AnalysisView::Overview,
        AnalysisView::TimeSeries,
        AnalysisView::Statistical,
        AnalysisView::Comparative,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AnalysisView::Overview => "Overview",
            AnalysisView::TimeSeries => "Time Series Analysis",
            AnalysisView::Statistical => "Statistical Analysis",
            AnalysisView::Comparative => "Comparative Analysis",
        }
    }
}

/// The two comparison modes of the Comparative view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareMode {
    Variables,
    Sample,
}

/// Selections driving the Comparative view.
#[derive(Debug, Clone)]
pub struct ComparisonState {
    pub mode: CompareMode,
    /// Column indices for the variable-vs-variable comparison.
    pub var_a: usize,
    pub var_b: usize,
    /// Column index for the sample-vs-full comparison.
    pub sample_var: usize,
    /// Sample size as a percentage of the data, 10–90.
    pub sample_pct: u8,
    /// Bumped on every explicit resample so repeated draws differ.
    pub sample_seed: u64,
    /// Cached sorted sample row indices.
    pub sample_indices: Vec<usize>,
}

impl Default for ComparisonState {
    fn default() -> Self {
        Self {
            mode: CompareMode::Variables,
            var_a: 0,
            var_b: 1,
            sample_var: 0,
            sample_pct: 30,
            sample_seed: 42,
            sample_indices: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file loads successfully).
    pub dataset: Option<Dataset>,

    /// Active analysis view.
    pub view: AnalysisView,

    /// Selections for the Comparative view.
    pub comparison: ComparisonState,

    /// Bin count for the distribution histograms.
    pub histogram_bins: usize,

    /// Stable per-variable colours used by every chart.
    pub series_colors: SeriesColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            view: AnalysisView::Overview,
            comparison: ComparisonState::default(),
            histogram_bins: 30,
            series_colors: SeriesColors::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset, reset selections and colours.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.series_colors = SeriesColors::new(&dataset.names());
        self.comparison = ComparisonState {
            var_b: 1.min(dataset.n_series().saturating_sub(1)),
            ..ComparisonState::default()
        };
        self.dataset = Some(dataset);
        self.status_message = None;
        self.resample();
    }

    /// Load a dataset file, surfacing failure as a status message.
    pub fn load_from_path(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(dataset) => {
                log::info!("Loaded {dataset} from {}", path.display());
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.status_message = Some(format!("Error loading data: {e:#}"));
            }
        }
    }

    /// Number of rows the current sample percentage selects.
    pub fn sample_len(&self) -> usize {
        let rows = self.dataset.as_ref().map_or(0, Dataset::rows);
        rows * self.comparison.sample_pct as usize / 100
    }

    /// Redraw the cached sample indices for the current selections.
    pub fn resample(&mut self) {
        let Some(ds) = &self.dataset else {
            self.comparison.sample_indices.clear();
            return;
        };
        let k = ds.rows() * self.comparison.sample_pct as usize / 100;
        let mut rng = SimpleRng::new(self.comparison.sample_seed);
        self.comparison.sample_indices = random_indices(ds.rows(), k, &mut rng);
    }

    /// Draw a fresh sample (new seed, then resample).
    pub fn resample_fresh(&mut self) {
        self.comparison.sample_seed = self.comparison.sample_seed.wrapping_add(1);
        self.resample();
    }

    /// Values of the sampled rows for the selected variable.
    pub fn sample_values(&self) -> Vec<f64> {
        let Some(ds) = &self.dataset else {
            return Vec::new();
        };
        let Some(series) = ds.series_at(self.comparison.sample_var) else {
            return Vec::new();
        };
        self.comparison
            .sample_indices
            .iter()
            .filter_map(|&i| series.values.get(i).copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Series;

    fn demo_dataset() -> Dataset {
        Dataset::new(vec![
            Series::new("Variable1", (0..100).map(|i| i as f64).collect()),
            Series::new("Variable2", (0..100).map(|i| (i * 2) as f64).collect()),
            Series::new("Variable3", vec![1.0; 100]),
        ])
        .unwrap()
    }

    #[test]
    fn set_dataset_initialises_sample() {
        let mut state = AppState::default();
        state.set_dataset(demo_dataset());
        assert_eq!(state.sample_len(), 30);
        assert_eq!(state.comparison.sample_indices.len(), 30);
        assert_eq!(state.sample_values().len(), 30);
    }

    #[test]
    fn resample_tracks_percentage() {
        let mut state = AppState::default();
        state.set_dataset(demo_dataset());
        state.comparison.sample_pct = 90;
        state.resample();
        assert_eq!(state.comparison.sample_indices.len(), 90);
    }

    #[test]
    fn fresh_sample_differs() {
        let mut state = AppState::default();
        state.set_dataset(demo_dataset());
        let before = state.comparison.sample_indices.clone();
        state.resample_fresh();
        assert_ne!(before, state.comparison.sample_indices);
    }

    #[test]
    fn failed_load_sets_status_message() {
        let mut state = AppState::default();
        state.load_from_path(Path::new("/nonexistent/data.csv"));
        assert!(state.dataset.is_none());
        assert!(state.status_message.as_deref().unwrap().contains("Error"));
    }
}
