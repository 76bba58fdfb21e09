use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::{AnalysisView, AppState, CompareMode};
use crate::stats::compare::independent_t_test;
use crate::stats::correlate::correlation_matrix;
use crate::stats::descriptive::{describe, median, mean, std_dev, summary_metrics};
use crate::stats::timeseries::analyze;
use crate::stats::{Result as StatsResult, StatsError};
use crate::data::model::Dataset;

use super::charts;

/// Rows shown in the Overview preview table.
const PREVIEW_ROWS: usize = 12;

// ---------------------------------------------------------------------------
// Central panel dispatch
// ---------------------------------------------------------------------------

/// Render the active analysis view in the central panel.
pub fn central_panel(ui: &mut Ui, state: &mut AppState) {
    let Some(dataset) = state.dataset.clone() else {
        // A failed load halts rendering: only the message is shown.
        ui.centered_and_justified(|ui: &mut Ui| {
            match &state.status_message {
                Some(msg) => {
                    ui.heading(RichText::new(msg).color(Color32::RED));
                }
                None => {
                    ui.heading("Open a dataset to begin  (File → Open…)");
                }
            }
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| match state.view {
            AnalysisView::Overview => overview(ui, &dataset, state),
            AnalysisView::TimeSeries => time_series(ui, &dataset, state),
            AnalysisView::Statistical => statistical(ui, &dataset),
            AnalysisView::Comparative => comparative(ui, &dataset, state),
        });
}

// ---------------------------------------------------------------------------
// Small display helpers
// ---------------------------------------------------------------------------

/// Label-over-value block, the equivalent of a metric card.
fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(RichText::new(label).small().weak());
        ui.label(RichText::new(value).strong().size(17.0));
    });
}

/// Format a statistic, or a dash when it cannot be computed.
fn fmt_stat(value: StatsResult<f64>) -> String {
    match value {
        Ok(v) if v.is_nan() => "n/a".to_owned(),
        Ok(v) => format!("{v:.4}"),
        Err(_) => "–".to_owned(),
    }
}

// ---------------------------------------------------------------------------
// Overview
// ---------------------------------------------------------------------------

fn overview(ui: &mut Ui, dataset: &Dataset, state: &AppState) {
    ui.heading("Dataset Overview");
    ui.add_space(4.0);

    ui.label("This dataset contains three measurement series. Each variable \
              holds numerical measurements; a value's position in the series \
              is its time point.");
    for series in dataset.series() {
        ui.label(format!(
            "  •  {} — {} observations",
            series.name,
            series.len()
        ));
    }
    ui.separator();

    ui.columns(2, |cols: &mut [Ui]| {
        cols[0].strong("Data Preview");
        preview_table(&mut cols[0], dataset);
        cols[0].label(
            RichText::new(format!(
                "first {} of {} rows",
                PREVIEW_ROWS.min(dataset.rows()),
                dataset.rows()
            ))
            .small()
            .weak(),
        );

        cols[1].strong("Descriptive Statistics");
        descriptive_table(&mut cols[1], dataset);
    });

    ui.separator();
    ui.strong("Time Series Visualization");
    charts::time_series_plot(ui, dataset, &state.series_colors, "overview_plot", 320.0);
}

fn preview_table(ui: &mut Ui, dataset: &Dataset) {
    let n_rows = dataset.rows().min(PREVIEW_ROWS);

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto())
        .columns(Column::remainder(), dataset.n_series())
        .header(20.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("#");
            });
            for series in dataset.series() {
                header.col(|ui: &mut Ui| {
                    ui.strong(&series.name);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, n_rows, |mut row| {
                let i = row.index();
                row.col(|ui: &mut Ui| {
                    ui.label(i.to_string());
                });
                for series in dataset.series() {
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{:.4e}", series.values[i]));
                    });
                }
            });
        });
}

fn descriptive_table(ui: &mut Ui, dataset: &Dataset) {
    let summaries: Vec<_> = dataset
        .series()
        .iter()
        .map(|s| describe(&s.values))
        .collect();

    egui::Grid::new("descriptive_stats")
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            ui.strong("Statistic");
            for series in dataset.series() {
                ui.strong(&series.name);
            }
            ui.end_row();

            let rows: [(&str, fn(&crate::stats::descriptive::Descriptive) -> f64); 7] = [
                ("Mean", |d| d.mean),
                ("Median", |d| d.median),
                ("Std Dev", |d| d.std_dev),
                ("Min", |d| d.min),
                ("Max", |d| d.max),
                ("Skewness", |d| d.skewness),
                ("Kurtosis", |d| d.kurtosis),
            ];

            for (label, pick) in rows {
                ui.label(label);
                for summary in &summaries {
                    let text = match summary {
                        Ok(d) => format!("{:.4}", pick(d)),
                        Err(_) => "–".to_owned(),
                    };
                    ui.label(text);
                }
                ui.end_row();
            }
        });
}

// ---------------------------------------------------------------------------
// Time series analysis
// ---------------------------------------------------------------------------

fn time_series(ui: &mut Ui, dataset: &Dataset, state: &AppState) {
    ui.heading("Time Series Analysis");
    charts::time_series_plot(ui, dataset, &state.series_colors, "time_series_plot", 320.0);

    ui.separator();
    ui.strong("Distribution Analysis");
    charts::distribution_plot(
        ui,
        dataset,
        &state.series_colors,
        state.histogram_bins,
        260.0,
    );

    ui.separator();
    ui.strong("Time Series Metrics");
    ui.add_space(4.0);

    for series in dataset.series() {
        ui.label(RichText::new(&series.name).strong());
        match analyze(&series.values) {
            Ok(profile) => {
                ui.columns(3, |cols: &mut [Ui]| {
                    metric(
                        &mut cols[0],
                        "Trend Slope",
                        format!("{:.4}", profile.trend.slope),
                    );
                    metric(
                        &mut cols[1],
                        "Seasonality",
                        fmt_stat(Ok(profile.autocorrelation)),
                    );
                    metric(
                        &mut cols[2],
                        "Mean Variation",
                        format!("{:.4}", profile.stationarity.mean_variation),
                    );
                });
                let status = if profile.stationarity.is_stationary {
                    "Stationary"
                } else {
                    "Non-stationary"
                };
                ui.label(format!("Stationarity Status: {status}"));
            }
            Err(e) => {
                ui.colored_label(Color32::RED, format!("Analysis unavailable: {e}"));
            }
        }
        ui.add_space(8.0);
    }
}

// ---------------------------------------------------------------------------
// Statistical analysis
// ---------------------------------------------------------------------------

fn statistical(ui: &mut Ui, dataset: &Dataset) {
    ui.heading("Statistical Analysis");

    ui.strong("Correlation Analysis");
    match correlation_matrix(dataset) {
        Ok(matrix) => charts::correlation_heatmap(ui, &matrix),
        Err(e) => {
            ui.colored_label(Color32::RED, format!("Correlation unavailable: {e}"));
        }
    }

    ui.separator();
    ui.strong("Summary Metrics");
    ui.add_space(4.0);

    for series in dataset.series() {
        ui.label(RichText::new(&series.name).strong());
        match summary_metrics(&series.values) {
            Ok(m) => {
                ui.columns(4, |cols: &mut [Ui]| {
                    metric(&mut cols[0], "Mean", format!("{:.4}", m.mean));
                    metric(&mut cols[1], "Std Dev", format!("{:.4}", m.std_dev));
                    metric(&mut cols[2], "Range", format!("{:.4}", m.range));
                    metric(&mut cols[3], "IQR", format!("{:.4}", m.iqr));
                });
            }
            Err(e) => {
                ui.colored_label(Color32::RED, format!("Metrics unavailable: {e}"));
            }
        }
        ui.add_space(8.0);
    }
}

// ---------------------------------------------------------------------------
// Comparative analysis
// ---------------------------------------------------------------------------

fn comparative(ui: &mut Ui, dataset: &Dataset, state: &AppState) {
    ui.heading("Comparative Analysis");

    match state.comparison.mode {
        CompareMode::Variables => compare_variables(ui, dataset, state),
        CompareMode::Sample => compare_sample(ui, dataset, state),
    }
}

fn compare_variables(ui: &mut Ui, dataset: &Dataset, state: &AppState) {
    let (a, b) = (state.comparison.var_a, state.comparison.var_b);
    if a == b {
        ui.colored_label(
            Color32::YELLOW,
            "Please select different variables for comparison",
        );
        return;
    }
    let (Some(sa), Some(sb)) = (dataset.series_at(a), dataset.series_at(b)) else {
        return;
    };

    charts::comparison_plot(
        ui,
        &[
            (
                sa.name.as_str(),
                sa.values.as_slice(),
                state.series_colors.color_for(&sa.name),
            ),
            (
                sb.name.as_str(),
                sb.values.as_slice(),
                state.series_colors.color_for(&sb.name),
            ),
        ],
        300.0,
    );

    ui.separator();
    ui.strong("Statistical Comparison");
    match independent_t_test(&sa.values, &sb.values) {
        Ok(test) => {
            ui.columns(3, |cols: &mut [Ui]| {
                metric(
                    &mut cols[0],
                    "t-statistic",
                    format!("{:.4}", test.statistic),
                );
                metric(&mut cols[1], "p-value", format!("{:.4}", test.p_value));
                metric(
                    &mut cols[2],
                    "Effect Size",
                    format!("{:.4}", test.effect_size),
                );
            });
            ui.add_space(4.0);
            if test.is_significant() {
                ui.label("There is a statistically significant difference between the variables");
            } else {
                ui.label("No statistically significant difference detected");
            }
        }
        Err(StatsError::ZeroVariance) => {
            ui.label("Both variables are constant; nothing to test");
        }
        Err(e) => {
            ui.colored_label(Color32::RED, format!("Test unavailable: {e}"));
        }
    }
}

fn compare_sample(ui: &mut Ui, dataset: &Dataset, state: &AppState) {
    ui.strong("Sample vs Full Data Analysis");

    let Some(series) = dataset.series_at(state.comparison.sample_var) else {
        return;
    };
    let sample = state.sample_values();
    if sample.len() < 2 {
        ui.label("Sample too small; increase the sample size");
        return;
    }

    let sample_label = format!("Sample ({}%)", state.comparison.sample_pct);
    let full_color = state.series_colors.color_for(&series.name);
    let sample_color = state.series_colors.translucent(&series.name, 140);

    charts::comparison_plot(
        ui,
        &[
            (sample_label.as_str(), sample.as_slice(), sample_color),
            ("Full Dataset", series.values.as_slice(), full_color),
        ],
        300.0,
    );

    ui.separator();
    ui.strong("Sample vs Population Statistics");
    ui.columns(2, |cols: &mut [Ui]| {
        cols[0].label(RichText::new("Sample Statistics").strong());
        metric(&mut cols[0], "Mean", fmt_stat(mean(&sample)));
        metric(&mut cols[0], "Std Dev", fmt_stat(std_dev(&sample)));
        metric(&mut cols[0], "Median", fmt_stat(median(&sample)));

        cols[1].label(RichText::new("Full Dataset Statistics").strong());
        metric(&mut cols[1], "Mean", fmt_stat(mean(&series.values)));
        metric(&mut cols[1], "Std Dev", fmt_stat(std_dev(&series.values)));
        metric(&mut cols[1], "Median", fmt_stat(median(&series.values)));
    });
}
