use eframe::egui::{self, vec2, Align2, Color32, FontId, Sense, Ui};
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Line, Plot, PlotPoints, Points};

use crate::color::{contrasting_text, diverging_color, SeriesColors};
use crate::data::model::Dataset;
use crate::stats::correlate::CorrelationMatrix;
use crate::stats::descriptive::{max, min, quantile};

// ---------------------------------------------------------------------------
// Time series chart
// ---------------------------------------------------------------------------

/// Line chart of every variable against its position index.
pub fn time_series_plot(
    ui: &mut Ui,
    dataset: &Dataset,
    colors: &SeriesColors,
    id: &str,
    height: f32,
) {
    Plot::new(id.to_owned())
        .legend(Legend::default())
        .x_axis_label("Time Point")
        .y_axis_label("Value")
        .height(height)
        .show(ui, |plot_ui| {
            for series in dataset.series() {
                let points: PlotPoints = series
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| [i as f64, v])
                    .collect();

                plot_ui.line(
                    Line::new(points)
                        .name(&series.name)
                        .color(colors.color_for(&series.name))
                        .width(1.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Distribution histograms
// ---------------------------------------------------------------------------

/// One histogram bar: centre, count, width.
type HistogramBar = (f64, f64, f64);

/// Bin `values` into `bins` equal-width buckets over the value range.
fn histogram_bars(values: &[f64], bins: usize) -> Vec<HistogramBar> {
    let (Ok(lo), Ok(hi)) = (min(values), max(values)) else {
        return Vec::new();
    };
    if bins == 0 {
        return Vec::new();
    }
    if hi == lo {
        return vec![(lo, values.len() as f64, 1.0)];
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let b = (((v - lo) / width) as usize).min(bins - 1);
        counts[b] += 1;
    }

    counts
        .iter()
        .enumerate()
        .map(|(b, &c)| (lo + (b as f64 + 0.5) * width, c as f64, width))
        .collect()
}

/// Overlaid per-variable histograms (translucent bars, shared axes).
pub fn distribution_plot(
    ui: &mut Ui,
    dataset: &Dataset,
    colors: &SeriesColors,
    bins: usize,
    height: f32,
) {
    Plot::new("distribution_plot")
        .legend(Legend::default())
        .x_axis_label("Value")
        .y_axis_label("Count")
        .height(height)
        .show(ui, |plot_ui| {
            for series in dataset.series() {
                let bars: Vec<Bar> = histogram_bars(&series.values, bins)
                    .into_iter()
                    .map(|(center, count, width)| Bar::new(center, count).width(width))
                    .collect();

                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .name(&series.name)
                        .color(colors.translucent(&series.name, 160)),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Correlation heatmap
// ---------------------------------------------------------------------------

const HEATMAP_CELL: egui::Vec2 = vec2(92.0, 44.0);
const HEATMAP_LABEL_WIDTH: f32 = 96.0;

/// Grid of coloured cells (RdBu ramp) with the coefficient printed in each.
pub fn correlation_heatmap(ui: &mut Ui, matrix: &CorrelationMatrix) {
    if matrix.is_empty() {
        return;
    }

    // Column headers.
    ui.horizontal(|ui: &mut Ui| {
        ui.add_sized([HEATMAP_LABEL_WIDTH, 20.0], egui::Label::new(""));
        for name in &matrix.names {
            ui.add_sized(
                [HEATMAP_CELL.x, 20.0],
                egui::Label::new(egui::RichText::new(name).strong()),
            );
        }
    });

    for (i, name) in matrix.names.iter().enumerate() {
        ui.horizontal(|ui: &mut Ui| {
            ui.add_sized(
                [HEATMAP_LABEL_WIDTH, HEATMAP_CELL.y],
                egui::Label::new(egui::RichText::new(name).strong()),
            );
            for j in 0..matrix.len() {
                let value = matrix.values[i][j];
                let fill = diverging_color(value);
                let (rect, _) = ui.allocate_exact_size(HEATMAP_CELL, Sense::hover());
                ui.painter().rect_filled(rect, 2.0, fill);
                let text = if value.is_nan() {
                    "n/a".to_owned()
                } else {
                    format!("{value:.2}")
                };
                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    text,
                    FontId::proportional(13.0),
                    contrasting_text(fill),
                );
            }
        });
    }
}

// ---------------------------------------------------------------------------
// Box plot comparison
// ---------------------------------------------------------------------------

/// Five-number spread plus outliers beyond the 1.5·IQR fences.
fn box_spread(values: &[f64]) -> Option<(BoxSpread, Vec<f64>)> {
    let q1 = quantile(values, 0.25).ok()?;
    let median = quantile(values, 0.5).ok()?;
    let q3 = quantile(values, 0.75).ok()?;
    let fence = 1.5 * (q3 - q1);
    let (lo_fence, hi_fence) = (q1 - fence, q3 + fence);

    let mut whisker_lo = q1;
    let mut whisker_hi = q3;
    let mut outliers = Vec::new();
    for &v in values {
        if v < lo_fence || v > hi_fence {
            outliers.push(v);
        } else {
            whisker_lo = whisker_lo.min(v);
            whisker_hi = whisker_hi.max(v);
        }
    }

    Some((
        BoxSpread::new(whisker_lo, q1, median, q3, whisker_hi),
        outliers,
    ))
}

/// Side-by-side box plots of the given labelled samples, with outlier dots.
pub fn comparison_plot(ui: &mut Ui, entries: &[(&str, &[f64], Color32)], height: f32) {
    Plot::new("comparison_plot")
        .legend(Legend::default())
        .y_axis_label("Value")
        .show_axes([false, true])
        .height(height)
        .show(ui, |plot_ui| {
            for (idx, (name, values, color)) in entries.iter().enumerate() {
                let Some((spread, outliers)) = box_spread(values) else {
                    continue;
                };
                let x = idx as f64;

                plot_ui.box_plot(
                    BoxPlot::new(vec![BoxElem::new(x, spread).box_width(0.5)])
                        .name(*name)
                        .color(*color),
                );

                if !outliers.is_empty() {
                    let points: PlotPoints = outliers.iter().map(|&v| [x, v]).collect();
                    plot_ui.points(Points::new(points).color(*color).radius(2.0));
                }
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_counts_sum_to_n() {
        let values: Vec<f64> = (0..90).map(|i| (i % 30) as f64).collect();
        let bars = histogram_bars(&values, 30);
        assert_eq!(bars.len(), 30);
        let total: f64 = bars.iter().map(|(_, c, _)| c).sum();
        assert_eq!(total, 90.0);
    }

    #[test]
    fn histogram_constant_series_is_one_bar() {
        let bars = histogram_bars(&[4.0; 12], 30);
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].0, 4.0);
        assert_eq!(bars[0].1, 12.0);
    }

    #[test]
    fn histogram_max_lands_in_last_bin() {
        let bars = histogram_bars(&[0.0, 1.0, 2.0, 10.0], 5);
        assert_eq!(bars.last().unwrap().1, 1.0);
    }

    #[test]
    fn box_spread_flags_outliers() {
        let mut values: Vec<f64> = (0..20).map(|i| i as f64).collect();
        values.push(1000.0);
        let (spread, outliers) = box_spread(&values).unwrap();
        assert_eq!(outliers, vec![1000.0]);
        assert!(spread.quartile3 < 1000.0);
    }

    #[test]
    fn box_spread_without_outliers_spans_data() {
        let values: Vec<f64> = (0..21).map(|i| i as f64).collect();
        let (spread, outliers) = box_spread(&values).unwrap();
        assert!(outliers.is_empty());
        assert_eq!(spread.lower_whisker, 0.0);
        assert_eq!(spread.upper_whisker, 20.0);
        assert_eq!(spread.median, 10.0);
    }
}
