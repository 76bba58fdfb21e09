use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::state::{AnalysisView, AppState, CompareMode};

// ---------------------------------------------------------------------------
// Left side panel – analysis selection and view controls
// ---------------------------------------------------------------------------

/// Render the analysis-options side panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Analysis Options");
    ui.separator();

    for view in AnalysisView::ALL {
        if ui
            .selectable_label(state.view == view, view.label())
            .clicked()
        {
            state.view = view;
        }
    }

    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone the names so we can mutate state inside the widgets.
    let names: Vec<String> = dataset.names().iter().map(|s| s.to_string()).collect();

    match state.view {
        AnalysisView::TimeSeries => {
            ui.strong("Distribution");
            ui.add(Slider::new(&mut state.histogram_bins, 10..=60).text("Histogram bins"));
        }
        AnalysisView::Comparative => {
            ui.strong("Comparison type");
            ui.radio_value(
                &mut state.comparison.mode,
                CompareMode::Variables,
                "Variable Comparison",
            );
            ui.radio_value(
                &mut state.comparison.mode,
                CompareMode::Sample,
                "Sample Analysis",
            );
            ui.separator();

            match state.comparison.mode {
                CompareMode::Variables => {
                    variable_selector(ui, "First Variable", &names, &mut state.comparison.var_a);
                    variable_selector(ui, "Second Variable", &names, &mut state.comparison.var_b);
                }
                CompareMode::Sample => {
                    variable_selector(
                        ui,
                        "Variable for Sampling",
                        &names,
                        &mut state.comparison.sample_var,
                    );
                    let slider = ui.add(
                        Slider::new(&mut state.comparison.sample_pct, 10..=90)
                            .text("Sample size (% of data)"),
                    );
                    if slider.changed() {
                        state.resample();
                    }
                    ui.label(
                        RichText::new(format!("{} rows sampled", state.sample_len())).weak(),
                    );
                    if ui.button("Resample").clicked() {
                        state.resample_fresh();
                    }
                }
            }
        }
        AnalysisView::Overview | AnalysisView::Statistical => {}
    }
}

/// Combo box choosing one variable by column index.
fn variable_selector(ui: &mut Ui, label: &str, names: &[String], selected: &mut usize) {
    ui.label(label);
    let current = names.get(*selected).cloned().unwrap_or_default();
    egui::ComboBox::from_id_salt(label.to_owned())
        .selected_text(current)
        .show_ui(ui, |ui: &mut Ui| {
            for (idx, name) in names.iter().enumerate() {
                if ui.selectable_label(*selected == idx, name).clicked() {
                    *selected = idx;
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!("{ds}"));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open dataset")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.load_from_path(&path);
    }
}
