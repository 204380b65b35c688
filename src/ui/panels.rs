use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::export;
use crate::state::{AppState, Dimension};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the filter panel. Only shown once the store has data.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Data");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            value_set_filter(ui, state, Dimension::Distributor, "Distributor");
            value_set_filter(ui, state, Dimension::Kategori, "Kategori");
            ui.separator();

            if range_filter(
                ui,
                "Rentang Harga",
                &mut state.criteria.price_range,
                state.data_price_range,
            ) {
                state.refilter();
            }
            if range_filter(
                ui,
                "Rentang Stok",
                &mut state.criteria.stock_range,
                state.data_stock_range,
            ) {
                state.refilter();
            }
            ui.separator();

            ui.strong("Cari Nama Barang");
            if ui
                .text_edit_singleline(&mut state.criteria.name_query)
                .changed()
            {
                state.refilter();
            }
        });
}

/// Collapsible checkbox list over one value-set dimension, with All/None
/// shortcuts and a selected/total count in the header.
fn value_set_filter(ui: &mut Ui, state: &mut AppState, dim: Dimension, label: &str) {
    let all_values: Vec<String> = state.known_values(dim).iter().cloned().collect();
    let selected_count = match dim {
        Dimension::Distributor => state.criteria.distributors.len(),
        Dimension::Kategori => state.criteria.categories.len(),
    };
    let header_text = format!("{label}  ({selected_count}/{})", all_values.len());

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(label)
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all(dim);
                }
                if ui.small_button("None").clicked() {
                    state.select_none(dim);
                }
            });

            for value in &all_values {
                let is_selected = match dim {
                    Dimension::Distributor => state.criteria.distributors.contains(value),
                    Dimension::Kategori => state.criteria.categories.contains(value),
                };
                let mut checked = is_selected;
                if ui.checkbox(&mut checked, value.clone()).changed() {
                    state.toggle_value(dim, value);
                }
            }
        });
}

/// Min/max pair over an inclusive range. Returns whether either end changed.
fn range_filter(ui: &mut Ui, label: &str, range: &mut (i64, i64), bounds: (i64, i64)) -> bool {
    ui.strong(label);
    let mut changed = false;
    ui.horizontal(|ui: &mut Ui| {
        changed |= ui
            .add(
                egui::DragValue::new(&mut range.0)
                    .range(bounds.0..=bounds.1)
                    .prefix("min "),
            )
            .changed();
        changed |= ui
            .add(
                egui::DragValue::new(&mut range.1)
                    .range(bounds.0..=bounds.1)
                    .prefix("max "),
            )
            .changed();
    });
    changed
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_files_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if !state.store.is_empty() {
            ui.label(format!(
                "{} baris digabung, {} tampil",
                state.store.len(),
                state.visible_indices.len()
            ));

            ui.separator();

            if ui.button("📥 Download Hasil Filter").clicked() {
                save_export_dialog(state);
            }
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_files_dialog(state: &mut AppState) {
    let files = rfd::FileDialog::new()
        .set_title("Upload file stok (bisa lebih dari 1)")
        .add_filter("Supported files", &["xlsx", "xls", "csv", "json"])
        .add_filter("Excel", &["xlsx", "xls"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_files();

    if let Some(paths) = files {
        state.ingest_files(&paths);
    }
}

pub fn save_export_dialog(state: &mut AppState) {
    let Some(path) = rfd::FileDialog::new()
        .set_title("Download Hasil Filter")
        .set_file_name(export::SUGGESTED_FILE_NAME)
        .add_filter("Excel", &["xlsx"])
        .save_file()
    else {
        return;
    };

    match state.export_filtered().and_then(|bytes| {
        std::fs::write(&path, bytes).map_err(anyhow::Error::from)
    }) {
        Ok(()) => {
            log::info!(
                "Exported {} rows to {} ({})",
                state.visible_indices.len(),
                path.display(),
                export::MIME_TYPE
            );
            state.status_message = None;
        }
        Err(e) => {
            log::error!("Export failed: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
