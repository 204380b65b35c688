use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::REQUIRED_COLUMNS;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Merged-stock table (central panel)
// ---------------------------------------------------------------------------

/// Render the filtered table, or the informational prompt when nothing has
/// been uploaded yet.
pub fn stock_table(ui: &mut Ui, state: &AppState) {
    if state.store.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("📌 Silakan upload minimal 1 file untuk memulai analisis.  (File → Open…)");
        });
        return;
    }

    ui.heading("📊 Hasil Analisis Stok Barang");
    ui.separator();

    let rows = state.store.rows();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto()) // No
        .column(Column::auto()) // Distributor
        .column(Column::auto()) // Kategori
        .column(Column::remainder()) // Nama Barang
        .column(Column::auto()) // Stok
        .column(Column::auto()) // Harga
        .header(20.0, |mut header| {
            for name in REQUIRED_COLUMNS {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, state.visible_indices.len(), |mut row| {
                let record = &rows[state.visible_indices[row.index()]];
                row.col(|ui: &mut Ui| {
                    ui.label(record.no.to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(record.distributor.as_str());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(record.kategori.as_str());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(record.nama_barang.as_deref().unwrap_or(""));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(record.stok.to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{}", record.harga));
                });
            });
        });
}
