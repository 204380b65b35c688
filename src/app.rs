use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct StokAnalyzerApp {
    pub state: AppState,
}

impl eframe::App for StokAnalyzerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters (hidden until data arrives) ----
        if !self.state.store.is_empty() {
            egui::SidePanel::left("filter_panel")
                .default_width(220.0)
                .resizable(true)
                .show(ctx, |ui| {
                    panels::side_panel(ui, &mut self.state);
                });
        }

        // ---- Central panel: merged stock table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::stock_table(ui, &self.state);
        });
    }
}
