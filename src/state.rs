use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::data::export;
use crate::data::filter::{apply, filtered_indices, Criteria};
use crate::data::loader;
use crate::data::model::{MergeStore, Record};
use crate::data::validate;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which of the two value-set filter dimensions a widget is acting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Distributor,
    Kategori,
}

/// The full session state, independent of rendering. One instance per app
/// window; nothing here is shared or persisted.
pub struct AppState {
    /// Every validated row ingested this session, in upload order.
    pub store: MergeStore,

    /// Active filter criteria.
    pub criteria: Criteria,

    /// Distinct distributor values currently in the store.
    pub known_distributors: BTreeSet<String>,

    /// Distinct category values currently in the store.
    pub known_categories: BTreeSet<String>,

    /// Observed price bounds, for the range widgets.
    pub data_price_range: (i64, i64),

    /// Observed stock bounds, for the range widgets.
    pub data_stock_range: (i64, i64),

    /// Indices of store rows passing the current criteria (cached).
    pub visible_indices: Vec<usize>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            store: MergeStore::new(),
            criteria: Criteria::default(),
            known_distributors: BTreeSet::new(),
            known_categories: BTreeSet::new(),
            data_price_range: (0, 0),
            data_stock_range: (0, 0),
            visible_indices: Vec::new(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a batch of uploaded files, in order.
    ///
    /// Each file is parsed, validated, and appended. The batch halts on the
    /// first file that fails to parse or fails validation; files appended
    /// earlier in the same batch stay in the store, later files are not
    /// touched. After any ingest the criteria reset to the defaults over the
    /// whole store (all values selected, full observed ranges).
    pub fn ingest_files(&mut self, paths: &[PathBuf]) {
        self.status_message = None;

        for path in paths {
            let raw = match loader::load_file(path) {
                Ok(raw) => raw,
                Err(e) => {
                    log::error!("Failed to load {}: {e:#}", path.display());
                    self.status_message = Some(format!("Error: {e:#}"));
                    break;
                }
            };

            match validate::validate(raw) {
                Ok(table) => {
                    log::info!(
                        "Ingested {} ({} baris)",
                        table.source,
                        table.records.len()
                    );
                    self.store.append(table);
                }
                Err(e) => {
                    log::error!("{e}");
                    self.status_message = Some(e.to_string());
                    break;
                }
            }
        }

        self.reset_criteria();
    }

    /// Reset the criteria to the defaults over the current store and refresh
    /// the cached distinct values and observed bounds.
    pub fn reset_criteria(&mut self) {
        let defaults = Criteria::defaults(self.store.rows());
        self.known_distributors = defaults.distributors.clone();
        self.known_categories = defaults.categories.clone();
        self.data_price_range = defaults.price_range;
        self.data_stock_range = defaults.stock_range;
        self.criteria = defaults;
        self.refilter();
    }

    /// Recompute `visible_indices` after a criteria change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(self.store.rows(), &self.criteria);
    }

    /// The filtered view as an owned table, for export.
    pub fn filtered_rows(&self) -> Vec<Record> {
        apply(self.store.rows(), &self.criteria)
    }

    /// Encode the filtered view as xlsx bytes.
    pub fn export_filtered(&self) -> anyhow::Result<Vec<u8>> {
        export::encode(&self.filtered_rows())
    }

    fn selection(&mut self, dim: Dimension) -> &mut BTreeSet<String> {
        match dim {
            Dimension::Distributor => &mut self.criteria.distributors,
            Dimension::Kategori => &mut self.criteria.categories,
        }
    }

    /// All distinct values currently known for a dimension.
    pub fn known_values(&self, dim: Dimension) -> &BTreeSet<String> {
        match dim {
            Dimension::Distributor => &self.known_distributors,
            Dimension::Kategori => &self.known_categories,
        }
    }

    /// Toggle a single value in a dimension's selection.
    pub fn toggle_value(&mut self, dim: Dimension, value: &str) {
        let selected = self.selection(dim);
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
        self.refilter();
    }

    /// Select every known value in a dimension.
    pub fn select_all(&mut self, dim: Dimension) {
        let all = self.known_values(dim).clone();
        *self.selection(dim) = all;
        self.refilter();
    }

    /// Clear a dimension's selection. An empty selection imposes no
    /// restriction, so this also shows everything.
    pub fn select_none(&mut self, dim: Dimension) {
        self.selection(dim).clear();
        self.refilter();
    }
}
