use std::collections::BTreeSet;

use super::model::Record;

// ---------------------------------------------------------------------------
// Criteria – the active filter predicates
// ---------------------------------------------------------------------------

/// User-selected filter predicates. All of them AND together; a row survives
/// only if it passes every one.
///
/// For the two value sets, an empty set or the full set of known values both
/// mean "no restriction on this dimension". Ranges are inclusive on both
/// ends; an inverted range (min > max) matches nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    pub distributors: BTreeSet<String>,
    pub categories: BTreeSet<String>,
    pub price_range: (i64, i64),
    pub stock_range: (i64, i64),
    pub name_query: String,
}

impl Criteria {
    /// Build the default criteria for a table: every distinct distributor and
    /// category selected, ranges spanning the observed data. Fractional price
    /// bounds widen outward (floor the minimum, ceil the maximum) so no row
    /// falls outside its own defaults.
    pub fn defaults(rows: &[Record]) -> Self {
        let distributors: BTreeSet<String> =
            rows.iter().map(|r| r.distributor.clone()).collect();
        let categories: BTreeSet<String> = rows.iter().map(|r| r.kategori.clone()).collect();

        let price_min = rows.iter().map(|r| r.harga).fold(f64::INFINITY, f64::min);
        let price_max = rows.iter().map(|r| r.harga).fold(f64::NEG_INFINITY, f64::max);
        let price_range = if rows.is_empty() {
            (0, 0)
        } else {
            (price_min.floor() as i64, price_max.ceil() as i64)
        };

        let stock_range = if rows.is_empty() {
            (0, 0)
        } else {
            (
                rows.iter().map(|r| r.stok).min().unwrap_or(0),
                rows.iter().map(|r| r.stok).max().unwrap_or(0),
            )
        };

        Criteria {
            distributors,
            categories,
            price_range,
            stock_range,
            name_query: String::new(),
        }
    }

    /// Whether a single row passes every active predicate.
    fn matches(&self, record: &Record) -> bool {
        if !self.distributors.is_empty() && !self.distributors.contains(&record.distributor) {
            return false;
        }
        if !self.categories.is_empty() && !self.categories.contains(&record.kategori) {
            return false;
        }

        let (pmin, pmax) = self.price_range;
        if record.harga < pmin as f64 || record.harga > pmax as f64 {
            return false;
        }
        let (smin, smax) = self.stock_range;
        if record.stok < smin || record.stok > smax {
            return false;
        }

        let query = self.name_query.trim();
        if !query.is_empty() {
            // Rows without a name never match a non-empty query.
            match &record.nama_barang {
                Some(name) => {
                    if !name.to_lowercase().contains(&query.to_lowercase()) {
                        return false;
                    }
                }
                None => return false,
            }
        }

        true
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Indices of rows passing all active predicates, in input order. The UI
/// caches these so the table view never clones the store.
pub fn filtered_indices(rows: &[Record], criteria: &Criteria) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, r)| criteria.matches(r))
        .map(|(i, _)| i)
        .collect()
}

/// Filter a table into a new table: the surviving rows, cloned, in their
/// original relative order.
pub fn apply(rows: &[Record], criteria: &Criteria) -> Vec<Record> {
    rows.iter().filter(|r| criteria.matches(r)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;
    use crate::data::model::Record;

    fn sample() -> Vec<Record> {
        vec![
            record(1, "A", "X", "Sabun Mandi", 5, 100.0),
            record(2, "B", "Y", "Kopi Bubuk", 1, 200.0),
            record(3, "A", "Y", "Sampo", 8, 350.0),
        ]
    }

    #[test]
    fn defaults_select_everything() {
        let rows = sample();
        let c = Criteria::defaults(&rows);
        assert_eq!(c.price_range, (100, 350));
        assert_eq!(c.stock_range, (1, 8));
        assert_eq!(apply(&rows, &c), rows);
    }

    #[test]
    fn defaults_widen_fractional_prices() {
        let mut rows = sample();
        rows[0].harga = 99.4;
        rows[2].harga = 350.2;
        let c = Criteria::defaults(&rows);
        assert_eq!(c.price_range, (99, 351));
        assert_eq!(apply(&rows, &c).len(), rows.len());
    }

    #[test]
    fn distributor_and_range_predicates_and_together() {
        // Scenario: only the first of two rows survives a distributor +
        // price + stock combination.
        let rows = vec![
            record(1, "A", "X", "Sabun", 5, 100.0),
            record(2, "B", "Y", "Kopi", 1, 200.0),
        ];
        let c = Criteria {
            distributors: ["A".to_string()].into(),
            categories: BTreeSet::new(),
            price_range: (0, 500),
            stock_range: (0, 10),
            name_query: String::new(),
        };
        assert_eq!(apply(&rows, &c), vec![rows[0].clone()]);
    }

    #[test]
    fn empty_set_means_no_restriction() {
        let rows = sample();
        let mut c = Criteria::defaults(&rows);
        c.distributors.clear();
        c.categories.clear();
        assert_eq!(apply(&rows, &c), rows);
    }

    #[test]
    fn filter_is_stable_subsequence_and_idempotent() {
        let rows = sample();
        let mut c = Criteria::defaults(&rows);
        c.categories = ["Y".to_string()].into();

        let once = apply(&rows, &c);
        assert_eq!(once, vec![rows[1].clone(), rows[2].clone()]);
        assert_eq!(apply(&once, &c), once);
    }

    #[test]
    fn name_query_is_case_insensitive_substring() {
        let rows = sample();
        let mut c = Criteria::defaults(&rows);
        c.name_query = "sAbUn".to_string();
        assert_eq!(filtered_indices(&rows, &c), vec![0]);

        c.name_query = "  ".to_string();
        assert_eq!(filtered_indices(&rows, &c), vec![0, 1, 2]);
    }

    #[test]
    fn missing_name_never_matches_a_query() {
        let mut rows = sample();
        rows[1].nama_barang = None;
        let mut c = Criteria::defaults(&rows);

        c.name_query = "kopi".to_string();
        assert!(filtered_indices(&rows, &c).is_empty());

        // But an empty query keeps nameless rows.
        c.name_query.clear();
        assert_eq!(filtered_indices(&rows, &c).len(), 3);
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let rows = sample();
        let mut c = Criteria::defaults(&rows);
        c.stock_range = (9, 2);
        assert!(apply(&rows, &c).is_empty());
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let c = Criteria::defaults(&[]);
        assert!(apply(&[], &c).is_empty());
        assert!(filtered_indices(&[], &c).is_empty());
    }
}
