use thiserror::Error;

use super::model::{required_fields, CellValue, RawTable, Record, ValidTable};

// ---------------------------------------------------------------------------
// SchemaError – an uploaded file does not match the required columns
// ---------------------------------------------------------------------------

/// Raised when an uploaded table is missing one or more required columns.
/// The batch halts on the first file that triggers this.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Kolom file {file_name} tidak sesuai format! (kolom hilang: {})", .missing_columns.join(", "))]
pub struct SchemaError {
    pub file_name: String,
    /// Required columns absent from the file, in schema order.
    pub missing_columns: Vec<String>,
}

// ---------------------------------------------------------------------------
// Validation + projection
// ---------------------------------------------------------------------------

/// Check a parsed table against the required schema and project its rows
/// into typed [`Record`]s.
///
/// The check is presence-only: every required column name must appear among
/// the table's columns, compared case-sensitively. Column order does not
/// matter and extra columns are ignored. Cell contents are never validated;
/// coercion is lenient (see [`CellValue`]), except that a blank item-name
/// cell becomes `None` rather than an empty string.
pub fn validate(table: RawTable) -> Result<ValidTable, SchemaError> {
    let missing: Vec<String> = required_fields()
        .filter(|req| !table.columns.iter().any(|c| c == req))
        .map(str::to_string)
        .collect();

    if !missing.is_empty() {
        return Err(SchemaError {
            file_name: table.source,
            missing_columns: missing,
        });
    }

    // All six exist, so position lookup cannot fail past this point.
    let idx_of = |name: &str| table.columns.iter().position(|c| c == name).unwrap_or(0);
    let idx = [
        idx_of("No"),
        idx_of("Distributor"),
        idx_of("Kategori"),
        idx_of("Nama Barang"),
        idx_of("Stok"),
        idx_of("Harga"),
    ];

    let cell = |row: &[CellValue], i: usize| row.get(i).cloned().unwrap_or(CellValue::Empty);

    let records = table
        .rows
        .iter()
        .map(|row| Record {
            no: cell(row, idx[0]).as_i64(),
            distributor: cell(row, idx[1]).as_text().unwrap_or_default(),
            kategori: cell(row, idx[2]).as_text().unwrap_or_default(),
            nama_barang: cell(row, idx[3]).as_text(),
            stok: cell(row, idx[4]).as_i64(),
            harga: cell(row, idx[5]).as_f64(),
        })
        .collect();

    Ok(ValidTable {
        source: table.source,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::REQUIRED_COLUMNS;

    fn raw(source: &str, columns: &[&str], rows: Vec<Vec<CellValue>>) -> RawTable {
        RawTable {
            source: source.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    fn full_row() -> Vec<CellValue> {
        vec![
            CellValue::Integer(1),
            CellValue::Text("PT Maju".into()),
            CellValue::Text("Minuman".into()),
            CellValue::Text("Kopi Bubuk".into()),
            CellValue::Integer(12),
            CellValue::Float(15000.0),
        ]
    }

    #[test]
    fn accepts_exact_schema() {
        let table = raw("ok.xlsx", &REQUIRED_COLUMNS, vec![full_row()]);
        let valid = validate(table).unwrap();
        assert_eq!(valid.records.len(), 1);
        let r = &valid.records[0];
        assert_eq!(r.no, 1);
        assert_eq!(r.distributor, "PT Maju");
        assert_eq!(r.kategori, "Minuman");
        assert_eq!(r.nama_barang.as_deref(), Some("Kopi Bubuk"));
        assert_eq!(r.stok, 12);
        assert_eq!(r.harga, 15000.0);
    }

    #[test]
    fn accepts_extra_columns_and_any_order() {
        let table = raw(
            "extra.xlsx",
            &["Harga", "Stok", "Catatan", "Nama Barang", "Kategori", "Distributor", "No"],
            vec![vec![
                CellValue::Float(200.0),
                CellValue::Integer(4),
                CellValue::Text("promo".into()),
                CellValue::Text("Teh".into()),
                CellValue::Text("Minuman".into()),
                CellValue::Text("PT Jaya".into()),
                CellValue::Integer(7),
            ]],
        );
        let valid = validate(table).unwrap();
        let r = &valid.records[0];
        assert_eq!(r.no, 7);
        assert_eq!(r.harga, 200.0);
        assert_eq!(r.stok, 4);
        assert_eq!(r.distributor, "PT Jaya");
    }

    #[test]
    fn rejects_each_missing_column() {
        for dropped in REQUIRED_COLUMNS {
            let cols: Vec<&str> = REQUIRED_COLUMNS
                .iter()
                .copied()
                .filter(|c| *c != dropped)
                .collect();
            let err = validate(raw("bad.xlsx", &cols, vec![])).unwrap_err();
            assert_eq!(err.file_name, "bad.xlsx");
            assert_eq!(err.missing_columns, vec![dropped.to_string()]);
        }
    }

    #[test]
    fn column_match_is_case_sensitive() {
        let cols = ["no", "distributor", "kategori", "nama barang", "stok", "harga"];
        let err = validate(raw("lower.csv", &cols, vec![])).unwrap_err();
        assert_eq!(err.missing_columns.len(), 6);
    }

    #[test]
    fn error_message_names_the_file() {
        let err = validate(raw("stok_b.xlsx", &["No", "Distributor", "Kategori", "Nama Barang", "Stok"], vec![]))
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("stok_b.xlsx"));
        assert!(msg.contains("Harga"));
    }

    #[test]
    fn blank_name_cell_becomes_none() {
        let mut row = full_row();
        row[3] = CellValue::Empty;
        let valid = validate(raw("ok.csv", &REQUIRED_COLUMNS, vec![row])).unwrap();
        assert_eq!(valid.records[0].nama_barang, None);
    }

    #[test]
    fn short_rows_are_padded_with_empty() {
        let valid = validate(raw(
            "short.csv",
            &REQUIRED_COLUMNS,
            vec![vec![CellValue::Integer(1), CellValue::Text("PT Maju".into())]],
        ))
        .unwrap();
        let r = &valid.records[0];
        assert_eq!(r.kategori, "");
        assert_eq!(r.stok, 0);
        assert_eq!(r.harga, 0.0);
    }
}
