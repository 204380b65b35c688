use anyhow::Result;
use rust_xlsxwriter::Workbook;

use super::model::{Record, REQUIRED_COLUMNS};

/// Worksheet name of the exported workbook.
pub const SHEET_NAME: &str = "Stok Barang";

/// Suggested file name offered in the save dialog.
pub const SUGGESTED_FILE_NAME: &str = "hasil_analisis_stok.xlsx";

/// MIME type of the exported bytes.
pub const MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Serialize a table into a single-sheet xlsx workbook.
///
/// The header row is the six schema columns in schema order, followed by one
/// row per record in table order. No synthetic index column is added; `No`
/// is user data and is written as-is.
pub fn encode(rows: &[Record]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, name) in REQUIRED_COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *name)?;
    }

    for (i, record) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_number(row, 0, record.no as f64)?;
        sheet.write_string(row, 1, &record.distributor)?;
        sheet.write_string(row, 2, &record.kategori)?;
        if let Some(name) = &record.nama_barang {
            sheet.write_string(row, 3, name)?;
        }
        sheet.write_number(row, 4, record.stok as f64)?;
        sheet.write_number(row, 5, record.harga)?;
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;
    use calamine::{Reader, Xlsx};
    use std::io::Cursor;

    #[test]
    fn round_trips_through_calamine() {
        let rows = vec![
            record(1, "PT Maju", "Minuman", "Kopi Bubuk", 12, 15000.0),
            record(2, "PT Jaya", "Sabun", "Sabun Mandi", 4, 3500.5),
        ];

        let bytes = encode(&rows).unwrap();
        let mut workbook = Xlsx::new(Cursor::new(bytes)).unwrap();
        let range = workbook.worksheet_range(SHEET_NAME).unwrap();

        let parsed: Vec<Vec<String>> = range
            .rows()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect();

        assert_eq!(parsed[0], REQUIRED_COLUMNS.map(str::to_string).to_vec());
        assert_eq!(
            parsed[1],
            vec!["1", "PT Maju", "Minuman", "Kopi Bubuk", "12", "15000"]
        );
        assert_eq!(
            parsed[2],
            vec!["2", "PT Jaya", "Sabun", "Sabun Mandi", "4", "3500.5"]
        );
    }

    #[test]
    fn empty_table_still_has_the_header_row() {
        let bytes = encode(&[]).unwrap();
        let mut workbook = Xlsx::new(Cursor::new(bytes)).unwrap();
        let range = workbook.worksheet_range(SHEET_NAME).unwrap();
        assert_eq!(range.rows().count(), 1);
    }

    #[test]
    fn missing_name_exports_as_blank_cell() {
        let mut row = record(1, "PT Maju", "Minuman", "x", 1, 10.0);
        row.nama_barang = None;

        let bytes = encode(&[row]).unwrap();
        let mut workbook = Xlsx::new(Cursor::new(bytes)).unwrap();
        let range = workbook.worksheet_range(SHEET_NAME).unwrap();
        let data_row: Vec<String> = range
            .rows()
            .nth(1)
            .unwrap()
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(data_row[3], "");
    }
}
