use std::path::Path;

use anyhow::{bail, Context, Result};
use calamine::{open_workbook_auto, Data, Reader};
use serde_json::Value as JsonValue;

use super::model::{CellValue, RawTable};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Parse one uploaded file into a [`RawTable`].  Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xls` – Excel workbook, first worksheet, first row is the header
/// * `.csv`           – header row with column names
/// * `.json`          – `[{ "No": 1, "Distributor": "...", ... }, ...]`
///
/// Parsing knows nothing about the schema; the validator checks the shape.
pub fn load_file(path: &Path) -> Result<RawTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "xlsx" | "xls" => load_excel(path),
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unnamed>")
        .to_string()
}

// ---------------------------------------------------------------------------
// Excel loader
// ---------------------------------------------------------------------------

fn load_excel(path: &Path) -> Result<RawTable> {
    let mut workbook = open_workbook_auto(path).context("opening Excel workbook")?;
    let range = workbook
        .worksheet_range_at(0)
        .context("workbook has no worksheets")?
        .context("reading first worksheet")?;

    let mut rows_iter = range.rows();
    let columns: Vec<String> = rows_iter
        .next()
        .context("worksheet is empty, expected a header row")?
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    let rows: Vec<Vec<CellValue>> = rows_iter
        .map(|row| row.iter().map(excel_cell).collect())
        .collect();

    Ok(RawTable {
        source: source_name(path),
        columns,
        rows,
    })
}

fn excel_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) if s.trim().is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Float(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Empty,
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<RawTable> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let columns: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(record.iter().map(guess_cell_type).collect());
    }

    Ok(RawTable {
        source: source_name(path),
        columns,
        rows,
    })
}

fn guess_cell_type(s: &str) -> CellValue {
    let s = s.trim();
    if s.is_empty() {
        return CellValue::Empty;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    CellValue::Text(s.to_string())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')` shape.
/// Column order follows first appearance across the records.
fn load_json(path: &Path) -> Result<RawTable> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut columns: Vec<String> = Vec::new();
    let mut objects = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        for key in obj.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
        objects.push(obj);
    }

    let rows: Vec<Vec<CellValue>> = objects
        .iter()
        .map(|obj| {
            columns
                .iter()
                .map(|col| obj.get(col).map(json_cell).unwrap_or(CellValue::Empty))
                .collect()
        })
        .collect();

    Ok(RawTable {
        source: source_name(path),
        columns,
        rows,
    })
}

fn json_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) if s.trim().is_empty() => CellValue::Empty,
        JsonValue::String(s) => CellValue::Text(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::Text(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Empty,
        other => CellValue::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn csv_parses_headers_and_typed_cells() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "No,Distributor,Kategori,Nama Barang,Stok,Harga").unwrap();
        writeln!(file, "1,PT Maju,Minuman,Kopi Bubuk,12,15000").unwrap();
        writeln!(file, "2,PT Maju,Minuman,,0,2500.5").unwrap();

        let table = load_file(file.path()).unwrap();
        assert_eq!(
            table.columns,
            vec!["No", "Distributor", "Kategori", "Nama Barang", "Stok", "Harga"]
        );
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][0], CellValue::Integer(1));
        assert_eq!(table.rows[0][3], CellValue::Text("Kopi Bubuk".into()));
        assert_eq!(table.rows[1][3], CellValue::Empty);
        assert_eq!(table.rows[1][5], CellValue::Float(2500.5));
    }

    #[test]
    fn json_keeps_first_seen_column_order() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[{{"No": 1, "Distributor": "PT Maju", "Stok": 3}},
                {{"No": 2, "Distributor": "PT Jaya", "Stok": 5, "Harga": 100.0}}]"#
        )
        .unwrap();

        let table = load_file(file.path()).unwrap();
        assert_eq!(table.columns, vec!["No", "Distributor", "Stok", "Harga"]);
        assert_eq!(table.rows[0][3], CellValue::Empty);
        assert_eq!(table.rows[1][3], CellValue::Float(100.0));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = load_file(Path::new("data.parquet")).unwrap_err();
        assert!(err.to_string().contains("parquet"));
    }

    #[test]
    fn source_is_the_file_name_not_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stok_a.csv");
        std::fs::write(&path, "No,Distributor\n1,PT Maju\n").unwrap();
        let table = load_file(&path).unwrap();
        assert_eq!(table.source, "stok_a.csv");
    }
}
