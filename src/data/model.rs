use std::fmt;

// ---------------------------------------------------------------------------
// Schema – the fixed required column set
// ---------------------------------------------------------------------------

/// Required column names, in schema order. Matching is exact and
/// case-sensitive; these double as the export header row.
pub const REQUIRED_COLUMNS: [&str; 6] =
    ["No", "Distributor", "Kategori", "Nama Barang", "Stok", "Harga"];

/// The required column names in schema order.
pub fn required_fields() -> impl Iterator<Item = &'static str> {
    REQUIRED_COLUMNS.into_iter()
}

// ---------------------------------------------------------------------------
// CellValue – one loosely-typed cell of a freshly parsed file
// ---------------------------------------------------------------------------

/// A raw cell as it comes out of a spreadsheet / CSV / JSON parser, before
/// the ingest boundary coerces it into a [`Record`] field.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Empty,
}

impl CellValue {
    /// Lenient integer coercion: integers pass through, floats truncate,
    /// numeric text parses. Anything else is zero.
    pub fn as_i64(&self) -> i64 {
        match self {
            CellValue::Integer(i) => *i,
            CellValue::Float(f) => *f as i64,
            CellValue::Bool(b) => *b as i64,
            CellValue::Text(s) => s
                .trim()
                .parse::<i64>()
                .or_else(|_| s.trim().parse::<f64>().map(|f| f as i64))
                .unwrap_or(0),
            CellValue::Empty => 0,
        }
    }

    /// Lenient float coercion, same spirit as [`CellValue::as_i64`].
    pub fn as_f64(&self) -> f64 {
        match self {
            CellValue::Integer(i) => *i as f64,
            CellValue::Float(f) => *f,
            CellValue::Bool(b) => *b as i64 as f64,
            CellValue::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            CellValue::Empty => 0.0,
        }
    }

    /// Text rendering of the cell; `None` for an empty cell so callers can
    /// distinguish "blank" from an actual empty string.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Integer(i) => Some(i.to_string()),
            CellValue::Float(f) => Some(f.to_string()),
            CellValue::Bool(b) => Some(b.to_string()),
            CellValue::Empty => None,
        }
    }

}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Empty => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// RawTable – one parsed file, shape not yet checked
// ---------------------------------------------------------------------------

/// One uploaded file as parsed by the loader: header names in file order and
/// one cell row per data row. Column lookup by string happens only here, at
/// the ingest boundary.
#[derive(Debug, Clone)]
pub struct RawTable {
    /// File name, kept for error reporting.
    pub source: String,
    /// Column names as they appear in the file.
    pub columns: Vec<String>,
    /// Rows of cells, one per column (padded with `Empty` for short rows).
    pub rows: Vec<Vec<CellValue>>,
}

// ---------------------------------------------------------------------------
// Record – one inventory line
// ---------------------------------------------------------------------------

/// A single inventory line item. `no` is user data, not a row index, and is
/// not required to be unique across distributors.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub no: i64,
    pub distributor: String,
    pub kategori: String,
    /// Item name; source files may leave the cell blank.
    pub nama_barang: Option<String>,
    pub stok: i64,
    pub harga: f64,
}

// ---------------------------------------------------------------------------
// ValidTable – a schema-checked file, ready to merge
// ---------------------------------------------------------------------------

/// A [`RawTable`] that passed validation, projected onto the schema columns.
/// Only the validator constructs these, so appending one cannot fail.
#[derive(Debug, Clone)]
pub struct ValidTable {
    pub source: String,
    pub records: Vec<Record>,
}

// ---------------------------------------------------------------------------
// MergeStore – session-lifetime accumulator of ingested records
// ---------------------------------------------------------------------------

/// Append-only accumulator of every validated row ingested this session.
/// Rows keep their original values and upload order; nothing dedupes,
/// re-sorts, or renumbers them. Owned by the session state, never shared.
#[derive(Debug, Default)]
pub struct MergeStore {
    rows: Vec<Record>,
}

impl MergeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenate a validated file's rows onto the end of the store.
    pub fn append(&mut self, table: ValidTable) {
        self.rows.extend(table.records);
    }

    /// Read-only view of all rows in upload order.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
