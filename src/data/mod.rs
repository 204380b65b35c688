/// Data layer: core types, loading, validation, filtering, and export.
///
/// Architecture:
/// ```text
///  .xlsx / .xls / .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → RawTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ validate  │  check required columns → ValidTable | SchemaError
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ MergeStore │  append-only Vec<Record>, session lifetime
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐      ┌──────────┐
///   │  filter   │ ───▶ │  export   │  criteria → view → xlsx bytes
///   └──────────┘      └──────────┘
/// ```
///
/// Everything here is pure and UI-independent; the egui layer only calls in.

pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod validate;
