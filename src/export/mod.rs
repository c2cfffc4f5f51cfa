//! Export functionality for inspecting learned values
//!
//! Currently supports CSV export of a Q-table, one row per state.

mod q_table_csv;

pub use q_table_csv::{QTableCsvExporter, QTableRecord};
