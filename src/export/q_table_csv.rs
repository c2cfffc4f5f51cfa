//! CSV export of a learned Q-table

use std::{fs::File, io::Write, path::Path};

use serde::Serialize;

use crate::{
    Error, Result,
    grid::Action,
    q_learning::QTable,
};

/// A single row in the Q-table CSV export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QTableRecord {
    pub row: i32,
    pub col: i32,
    pub right: f64,
    pub left: f64,
    pub down: f64,
    pub up: f64,
    /// Action the greedy policy takes in this state
    pub greedy: String,
}

/// Exporter for Q-table CSV files
pub struct QTableCsvExporter;

impl QTableCsvExporter {
    /// Build one record per state in row-major order
    pub fn records(q_table: &QTable) -> Vec<QTableRecord> {
        q_table
            .iter()
            .map(|(coord, values)| QTableRecord {
                row: coord.row,
                col: coord.col,
                right: values[Action::Right.index()],
                left: values[Action::Left.index()],
                down: values[Action::Down.index()],
                up: values[Action::Up.index()],
                greedy: q_table
                    .greedy_action(coord)
                    .map(|a| format!("{a:?}"))
                    .unwrap_or_default(),
            })
            .collect()
    }

    /// Write the table as CSV with a header row
    pub fn write<W: Write>(q_table: &QTable, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for record in Self::records(q_table) {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Write the table to a CSV file at `path`
    pub fn write_to_file<P: AsRef<Path>>(q_table: &QTable, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create CSV file {}", path.display()),
            source,
        })?;
        Self::write(q_table, file)
    }
}
