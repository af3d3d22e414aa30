//! Tabular query results
//!
//! Cells are kept as the text the service returned; numeric access parses on demand.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Rows returned by a catalog query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    /// Column names, in service order
    pub columns: Vec<String>,
    /// Row cells, one per column
    pub rows: Vec<Vec<String>>,
}

impl ResultTable {
    /// Create an empty table with the given columns
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Parse a CSV document with a header row
    pub fn from_csv(text: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.as_bytes());

        let columns = reader
            .headers()?
            .iter()
            .map(|name| name.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { columns, rows })
    }

    /// Serialize back to CSV with a header row
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| Error::table(format!("failed to flush CSV writer: {}", e)))?;
        String::from_utf8(bytes).map_err(|e| Error::table(e.to_string()))
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column, matched case-insensitively as ADQL column names are
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .or_else(|| self.columns.iter().position(|c| c.eq_ignore_ascii_case(name)))
    }

    /// Whether a column exists
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    fn require(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| Error::table(format!("column '{}' not in result", name)))
    }

    /// Column cells as text
    pub fn column_str(&self, name: &str) -> Result<Vec<&str>> {
        let idx = self.require(name)?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(idx).map(String::as_str).unwrap_or(""))
            .collect())
    }

    /// Column cells parsed as numbers; empty and null cells become `None`
    pub fn column_f64(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let idx = self.require(name)?;
        self.rows
            .iter()
            .enumerate()
            .map(|(row_no, row)| {
                let cell = row.get(idx).map(|c| c.trim()).unwrap_or("");
                if cell.is_empty() || cell.eq_ignore_ascii_case("null") || cell.eq_ignore_ascii_case("nan") {
                    return Ok(None);
                }
                cell.parse::<f64>().map(Some).map_err(|_| {
                    Error::table(format!(
                        "row {}: column '{}' value '{}' is not numeric",
                        row_no, name, cell
                    ))
                })
            })
            .collect()
    }

    /// Append a column; `values` must have one entry per row
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<String>) -> Result<()> {
        let name = name.into();
        if values.len() != self.rows.len() {
            return Err(Error::table(format!(
                "column '{}' has {} values for {} rows",
                name,
                values.len(),
                self.rows.len()
            )));
        }
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
        self.columns.push(name);
        Ok(())
    }

    /// Replace a column if present, append otherwise
    pub fn set_column(&mut self, name: &str, values: Vec<String>) -> Result<()> {
        match self.column_index(name) {
            Some(idx) => {
                if values.len() != self.rows.len() {
                    return Err(Error::table(format!(
                        "column '{}' has {} values for {} rows",
                        name,
                        values.len(),
                        self.rows.len()
                    )));
                }
                for (row, value) in self.rows.iter_mut().zip(values) {
                    if let Some(cell) = row.get_mut(idx) {
                        *cell = value;
                    }
                }
                Ok(())
            }
            None => self.push_column(name, values),
        }
    }

    /// Keep rows whose index passes `keep`
    pub fn filter_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(usize) -> bool,
    {
        let mut idx = 0;
        self.rows.retain(|_| {
            let k = keep(idx);
            idx += 1;
            k
        });
    }

    /// First `n` rows
    pub fn head(&self, n: usize) -> ResultTable {
        ResultTable {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}
