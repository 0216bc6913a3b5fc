//! Critical Values
//!
//! Lookup of chi-squared critical values from an external tabulated resource.
//! The table is a plain-text grid with whitespace-separated fields: row 0
//! holds significance-complement values (a header of `0.95` serves lookups at
//! `p = 0.05`), and each following row `i` holds the critical values for
//! `dof = i`. The crate never generates or validates the table contents.
use crate::errors::HweError;
use std::fs;
use std::path::Path;

/// A parsed chi-squared critical value table. The backing resource is
/// injected, either as a file path or as in-memory text, so lookups stay
/// testable without touching the filesystem.
#[derive(Debug, Clone)]
pub struct CriticalValueTable {
    rows: Vec<Vec<f64>>,
}

impl CriticalValueTable {
    /// Read and parse the table from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, HweError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse the table from whitespace-separated grid text.
    pub fn parse(text: &str) -> Result<Self, HweError> {
        let mut rows = Vec::new();
        for line in text.lines() {
            let row = line
                .split_whitespace()
                .map(|field| {
                    field
                        .parse::<f64>()
                        .map_err(|_| HweError::TableParse(field.to_string()))
                })
                .collect::<Result<Vec<f64>, HweError>>()?;
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Ok(CriticalValueTable { rows })
    }

    /// Look up the critical value for `dof` degrees of freedom at
    /// significance level `p`.
    ///
    /// The column is matched where the header value equals `1 - p` by exact
    /// floating-point comparison; a near-miss significance level yields
    /// `None` rather than the nearest column. `None` is also returned when
    /// `dof` falls outside the tabulated rows (row 0 is the header, so
    /// `dof = 0` is never tabulated).
    pub fn critical_value(&self, dof: usize, p: f64) -> Option<f64> {
        let header = self.rows.first()?;
        let col_num = header.iter().position(|&col| col == 1.0 - p)?;
        if dof == 0 || dof >= self.rows.len() {
            return None;
        }
        self.rows[dof].get(col_num).copied()
    }
}

/// One scoped read of the table at `path` followed by a single lookup. The
/// file is read fresh on every call, no handle or cache is retained.
pub fn chi_square_critical_value<P: AsRef<Path>>(
    path: P,
    dof: usize,
    p: f64,
) -> Result<Option<f64>, HweError> {
    let table = CriticalValueTable::load(path)?;
    Ok(table.critical_value(dof, p))
}
