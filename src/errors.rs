//! Errors
//!
//! Custom error types used throughout the `hwe` crate.
use thiserror::Error;

/// Errors that can occur during a Hardy-Weinberg analysis.
#[derive(Debug, Error)]
pub enum HweError {
    /// Allele frequencies at a locus do not sum to 1.
    #[error("The sum of all genotype frequencies must equal 1, squared sum was {0}.")]
    FrequencySum(f64),
    /// Expected and observed data sets differ in length.
    #[error("The observed and expected data sets are not of the same size: {0} expected, {1} observed.")]
    LengthMismatch(usize, usize),
    /// No critical value tabulated for the requested parameters.
    #[error("No critical value tabulated for dof {dof} at significance level {p}.")]
    MissingCriticalValue { dof: usize, p: f64 },
    /// Unable to read the critical value table.
    #[error("Unable to read the critical value table: {0}")]
    TableIo(#[from] std::io::Error),
    /// Invalid field in the critical value table.
    #[error("Invalid value {0} in the critical value table, expected a real number.")]
    TableParse(String),
}
