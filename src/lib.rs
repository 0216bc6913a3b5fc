// Modules
pub mod allele;
pub mod critical_values;
pub mod errors;
pub mod expansion;
pub mod gene;
pub mod genotype;
pub mod testing;

// Individual classes, and functions
pub use allele::Allele;
pub use critical_values::{chi_square_critical_value, CriticalValueTable};
pub use errors::HweError;
pub use expansion::squared_expansion;
pub use gene::Gene;
pub use genotype::Genotype;
pub use testing::{chi_squared_test, reject_null_hypothesis};

/// Default significance level for hypothesis tests.
pub const DEFAULT_SIGNIFICANCE_LEVEL: f64 = 0.05;
