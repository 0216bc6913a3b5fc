//! Testing
//!
//! Chi-squared goodness-of-fit statistic and the hypothesis test deciding
//! whether observed genotype counts deviate from Hardy-Weinberg expectations.
use crate::critical_values::CriticalValueTable;
use crate::errors::HweError;
use log::debug;

/// Compute the chi-squared goodness-of-fit statistic
/// `sum((1 / e) * (e - o)^2)` over corresponding expected and observed
/// counts.
///
/// Fails with [`HweError::LengthMismatch`] when the two sequences differ in
/// length. Zero or negative expected counts are not guarded against; keeping
/// them out of the input is the caller's responsibility.
pub fn chi_squared_test(expected: &[f64], observed: &[f64]) -> Result<f64, HweError> {
    if observed.len() != expected.len() {
        return Err(HweError::LengthMismatch(expected.len(), observed.len()));
    }
    let mut result = 0.0;
    for (e, o) in expected.iter().zip(observed) {
        result += (1.0 / e) * (e - o).powi(2);
    }
    Ok(result)
}

/// Test the null hypothesis that the observed counts follow the expected
/// Hardy-Weinberg distribution.
///
/// Returns `true` (reject the null hypothesis) iff the chi-squared statistic
/// strictly exceeds the tabulated critical value for `dof` degrees of
/// freedom at significance level `p`. A critical value lookup miss is an
/// explicit [`HweError::MissingCriticalValue`], never a silent comparison
/// against an absent threshold.
pub fn reject_null_hypothesis(
    expected: &[f64],
    observed: &[f64],
    dof: usize,
    p: f64,
    table: &CriticalValueTable,
) -> Result<bool, HweError> {
    let chi_squared = chi_squared_test(expected, observed)?;
    let critical_value = table
        .critical_value(dof, p)
        .ok_or(HweError::MissingCriticalValue { dof, p })?;
    debug!("chi squared: {}", chi_squared);
    debug!("critical value: {}", critical_value);
    Ok(chi_squared > critical_value)
}
