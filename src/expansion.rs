//! Frequency Expansion
//!
//! Coefficients of the squared multinomial `(p1 + p2 + ... + pn)^2`, keyed by
//! unordered index pair. For two allele frequencies `p` and `q` summing to 1
//! these are exactly the Hardy-Weinberg genotype frequencies `p^2`, `2pq`
//! and `q^2`.
use hashbrown::HashSet;

/// Expand the square of the sum of `values`, returning every unordered index
/// pair `(i, j)` with `i <= j` exactly once, paired with its coefficient:
/// `values[i]^2` on the diagonal and `2 * values[i] * values[j]` off it.
///
/// The output order is deterministic: pairs appear in nested-loop order,
/// so for two values it is always `(0,0), (0,1), (1,1)`.
// TODO only the binomial (two-allele) case is wired into genotype modeling;
// larger inputs yield valid pairwise coefficients but nothing consumes them.
pub fn squared_expansion(values: &[f64]) -> Vec<((usize, usize), f64)> {
    let mut result = Vec::new();
    let mut combos: HashSet<(usize, usize)> = HashSet::new();
    for (idx1, v1) in values.iter().enumerate() {
        for (idx2, v2) in values.iter().enumerate() {
            // Guard against emitting both (i, j) and (j, i).
            if combos.contains(&(idx1, idx2)) {
                continue;
            }
            if idx1 == idx2 {
                result.push(((idx1, idx2), v1 * v2));
            } else {
                result.push(((idx1, idx2), 2.0 * v1 * v2));
            }
            combos.insert((idx1, idx2));
            combos.insert((idx2, idx1));
        }
    }
    result
}
