//! Genotype
//!
//! One allele-pair combination at a locus, together with its expected and
//! observed frequencies.
use crate::allele::Allele;
use std::sync::Arc;

/// A pair of alleles an individual can carry at a locus. Created exclusively
/// by [`crate::gene::Gene`] during genotype derivation and never mutated
/// afterwards. Holds shared read-only references to the alleles owned by its
/// parent gene rather than copies.
#[derive(Debug, Clone)]
pub struct Genotype {
    /// The allele pair. Biologically unordered, stored as an ordered 2-tuple.
    pub alleles: (Arc<Allele>, Arc<Allele>),
    /// Expected frequency under Hardy-Weinberg equilibrium.
    pub exp_frequency: f64,
    /// Observed frequency, caller-supplied. Defaults to 0.
    pub obs_frequency: f64,
}

impl Genotype {
    pub(crate) fn new(alleles: (Arc<Allele>, Arc<Allele>), exp_frequency: f64) -> Self {
        Genotype {
            alleles,
            exp_frequency,
            obs_frequency: 0.0,
        }
    }

    /// Identity key: the sum of the two allele indices. Note this key is
    /// ambiguous for heterozygous pairs whose index sums collide, e.g.
    /// indices (0, 3) and (1, 2) both yield 3. With two alleles per locus
    /// the three genotypes map to distinct ids 0, 1 and 2.
    pub fn genotype_id(&self) -> usize {
        self.alleles.0.index + self.alleles.1.index
    }

    /// True iff both alleles of the pair are the same variant.
    pub fn is_homozygote(&self) -> bool {
        self.alleles.0.index == self.alleles.1.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(i: usize, j: usize) -> (Arc<Allele>, Arc<Allele>) {
        (
            Arc::new(Allele::new(i, "A", 1, 0.5)),
            Arc::new(Allele::new(j, "a", 0, 0.5)),
        )
    }

    #[test]
    fn test_homozygote_detection() {
        assert!(Genotype::new(pair(0, 0), 0.25).is_homozygote());
        assert!(!Genotype::new(pair(0, 1), 0.5).is_homozygote());
    }

    #[test]
    fn test_genotype_id_is_index_sum() {
        assert_eq!(Genotype::new(pair(0, 0), 0.25).genotype_id(), 0);
        assert_eq!(Genotype::new(pair(0, 1), 0.5).genotype_id(), 1);
        assert_eq!(Genotype::new(pair(1, 1), 0.25).genotype_id(), 2);
        // Known collision for wider loci: (0,3) and (1,2) share an id.
        assert_eq!(
            Genotype::new(pair(0, 3), 0.0).genotype_id(),
            Genotype::new(pair(1, 2), 0.0).genotype_id()
        );
    }

    #[test]
    fn test_obs_frequency_defaults_to_zero() {
        let g = Genotype::new(pair(0, 1), 0.5);
        assert_eq!(g.obs_frequency, 0.0);
    }
}
