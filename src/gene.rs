//! Gene
//!
//! Two alleles at one locus, validated and expanded into the full set of
//! genotypes with their expected Hardy-Weinberg frequencies.
use crate::allele::Allele;
use crate::errors::HweError;
use crate::expansion::squared_expansion;
use crate::genotype::Genotype;
use std::sync::Arc;

/// A two-allele locus within a population. Construction validates the allele
/// frequencies and eagerly derives the three genotypes, in the stable order
/// homozygous-p, heterozygous, homozygous-q.
#[derive(Debug, Clone)]
pub struct Gene {
    alleles: [Arc<Allele>; 2],
    popsize: usize,
    genotypes: Vec<Genotype>,
}

impl Gene {
    /// Construct a gene from two alleles and a population size.
    ///
    /// The squared sum of the two allele frequencies must equal exactly 1.0.
    /// This is an exact floating-point comparison, not a tolerance check:
    /// frequencies that merely come close, such as 0.5000001 and 0.4999998,
    /// are rejected with [`HweError::FrequencySum`].
    pub fn new(alleles: [Allele; 2], popsize: usize) -> Result<Self, HweError> {
        let squared_sum = (alleles[0].frequency + alleles[1].frequency).powi(2);
        if squared_sum != 1.0 {
            return Err(HweError::FrequencySum(squared_sum));
        }
        let [p, q] = alleles;
        let alleles = [Arc::new(p), Arc::new(q)];
        let genotypes = derive_genotypes(&alleles);
        Ok(Gene {
            alleles,
            popsize,
            genotypes,
        })
    }

    /// The two alleles at this locus.
    pub fn alleles(&self) -> &[Arc<Allele>; 2] {
        &self.alleles
    }

    /// Population size.
    pub fn popsize(&self) -> usize {
        self.popsize
    }

    /// The derived genotypes, in a deterministic order for a given input.
    pub fn genotypes(&self) -> &[Genotype] {
        &self.genotypes
    }

    /// Expected genotype counts: each expected frequency scaled by the
    /// population size, aligned with [`Gene::genotypes`].
    pub fn expected_counts(&self) -> Vec<f64> {
        self.genotypes
            .iter()
            .map(|g| g.exp_frequency * self.popsize as f64)
            .collect()
    }
}

/// Run the frequency expansion over the allele frequencies and build one
/// genotype per unordered allele pair. A fresh vector is allocated on every
/// call.
fn derive_genotypes(alleles: &[Arc<Allele>; 2]) -> Vec<Genotype> {
    let frequencies: Vec<f64> = alleles.iter().map(|a| a.frequency).collect();
    let mut genotypes = Vec::new();
    for ((a1_idx, a2_idx), freq) in squared_expansion(&frequencies) {
        let pair = (Arc::clone(&alleles[a1_idx]), Arc::clone(&alleles[a2_idx]));
        genotypes.push(Genotype::new(pair, freq));
    }
    genotypes
}
