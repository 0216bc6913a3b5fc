//! Allele
//!
//! A single allele variant at a genetic locus, with its population frequency.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One allele variant. Constructed once by the caller and read-only
/// afterwards; no validation happens at this level, the frequency
/// invariant is enforced by [`crate::gene::Gene`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allele {
    /// Position of the allele within its locus, unique per locus.
    pub index: usize,
    /// Display label, e.g. "A" or "a". No uniqueness enforced.
    #[serde(rename = "name")]
    pub symbol: String,
    /// 1 for dominant, 0 for recessive. Descriptive only, unused in
    /// any computation.
    pub dominance: u8,
    /// Population frequency in [0, 1].
    pub frequency: f64,
}

impl Allele {
    pub fn new(index: usize, symbol: &str, dominance: u8, frequency: f64) -> Self {
        Allele {
            index,
            symbol: symbol.to_string(),
            dominance,
            frequency,
        }
    }

    /// Export the allele as a key-value mapping with the fields
    /// `index`, `name`, `dominance` and `frequency`.
    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            // A struct with named fields always serializes to an object.
            _ => unreachable!(),
        }
    }
}
