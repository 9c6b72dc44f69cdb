use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::operations::gc_percent;
use crate::sequence::{Sequence, SequenceType};
use crate::sites::restriction_sites;
use crate::weight::{molecular_weight, round2};
use crate::AnalysisError;

/// Full analysis of one sequence. Percentages and weights are rounded to
/// 2 decimals here, at the presentation boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sequence: String,
    #[serde(rename = "type")]
    pub kind: SequenceType,
    pub length: usize,
    pub base_composition: BTreeMap<char, usize>,
    pub gc_content: f64,
    pub restriction_sites: BTreeMap<String, Vec<usize>>,
    pub molecular_weight: f64,
}

/// Per-symbol occurrence counts. Symbols not present in the sequence do
/// not appear in the map.
pub fn base_composition(sequence: &Sequence) -> BTreeMap<char, usize> {
    let mut counts = BTreeMap::new();
    for base in sequence.as_str().chars() {
        *counts.entry(base).or_insert(0) += 1;
    }
    counts
}

/// Validate and run the full analysis on a single sequence.
pub fn analyze_single(sequence: &str, kind: SequenceType) -> Result<AnalysisResult, AnalysisError> {
    let seq = Sequence::new(sequence, kind)?;

    Ok(AnalysisResult {
        sequence: seq.as_str().to_string(),
        kind: seq.kind(),
        length: seq.len(),
        base_composition: base_composition(&seq),
        gc_content: round2(gc_percent(seq.as_str())),
        restriction_sites: restriction_sites(seq.as_str()),
        molecular_weight: molecular_weight(&seq),
    })
}

/// Analyze a batch of DNA sequences in input order. The first invalid
/// sequence fails the whole batch; there is no partial-success mode.
pub fn analyze_batch<S: AsRef<str>>(sequences: &[S]) -> Result<Vec<AnalysisResult>, AnalysisError> {
    sequences
        .iter()
        .map(|s| analyze_single(s.as_ref(), SequenceType::Dna))
        .collect()
}
