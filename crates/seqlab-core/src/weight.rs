use crate::sequence::{Sequence, SequenceType};

/// Water lost per phosphodiester bond, in Daltons.
const WATER: f64 = 18.0;

/// Monomer (nucleotide monophosphate) weight in Daltons. Bases outside the
/// table, e.g. `N`, weigh nothing.
pub fn monomer_weight(kind: SequenceType, base: char) -> f64 {
    match kind {
        SequenceType::Dna => match base {
            'A' => 331.2,
            'T' => 322.2,
            'C' => 307.2,
            'G' => 347.2,
            _ => 0.0,
        },
        SequenceType::Rna => match base {
            'A' => 347.2,
            'U' => 324.2,
            'C' => 323.2,
            'G' => 363.2,
            _ => 0.0,
        },
    }
}

/// Approximate molecular weight in Daltons, rounded to 2 decimals.
///
/// Sum of monomer weights minus one water per bond formed. Sequences of
/// length 0 or 1 have no bonds, so the raw sum is returned as-is.
pub fn molecular_weight(sequence: &Sequence) -> f64 {
    let kind = sequence.kind();
    let total: f64 = sequence
        .as_str()
        .chars()
        .map(|base| monomer_weight(kind, base))
        .sum();

    let adjusted = if sequence.len() > 1 {
        total - (sequence.len() - 1) as f64 * WATER
    } else {
        total
    };

    round2(adjusted)
}

/// Round to 2 decimal places for presentation.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
