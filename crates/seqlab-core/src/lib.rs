pub mod analysis;
pub mod codon;
pub mod operations;
pub mod search;
pub mod sequence;
pub mod sites;
pub mod weight;

use std::collections::BTreeSet;

use thiserror::Error;

pub use analysis::{analyze_batch, analyze_single, AnalysisResult};
pub use sequence::{Sequence, SequenceType};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("unknown sequence type `{0}`, expected DNA or RNA")]
    InvalidSequenceType(String),
    #[error("invalid bases for {kind}: {bases:?}")]
    InvalidBases {
        kind: SequenceType,
        bases: BTreeSet<char>,
    },
    #[error("{operation} requires {expected} input, got {actual}")]
    UnsupportedOperation {
        operation: &'static str,
        expected: SequenceType,
        actual: SequenceType,
    },
}
