use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AnalysisError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SequenceType {
    Dna,
    Rna,
}

impl SequenceType {
    /// Alphabet for this sequence type. `N` stands for any base.
    pub fn alphabet(&self) -> &'static [char] {
        match self {
            SequenceType::Dna => &['A', 'T', 'C', 'G', 'N'],
            SequenceType::Rna => &['A', 'U', 'C', 'G', 'N'],
        }
    }

    pub fn is_valid_base(&self, base: char) -> bool {
        self.alphabet().contains(&base)
    }
}

impl std::fmt::Display for SequenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceType::Dna => write!(f, "DNA"),
            SequenceType::Rna => write!(f, "RNA"),
        }
    }
}

impl FromStr for SequenceType {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DNA" => Ok(SequenceType::Dna),
            "RNA" => Ok(SequenceType::Rna),
            other => Err(AnalysisError::InvalidSequenceType(other.to_string())),
        }
    }
}

/// A validated, uppercase nucleic-acid sequence tagged with its type.
///
/// Construction is the only validation gate: every analysis routine that
/// takes a `Sequence` may assume all symbols belong to the type's alphabet.
/// Deliberately not `Deserialize`; deserialization would skip the gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sequence {
    kind: SequenceType,
    text: String,
}

impl Sequence {
    /// Uppercase and validate `text` against the alphabet for `kind`.
    /// Empty input is valid.
    pub fn new(text: &str, kind: SequenceType) -> Result<Self, AnalysisError> {
        let text = text.to_uppercase();
        let invalid: BTreeSet<char> = text
            .chars()
            .filter(|c| !kind.is_valid_base(*c))
            .collect();
        if !invalid.is_empty() {
            return Err(AnalysisError::InvalidBases {
                kind,
                bases: invalid,
            });
        }
        Ok(Self { kind, text })
    }

    pub fn kind(&self) -> SequenceType {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
