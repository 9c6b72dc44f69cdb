use crate::codon::CodonTable;
use crate::sequence::{Sequence, SequenceType};
use crate::AnalysisError;

/// Transcribe a DNA sequence to RNA: T becomes U, everything else passes
/// through. 5'→3' direction is preserved (no reversal, no complement).
pub fn transcribe(sequence: &str) -> Result<String, AnalysisError> {
    let dna = Sequence::new(sequence, SequenceType::Dna)?;
    Ok(dna
        .as_str()
        .chars()
        .map(|b| if b == 'T' { 'U' } else { b })
        .collect())
}

/// Translate an RNA sequence to amino acids using the standard genetic
/// code. Codons are read left to right from offset 0; a trailing partial
/// codon is dropped.
pub fn translate(sequence: &str, kind: SequenceType) -> Result<String, AnalysisError> {
    if kind != SequenceType::Rna {
        return Err(AnalysisError::UnsupportedOperation {
            operation: "translate",
            expected: SequenceType::Rna,
            actual: kind,
        });
    }
    let rna = Sequence::new(sequence, SequenceType::Rna)?;
    let table = CodonTable::standard();
    let bases: Vec<char> = rna.as_str().chars().collect();
    let mut protein = String::with_capacity(bases.len() / 3);

    for chunk in bases.chunks(3) {
        if chunk.len() == 3 {
            let codon: String = chunk.iter().collect();
            protein.push(table.translate_codon(&codon));
        }
    }

    Ok(protein)
}

/// GC percentage (0–100) of a valid DNA sequence, full precision.
pub fn gc_content(sequence: &str) -> Result<f64, AnalysisError> {
    let dna = Sequence::new(sequence, SequenceType::Dna)?;
    Ok(gc_percent(dna.as_str()))
}

/// GC percentage over an already-uppercased sequence; 0.0 when empty.
pub fn gc_percent(seq: &str) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let gc_count = seq.chars().filter(|c| matches!(c, 'G' | 'C')).count();
    gc_count as f64 / seq.len() as f64 * 100.0
}

/// Complement a single DNA base
pub fn complement_base(base: char) -> char {
    match base.to_ascii_uppercase() {
        'A' => 'T',
        'T' => 'A',
        'G' => 'C',
        'C' => 'G',
        'N' => 'N',
        other => other,
    }
}

/// Reverse complement of a DNA sequence
pub fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().map(complement_base).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcribe() {
        assert_eq!(transcribe("ATCG").unwrap(), "AUCG");
        assert_eq!(transcribe("TTTT").unwrap(), "UUUU");
        assert_eq!(transcribe("").unwrap(), "");
    }

    #[test]
    fn test_transcribe_preserves_length() {
        let rna = transcribe("ATCGNATCG").unwrap();
        assert_eq!(rna.len(), 9);
        assert_eq!(rna, "AUCGNAUCG");
    }

    #[test]
    fn test_transcribe_rejects_invalid_dna() {
        let err = transcribe("AUCG").unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidBases { .. }));
    }

    #[test]
    fn test_translate() {
        assert_eq!(translate("AUGUAA", SequenceType::Rna).unwrap(), "M*");
        assert_eq!(translate("AUGAAAUUU", SequenceType::Rna).unwrap(), "MKF");
    }

    #[test]
    fn test_translate_drops_partial_codon() {
        // The codon-aligned prefix decodes the same regardless of the tail.
        assert_eq!(translate("AUGUA", SequenceType::Rna).unwrap(), "M");
        assert_eq!(translate("AU", SequenceType::Rna).unwrap(), "");
    }

    #[test]
    fn test_translate_requires_rna() {
        let err = translate("ATG", SequenceType::Dna).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::UnsupportedOperation {
                operation: "translate",
                expected: SequenceType::Rna,
                actual: SequenceType::Dna,
            }
        );
    }

    #[test]
    fn test_gc_content() {
        assert!((gc_content("ATCG").unwrap() - 50.0).abs() < f64::EPSILON);
        assert!((gc_content("GGCC").unwrap() - 100.0).abs() < f64::EPSILON);
        assert!((gc_content("AATT").unwrap() - 0.0).abs() < f64::EPSILON);
        assert!((gc_content("").unwrap() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gc_content_idempotent() {
        let a = gc_content("ATCGGGCCC").unwrap();
        let b = gc_content("ATCGGGCCC").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_reverse_complement() {
        assert_eq!(reverse_complement("ATCGATCG"), "CGATCGAT");
        assert_eq!(reverse_complement("AAAAAA"), "TTTTTT");
        assert_eq!(reverse_complement(""), "");
    }
}
