use regex::Regex;

/// A match in the sequence
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SequenceMatch {
    pub start: usize,
    pub end: usize,
    pub matched: String,
}

/// Find every start offset of `pattern` in `sequence`, overlapping
/// occurrences included (case-insensitive).
///
/// The scan resumes one position after each hit rather than past it, so
/// "AAA" in "AAAA" reports [0, 1].
pub fn find_pattern(sequence: &str, pattern: &str) -> Vec<usize> {
    let upper_seq = sequence.to_uppercase();
    let upper_pat = pattern.to_uppercase();

    if upper_pat.is_empty() || upper_seq.is_empty() {
        return Vec::new();
    }

    let mut offsets = Vec::new();
    let mut pos = 0;
    while let Some(idx) = upper_seq[pos..].find(&upper_pat) {
        let abs_pos = pos + idx;
        offsets.push(abs_pos);
        pos = abs_pos + 1;
    }

    offsets
}

/// Find regex motif matches in a sequence (case-insensitive)
pub fn find_regex(sequence: &str, pattern: &str) -> Result<Vec<SequenceMatch>, regex::Error> {
    let re = Regex::new(&format!("(?i){}", pattern))?;
    let upper = sequence.to_uppercase();

    let mut matches = Vec::new();
    for m in re.find_iter(&upper) {
        matches.push(SequenceMatch {
            start: m.start(),
            end: m.end(),
            matched: m.as_str().to_string(),
        });
    }

    Ok(matches)
}
