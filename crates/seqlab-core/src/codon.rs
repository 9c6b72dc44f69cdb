use std::collections::HashMap;

/// Standard genetic code over RNA codons.
pub struct CodonTable {
    pub name: String,
    table: HashMap<String, char>,
    stop_codons: Vec<String>,
}

impl CodonTable {
    /// Standard genetic code (NCBI table 1), U-based.
    pub fn standard() -> Self {
        let mut table = HashMap::new();
        let codons = [
            ("UUU", 'F'), ("UUC", 'F'), ("UUA", 'L'), ("UUG", 'L'),
            ("CUU", 'L'), ("CUC", 'L'), ("CUA", 'L'), ("CUG", 'L'),
            ("AUU", 'I'), ("AUC", 'I'), ("AUA", 'I'), ("AUG", 'M'),
            ("GUU", 'V'), ("GUC", 'V'), ("GUA", 'V'), ("GUG", 'V'),
            ("UCU", 'S'), ("UCC", 'S'), ("UCA", 'S'), ("UCG", 'S'),
            ("CCU", 'P'), ("CCC", 'P'), ("CCA", 'P'), ("CCG", 'P'),
            ("ACU", 'T'), ("ACC", 'T'), ("ACA", 'T'), ("ACG", 'T'),
            ("GCU", 'A'), ("GCC", 'A'), ("GCA", 'A'), ("GCG", 'A'),
            ("UAU", 'Y'), ("UAC", 'Y'), ("UAA", '*'), ("UAG", '*'),
            ("CAU", 'H'), ("CAC", 'H'), ("CAA", 'Q'), ("CAG", 'Q'),
            ("AAU", 'N'), ("AAC", 'N'), ("AAA", 'K'), ("AAG", 'K'),
            ("GAU", 'D'), ("GAC", 'D'), ("GAA", 'E'), ("GAG", 'E'),
            ("UGU", 'C'), ("UGC", 'C'), ("UGA", '*'), ("UGG", 'W'),
            ("CGU", 'R'), ("CGC", 'R'), ("CGA", 'R'), ("CGG", 'R'),
            ("AGU", 'S'), ("AGC", 'S'), ("AGA", 'R'), ("AGG", 'R'),
            ("GGU", 'G'), ("GGC", 'G'), ("GGA", 'G'), ("GGG", 'G'),
        ];

        for (codon, aa) in &codons {
            table.insert(codon.to_string(), *aa);
        }

        CodonTable {
            name: "Standard".to_string(),
            table,
            stop_codons: vec!["UAA".to_string(), "UAG".to_string(), "UGA".to_string()],
        }
    }

    /// Translate a single codon to an amino acid; unknown codons
    /// (anything containing `N`) decode to `X`.
    pub fn translate_codon(&self, codon: &str) -> char {
        self.table
            .get(&codon.to_uppercase())
            .copied()
            .unwrap_or('X')
    }

    pub fn is_stop_codon(&self, codon: &str) -> bool {
        self.stop_codons.contains(&codon.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let table = CodonTable::standard();
        assert_eq!(table.translate_codon("AUG"), 'M');
        assert_eq!(table.translate_codon("UAA"), '*');
        assert_eq!(table.translate_codon("GCU"), 'A');
        assert_eq!(table.translate_codon("ANG"), 'X');
    }

    #[test]
    fn test_stop_codons() {
        let table = CodonTable::standard();
        assert!(table.is_stop_codon("UAA"));
        assert!(table.is_stop_codon("UAG"));
        assert!(table.is_stop_codon("UGA"));
        assert!(!table.is_stop_codon("AUG"));
    }

    #[test]
    fn test_table_is_complete() {
        // 61 coding codons + 3 stops over {A,U,C,G}.
        let table = CodonTable::standard();
        let bases = ['A', 'U', 'C', 'G'];
        for a in bases {
            for b in bases {
                for c in bases {
                    let codon: String = [a, b, c].into_iter().collect();
                    assert_ne!(table.translate_codon(&codon), 'X', "missing {codon}");
                }
            }
        }
    }
}
