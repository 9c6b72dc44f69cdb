use std::collections::BTreeMap;

use crate::search::find_pattern;

/// A restriction enzyme and the site it recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct RestrictionEnzyme {
    pub name: &'static str,
    pub site: &'static str,
}

/// Common restriction enzymes. Sites are uppercase; extending the table
/// changes nothing in the scan.
pub const ENZYMES: &[RestrictionEnzyme] = &[
    RestrictionEnzyme { name: "EcoRI", site: "GAATTC" },
    RestrictionEnzyme { name: "BamHI", site: "GGATCC" },
    RestrictionEnzyme { name: "HindIII", site: "AAGCTT" },
    RestrictionEnzyme { name: "NotI", site: "GCGGCCGC" },
];

/// Find every cut site for the known enzymes, overlapping occurrences
/// included. Offsets are 0-based starts over the uppercased sequence.
/// Enzymes with no hits are left out of the map.
pub fn restriction_sites(sequence: &str) -> BTreeMap<String, Vec<usize>> {
    let upper = sequence.to_uppercase();
    let mut sites = BTreeMap::new();

    for enzyme in ENZYMES {
        let offsets = find_pattern(&upper, enzyme.site);
        if !offsets.is_empty() {
            sites.insert(enzyme.name.to_string(), offsets);
        }
    }

    sites
}
