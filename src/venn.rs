//! Exclusive region counts of a three-set Venn diagram.

use serde::{Deserialize, Serialize};

use crate::constants::venn::{REGION_KEYS, SET_LABELS};
use crate::data::IdentifierSets;
use crate::types::RegionKey;

/// Sizes of the seven exclusive regions of three sets A (Unsafe),
/// B (Sub-Standard), and C (Mis-labelled).
///
/// Field names spell the membership bits in `ABC` order, so `only_ab` is
/// `A ∩ B \ C` (region key `110`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VennRegions {
    /// Unsafe only (`100`).
    pub only_a: usize,
    /// Sub-Standard only (`010`).
    pub only_b: usize,
    /// Unsafe and Sub-Standard, not Mis-labelled (`110`).
    pub only_ab: usize,
    /// Mis-labelled only (`001`).
    pub only_c: usize,
    /// Unsafe and Mis-labelled, not Sub-Standard (`101`).
    pub only_ac: usize,
    /// Sub-Standard and Mis-labelled, not Unsafe (`011`).
    pub only_bc: usize,
    /// All three (`111`).
    pub abc: usize,
}

impl VennRegions {
    /// Count every identifier of the union into its exclusive region.
    pub fn from_sets(sets: &IdentifierSets) -> Self {
        let [a, b, c] = sets.as_array();
        let mut regions = Self::default();
        for id in a.union(b).chain(c.difference(a).filter(|id| !b.contains(*id))) {
            let slot = match (a.contains(id), b.contains(id), c.contains(id)) {
                (true, false, false) => &mut regions.only_a,
                (false, true, false) => &mut regions.only_b,
                (true, true, false) => &mut regions.only_ab,
                (false, false, true) => &mut regions.only_c,
                (true, false, true) => &mut regions.only_ac,
                (false, true, true) => &mut regions.only_bc,
                (true, true, true) => &mut regions.abc,
                (false, false, false) => continue,
            };
            *slot += 1;
        }
        regions
    }

    /// Counts in subset order `100, 010, 110, 001, 101, 011, 111`.
    pub fn counts(&self) -> [usize; 7] {
        [
            self.only_a,
            self.only_b,
            self.only_ab,
            self.only_c,
            self.only_ac,
            self.only_bc,
            self.abc,
        ]
    }

    /// Counts paired with their region keys, in subset order.
    pub fn as_subsets(&self) -> [(RegionKey, usize); 7] {
        let counts = self.counts();
        std::array::from_fn(|idx| (REGION_KEYS[idx], counts[idx]))
    }

    /// Size of the union of the three sets.
    pub fn total(&self) -> usize {
        self.counts().iter().sum()
    }

    /// Full set sizes `|A|, |B|, |C|`.
    pub fn set_sizes(&self) -> [usize; 3] {
        [
            self.only_a + self.only_ab + self.only_ac + self.abc,
            self.only_b + self.only_ab + self.only_bc + self.abc,
            self.only_c + self.only_ac + self.only_bc + self.abc,
        ]
    }
}

/// Human-readable name of a region key, e.g. `110` -> `Unsafe & Sub-Standard`.
pub fn region_name(key: &str) -> String {
    let members: Vec<&str> = key
        .chars()
        .zip(SET_LABELS)
        .filter(|(bit, _)| *bit == '1')
        .map(|(_, label)| label)
        .collect();
    match members.len() {
        0 => "none".to_string(),
        1 => format!("{} only", members[0]),
        3 => "all three".to_string(),
        _ => members.join(" & "),
    }
}
