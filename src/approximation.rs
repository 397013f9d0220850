//! Rough set approximations of a concept.
//!
//! Given a partition of the universe and the decision diversity of each
//! class, a concept (set of decision values) splits the universe into regions:
//!
//! - a class is *relevant* if one of its members has a decision in the concept;
//! - relevant homogeneous classes form the **lower approximation** (positive
//!   region): their objects certainly belong to the concept;
//! - relevant heterogeneous classes form the **boundary region**, whether they
//!   mix concept and non-concept decisions or several concept decisions;
//! - **upper approximation** = lower ∪ boundary;
//! - **negative region** = universe \ upper.
//!
//! Every region is a union of whole classes, so
//! `lower ⊆ upper`, `boundary = upper \ lower` and `upper ⊔ negative = U`
//! hold for any concept, including the empty one.

use std::fmt;

use log::debug;

use crate::diversity::Diversity;
use crate::partition::Partition;
use crate::rowset::RowSet;

/// One of the four regions of an [`Approximation`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Region {
    Lower,
    Boundary,
    Upper,
    Negative,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::Lower,
        Region::Boundary,
        Region::Upper,
        Region::Negative,
    ];
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::Lower => "lower",
            Region::Boundary => "boundary",
            Region::Upper => "upper",
            Region::Negative => "negative",
        };
        f.write_str(name)
    }
}

/// The regions of a universe with respect to one (subset, concept) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Approximation {
    lower: RowSet,
    boundary: RowSet,
    upper: RowSet,
    negative: RowSet,
    universe: usize,
}

impl Approximation {
    /// Lower approximation (positive region).
    pub fn lower(&self) -> &RowSet {
        &self.lower
    }

    /// Alias for [`Approximation::lower`].
    pub fn positive(&self) -> &RowSet {
        &self.lower
    }

    pub fn boundary(&self) -> &RowSet {
        &self.boundary
    }

    pub fn upper(&self) -> &RowSet {
        &self.upper
    }

    pub fn negative(&self) -> &RowSet {
        &self.negative
    }

    pub fn region(&self, region: Region) -> &RowSet {
        match region {
            Region::Lower => &self.lower,
            Region::Boundary => &self.boundary,
            Region::Upper => &self.upper,
            Region::Negative => &self.negative,
        }
    }

    /// Size of the universe the regions cover.
    pub fn universe_len(&self) -> usize {
        self.universe
    }

    /// `(lower, boundary, upper, negative)`
    pub fn into_regions(self) -> (RowSet, RowSet, RowSet, RowSet) {
        (self.lower, self.boundary, self.upper, self.negative)
    }

    /// Accuracy of approximation, `|lower| / |upper|`.
    ///
    /// Defined as 1.0 when the upper approximation is empty.
    pub fn accuracy(&self) -> f64 {
        if self.upper.is_empty() {
            1.0
        } else {
            self.lower.len() as f64 / self.upper.len() as f64
        }
    }

    /// Quality of approximation (degree of dependency), `|lower| / |U|`.
    ///
    /// Defined as 1.0 for an empty universe.
    pub fn quality(&self) -> f64 {
        if self.universe == 0 {
            1.0
        } else {
            self.lower.len() as f64 / self.universe as f64
        }
    }
}

/// Compute the four regions.
///
/// `concept[code]` tells whether decision code `code` belongs to the concept;
/// codes past the end of the mask are outside it.
pub fn approximate(partition: &Partition, diversity: &Diversity, concept: &[bool]) -> Approximation {
    debug_assert_eq!(partition.len(), diversity.len());

    let universe = partition.universe_len();
    let mut lower = RowSet::with_capacity(universe);
    let mut boundary = RowSet::with_capacity(universe);

    for class in partition.classes() {
        let decisions = diversity.get(class.id());
        let relevant = decisions
            .decisions()
            .iter()
            .any(|&d| concept.get(d as usize).copied().unwrap_or(false));
        if !relevant {
            continue;
        }
        let members = class.members().iter().copied();
        if decisions.is_homogeneous() {
            lower.extend(members);
        } else {
            boundary.extend(members);
        }
    }

    let upper = lower.union(&boundary);
    let negative = upper.complement(universe);

    debug!(
        "approximate: lower = {}, boundary = {}, upper = {}, negative = {}",
        lower.len(),
        boundary.len(),
        upper.len(),
        negative.len()
    );

    Approximation {
        lower,
        boundary,
        upper,
        negative,
        universe,
    }
}
