//! Decision diversity of indiscernibility classes.
//!
//! The diversity of a class is the set of distinct decision values among its
//! members. It does not depend on any concept: a class with a single decision
//! value is *decision-homogeneous*, every other class is inconsistent with
//! respect to the attributes that induced it.

use std::collections::HashSet;

use log::debug;

use crate::error::{ConfigurationError, Result};
use crate::partition::Partition;
use crate::types::ClassId;

/// Distinct decision codes of one class, in order of first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassDiversity {
    decisions: Vec<u32>,
}

impl ClassDiversity {
    pub fn decisions(&self) -> &[u32] {
        &self.decisions
    }

    /// Number of distinct decisions.
    pub fn count(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_homogeneous(&self) -> bool {
        self.decisions.len() == 1
    }

    pub fn contains(&self, decision: u32) -> bool {
        self.decisions.contains(&decision)
    }
}

/// Decision diversity of every class of a [`Partition`], indexed by [`ClassId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diversity {
    classes: Vec<ClassDiversity>,
}

impl Diversity {
    /// Count distinct decisions per class in one pass over the rows.
    ///
    /// `decisions[row]` is the decision code of `row`; there must be exactly
    /// one per row of the partitioned universe.
    pub fn new(partition: &Partition, decisions: &[u32]) -> Result<Self> {
        if decisions.len() != partition.universe_len() {
            return Err(ConfigurationError::RowCountMismatch {
                attributes: partition.universe_len(),
                decisions: decisions.len(),
            });
        }
        Ok(Self::count(partition, decisions))
    }

    /// Same as [`Diversity::new`] for callers that already checked the lengths.
    pub(crate) fn count(partition: &Partition, decisions: &[u32]) -> Self {
        debug_assert_eq!(decisions.len(), partition.universe_len());

        let mut classes = vec![ClassDiversity::default(); partition.len()];
        let mut seen: HashSet<(ClassId, u32)> = HashSet::new();

        for (&class, &decision) in partition.class_index().iter().zip(decisions) {
            if seen.insert((class, decision)) {
                classes[class.index()].decisions.push(decision);
            }
        }

        debug!(
            "diversity: {} of {} classes are homogeneous",
            classes.iter().filter(|c| c.is_homogeneous()).count(),
            classes.len()
        );

        Self { classes }
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// # Panics
    ///
    /// Panics if `class` is not a class of the partition this was computed on.
    pub fn get(&self, class: ClassId) -> &ClassDiversity {
        &self.classes[class.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClassId, &ClassDiversity)> + '_ {
        self.classes
            .iter()
            .enumerate()
            .map(|(i, d)| (ClassId::new(i as u32), d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_diversity() {
        // a = 0 0 0 1, decisions p p n n
        let partition = Partition::from_codes(&[vec![0, 0, 0, 1]], 4, &[0]);
        let diversity = Diversity::new(&partition, &[0, 0, 1, 1]).unwrap();

        assert_eq!(diversity.len(), 2);
        let first = diversity.get(ClassId::new(0));
        assert_eq!(first.decisions(), &[0, 1]);
        assert_eq!(first.count(), 2);
        assert!(!first.is_homogeneous());

        let second = diversity.get(ClassId::new(1));
        assert_eq!(second.decisions(), &[1]);
        assert!(second.is_homogeneous());
        assert!(second.contains(1));
        assert!(!second.contains(0));
    }

    #[test]
    fn test_first_occurrence_order() {
        let partition = Partition::from_codes(&[vec![0, 0, 0]], 3, &[0]);
        let diversity = Diversity::new(&partition, &[2, 0, 2]).unwrap();
        assert_eq!(diversity.get(ClassId::new(0)).decisions(), &[2, 0]);
    }

    #[test]
    fn test_length_mismatch() {
        let partition = Partition::from_codes(&[vec![0, 1]], 2, &[0]);
        assert_eq!(
            Diversity::new(&partition, &[0]),
            Err(ConfigurationError::RowCountMismatch {
                attributes: 2,
                decisions: 1
            })
        );
    }
}
