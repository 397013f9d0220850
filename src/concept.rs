//! Target concepts: sets of decision values of interest.

use log::debug;

use crate::dictionary::Dictionary;

/// A set of decision values whose approximation is sought.
///
/// Values that never occur in the decision column are accepted and simply
/// match no object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConceptSet {
    values: Option<Vec<String>>,
}

impl ConceptSet {
    /// Every decision value occurring in the table.
    pub fn all() -> Self {
        Self { values: None }
    }

    /// The empty concept (nothing is relevant).
    pub fn empty() -> Self {
        Self {
            values: Some(Vec::new()),
        }
    }

    pub fn of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: Some(values.into_iter().map(Into::into).collect()),
        }
    }

    pub fn is_all(&self) -> bool {
        self.values.is_none()
    }

    pub fn values(&self) -> Option<&[String]> {
        self.values.as_deref()
    }

    /// Membership mask over the codes of `decisions`.
    pub fn mask(&self, decisions: &Dictionary) -> Vec<bool> {
        let Some(values) = &self.values else {
            return vec![true; decisions.len()];
        };
        let mut mask = vec![false; decisions.len()];
        for value in values {
            match decisions.code(value) {
                Some(code) => mask[code as usize] = true,
                None => debug!("concept: decision '{}' does not occur in the table", value),
            }
        }
        mask
    }
}

impl<S: Into<String>> FromIterator<S> for ConceptSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl From<&[&str]> for ConceptSet {
    fn from(values: &[&str]) -> Self {
        Self::of(values.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for ConceptSet {
    fn from(values: [&str; N]) -> Self {
        Self::of(values)
    }
}
