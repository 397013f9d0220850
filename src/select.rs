//! Projection of regions back onto the objects they contain.

use crate::error::{ConfigurationError, Result};
use crate::rowset::RowSet;
use crate::types::RowId;

/// Attribute rows (and decisions, for decision tables) of selected objects,
/// in original row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    pub(crate) row_ids: Vec<RowId>,
    pub(crate) attributes: Vec<Vec<&'a str>>,
    pub(crate) decisions: Option<Vec<&'a str>>,
}

impl<'a> Selection<'a> {
    pub fn row_ids(&self) -> &[RowId] {
        &self.row_ids
    }

    pub fn attributes(&self) -> &[Vec<&'a str>] {
        &self.attributes
    }

    /// Decision values, `None` when selected from a plain information system.
    pub fn decisions(&self) -> Option<&[&'a str]> {
        self.decisions.as_deref()
    }

    pub fn len(&self) -> usize {
        self.row_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_ids.is_empty()
    }
}

/// Deduplicate and order `rows`, rejecting any id outside `0..universe`.
pub(crate) fn collect_rows<I>(rows: I, universe: usize) -> Result<Vec<RowId>>
where
    I: IntoIterator<Item = RowId>,
{
    let mut set = RowSet::with_capacity(universe);
    for row in rows {
        if row.index() >= universe {
            return Err(ConfigurationError::UnknownRow(row));
        }
        set.insert(row);
    }
    Ok(set.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_rows() {
        let rows = [3, 1, 3, 0].map(RowId::new);
        let ids = collect_rows(rows, 4).unwrap();
        assert_eq!(ids, vec![RowId::new(0), RowId::new(1), RowId::new(3)]);
    }

    #[test]
    fn test_unknown_row() {
        let rows = [1, 7].map(RowId::new);
        assert_eq!(
            collect_rows(rows, 4),
            Err(ConfigurationError::UnknownRow(RowId::new(7)))
        );
    }
}
