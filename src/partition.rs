//! Indiscernibility classes of a universe.
//!
//! Two objects are *indiscernible* with respect to a set of attributes when
//! they carry the same value on every one of them. The relation is an
//! equivalence, and [`Partition`] materializes its classes in one linear pass:
//!
//! - the universe is scanned in row order,
//! - each row is projected onto the chosen columns (a tuple of value codes),
//! - the projection is looked up in a hash map; a new projection gets the next
//!   unused [`ClassId`].
//!
//! Class ids therefore follow the order of first occurrence and do not depend
//! on hashing or sorting. Alongside the classes the partition keeps the
//! class of every original [`RowId`], so no intermediate deduplicated table is
//! ever needed to trace a class back to its objects.

use std::collections::HashMap;

use log::{debug, trace};

use crate::rowset::RowSet;
use crate::types::{ClassId, RowId};

/// One indiscernibility class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivalenceClass {
    id: ClassId,
    key: Vec<u32>,
    members: Vec<RowId>,
}

impl EquivalenceClass {
    pub fn id(&self) -> ClassId {
        self.id
    }

    /// Value codes of the projection defining this class, in subset order.
    pub fn key(&self) -> &[u32] {
        &self.key
    }

    /// Member rows, in ascending order.
    pub fn members(&self) -> &[RowId] {
        &self.members
    }

    /// The first member row, which introduced this class.
    pub fn representative(&self) -> RowId {
        self.members[0]
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// The partition of a universe into indiscernibility classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    columns: Vec<usize>,
    class_of: Vec<ClassId>,
    classes: Vec<EquivalenceClass>,
}

impl Partition {
    /// Build the partition induced by `columns`.
    ///
    /// `data` is column-major value codes, every column holding `rows` codes;
    /// `columns` selects (and orders) the columns to project onto.
    pub fn from_codes(data: &[Vec<u32>], rows: usize, columns: &[usize]) -> Self {
        debug!("partition(rows = {}, columns = {:?})", rows, columns);

        let selected: Vec<&[u32]> = columns.iter().map(|&c| data[c].as_slice()).collect();
        debug_assert!(selected.iter().all(|col| col.len() == rows));

        let mut index: HashMap<Vec<u32>, ClassId> = HashMap::new();
        let mut class_of = Vec::with_capacity(rows);
        let mut classes: Vec<EquivalenceClass> = Vec::new();
        let mut key: Vec<u32> = Vec::with_capacity(columns.len());

        for row in 0..rows {
            key.clear();
            key.extend(selected.iter().map(|col| col[row]));
            let row_id = RowId::new(row as u32);

            let class = match index.get(key.as_slice()) {
                Some(&class) => class,
                None => {
                    let class = ClassId::new(classes.len() as u32);
                    trace!("partition: row {} opens class {}", row_id, class);
                    index.insert(key.clone(), class);
                    classes.push(EquivalenceClass {
                        id: class,
                        key: key.clone(),
                        members: Vec::new(),
                    });
                    class
                }
            };
            classes[class.index()].members.push(row_id);
            class_of.push(class);
        }

        debug!("partition: {} rows in {} classes", rows, classes.len());

        Self {
            columns: columns.to_vec(),
            class_of,
            classes,
        }
    }

    /// Column positions the partition was computed on.
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Number of rows in the partitioned universe.
    pub fn universe_len(&self) -> usize {
        self.class_of.len()
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn classes(&self) -> &[EquivalenceClass] {
        &self.classes
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this partition.
    pub fn class(&self, id: ClassId) -> &EquivalenceClass {
        &self.classes[id.index()]
    }

    /// The class of `row`, or `None` if the row is outside the universe.
    pub fn class_of(&self, row: RowId) -> Option<ClassId> {
        self.class_of.get(row.index()).copied()
    }

    /// Class id of every row, indexed by [`RowId`].
    pub fn class_index(&self) -> &[ClassId] {
        &self.class_of
    }

    /// Union of the members of the given classes.
    pub fn rows_of<I>(&self, classes: I) -> RowSet
    where
        I: IntoIterator<Item = ClassId>,
    {
        let mut rows = RowSet::with_capacity(self.universe_len());
        for class in classes {
            rows.extend(self.class(class).members().iter().copied());
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn ids(rows: &[u32]) -> Vec<RowId> {
        rows.iter().copied().map(RowId::new).collect()
    }

    // a: 0 0 1 0 1, b: 0 1 0 0 0
    fn data() -> Vec<Vec<u32>> {
        vec![vec![0, 0, 1, 0, 1], vec![0, 1, 0, 0, 0]]
    }

    #[test]
    fn test_single_column() {
        let p = Partition::from_codes(&data(), 5, &[0]);
        assert_eq!(p.len(), 2);
        assert_eq!(p.class(ClassId::new(0)).members(), ids(&[0, 1, 3]).as_slice());
        assert_eq!(p.class(ClassId::new(1)).members(), ids(&[2, 4]).as_slice());
        assert_eq!(p.class(ClassId::new(1)).key(), &[1]);
        assert_eq!(p.class_of(RowId::new(4)), Some(ClassId::new(1)));
        assert_eq!(p.class_of(RowId::new(5)), None);
    }

    #[test]
    fn test_first_occurrence_ids() {
        let p = Partition::from_codes(&data(), 5, &[0, 1]);
        let keys: Vec<&[u32]> = p.classes().iter().map(|c| c.key()).collect();
        assert_eq!(keys, vec![&[0, 0][..], &[0, 1], &[1, 0]]);
        let index: Vec<u32> = p.class_index().iter().map(|c| c.id()).collect();
        assert_eq!(index, vec![0, 1, 2, 0, 2]);
        for class in p.classes() {
            assert_eq!(p.class_of(class.representative()), Some(class.id()));
        }
    }

    #[test]
    fn test_column_order_only_changes_keys() {
        let ab = Partition::from_codes(&data(), 5, &[0, 1]);
        let ba = Partition::from_codes(&data(), 5, &[1, 0]);
        assert_eq!(ab.class_index(), ba.class_index());
        assert_eq!(ba.class(ClassId::new(1)).key(), &[1, 0]);
    }

    #[test]
    fn test_no_columns() {
        let p = Partition::from_codes(&data(), 5, &[]);
        assert_eq!(p.len(), 1);
        assert_eq!(p.class(ClassId::new(0)).len(), 5);
    }

    #[test]
    fn test_empty_universe() {
        let p = Partition::from_codes(&[vec![], vec![]], 0, &[0, 1]);
        assert!(p.is_empty());
        assert_eq!(p.universe_len(), 0);
        assert!(p.rows_of(std::iter::empty()).is_empty());
    }

    #[test]
    fn test_rows_of() {
        let p = Partition::from_codes(&data(), 5, &[0, 1]);
        let rows = p.rows_of([ClassId::new(2), ClassId::new(1)]);
        assert_eq!(rows.to_vec(), ids(&[1, 2, 4]));
    }
}
