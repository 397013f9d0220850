//! Type-safe identifiers for objects and indiscernibility classes.
//!
//! Both are plain indices, but keeping them apart prevents mixing up
//! "position in the universe" with "position in the class list".
use std::fmt;

/// A stable object identifier (0-indexed).
///
/// A `RowId` is the position of an object in the universe it was loaded into.
/// It is never renumbered by partitioning, deduplication or selection.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct RowId(u32);

impl RowId {
    /// Creates a row identifier from its position in the universe.
    pub const fn new(index: u32) -> Self {
        RowId(index)
    }

    /// Returns the raw position as a `u32`.
    pub const fn id(self) -> u32 {
        self.0
    }

    /// Returns the position as a `usize`, suitable for indexing columns.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RowId {
    fn from(index: u32) -> Self {
        RowId(index)
    }
}

impl From<RowId> for u32 {
    fn from(row: RowId) -> Self {
        row.0
    }
}

/// An equivalence class identifier (0-indexed).
///
/// Class ids are contiguous and allocated in order of first occurrence of each
/// distinct projection while scanning the universe in row order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ClassId(u32);

impl ClassId {
    pub const fn new(id: u32) -> Self {
        ClassId(id)
    }

    pub const fn id(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for ClassId {
    fn from(id: u32) -> Self {
        ClassId(id)
    }
}

impl From<ClassId> for u32 {
    fn from(class: ClassId) -> Self {
        class.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_id_ordering() {
        let a = RowId::new(3);
        let b = RowId::new(7);
        assert!(a < b);
        assert_eq!(a.index(), 3);
        assert_eq!(u32::from(b), 7);
    }

    #[test]
    fn test_display() {
        assert_eq!(RowId::new(5).to_string(), "5");
        assert_eq!(ClassId::new(2).to_string(), "#2");
    }
}
