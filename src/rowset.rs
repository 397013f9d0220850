//! Compact sets of row identifiers.
//!
//! Regions of an approximation are unions of whole equivalence classes over a
//! universe that may hold millions of rows. A [`RowSet`] stores membership as
//! a bit per [`RowId`], which makes the region algebra (union, difference,
//! complement) word-parallel and iterates in ascending row order for free.

use std::fmt;

use crate::types::RowId;

/// A set of [`RowId`]s backed by a vector of `u64` words.
///
/// The set grows automatically when inserting beyond the current capacity.
#[derive(Clone, Default)]
pub struct RowSet {
    words: Vec<u64>,
    count: usize,
}

impl RowSet {
    const BITS_PER_WORD: usize = 64;

    /// Creates an empty set able to hold rows `0..capacity` without growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(Self::BITS_PER_WORD)],
            count: 0,
        }
    }

    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the set of all rows `0..len`.
    pub fn full(len: usize) -> Self {
        let mut words = vec![u64::MAX; len / Self::BITS_PER_WORD];
        let rest = len % Self::BITS_PER_WORD;
        if rest > 0 {
            words.push((1u64 << rest) - 1);
        }
        Self { words, count: len }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    fn word_and_bit(row: RowId) -> (usize, usize) {
        let index = row.index();
        (index / Self::BITS_PER_WORD, index % Self::BITS_PER_WORD)
    }

    #[inline]
    pub fn contains(&self, row: RowId) -> bool {
        let (word_idx, bit_idx) = Self::word_and_bit(row);
        match self.words.get(word_idx) {
            Some(word) => word & (1u64 << bit_idx) != 0,
            None => false,
        }
    }

    /// Adds a row. Returns true if it was not present before.
    #[inline]
    pub fn insert(&mut self, row: RowId) -> bool {
        let (word_idx, bit_idx) = Self::word_and_bit(row);
        if word_idx >= self.words.len() {
            self.words.resize(word_idx + 1, 0);
        }
        let mask = 1u64 << bit_idx;
        let was_clear = self.words[word_idx] & mask == 0;
        if was_clear {
            self.words[word_idx] |= mask;
            self.count += 1;
        }
        was_clear
    }

    /// Removes a row. Returns true if it was present.
    #[inline]
    pub fn remove(&mut self, row: RowId) -> bool {
        let (word_idx, bit_idx) = Self::word_and_bit(row);
        let Some(word) = self.words.get_mut(word_idx) else {
            return false;
        };
        let mask = 1u64 << bit_idx;
        let was_set = *word & mask != 0;
        if was_set {
            *word &= !mask;
            self.count -= 1;
        }
        was_set
    }

    /// Rows in ascending order.
    pub fn iter(&self) -> RowSetIter<'_> {
        RowSetIter {
            words: &self.words,
            word_idx: 0,
            current_word: self.words.first().copied().unwrap_or(0),
        }
    }

    pub fn to_vec(&self) -> Vec<RowId> {
        self.iter().collect()
    }

    /// Adds every row of `other` to `self`.
    pub fn union_with(&mut self, other: &RowSet) {
        if other.words.len() > self.words.len() {
            self.words.resize(other.words.len(), 0);
        }
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a |= b;
        }
        self.recount();
    }

    pub fn union(&self, other: &RowSet) -> RowSet {
        let mut result = self.clone();
        result.union_with(other);
        result
    }

    pub fn intersection(&self, other: &RowSet) -> RowSet {
        let words: Vec<u64> = self.words.iter().zip(&other.words).map(|(a, b)| a & b).collect();
        RowSet::from_words(words)
    }

    /// Rows of `self` that are not in `other`.
    pub fn difference(&self, other: &RowSet) -> RowSet {
        let words: Vec<u64> = self
            .words
            .iter()
            .enumerate()
            .map(|(i, a)| a & !other.words.get(i).copied().unwrap_or(0))
            .collect();
        RowSet::from_words(words)
    }

    /// Rows of `0..len` that are not in `self`.
    pub fn complement(&self, len: usize) -> RowSet {
        RowSet::full(len).difference(self)
    }

    pub fn is_subset(&self, other: &RowSet) -> bool {
        self.words
            .iter()
            .enumerate()
            .all(|(i, a)| a & !other.words.get(i).copied().unwrap_or(0) == 0)
    }

    pub fn is_disjoint(&self, other: &RowSet) -> bool {
        self.words.iter().zip(&other.words).all(|(a, b)| a & b == 0)
    }

    fn from_words(words: Vec<u64>) -> Self {
        let mut set = Self { words, count: 0 };
        set.recount();
        set
    }

    fn recount(&mut self) {
        self.count = self.words.iter().map(|w| w.count_ones() as usize).sum();
    }
}

impl PartialEq for RowSet {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.is_subset(other)
    }
}

impl Eq for RowSet {}

impl fmt::Debug for RowSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|r| r.id())).finish()
    }
}

impl Extend<RowId> for RowSet {
    fn extend<I: IntoIterator<Item = RowId>>(&mut self, iter: I) {
        for row in iter {
            self.insert(row);
        }
    }
}

impl FromIterator<RowId> for RowSet {
    fn from_iter<I: IntoIterator<Item = RowId>>(iter: I) -> Self {
        let mut set = RowSet::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a RowSet {
    type Item = RowId;
    type IntoIter = RowSetIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the rows of a [`RowSet`], in ascending order.
pub struct RowSetIter<'a> {
    words: &'a [u64],
    word_idx: usize,
    current_word: u64,
}

impl Iterator for RowSetIter<'_> {
    type Item = RowId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let bit_idx = self.current_word.trailing_zeros() as usize;
                self.current_word &= self.current_word - 1; // Clear lowest set bit
                let index = self.word_idx * RowSet::BITS_PER_WORD + bit_idx;
                return Some(RowId::new(index as u32));
            }

            self.word_idx += 1;
            if self.word_idx >= self.words.len() {
                return None;
            }
            self.current_word = self.words[self.word_idx];
        }
    }
}
