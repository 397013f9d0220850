//! Interning of nominal values.
//!
//! Every column of a table is stored as a vector of `u32` codes. A
//! [`Dictionary`] hands out codes in order of first occurrence, so comparing
//! and hashing projections never touches the original strings.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    codes: HashMap<String, u32>,
    values: Vec<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Return the code of `value`, allocating the next one if it is new.
    pub fn intern(&mut self, value: String) -> u32 {
        if let Some(&code) = self.codes.get(&value) {
            return code;
        }
        let code = self.values.len() as u32;
        self.values.push(value.clone());
        self.codes.insert(value, code);
        code
    }

    /// Return the code of an already interned value.
    pub fn code(&self, value: &str) -> Option<u32> {
        self.codes.get(value).copied()
    }

    /// Return the value behind `code`.
    ///
    /// # Panics
    ///
    /// Panics if `code` was not produced by this dictionary.
    pub fn value(&self, code: u32) -> &str {
        &self.values[code as usize]
    }

    /// All values in order of first occurrence.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.iter().map(String::as_str)
    }
}
