//! Construction options shared by information systems and decision tables.

use crate::error::{ConfigurationError, Result};

/// Reserved name of the positional index used to tie deduplicated rows back
/// to their original [`RowId`][crate::types::RowId].
pub const POSITIONAL_INDEX: &str = "index";

/// Default name of the class id column in diagnostic tables.
pub const DEFAULT_CLASS_COLUMN: &str = "IND_INDEX";

/// Default name of the decision column when the source does not provide one.
pub const DEFAULT_DECISION_NAME: &str = "target";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name of the equivalence-class id column in diagnostics.
    pub class_column: String,
    /// Name of the decision column.
    pub decision_name: String,
    /// Memoize partitions and diversities per attribute subset.
    pub cache: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            class_column: DEFAULT_CLASS_COLUMN.to_string(),
            decision_name: DEFAULT_DECISION_NAME.to_string(),
            cache: true,
        }
    }
}

impl Config {
    pub fn with_class_column(mut self, name: impl Into<String>) -> Self {
        self.class_column = name.into();
        self
    }

    pub fn with_decision_name(mut self, name: impl Into<String>) -> Self {
        self.decision_name = name.into();
        self
    }

    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache = enabled;
        self
    }

    /// The reserved bookkeeping names, paired with a short description.
    pub fn reserved_names(&self) -> [(&str, &'static str); 2] {
        [
            (POSITIONAL_INDEX, "positional index"),
            (self.class_column.as_str(), "class id column"),
        ]
    }

    /// Reject a user column name that is empty or collides with a reserved name.
    pub fn check_column_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(ConfigurationError::EmptyColumnName);
        }
        for (reserved, what) in self.reserved_names() {
            if name == reserved {
                return Err(ConfigurationError::ReservedName {
                    name: name.to_string(),
                    reserved: what,
                });
            }
        }
        Ok(())
    }
}
