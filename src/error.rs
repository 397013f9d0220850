//! Error types for rough set construction and queries.

use thiserror::Error;

use crate::types::RowId;

/// Result type alias
pub type Result<T> = std::result::Result<T, ConfigurationError>;

/// Malformed construction inputs or query arguments.
///
/// Raised at the earliest point that validates the offending input: schema
/// problems when a table is built, bad subsets or row ids when a query runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Number of objects ({attributes}) does not match number of decisions ({decisions})")]
    RowCountMismatch { attributes: usize, decisions: usize },

    #[error("Row {row} has {found} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Column name '{name}' is reserved ({reserved})")]
    ReservedName { name: String, reserved: &'static str },

    #[error("Duplicate column name '{0}'")]
    DuplicateColumn(String),

    #[error("Column names must not be empty")]
    EmptyColumnName,

    #[error("Unknown attribute '{0}'")]
    UnknownAttribute(String),

    #[error("Row {0} is not part of the universe")]
    UnknownRow(RowId),
}
