//! # roughset-rs: Rough Set approximations in Rust
//!
//! **`roughset-rs`** computes the [Rough Set][rough-sets] regions of a decision
//! concept over a labeled table of nominal attributes.
//!
//! ## What is a rough set?
//!
//! Objects that agree on a chosen subset of attributes cannot be told apart:
//! they are *indiscernible*. Indiscernibility partitions the universe into
//! equivalence classes, and a target concept (a set of decision values) can then
//! only be described in terms of whole classes:
//!
//! - the **lower approximation** holds the classes whose objects all share one
//!   decision, and that decision is in the concept;
//! - the **boundary region** holds the relevant classes with mixed decisions;
//! - the **upper approximation** is their union;
//! - the **negative region** is everything else.
//!
//! ## Basic Usage
//!
//! ```rust
//! use roughset_rs::{AttributeSubset, ConceptSet, DecisionTable, RowId};
//!
//! let table = DecisionTable::from_rows(
//!     ["a"],
//!     [["0"], ["0"], ["0"], ["1"]],
//!     ["p", "p", "n", "n"],
//! )?;
//!
//! let approx = table.approximate(&ConceptSet::from(["p"]), &AttributeSubset::from(["a"]))?;
//!
//! assert!(approx.lower().is_empty());
//! assert_eq!(approx.boundary().to_vec(), [0, 1, 2].map(RowId::new));
//! assert_eq!(approx.negative().to_vec(), [RowId::new(3)]);
//!
//! // Back to the objects themselves:
//! let boundary = table.select(approx.boundary())?;
//! assert_eq!(boundary.decisions(), Some(&["p", "p", "n"][..]));
//! # Ok::<(), roughset_rs::ConfigurationError>(())
//! ```
//!
//! ## Core Components
//!
//! - **[`partition`]**: equivalence classes and the class of every row.
//! - **[`diversity`]**: distinct decisions per class.
//! - **[`approximation`]**: the four regions of a concept.
//! - **[`system`]** and **[`decision`]**: the tables tying it together, with
//!   per-subset memoization.
//!
//! [rough-sets]: https://en.wikipedia.org/wiki/Rough_set

pub mod approximation;
pub mod cache;
pub mod concept;
pub mod config;
pub mod debug;
pub mod decision;
pub mod dictionary;
pub mod diversity;
pub mod error;
pub mod partition;
pub mod rowset;
pub mod select;
pub mod subset;
pub mod system;
pub mod types;

pub use approximation::{approximate, Approximation, Region};
pub use concept::ConceptSet;
pub use config::Config;
pub use decision::DecisionTable;
pub use diversity::{ClassDiversity, Diversity};
pub use error::{ConfigurationError, Result};
pub use partition::{EquivalenceClass, Partition};
pub use rowset::RowSet;
pub use select::Selection;
pub use subset::AttributeSubset;
pub use system::InformationSystem;
pub use types::{ClassId, RowId};
