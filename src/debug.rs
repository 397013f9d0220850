//! Diagnostic tables for inspecting indiscernibility classes.
//!
//! These render the intermediate structures of an approximation as small
//! comma-separated tables: the distinct projections with their class id, every
//! row with its class id, and the decision diversity per class. Column headers
//! use the reserved names from [`Config`][crate::config::Config], which is why
//! user columns may not take them.

use std::fmt;

use crate::config::POSITIONAL_INDEX;
use crate::decision::DecisionTable;
use crate::error::Result;
use crate::subset::AttributeSubset;
use crate::system::InformationSystem;
use crate::types::{ClassId, RowId};

fn write_row<I, T>(f: &mut fmt::Formatter<'_>, cells: I) -> fmt::Result
where
    I: IntoIterator<Item = T>,
    T: fmt::Display,
{
    for (i, cell) in cells.into_iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{}", cell)?;
    }
    writeln!(f)
}

/// Distinct projections onto a subset, one line per class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndiscernibilityTable {
    pub class_column: Option<String>,
    pub attributes: Vec<String>,
    pub classes: Vec<(ClassId, Vec<String>)>,
}

impl fmt::Display for IndiscernibilityTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_row(f, self.class_column.iter().chain(&self.attributes))?;
        for (class, values) in &self.classes {
            match self.class_column {
                Some(_) => write_row(f, std::iter::once(&class.id().to_string()).chain(values))?,
                None => write_row(f, values)?,
            }
        }
        Ok(())
    }
}

/// Every object of the universe with its class id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowClassTable {
    pub class_column: String,
    pub attributes: Vec<String>,
    pub rows: Vec<(RowId, Vec<String>, ClassId)>,
}

impl fmt::Display for RowClassTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_row(
            f,
            std::iter::once(POSITIONAL_INDEX)
                .chain(self.attributes.iter().map(String::as_str))
                .chain(std::iter::once(self.class_column.as_str())),
        )?;
        for (row, values, class) in &self.rows {
            write_row(
                f,
                std::iter::once(row.to_string())
                    .chain(values.iter().cloned())
                    .chain(std::iter::once(class.id().to_string())),
            )?;
        }
        Ok(())
    }
}

/// Decision diversity per class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiversityTable {
    pub class_column: String,
    pub attributes: Vec<String>,
    pub classes: Vec<DiversityRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiversityRow {
    pub class: ClassId,
    pub values: Vec<String>,
    pub decisions: Vec<String>,
}

impl DiversityRow {
    pub fn count(&self) -> usize {
        self.decisions.len()
    }
}

impl fmt::Display for DiversityTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_row(
            f,
            std::iter::once(self.class_column.as_str())
                .chain(self.attributes.iter().map(String::as_str))
                .chain(["count", "decisions"]),
        )?;
        for row in &self.classes {
            write_row(
                f,
                std::iter::once(row.class.id().to_string())
                    .chain(row.values.iter().cloned())
                    .chain([row.count().to_string(), row.decisions.join(" ")]),
            )?;
        }
        Ok(())
    }
}

impl InformationSystem {
    /// The indiscernibility relation of `subset`: each distinct projection
    /// with its class id, in class id order.
    pub fn indiscernibility(
        &self,
        subset: &AttributeSubset,
        with_class_column: bool,
    ) -> Result<IndiscernibilityTable> {
        let partition = self.partition(subset)?;
        let classes = partition
            .classes()
            .iter()
            .map(|class| {
                let values = self.class_values(&partition, class.id());
                (class.id(), values.into_iter().map(String::from).collect())
            })
            .collect();
        Ok(IndiscernibilityTable {
            class_column: with_class_column.then(|| self.config().class_column.clone()),
            attributes: owned(self.partition_attributes(&partition)),
            classes,
        })
    }

    /// Every row with all of its attributes and its class id under `subset`.
    pub fn row_classes(&self, subset: &AttributeSubset) -> Result<RowClassTable> {
        let partition = self.partition(subset)?;
        let rows = partition
            .class_index()
            .iter()
            .enumerate()
            .map(|(i, &class)| {
                let row = RowId::new(i as u32);
                (row, owned(self.project(row)), class)
            })
            .collect();
        Ok(RowClassTable {
            class_column: self.config().class_column.clone(),
            attributes: self.attribute_names().to_vec(),
            rows,
        })
    }
}

impl DecisionTable {
    /// The indiscernibility relation of `subset` extended with the decision
    /// diversity of each class.
    pub fn diversity_table(&self, subset: &AttributeSubset) -> Result<DiversityTable> {
        let partition = self.partition(subset)?;
        let diversity = self.diversity(subset)?;
        let system = self.system();
        let classes = diversity
            .iter()
            .map(|(class, d)| DiversityRow {
                class,
                values: owned(system.class_values(&partition, class)),
                decisions: d
                    .decisions()
                    .iter()
                    .map(|&code| self.decision_value(code).to_string())
                    .collect(),
            })
            .collect();
        Ok(DiversityTable {
            class_column: self.config().class_column.clone(),
            attributes: owned(system.partition_attributes(&partition)),
            classes,
        })
    }
}

fn owned(values: Vec<&str>) -> Vec<String> {
    values.into_iter().map(String::from).collect()
}
