//! Information systems: a universe of objects described by nominal attributes.
//!
//! An [`InformationSystem`] owns the attribute matrix. Values are interned per
//! column (see [`Dictionary`]) and stored column-major, so projecting a row
//! onto an attribute subset is a handful of integer loads. The table is
//! immutable after construction; partitions are computed on demand and, when
//! enabled in the [`Config`], memoized per attribute subset.

use std::collections::HashSet;
use std::sync::Arc;

use log::debug;

use crate::cache::SubsetCache;
use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::error::{ConfigurationError, Result};
use crate::partition::Partition;
use crate::rowset::RowSet;
use crate::select::{collect_rows, Selection};
use crate::subset::AttributeSubset;
use crate::types::{ClassId, RowId};

#[derive(Debug, Clone)]
pub struct InformationSystem {
    config: Config,
    names: Vec<String>,
    dictionaries: Vec<Dictionary>,
    data: Vec<Vec<u32>>,
    rows: usize,
    partitions: SubsetCache<Partition>,
}

impl InformationSystem {
    /// Build an information system from attribute names and rows of values.
    ///
    /// Fails if a name is empty, repeated or reserved by `config`, or if a row
    /// does not have exactly one value per attribute.
    pub fn new<N, S, R, Row, V>(names: N, rows: R, config: Config) -> Result<Self>
    where
        N: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator<Item = Row>,
        Row: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        let mut seen = HashSet::new();
        for name in &names {
            config.check_column_name(name)?;
            if !seen.insert(name.as_str()) {
                return Err(ConfigurationError::DuplicateColumn(name.clone()));
            }
        }

        let mut dictionaries = vec![Dictionary::new(); names.len()];
        let mut data = vec![Vec::new(); names.len()];
        let mut count = 0;

        for (row, values) in rows.into_iter().enumerate() {
            let mut found = 0;
            for value in values {
                if found < names.len() {
                    let code = dictionaries[found].intern(value.into());
                    data[found].push(code);
                }
                found += 1;
            }
            if found != names.len() {
                return Err(ConfigurationError::RaggedRow {
                    row,
                    expected: names.len(),
                    found,
                });
            }
            count += 1;
        }

        debug!(
            "information system: {} rows, {} attributes",
            count,
            names.len()
        );

        let partitions = SubsetCache::new(config.cache);
        Ok(Self {
            config,
            names,
            dictionaries,
            data,
            rows: count,
            partitions,
        })
    }

    /// Same as [`InformationSystem::new`] with the default [`Config`].
    pub fn from_rows<N, S, R, Row, V>(names: N, rows: R) -> Result<Self>
    where
        N: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator<Item = Row>,
        Row: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self::new(names, rows, Config::default())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn attribute_names(&self) -> &[String] {
        &self.names
    }

    /// Number of objects in the universe.
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// All row ids of the universe.
    pub fn universe(&self) -> RowSet {
        RowSet::full(self.rows)
    }

    pub fn attribute_index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub(crate) fn check_row(&self, row: RowId) -> Result<()> {
        if row.index() < self.rows {
            Ok(())
        } else {
            Err(ConfigurationError::UnknownRow(row))
        }
    }

    /// Value of `attribute` for `row`.
    pub fn value(&self, row: RowId, attribute: &str) -> Result<&str> {
        self.check_row(row)?;
        let column = self
            .attribute_index(attribute)
            .ok_or_else(|| ConfigurationError::UnknownAttribute(attribute.to_string()))?;
        Ok(self.decode(column, row))
    }

    /// All attribute values of `row`, in schema order.
    pub fn row(&self, row: RowId) -> Result<Vec<&str>> {
        self.check_row(row)?;
        Ok(self.project(row))
    }

    pub(crate) fn project(&self, row: RowId) -> Vec<&str> {
        (0..self.names.len()).map(|c| self.decode(c, row)).collect()
    }

    /// Attribute rows of the given objects, in original row order.
    ///
    /// Repeated ids are selected once; an id outside the universe is an error.
    pub fn select<I>(&self, rows: I) -> Result<Selection<'_>>
    where
        I: IntoIterator<Item = RowId>,
    {
        let row_ids = collect_rows(rows, self.rows)?;
        let attributes = row_ids.iter().map(|&row| self.project(row)).collect();
        Ok(Selection {
            row_ids,
            attributes,
            decisions: None,
        })
    }

    fn decode(&self, column: usize, row: RowId) -> &str {
        self.dictionaries[column].value(self.data[column][row.index()])
    }

    /// Resolve `subset` against this schema.
    pub fn resolve(&self, subset: &AttributeSubset) -> Result<Vec<usize>> {
        subset.resolve(&self.names, &self.config)
    }

    /// The indiscernibility classes induced by `subset`.
    pub fn partition(&self, subset: &AttributeSubset) -> Result<Arc<Partition>> {
        let columns = self.resolve(subset)?;
        Ok(self.partition_on(&columns))
    }

    pub(crate) fn partition_on(&self, columns: &[usize]) -> Arc<Partition> {
        self.partitions
            .get_or_insert_with(columns, || Partition::from_codes(&self.data, self.rows, columns))
    }

    pub fn partition_cache(&self) -> &SubsetCache<Partition> {
        &self.partitions
    }

    /// Attribute names of the columns `partition` was computed on.
    pub fn partition_attributes(&self, partition: &Partition) -> Vec<&str> {
        partition
            .columns()
            .iter()
            .map(|&c| self.names[c].as_str())
            .collect()
    }

    /// The projected values defining `class`, in subset order.
    pub fn class_values(&self, partition: &Partition, class: ClassId) -> Vec<&str> {
        partition
            .columns()
            .iter()
            .zip(partition.class(class).key())
            .map(|(&column, &code)| self.dictionaries[column].value(code))
            .collect()
    }
}
