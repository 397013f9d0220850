//! Attribute subsets inducing an indiscernibility relation.

use log::debug;

use crate::config::Config;
use crate::error::{ConfigurationError, Result};

/// An ordered set of attribute names, or "all attributes".
///
/// An empty list means the same as [`AttributeSubset::all`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSubset {
    names: Option<Vec<String>>,
}

impl AttributeSubset {
    /// Every attribute of the table, in schema order.
    pub fn all() -> Self {
        Self { names: None }
    }

    pub fn of<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: Some(names.into_iter().map(Into::into).collect()),
        }
    }

    /// True if this subset stands for every attribute.
    pub fn is_all(&self) -> bool {
        self.names.as_ref().map_or(true, |names| names.is_empty())
    }

    pub fn names(&self) -> Option<&[String]> {
        self.names.as_deref()
    }

    /// Resolve names to column positions of `schema`.
    ///
    /// Repeated names are kept once, at their first position.
    pub(crate) fn resolve(&self, schema: &[String], config: &Config) -> Result<Vec<usize>> {
        let names = match &self.names {
            Some(names) if !names.is_empty() => names,
            _ => return Ok((0..schema.len()).collect()),
        };

        let mut columns = Vec::with_capacity(names.len());
        for name in names {
            config.check_column_name(name)?;
            let column = schema
                .iter()
                .position(|n| n == name)
                .ok_or_else(|| ConfigurationError::UnknownAttribute(name.clone()))?;
            if columns.contains(&column) {
                debug!("subset: ignoring repeated attribute '{}'", name);
                continue;
            }
            columns.push(column);
        }
        Ok(columns)
    }
}

impl<S: Into<String>> FromIterator<S> for AttributeSubset {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl From<&[&str]> for AttributeSubset {
    fn from(names: &[&str]) -> Self {
        Self::of(names.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for AttributeSubset {
    fn from(names: [&str; N]) -> Self {
        Self::of(names)
    }
}
