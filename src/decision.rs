//! Decision tables: an information system with one decision value per object.

use std::sync::Arc;

use log::debug;

use crate::approximation::{approximate, Approximation};
use crate::cache::SubsetCache;
use crate::concept::ConceptSet;
use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::diversity::Diversity;
use crate::error::{ConfigurationError, Result};
use crate::partition::Partition;
use crate::select::{collect_rows, Selection};
use crate::subset::AttributeSubset;
use crate::system::InformationSystem;
use crate::types::RowId;

#[derive(Debug, Clone)]
pub struct DecisionTable {
    system: InformationSystem,
    decision_name: String,
    dictionary: Dictionary,
    decisions: Vec<u32>,
    diversities: SubsetCache<Diversity>,
}

impl DecisionTable {
    /// Attach decisions to `system`, naming the decision column after
    /// [`Config::decision_name`].
    pub fn new<D, V>(system: InformationSystem, decisions: D) -> Result<Self>
    where
        D: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let name = system.config().decision_name.clone();
        Self::with_decision_name(system, name, decisions)
    }

    /// Attach decisions to `system` under the column name `name`.
    ///
    /// Fails if the number of decisions differs from the number of objects,
    /// or if `name` is reserved or already used by an attribute.
    pub fn with_decision_name<D, V>(
        system: InformationSystem,
        name: impl Into<String>,
        decisions: D,
    ) -> Result<Self>
    where
        D: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let decision_name = name.into();
        system.config().check_column_name(&decision_name)?;
        if system.attribute_index(&decision_name).is_some() {
            return Err(ConfigurationError::DuplicateColumn(decision_name));
        }

        let mut dictionary = Dictionary::new();
        let decisions: Vec<u32> = decisions
            .into_iter()
            .map(|value| dictionary.intern(value.into()))
            .collect();

        if decisions.len() != system.len() {
            return Err(ConfigurationError::RowCountMismatch {
                attributes: system.len(),
                decisions: decisions.len(),
            });
        }

        debug!(
            "decision table: '{}' with {} distinct decisions",
            decision_name,
            dictionary.len()
        );

        let diversities = SubsetCache::new(system.config().cache);
        Ok(Self {
            system,
            decision_name,
            dictionary,
            decisions,
            diversities,
        })
    }

    /// Build a decision table from attribute names, attribute rows and decisions.
    pub fn from_rows<N, S, R, Row, V, D, W>(names: N, rows: R, decisions: D) -> Result<Self>
    where
        N: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator<Item = Row>,
        Row: IntoIterator<Item = V>,
        V: Into<String>,
        D: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Self::new(InformationSystem::from_rows(names, rows)?, decisions)
    }

    /// The underlying information system (attributes only).
    pub fn system(&self) -> &InformationSystem {
        &self.system
    }

    pub fn config(&self) -> &Config {
        self.system.config()
    }

    pub fn attribute_names(&self) -> &[String] {
        self.system.attribute_names()
    }

    pub fn decision_name(&self) -> &str {
        &self.decision_name
    }

    pub fn len(&self) -> usize {
        self.system.len()
    }

    pub fn is_empty(&self) -> bool {
        self.system.is_empty()
    }

    pub fn decision(&self, row: RowId) -> Result<&str> {
        self.system.check_row(row)?;
        Ok(self.decode(row))
    }

    fn decode(&self, row: RowId) -> &str {
        self.dictionary.value(self.decisions[row.index()])
    }

    /// Decision code of every row, indexed by [`RowId`].
    pub fn decision_codes(&self) -> &[u32] {
        &self.decisions
    }

    /// Distinct decision values in order of first occurrence.
    pub fn concepts(&self) -> Vec<&str> {
        self.dictionary.values().collect()
    }

    pub fn decision_value(&self, code: u32) -> &str {
        self.dictionary.value(code)
    }

    /// Membership mask of `concept` over decision codes.
    pub fn concept_mask(&self, concept: &ConceptSet) -> Vec<bool> {
        concept.mask(&self.dictionary)
    }

    pub fn partition(&self, subset: &AttributeSubset) -> Result<Arc<Partition>> {
        self.system.partition(subset)
    }

    /// Decision diversity of every class induced by `subset`.
    pub fn diversity(&self, subset: &AttributeSubset) -> Result<Arc<Diversity>> {
        let columns = self.system.resolve(subset)?;
        let partition = self.system.partition_on(&columns);
        Ok(self.diversity_of(&columns, &partition))
    }

    fn diversity_of(&self, columns: &[usize], partition: &Partition) -> Arc<Diversity> {
        self.diversities
            .get_or_insert_with(columns, || Diversity::count(partition, &self.decisions))
    }

    pub fn diversity_cache(&self) -> &SubsetCache<Diversity> {
        &self.diversities
    }

    /// Lower, boundary, upper and negative regions of `concept` with respect
    /// to the indiscernibility relation of `subset`.
    pub fn approximate(
        &self,
        concept: &ConceptSet,
        subset: &AttributeSubset,
    ) -> Result<Approximation> {
        let columns = self.system.resolve(subset)?;
        let partition = self.system.partition_on(&columns);
        let diversity = self.diversity_of(&columns, &partition);
        let mask = self.concept_mask(concept);
        Ok(approximate(&partition, &diversity, &mask))
    }

    /// Attribute rows and decisions of the given objects, in original row order.
    pub fn select<I>(&self, rows: I) -> Result<Selection<'_>>
    where
        I: IntoIterator<Item = RowId>,
    {
        let row_ids = collect_rows(rows, self.len())?;
        let mut selection = self.system.select(row_ids.iter().copied())?;
        selection.decisions = Some(row_ids.iter().map(|&row| self.decode(row)).collect());
        Ok(selection)
    }

    /// Every object with its attributes and decision.
    pub fn records(&self) -> Selection<'_> {
        let rows = (0..self.len() as u32).map(RowId::new);
        let attributes = rows.clone().map(|row| self.system.project(row)).collect();
        Selection {
            row_ids: rows.clone().collect(),
            attributes,
            decisions: Some(rows.map(|row| self.decode(row)).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::rowset::RowSet;

    fn table() -> DecisionTable {
        DecisionTable::from_rows(
            ["a"],
            [["0"], ["0"], ["0"], ["1"]],
            ["p", "p", "n", "n"],
        )
        .unwrap()
    }

    fn rows(ids: &[u32]) -> RowSet {
        ids.iter().copied().map(RowId::new).collect()
    }

    #[test]
    fn test_accessors() {
        let dt = table();
        assert_eq!(dt.len(), 4);
        assert_eq!(dt.decision_name(), "target");
        assert_eq!(dt.decision(RowId::new(2)), Ok("n"));
        assert_eq!(dt.concepts(), vec!["p", "n"]);
        assert_eq!(
            dt.decision(RowId::new(4)),
            Err(ConfigurationError::UnknownRow(RowId::new(4)))
        );
    }

    #[test]
    fn test_row_count_mismatch() {
        let system = InformationSystem::from_rows(["a"], [["0"], ["1"]]).unwrap();
        let err = DecisionTable::new(system, ["p"]).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::RowCountMismatch {
                attributes: 2,
                decisions: 1
            }
        );
    }

    #[test]
    fn test_decision_name_collisions() {
        let system = InformationSystem::from_rows(["a", "y"], [["0", "1"]]).unwrap();
        let err = DecisionTable::with_decision_name(system.clone(), "y", ["p"]).unwrap_err();
        assert_eq!(err, ConfigurationError::DuplicateColumn("y".to_string()));

        let err = DecisionTable::with_decision_name(system.clone(), "index", ["p"]).unwrap_err();
        assert!(matches!(err, ConfigurationError::ReservedName { .. }));

        let err = DecisionTable::with_decision_name(system, "IND_INDEX", ["p"]).unwrap_err();
        assert!(matches!(err, ConfigurationError::ReservedName { .. }));
    }

    #[test]
    fn test_approximate() {
        let dt = table();
        let approx = dt
            .approximate(&ConceptSet::from(["p"]), &AttributeSubset::from(["a"]))
            .unwrap();
        assert!(approx.lower().is_empty());
        assert_eq!(approx.boundary(), &rows(&[0, 1, 2]));
        assert_eq!(approx.upper(), &rows(&[0, 1, 2]));
        assert_eq!(approx.negative(), &rows(&[3]));
    }

    #[test]
    fn test_approximate_reuses_classes() {
        let dt = table();
        let subset = AttributeSubset::from(["a"]);
        dt.approximate(&ConceptSet::from(["p"]), &subset).unwrap();
        dt.approximate(&ConceptSet::from(["n"]), &subset).unwrap();
        dt.approximate(&ConceptSet::all(), &subset).unwrap();
        assert_eq!(dt.system().partition_cache().misses(), 1);
        assert_eq!(dt.system().partition_cache().hits(), 2);
        assert_eq!(dt.diversity_cache().misses(), 1);
        assert_eq!(dt.diversity_cache().hits(), 2);
    }

    #[test]
    fn test_approximate_rejects_bad_subset() {
        let dt = table();
        let err = dt
            .approximate(&ConceptSet::all(), &AttributeSubset::from(["b"]))
            .unwrap_err();
        assert_eq!(err, ConfigurationError::UnknownAttribute("b".to_string()));
        let err = dt
            .approximate(&ConceptSet::all(), &AttributeSubset::from(["IND_INDEX"]))
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::ReservedName { .. }));
    }

    #[test]
    fn test_select() {
        let dt = table();
        let approx = dt
            .approximate(&ConceptSet::from(["n"]), &AttributeSubset::all())
            .unwrap();
        let lower = dt.select(approx.lower()).unwrap();
        assert_eq!(lower.row_ids(), &[RowId::new(3)]);
        assert_eq!(lower.attributes(), &[vec!["1"]]);
        assert_eq!(lower.decisions(), Some(&["n"][..]));

        let err = dt.select([RowId::new(10)]).unwrap_err();
        assert_eq!(err, ConfigurationError::UnknownRow(RowId::new(10)));
    }

    #[test]
    fn test_records() {
        let dt = table();
        let records = dt.records();
        assert_eq!(records.len(), 4);
        assert_eq!(records.attributes()[3], vec!["1"]);
        assert_eq!(records.decisions(), Some(&["p", "p", "n", "n"][..]));
    }
}
