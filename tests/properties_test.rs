//! Property-based tests for partitions and approximations
//!
//! Uses proptest to generate random decision tables and verify the region
//! algebra for arbitrary attribute subsets and concepts.

use std::collections::HashSet;

use proptest::prelude::*;
use roughset_rs::{AttributeSubset, ConceptSet, DecisionTable, RowSet};

const DECISIONS: [&str; 3] = ["d0", "d1", "d2"];

#[derive(Debug, Clone)]
struct Case {
    names: Vec<String>,
    rows: Vec<Vec<String>>,
    decisions: Vec<String>,
}

impl Case {
    fn table(&self) -> DecisionTable {
        DecisionTable::from_rows(self.names.clone(), self.rows.clone(), self.decisions.clone())
            .unwrap()
    }
}

fn any_case() -> impl Strategy<Value = Case> {
    (1usize..4, 0usize..40).prop_flat_map(|(attributes, rows)| {
        let row = prop::collection::vec(0u8..3, attributes);
        (
            prop::collection::vec(row, rows),
            prop::collection::vec(0usize..DECISIONS.len(), rows),
        )
            .prop_map(move |(values, decisions)| Case {
                names: (0..attributes).map(|i| format!("a{}", i)).collect(),
                rows: values
                    .into_iter()
                    .map(|r| r.into_iter().map(|v| v.to_string()).collect())
                    .collect(),
                decisions: decisions.into_iter().map(|d| DECISIONS[d].to_string()).collect(),
            })
    })
}

/// A subset of the (at most 3) attribute names; empty means all.
fn any_subset() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..3, 0..3)
}

fn subset_of(case: &Case, picks: &[usize]) -> AttributeSubset {
    let names: Vec<String> = picks
        .iter()
        .map(|&i| case.names[i % case.names.len()].clone())
        .collect();
    AttributeSubset::of(names)
}

/// Concept values, possibly including one that never occurs.
fn any_concept() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop_oneof![Just("d0"), Just("d1"), Just("d2"), Just("zz")], 0..4)
}

fn is_union_of_classes(dt: &DecisionTable, subset: &AttributeSubset, region: &RowSet) -> bool {
    let partition = dt.partition(subset).unwrap();
    partition.classes().iter().all(|class| {
        let inside = class.members().iter().filter(|&&r| region.contains(r)).count();
        inside == 0 || inside == class.len()
    })
}

proptest! {
    #[test]
    fn test_classes_partition_universe(case in any_case(), picks in any_subset()) {
        let dt = case.table();
        let subset = subset_of(&case, &picks);
        let partition = dt.partition(&subset).unwrap();

        let mut seen = RowSet::new();
        for class in partition.classes() {
            prop_assert!(!class.is_empty());
            for &row in class.members() {
                prop_assert!(seen.insert(row));
                prop_assert_eq!(partition.class_of(row), Some(class.id()));
            }
        }
        prop_assert_eq!(seen, dt.system().universe());
    }

    #[test]
    fn test_same_class_iff_same_projection(case in any_case(), picks in any_subset()) {
        let dt = case.table();
        let subset = subset_of(&case, &picks);
        let partition = dt.partition(&subset).unwrap();
        let keys: HashSet<&[u32]> = partition.classes().iter().map(|c| c.key()).collect();
        prop_assert_eq!(keys.len(), partition.len());

        // class ids follow the first occurrence of each projection
        let mut next = 0;
        for class in partition.class_index() {
            prop_assert!(class.id() <= next);
            if class.id() == next {
                next += 1;
            }
        }
    }

    #[test]
    fn test_region_algebra(case in any_case(), picks in any_subset(), concept in any_concept()) {
        let dt = case.table();
        let subset = subset_of(&case, &picks);
        let approx = dt.approximate(&ConceptSet::of(concept), &subset).unwrap();
        let universe = dt.system().universe();

        prop_assert!(approx.lower().is_subset(approx.upper()));
        prop_assert_eq!(approx.boundary(), &approx.upper().difference(approx.lower()));
        prop_assert!(approx.lower().is_disjoint(approx.boundary()));
        prop_assert_eq!(approx.upper().union(approx.negative()), universe);
        prop_assert!(approx.upper().is_disjoint(approx.negative()));

        for region in [approx.lower(), approx.boundary(), approx.upper(), approx.negative()] {
            prop_assert!(is_union_of_classes(&dt, &subset, region));
        }
    }

    #[test]
    fn test_monotone_in_concept(
        case in any_case(),
        picks in any_subset(),
        small in any_concept(),
        extra in any_concept()
    ) {
        let dt = case.table();
        let subset = subset_of(&case, &picks);
        let large: Vec<&str> = small.iter().chain(&extra).copied().collect();

        let a = dt.approximate(&ConceptSet::of(small), &subset).unwrap();
        let b = dt.approximate(&ConceptSet::of(large), &subset).unwrap();
        prop_assert!(a.upper().is_subset(b.upper()));
        prop_assert!(a.lower().is_subset(b.lower()));
    }

    #[test]
    fn test_full_domain_covers_universe(case in any_case(), picks in any_subset()) {
        let dt = case.table();
        let subset = subset_of(&case, &picks);
        let explicit = ConceptSet::of(dt.concepts());
        for concept in [ConceptSet::all(), explicit] {
            let approx = dt.approximate(&concept, &subset).unwrap();
            prop_assert_eq!(approx.upper(), &dt.system().universe());
            prop_assert!(approx.negative().is_empty());
        }
    }

    #[test]
    fn test_idempotent(case in any_case(), picks in any_subset(), concept in any_concept()) {
        let dt = case.table();
        let subset = subset_of(&case, &picks);
        let concept = ConceptSet::of(concept);
        let first = dt.approximate(&concept, &subset).unwrap();
        let second = dt.approximate(&concept, &subset).unwrap();
        prop_assert_eq!(&first, &second);

        // a fresh table with the same data agrees with the cached one
        let fresh = case.table().approximate(&concept, &subset).unwrap();
        prop_assert_eq!(first, fresh);
    }

    #[test]
    fn test_lower_is_homogeneous(case in any_case(), picks in any_subset(), concept in any_concept()) {
        let dt = case.table();
        let subset = subset_of(&case, &picks);
        let approx = dt.approximate(&ConceptSet::of(concept.clone()), &subset).unwrap();
        let partition = dt.partition(&subset).unwrap();

        for row in approx.lower() {
            let class = partition.class(partition.class_of(row).unwrap());
            let decision = dt.decision(row).unwrap();
            prop_assert!(concept.contains(&decision));
            for &member in class.members() {
                prop_assert_eq!(dt.decision(member).unwrap(), decision);
            }
        }
    }
}
