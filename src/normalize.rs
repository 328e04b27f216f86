//! Replace DrugBank codes with common names where the lookup has one.

use std::collections::BTreeSet;

use tracing::{debug, instrument};

use crate::loader::{Lookup, RawEdge};

/// Severity is not part of the dataset, so every interaction weighs the same.
pub const UNIFORM_WEIGHT: f32 = 1.0;

/// An interaction between two labelled drugs.
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    pub drug1: String,
    pub drug2: String,
    pub weight: f32,
}

impl Interaction {
    pub fn new(drug1: impl Into<String>, drug2: impl Into<String>) -> Self {
        Self {
            drug1: drug1.into(),
            drug2: drug2.into(),
            weight: UNIFORM_WEIGHT,
        }
    }
}

/// Lookup misses found while normalizing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnmappedReport {
    /// Endpoints looked up (two per edge).
    pub endpoints: usize,
    pub unmapped: usize,
    pub rows: usize,
    /// Misses in the first column only.
    pub unmapped_first: usize,
    /// Distinct codes the lookup did not know.
    pub codes: BTreeSet<String>,
}

impl UnmappedReport {
    pub fn fraction(&self) -> f64 {
        ratio(self.unmapped, self.endpoints)
    }

    pub fn first_column_fraction(&self) -> f64 {
        ratio(self.unmapped_first, self.rows)
    }

    fn label(&mut self, code: &str, lookup: &Lookup) -> (String, bool) {
        self.endpoints += 1;
        match lookup.resolve(code) {
            Some(name) => (name.to_string(), true),
            None => {
                self.unmapped += 1;
                if self.codes.insert(code.to_string()) {
                    debug!(code, "no common name");
                }
                (code.to_string(), false)
            }
        }
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

#[derive(Debug, Clone, Default)]
pub struct Normalized {
    pub interactions: Vec<Interaction>,
    pub report: UnmappedReport,
}

/// Label every endpoint with its common name, keeping the raw code when the
/// lookup has no entry for it.
#[instrument(skip_all, fields(edges = edges.len()))]
pub fn normalize(edges: &[RawEdge], lookup: &Lookup) -> Normalized {
    let mut report = UnmappedReport::default();

    let interactions = edges
        .iter()
        .map(|edge| {
            report.rows += 1;
            let (drug1, mapped) = report.label(&edge.drug1, lookup);
            if !mapped {
                report.unmapped_first += 1;
            }
            let (drug2, _) = report.label(&edge.drug2, lookup);
            Interaction {
                drug1,
                drug2,
                weight: UNIFORM_WEIGHT,
            }
        })
        .collect();

    Normalized {
        interactions,
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pairs(interactions: &[Interaction]) -> Vec<(&str, &str)> {
        interactions
            .iter()
            .map(|i| (i.drug1.as_str(), i.drug2.as_str()))
            .collect()
    }

    #[test]
    fn test_normalize_example() {
        let edges = vec![RawEdge::new("DB1", "DB2"), RawEdge::new("DB2", "DB3")];
        let lookup: Lookup = [("DB1", "A"), ("DB2", "B")].into_iter().collect();

        let normalized = normalize(&edges, &lookup);

        assert_eq!(
            pairs(&normalized.interactions),
            vec![("A", "B"), ("B", "DB3")]
        );
        assert!(normalized
            .interactions
            .iter()
            .all(|i| i.weight == UNIFORM_WEIGHT));

        let report = normalized.report;
        assert_eq!(report.endpoints, 4);
        assert_eq!(report.unmapped, 1);
        assert_eq!(report.fraction(), 0.25);
        assert_eq!(report.first_column_fraction(), 0.0);
        assert_eq!(report.codes, BTreeSet::from(["DB3".to_string()]));
    }

    #[test]
    fn test_first_column_fraction() {
        let edges = vec![RawEdge::new("DB9", "DB1"), RawEdge::new("DB1", "DB9")];
        let lookup: Lookup = [("DB1", "A")].into_iter().collect();

        let report = normalize(&edges, &lookup).report;
        assert_eq!(report.first_column_fraction(), 0.5);
        assert_eq!(report.fraction(), 0.5);
        assert_eq!(report.codes.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let normalized = normalize(&[], &Lookup::default());
        assert!(normalized.interactions.is_empty());
        assert_eq!(normalized.report.fraction(), 0.0);
        assert_eq!(normalized.report.first_column_fraction(), 0.0);
    }

    fn code() -> impl Strategy<Value = String> {
        (0u32..40).prop_map(|n| format!("DB{n:05}"))
    }

    proptest! {
        #[test]
        fn test_mapped_codes_take_their_name_and_others_survive(
            edges in prop::collection::vec((code(), code()), 0..30),
            mapped in prop::collection::btree_set(0u32..40, 0..40),
        ) {
            let lookup: Lookup = mapped
                .iter()
                .map(|n| (format!("DB{n:05}"), format!("Drug {n}")))
                .collect();
            let raw: Vec<RawEdge> = edges.iter().map(|(a, b)| RawEdge::new(a, b)).collect();

            let normalized = normalize(&raw, &lookup);

            prop_assert_eq!(normalized.interactions.len(), raw.len());
            for (edge, out) in raw.iter().zip(&normalized.interactions) {
                for (code, label) in [(&edge.drug1, &out.drug1), (&edge.drug2, &out.drug2)] {
                    match lookup.resolve(code) {
                        Some(name) => prop_assert_eq!(label.as_str(), name),
                        None => prop_assert_eq!(label, code),
                    }
                }
            }
        }

        #[test]
        fn test_normalizing_twice_changes_nothing(
            edges in prop::collection::vec((code(), code()), 0..30),
            mapped in prop::collection::btree_set(0u32..40, 0..40),
        ) {
            let lookup: Lookup = mapped
                .iter()
                .map(|n| (format!("DB{n:05}"), format!("Drug {n}")))
                .collect();
            let raw: Vec<RawEdge> = edges.iter().map(|(a, b)| RawEdge::new(a, b)).collect();

            let once = normalize(&raw, &lookup).interactions;
            let again: Vec<RawEdge> = once
                .iter()
                .map(|i| RawEdge::new(i.drug1.clone(), i.drug2.clone()))
                .collect();
            let twice = normalize(&again, &lookup).interactions;

            prop_assert_eq!(once, twice);
        }
    }
}
