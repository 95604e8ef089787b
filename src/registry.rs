//! Taxonomy registries: plain-data rule tables and aggregation forests.
//!
//! Each reporting dialect is expressed as one immutable registry. Adding a
//! dialect means adding a data table under `taxonomy/`; the evaluation
//! engine never changes per dialect.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::concepts::topological_order;
use crate::error::{PucReportError, Result};

/// One prefix-mapping rule: which terminal accounts feed one output concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRule {
    /// Output concept key the rule populates.
    pub concept: String,
    /// Account code prefixes the rule sums.
    pub include_prefixes: Vec<String>,
    /// Code prefixes carved out of the includes (owned by sibling rules).
    pub exclude_prefixes: Vec<String>,
    /// Report the magnitude instead of the signed balance. Used by dialects
    /// that present credit-balance rows as positive figures.
    pub use_absolute_value: bool,
}

/// A computed concept and the child concepts it sums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptNode {
    pub id: String,
    pub children: Vec<String>,
}

/// Concept keys for the dialect's A = L + E check at matrix level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountingIdentity {
    pub assets: String,
    pub liabilities: String,
    pub equity: String,
}

/// One dialect's complete mapping table: rules, aggregation forest, and the
/// optional accounting-identity triple. Read-only once built; safe to share
/// across concurrent computations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyRegistry {
    pub id: String,
    pub name: String,
    pub rules: Vec<MappingRule>,
    pub aggregates: Vec<ConceptNode>,
    pub identity: Option<AccountingIdentity>,
}

impl TaxonomyRegistry {
    pub fn is_aggregate(&self, concept: &str) -> bool {
        self.aggregates.iter().any(|node| node.id == concept)
    }

    pub fn aggregate(&self, concept: &str) -> Option<&ConceptNode> {
        self.aggregates.iter().find(|node| node.id == concept)
    }

    /// Checks the registry shape once per computation: aggregate ids must be
    /// unique, no rule may target a computed concept, and the forest must be
    /// acyclic.
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for node in &self.aggregates {
            if !seen.insert(node.id.as_str()) {
                return Err(PucReportError::ValidationError {
                    scope: format!("registry '{}'", self.id),
                    details: format!("duplicate aggregate concept '{}'", node.id),
                });
            }
        }

        for rule in &self.rules {
            if self.is_aggregate(&rule.concept) {
                return Err(PucReportError::ValidationError {
                    scope: format!("registry '{}'", self.id),
                    details: format!(
                        "rule targets computed concept '{}'; computed concepts are populated by aggregation only",
                        rule.concept
                    ),
                });
            }
        }

        topological_order(self)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{agg, rule};

    #[test]
    fn test_validate_accepts_well_formed_registry() {
        let registry = TaxonomyRegistry {
            id: "test".to_string(),
            name: "Test".to_string(),
            rules: vec![rule("Cash", &["11"], &[]), rule("Receivables", &["13"], &[])],
            aggregates: vec![agg("CurrentAssets", &["Cash", "Receivables"])],
            identity: None,
        };

        assert!(registry.validate().is_ok());
        assert!(registry.is_aggregate("CurrentAssets"));
        assert!(!registry.is_aggregate("Cash"));
    }

    #[test]
    fn test_validate_rejects_rule_on_computed_concept() {
        let registry = TaxonomyRegistry {
            id: "test".to_string(),
            name: "Test".to_string(),
            rules: vec![rule("CurrentAssets", &["1"], &[])],
            aggregates: vec![agg("CurrentAssets", &["Cash"])],
            identity: None,
        };

        let err = registry.validate().unwrap_err();
        assert!(matches!(err, PucReportError::ValidationError { .. }));
    }

    #[test]
    fn test_validate_rejects_duplicate_aggregates() {
        let registry = TaxonomyRegistry {
            id: "test".to_string(),
            name: "Test".to_string(),
            rules: vec![],
            aggregates: vec![agg("Assets", &["Cash"]), agg("Assets", &["Inventory"])],
            identity: None,
        };

        assert!(registry.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_cycles() {
        let registry = TaxonomyRegistry {
            id: "test".to_string(),
            name: "Test".to_string(),
            rules: vec![],
            aggregates: vec![agg("A", &["B"]), agg("B", &["A"])],
            identity: None,
        };

        let err = registry.validate().unwrap_err();
        assert!(matches!(err, PucReportError::CyclicConceptGraph { .. }));
    }

    #[test]
    fn test_shipped_registries_are_well_formed() {
        use crate::schema::Dialect;

        for dialect in [
            Dialect::Grupo1,
            Dialect::Grupo2,
            Dialect::Grupo3,
            Dialect::R414,
            Dialect::R533,
            Dialect::Ife,
        ] {
            let registry = dialect.registry();
            assert_eq!(registry.id, dialect.id());
            assert!(
                registry.validate().is_ok(),
                "registry '{}' failed validation",
                registry.id
            );
            assert!(!registry.rules.is_empty());
        }
    }
}
