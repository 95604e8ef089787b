//! Built-in taxonomy registries for the SSPD reporting dialects.
//!
//! Every dialect is a data table; the evaluator and concept aggregator are
//! shared. Grupo 1/2/3 present the NIIF chart, R414/R533 the CGN Resolución
//! chart for public-utility companies, and IFE the quarterly special report.

mod ife;
mod niif;
mod r414;

use crate::registry::{ConceptNode, MappingRule, TaxonomyRegistry};
use crate::schema::Dialect;

pub(crate) fn registry_for(dialect: Dialect) -> TaxonomyRegistry {
    match dialect {
        Dialect::Grupo1 | Dialect::Grupo2 | Dialect::Grupo3 => niif::registry(dialect),
        Dialect::R414 | Dialect::R533 => r414::registry(dialect),
        Dialect::Ife => ife::registry(),
    }
}

pub(crate) fn rule(concept: &str, include: &[&str], exclude: &[&str]) -> MappingRule {
    MappingRule {
        concept: concept.to_string(),
        include_prefixes: include.iter().map(|s| s.to_string()).collect(),
        exclude_prefixes: exclude.iter().map(|s| s.to_string()).collect(),
        use_absolute_value: false,
    }
}

pub(crate) fn rule_abs(concept: &str, include: &[&str], exclude: &[&str]) -> MappingRule {
    MappingRule {
        use_absolute_value: true,
        ..rule(concept, include, exclude)
    }
}

pub(crate) fn agg(id: &str, children: &[&str]) -> ConceptNode {
    ConceptNode {
        id: id.to_string(),
        children: children.iter().map(|s| s.to_string()).collect(),
    }
}
