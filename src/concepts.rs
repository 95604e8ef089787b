//! Concept aggregation: computed parents sum their children, bottom-up.

use std::collections::HashMap;

use crate::error::{PucReportError, Result};
use crate::matrix::ConceptMatrix;
use crate::registry::{ConceptNode, TaxonomyRegistry};

#[derive(Clone, Copy, PartialEq)]
enum VisitState {
    InProgress,
    Done,
}

/// Orders the registry's aggregate concepts children-before-parents.
///
/// The forest is expected to be acyclic by construction, but a malformed
/// registry must fail here instead of looping.
pub fn topological_order(registry: &TaxonomyRegistry) -> Result<Vec<String>> {
    let nodes: HashMap<&str, &ConceptNode> = registry
        .aggregates
        .iter()
        .map(|node| (node.id.as_str(), node))
        .collect();

    let mut states: HashMap<&str, VisitState> = HashMap::new();
    let mut order = Vec::with_capacity(registry.aggregates.len());

    for node in &registry.aggregates {
        visit(node.id.as_str(), &nodes, &mut states, &mut order, registry)?;
    }

    Ok(order)
}

fn visit<'a>(
    id: &'a str,
    nodes: &HashMap<&'a str, &'a ConceptNode>,
    states: &mut HashMap<&'a str, VisitState>,
    order: &mut Vec<String>,
    registry: &TaxonomyRegistry,
) -> Result<()> {
    match states.get(id) {
        Some(VisitState::Done) => return Ok(()),
        Some(VisitState::InProgress) => {
            return Err(PucReportError::CyclicConceptGraph {
                registry: registry.id.clone(),
                concept: id.to_string(),
            });
        }
        None => {}
    }

    // Rule-populated children are leaves of the forest; only aggregate
    // children recurse.
    if let Some(&node) = nodes.get(id) {
        states.insert(id, VisitState::InProgress);
        for child in &node.children {
            visit(child.as_str(), nodes, states, order, registry)?;
        }
        order.push(id.to_string());
    }

    states.insert(id, VisitState::Done);
    Ok(())
}

/// Fills every computed concept as the column-wise sum of its children.
///
/// Children missing from the matrix contribute 0, so sparse periods
/// aggregate cleanly.
pub fn aggregate_concepts(matrix: &mut ConceptMatrix, registry: &TaxonomyRegistry) -> Result<()> {
    let order = topological_order(registry)?;
    let columns = matrix.columns();

    for parent in order {
        let node = match registry.aggregate(&parent) {
            Some(node) => node,
            None => continue,
        };

        for column in &columns {
            let sum: i64 = node
                .children
                .iter()
                .map(|child| matrix.get(child, column))
                .sum();
            matrix.set(&parent, column, sum);
        }
    }

    Ok(())
}
