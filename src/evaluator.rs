//! The mapping evaluator: one engine, N dialect tables.
//!
//! Every rule runs once against the consolidated snapshot (the "total"
//! column) and once per service against that service's allocations reshaped
//! back into account records. Specificity is resolved per scope: the
//! consolidated list and each service list independently.

use log::debug;

use crate::aggregate::sum_terminal;
use crate::error::Result;
use crate::matrix::{ConceptMatrix, TOTAL_COLUMN};
use crate::registry::TaxonomyRegistry;
use crate::resolver::terminal_accounts;
use crate::schema::{Account, ServiceAllocation, ServiceShare};

/// Evaluates every registry rule into a concept-value matrix.
///
/// Rules targeting computed concepts are skipped; the concept aggregator
/// owns those. Zero-valued results are still recorded so the matrix carries
/// every rule concept with every column.
pub fn evaluate(
    registry: &TaxonomyRegistry,
    accounts: &[Account],
    allocations: &[ServiceAllocation],
    services: &[ServiceShare],
) -> Result<ConceptMatrix> {
    let consolidated = terminal_accounts(accounts)?;

    // Reshape each service's allocation rows into a standalone account list
    // so terminal resolution runs within the service scope.
    let service_accounts: Vec<(String, Vec<Account>)> = services
        .iter()
        .map(|share| {
            let pseudo = allocations
                .iter()
                .filter(|a| a.service == share.name)
                .map(|a| Account::new(a.code.clone(), a.name.clone(), a.value))
                .collect();
            (share.name.clone(), pseudo)
        })
        .collect();

    let mut service_terminals: Vec<(&str, Vec<&Account>)> =
        Vec::with_capacity(service_accounts.len());
    for (name, pseudo) in &service_accounts {
        service_terminals.push((name.as_str(), terminal_accounts(pseudo)?));
    }

    let mut matrix = ConceptMatrix::new();
    let mut skipped = 0usize;

    for rule in &registry.rules {
        if registry.is_aggregate(&rule.concept) {
            debug!(
                "skipping rule for computed concept '{}' in registry '{}'",
                rule.concept, registry.id
            );
            skipped += 1;
            continue;
        }

        let total = sum_terminal(
            &consolidated,
            &rule.include_prefixes,
            &rule.exclude_prefixes,
            rule.use_absolute_value,
        );
        matrix.add(&rule.concept, TOTAL_COLUMN, total);

        for (service, terminals) in &service_terminals {
            let value = sum_terminal(
                terminals,
                &rule.include_prefixes,
                &rule.exclude_prefixes,
                rule.use_absolute_value,
            );
            matrix.add(&rule.concept, service, value);
        }
    }

    debug!(
        "evaluated {} rules ({} skipped as computed) over {} terminal accounts and {} services",
        registry.rules.len(),
        skipped,
        consolidated.len(),
        services.len()
    );

    Ok(matrix)
}
