//! Coverage diagnostics: a separate pass over snapshot and registry.
//!
//! Nothing here is an error. Rule overlap means a terminal account feeds
//! more than one concept of the same statement (double counting unless the
//! rows are meant to re-slice the same accounts, as note disclosures do);
//! unmapped accounts simply contribute nowhere; leaf-flag disagreements
//! mean the upstream file's stored hints diverge from the dynamic
//! resolution. The calling application owns any warning policy.

use serde::Serialize;

use crate::aggregate::matches_any;
use crate::error::Result;
use crate::registry::TaxonomyRegistry;
use crate::resolver::terminal_flags;
use crate::schema::Account;

/// One terminal account matched by more than one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleOverlap {
    pub code: String,
    pub concepts: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    /// Terminal accounts in the snapshot.
    pub terminal_count: usize,
    /// Terminal accounts matched by exactly one rule.
    pub matched_once: usize,
    /// Terminal accounts matched by two or more rules.
    pub overlapping: Vec<RuleOverlap>,
    /// Terminal accounts matched by no rule at all.
    pub unmapped_codes: Vec<String>,
    /// Codes whose stored leaf hint disagrees with the dynamic resolution.
    pub leaf_flag_disagreements: Vec<String>,
}

impl CoverageReport {
    pub fn is_clean(&self) -> bool {
        self.overlapping.is_empty()
            && self.unmapped_codes.is_empty()
            && self.leaf_flag_disagreements.is_empty()
    }
}

/// Audits a snapshot against a registry's rule table.
pub fn validate_rule_coverage(
    accounts: &[Account],
    registry: &TaxonomyRegistry,
) -> Result<CoverageReport> {
    let flags = terminal_flags(accounts)?;
    let mut report = CoverageReport::default();

    for (account, is_terminal) in accounts.iter().zip(&flags) {
        if account.declared_leaf != *is_terminal {
            report.leaf_flag_disagreements.push(account.code.clone());
        }

        if !is_terminal {
            continue;
        }
        report.terminal_count += 1;

        let concepts: Vec<String> = registry
            .rules
            .iter()
            .filter(|rule| {
                matches_any(&account.code, &rule.include_prefixes)
                    && !matches_any(&account.code, &rule.exclude_prefixes)
            })
            .map(|rule| rule.concept.clone())
            .collect();

        match concepts.len() {
            0 => report.unmapped_codes.push(account.code.clone()),
            1 => report.matched_once += 1,
            _ => report.overlapping.push(RuleOverlap {
                code: account.code.clone(),
                concepts,
            }),
        }
    }

    Ok(report)
}
