//! # PUC Report Builder
//!
//! A library for turning a flat Colombian PUC trial balance into the
//! concept-value matrices of the SSPD regulatory reporting taxonomies, with
//! exact integer totals.
//!
//! ## Core Concepts
//!
//! - **Terminal account**: a row whose code has no longer, prefix-matching
//!   code in the same snapshot. Stored leaf flags are untrusted; terminality
//!   is always recomputed, which is what prevents pre-aggregated subtotal
//!   rows from being double counted.
//! - **Service distribution**: every account value is split across the
//!   company's services by percentage using the Largest Remainder Method,
//!   so the parts always sum back to the whole, exactly.
//! - **Taxonomy registry**: a plain-data table of prefix rules and an
//!   aggregation forest. One evaluation engine serves every dialect.
//! - **Concept matrix**: the final `concept -> column -> value` output,
//!   handed unchanged to whatever fills the official templates.
//!
//! ## Example
//!
//! ```rust,ignore
//! use puc_report_builder::*;
//! use chrono::NaiveDate;
//!
//! let config = BalanceReportConfig {
//!     company_name: "Aguas del Norte S.A. E.S.P.".to_string(),
//!     report_date: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
//!     dialect: Dialect::R414,
//!     accounts: vec![
//!         Account::new("1105", "Caja", 50_000),
//!         Account::new("131801", "CxC Energía", 20_000),
//!     ],
//!     services: vec![
//!         ServiceShare::new("acueducto", 40.0),
//!         ServiceShare::new("alcantarillado", 35.0),
//!         ServiceShare::new("aseo", 25.0),
//!     ],
//! };
//!
//! let matrix = process_balance_report(&config).unwrap();
//! ```

pub mod aggregate;
pub mod concepts;
pub mod coverage;
pub mod distribute;
pub mod error;
pub mod evaluator;
pub mod ingestion;
pub mod matrix;
pub mod puc;
pub mod registry;
pub mod resolver;
pub mod schema;
pub mod taxonomy;

pub use aggregate::sum_by_prefixes;
pub use concepts::aggregate_concepts;
pub use coverage::{validate_rule_coverage, CoverageReport, RuleOverlap};
pub use distribute::{distribute, validate_service_shares};
pub use error::{PucReportError, Result};
pub use evaluator::evaluate;
pub use ingestion::{convert_rows_to_accounts, RawBalanceRow};
pub use matrix::{ConceptMatrix, TOTAL_COLUMN};
pub use puc::{check_accounting_equation, totals_by_class, ClassTotals};
pub use registry::{AccountingIdentity, ConceptNode, MappingRule, TaxonomyRegistry};
pub use resolver::{terminal_accounts, terminal_flags};
pub use schema::{Account, BalanceReportConfig, Dialect, ServiceAllocation, ServiceShare};

use log::{debug, info};

pub struct BalanceReportProcessor;

impl BalanceReportProcessor {
    /// Runs the full pipeline: validate, distribute, evaluate, aggregate.
    ///
    /// All fatal conditions surface before any output is produced; a
    /// returned matrix is always complete.
    pub fn process(config: &BalanceReportConfig) -> Result<ConceptMatrix> {
        validate_service_shares(&config.services)?;

        // Callers must strip separators before handing records in; a code
        // that is not a plain digit string breaks prefix matching silently,
        // so it aborts here instead.
        for account in &config.accounts {
            if !puc::is_valid_code(&account.code) {
                return Err(PucReportError::InvalidCode(account.code.clone()));
            }
        }

        let registry = config.dialect.registry();
        registry.validate()?;

        // Resolves the consolidated scope up front so duplicate codes abort
        // before any distribution work.
        let terminals = resolver::terminal_accounts(&config.accounts)?;

        info!(
            "processing balance report for {} ({} dialect, cut-off {})",
            config.company_name,
            registry.id,
            config.report_date
        );
        debug!(
            "snapshot has {} accounts ({} terminal), {} services, {} rules",
            config.accounts.len(),
            terminals.len(),
            config.services.len(),
            registry.rules.len()
        );

        let allocations = distribute::distribute(&config.accounts, &config.services)?;
        let mut matrix =
            evaluator::evaluate(&registry, &config.accounts, &allocations, &config.services)?;
        concepts::aggregate_concepts(&mut matrix, &registry)?;

        Ok(matrix)
    }

    /// Like [`Self::process`], additionally enforcing the dialect's
    /// accounting identity on the result. `tolerance` bounds the acceptable
    /// `A - (L + E)` drift; rounding only occurs in distribution, so a
    /// tolerance of the terminal-account count is the natural ceiling.
    pub fn process_with_verification(
        config: &BalanceReportConfig,
        tolerance: i64,
    ) -> Result<ConceptMatrix> {
        let matrix = Self::process(config)?;

        let registry = config.dialect.registry();
        if let Some(identity) = &registry.identity {
            verify_accounting_identity(&matrix, identity, &config.services, tolerance)?;
        } else {
            debug!(
                "registry '{}' defines no matrix-level identity; skipping verification",
                registry.id
            );
        }

        Ok(matrix)
    }
}

pub fn process_balance_report(config: &BalanceReportConfig) -> Result<ConceptMatrix> {
    BalanceReportProcessor::process(config)
}

pub fn process_with_verification(
    config: &BalanceReportConfig,
    tolerance: i64,
) -> Result<ConceptMatrix> {
    BalanceReportProcessor::process_with_verification(config, tolerance)
}

/// Checks `assets = liabilities + equity` on the total column and every
/// service column of a computed matrix.
pub fn verify_accounting_identity(
    matrix: &ConceptMatrix,
    identity: &AccountingIdentity,
    services: &[ServiceShare],
    tolerance: i64,
) -> Result<()> {
    let mut columns: Vec<&str> = vec![TOTAL_COLUMN];
    columns.extend(services.iter().map(|s| s.name.as_str()));

    for column in columns {
        let assets = matrix.get(&identity.assets, column);
        let liabilities = matrix.get(&identity.liabilities, column);
        let equity = matrix.get(&identity.equity, column);
        let difference = assets - (liabilities + equity);

        if difference.abs() > tolerance {
            return Err(PucReportError::AccountingIdentityViolation {
                assets,
                liabilities,
                equity,
                difference,
                tolerance,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn config(accounts: Vec<Account>) -> BalanceReportConfig {
        BalanceReportConfig {
            company_name: "Test E.S.P.".to_string(),
            report_date: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
            dialect: Dialect::Grupo1,
            accounts,
            services: vec![
                ServiceShare::new("acueducto", 40.0),
                ServiceShare::new("alcantarillado", 35.0),
                ServiceShare::new("aseo", 25.0),
            ],
        }
    }

    #[test]
    fn test_end_to_end_processing() {
        let config = config(vec![
            Account::new("1105", "CAJA", 1_000),
            Account::new("2105", "OBLIGACIONES LP", 600),
            Account::new("3105", "CAPITAL", 400),
        ]);

        let matrix = process_balance_report(&config).unwrap();

        assert_eq!(matrix.get("CashAndCashEquivalents", TOTAL_COLUMN), 1_000);
        assert_eq!(matrix.get("Assets", TOTAL_COLUMN), 1_000);
        assert_eq!(
            matrix.get("ObligacionesFinancierasNoCorrientes", TOTAL_COLUMN),
            600
        );
        assert_eq!(matrix.get("Liabilities", TOTAL_COLUMN), 600);
        assert_eq!(matrix.get("Equity", TOTAL_COLUMN), 400);
        assert_eq!(matrix.get("EquityAndLiabilities", TOTAL_COLUMN), 1_000);
    }

    #[test]
    fn test_verification_passes_within_rounding() {
        let config = config(vec![
            Account::new("1105", "CAJA", 1_000),
            Account::new("2105", "OBLIGACIONES LP", 600),
            Account::new("3105", "CAPITAL", 400),
        ]);

        // 3 terminal accounts bound the worst-case rounding drift.
        let matrix = process_with_verification(&config, 3).unwrap();
        assert_eq!(matrix.get("Assets", TOTAL_COLUMN), 1_000);
    }

    #[test]
    fn test_verification_catches_unbalanced_books() {
        let config = config(vec![
            Account::new("1105", "CAJA", 1_000),
            Account::new("2105", "OBLIGACIONES LP", 100),
        ]);

        let err = process_with_verification(&config, 3).unwrap_err();
        assert!(matches!(
            err,
            PucReportError::AccountingIdentityViolation { .. }
        ));
    }

    #[test]
    fn test_invalid_shares_fail_before_any_work() {
        let mut config = config(vec![Account::new("1105", "CAJA", 1_000)]);
        config.services = vec![ServiceShare::new("acueducto", 60.0)];

        let err = process_balance_report(&config).unwrap_err();
        assert!(matches!(err, PucReportError::InvalidDistribution { .. }));
    }

    #[test]
    fn test_unclean_codes_abort() {
        let config = config(vec![Account::new("11.05", "CAJA", 1_000)]);

        let err = process_balance_report(&config).unwrap_err();
        assert!(matches!(err, PucReportError::InvalidCode(code) if code == "11.05"));
    }

    #[test]
    fn test_duplicate_codes_abort() {
        let config = config(vec![
            Account::new("1105", "CAJA", 1_000),
            Account::new("1105", "CAJA BIS", 2_000),
        ]);

        let err = process_balance_report(&config).unwrap_err();
        assert!(matches!(err, PucReportError::DuplicateCode(_)));
    }

    #[test]
    fn test_determinism() {
        let config = config(vec![
            Account::new("1105", "CAJA", 999_999),
            Account::new("1305", "CLIENTES", 123_457),
            Account::new("1399", "DETERIORO", -333),
            Account::new("2205", "PROVEEDORES", 700_000),
            Account::new("3105", "CAPITAL", 423_123),
        ]);

        let first = process_balance_report(&config).unwrap();
        let second = process_balance_report(&config).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }
}
