use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::registry::TaxonomyRegistry;

/// A single row of the uploaded trial balance.
///
/// Codes follow the Colombian PUC numbering scheme: a child code's string
/// starts with its parent's ("1" -> "11" -> "1105"). Values are integral
/// currency amounts; fractional cents are rounded by the upstream parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Account {
    #[schemars(
        description = "Hierarchical PUC code, digits only (e.g. '1', '11', '1305'). Separators must be stripped before handing records to the engine."
    )]
    pub code: String,

    #[schemars(description = "Account name as it appears in the ledger (e.g. 'CAJA', 'BANCOS')")]
    pub name: String,

    #[schemars(
        description = "Balance in whole currency units. Contra accounts (deterioro, depreciación) may be negative."
    )]
    pub value: i64,

    /// Leaf flag carried from the upstream parse. Untrusted: the engine
    /// always recomputes specificity dynamically and only uses this hint
    /// for cross-validation diagnostics.
    #[serde(default)]
    #[schemars(
        description = "Leaf hint from the source file. Ignored by the computation; surfaced only in coverage diagnostics when it disagrees with the dynamic resolution."
    )]
    pub declared_leaf: bool,
}

impl Account {
    pub fn new(code: impl Into<String>, name: impl Into<String>, value: i64) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            value,
            declared_leaf: false,
        }
    }
}

/// One cost-allocation bucket and its share of every account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ServiceShare {
    #[schemars(
        description = "Opaque service identifier used as a matrix column key (e.g. 'acueducto'). The engine attaches no semantics to it."
    )]
    pub name: String,

    #[schemars(
        description = "Percentage of every account allocated to this service. All shares must sum to 100 (tolerance 0.01)."
    )]
    pub percentage: f64,
}

impl ServiceShare {
    pub fn new(name: impl Into<String>, percentage: f64) -> Self {
        Self {
            name: name.into(),
            percentage,
        }
    }
}

/// One (service, account) row produced by the distributor.
///
/// For every code, the allocations across all services sum exactly to the
/// original account value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ServiceAllocation {
    pub service: String,
    pub code: String,
    pub name: String,
    pub value: i64,
}

/// Reporting taxonomy dialects from the SSPD catalog.
///
/// Each dialect resolves to one immutable [`TaxonomyRegistry`]; dialects
/// differ only in registry content, never in evaluation logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[schemars(description = "Grupo 1 - NIIF Plenas")]
    Grupo1,

    #[schemars(description = "Grupo 2 - NIIF para PYMES")]
    Grupo2,

    #[schemars(description = "Grupo 3 - Microempresas")]
    Grupo3,

    #[schemars(description = "Resolución 414 CGN - empresas de servicios públicos")]
    R414,

    #[schemars(description = "Resolución 533 CGN - entidades de gobierno (shares the R414 chart)")]
    R533,

    #[schemars(description = "Informe Financiero Especial (IFE)")]
    Ife,
}

impl Dialect {
    pub fn id(&self) -> &'static str {
        match self {
            Dialect::Grupo1 => "grupo1",
            Dialect::Grupo2 => "grupo2",
            Dialect::Grupo3 => "grupo3",
            Dialect::R414 => "r414",
            Dialect::R533 => "r533",
            Dialect::Ife => "ife",
        }
    }

    /// Builds the mapping registry for this dialect.
    pub fn registry(&self) -> TaxonomyRegistry {
        crate::taxonomy::registry_for(*self)
    }
}

/// Full input for one report computation.
///
/// Every invocation carries its complete input set; there is no implicit
/// session state anywhere in the engine.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BalanceReportConfig {
    #[schemars(description = "Legal name of the reporting company")]
    pub company_name: String,

    #[schemars(description = "Cut-off date of the reporting period (YYYY-MM-DD)")]
    pub report_date: NaiveDate,

    #[schemars(description = "Taxonomy dialect the report is generated for")]
    pub dialect: Dialect,

    #[schemars(
        description = "The full trial-balance snapshot for the period. Immutable once the pipeline starts."
    )]
    pub accounts: Vec<Account>,

    #[schemars(description = "Cost-allocation services with their percentage shares")]
    pub services: Vec<ServiceShare>,
}

impl BalanceReportConfig {
    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(BalanceReportConfig)
    }

    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}
