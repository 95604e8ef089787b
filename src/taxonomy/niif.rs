//! Shared NIIF registry for Grupo 1 (NIIF Plenas), Grupo 2 (PYMES) and
//! Grupo 3 (Microempresas).
//!
//! The three groups report the same statement structure over the commercial
//! PUC; they differ in which services a company reports, and that is caller
//! input, not registry content.

use super::{agg, rule};
use crate::registry::{AccountingIdentity, TaxonomyRegistry};
use crate::schema::Dialect;

pub(super) fn registry(dialect: Dialect) -> TaxonomyRegistry {
    let name = match dialect {
        Dialect::Grupo1 => "Grupo 1 - NIIF Plenas",
        Dialect::Grupo2 => "Grupo 2 - NIIF para PYMES",
        _ => "Grupo 3 - Microempresas",
    };

    TaxonomyRegistry {
        id: dialect.id().to_string(),
        name: name.to_string(),
        rules: vec![
            // ===== Estado de Situación Financiera =====
            // Activos corrientes
            rule("CashAndCashEquivalents", &["11"], &["1110"]),
            // 1110 restricted deposits are reported on their own row
            rule("RestrictedCashAndCashEquivalents", &["1110"], &[]),
            rule("CuentasComercialesCobrarServiciosPublicos", &["1305"], &[]),
            rule("DeudoresComercialesCorrientes", &["1310"], &[]),
            // remainder of group 13 not owned by a sibling row
            rule(
                "OtrasCuentasPorCobrarCorrientes",
                &["13"],
                &["1305", "1310", "1320", "1399"],
            ),
            rule("DeterioroCuentasPorCobrarCorrientes", &["1399"], &[]),
            rule("CurrentFinancialAssets", &["12"], &[]),
            rule("Inventories", &["14"], &[]),
            rule("CurrentTaxAssets", &["1705"], &[]),
            rule("OtherCurrentAssets", &["19"], &[]),
            // Activos no corrientes
            rule("PropertyPlantAndEquipment", &["15"], &["1505"]),
            rule("InvestmentProperty", &["1505"], &[]),
            rule("IntangibleAssetsOtherThanGoodwill", &["16"], &["1698"]),
            rule("Goodwill", &["1698"], &[]),
            rule("DeferredTaxAssets", &["17"], &["1705"]),
            rule("CuentasPorCobrarNoCorrientes", &["1320"], &[]),
            rule("OtherNoncurrentAssets", &["18"], &[]),
            // Pasivos corrientes
            rule("ObligacionesFinancierasCorrientes", &["21"], &["2105"]),
            rule("ProveedoresCorrientes", &["2205"], &[]),
            rule(
                "TradeAndOtherCurrentPayables",
                &["22", "23"],
                &["2205", "2210", "2335"],
            ),
            rule("GastosAcumuladosPorPagar", &["2335"], &[]),
            rule("CurrentTaxLiabilities", &["24"], &[]),
            rule("ObligacionesLaboralesCorrientes", &["25"], &["2510"]),
            rule("ProvisionsCurrent", &["26"], &["2605"]),
            rule("IngresosDiferidosCorrientes", &["27"], &["2705", "2715"]),
            rule("OtherCurrentLiabilities", &["28"], &["2805"]),
            // Pasivos no corrientes
            rule("ObligacionesFinancierasNoCorrientes", &["2105"], &[]),
            rule("ProveedoresNoCorrientes", &["2210"], &[]),
            rule("ObligacionesLaboralesNoCorrientes", &["2510"], &[]),
            rule("ProvisionsNoncurrent", &["2605"], &[]),
            rule("IngresosDiferidosNoCorrientes", &["2705"], &[]),
            rule("DeferredTaxLiabilities", &["2715"], &[]),
            rule("OtherNoncurrentLiabilities", &["2805"], &[]),
            // Patrimonio
            rule("IssuedCapital", &["31"], &[]),
            rule("SharePremium", &["32"], &[]),
            rule("OtherReserves", &["33"], &[]),
            rule("RevaluationSurplus", &["34"], &[]),
            rule("NoncontrollingInterests", &["35"], &[]),
            rule("RetainedEarnings", &["36"], &[]),
            rule("UtilidadDelEjercicio", &["37"], &["3705"]),
            rule("AccumulatedOtherComprehensiveIncome", &["3705"], &[]),
            rule("TreasuryShares", &["38"], &[]),
            // ===== Estado de Resultados =====
            rule("RevenueFromContractsWithCustomers", &["41"], &[]),
            // 4210 ingresos financieros is carved out of the non-operating
            // income group
            rule("OtherIncome", &["42"], &["4210"]),
            rule("FinanceIncome", &["4210"], &[]),
            rule("AdministrativeExpense", &["51"], &[]),
            rule("SellingExpense", &["52"], &[]),
            rule("FinanceCosts", &["53"], &[]),
            rule("OtherExpenses", &["5"], &["51", "52", "53"]),
            rule("CostOfSales", &["6", "7"], &[]),
        ],
        aggregates: vec![
            agg(
                "TradeAndOtherCurrentReceivables",
                &[
                    "CuentasComercialesCobrarServiciosPublicos",
                    "DeudoresComercialesCorrientes",
                    "OtrasCuentasPorCobrarCorrientes",
                    "DeterioroCuentasPorCobrarCorrientes",
                ],
            ),
            agg(
                "CurrentAssets",
                &[
                    "CashAndCashEquivalents",
                    "RestrictedCashAndCashEquivalents",
                    "TradeAndOtherCurrentReceivables",
                    "CurrentFinancialAssets",
                    "Inventories",
                    "CurrentTaxAssets",
                    "OtherCurrentAssets",
                ],
            ),
            agg(
                "NoncurrentAssets",
                &[
                    "PropertyPlantAndEquipment",
                    "InvestmentProperty",
                    "IntangibleAssetsOtherThanGoodwill",
                    "Goodwill",
                    "DeferredTaxAssets",
                    "CuentasPorCobrarNoCorrientes",
                    "OtherNoncurrentAssets",
                ],
            ),
            agg("Assets", &["CurrentAssets", "NoncurrentAssets"]),
            agg(
                "CurrentLiabilities",
                &[
                    "ObligacionesFinancierasCorrientes",
                    "ProveedoresCorrientes",
                    "TradeAndOtherCurrentPayables",
                    "GastosAcumuladosPorPagar",
                    "CurrentTaxLiabilities",
                    "ObligacionesLaboralesCorrientes",
                    "ProvisionsCurrent",
                    "IngresosDiferidosCorrientes",
                    "OtherCurrentLiabilities",
                ],
            ),
            agg(
                "NoncurrentLiabilities",
                &[
                    "ObligacionesFinancierasNoCorrientes",
                    "ProveedoresNoCorrientes",
                    "ObligacionesLaboralesNoCorrientes",
                    "ProvisionsNoncurrent",
                    "IngresosDiferidosNoCorrientes",
                    "DeferredTaxLiabilities",
                    "OtherNoncurrentLiabilities",
                ],
            ),
            agg("Liabilities", &["CurrentLiabilities", "NoncurrentLiabilities"]),
            agg(
                "Equity",
                &[
                    "IssuedCapital",
                    "SharePremium",
                    "OtherReserves",
                    "RevaluationSurplus",
                    "NoncontrollingInterests",
                    "RetainedEarnings",
                    "UtilidadDelEjercicio",
                    "AccumulatedOtherComprehensiveIncome",
                    "TreasuryShares",
                ],
            ),
            agg("EquityAndLiabilities", &["Liabilities", "Equity"]),
            agg("Revenue", &["RevenueFromContractsWithCustomers", "OtherIncome"]),
            agg(
                "ExpenseByNature",
                &[
                    "AdministrativeExpense",
                    "SellingExpense",
                    "FinanceCosts",
                    "OtherExpenses",
                ],
            ),
        ],
        identity: Some(AccountingIdentity {
            assets: "Assets".to_string(),
            liabilities: "Liabilities".to_string(),
            equity: "Equity".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_share_the_table() {
        let g1 = registry(Dialect::Grupo1);
        let g2 = registry(Dialect::Grupo2);
        let g3 = registry(Dialect::Grupo3);

        assert_eq!(g1.rules, g2.rules);
        assert_eq!(g2.rules, g3.rules);
        assert_eq!(g1.aggregates, g3.aggregates);
        assert_ne!(g1.id, g2.id);
    }

    #[test]
    fn test_restricted_cash_carved_out_of_cash() {
        let registry = registry(Dialect::Grupo1);
        let cash = registry
            .rules
            .iter()
            .find(|r| r.concept == "CashAndCashEquivalents")
            .unwrap();
        assert!(cash.exclude_prefixes.contains(&"1110".to_string()));
    }
}
