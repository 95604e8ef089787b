//! Registry for the Informe Financiero Especial (IFE), the quarterly form.
//!
//! IFE reports over the CGN Resolución 414 chart but with its own row
//! structure, and presents most credit-balance rows as positive magnitudes,
//! hence the absolute-value rules. Ganancias acumuladas stays signed so
//! accumulated losses remain negative.

use super::{agg, rule, rule_abs};
use crate::registry::TaxonomyRegistry;

pub(super) fn registry() -> TaxonomyRegistry {
    TaxonomyRegistry {
        id: "ife".to_string(),
        name: "Informe Financiero Especial (IFE)".to_string(),
        rules: vec![
            // ===== Estado de situación financiera por servicios =====
            // Activos corrientes
            rule("EfectivoYEquivalentesAlEfectivo", &["11"], &["1132"]),
            rule("EfectivoDeUsoRestringido", &["1132"], &[]),
            rule(
                "CuentasPorCobrarServiciosPublicos",
                &["131801", "131802", "131803", "131804", "131805", "131806"],
                &[],
            ),
            rule(
                "CuentasPorCobrarSubsidios",
                &["131807", "131808", "131809", "131810", "131811", "131812"],
                &[],
            ),
            rule("CuentasPorCobrarAprovechamiento", &["138424"], &[]),
            rule("CuentasPorCobrarVentaDeBienes", &["1316"], &[]),
            rule(
                "OtrasCuentasPorCobrar",
                &[
                    "1311", "1317", "1319", "1322", "1324", "1333", "1384", "1385", "1387",
                ],
                &["138401", "138414", "138424"],
            ),
            rule("Inventarios", &["15"], &["1580"]),
            rule(
                "InversionesCorrientes",
                &["12"],
                &["1227", "1230", "1233", "1280"],
            ),
            rule(
                "OtrosActivosFinancierosCorrientes",
                &["19"],
                &["1970", "1971", "1972", "1973", "1974", "1975"],
            ),
            rule("OtrosActivosNoFinancierosCorrientes", &["17", "18"], &[]),
            // Activos no corrientes
            rule("PropiedadesPlantaYEquipo", &["16"], &[]),
            rule(
                "ActivosIntangibles",
                &["1970", "1971", "1972", "1973", "1974", "1975"],
                &[],
            ),
            rule("InversionesNoCorrientes", &["1227", "1230", "1233"], &[]),
            rule("OtrosActivosFinancierosNoCorrientes", &["14"], &[]),
            // Pasivos corrientes. The CGN chart has no corriente/no
            // corriente split by code; the form treats the whole class as
            // current and leaves long-term rows to manual entry.
            rule_abs("ProvisionesCorrientes", &["25"], &[]),
            rule_abs("CuentasPorPagarCorrientes", &["23"], &[]),
            rule_abs("ObligacionesFinancierasCorrientes", &["21", "22"], &[]),
            rule_abs("ObligacionesLaboralesCorrientes", &["24"], &[]),
            rule_abs("PasivoPorImpuestosCorrientes", &["27"], &[]),
            rule_abs("OtrosPasivosCorrientes", &["26"], &[]),
            // Patrimonio
            rule_abs("Capital", &["3105"], &[]),
            rule_abs("InversionSuplementaria", &["3109"], &[]),
            rule_abs("OtrasParticipacionesEnElPatrimonio", &["3110", "3125"], &[]),
            rule_abs("SuperavitPorRevaluacion", &["3115", "3120"], &[]),
            rule_abs("OtrasReservas", &["3130"], &[]),
            // accumulated losses must stay negative
            rule("GananciasAcumuladas", &["32"], &[]),
            rule_abs("EfectosPorAdopcionNif", &["3145"], &[]),
            // ===== Estado de resultados por servicios =====
            rule_abs("IngresosActividadesOrdinarias", &["41", "42", "43"], &[]),
            rule_abs("CostoDeVentas", &["62", "63"], &[]),
            rule_abs("GastosAdministracionYVentas", &["51", "52", "56"], &[]),
            rule_abs("OtrosIngresos", &["44", "48"], &["4802", "4803", "4808"]),
            rule_abs("OtrosGastos", &["53", "58"], &["5802", "5803", "5808"]),
            rule_abs("IngresosFinancieros", &["4802", "4803"], &[]),
            rule_abs("CostosFinancieros", &["5802", "5803"], &[]),
            rule_abs("OtrasGananciasPerdidas", &["4808", "5808"], &[]),
            rule_abs("GastoPorImpuesto", &["54"], &[]),
            rule_abs("OperacionesDiscontinuadas", &["59"], &[]),
        ],
        aggregates: vec![
            agg(
                "TotalCuentasPorCobrarServiciosPublicos",
                &[
                    "CuentasPorCobrarServiciosPublicos",
                    "CuentasPorCobrarSubsidios",
                    "CuentasPorCobrarAprovechamiento",
                ],
            ),
            agg(
                "TotalCuentasPorCobrar",
                &[
                    "TotalCuentasPorCobrarServiciosPublicos",
                    "CuentasPorCobrarVentaDeBienes",
                    "OtrasCuentasPorCobrar",
                ],
            ),
            agg(
                "ActivosCorrientesTotales",
                &[
                    "EfectivoYEquivalentesAlEfectivo",
                    "EfectivoDeUsoRestringido",
                    "TotalCuentasPorCobrar",
                    "Inventarios",
                    "InversionesCorrientes",
                    "OtrosActivosFinancierosCorrientes",
                    "OtrosActivosNoFinancierosCorrientes",
                ],
            ),
            agg(
                "ActivosNoCorrientesTotales",
                &[
                    "PropiedadesPlantaYEquipo",
                    "ActivosIntangibles",
                    "InversionesNoCorrientes",
                    "OtrosActivosFinancierosNoCorrientes",
                ],
            ),
            agg(
                "TotalDeActivos",
                &["ActivosCorrientesTotales", "ActivosNoCorrientesTotales"],
            ),
            agg(
                "PasivosCorrientesTotales",
                &[
                    "ProvisionesCorrientes",
                    "CuentasPorPagarCorrientes",
                    "ObligacionesFinancierasCorrientes",
                    "ObligacionesLaboralesCorrientes",
                    "PasivoPorImpuestosCorrientes",
                    "OtrosPasivosCorrientes",
                ],
            ),
            agg("TotalPasivos", &["PasivosCorrientesTotales"]),
            agg(
                "PatrimonioTotal",
                &[
                    "Capital",
                    "InversionSuplementaria",
                    "OtrasParticipacionesEnElPatrimonio",
                    "SuperavitPorRevaluacion",
                    "OtrasReservas",
                    "GananciasAcumuladas",
                    "EfectosPorAdopcionNif",
                ],
            ),
            agg(
                "TotalDePatrimonioYPasivos",
                &["TotalPasivos", "PatrimonioTotal"],
            ),
        ],
        // Absolute-value presentation breaks the signed A = L + E check at
        // matrix level; the raw-account equation check applies instead.
        identity: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_rows_use_absolute_value() {
        let registry = registry();
        let payables = registry
            .rules
            .iter()
            .find(|r| r.concept == "CuentasPorPagarCorrientes")
            .unwrap();
        assert!(payables.use_absolute_value);

        let retained = registry
            .rules
            .iter()
            .find(|r| r.concept == "GananciasAcumuladas")
            .unwrap();
        assert!(!retained.use_absolute_value);
    }

    #[test]
    fn test_intangibles_carved_out_of_other_assets() {
        let registry = registry();
        let other = registry
            .rules
            .iter()
            .find(|r| r.concept == "OtrosActivosFinancierosCorrientes")
            .unwrap();
        assert!(other.exclude_prefixes.contains(&"1970".to_string()));
    }

    #[test]
    fn test_no_matrix_level_identity() {
        assert!(registry().identity.is_none());
    }
}
