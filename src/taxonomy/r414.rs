//! Registry for Resolución 414 CGN (empresas de servicios públicos) and
//! Resolución 533 CGN, which reports over the same chart.
//!
//! Prefixes follow the CGN public-sector PUC: 1318 groups the receivables
//! for each regulated service (131801 energía … 131806 telecom), with
//! 131807-131812 holding the matching subsidy receivables.

use super::{agg, rule};
use crate::registry::{AccountingIdentity, TaxonomyRegistry};
use crate::schema::Dialect;

pub(super) fn registry(dialect: Dialect) -> TaxonomyRegistry {
    let name = match dialect {
        Dialect::R414 => "Resolución 414 CGN - Servicios Públicos",
        _ => "Resolución 533 CGN - Entidades de Gobierno",
    };

    TaxonomyRegistry {
        id: dialect.id().to_string(),
        name: name.to_string(),
        rules: vec![
            // ===== Estado de Situación Financiera =====
            // Activos corrientes
            rule("EfectivoYEquivalentesAlEfectivo", &["11"], &["1132"]),
            rule("EfectivoDeUsoRestringidoCorriente", &["1132"], &["113210"]),
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
            rule("CuentasPorCobrarPartesRelacionadas", &["138401", "138414"], &[]),
            rule(
                "OtrasCuentasPorCobrar",
                &[
                    "1311", "1317", "1319", "1322", "1324", "1333", "1384", "1385", "1387",
                ],
                &["138401", "138414", "138424"],
            ),
            // 1386/1388 deterioro acumulado (CR) carry negative balances
            rule("DeterioroCuentasPorCobrar", &["1386", "1388"], &[]),
            rule("Inventarios", &["15"], &["1580"]),
            // long-term participations (1216/1227/1230/1233) report on their
            // own rows; 1280 deterioro (CR) stays out entirely
            rule(
                "OtrosActivosFinancierosCorrientes",
                &["12"],
                &["1216", "1227", "1230", "1233", "1280"],
            ),
            rule(
                "OtrosActivosNoFinancierosCorrientes",
                &["19"],
                &["1905", "1920", "1975"],
            ),
            // Activos no corrientes
            rule("PropiedadesPlantaYEquipo", &["16"], &[]),
            rule("EfectivoDeUsoRestringidoNoCorriente", &["113210"], &[]),
            rule("InversionesEnAsociadas", &["1230"], &[]),
            rule("InversionesEnNegociosConjuntos", &["1233"], &[]),
            rule("InversionesEnControladas", &["1227"], &[]),
            rule("InversionesEnEntidadesEnLiquidacion", &["1216"], &[]),
            rule("ActivosPorImpuestosDiferidos", &["1905"], &[]),
            rule("PlanesDeActivos", &["1920"], &[]),
            rule("PropiedadDeInversion", &["1975"], &[]),
            rule("ActivosIntangibles", &["17"], &[]),
            // Pasivos corrientes
            rule("BeneficiosEmpleadosCorrientes", &["2511"], &[]),
            rule("OtrasProvisionesCorrientes", &["27"], &["2790"]),
            rule("CuentasPorPagarServicios", &["240101"], &[]),
            rule("CuentasPorPagarProveedores", &["2401", "2406"], &["240101"]),
            rule("CuentasPorPagarPartesRelacionadas", &["249056", "249057"], &[]),
            rule(
                "OtrasCuentasPorPagar",
                &["2424", "2407", "2490"],
                &["249056", "249057"],
            ),
            rule("TitulosDeDeudaCorrientes", &["2222", "2224"], &[]),
            rule("PrestamosPorPagarCorrientes", &["2313", "2316"], &[]),
            rule("ImpuestoALasGananciasPorPagar", &["244001"], &[]),
            rule("IngresosRecibidosPorAnticipado", &["2910"], &[]),
            rule("PasivosPorImpuestosDiferidos", &["2918"], &[]),
            rule("OtrosPasivosFinancierosCorrientes", &["21"], &[]),
            rule(
                "OtrosPasivosNoFinancierosCorrientes",
                &["2436", "2440", "2445", "29"],
                &["244001", "2910", "2918", "2990"],
            ),
            // Pasivos no corrientes
            rule(
                "BeneficiosEmpleadosNoCorrientes",
                &["2512", "2513", "2514", "2515"],
                &[],
            ),
            rule("OtrasProvisionesNoCorrientes", &["2790"], &[]),
            rule("CuentasPorPagarBienesNoCorrientes", &["2495"], &[]),
            rule("TitulosDeDeudaNoCorrientes", &["2223", "2225"], &[]),
            rule("PrestamosPorPagarNoCorrientes", &["2314", "2317"], &[]),
            rule("IngresosAnticipadosNoCorrientes", &["2990"], &[]),
            rule("OtrosPasivosFinancierosNoCorrientes", &["26"], &[]),
            // Patrimonio
            rule("AportesSociales", &["3203"], &[]),
            rule("CapitalSuscritoYPagado", &["3204"], &[]),
            rule("CapitalFiscal", &["3208"], &[]),
            rule("PrimaEnColocacionDeAcciones", &["3210"], &[]),
            rule("ReservaLegal", &["321501"], &[]),
            rule("OtrasReservas", &["3215"], &["321501"]),
            rule("DividendosDecretadosEnEspecie", &["3220"], &[]),
            rule("GananciasAcumuladas", &["3225", "3230"], &[]),
            rule("ImpactosPorTransicionNiif", &["3290"], &[]),
            rule("OriInversiones", &["3271"], &[]),
            rule("OriCoberturasFlujosDeEfectivo", &["3272"], &[]),
            rule("OriCoberturaInversionExtranjero", &["3273"], &[]),
            rule("OriMetodoParticipacion", &["3274", "3275", "3276"], &[]),
            rule("OriBeneficiosEmpleados", &["3280"], &[]),
            rule("OriConversionEstadosFinancieros", &["3281"], &[]),
            // ===== Estado de Resultados =====
            rule("IngresosActividadesOrdinarias", &["43"], &[]),
            rule("CostoDeVentas", &["6"], &[]),
            rule(
                "OtrosIngresos",
                &["41", "42", "44", "47", "48"],
                &["4802", "4807", "4808", "4810", "4815"],
            ),
            rule("GastosAdministracionOperacionVentas", &["51", "52"], &[]),
            rule("IngresosFinancieros", &["4802", "4807", "4808", "4810"], &[]),
            rule("CostosFinancieros", &["5802", "5803", "5807"], &[]),
            rule("ParticipacionEnAsociadas", &["4815", "5815"], &[]),
            rule(
                "OtrosGastos",
                &["53", "54", "56", "58"],
                &["5802", "5803", "5807", "5815", "5410"],
            ),
            rule("ImpuestoGananciasCorriente", &["540101"], &[]),
            rule("ImpuestoGananciasDiferido", &["5410"], &["540101"]),
            // ===== Notas - subclasificación de PPE (hoja 800100) =====
            rule("Terrenos", &["1605"], &[]),
            rule("ConstruccionesEnCurso", &["1615"], &[]),
            rule("Edificaciones", &["1640"], &[]),
            rule("Plantas", &["164501"], &[]),
            rule("Ductos", &["164502", "164503", "164504"], &[]),
            rule("RedesLineasYCables", &["1650"], &[]),
            rule("MaquinariaYEquipo", &["1655"], &[]),
            rule("MueblesYEnseres", &["1665"], &[]),
            rule("EquiposDeComputoYComunicacion", &["1670"], &[]),
            rule("EquiposDeTransporte", &["1675"], &[]),
        ],
        aggregates: vec![
            agg(
                "TotalCuentasPorCobrar",
                &[
                    "CuentasPorCobrarServiciosPublicos",
                    "CuentasPorCobrarSubsidios",
                    "CuentasPorCobrarAprovechamiento",
                    "CuentasPorCobrarVentaDeBienes",
                    "CuentasPorCobrarPartesRelacionadas",
                    "OtrasCuentasPorCobrar",
                    "DeterioroCuentasPorCobrar",
                ],
            ),
            agg(
                "ActivosCorrientes",
                &[
                    "EfectivoYEquivalentesAlEfectivo",
                    "EfectivoDeUsoRestringidoCorriente",
                    "TotalCuentasPorCobrar",
                    "Inventarios",
                    "OtrosActivosFinancierosCorrientes",
                    "OtrosActivosNoFinancierosCorrientes",
                ],
            ),
            agg(
                "ActivosNoCorrientes",
                &[
                    "PropiedadesPlantaYEquipo",
                    "EfectivoDeUsoRestringidoNoCorriente",
                    "InversionesEnAsociadas",
                    "InversionesEnNegociosConjuntos",
                    "InversionesEnControladas",
                    "InversionesEnEntidadesEnLiquidacion",
                    "ActivosPorImpuestosDiferidos",
                    "PlanesDeActivos",
                    "PropiedadDeInversion",
                    "ActivosIntangibles",
                ],
            ),
            agg("TotalActivos", &["ActivosCorrientes", "ActivosNoCorrientes"]),
            agg(
                "PasivosCorrientes",
                &[
                    "BeneficiosEmpleadosCorrientes",
                    "OtrasProvisionesCorrientes",
                    "CuentasPorPagarServicios",
                    "CuentasPorPagarProveedores",
                    "CuentasPorPagarPartesRelacionadas",
                    "OtrasCuentasPorPagar",
                    "TitulosDeDeudaCorrientes",
                    "PrestamosPorPagarCorrientes",
                    "ImpuestoALasGananciasPorPagar",
                    "IngresosRecibidosPorAnticipado",
                    "PasivosPorImpuestosDiferidos",
                    "OtrosPasivosFinancierosCorrientes",
                    "OtrosPasivosNoFinancierosCorrientes",
                ],
            ),
            agg(
                "PasivosNoCorrientes",
                &[
                    "BeneficiosEmpleadosNoCorrientes",
                    "OtrasProvisionesNoCorrientes",
                    "CuentasPorPagarBienesNoCorrientes",
                    "TitulosDeDeudaNoCorrientes",
                    "PrestamosPorPagarNoCorrientes",
                    "IngresosAnticipadosNoCorrientes",
                    "OtrosPasivosFinancierosNoCorrientes",
                ],
            ),
            agg("TotalPasivos", &["PasivosCorrientes", "PasivosNoCorrientes"]),
            agg(
                "OtroResultadoIntegral",
                &[
                    "OriInversiones",
                    "OriCoberturasFlujosDeEfectivo",
                    "OriCoberturaInversionExtranjero",
                    "OriMetodoParticipacion",
                    "OriBeneficiosEmpleados",
                    "OriConversionEstadosFinancieros",
                ],
            ),
            agg(
                "TotalPatrimonio",
                &[
                    "AportesSociales",
                    "CapitalSuscritoYPagado",
                    "CapitalFiscal",
                    "PrimaEnColocacionDeAcciones",
                    "ReservaLegal",
                    "OtrasReservas",
                    "DividendosDecretadosEnEspecie",
                    "GananciasAcumuladas",
                    "ImpactosPorTransicionNiif",
                    "OtroResultadoIntegral",
                ],
            ),
            agg("TotalPatrimonioYPasivos", &["TotalPasivos", "TotalPatrimonio"]),
            agg(
                "PropiedadesPlantaYEquipoSubclasificacion",
                &[
                    "Terrenos",
                    "ConstruccionesEnCurso",
                    "Edificaciones",
                    "Plantas",
                    "Ductos",
                    "RedesLineasYCables",
                    "MaquinariaYEquipo",
                    "MueblesYEnseres",
                    "EquiposDeComputoYComunicacion",
                    "EquiposDeTransporte",
                ],
            ),
        ],
        identity: Some(AccountingIdentity {
            assets: "TotalActivos".to_string(),
            liabilities: "TotalPasivos".to_string(),
            equity: "TotalPatrimonio".to_string(),
        }),
    }
}
