use anyhow::Result;
use chrono::NaiveDate;
use puc_report_builder::{
    convert_rows_to_accounts, process_with_verification, BalanceReportConfig, Dialect,
    RawBalanceRow, ServiceShare, TOTAL_COLUMN,
};

fn main() -> Result<()> {
    // Rows as they come out of a parsed balance file: codes with separators,
    // fractional values, and the subtotal rows the ledger export includes.
    let rows = vec![
        raw("1", "ACTIVOS", 11_100_000.0),
        raw("11", "EFECTIVO Y EQUIVALENTES", 3_500_000.0),
        raw("11.05", "CAJA", 3_000_000.25),
        raw("11.10", "BANCOS RESTRINGIDOS", 499_999.75),
        raw("13.05", "CLIENTES SERVICIOS PUBLICOS", 2_000_000.0),
        raw("13.99", "DETERIORO DE CARTERA", -400_000.0),
        raw("15.20", "MAQUINARIA Y EQUIPO", 6_000_000.0),
        raw("22.05", "PROVEEDORES NACIONALES", 1_800_000.0),
        raw("24.04", "IMPUESTO DE RENTA POR PAGAR", 700_000.0),
        raw("31.05", "CAPITAL SUSCRITO Y PAGADO", 7_000_000.0),
        raw("36.05", "UTILIDADES ACUMULADAS", 1_600_000.0),
        raw("41.35", "INGRESOS POR SERVICIOS", 9_000_000.0),
        raw("51.05", "GASTOS DE PERSONAL", 4_000_000.0),
        raw("61.35", "COSTO DE SERVICIOS", 3_500_000.0),
    ];

    let accounts = convert_rows_to_accounts(&rows)?;
    println!("Ingested {} accounts from {} raw rows", accounts.len(), rows.len());

    let config = BalanceReportConfig {
        company_name: "Aguas del Norte S.A. E.S.P.".to_string(),
        report_date: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
        dialect: Dialect::Grupo1,
        accounts,
        services: vec![
            ServiceShare::new("acueducto", 40.0),
            ServiceShare::new("alcantarillado", 35.0),
            ServiceShare::new("aseo", 25.0),
        ],
    };

    let tolerance = config.accounts.len() as i64;
    let matrix = process_with_verification(&config, tolerance)?;

    println!("\nKey figures (total column):");
    for concept in ["Assets", "Liabilities", "Equity", "EquityAndLiabilities"] {
        println!("  {:<22} {:>12}", concept, matrix.get(concept, TOTAL_COLUMN));
    }

    let columns: Vec<String> = matrix.columns().into_iter().collect();
    let mut writer = csv::Writer::from_path("balance_report.csv")?;
    let mut header = vec!["concept".to_string()];
    header.extend(columns.clone());
    writer.write_record(&header)?;

    for concept in matrix.concepts().map(str::to_string).collect::<Vec<_>>() {
        let mut record = vec![concept.clone()];
        for column in &columns {
            record.push(matrix.get(&concept, column).to_string());
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;

    println!("\nFull matrix written to balance_report.csv");
    Ok(())
}

fn raw(code: &str, name: &str, value: f64) -> RawBalanceRow {
    RawBalanceRow {
        code: code.to_string(),
        name: name.to_string(),
        value,
    }
}
