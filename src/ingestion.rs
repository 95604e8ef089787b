//! Boundary adapter from externally parsed balance rows to engine accounts.
//!
//! The engine itself requires clean, digit-only codes and integral values;
//! this module is where a caller converts the raw output of its own file
//! parser into that contract. Rows with unusable codes are dropped
//! with a log line rather than failing the whole upload, matching upstream
//! parser behavior, and fractional values are rounded here, once.

use log::debug;

use crate::error::Result;
use crate::puc::{clean_code, is_valid_code};
use crate::resolver::terminal_flags;
use crate::schema::Account;

/// One row as produced by an external file parser: untrimmed code cell,
/// name, and a possibly fractional value.
#[derive(Debug, Clone)]
pub struct RawBalanceRow {
    pub code: String,
    pub name: String,
    pub value: f64,
}

/// Cleans and converts raw rows into accounts.
///
/// The `declared_leaf` hint is stamped from a specificity resolution over
/// the converted set, mirroring what upstream loaders persist. The engine
/// still recomputes terminality per scope; the stamp only feeds coverage
/// diagnostics.
pub fn convert_rows_to_accounts(rows: &[RawBalanceRow]) -> Result<Vec<Account>> {
    let mut accounts = Vec::with_capacity(rows.len());
    let mut dropped = 0usize;

    for row in rows {
        let code = clean_code(&row.code);
        if !is_valid_code(&code) {
            debug!("dropping row with unusable code '{}' ({})", row.code, row.name);
            dropped += 1;
            continue;
        }

        accounts.push(Account::new(code, row.name.trim(), row.value.round() as i64));
    }

    let flags = terminal_flags(&accounts)?;
    for (account, is_terminal) in accounts.iter_mut().zip(flags) {
        account.declared_leaf = is_terminal;
    }

    if dropped > 0 {
        debug!("dropped {} of {} raw rows", dropped, rows.len());
    }

    Ok(accounts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PucReportError;

    fn row(code: &str, name: &str, value: f64) -> RawBalanceRow {
        RawBalanceRow {
            code: code.to_string(),
            name: name.to_string(),
            value,
        }
    }

    #[test]
    fn test_codes_cleaned_and_values_rounded() {
        let rows = vec![
            row("11.05", " CAJA ", 1_000.49),
            row("13-05", "CLIENTES", 399.51),
        ];

        let accounts = convert_rows_to_accounts(&rows).unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].code, "1105");
        assert_eq!(accounts[0].name, "CAJA");
        assert_eq!(accounts[0].value, 1_000);
        assert_eq!(accounts[1].code, "1305");
        assert_eq!(accounts[1].value, 400);
    }

    #[test]
    fn test_invalid_rows_dropped() {
        let rows = vec![
            row("TOTAL", "fila de resumen", 99.0),
            row("", "sin código", 1.0),
            row("1105", "CAJA", 100.0),
        ];

        let accounts = convert_rows_to_accounts(&rows).unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].code, "1105");
    }

    #[test]
    fn test_leaf_hint_stamped() {
        let rows = vec![
            row("1", "ACTIVOS", 1_000.0),
            row("11", "EFECTIVO", 1_000.0),
            row("1105", "CAJA", 1_000.0),
        ];

        let accounts = convert_rows_to_accounts(&rows).unwrap();
        assert!(!accounts[0].declared_leaf);
        assert!(!accounts[1].declared_leaf);
        assert!(accounts[2].declared_leaf);
    }

    #[test]
    fn test_duplicate_codes_after_cleaning_rejected() {
        let rows = vec![row("1105", "CAJA", 1.0), row("11.05", "CAJA BIS", 2.0)];

        let err = convert_rows_to_accounts(&rows).unwrap_err();
        assert!(matches!(err, PucReportError::DuplicateCode(code) if code == "1105"));
    }
}
