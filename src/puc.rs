//! Utilities for the Plan Único de Cuentas (PUC), Colombia's standardized
//! chart-of-accounts numbering.
//!
//! Codes are hierarchical digit strings: the first digit is the accounting
//! class, and longer codes are descendants of every code they extend.

use crate::error::{PucReportError, Result};
use crate::resolver::terminal_accounts;
use crate::schema::Account;

/// Accounting class by leading digit of the PUC code.
pub fn class_name(code: &str) -> Option<&'static str> {
    match code.chars().next()? {
        '1' => Some("Activos"),
        '2' => Some("Pasivos"),
        '3' => Some("Patrimonio"),
        '4' => Some("Ingresos"),
        '5' => Some("Gastos"),
        '6' => Some("Costos de Ventas"),
        '7' => Some("Costos de Producción"),
        '8' => Some("Cuentas de Orden Deudoras"),
        '9' => Some("Cuentas de Orden Acreedoras"),
        _ => None,
    }
}

pub fn class_digit(code: &str) -> Option<char> {
    code.chars().next()
}

/// Hierarchical level by code length: 1 Clase, 2 Grupo, up to 4 Cuenta,
/// up to 6 Subcuenta, anything longer Auxiliar.
pub fn level(code: &str) -> u8 {
    match code.len() {
        0..=1 => 1,
        2 => 2,
        3..=4 => 3,
        5..=6 => 4,
        _ => 5,
    }
}

pub fn level_name(code: &str) -> &'static str {
    match level(code) {
        1 => "Clase",
        2 => "Grupo",
        3 => "Cuenta",
        4 => "Subcuenta",
        _ => "Auxiliar",
    }
}

/// Parent code along the Clase/Grupo/Cuenta/Subcuenta boundaries, or `None`
/// for a top-level class code.
pub fn parent_code(code: &str) -> Option<&str> {
    match code.len() {
        0..=1 => None,
        2 => Some(&code[..1]),
        3..=4 => Some(&code[..2]),
        5..=6 => Some(&code[..4]),
        _ => Some(&code[..6]),
    }
}

/// Strips dots, dashes and whitespace from a raw code cell.
pub fn clean_code(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '.' | '-') && !c.is_whitespace())
        .collect()
}

/// A well-formed PUC code is 1 to 10 digits.
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty() && code.len() <= 10 && code.chars().all(|c| c.is_ascii_digit())
}

pub fn is_asset(code: &str) -> bool {
    code.starts_with('1')
}

pub fn is_liability(code: &str) -> bool {
    code.starts_with('2')
}

pub fn is_equity(code: &str) -> bool {
    code.starts_with('3')
}

pub fn is_income(code: &str) -> bool {
    code.starts_with('4')
}

pub fn is_expense(code: &str) -> bool {
    code.starts_with('5')
}

pub fn is_cost(code: &str) -> bool {
    code.starts_with('6') || code.starts_with('7')
}

/// Per-class totals over the terminal accounts of one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassTotals {
    pub activos: i64,
    pub pasivos: i64,
    pub patrimonio: i64,
    pub ingresos: i64,
    pub gastos: i64,
    pub costos: i64,
}

/// Sums terminal accounts by accounting class. Aggregate rows present in the
/// snapshot never contribute; only dynamically resolved terminals do.
pub fn totals_by_class(accounts: &[Account]) -> Result<ClassTotals> {
    let mut totals = ClassTotals::default();

    for account in terminal_accounts(accounts)? {
        match class_digit(&account.code) {
            Some('1') => totals.activos += account.value,
            Some('2') => totals.pasivos += account.value,
            Some('3') => totals.patrimonio += account.value,
            Some('4') => totals.ingresos += account.value,
            Some('5') => totals.gastos += account.value,
            Some('6') | Some('7') => totals.costos += account.value,
            _ => {}
        }
    }

    Ok(totals)
}

/// Checks `Activos = Pasivos + Patrimonio` over the raw snapshot and returns
/// the signed difference when it is within `tolerance`.
pub fn check_accounting_equation(accounts: &[Account], tolerance: i64) -> Result<i64> {
    let totals = totals_by_class(accounts)?;
    let difference = totals.activos - (totals.pasivos + totals.patrimonio);

    if difference.abs() > tolerance {
        return Err(PucReportError::AccountingIdentityViolation {
            assets: totals.activos,
            liabilities: totals.pasivos,
            equity: totals.patrimonio,
            difference,
            tolerance,
        });
    }

    Ok(difference)
}
