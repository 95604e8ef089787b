//! Specificity resolution: which accounts in a snapshot are terminal.
//!
//! An account is terminal when no other account in the same set has a code
//! that both starts with it and is strictly longer. Upstream files routinely
//! carry pre-aggregated subtotal rows ("1", "11") alongside the detail rows
//! that make them up, and their stored leaf flags are not reliable, so the
//! resolution is recomputed from scratch for every input list.

use crate::error::{PucReportError, Result};
use crate::schema::Account;

/// Returns a terminal/aggregate flag per account, in input order.
///
/// Codes sort so that every descendant of a code is contiguous right after
/// it, so one pass over the sorted order decides each account from its
/// successor alone. Duplicate codes make specificity ambiguous and are
/// rejected rather than silently summed.
pub fn terminal_flags(accounts: &[Account]) -> Result<Vec<bool>> {
    let mut order: Vec<usize> = (0..accounts.len()).collect();
    order.sort_by(|&a, &b| accounts[a].code.cmp(&accounts[b].code));

    let mut terminal = vec![true; accounts.len()];

    for pair in order.windows(2) {
        let current = &accounts[pair[0]];
        let next = &accounts[pair[1]];

        if current.code == next.code {
            return Err(PucReportError::DuplicateCode(current.code.clone()));
        }

        if next.code.starts_with(&current.code) {
            terminal[pair[0]] = false;
        }
    }

    Ok(terminal)
}

/// The terminal subset of `accounts`, in input order.
pub fn terminal_accounts(accounts: &[Account]) -> Result<Vec<&Account>> {
    let flags = terminal_flags(accounts)?;

    Ok(accounts
        .iter()
        .zip(flags)
        .filter_map(|(account, is_terminal)| is_terminal.then_some(account))
        .collect())
}
