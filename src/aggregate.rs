//! Prefix aggregation over terminal accounts.
//!
//! A mapping rule sums every terminal account whose code starts with one of
//! its include prefixes and none of its exclude prefixes. Terminality is
//! resolved against the same list the sum runs over, never against some
//! other scope, which is what prevents an ancestor row ("13") from being
//! double counted next to its own detail rows ("1305").

use crate::error::Result;
use crate::resolver::terminal_accounts;
use crate::schema::Account;

pub(crate) fn matches_any(code: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|prefix| code.starts_with(prefix.as_str()))
}

/// Sums terminal accounts matching the include/exclude prefix sets.
///
/// An empty match set yields 0, not an error: many rule rows are
/// legitimately empty in a given period.
pub fn sum_by_prefixes(
    accounts: &[Account],
    include_prefixes: &[String],
    exclude_prefixes: &[String],
    use_absolute_value: bool,
) -> Result<i64> {
    let terminals = terminal_accounts(accounts)?;
    Ok(sum_terminal(
        &terminals,
        include_prefixes,
        exclude_prefixes,
        use_absolute_value,
    ))
}

/// Same as [`sum_by_prefixes`] over an already-resolved terminal set.
pub(crate) fn sum_terminal(
    terminals: &[&Account],
    include_prefixes: &[String],
    exclude_prefixes: &[String],
    use_absolute_value: bool,
) -> i64 {
    let mut total = 0i64;

    for account in terminals {
        if !matches_any(&account.code, include_prefixes) {
            continue;
        }
        if matches_any(&account.code, exclude_prefixes) {
            continue;
        }

        total += if use_absolute_value {
            account.value.abs()
        } else {
            account.value
        };
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixes(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sum_excludes_aggregate_rows() {
        // "13" is present as its own row alongside its detail; only the
        // detail may count toward a rule matching prefix "13".
        let accounts = vec![
            Account::new("13", "CUENTAS POR COBRAR", 1_000),
            Account::new("1305", "CLIENTES", 400),
        ];

        let total = sum_by_prefixes(&accounts, &prefixes(&["13"]), &[], false).unwrap();
        assert_eq!(total, 400);
    }

    #[test]
    fn test_exclude_prefixes() {
        let accounts = vec![
            Account::new("1105", "CAJA", 300),
            Account::new("1110", "BANCOS", 500),
            Account::new("1132", "EFECTIVO RESTRINGIDO", 200),
        ];

        let total =
            sum_by_prefixes(&accounts, &prefixes(&["11"]), &prefixes(&["1132"]), false).unwrap();
        assert_eq!(total, 800);
    }

    #[test]
    fn test_absolute_value() {
        let accounts = vec![
            Account::new("1305", "CLIENTES", 400),
            Account::new("1399", "DETERIORO", -150),
        ];

        let signed = sum_by_prefixes(&accounts, &prefixes(&["13"]), &[], false).unwrap();
        assert_eq!(signed, 250);

        let absolute = sum_by_prefixes(&accounts, &prefixes(&["13"]), &[], true).unwrap();
        assert_eq!(absolute, 550);
    }

    #[test]
    fn test_empty_match_is_zero() {
        let accounts = vec![Account::new("1105", "CAJA", 300)];

        let total = sum_by_prefixes(&accounts, &prefixes(&["27"]), &[], false).unwrap();
        assert_eq!(total, 0);

        let no_includes = sum_by_prefixes(&accounts, &[], &[], false).unwrap();
        assert_eq!(no_includes, 0);
    }

    #[test]
    fn test_multiple_include_prefixes() {
        let accounts = vec![
            Account::new("131801", "ACUEDUCTO", 100),
            Account::new("131802", "ALCANTARILLADO", 200),
            Account::new("131807", "SUBSIDIOS", 50),
        ];

        let total = sum_by_prefixes(
            &accounts,
            &prefixes(&["131801", "131802"]),
            &[],
            false,
        )
        .unwrap();
        assert_eq!(total, 300);
    }
}
