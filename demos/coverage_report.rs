use anyhow::Result;
use puc_report_builder::{terminal_flags, validate_rule_coverage, Account, Dialect};

fn main() -> Result<()> {
    // A snapshot with the three things the diagnostics exist to surface: an
    // account no rule maps (8105, cuentas de orden), accounts the PPE note
    // re-slices (1605), and a stale stored leaf flag on a subtotal row.
    let mut accounts = vec![
        Account::new("11", "EFECTIVO Y EQUIVALENTES", 5_000_000),
        Account::new("1105", "CAJA", 2_000_000),
        Account::new("1110", "DEPOSITOS", 3_000_000),
        Account::new("1605", "TERRENOS", 4_000_000),
        Account::new("2511", "BENEFICIOS A EMPLEADOS", 1_500_000),
        Account::new("8105", "BIENES ENTREGADOS EN CUSTODIA", 750_000),
    ];

    let flags = terminal_flags(&accounts)?;
    for (account, flag) in accounts.iter_mut().zip(flags) {
        account.declared_leaf = flag;
    }
    // Corrupt one hint the way a stale upload would.
    accounts[0].declared_leaf = true;

    let registry = Dialect::R414.registry();
    let report = validate_rule_coverage(&accounts, &registry)?;

    println!("Coverage against registry '{}':", registry.id);
    println!("  terminal accounts: {}", report.terminal_count);
    println!("  matched by one rule: {}", report.matched_once);

    for overlap in &report.overlapping {
        println!(
            "  OVERLAP {} -> {}",
            overlap.code,
            overlap.concepts.join(", ")
        );
    }
    for code in &report.unmapped_codes {
        println!("  UNMAPPED {}", code);
    }
    for code in &report.leaf_flag_disagreements {
        println!("  STALE LEAF FLAG {}", code);
    }

    println!("\nAs JSON:\n{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
