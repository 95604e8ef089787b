//! Largest Remainder distribution of account values across services.
//!
//! Each account is split independently: integer floors by truncation first,
//! then the leftover units go to the services with the largest fractional
//! remainders, ties broken by declaration order. The parts always sum back
//! to the whole exactly, in integer arithmetic, including for negative
//! (contra) account values.

use crate::error::{PucReportError, Result};
use crate::schema::{Account, ServiceAllocation, ServiceShare};
use log::debug;

const PERCENTAGE_TOLERANCE: f64 = 0.01;

/// Rejects share sets whose percentages do not sum to 100 (within 0.01),
/// and duplicate service names, which would silently merge matrix columns.
pub fn validate_service_shares(services: &[ServiceShare]) -> Result<()> {
    let total: f64 = services.iter().map(|s| s.percentage).sum();

    if (total - 100.0).abs() > PERCENTAGE_TOLERANCE {
        return Err(PucReportError::InvalidDistribution { total });
    }

    for (i, service) in services.iter().enumerate() {
        if services[..i].iter().any(|s| s.name == service.name) {
            return Err(PucReportError::ValidationError {
                scope: "services".to_string(),
                details: format!("duplicate service name '{}'", service.name),
            });
        }
    }

    Ok(())
}

/// Splits every account across the services. Fails fast on an invalid share
/// set before any distribution work begins.
pub fn distribute(
    accounts: &[Account],
    services: &[ServiceShare],
) -> Result<Vec<ServiceAllocation>> {
    validate_service_shares(services)?;

    let mut allocations = Vec::with_capacity(accounts.len() * services.len());

    for account in accounts {
        let values = distribute_value(account.value, services);

        for (service, value) in services.iter().zip(values) {
            allocations.push(ServiceAllocation {
                service: service.name.clone(),
                code: account.code.clone(),
                name: account.name.clone(),
                value,
            });
        }
    }

    debug!(
        "distributed {} accounts across {} services ({} allocation rows)",
        accounts.len(),
        services.len(),
        allocations.len()
    );

    Ok(allocations)
}

/// Largest Remainder split of a single value, in service declaration order.
///
/// Floors truncate toward zero, so a negative value leaves a negative
/// shortfall; the correction units then carry the sign of the shortfall and
/// go to the largest remainders by magnitude in that direction.
fn distribute_value(value: i64, services: &[ServiceShare]) -> Vec<i64> {
    let mut floors = Vec::with_capacity(services.len());
    let mut remainders = Vec::with_capacity(services.len());

    for service in services {
        let raw = value as f64 * service.percentage / 100.0;
        let floor = raw.trunc();
        floors.push(floor as i64);
        remainders.push(raw - floor);
    }

    let assigned: i64 = floors.iter().sum();
    let shortfall = value - assigned;

    if shortfall != 0 {
        let mut order: Vec<usize> = (0..services.len()).collect();
        if shortfall > 0 {
            order.sort_by(|&a, &b| remainders[b].total_cmp(&remainders[a]).then(a.cmp(&b)));
        } else {
            order.sort_by(|&a, &b| remainders[a].total_cmp(&remainders[b]).then(a.cmp(&b)));
        }

        let step = shortfall.signum();
        for i in 0..shortfall.unsigned_abs() as usize {
            floors[order[i % order.len()]] += step;
        }
    }

    floors
}
