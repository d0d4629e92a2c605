//! Two-tier (block A / block B) daily compounding over a 365-day year
//!
//! Funds up to `limit_block_a` earn `rate_a`; anything above earns `rate_b`.
//! Each block compounds independently and every monetary output is rounded
//! to cents.

use serde::{Deserialize, Serialize};

use super::money::round_money;
use crate::error::{check_days, check_principal, Result};

/// Days per year for the two-tier product
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Input for a two-tier calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SofipoCompoundInput {
    pub total_investment: f64,
    /// Ceiling of block A
    pub limit_block_a: f64,
    /// Annual percentage for block A (16.0 means 16%)
    pub rate_a: f64,
    /// Annual percentage for block B
    pub rate_b: f64,
    pub days: i64,
}

/// Rounded results of a two-tier calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SofipoCompoundOutput {
    pub principal_a: f64,
    pub principal_b: f64,
    pub gain_a: f64,
    pub gain_b: f64,
    pub gain_total: f64,
    pub end_a: f64,
    pub end_b: f64,
    pub end_total: f64,
}

impl SofipoCompoundOutput {
    /// Total gain relative to total principal, 0 when nothing is invested
    pub fn effective_rate(&self) -> f64 {
        let principal = self.principal_a + self.principal_b;
        if principal <= 0.0 {
            return 0.0;
        }
        self.gain_total / principal
    }
}

/// Ending amount of `principal` compounded daily for `days` days
///
/// Computed as `principal * exp(days * ln(1 + r/365))` via `ln_1p`, which keeps
/// precision when the daily rate is tiny.
pub fn compound_end_amount(principal: f64, annual_rate_percent: f64, days: i64) -> Result<f64> {
    let r = annual_rate_percent / 100.0;

    check_days(days)?;
    check_principal(principal)?;

    Ok(principal * (days as f64 * (r / DAYS_PER_YEAR).ln_1p()).exp())
}

fn finite_or_zero(name: &str, value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        log::warn!("Non-finite {} ({}) treated as 0", name, value);
        0.0
    }
}

/// Split an investment into two blocks and compound each at its own rate
///
/// Non-finite `total_investment` or `limit_block_a` are treated as 0. A
/// negative total still produces a negative block A, which fails with
/// "principal must be >= 0".
pub fn calculate_sofipo_compound_interest(
    input: &SofipoCompoundInput,
) -> Result<SofipoCompoundOutput> {
    let total_investment = finite_or_zero("total investment", input.total_investment);
    let limit_block_a = finite_or_zero("block A limit", input.limit_block_a);

    let principal_a = total_investment.min(limit_block_a);
    let principal_b = (total_investment - limit_block_a).max(0.0);
    log::debug!(
        "Tier split of {}: block A {} at {}%, block B {} at {}% for {} days",
        total_investment,
        principal_a,
        input.rate_a,
        principal_b,
        input.rate_b,
        input.days
    );

    let end_a = compound_end_amount(principal_a, input.rate_a, input.days)?;
    let end_b = compound_end_amount(principal_b, input.rate_b, input.days)?;

    let gain_a = end_a - principal_a;
    let gain_b = end_b - principal_b;

    let end_total = end_a + end_b;
    let gain_total = gain_a + gain_b;

    Ok(SofipoCompoundOutput {
        principal_a: round_money(principal_a),
        principal_b: round_money(principal_b),
        gain_a: round_money(gain_a),
        gain_b: round_money(gain_b),
        gain_total: round_money(gain_total),
        end_a: round_money(end_a),
        end_b: round_money(end_b),
        end_total: round_money(end_total),
    })
}
