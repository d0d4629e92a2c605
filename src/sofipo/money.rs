//! Cent rounding for monetary results

/// Nudge added before rounding so values like `x.xx4999999` round up
pub const MONEY_EPSILON: f64 = 1e-9;

/// Round to 2 decimal places, half-up (ties toward positive infinity)
pub fn round_money(value: f64) -> f64 {
    let scaled = (value + MONEY_EPSILON) * 100.0;
    let mut cents = scaled.round();
    // f64::round sends negative ties away from zero
    if scaled - cents == 0.5 {
        cents += 1.0;
    }
    cents / 100.0
}
