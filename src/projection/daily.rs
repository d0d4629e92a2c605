//! Day-by-day compounding of a principal at an annual rate

use serde::{Deserialize, Serialize};

use super::{DayCountBasis, ProjectionPoint, ProjectionSeries};
use crate::error::{check_days, check_principal, InvalidArgument, Result};

/// Input for a daily compounding projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInput {
    /// Starting balance, 0 when omitted
    #[serde(default)]
    pub principal: Option<f64>,

    /// Annual effective rate as a decimal (0.15 for 15%)
    pub annual_rate: f64,

    /// Number of days to project
    pub days: i64,

    /// 360 when omitted
    #[serde(default)]
    pub day_count_basis: Option<DayCountBasis>,
}

impl ProjectionInput {
    pub fn new(principal: f64, annual_rate: f64, days: i64) -> Self {
        Self {
            principal: Some(principal),
            annual_rate,
            days,
            day_count_basis: None,
        }
    }

    pub fn with_basis(mut self, basis: DayCountBasis) -> Self {
        self.day_count_basis = Some(basis);
        self
    }
}

/// Per-day growth factor such that `factor^basis == 1 + annual_rate`
///
/// Assumes `annual_rate > -1`.
pub fn daily_growth_factor(annual_rate: f64, basis: DayCountBasis) -> f64 {
    (1.0 + annual_rate).powf(1.0 / basis.days_per_year() as f64)
}

/// Lazily compounds a balance one day at a time
///
/// Each step multiplies the running balance by the daily factor, so rounding
/// accumulates exactly as repeated multiplication would.
#[derive(Debug, Clone)]
pub struct DailyCompounding {
    principal: f64,
    factor: f64,
    balance: f64,
    next_day: u64,
    last_day: u64,
}

impl DailyCompounding {
    pub fn new(principal: f64, factor: f64, days: u64) -> Self {
        Self {
            principal,
            factor,
            balance: principal,
            next_day: 0,
            last_day: days,
        }
    }

    fn remaining(&self) -> u64 {
        self.last_day.saturating_add(1).saturating_sub(self.next_day)
    }
}

impl Iterator for DailyCompounding {
    type Item = ProjectionPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_day > self.last_day {
            return None;
        }

        let day = self.next_day;
        if day > 0 {
            self.balance *= self.factor;
        }
        self.next_day += 1;

        Some(ProjectionPoint {
            day,
            balance: self.balance,
            interest_earned: self.balance - self.principal,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Project daily balances from day 0 through `input.days` inclusive
///
/// Fails when `days` or `principal` is negative, or when `days + 1` points
/// cannot be allocated.
pub fn project_compound_interest(input: &ProjectionInput) -> Result<ProjectionSeries> {
    let principal = input.principal.unwrap_or(0.0);
    let basis = input.day_count_basis.unwrap_or_default();

    check_days(input.days)?;
    check_principal(principal)?;

    let factor = daily_growth_factor(input.annual_rate, basis);
    log::debug!(
        "Projecting {} days at {} annual ({}-day basis), daily factor {}",
        input.days,
        input.annual_rate,
        basis.days_per_year(),
        factor
    );

    let len = usize::try_from(input.days)
        .ok()
        .and_then(|days| days.checked_add(1))
        .ok_or(InvalidArgument::DaysOutOfRange)?;
    let mut points = Vec::new();
    points
        .try_reserve_exact(len)
        .map_err(|_| InvalidArgument::DaysOutOfRange)?;
    points.extend(DailyCompounding::new(principal, factor, input.days as u64));

    Ok(ProjectionSeries::from_points(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn input(principal: f64, days: i64) -> ProjectionInput {
        ProjectionInput::new(principal, 0.15, days).with_basis(DayCountBasis::Days360)
    }

    #[test]
    fn test_growth_factor_reproduces_annual_rate() {
        for &rate in &[0.0, 0.01, 0.15, 0.5, -0.2] {
            let factor = daily_growth_factor(rate, DayCountBasis::Days360);
            assert_abs_diff_eq!(factor.powi(360), 1.0 + rate, epsilon = 1e-10);
        }

        let factor = daily_growth_factor(0.15, DayCountBasis::Days365);
        assert_abs_diff_eq!(factor.powi(365), 1.15, epsilon = 1e-10);
    }

    #[test]
    fn test_series_covers_day_zero_through_n() {
        let series = project_compound_interest(&input(1000.0, 2)).unwrap();
        let days: Vec<u64> = series.iter().map(|p| p.day).collect();
        assert_eq!(days, vec![0, 1, 2]);
    }

    #[test]
    fn test_day_zero_is_principal() {
        let series = project_compound_interest(&input(1000.0, 0)).unwrap();
        assert_eq!(series.len(), 1);

        let p0 = series.get(0).unwrap();
        assert_eq!(p0.balance, 1000.0);
        assert_eq!(p0.interest_earned, 0.0);
    }

    #[test]
    fn test_balances_strictly_increase_for_positive_rate() {
        let series = project_compound_interest(&input(20000.0, 30)).unwrap();
        assert_eq!(series.len(), 31);

        for pair in series.points().windows(2) {
            assert!(pair[1].balance > pair[0].balance, "day {} did not grow", pair[1].day);
        }
    }

    #[test]
    fn test_final_balance_close_to_closed_form() {
        let series = project_compound_interest(&input(20000.0, 360)).unwrap();
        let last = series.last().unwrap();
        assert_abs_diff_eq!(last.balance, 23000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(last.interest_earned, 3000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_negative_days_rejected() {
        let err = project_compound_interest(&input(100.0, -1)).unwrap_err();
        assert_eq!(err.reason(), InvalidArgument::NegativeDays);
        assert!(err.to_string().to_lowercase().contains("days must be >= 0"));
    }

    #[test]
    fn test_negative_principal_rejected() {
        let err = project_compound_interest(&input(-5.0, 10)).unwrap_err();
        assert_eq!(err.to_string(), "principal must be >= 0");
    }

    #[test]
    fn test_unallocatable_day_count_is_an_error() {
        let err = project_compound_interest(&input(1.0, i64::MAX)).unwrap_err();
        assert_eq!(err.reason(), InvalidArgument::DaysOutOfRange);
    }

    #[test]
    fn test_missing_principal_defaults_to_zero() {
        let input = ProjectionInput {
            principal: None,
            annual_rate: 0.15,
            days: 10,
            day_count_basis: None,
        };
        let series = project_compound_interest(&input).unwrap();

        assert_eq!(series.len(), 11);
        assert!(series.iter().all(|p| p.balance == 0.0 && p.interest_earned == 0.0));
    }

    #[test]
    fn test_iterator_is_exact_size() {
        let mut iter = DailyCompounding::new(100.0, 1.001, 4);
        assert_eq!(iter.size_hint(), (5, Some(5)));
        iter.next();
        assert_eq!(iter.size_hint(), (4, Some(4)));
        assert_eq!(iter.count(), 4);
    }

    #[test]
    fn test_input_from_json_uses_defaults() {
        let input: ProjectionInput =
            serde_json::from_str(r#"{"annualRate":0.15,"days":3}"#).unwrap();
        assert_eq!(input.principal, None);
        assert_eq!(input.day_count_basis, None);
        assert_eq!(project_compound_interest(&input).unwrap().len(), 4);
    }
}
