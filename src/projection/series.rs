//! Output structures for daily projections

use serde::{Deserialize, Serialize};

/// Balance on a single day of the projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub day: u64,
    pub balance: f64,
    /// balance - principal
    pub interest_earned: f64,
}

/// Day-indexed balances from day 0 through the final day inclusive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectionSeries {
    points: Vec<ProjectionPoint>,
}

impl ProjectionSeries {
    pub(crate) fn from_points(points: Vec<ProjectionPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[ProjectionPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point for a given day, if it lies within the projection
    pub fn get(&self, day: u64) -> Option<&ProjectionPoint> {
        usize::try_from(day).ok().and_then(|idx| self.points.get(idx))
    }

    pub fn last(&self) -> Option<&ProjectionPoint> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectionPoint> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<ProjectionPoint> {
        self.points
    }

    /// Get summary statistics
    pub fn summary(&self) -> SeriesSummary {
        let principal = self.points.first().map(|p| p.balance).unwrap_or(0.0);
        let final_balance = self.points.last().map(|p| p.balance).unwrap_or(0.0);
        let total_interest = self.points.last().map(|p| p.interest_earned).unwrap_or(0.0);

        SeriesSummary {
            days: self.points.last().map(|p| p.day).unwrap_or(0),
            principal,
            final_balance,
            total_interest,
        }
    }
}

impl<'a> IntoIterator for &'a ProjectionSeries {
    type Item = &'a ProjectionPoint;
    type IntoIter = std::slice::Iter<'a, ProjectionPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSummary {
    pub days: u64,
    pub principal: f64,
    pub final_balance: f64,
    pub total_interest: f64,
}
