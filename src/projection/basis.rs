//! Day-count conventions for converting an annual rate into a daily one

use serde::{Deserialize, Serialize};

/// Number of days assumed per year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum DayCountBasis {
    /// 360-day commercial year
    #[default]
    Days360,
    /// 365-day calendar year
    Days365,
}

impl DayCountBasis {
    pub fn days_per_year(self) -> u32 {
        match self {
            DayCountBasis::Days360 => 360,
            DayCountBasis::Days365 => 365,
        }
    }
}

impl TryFrom<u32> for DayCountBasis {
    type Error = String;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        match days {
            360 => Ok(DayCountBasis::Days360),
            365 => Ok(DayCountBasis::Days365),
            other => Err(format!("Unsupported day count basis: {}", other)),
        }
    }
}

impl From<DayCountBasis> for u32 {
    fn from(basis: DayCountBasis) -> Self {
        basis.days_per_year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_360() {
        assert_eq!(DayCountBasis::default().days_per_year(), 360);
    }

    #[test]
    fn test_serde_as_number() {
        let basis: DayCountBasis = serde_json::from_str("365").unwrap();
        assert_eq!(basis, DayCountBasis::Days365);
        assert_eq!(serde_json::to_string(&DayCountBasis::Days360).unwrap(), "360");
        assert!(serde_json::from_str::<DayCountBasis>("252").is_err());
    }
}
