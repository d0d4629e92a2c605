//! Compound Interest - projections for daily compounding and two-tier SOFIPO deposits
//!
//! This library provides:
//! - Day-by-day compounding of a principal under a 360- or 365-day basis
//! - Two-tier (block A / block B) returns with cent-rounded results
//! - Parallel batch evaluation of many inputs

pub mod error;
pub mod projection;
pub mod sofipo;
pub mod scenario;

// Re-export commonly used types
pub use error::{InterestError, InvalidArgument, Result};
pub use projection::{
    daily_growth_factor, project_compound_interest, DayCountBasis, ProjectionInput,
    ProjectionPoint, ProjectionSeries,
};
pub use sofipo::{
    calculate_sofipo_compound_interest, compound_end_amount, SofipoCompoundInput,
    SofipoCompoundOutput, SofipoProduct,
};
pub use scenario::ScenarioRunner;
