//! Daily compounding projector

mod basis;
mod daily;
mod series;

pub use basis::DayCountBasis;
pub use daily::{daily_growth_factor, project_compound_interest, DailyCompounding, ProjectionInput};
pub use series::{ProjectionPoint, ProjectionSeries, SeriesSummary};
