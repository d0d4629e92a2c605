//! Scenario runner for batch calculations
//!
//! Holds one set of product terms and evaluates many investments against it.
//! Batches run in parallel; every input gets its own result, in input order.

use rayon::prelude::*;

use crate::error::Result;
use crate::projection::{project_compound_interest, ProjectionInput, ProjectionSeries};
use crate::sofipo::{
    calculate_sofipo_compound_interest, SofipoCompoundInput, SofipoCompoundOutput, SofipoProduct,
};

/// Batch runner for two-tier calculations and daily projections
///
/// # Example
/// ```
/// use compound_interest::ScenarioRunner;
///
/// let runner = ScenarioRunner::new();
/// let results = runner.run_totals(&[15_000.0, 25_000.0, 50_000.0], 30);
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    product: SofipoProduct,
}

impl ScenarioRunner {
    /// Create runner with the default product terms
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(product: SofipoProduct) -> Self {
        Self { product }
    }

    /// Run a single investment through the runner's product
    pub fn run(&self, total_investment: f64, days: i64) -> Result<SofipoCompoundOutput> {
        calculate_sofipo_compound_interest(&self.product.input(total_investment, days))
    }

    /// Run several investment totals for the same term
    pub fn run_totals(&self, totals: &[f64], days: i64) -> Vec<Result<SofipoCompoundOutput>> {
        totals
            .par_iter()
            .map(|&total| self.run(total, days))
            .collect()
    }

    /// Run fully specified two-tier inputs; the runner's product is not applied
    pub fn run_batch(&self, inputs: &[SofipoCompoundInput]) -> Vec<Result<SofipoCompoundOutput>> {
        log::debug!("Running {} two-tier calculations", inputs.len());
        inputs
            .par_iter()
            .map(calculate_sofipo_compound_interest)
            .collect()
    }

    /// Project several daily compounding inputs
    pub fn project_batch(&self, inputs: &[ProjectionInput]) -> Vec<Result<ProjectionSeries>> {
        log::debug!("Running {} projections", inputs.len());
        inputs
            .par_iter()
            .map(project_compound_interest)
            .collect()
    }

    pub fn product(&self) -> &SofipoProduct {
        &self.product
    }

    pub fn product_mut(&mut self) -> &mut SofipoProduct {
        &mut self.product
    }
}
