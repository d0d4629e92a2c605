//! Two-tier product terms: block A ceiling and the rate of each block

use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::SofipoCompoundInput;

/// Default ceiling of block A
pub const DEFAULT_LIMIT_BLOCK_A: f64 = 10_000.0;
/// Default annual percentage for block A
pub const DEFAULT_RATE_A: f64 = 16.0;
/// Default annual percentage for block B
pub const DEFAULT_RATE_B: f64 = 7.25;

/// Terms of a two-tier deposit product
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SofipoProduct {
    pub limit_block_a: f64,
    pub rate_a: f64,
    pub rate_b: f64,
}

impl Default for SofipoProduct {
    fn default() -> Self {
        Self {
            limit_block_a: DEFAULT_LIMIT_BLOCK_A,
            rate_a: DEFAULT_RATE_A,
            rate_b: DEFAULT_RATE_B,
        }
    }
}

fn env_f64(key: &str) -> Option<f64> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

impl SofipoProduct {
    /// Load product terms from a JSON file; missing fields take the defaults
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open product file {}", path.display()))?;
        let product = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse product file {}", path.display()))?;
        Ok(product)
    }

    /// Defaults overridden by SOFIPO_LIMIT_BLOCK_A, SOFIPO_RATE_A and SOFIPO_RATE_B
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply any SOFIPO_* environment variables on top of these terms
    pub fn with_env_overrides(self) -> Self {
        Self {
            limit_block_a: env_f64("SOFIPO_LIMIT_BLOCK_A").unwrap_or(self.limit_block_a),
            rate_a: env_f64("SOFIPO_RATE_A").unwrap_or(self.rate_a),
            rate_b: env_f64("SOFIPO_RATE_B").unwrap_or(self.rate_b),
        }
    }

    /// Build a calculator input for an investment held `days` days
    pub fn input(&self, total_investment: f64, days: i64) -> SofipoCompoundInput {
        SofipoCompoundInput {
            total_investment,
            limit_block_a: self.limit_block_a,
            rate_a: self.rate_a,
            rate_b: self.rate_b,
            days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_terms() {
        let product = SofipoProduct::default();
        let input = product.input(15000.0, 30);

        assert_eq!(input.limit_block_a, 10000.0);
        assert_eq!(input.rate_a, 16.0);
        assert_eq!(input.rate_b, 7.25);
        assert_eq!(input.days, 30);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let product: SofipoProduct = serde_json::from_str(r#"{"rateB": 8.0}"#).unwrap();
        assert_eq!(product.limit_block_a, DEFAULT_LIMIT_BLOCK_A);
        assert_eq!(product.rate_a, DEFAULT_RATE_A);
        assert_eq!(product.rate_b, 8.0);
    }

    #[test]
    fn test_from_json_path() {
        let path = env::temp_dir().join(format!("sofipo_product_{}.json", std::process::id()));
        let mut file = File::create(&path).unwrap();
        writeln!(file, r#"{{"limitBlockA": 25000, "rateA": 15, "rateB": 6.5}}"#).unwrap();
        drop(file);

        let product = SofipoProduct::from_json_path(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(product, SofipoProduct { limit_block_a: 25000.0, rate_a: 15.0, rate_b: 6.5 });
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = SofipoProduct::from_json_path("does/not/exist.json").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }

    #[test]
    fn test_env_overrides() {
        // Only this test touches SOFIPO_RATE_A
        env::set_var("SOFIPO_RATE_A", "14.5");
        let product = SofipoProduct::from_env();
        env::remove_var("SOFIPO_RATE_A");

        assert_eq!(product.rate_a, 14.5);
    }
}
