//! Two-tier annual compounding calculator for SOFIPO deposit products

mod money;
mod product;
mod tiered;

pub use money::{round_money, MONEY_EPSILON};
pub use product::{SofipoProduct, DEFAULT_LIMIT_BLOCK_A, DEFAULT_RATE_A, DEFAULT_RATE_B};
pub use tiered::{
    calculate_sofipo_compound_interest, compound_end_amount, SofipoCompoundInput,
    SofipoCompoundOutput, DAYS_PER_YEAR,
};
