//! Deterministic attrition model
//!
//! Simulates the course of a battle after Lanchester's square law: each
//! side's losses per round are proportional to the opponent's current
//! strength and a fixed lethality constant.

pub mod square_law;

pub use square_law::{SquareLaw, SquareLawRun, UpdateOrder};

use crate::core::error::Result;

/// Square-law battle with the default (sequential) update order.
///
/// `a` is red's lethality against blue, `c` is blue's lethality against red.
pub fn run_deterministic(r: f64, b: f64, t: u32, a: f64, c: f64) -> Result<SquareLawRun> {
    SquareLaw::new(a, c)?.run(r, b, t)
}
