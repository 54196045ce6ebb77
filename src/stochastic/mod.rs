//! Stochastic attrition model
//!
//! Uses amount and power of each unit group on both sides to generate a
//! probability of death for each unit, then rolls per unit (discounted by the
//! group's coefficient) to determine the outcome. Repeats per time unit, or
//! until one side has no units left.

pub mod casualty;
pub mod engine;
pub mod probability;

pub use casualty::{effective_probability, resolve_casualties};
pub use engine::{EngineState, RoundReport, StochasticEngine};
pub use probability::death_probability;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::{Force, UnitGroup};
use crate::trajectory::Trajectory;

/// Two-groups-per-side battle parameters.
///
/// Only the first group of each side and the time horizon are required;
/// everything else defaults to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StochasticParams {
    pub size_r1: u32,
    pub power_r1: f64,
    pub size_b1: u32,
    pub power_b1: f64,
    pub time: u32,
    pub coeff_r1: f64,
    pub coeff_b1: f64,
    pub size_r2: u32,
    pub power_r2: f64,
    pub coeff_r2: f64,
    pub size_b2: u32,
    pub power_b2: f64,
    pub coeff_b2: f64,
}

impl StochasticParams {
    pub fn new(size_r1: u32, power_r1: f64, size_b1: u32, power_b1: f64, time: u32) -> Self {
        Self {
            size_r1,
            power_r1,
            size_b1,
            power_b1,
            time,
            ..Self::default()
        }
    }

    /// Red side as an ordered group collection (group 1, group 2)
    pub fn red(&self) -> Force {
        Force::new(vec![
            UnitGroup::new(self.size_r1, self.power_r1).with_coefficient(self.coeff_r1),
            UnitGroup::new(self.size_r2, self.power_r2).with_coefficient(self.coeff_r2),
        ])
    }

    /// Blue side as an ordered group collection (group 1, group 2)
    pub fn blue(&self) -> Force {
        Force::new(vec![
            UnitGroup::new(self.size_b1, self.power_b1).with_coefficient(self.coeff_b1),
            UnitGroup::new(self.size_b2, self.power_b2).with_coefficient(self.coeff_b2),
        ])
    }
}

/// Simulate a battle of two sides with up to two unit groups each.
///
/// Fails with a configuration error before any round is fought if any
/// coefficient exceeds 1, and with an invalid-parameter error if any power
/// is negative or not finite.
pub fn run_stochastic<R: Rng + ?Sized>(params: &StochasticParams, rng: &mut R) -> Result<Trajectory<u64>> {
    tracing::info!(
        "Stochastic battle: r = {} + {}, b = {} + {}, up to {} rounds",
        params.size_r1,
        params.size_r2,
        params.size_b1,
        params.size_b2,
        params.time
    );

    StochasticEngine::new(params.red(), params.blue())?.run(params.time, rng)
}
