//! Simulation output and serialization

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::trajectory::{Outcome, Trajectory};

/// Trajectory of whichever model produced the run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", content = "trajectory", rename_all = "snake_case")]
pub enum ModelTrajectory {
    Stochastic(Trajectory<u64>),
    Deterministic(Trajectory<f64>),
}

/// Complete result of one battle
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutput {
    pub run: ModelTrajectory,
    pub outcome: Outcome,
    pub rounds_fought: usize,
    /// Seed of the random source, stochastic runs only
    pub seed: Option<u64>,
}

impl SimulationOutput {
    pub fn stochastic(trajectory: Trajectory<u64>, seed: u64) -> Self {
        Self {
            outcome: trajectory.outcome(),
            rounds_fought: trajectory.rounds_fought(),
            run: ModelTrajectory::Stochastic(trajectory),
            seed: Some(seed),
        }
    }

    pub fn deterministic(trajectory: Trajectory<f64>) -> Self {
        Self {
            outcome: trajectory.outcome(),
            rounds_fought: trajectory.rounds_fought(),
            run: ModelTrajectory::Deterministic(trajectory),
            seed: None,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        let (red, blue) = match &self.run {
            ModelTrajectory::Stochastic(t) => (format!("{:?}", t.red), format!("{:?}", t.blue)),
            ModelTrajectory::Deterministic(t) => (format_reals(&t.red), format_reals(&t.blue)),
        };
        let seed = self
            .seed
            .map(|s| format!(" (seed {})", s))
            .unwrap_or_default();

        let result = match self.outcome.victor() {
            Some(side) => format!("Side {} wins", side.label()),
            None => format!("{:?}", self.outcome),
        };

        format!(
            "Size of r per time unit: {}\nSize of b per time unit: {}\n{} after {} rounds{}",
            red, blue, result, self.rounds_fought, seed
        )
    }
}

fn format_reals(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| format!("{:.2}", v)).collect();
    format!("[{}]", parts.join(", "))
}
