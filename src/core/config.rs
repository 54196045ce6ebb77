//! Scenario files
//!
//! A scenario describes one battle in TOML, tagged by `model`:
//!
//! ```toml
//! model = "stochastic"
//! time = 100
//! seed = 42
//!
//! [[red]]
//! size = 500
//! power = 0.02
//!
//! [[blue]]
//! size = 1000
//! power = 0.01
//! coefficient = 0.1
//! ```
//!
//! or
//!
//! ```toml
//! model = "deterministic"
//! r = 500.0
//! b = 1000.0
//! t = 100
//! a = 0.02
//! c = 0.01
//! order = "simultaneous"
//! ```

use std::fs;
use std::path::Path;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::{Force, Side, UnitGroup};
use crate::deterministic::{SquareLaw, UpdateOrder};
use crate::output::SimulationOutput;
use crate::stochastic::StochasticEngine;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StochasticScenario {
    pub time: u32,
    #[serde(default)]
    pub seed: Option<u64>,
    pub red: Vec<UnitGroup>,
    pub blue: Vec<UnitGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeterministicScenario {
    pub r: f64,
    pub b: f64,
    pub t: u32,
    pub a: f64,
    pub c: f64,
    #[serde(default)]
    pub order: UpdateOrder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum Scenario {
    Stochastic(StochasticScenario),
    Deterministic(DeterministicScenario),
}

impl Scenario {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(content)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Check coefficients and lethality before anything is simulated
    pub fn validate(&self) -> Result<()> {
        match self {
            Scenario::Stochastic(s) => {
                Force::new(s.red.clone()).validate(Side::Red)?;
                Force::new(s.blue.clone()).validate(Side::Blue)
            }
            Scenario::Deterministic(d) => SquareLaw::new(d.a, d.c).map(|_| ()),
        }
    }

    /// Run the scenario.
    ///
    /// Stochastic seed precedence: `seed` argument, then the file's seed,
    /// then a fresh random seed.
    pub fn run(&self, seed: Option<u64>) -> Result<SimulationOutput> {
        match self {
            Scenario::Stochastic(s) => {
                let seed = seed.or(s.seed).unwrap_or_else(rand::random);
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let engine =
                    StochasticEngine::new(Force::new(s.red.clone()), Force::new(s.blue.clone()))?;
                let trajectory = engine.run(s.time, &mut rng)?;
                Ok(SimulationOutput::stochastic(trajectory, seed))
            }
            Scenario::Deterministic(d) => {
                let run = SquareLaw::new(d.a, d.c)?
                    .with_order(d.order)
                    .run(d.r, d.b, d.t)?;
                Ok(SimulationOutput::deterministic(run.trajectory))
            }
        }
    }
}

/// Load and validate a scenario from a TOML file
pub fn load_scenario(path: impl AsRef<Path>) -> Result<Scenario> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    tracing::debug!("Loaded scenario from {:?}", path);
    Scenario::from_toml_str(&contents)
}
