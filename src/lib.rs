//! Warsim - Attrition battle simulation
//!
//! Two models of combat losses between two opposing sides over discrete
//! rounds: a stochastic model rolling per-unit survival against a death
//! probability derived from enemy firepower, and Lanchester's deterministic
//! square law.

pub mod batch;
pub mod core;
pub mod deterministic;
pub mod output;
pub mod stochastic;
pub mod trajectory;

pub use batch::{run_batch, BatchSummary};
pub use deterministic::{run_deterministic, SquareLaw, SquareLawRun, UpdateOrder};
pub use output::SimulationOutput;
pub use stochastic::{run_stochastic, StochasticEngine, StochasticParams};
pub use trajectory::{Outcome, Trajectory};
