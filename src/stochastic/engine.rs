//! Stochastic round loop
//!
//! Both sides fire simultaneously: the death probability for each side is
//! computed from the state at the start of the round, then every unit of
//! every group rolls for survival.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::{Force, Side};
use crate::stochastic::casualty::resolve_casualties;
use crate::stochastic::probability::death_probability;
use crate::trajectory::Trajectory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Running,
    Terminated,
}

/// What happened during one round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: u32,
    /// Death probability applied to red units, before coefficients
    pub prob_red: f64,
    /// Death probability applied to blue units, before coefficients
    pub prob_blue: f64,
    pub red_losses: u64,
    pub blue_losses: u64,
    pub red: u64,
    pub blue: u64,
}

#[derive(Debug, Clone)]
pub struct StochasticEngine {
    red: Force,
    blue: Force,
    round: u32,
    state: EngineState,
}

impl StochasticEngine {
    /// Validate both forces and create an engine at round 0.
    ///
    /// A side that is already empty ends the battle before any round is fought.
    pub fn new(red: Force, blue: Force) -> Result<Self> {
        red.validate(Side::Red)?;
        blue.validate(Side::Blue)?;

        let state = if red.is_eliminated() || blue.is_eliminated() {
            EngineState::Terminated
        } else {
            EngineState::Running
        };

        Ok(Self {
            red,
            blue,
            round: 0,
            state,
        })
    }

    pub fn force(&self, side: Side) -> &Force {
        match side {
            Side::Red => &self.red,
            Side::Blue => &self.blue,
        }
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn is_terminated(&self) -> bool {
        self.state == EngineState::Terminated
    }

    /// Fight one round. Returns `None` once the engine has terminated.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Option<RoundReport>> {
        if self.is_terminated() {
            return Ok(None);
        }

        let r = self.red.strength();
        let b = self.blue.strength();

        // An eliminated side takes no fire
        let prob_red = if r > 0 {
            death_probability(r, &self.blue.groups)?
        } else {
            0.0
        };
        let prob_blue = if b > 0 {
            death_probability(b, &self.red.groups)?
        } else {
            0.0
        };

        for group in self.red.groups.iter_mut() {
            group.size = resolve_casualties(group.size, group.coefficient, prob_red, rng);
        }
        for group in self.blue.groups.iter_mut() {
            group.size = resolve_casualties(group.size, group.coefficient, prob_blue, rng);
        }

        self.round += 1;
        let red = self.red.strength();
        let blue = self.blue.strength();

        let report = RoundReport {
            round: self.round,
            prob_red,
            prob_blue,
            red_losses: r - red,
            blue_losses: b - blue,
            red,
            blue,
        };

        tracing::debug!(
            "Round {}: red {} (-{}), blue {} (-{})",
            report.round,
            red,
            report.red_losses,
            blue,
            report.blue_losses
        );

        if red == 0 || blue == 0 {
            self.state = EngineState::Terminated;
        }

        Ok(Some(report))
    }

    /// Fight up to `time` rounds and return the strength trajectory
    pub fn run<R: Rng + ?Sized>(mut self, time: u32, rng: &mut R) -> Result<Trajectory<u64>> {
        let mut trajectory = Trajectory::new(self.red.strength(), self.blue.strength());

        while self.round < time {
            match self.step(rng)? {
                Some(report) => trajectory.record(report.red, report.blue),
                None => break,
            }
        }

        tracing::info!(
            "Stochastic battle ended after {} rounds: {:?}",
            trajectory.rounds_fought(),
            trajectory.outcome()
        );

        Ok(trajectory)
    }
}
