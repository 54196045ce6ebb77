//! Lanchester's square law, explicit-Euler discrete steps

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, WarsimError};
use crate::trajectory::{Outcome, Trajectory};

/// Which strengths the blue update reads within a round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOrder {
    /// `b` is reduced by the already-updated `r`
    #[default]
    Sequential,
    /// Both sides are reduced from the previous round's strengths
    Simultaneous,
}

/// Fixed attrition coefficients for both sides
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SquareLaw {
    /// Lethality of each red unit against blue
    pub a: f64,
    /// Lethality of each blue unit against red
    pub c: f64,
    #[serde(default)]
    pub order: UpdateOrder,
}

/// Result of a square-law run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquareLawRun {
    pub r: f64,
    pub b: f64,
    pub trajectory: Trajectory<f64>,
}

impl SquareLawRun {
    pub fn final_strengths(&self) -> (f64, f64) {
        (self.r, self.b)
    }

    pub fn outcome(&self) -> Outcome {
        self.trajectory.outcome()
    }
}

fn check_non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(WarsimError::InvalidParameter {
            name: name.to_string(),
            value,
        })
    }
}

impl SquareLaw {
    pub fn new(a: f64, c: f64) -> Result<Self> {
        check_non_negative("a", a)?;
        check_non_negative("c", c)?;
        Ok(Self {
            a,
            c,
            order: UpdateOrder::default(),
        })
    }

    pub fn with_order(mut self, order: UpdateOrder) -> Self {
        self.order = order;
        self
    }

    /// One round of losses. Strengths never drop below zero, and a side
    /// already driven to zero inflicts nothing.
    pub fn step(&self, r: f64, b: f64) -> (f64, f64) {
        let r_new = (r - self.c * b).max(0.0);
        let firing_r = match self.order {
            UpdateOrder::Sequential => r_new,
            UpdateOrder::Simultaneous => r,
        };
        let b_new = (b - self.a * firing_r).max(0.0);
        (r_new, b_new)
    }

    /// Run up to `t` rounds, stopping as soon as either side reaches zero
    /// (a side that starts at zero ends the run at round 0)
    pub fn run(&self, r: f64, b: f64, t: u32) -> Result<SquareLawRun> {
        check_non_negative("r", r)?;
        check_non_negative("b", b)?;

        let mut r = r;
        let mut b = b;
        let mut trajectory = Trajectory::new(r, b);

        for _ in 0..t {
            if r <= 0.0 || b <= 0.0 {
                break;
            }
            tracing::debug!("{} vs. {}", r.round(), b.round());
            (r, b) = self.step(r, b);
            trajectory.record(r, b);
        }

        tracing::info!(
            "Square law battle ended after {} rounds: r = {:.2}, b = {:.2}",
            trajectory.rounds_fought(),
            r,
            b
        );

        Ok(SquareLawRun { r, b, trajectory })
    }
}
