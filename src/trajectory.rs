//! Per-round strength snapshots and battle outcome classification

use serde::{Deserialize, Serialize};

use crate::core::types::Side;

/// How a finished battle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    RedVictory,
    BlueVictory,
    /// Both sides fell to zero in the same round
    MutualElimination,
    /// Round budget ran out with both sides still standing
    Exhausted,
}

impl Outcome {
    pub fn victor(&self) -> Option<Side> {
        match self {
            Outcome::RedVictory => Some(Side::Red),
            Outcome::BlueVictory => Some(Side::Blue),
            Outcome::MutualElimination | Outcome::Exhausted => None,
        }
    }

    /// Did at least one side get wiped out?
    pub fn is_decisive(&self) -> bool {
        !matches!(self, Outcome::Exhausted)
    }
}

/// Total strength of both sides per round, round 0 included.
///
/// `T` is `u64` for the stochastic model and `f64` for the square law.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory<T> {
    pub red: Vec<T>,
    pub blue: Vec<T>,
}

impl<T> Trajectory<T>
where
    T: Copy + Default + PartialOrd,
{
    /// Start a trajectory from the initial (round 0) strengths
    pub fn new(red: T, blue: T) -> Self {
        Self {
            red: vec![red],
            blue: vec![blue],
        }
    }

    pub fn record(&mut self, red: T, blue: T) {
        self.red.push(red);
        self.blue.push(blue);
    }

    /// Number of snapshots, including round 0
    pub fn len(&self) -> usize {
        self.red.len()
    }

    pub fn is_empty(&self) -> bool {
        self.red.is_empty()
    }

    pub fn rounds_fought(&self) -> usize {
        self.len().saturating_sub(1)
    }

    /// Strengths after the last recorded round
    pub fn last(&self) -> Option<(T, T)> {
        Some((*self.red.last()?, *self.blue.last()?))
    }

    pub fn iter(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.red.iter().copied().zip(self.blue.iter().copied())
    }

    pub fn outcome(&self) -> Outcome {
        let Some((red, blue)) = self.last() else {
            return Outcome::Exhausted;
        };
        let zero = T::default();
        match (red <= zero, blue <= zero) {
            (true, true) => Outcome::MutualElimination,
            (true, false) => Outcome::BlueVictory,
            (false, true) => Outcome::RedVictory,
            (false, false) => Outcome::Exhausted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_len() {
        let mut trajectory = Trajectory::new(10u64, 20u64);
        trajectory.record(8, 15);
        trajectory.record(5, 12);
        assert_eq!(trajectory.len(), 3);
        assert_eq!(trajectory.rounds_fought(), 2);
        assert_eq!(trajectory.last(), Some((5, 12)));
        assert_eq!(trajectory.iter().nth(1), Some((8, 15)));
    }

    #[test]
    fn test_outcome_classification() {
        let mut trajectory = Trajectory::new(10u64, 20u64);
        assert_eq!(trajectory.outcome(), Outcome::Exhausted);

        trajectory.record(0, 4);
        assert_eq!(trajectory.outcome(), Outcome::BlueVictory);
        assert_eq!(trajectory.outcome().victor(), Some(Side::Blue));

        let mut mutual = Trajectory::new(3.0f64, 3.0f64);
        mutual.record(0.0, 0.0);
        assert_eq!(mutual.outcome(), Outcome::MutualElimination);
        assert!(mutual.outcome().is_decisive());
        assert_eq!(mutual.outcome().victor(), None);
    }
}
