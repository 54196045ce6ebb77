//! Monte Carlo batches of stochastic battles
//!
//! Every run gets its own ChaCha8 generator seeded from the run's seed, so
//! a batch produces the same summary regardless of how rayon schedules it.

use std::ops::Range;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::Side;
use crate::stochastic::{run_stochastic, StochasticParams};
use crate::trajectory::Outcome;

/// Aggregate statistics over a batch of runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub runs: u64,
    pub red_victories: u64,
    pub blue_victories: u64,
    pub mutual_eliminations: u64,
    pub exhausted: u64,
    pub mean_rounds: f64,
    pub mean_final_red: f64,
    pub mean_final_blue: f64,
}

impl BatchSummary {
    /// Runs in which at least one side was wiped out
    pub fn decisive(&self) -> u64 {
        self.red_victories + self.blue_victories + self.mutual_eliminations
    }

    pub fn decisive_fraction(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.decisive() as f64 / self.runs as f64
    }

    pub fn summary(&self) -> String {
        format!(
            "{} runs: red won {}, blue won {}, mutual {}, exhausted {}\n\
             mean rounds {:.1}, mean final r {:.1}, mean final b {:.1}",
            self.runs,
            self.red_victories,
            self.blue_victories,
            self.mutual_eliminations,
            self.exhausted,
            self.mean_rounds,
            self.mean_final_red,
            self.mean_final_blue,
        )
    }
}

/// Per-run result kept for aggregation
struct RunRecord {
    outcome: Outcome,
    rounds: usize,
    final_red: u64,
    final_blue: u64,
}

fn run_seed(params: &StochasticParams, seed: u64) -> Result<RunRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let trajectory = run_stochastic(params, &mut rng)?;
    let (final_red, final_blue) = trajectory.last().unwrap_or_default();

    Ok(RunRecord {
        outcome: trajectory.outcome(),
        rounds: trajectory.rounds_fought(),
        final_red,
        final_blue,
    })
}

/// Run one stochastic battle per seed in parallel and summarize
pub fn run_batch(params: &StochasticParams, seeds: Range<u64>) -> Result<BatchSummary> {
    // Fail fast on bad coefficients or power before spawning any work
    params.red().validate(Side::Red)?;
    params.blue().validate(Side::Blue)?;

    let records: Vec<RunRecord> = seeds
        .into_par_iter()
        .map(|seed| run_seed(params, seed))
        .collect::<Result<Vec<_>>>()?;

    let mut summary = BatchSummary {
        runs: records.len() as u64,
        ..BatchSummary::default()
    };
    if records.is_empty() {
        return Ok(summary);
    }

    let mut total_rounds = 0usize;
    let mut total_red = 0u64;
    let mut total_blue = 0u64;
    for record in &records {
        match record.outcome {
            Outcome::RedVictory => summary.red_victories += 1,
            Outcome::BlueVictory => summary.blue_victories += 1,
            Outcome::MutualElimination => summary.mutual_eliminations += 1,
            Outcome::Exhausted => summary.exhausted += 1,
        }
        total_rounds += record.rounds;
        total_red += record.final_red;
        total_blue += record.final_blue;
    }

    let n = records.len() as f64;
    summary.mean_rounds = total_rounds as f64 / n;
    summary.mean_final_red = total_red as f64 / n;
    summary.mean_final_blue = total_blue as f64 / n;

    tracing::info!("Batch complete: {}", summary.summary());

    Ok(summary)
}
