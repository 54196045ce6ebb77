//! Death probability from incoming firepower

use crate::core::error::{Result, WarsimError};
use crate::core::types::UnitGroup;

/// Probability for a single defending unit to succumb to enemy fire.
///
/// Summed attacker firepower normalized by the number of defenders:
/// `(size_one*power_one + size_two*power_two + ...) / size_def`.
/// The result is not clamped; values >= 1 always kill and values <= 0
/// never do once resolved against a uniform draw.
pub fn death_probability(size_def: u64, attackers: &[UnitGroup]) -> Result<f64> {
    if size_def == 0 {
        return Err(WarsimError::DegenerateInput(
            "death probability requested for an eliminated side".into(),
        ));
    }
    let firepower: f64 = attackers.iter().map(UnitGroup::firepower).sum();
    Ok(firepower / size_def as f64)
}
