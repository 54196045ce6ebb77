//! Per-unit survival rolls

use rand::Rng;

/// Death probability after the group's bonus/malus is applied
pub fn effective_probability(prob: f64, coefficient: f64) -> f64 {
    prob - coefficient * prob
}

/// Roll once for every unit in the group and return the surviving size.
///
/// A unit dies when the effective probability is positive and at least
/// the uniform draw in [0, 1). Always consumes exactly `size` draws.
pub fn resolve_casualties<R: Rng + ?Sized>(
    size: u32,
    coefficient: f64,
    prob: f64,
    rng: &mut R,
) -> u32 {
    let effective = effective_probability(prob, coefficient);

    let mut deaths = 0u32;
    for _ in 0..size {
        let roll: f64 = rng.gen();
        if effective > 0.0 && effective >= roll {
            deaths += 1;
        }
    }

    size.saturating_sub(deaths)
}
