//! Property tests for trajectory invariants of both models

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use warsim::core::{Force, Side, UnitGroup};
use warsim::{run_stochastic, SquareLaw, StochasticEngine, StochasticParams, UpdateOrder};

fn params_strategy() -> impl Strategy<Value = StochasticParams> {
    (
        (0u32..300, 0.0f64..0.1, 0u32..300, 0.0f64..0.1, 0u32..60),
        (-0.5f64..=1.0, -0.5f64..=1.0, 0u32..100, 0.0f64..0.2, -0.5f64..=1.0),
        (0u32..100, 0.0f64..0.2, -0.5f64..=1.0),
    )
        .prop_map(
            |(
                (size_r1, power_r1, size_b1, power_b1, time),
                (coeff_r1, coeff_b1, size_r2, power_r2, coeff_r2),
                (size_b2, power_b2, coeff_b2),
            )| StochasticParams {
                size_r1,
                power_r1,
                size_b1,
                power_b1,
                time,
                coeff_r1,
                coeff_b1,
                size_r2,
                power_r2,
                coeff_r2,
                size_b2,
                power_b2,
                coeff_b2,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn stochastic_trajectory_invariants(params in params_strategy(), seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let trajectory = run_stochastic(&params, &mut rng).unwrap();

        prop_assert!(trajectory.len() <= params.time as usize + 1);
        prop_assert_eq!(trajectory.red.len(), trajectory.blue.len());
        prop_assert_eq!(trajectory.red[0], (params.size_r1 + params.size_r2) as u64);
        prop_assert_eq!(trajectory.blue[0], (params.size_b1 + params.size_b2) as u64);

        for window in trajectory.red.windows(2) {
            prop_assert!(window[1] <= window[0]);
        }
        for window in trajectory.blue.windows(2) {
            prop_assert!(window[1] <= window[0]);
        }

        // Nothing is recorded after a side is wiped out, round 0 included
        let last = trajectory.len() - 1;
        for (round, (r, b)) in trajectory.iter().enumerate() {
            if round < last {
                prop_assert!(r > 0 && b > 0);
            }
        }
        if let Some(first_zero) = trajectory.iter().position(|(r, b)| r == 0 || b == 0) {
            prop_assert_eq!(trajectory.len(), first_zero + 1);
            if first_zero < params.time as usize {
                prop_assert!(trajectory.len() < params.time as usize + 1);
            }
        };
    }

    #[test]
    fn immune_group_never_loses_units(
        size in 1u32..200,
        enemy in 1u32..400,
        power in 0.0f64..2.0,
        seed in any::<u64>(),
    ) {
        let red = Force::new(vec![UnitGroup::new(size, 0.0).with_coefficient(1.0)]);
        let blue = Force::new(vec![UnitGroup::new(enemy, power)]);
        let mut engine = StochasticEngine::new(red, blue).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        for _ in 0..20 {
            engine.step(&mut rng).unwrap();
            prop_assert_eq!(engine.force(Side::Red).groups[0].size, size);
        }
    }

    #[test]
    fn coefficient_above_one_always_rejected(coeff in 1.0001f64..100.0, slot in 0usize..4) {
        let mut params = StochasticParams::new(10, 0.1, 10, 0.1, 10);
        match slot {
            0 => params.coeff_r1 = coeff,
            1 => params.coeff_b1 = coeff,
            2 => params.coeff_r2 = coeff,
            _ => params.coeff_b2 = coeff,
        }
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        prop_assert!(run_stochastic(&params, &mut rng).is_err());
    }

    #[test]
    fn square_law_invariants(
        r in 0.0f64..2000.0,
        b in 0.0f64..2000.0,
        t in 0u32..200,
        a in 0.0f64..0.1,
        c in 0.0f64..0.1,
        simultaneous in any::<bool>(),
    ) {
        let order = if simultaneous { UpdateOrder::Simultaneous } else { UpdateOrder::Sequential };
        let law = SquareLaw::new(a, c).unwrap().with_order(order);

        let run = law.run(r, b, t).unwrap();
        prop_assert!(run.trajectory.len() <= t as usize + 1);
        prop_assert!(run.r >= 0.0 && run.b >= 0.0);

        for (red, blue) in run.trajectory.iter() {
            prop_assert!(red >= 0.0 && blue >= 0.0);
        }
        for window in run.trajectory.red.windows(2) {
            prop_assert!(window[1] <= window[0]);
        }
        for window in run.trajectory.blue.windows(2) {
            prop_assert!(window[1] <= window[0]);
        }

        if let Some(first_zero) = run.trajectory.iter().position(|(red, blue)| red <= 0.0 || blue <= 0.0) {
            prop_assert_eq!(run.trajectory.len(), first_zero + 1);
        }

        prop_assert_eq!(law.run(r, b, t).unwrap(), run);
    }
}
