//! Core type definitions shared by both attrition models

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, WarsimError};

/// One of the two opposing sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Red,
    Blue,
}

impl Side {
    /// Short label used in parameter names (`coeff_r1`, `size_b2`, ...)
    pub fn label(&self) -> &'static str {
        match self {
            Side::Red => "r",
            Side::Blue => "b",
        }
    }
}

/// A homogeneous block of units fighting on one side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitGroup {
    /// Surviving units
    pub size: u32,
    /// Per-unit firepower contributed to the enemy's death probability
    pub power: f64,
    /// Survivability bonus/malus (armour, training, position).
    /// 0 = no protection, 1 = immune, negative = more exposed.
    #[serde(default)]
    pub coefficient: f64,
}

impl UnitGroup {
    pub fn new(size: u32, power: f64) -> Self {
        Self {
            size,
            power,
            coefficient: 0.0,
        }
    }

    pub fn with_coefficient(mut self, coefficient: f64) -> Self {
        self.coefficient = coefficient;
        self
    }

    /// Total outgoing firepower of this group
    pub fn firepower(&self) -> f64 {
        self.size as f64 * self.power
    }
}

/// One side of the battle: an ordered collection of unit groups
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Force {
    pub groups: Vec<UnitGroup>,
}

impl Force {
    pub fn new(groups: Vec<UnitGroup>) -> Self {
        Self { groups }
    }

    /// Total surviving units across all groups
    pub fn strength(&self) -> u64 {
        self.groups.iter().map(|g| g.size as u64).sum()
    }

    /// Summed firepower directed at the enemy
    pub fn firepower(&self) -> f64 {
        self.groups.iter().map(UnitGroup::firepower).sum()
    }

    pub fn is_eliminated(&self) -> bool {
        self.strength() == 0
    }

    /// Check every group before a battle starts.
    ///
    /// Coefficients are checked independently against the upper bound of 1,
    /// and power must be a non-negative real. Errors name the first offending
    /// parameter, 1-based, e.g. `coeff_r2` or `power_b1`.
    pub fn validate(&self, side: Side) -> Result<()> {
        for (idx, group) in self.groups.iter().enumerate() {
            let coefficient = group.coefficient;
            if !coefficient.is_finite() || coefficient > 1.0 {
                return Err(WarsimError::Configuration {
                    name: format!("coeff_{}{}", side.label(), idx + 1),
                    value: coefficient,
                });
            }
            let power = group.power;
            if !power.is_finite() || power < 0.0 {
                return Err(WarsimError::InvalidParameter {
                    name: format!("power_{}{}", side.label(), idx + 1),
                    value: power,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_strength_and_firepower() {
        let force = Force::new(vec![UnitGroup::new(500, 0.02), UnitGroup::new(100, 0.5)]);
        assert_eq!(force.strength(), 600);
        assert!((force.firepower() - 60.0).abs() < 1e-9);
        assert!(!force.is_eliminated());
    }

    #[test]
    fn test_empty_force_is_eliminated() {
        assert!(Force::default().is_eliminated());
        assert!(Force::new(vec![UnitGroup::new(0, 1.0)]).is_eliminated());
    }

    #[test]
    fn test_validate_names_offending_coefficient() {
        let force = Force::new(vec![
            UnitGroup::new(10, 0.1).with_coefficient(0.5),
            UnitGroup::new(10, 0.1).with_coefficient(1.5),
        ]);
        match force.validate(Side::Blue) {
            Err(WarsimError::Configuration { name, value }) => {
                assert_eq!(name, "coeff_b2");
                assert_eq!(value, 1.5);
            }
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_boundary_and_malus() {
        // Nonzero coefficients at or below 1 are all valid, including a malus
        let force = Force::new(vec![
            UnitGroup::new(10, 0.1).with_coefficient(1.0),
            UnitGroup::new(10, 0.1).with_coefficient(0.3),
            UnitGroup::new(10, 0.1).with_coefficient(-0.5),
        ]);
        assert!(force.validate(Side::Red).is_ok());
    }

    #[test]
    fn test_validate_rejects_nan() {
        let force = Force::new(vec![UnitGroup::new(10, 0.1).with_coefficient(f64::NAN)]);
        assert!(matches!(
            force.validate(Side::Red),
            Err(WarsimError::Configuration { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_power() {
        let force = Force::new(vec![UnitGroup::new(10, 0.1), UnitGroup::new(10, -0.2)]);
        match force.validate(Side::Red) {
            Err(WarsimError::InvalidParameter { name, value }) => {
                assert_eq!(name, "power_r2");
                assert_eq!(value, -0.2);
            }
            other => panic!("expected invalid parameter, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_nan_power() {
        let force = Force::new(vec![UnitGroup::new(10, f64::NAN)]);
        assert!(matches!(
            force.validate(Side::Blue),
            Err(WarsimError::InvalidParameter { ref name, .. }) if name == "power_b1"
        ));
    }

    #[test]
    fn test_side_labels() {
        assert_eq!(Side::Red.label(), "r");
        assert_eq!(Side::Blue.label(), "b");
    }
}
