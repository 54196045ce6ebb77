pub mod config;
pub mod error;
pub mod types;

pub use config::{load_scenario, Scenario};
pub use error::{Result, WarsimError};
pub use types::{Force, Side, UnitGroup};
