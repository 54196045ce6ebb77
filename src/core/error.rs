use thiserror::Error;

#[derive(Error, Debug)]
pub enum WarsimError {
    #[error("Coefficient {name} cannot be > 1, please select a smaller value (got {value})")]
    Configuration { name: String, value: f64 },

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: String, value: f64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Scenario parse error: {0}")]
    ScenarioParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WarsimError>;
