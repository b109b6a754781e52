// Error type shared by the solver, driver, layout and front ends
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartTossError {
    /// A coordinate, scroll offset or gravity value was NaN or infinite
    #[error("non-finite geometry: {0}")]
    NonFiniteGeometry(&'static str),

    /// No speed within the attempt cap produced a real launch angle
    #[error("no real launch angle found after {attempts} speed increments")]
    SolverExhausted { attempts: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("card index {index} out of range (catalog has {count} cards)")]
    CardOutOfRange { index: usize, count: usize },

    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

impl From<String> for CartTossError {
    fn from(msg: String) -> Self {
        CartTossError::InvalidConfig(msg)
    }
}

pub type Result<T> = std::result::Result<T, CartTossError>;
