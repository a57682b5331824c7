use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    InvalidProbabilities { prob_0: f64, prob_1: f64 },
    UnknownState(u8),
    InvalidConfig(String),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidProbabilities { prob_0, prob_1 } => write!(
                f,
                "Invalid Probabilities: P(0)={} P(1)={} (must be non-negative and sum to 1)",
                prob_0, prob_1
            ),
            CoreError::UnknownState(s) => write!(f, "Unknown State: {} is not one of 1..=6", s),
            CoreError::InvalidConfig(msg) => write!(f, "Invalid Config: {}", msg),
        }
    }
}

impl std::error::Error for CoreError {}

impl CoreError {
    pub fn invalid_probabilities(prob_0: f64, prob_1: f64) -> Self { CoreError::InvalidProbabilities { prob_0, prob_1 } }
    pub fn invalid_config(message: &str) -> Self { CoreError::InvalidConfig(message.to_string()) }
}

pub type CoreResult<T> = Result<T, CoreError>;
