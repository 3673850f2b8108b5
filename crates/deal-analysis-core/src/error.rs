use thiserror::Error;

#[derive(Debug, Error)]
pub enum DealAnalysisError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Usage limit reached: {used} of {limit} analyses consumed")]
    UsageLimitReached { used: u32, limit: u32 },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for DealAnalysisError {
    fn from(e: serde_json::Error) -> Self {
        DealAnalysisError::SerializationError(e.to_string())
    }
}
