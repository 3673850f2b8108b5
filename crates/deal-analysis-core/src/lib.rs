pub mod deal;
pub mod error;
pub mod types;

#[cfg(feature = "formatting")]
pub mod format;

#[cfg(feature = "usage")]
pub mod usage;

pub use error::DealAnalysisError;
pub use types::*;

/// Standard result type for all deal-analysis operations
pub type DealAnalysisResult<T> = Result<T, DealAnalysisError>;
