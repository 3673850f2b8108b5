//! Rental property deal analysis.
//!
//! Everything under this module is a pure function of [`PropertyInputs`]:
//! no I/O, no shared state, and no error paths in the financial math.
//! Division by a zero denominator yields zero rather than failing so a
//! half-filled input form still renders.

pub mod inputs;
pub mod metrics;
pub mod mortgage;
pub mod ratios;
pub mod score;
pub mod snapshot;
pub mod validation;

#[cfg(feature = "scenarios")]
pub mod scenarios;

#[cfg(feature = "projections")]
pub mod projection;

#[cfg(all(feature = "scenarios", feature = "projections", feature = "formatting"))]
pub mod analysis;

pub use inputs::{InvestmentStrategy, PropertyInputs};
pub use metrics::{calculate_all_metrics, CalculatedMetrics};
pub use score::{calculate_deal_score, DealRating, DealScore};
