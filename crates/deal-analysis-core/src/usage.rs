//! Free-tier usage accounting.
//!
//! The counter is plain data owned by the caller, who decides where (and
//! whether) it is stored between calls.

use serde::{Deserialize, Serialize};

use crate::error::DealAnalysisError;
use crate::DealAnalysisResult;

/// Number of analyses a demo visitor may run.
pub const DEFAULT_DEMO_LIMIT: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageCounter {
    pub used: u32,
    pub limit: u32,
}

impl Default for UsageCounter {
    fn default() -> Self {
        Self::new(DEFAULT_DEMO_LIMIT)
    }
}

impl UsageCounter {
    pub fn new(limit: u32) -> Self {
        Self { used: 0, limit }
    }

    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.used)
    }

    pub fn is_exhausted(&self) -> bool {
        self.used >= self.limit
    }

    /// Record one use, returning how many remain afterwards.
    pub fn try_consume(&mut self) -> DealAnalysisResult<u32> {
        if self.is_exhausted() {
            return Err(DealAnalysisError::UsageLimitReached {
                used: self.used,
                limit: self.limit,
            });
        }
        self.used += 1;
        Ok(self.remaining())
    }

    pub fn reset(&mut self) {
        self.used = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume_until_exhausted() {
        let mut counter = UsageCounter::default();
        assert_eq!(counter.try_consume().unwrap(), 2);
        assert_eq!(counter.try_consume().unwrap(), 1);
        assert_eq!(counter.try_consume().unwrap(), 0);
        assert!(counter.is_exhausted());

        match counter.try_consume() {
            Err(DealAnalysisError::UsageLimitReached { used, limit }) => {
                assert_eq!(used, 3);
                assert_eq!(limit, 3);
            }
            other => panic!("Expected UsageLimitReached, got {other:?}"),
        }
        assert_eq!(counter.used, 3);
    }

    #[test]
    fn test_reset() {
        let mut counter = UsageCounter::new(1);
        counter.try_consume().unwrap();
        counter.reset();
        assert_eq!(counter.remaining(), 1);
    }

    #[test]
    fn test_zero_limit_is_always_exhausted() {
        let mut counter = UsageCounter::new(0);
        assert!(counter.try_consume().is_err());
        assert_eq!(counter.remaining(), 0);
    }
}
