use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::inputs::{InvestmentStrategy, PropertyInputs};
use super::metrics::{calculate_all_metrics, CalculatedMetrics};

/// A computed analysis tagged with the metadata a storage layer keeps
/// alongside it. The engine builds it; persisting it is the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSnapshot {
    pub address: String,
    pub analyzed_at: DateTime<Utc>,
    pub strategy: InvestmentStrategy,
    pub metrics: CalculatedMetrics,
}

impl AnalysisSnapshot {
    pub fn new(
        address: impl Into<String>,
        analyzed_at: DateTime<Utc>,
        strategy: InvestmentStrategy,
        metrics: CalculatedMetrics,
    ) -> Self {
        Self {
            address: address.into(),
            analyzed_at,
            strategy,
            metrics,
        }
    }

    /// Compute metrics for `inputs` and stamp them.
    pub fn capture(
        address: impl Into<String>,
        analyzed_at: DateTime<Utc>,
        inputs: &PropertyInputs,
    ) -> Self {
        Self::new(address, analyzed_at, inputs.strategy, calculate_all_metrics(inputs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_capture_carries_strategy_and_metrics() {
        let inputs = PropertyInputs {
            purchase_price: dec!(180000),
            down_payment_percent: dec!(25),
            interest_rate: dec!(7.25),
            loan_term: 30,
            closing_costs: dec!(5400),
            rehab_costs: dec!(20000),
            monthly_rent: dec!(1650),
            annual_property_tax: dec!(2200),
            annual_insurance: dec!(900),
            monthly_hoa: Decimal::ZERO,
            monthly_utilities: Decimal::ZERO,
            monthly_maintenance: dec!(120),
            monthly_vacancy: dec!(80),
            monthly_property_management: Decimal::ZERO,
            strategy: InvestmentStrategy::Brrrr,
        };
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let snap = AnalysisSnapshot::capture("12 Elm St, Dayton OH", at, &inputs);

        assert_eq!(snap.address, "12 Elm St, Dayton OH");
        assert_eq!(snap.strategy, InvestmentStrategy::Brrrr);
        assert_eq!(snap.analyzed_at, at);
        assert_eq!(snap.metrics, calculate_all_metrics(&inputs));

        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["strategy"], "brrrr");
        assert_eq!(json["analyzed_at"], "2024-03-01T12:00:00Z");
    }
}
