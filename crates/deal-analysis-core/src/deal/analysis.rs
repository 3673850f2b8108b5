use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::inputs::PropertyInputs;
use super::metrics::{calculate_all_metrics, CalculatedMetrics};
use super::projection::{
    check_projection_years, generate_projections, ProjectionAssumptions, YearlyProjection,
    PROJECTION_YEARS,
};
use super::scenarios::{generate_scenario_analysis, ScenarioAnalysis};
use super::validation::validate_inputs;
use crate::format::{format_currency, format_percent, DEFAULT_PERCENT_DECIMALS};
use crate::types::{with_metadata, ComputationOutput};
use crate::DealAnalysisResult;

fn default_projection_years() -> u32 {
    PROJECTION_YEARS
}

/// Everything needed for a complete deal analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealAnalysisInput {
    pub property: PropertyInputs,
    #[serde(default)]
    pub assumptions: ProjectionAssumptions,
    #[serde(default = "default_projection_years")]
    pub projection_years: u32,
}

impl DealAnalysisInput {
    /// Default assumptions over the conventional five-year horizon.
    pub fn new(property: PropertyInputs) -> Self {
        Self {
            property,
            assumptions: ProjectionAssumptions::default(),
            projection_years: PROJECTION_YEARS,
        }
    }

    /// Parse a JSON request, applying defaults for omitted assumptions.
    pub fn from_json(json: &str) -> DealAnalysisResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Display strings for the headline figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealSummary {
    pub monthly_cash_flow: String,
    pub cap_rate: String,
    pub cash_on_cash_return: String,
    pub deal_score: String,
    pub rating: String,
    pub recommendation: String,
}

impl DealSummary {
    pub fn from_metrics(metrics: &CalculatedMetrics) -> Self {
        Self {
            monthly_cash_flow: format_currency(metrics.monthly_cash_flow),
            cap_rate: format_percent(metrics.cap_rate, DEFAULT_PERCENT_DECIMALS),
            cash_on_cash_return: format_percent(
                metrics.cash_on_cash_return,
                DEFAULT_PERCENT_DECIMALS,
            ),
            deal_score: format!("{}/100", metrics.deal_score),
            rating: metrics.deal_rating.label().to_string(),
            recommendation: metrics.recommendation.clone(),
        }
    }
}

/// Base metrics, scenarios, projections and a formatted summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealAnalysisOutput {
    pub metrics: CalculatedMetrics,
    pub scenarios: ScenarioAnalysis,
    pub projections: Vec<YearlyProjection>,
    pub summary: DealSummary,
}

/// Validate and run the complete analysis for one property.
///
/// Unlike the individual model functions this rejects out-of-domain
/// inputs, and it reports concerning results (negative cash flow, thin
/// debt coverage, failing the 1% rule) as warnings.
pub fn analyze_deal(
    input: &DealAnalysisInput,
) -> DealAnalysisResult<ComputationOutput<DealAnalysisOutput>> {
    let start = Instant::now();

    let years = check_projection_years(input.projection_years)?;
    let mut warnings = validate_inputs(&input.property)?;

    let metrics = calculate_all_metrics(&input.property);
    let scenarios = generate_scenario_analysis(&input.property);
    let projections = generate_projections(
        &input.property,
        &metrics,
        &input.assumptions,
        years,
    );

    // --- Warnings for concerning results ---
    if metrics.monthly_cash_flow < Decimal::ZERO {
        warnings.push(format!(
            "Negative monthly cash flow of {} — the property does not pay for itself",
            format_currency(metrics.monthly_cash_flow)
        ));
    }

    if !metrics.annual_debt_service.is_zero() && metrics.debt_coverage_ratio < Decimal::ONE {
        warnings.push(format!(
            "Debt coverage ratio of {:.2} is below 1.00x — NOI does not cover debt service",
            metrics.debt_coverage_ratio
        ));
    }

    if metrics.one_percent_rule < Decimal::ONE {
        warnings.push(format!(
            "Rent is {} of price — fails the 1% rule",
            format_percent(metrics.one_percent_rule, DEFAULT_PERCENT_DECIMALS)
        ));
    }

    if scenarios.worst_case.monthly_cash_flow < Decimal::ZERO
        && metrics.monthly_cash_flow >= Decimal::ZERO
    {
        warnings.push("Worst-case scenario turns monthly cash flow negative".into());
    }

    let summary = DealSummary::from_metrics(&metrics);

    let output = DealAnalysisOutput {
        metrics,
        scenarios,
        projections,
        summary,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Rental Property Deal Analysis (metrics, scenarios, straight-line equity projection)",
        input,
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deal::inputs::InvestmentStrategy;
    use crate::deal::score::DealRating;
    use crate::error::DealAnalysisError;
    use rust_decimal_macros::dec;

    fn cash_cow() -> PropertyInputs {
        PropertyInputs {
            purchase_price: dec!(150000),
            down_payment_percent: dec!(25),
            interest_rate: dec!(6),
            loan_term: 30,
            closing_costs: dec!(4500),
            rehab_costs: Decimal::ZERO,
            monthly_rent: dec!(2000),
            annual_property_tax: dec!(1800),
            annual_insurance: dec!(900),
            monthly_hoa: Decimal::ZERO,
            monthly_utilities: Decimal::ZERO,
            monthly_maintenance: dec!(100),
            monthly_vacancy: dec!(100),
            monthly_property_management: dec!(160),
            strategy: InvestmentStrategy::Rental,
        }
    }

    #[test]
    fn test_strong_deal_has_no_result_warnings() {
        let out = analyze_deal(&DealAnalysisInput::new(cash_cow())).unwrap();
        let r = &out.result;
        assert!(out.warnings.is_empty(), "{:?}", out.warnings);
        assert_eq!(r.projections.len(), 5);
        assert_eq!(r.metrics.deal_rating, DealRating::Excellent);
        assert_eq!(r.summary.rating, "Excellent");
        assert_eq!(r.summary.deal_score, format!("{}/100", r.metrics.deal_score));
    }

    #[test]
    fn test_negative_cash_flow_warned() {
        let mut property = cash_cow();
        property.monthly_rent = dec!(900);
        let out = analyze_deal(&DealAnalysisInput::new(property)).unwrap();
        assert!(out.warnings.iter().any(|w| w.contains("Negative monthly cash flow")));
        assert!(out.warnings.iter().any(|w| w.contains("1% rule")));
    }

    #[test]
    fn test_invalid_property_rejected() {
        let mut property = cash_cow();
        property.down_payment_percent = dec!(120);
        assert!(analyze_deal(&DealAnalysisInput::new(property)).is_err());
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        match DealAnalysisInput::from_json("{\"property\": 42}") {
            Err(DealAnalysisError::SerializationError(_)) => {}
            other => panic!("Expected SerializationError, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_projection_years_rejected() {
        let mut input = DealAnalysisInput::new(cash_cow());
        input.projection_years = 0;
        match analyze_deal(&input) {
            Err(DealAnalysisError::InvalidInput { field, .. }) => {
                assert_eq!(field, "projection_years")
            }
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_oversized_projection_years_rejected() {
        let json = serde_json::json!({
            "property": serde_json::to_value(cash_cow()).unwrap(),
            "projection_years": 4_000_000_000u32
        });
        let input = DealAnalysisInput::from_json(&json.to_string()).unwrap();
        match analyze_deal(&input) {
            Err(DealAnalysisError::InvalidInput { field, .. }) => {
                assert_eq!(field, "projection_years")
            }
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_oversized_loan_term_rejected() {
        let mut property = cash_cow();
        property.loan_term = 400_000_000;
        match analyze_deal(&DealAnalysisInput::new(property)) {
            Err(DealAnalysisError::InvalidInput { field, .. }) => assert_eq!(field, "loan_term"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_defaults_when_deserialising() {
        let json = serde_json::json!({
            "property": {
                "purchase_price": "150000",
                "down_payment_percent": "25",
                "interest_rate": "6",
                "loan_term": 30,
                "monthly_rent": "2000"
            }
        });
        let input = DealAnalysisInput::from_json(&json.to_string()).unwrap();
        assert_eq!(input.projection_years, 5);
        assert_eq!(input.assumptions, ProjectionAssumptions::default());
    }
}
