use deal_analysis_core::deal::analysis::{analyze_deal, DealAnalysisInput, DealSummary};
use deal_analysis_core::deal::inputs::{InvestmentStrategy, PropertyInputs};
use deal_analysis_core::deal::metrics::calculate_all_metrics;
use deal_analysis_core::deal::scenarios::generate_scenario_analysis;
use deal_analysis_core::DealAnalysisError;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

// ===========================================================================
// Analysis envelope tests
// ===========================================================================

fn condo() -> PropertyInputs {
    PropertyInputs {
        purchase_price: dec!(300000),
        down_payment_percent: dec!(20),
        interest_rate: dec!(7.0),
        loan_term: 30,
        closing_costs: dec!(9000),
        rehab_costs: dec!(0),
        monthly_rent: dec!(2500),
        annual_property_tax: dec!(3600),
        annual_insurance: dec!(1200),
        monthly_hoa: dec!(0),
        monthly_utilities: dec!(0),
        monthly_maintenance: dec!(200),
        monthly_vacancy: dec!(125),
        monthly_property_management: dec!(0),
        strategy: InvestmentStrategy::HouseHack,
    }
}

#[test]
fn test_envelope_matches_individual_operations() {
    let property = condo();
    let out = analyze_deal(&DealAnalysisInput::new(property.clone())).unwrap();

    assert_eq!(out.result.metrics, calculate_all_metrics(&property));
    assert_eq!(out.result.scenarios, generate_scenario_analysis(&property));
    assert_eq!(out.result.projections.len(), 5);
    assert!(out.methodology.contains("Deal Analysis"));
    assert_eq!(out.metadata.precision, "rust_decimal_128bit");
}

#[test]
fn test_summary_strings() {
    let out = analyze_deal(&DealAnalysisInput::new(condo())).unwrap();
    let expected = DealSummary {
        monthly_cash_flow: "$178".into(),
        cap_rate: "7.10%".into(),
        cash_on_cash_return: "3.10%".into(),
        deal_score: "47/100".into(),
        rating: "Poor".into(),
        recommendation: out.result.metrics.recommendation.clone(),
    };
    assert_eq!(out.result.summary, expected);
}

#[test]
fn test_one_percent_rule_warning() {
    let out = analyze_deal(&DealAnalysisInput::new(condo())).unwrap();
    assert!(out
        .warnings
        .iter()
        .any(|w| w.contains("0.83%") && w.contains("1% rule")));
}

#[test]
fn test_assumptions_echoed() {
    let out = analyze_deal(&DealAnalysisInput::new(condo())).unwrap();
    assert_eq!(out.assumptions["projection_years"], 5);
    assert_eq!(out.assumptions["property"]["strategy"], "house-hack");
}

#[test]
fn test_validation_error_surfaces() {
    let mut property = condo();
    property.closing_costs = dec!(-1);
    match analyze_deal(&DealAnalysisInput::new(property)) {
        Err(DealAnalysisError::InvalidInput { field, .. }) => assert_eq!(field, "closing_costs"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_thin_debt_coverage_warning() {
    // NOI 21,300 against 12 months of PITI (about 23,961)
    let out = analyze_deal(&DealAnalysisInput::new(condo())).unwrap();
    assert!(out.result.metrics.debt_coverage_ratio < dec!(1));
    assert!(out
        .warnings
        .iter()
        .any(|w| w.contains("Debt coverage ratio of 0.89")));
}

#[test]
fn test_no_debt_service_no_coverage_warning() {
    let mut property = condo();
    property.down_payment_percent = dec!(100);
    property.annual_property_tax = dec!(0);
    property.annual_insurance = dec!(0);
    let out = analyze_deal(&DealAnalysisInput::new(property)).unwrap();
    assert_eq!(out.result.metrics.annual_debt_service, dec!(0));
    assert_eq!(out.result.metrics.debt_coverage_ratio, dec!(0));
    assert!(!out.warnings.iter().any(|w| w.contains("Debt coverage")));
}
