use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Deserialize;

use deal_analysis_core::deal::analysis::DealAnalysisInput;
use deal_analysis_core::deal::inputs::PropertyInputs;
use deal_analysis_core::deal::metrics::CalculatedMetrics;
use deal_analysis_core::deal::projection::{
    check_projection_years, ProjectionAssumptions, PROJECTION_YEARS,
};
use deal_analysis_core::usage::UsageCounter;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_decimal(value: &str) -> NapiResult<Decimal> {
    value.trim().parse::<Decimal>().map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Deal model
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_all_metrics(input_json: String) -> NapiResult<String> {
    let input: PropertyInputs = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = deal_analysis_core::deal::metrics::calculate_all_metrics(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn generate_scenario_analysis(input_json: String) -> NapiResult<String> {
    let input: PropertyInputs = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = deal_analysis_core::deal::scenarios::generate_scenario_analysis(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

fn default_years() -> u32 {
    PROJECTION_YEARS
}

/// Projection request from the UI: the base metrics are the ones already
/// on screen, so they are passed back in rather than recomputed.
#[derive(Deserialize)]
struct ProjectionRequest {
    property: PropertyInputs,
    base_metrics: CalculatedMetrics,
    #[serde(default)]
    assumptions: ProjectionAssumptions,
    #[serde(default = "default_years")]
    years: u32,
}

#[napi]
pub fn generate_projections(request_json: String) -> NapiResult<String> {
    let req: ProjectionRequest = serde_json::from_str(&request_json).map_err(to_napi_error)?;
    let years = check_projection_years(req.years).map_err(to_napi_error)?;
    let output = deal_analysis_core::deal::projection::generate_projections(
        &req.property,
        &req.base_metrics,
        &req.assumptions,
        years,
    );
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn analyze_deal(input_json: String) -> NapiResult<String> {
    let input = DealAnalysisInput::from_json(&input_json).map_err(to_napi_error)?;
    let output =
        deal_analysis_core::deal::analysis::analyze_deal(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn validate_inputs(input_json: String) -> NapiResult<String> {
    let input: PropertyInputs = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let warnings =
        deal_analysis_core::deal::validation::validate_inputs(&input).map_err(to_napi_error)?;
    serde_json::to_string(&warnings).map_err(to_napi_error)
}

#[napi]
pub fn calculate_mortgage_payment(
    principal: String,
    annual_rate_percent: String,
    years: u32,
) -> NapiResult<String> {
    let payment = deal_analysis_core::deal::mortgage::calculate_monthly_mortgage_payment(
        parse_decimal(&principal)?,
        parse_decimal(&annual_rate_percent)?,
        years,
    );
    Ok(payment.to_string())
}

// ---------------------------------------------------------------------------
// Demo usage
// ---------------------------------------------------------------------------

/// Consume one demo analysis. Takes and returns the caller-held counter.
#[napi]
pub fn consume_demo_usage(counter_json: String) -> NapiResult<String> {
    let mut counter: UsageCounter = serde_json::from_str(&counter_json).map_err(to_napi_error)?;
    counter.try_consume().map_err(to_napi_error)?;
    serde_json::to_string(&counter).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[napi]
pub fn format_currency(value: String) -> NapiResult<String> {
    Ok(deal_analysis_core::format::format_currency(parse_decimal(&value)?))
}

#[napi]
pub fn format_percent(value: String, decimals: Option<u32>) -> NapiResult<String> {
    Ok(deal_analysis_core::format::format_percent(
        parse_decimal(&value)?,
        decimals.unwrap_or(deal_analysis_core::format::DEFAULT_PERCENT_DECIMALS),
    ))
}

#[napi]
pub fn format_number(value: String, decimals: Option<u32>) -> NapiResult<String> {
    Ok(deal_analysis_core::format::format_number(
        parse_decimal(&value)?,
        decimals.unwrap_or(deal_analysis_core::format::DEFAULT_NUMBER_DECIMALS),
    ))
}
