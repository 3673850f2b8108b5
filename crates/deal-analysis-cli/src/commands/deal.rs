use chrono::Utc;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, info};

use deal_analysis_core::deal::analysis::{self, DealAnalysisInput};
use deal_analysis_core::deal::inputs::{InvestmentStrategy, PropertyInputs};
use deal_analysis_core::deal::metrics;
use deal_analysis_core::deal::projection::{self, MAX_PROJECTION_YEARS};
use deal_analysis_core::deal::scenarios;
use deal_analysis_core::deal::snapshot::AnalysisSnapshot;
use deal_analysis_core::deal::validation::MAX_LOAN_TERM_YEARS;

use crate::config::CliConfig;
use crate::input;

/// Property inputs as individual flags (used when no --input is given)
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct PropertyFlags {
    /// Path to a JSON or YAML file of property inputs (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Purchase price
    #[arg(long)]
    pub purchase_price: Option<Decimal>,

    /// Down payment as a percentage of price (e.g. 20 for 20%)
    #[arg(long, alias = "down")]
    pub down_payment_percent: Option<Decimal>,

    /// Annual interest rate as a percentage (e.g. 7.0 for 7%)
    #[arg(long, alias = "rate")]
    pub interest_rate: Option<Decimal>,

    /// Loan term in years
    #[arg(
        long,
        alias = "term",
        default_value = "30",
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_LOAN_TERM_YEARS))
    )]
    pub loan_term: u32,

    /// Monthly rent
    #[arg(long, alias = "rent")]
    pub monthly_rent: Option<Decimal>,

    /// Closing costs
    #[arg(long, default_value = "0")]
    pub closing_costs: Decimal,

    /// Rehab costs
    #[arg(long, default_value = "0")]
    pub rehab_costs: Decimal,

    /// Annual property tax
    #[arg(long, default_value = "0")]
    pub annual_property_tax: Decimal,

    /// Annual insurance premium
    #[arg(long, default_value = "0")]
    pub annual_insurance: Decimal,

    /// Monthly HOA dues
    #[arg(long, default_value = "0")]
    pub monthly_hoa: Decimal,

    /// Monthly utilities paid by the owner
    #[arg(long, default_value = "0")]
    pub monthly_utilities: Decimal,

    /// Monthly maintenance reserve
    #[arg(long, default_value = "0")]
    pub monthly_maintenance: Decimal,

    /// Monthly vacancy reserve
    #[arg(long, default_value = "0")]
    pub monthly_vacancy: Decimal,

    /// Monthly property management fee
    #[arg(long, default_value = "0")]
    pub monthly_property_management: Decimal,

    /// Investment strategy: rental, house-hack, brrrr, fix-and-flip, commercial
    #[arg(long, default_value = "rental")]
    pub strategy: String,
}

/// Growth assumptions for projections; unset flags fall back to DEALX_* env vars
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct GrowthFlags {
    /// Annual rent growth percentage
    #[arg(long)]
    pub rent_growth: Option<Decimal>,

    /// Annual expense growth percentage
    #[arg(long)]
    pub expense_growth: Option<Decimal>,

    /// Annual appreciation percentage
    #[arg(long)]
    pub appreciation: Option<Decimal>,

    /// Number of years to project (1-100)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_PROJECTION_YEARS)))]
    pub years: Option<u32>,
}

/// Arguments for the full deal analysis
#[derive(Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub property: PropertyFlags,

    #[command(flatten)]
    pub growth: GrowthFlags,
}

/// Arguments for commands that need only property inputs
#[derive(Args)]
pub struct PropertyArgs {
    #[command(flatten)]
    pub property: PropertyFlags,
}

/// Arguments for multi-year projections
#[derive(Args)]
pub struct ProjectionArgs {
    #[command(flatten)]
    pub property: PropertyFlags,

    #[command(flatten)]
    pub growth: GrowthFlags,
}

/// Arguments for an analysis snapshot
#[derive(Args)]
pub struct SnapshotArgs {
    /// Property address recorded with the snapshot
    #[arg(long)]
    pub address: String,

    #[command(flatten)]
    pub property: PropertyFlags,
}

fn parse_strategy(raw: &str) -> Result<InvestmentStrategy, Box<dyn std::error::Error>> {
    serde_json::from_value(Value::String(raw.to_string())).map_err(|_| {
        format!(
            "Unknown strategy '{}' (expected rental, house-hack, brrrr, fix-and-flip or commercial)",
            raw
        )
        .into()
    })
}

fn load_property(flags: &PropertyFlags) -> Result<PropertyInputs, Box<dyn std::error::Error>> {
    let inputs: PropertyInputs = if let Some(ref path) = flags.input {
        input::file::read_input(path)?
    } else if let Some(piped) = input::stdin::read_piped_property()? {
        piped
    } else {
        PropertyInputs {
            purchase_price: flags
                .purchase_price
                .ok_or("--purchase-price is required (or provide --input)")?,
            down_payment_percent: flags
                .down_payment_percent
                .ok_or("--down-payment-percent is required (or provide --input)")?,
            interest_rate: flags
                .interest_rate
                .ok_or("--interest-rate is required (or provide --input)")?,
            loan_term: flags.loan_term,
            closing_costs: flags.closing_costs,
            rehab_costs: flags.rehab_costs,
            monthly_rent: flags
                .monthly_rent
                .ok_or("--monthly-rent is required (or provide --input)")?,
            annual_property_tax: flags.annual_property_tax,
            annual_insurance: flags.annual_insurance,
            monthly_hoa: flags.monthly_hoa,
            monthly_utilities: flags.monthly_utilities,
            monthly_maintenance: flags.monthly_maintenance,
            monthly_vacancy: flags.monthly_vacancy,
            monthly_property_management: flags.monthly_property_management,
            strategy: parse_strategy(&flags.strategy)?,
        }
    };

    debug!(
        purchase_price = %inputs.purchase_price,
        monthly_rent = %inputs.monthly_rent,
        strategy = ?inputs.strategy,
        "loaded property inputs"
    );
    Ok(inputs)
}

pub fn run_analyze(config: &CliConfig, args: AnalyzeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let property = load_property(&args.property)?;
    let input = DealAnalysisInput {
        property,
        assumptions: config.assumptions_with(
            args.growth.rent_growth,
            args.growth.expense_growth,
            args.growth.appreciation,
        ),
        projection_years: config.projection_years_with(args.growth.years)?,
    };

    let result = analysis::analyze_deal(&input)?;
    info!(
        deal_score = result.result.metrics.deal_score,
        monthly_cash_flow = %result.result.metrics.monthly_cash_flow,
        warnings = result.warnings.len(),
        "deal analysed"
    );
    Ok(serde_json::to_value(result)?)
}

pub fn run_metrics(args: PropertyArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let property = load_property(&args.property)?;
    let result = metrics::calculate_all_metrics(&property);
    info!(
        deal_score = result.deal_score,
        cap_rate = %result.cap_rate,
        "computed deal metrics"
    );
    Ok(serde_json::to_value(result)?)
}

pub fn run_scenarios(args: PropertyArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let property = load_property(&args.property)?;
    let result = scenarios::generate_scenario_analysis(&property);
    info!(
        best = %result.best_case.monthly_cash_flow,
        base = %result.base_case.monthly_cash_flow,
        worst = %result.worst_case.monthly_cash_flow,
        "computed scenario cash flows"
    );
    Ok(serde_json::to_value(result)?)
}

pub fn run_projections(
    config: &CliConfig,
    args: ProjectionArgs,
) -> Result<Value, Box<dyn std::error::Error>> {
    let property = load_property(&args.property)?;
    let assumptions = config.assumptions_with(
        args.growth.rent_growth,
        args.growth.expense_growth,
        args.growth.appreciation,
    );
    let years = config.projection_years_with(args.growth.years)?;

    let base = metrics::calculate_all_metrics(&property);
    let rows = projection::generate_projections(&property, &base, &assumptions, years);
    debug!(years, ?assumptions, "generated projections");
    Ok(serde_json::to_value(rows)?)
}

pub fn run_snapshot(args: SnapshotArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let property = load_property(&args.property)?;
    let snapshot = AnalysisSnapshot::capture(args.address, Utc::now(), &property);
    info!(address = %snapshot.address, "captured analysis snapshot");
    Ok(serde_json::to_value(snapshot)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy() {
        assert_eq!(parse_strategy("house-hack").unwrap(), InvestmentStrategy::HouseHack);
        assert_eq!(parse_strategy("brrrr").unwrap(), InvestmentStrategy::Brrrr);
        assert!(parse_strategy("timeshare").is_err());
    }
}
