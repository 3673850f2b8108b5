use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use deal_analysis_core::deal::mortgage;
use deal_analysis_core::deal::validation::MAX_LOAN_TERM_YEARS;
use deal_analysis_core::types::Money;

/// Arguments for a mortgage payment quote
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct MortgageArgs {
    /// Loan principal
    #[arg(long)]
    pub principal: Decimal,

    /// Annual interest rate as a percentage (e.g. 7.0 for 7%)
    #[arg(long, alias = "rate")]
    pub interest_rate: Decimal,

    /// Loan term in years
    #[arg(
        long,
        alias = "term",
        default_value = "30",
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_LOAN_TERM_YEARS))
    )]
    pub years: u32,

    /// Annual property tax (adds PITI to the output)
    #[arg(long)]
    pub annual_tax: Option<Decimal>,

    /// Annual insurance premium (adds PITI to the output)
    #[arg(long)]
    pub annual_insurance: Option<Decimal>,
}

#[derive(Debug, Serialize)]
struct MortgageQuote {
    monthly_payment: Money,
    total_paid: Money,
    total_interest: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    monthly_piti: Option<Money>,
}

pub fn run_mortgage(args: MortgageArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let monthly_payment =
        mortgage::calculate_monthly_mortgage_payment(args.principal, args.interest_rate, args.years);
    let total_paid = monthly_payment * Decimal::from(u64::from(args.years) * 12);

    let monthly_piti = if args.annual_tax.is_some() || args.annual_insurance.is_some() {
        Some(mortgage::calculate_piti(
            args.principal,
            args.interest_rate,
            args.years,
            args.annual_tax.unwrap_or(Decimal::ZERO),
            args.annual_insurance.unwrap_or(Decimal::ZERO),
        ))
    } else {
        None
    };

    let quote = MortgageQuote {
        monthly_payment,
        total_paid,
        total_interest: total_paid - args.principal,
        monthly_piti,
    };
    Ok(serde_json::to_value(quote)?)
}
