use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::{json, Value};

use deal_analysis_core::format::{
    format_currency, format_number, format_percent, DEFAULT_NUMBER_DECIMALS,
    DEFAULT_PERCENT_DECIMALS,
};

#[derive(Debug, Clone, ValueEnum)]
pub enum FormatKind {
    Currency,
    Percent,
    Number,
}

/// Arguments for display formatting
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct FormatArgs {
    /// Kind of value to format
    #[arg(long)]
    pub kind: FormatKind,

    /// Value to format
    #[arg(long)]
    pub value: Decimal,

    /// Fraction digits (percent defaults to 2, number to 0; ignored for currency)
    #[arg(long)]
    pub decimals: Option<u32>,
}

pub fn run_format(args: FormatArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let formatted = match args.kind {
        FormatKind::Currency => format_currency(args.value),
        FormatKind::Percent => {
            format_percent(args.value, args.decimals.unwrap_or(DEFAULT_PERCENT_DECIMALS))
        }
        FormatKind::Number => {
            format_number(args.value, args.decimals.unwrap_or(DEFAULT_NUMBER_DECIMALS))
        }
    };
    Ok(json!({ "value": args.value, "formatted": formatted }))
}
