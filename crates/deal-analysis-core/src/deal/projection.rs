use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::inputs::PropertyInputs;
use super::metrics::CalculatedMetrics;
use crate::error::DealAnalysisError;
use crate::types::{Money, Percent};
use crate::DealAnalysisResult;

/// Conventional projection horizon in years.
pub const PROJECTION_YEARS: u32 = 5;

/// Longest horizon a projection will run.
pub const MAX_PROJECTION_YEARS: u32 = 100;

/// Annual growth assumptions, all as whole-number percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionAssumptions {
    pub rent_growth: Percent,
    /// Growth of every non-mortgage expense
    pub expense_growth: Percent,
    pub appreciation: Percent,
}

impl Default for ProjectionAssumptions {
    fn default() -> Self {
        Self {
            rent_growth: dec!(3),
            expense_growth: dec!(2),
            appreciation: dec!(3),
        }
    }
}

/// One year of a forward projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyProjection {
    /// 1-based year number
    pub year: u32,
    pub monthly_rent: Money,
    pub annual_income: Money,
    pub annual_expenses: Money,
    pub annual_cash_flow: Money,
    pub property_value: Money,
    pub equity: Money,
    pub cumulative_cash_flow: Money,
    /// Cumulative cash flow plus equity, less total cash invested
    pub total_return: Money,
}

/// Project the conventional five years. See [`generate_projections`].
pub fn generate_5_year_projections(
    inputs: &PropertyInputs,
    base_metrics: &CalculatedMetrics,
    assumptions: &ProjectionAssumptions,
) -> Vec<YearlyProjection> {
    generate_projections(inputs, base_metrics, assumptions, PROJECTION_YEARS)
}

/// Reject a horizon outside `1..=MAX_PROJECTION_YEARS`.
pub fn check_projection_years(years: u32) -> DealAnalysisResult<u32> {
    if years == 0 || years > MAX_PROJECTION_YEARS {
        return Err(DealAnalysisError::InvalidInput {
            field: "projection_years".into(),
            reason: format!("Projection horizon must be between 1 and {MAX_PROJECTION_YEARS} years"),
        });
    }
    Ok(years)
}

/// Simulate `years` years of rent growth, expense growth and appreciation.
///
/// Growth compounds once before each year is recorded, so year 1 already
/// includes one year of growth. Principal and interest stay fixed. Loan
/// paydown is straight-line (`loan / term` per year) rather than the true
/// amortisation curve. Horizons beyond [`MAX_PROJECTION_YEARS`] are cut
/// short at that limit.
pub fn generate_projections(
    inputs: &PropertyInputs,
    base_metrics: &CalculatedMetrics,
    assumptions: &ProjectionAssumptions,
    years: u32,
) -> Vec<YearlyProjection> {
    let rent_step = growth_factor(assumptions.rent_growth);
    let expense_step = growth_factor(assumptions.expense_growth);
    let value_step = growth_factor(assumptions.appreciation);

    let monthly_pi = base_metrics.monthly_pi;
    let loan_amount = base_metrics.loan_amount;
    let annual_paydown = if inputs.loan_term == 0 {
        Decimal::ZERO
    } else {
        loan_amount / Decimal::from(inputs.loan_term)
    };

    let mut current_rent = inputs.monthly_rent;
    let mut current_expenses = base_metrics.monthly_total_expenses - monthly_pi;
    let mut current_property_value = inputs.purchase_price;
    let mut cumulative_cash_flow = Decimal::ZERO;

    let mut projections = Vec::new();

    for year in 1..=years.min(MAX_PROJECTION_YEARS) {
        current_rent *= rent_step;
        current_expenses *= expense_step;
        current_property_value *= value_step;

        let annual_income = current_rent * dec!(12);
        let annual_expenses = (current_expenses + monthly_pi) * dec!(12);
        let annual_cash_flow = annual_income - annual_expenses;
        cumulative_cash_flow += annual_cash_flow;

        let remaining_loan = loan_amount - annual_paydown * Decimal::from(year);
        let equity = current_property_value - remaining_loan;
        let total_return = cumulative_cash_flow + equity - base_metrics.total_cash_invested;

        projections.push(YearlyProjection {
            year,
            monthly_rent: current_rent,
            annual_income,
            annual_expenses,
            annual_cash_flow,
            property_value: current_property_value,
            equity,
            cumulative_cash_flow,
            total_return,
        });
    }

    projections
}

fn growth_factor(percent: Percent) -> Decimal {
    Decimal::ONE + percent / Decimal::ONE_HUNDRED
}
