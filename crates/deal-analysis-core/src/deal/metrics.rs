use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::inputs::PropertyInputs;
use super::mortgage::{calculate_monthly_mortgage_payment, calculate_piti};
use super::ratios::{
    calculate_break_even_occupancy, calculate_cap_rate, calculate_cash_on_cash_return,
    calculate_debt_coverage_ratio, calculate_grm, calculate_one_percent_rule,
    calculate_operating_expense_ratio,
};
use super::score::{calculate_deal_score, DealRating};
use crate::types::{Money, Multiple, Percent};

/// Every derived figure for one evaluation of a [`PropertyInputs`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatedMetrics {
    // --- Monthly ---
    /// Principal and interest only
    pub monthly_pi: Money,
    /// Principal, interest, taxes and insurance
    pub monthly_piti: Money,
    /// PITI plus every other recurring monthly cost
    pub monthly_total_expenses: Money,
    pub monthly_cash_flow: Money,

    // --- Annual ---
    pub annual_gross_income: Money,
    /// Recurring costs plus tax and insurance; excludes principal and interest
    pub annual_operating_expenses: Money,
    pub annual_noi: Money,
    pub annual_cash_flow: Money,
    /// Twelve months of PITI
    pub annual_debt_service: Money,

    // --- Ratios ---
    pub cap_rate: Percent,
    pub cash_on_cash_return: Percent,
    /// Monthly rent as a percentage of price; the rule passes at 1.0
    pub one_percent_rule: Percent,
    pub gross_rent_multiplier: Multiple,
    pub debt_coverage_ratio: Multiple,
    pub operating_expense_ratio: Percent,
    pub break_even_occupancy: Percent,

    // --- Investment ---
    pub down_payment: Money,
    pub loan_amount: Money,
    pub total_cash_invested: Money,

    // --- Deal score ---
    pub deal_score: u32,
    pub deal_rating: DealRating,
    pub recommendation: String,
}

/// Run the full financial model for one property.
///
/// NOI is a pre-financing figure: operating expenses exclude principal and
/// interest. Debt service, used for DCR and break-even occupancy, is the
/// full PITI. Degenerate inputs flow through the zero-guarded ratios and
/// never fail.
pub fn calculate_all_metrics(inputs: &PropertyInputs) -> CalculatedMetrics {
    // --- Acquisition ---
    let down_payment = inputs.down_payment();
    let loan_amount = inputs.loan_amount();
    let total_cash_invested = inputs.total_cash_invested();

    // --- Financing ---
    let monthly_pi =
        calculate_monthly_mortgage_payment(loan_amount, inputs.interest_rate, inputs.loan_term);
    let monthly_piti = calculate_piti(
        loan_amount,
        inputs.interest_rate,
        inputs.loan_term,
        inputs.annual_property_tax,
        inputs.annual_insurance,
    );

    // --- Monthly ---
    let monthly_operating_costs = inputs.monthly_operating_costs();
    let monthly_total_expenses = monthly_piti + monthly_operating_costs;
    let monthly_cash_flow = inputs.monthly_rent - monthly_total_expenses;

    // --- Annual ---
    let annual_gross_income = inputs.monthly_rent * dec!(12);
    let annual_debt_service = monthly_piti * dec!(12);
    let annual_operating_expenses = monthly_operating_costs * dec!(12)
        + inputs.annual_property_tax
        + inputs.annual_insurance;
    let annual_noi = annual_gross_income - annual_operating_expenses;
    let annual_cash_flow = monthly_cash_flow * dec!(12);

    // --- Ratios ---
    let cap_rate = calculate_cap_rate(annual_noi, inputs.purchase_price);
    let cash_on_cash_return = calculate_cash_on_cash_return(annual_cash_flow, total_cash_invested);
    let one_percent_rule = calculate_one_percent_rule(inputs.monthly_rent, inputs.purchase_price);
    let gross_rent_multiplier = calculate_grm(inputs.purchase_price, inputs.monthly_rent);
    let debt_coverage_ratio = calculate_debt_coverage_ratio(annual_noi, annual_debt_service);
    let operating_expense_ratio =
        calculate_operating_expense_ratio(annual_operating_expenses, annual_gross_income);
    let break_even_occupancy = calculate_break_even_occupancy(
        annual_debt_service,
        annual_operating_expenses,
        annual_gross_income,
    );

    let deal = calculate_deal_score(
        monthly_cash_flow,
        cap_rate,
        cash_on_cash_return,
        one_percent_rule,
    );

    CalculatedMetrics {
        monthly_pi,
        monthly_piti,
        monthly_total_expenses,
        monthly_cash_flow,
        annual_gross_income,
        annual_operating_expenses,
        annual_noi,
        annual_cash_flow,
        annual_debt_service,
        cap_rate,
        cash_on_cash_return,
        one_percent_rule,
        gross_rent_multiplier,
        debt_coverage_ratio,
        operating_expense_ratio,
        break_even_occupancy,
        down_payment,
        loan_amount,
        total_cash_invested,
        deal_score: deal.score,
        deal_rating: deal.rating,
        recommendation: deal.recommendation,
    }
}
