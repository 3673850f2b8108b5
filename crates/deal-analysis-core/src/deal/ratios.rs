//! Investment ratios.
//!
//! Every ratio returns zero when its denominator is zero. That is a
//! defined result, not an error.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{Money, Multiple, Percent};

/// `numerator / denominator`, or zero for a zero denominator.
fn guarded_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}

/// NOI as a percentage of purchase price.
pub fn calculate_cap_rate(noi: Money, purchase_price: Money) -> Percent {
    guarded_div(noi, purchase_price) * Decimal::ONE_HUNDRED
}

/// Annual cash flow as a percentage of total cash invested.
pub fn calculate_cash_on_cash_return(annual_cash_flow: Money, total_cash_invested: Money) -> Percent {
    guarded_div(annual_cash_flow, total_cash_invested) * Decimal::ONE_HUNDRED
}

/// Monthly rent as a percentage of purchase price.
///
/// The rule passes at 1.0 (i.e. rent is 1% of price), so compare the
/// result against `1`, not `0.01`.
pub fn calculate_one_percent_rule(monthly_rent: Money, purchase_price: Money) -> Percent {
    guarded_div(monthly_rent, purchase_price) * Decimal::ONE_HUNDRED
}

/// Gross rent multiplier: price over annual gross income.
pub fn calculate_grm(purchase_price: Money, gross_monthly_income: Money) -> Multiple {
    guarded_div(purchase_price, gross_monthly_income * dec!(12))
}

/// Debt coverage ratio: NOI over annual debt service.
pub fn calculate_debt_coverage_ratio(annual_noi: Money, annual_debt_service: Money) -> Multiple {
    guarded_div(annual_noi, annual_debt_service)
}

/// Operating expenses as a percentage of gross income.
pub fn calculate_operating_expense_ratio(
    annual_operating_expenses: Money,
    gross_annual_income: Money,
) -> Percent {
    guarded_div(annual_operating_expenses, gross_annual_income) * Decimal::ONE_HUNDRED
}

/// Occupancy needed for income to cover debt service plus operating expenses.
pub fn calculate_break_even_occupancy(
    annual_debt_service: Money,
    annual_operating_expenses: Money,
    gross_annual_income: Money,
) -> Percent {
    guarded_div(
        annual_debt_service + annual_operating_expenses,
        gross_annual_income,
    ) * Decimal::ONE_HUNDRED
}
