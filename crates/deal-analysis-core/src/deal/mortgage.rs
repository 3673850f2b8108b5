use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{Money, Percent};

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Monthly principal and interest on a fully amortising fixed-rate loan.
///
/// `P * r(1+r)^n / ((1+r)^n - 1)` with `r` the monthly rate and `n` the
/// number of monthly payments. No principal or no term means no loan, so
/// the payment is zero. A zero rate falls back to straight-line repayment.
pub fn calculate_monthly_mortgage_payment(
    principal: Money,
    annual_rate_percent: Percent,
    years: u32,
) -> Money {
    if principal.is_zero() || years == 0 {
        return Decimal::ZERO;
    }

    let total_months = u64::from(years) * 12;

    if annual_rate_percent.is_zero() {
        return principal / Decimal::from(total_months);
    }

    let monthly_rate = annual_rate_percent / Decimal::ONE_HUNDRED / MONTHS_PER_YEAR;

    match compound_factor(monthly_rate, total_months) {
        Some(compound) => {
            let denominator = compound - Decimal::ONE;
            if denominator.is_zero() {
                return principal / Decimal::from(total_months);
            }
            principal * monthly_rate * (compound / denominator)
        }
        // (1+r)^n beyond Decimal range: the payment converges on P * r
        None => principal * monthly_rate,
    }
}

/// Monthly principal, interest, property tax and insurance.
pub fn calculate_piti(
    principal: Money,
    annual_rate_percent: Percent,
    years: u32,
    annual_tax: Money,
    annual_insurance: Money,
) -> Money {
    calculate_monthly_mortgage_payment(principal, annual_rate_percent, years)
        + annual_tax / MONTHS_PER_YEAR
        + annual_insurance / MONTHS_PER_YEAR
}

/// (1 + r)^n by square-and-multiply, `None` once it leaves the Decimal range.
fn compound_factor(rate: Decimal, periods: u64) -> Option<Decimal> {
    let mut base = Decimal::ONE + rate;
    let mut exp = periods;
    let mut compound = Decimal::ONE;
    while exp > 0 {
        if exp & 1 == 1 {
            compound = compound.checked_mul(base)?;
        }
        exp >>= 1;
        if exp > 0 {
            base = base.checked_mul(base)?;
        }
    }
    Some(compound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_30_year_payment() {
        let pmt = calculate_monthly_mortgage_payment(dec!(240000), dec!(7), 30);
        assert!(
            (pmt - dec!(1596.73)).abs() < dec!(0.01),
            "Expected ~1596.73, got {}",
            pmt
        );
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let pmt = calculate_monthly_mortgage_payment(dec!(120000), Decimal::ZERO, 10);
        assert_eq!(pmt, dec!(1000));
    }

    #[test]
    fn test_no_loan_means_no_payment() {
        assert_eq!(
            calculate_monthly_mortgage_payment(Decimal::ZERO, dec!(7), 30),
            Decimal::ZERO
        );
        assert_eq!(
            calculate_monthly_mortgage_payment(dec!(100000), dec!(7), 0),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_absurd_rate_does_not_panic() {
        // 500% annual over 30 years overflows (1+r)^n; payment tends to P * r
        let pmt = calculate_monthly_mortgage_payment(dec!(100000), dec!(500), 30);
        let monthly_rate = dec!(500) / dec!(100) / dec!(12);
        assert!((pmt - dec!(100000) * monthly_rate).abs() < dec!(0.01));
    }

    #[test]
    fn test_very_long_term_does_not_overflow() {
        // 400M years: the month count exceeds u32 and the factor leaves Decimal range
        let pmt = calculate_monthly_mortgage_payment(dec!(240000), dec!(7), 400_000_000);
        let monthly_rate = dec!(7) / dec!(100) / dec!(12);
        assert!((pmt - dec!(240000) * monthly_rate).abs() < dec!(0.01));

        let flat = calculate_monthly_mortgage_payment(dec!(240000), Decimal::ZERO, u32::MAX);
        assert!(flat > Decimal::ZERO);
        assert!(flat < dec!(0.01));
    }

    #[test]
    fn test_negative_rate_long_term_returns() {
        let pmt = calculate_monthly_mortgage_payment(dec!(100000), dec!(-3), 400_000_000);
        assert!(pmt.abs() < dec!(1000));
    }

    #[test]
    fn test_piti_adds_monthly_tax_and_insurance() {
        let pi = calculate_monthly_mortgage_payment(dec!(240000), dec!(7), 30);
        let piti = calculate_piti(dec!(240000), dec!(7), 30, dec!(3600), dec!(1200));
        assert_eq!(piti, pi + dec!(300) + dec!(100));
    }

    #[test]
    fn test_piti_without_loan_is_tax_and_insurance() {
        let piti = calculate_piti(Decimal::ZERO, dec!(7), 30, dec!(2400), dec!(1200));
        assert_eq!(piti, dec!(300));
    }
}
