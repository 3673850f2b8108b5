use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::inputs::PropertyInputs;
use crate::error::DealAnalysisError;
use crate::DealAnalysisResult;

/// Longest loan term accepted, in years.
pub const MAX_LOAN_TERM_YEARS: u32 = 50;

/// Check inputs before analysis.
///
/// The financial model itself accepts anything; this is the optional gate
/// a form or CLI runs first. Hard failures come back as
/// [`DealAnalysisError::InvalidInput`]; soft concerns as warnings.
pub fn validate_inputs(inputs: &PropertyInputs) -> DealAnalysisResult<Vec<String>> {
    let mut warnings: Vec<String> = Vec::new();

    let monetary = [
        ("purchase_price", inputs.purchase_price),
        ("closing_costs", inputs.closing_costs),
        ("rehab_costs", inputs.rehab_costs),
        ("monthly_rent", inputs.monthly_rent),
        ("annual_property_tax", inputs.annual_property_tax),
        ("annual_insurance", inputs.annual_insurance),
        ("monthly_hoa", inputs.monthly_hoa),
        ("monthly_utilities", inputs.monthly_utilities),
        ("monthly_maintenance", inputs.monthly_maintenance),
        ("monthly_vacancy", inputs.monthly_vacancy),
        ("monthly_property_management", inputs.monthly_property_management),
    ];
    for (field, value) in monetary {
        if value < Decimal::ZERO {
            return Err(DealAnalysisError::InvalidInput {
                field: field.into(),
                reason: "Must not be negative".into(),
            });
        }
    }

    if inputs.down_payment_percent < Decimal::ZERO
        || inputs.down_payment_percent > Decimal::ONE_HUNDRED
    {
        return Err(DealAnalysisError::InvalidInput {
            field: "down_payment_percent".into(),
            reason: "Down payment must be between 0 and 100 percent".into(),
        });
    }

    if inputs.interest_rate < Decimal::ZERO {
        return Err(DealAnalysisError::InvalidInput {
            field: "interest_rate".into(),
            reason: "Interest rate must not be negative".into(),
        });
    }

    if inputs.loan_term == 0 && inputs.loan_amount() > Decimal::ZERO {
        return Err(DealAnalysisError::InvalidInput {
            field: "loan_term".into(),
            reason: "Loan term must be at least 1 year when the purchase is financed".into(),
        });
    }

    if inputs.loan_term > MAX_LOAN_TERM_YEARS {
        return Err(DealAnalysisError::InvalidInput {
            field: "loan_term".into(),
            reason: format!("Loan term must not exceed {MAX_LOAN_TERM_YEARS} years"),
        });
    }

    // --- Warnings for unusual inputs ---
    if inputs.purchase_price.is_zero() {
        warnings.push("Purchase price is zero — price-based ratios will read as 0".into());
    }

    if inputs.monthly_rent.is_zero() {
        warnings.push("Monthly rent is zero — income-based ratios will read as 0".into());
    }

    if inputs.interest_rate > dec!(15) {
        warnings.push(format!(
            "Interest rate {}% exceeds 15% — unusually high, verify loan terms",
            inputs.interest_rate
        ));
    }

    Ok(warnings)
}
