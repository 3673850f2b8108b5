use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Percent};

/// Investment strategy tag attached to a deal.
///
/// Carried through the analysis for the caller's benefit; no formula
/// currently branches on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvestmentStrategy {
    /// Buy-and-hold long-term rental
    #[default]
    Rental,
    /// Owner occupies one unit and rents the rest
    HouseHack,
    /// Buy, rehab, rent, refinance, repeat
    Brrrr,
    /// Short hold, renovate and resell
    FixAndFlip,
    /// Commercial property
    Commercial,
}

/// Purchase, financing, income and expense parameters for a single property.
///
/// Every monetary field is expected to be non-negative, but nothing here
/// enforces it; see [`crate::deal::validation`] for the optional checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyInputs {
    // --- Acquisition ---
    pub purchase_price: Money,
    /// Down payment as a percentage of purchase price (20 = 20%)
    pub down_payment_percent: Percent,
    /// Annual mortgage interest rate (7.0 = 7%)
    pub interest_rate: Percent,
    /// Loan term in years
    pub loan_term: u32,
    #[serde(default)]
    pub closing_costs: Money,
    #[serde(default)]
    pub rehab_costs: Money,

    // --- Income ---
    pub monthly_rent: Money,

    // --- Recurring costs ---
    #[serde(default)]
    pub annual_property_tax: Money,
    #[serde(default)]
    pub annual_insurance: Money,
    #[serde(default)]
    pub monthly_hoa: Money,
    #[serde(default)]
    pub monthly_utilities: Money,
    #[serde(default)]
    pub monthly_maintenance: Money,
    /// Monthly vacancy reserve
    #[serde(default)]
    pub monthly_vacancy: Money,
    #[serde(default)]
    pub monthly_property_management: Money,

    #[serde(default)]
    pub strategy: InvestmentStrategy,
}

impl PropertyInputs {
    /// Cash paid at closing toward the purchase price.
    pub fn down_payment(&self) -> Money {
        self.purchase_price * self.down_payment_percent / Decimal::ONE_HUNDRED
    }

    /// Financed portion of the purchase price.
    pub fn loan_amount(&self) -> Money {
        self.purchase_price - self.down_payment()
    }

    /// Down payment plus closing and rehab costs.
    pub fn total_cash_invested(&self) -> Money {
        self.down_payment() + self.closing_costs + self.rehab_costs
    }

    /// Recurring monthly costs that are neither mortgage nor tax/insurance.
    pub fn monthly_operating_costs(&self) -> Money {
        self.monthly_hoa
            + self.monthly_utilities
            + self.monthly_maintenance
            + self.monthly_vacancy
            + self.monthly_property_management
    }
}
