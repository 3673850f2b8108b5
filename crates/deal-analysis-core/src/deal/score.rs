use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Percent};

/// Qualitative band for a deal score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealRating {
    Excellent,
    Good,
    Fair,
    Poor,
    Avoid,
}

impl DealRating {
    /// Band for a 0-100 score.
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => DealRating::Excellent,
            65..=79 => DealRating::Good,
            50..=64 => DealRating::Fair,
            35..=49 => DealRating::Poor,
            _ => DealRating::Avoid,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DealRating::Excellent => "Excellent",
            DealRating::Good => "Good",
            DealRating::Fair => "Fair",
            DealRating::Poor => "Poor",
            DealRating::Avoid => "Avoid",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            DealRating::Excellent => "Strong investment opportunity. Proceed with due diligence.",
            DealRating::Good => "Solid deal. Negotiate better terms to improve returns.",
            DealRating::Fair => "Marginal deal. Look for improvements before committing.",
            DealRating::Poor => "Weak fundamentals. Consider passing on this deal.",
            DealRating::Avoid => "Not recommended. The numbers do not support this investment.",
        }
    }
}

/// Composite 0-100 score with its rating and recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealScore {
    pub score: u32,
    pub rating: DealRating,
    pub recommendation: String,
}

/// Score a deal from its headline metrics.
///
/// Four independent buckets are summed: monthly cash flow (max 40),
/// cap rate (30), cash-on-cash return (20) and the 1%-rule value (10).
/// Each bucket awards the points of the highest threshold met.
pub fn calculate_deal_score(
    monthly_cash_flow: Money,
    cap_rate: Percent,
    cash_on_cash_return: Percent,
    one_percent_rule: Percent,
) -> DealScore {
    let score = cash_flow_points(monthly_cash_flow)
        + cap_rate_points(cap_rate)
        + cash_on_cash_points(cash_on_cash_return)
        + one_percent_rule_points(one_percent_rule);

    let rating = DealRating::from_score(score);

    DealScore {
        score,
        rating,
        recommendation: rating.recommendation().to_string(),
    }
}

/// Points for the highest `(threshold, points)` pair met, in descending order.
fn bucket(value: Decimal, tiers: &[(Decimal, u32)]) -> u32 {
    tiers
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

fn cash_flow_points(monthly_cash_flow: Money) -> u32 {
    bucket(
        monthly_cash_flow,
        &[(dec!(500), 40), (dec!(300), 30), (dec!(100), 20), (dec!(0), 10)],
    )
}

fn cap_rate_points(cap_rate: Percent) -> u32 {
    bucket(
        cap_rate,
        &[(dec!(10), 30), (dec!(8), 25), (dec!(6), 20), (dec!(4), 10)],
    )
}

fn cash_on_cash_points(coc: Percent) -> u32 {
    bucket(
        coc,
        &[(dec!(12), 20), (dec!(10), 15), (dec!(8), 10), (dec!(6), 5)],
    )
}

fn one_percent_rule_points(value: Percent) -> u32 {
    bucket(value, &[(dec!(1.0), 10), (dec!(0.8), 7), (dec!(0.6), 4)])
}
