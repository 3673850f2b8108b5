use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::inputs::PropertyInputs;
use super::metrics::{calculate_all_metrics, CalculatedMetrics};

/// Multiplicative adjustments applied to a base set of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioAdjustment {
    pub rent_factor: Decimal,
    /// Applied to maintenance, vacancy reserve and utilities alike
    pub expense_factor: Decimal,
}

impl ScenarioAdjustment {
    /// Rent up 10%, variable costs down 5%.
    pub const BEST_CASE: ScenarioAdjustment = ScenarioAdjustment {
        rent_factor: dec!(1.10),
        expense_factor: dec!(0.95),
    };

    /// Rent down 10%, variable costs up 10%.
    pub const WORST_CASE: ScenarioAdjustment = ScenarioAdjustment {
        rent_factor: dec!(0.90),
        expense_factor: dec!(1.10),
    };

    /// Derive a perturbed copy of `base`. Fields not named here are unchanged.
    pub fn apply(&self, base: &PropertyInputs) -> PropertyInputs {
        PropertyInputs {
            monthly_rent: base.monthly_rent * self.rent_factor,
            monthly_maintenance: base.monthly_maintenance * self.expense_factor,
            monthly_vacancy: base.monthly_vacancy * self.expense_factor,
            monthly_utilities: base.monthly_utilities * self.expense_factor,
            ..base.clone()
        }
    }
}

/// Best, base and worst case metrics, each a full recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioAnalysis {
    pub best_case: CalculatedMetrics,
    pub base_case: CalculatedMetrics,
    pub worst_case: CalculatedMetrics,
}

/// Rerun the full model on optimistic and pessimistic variants of `base_inputs`.
pub fn generate_scenario_analysis(base_inputs: &PropertyInputs) -> ScenarioAnalysis {
    ScenarioAnalysis {
        best_case: calculate_all_metrics(&ScenarioAdjustment::BEST_CASE.apply(base_inputs)),
        base_case: calculate_all_metrics(base_inputs),
        worst_case: calculate_all_metrics(&ScenarioAdjustment::WORST_CASE.apply(base_inputs)),
    }
}
