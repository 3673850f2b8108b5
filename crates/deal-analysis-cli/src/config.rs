use std::env;
use std::fmt;
use std::str::FromStr;

use deal_analysis_core::deal::projection::{
    check_projection_years, ProjectionAssumptions, PROJECTION_YEARS,
};
use deal_analysis_core::DealAnalysisResult;
use rust_decimal::Decimal;

/// Defaults drawn from the environment (and `.env`), overridable by flags.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub log_level: String,
    pub assumptions: ProjectionAssumptions,
    pub projection_years: u32,
}

impl CliConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = ProjectionAssumptions::default();

        let log_level = env::var("DEALX_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Self {
            log_level,
            assumptions: ProjectionAssumptions {
                rent_growth: env_or("DEALX_RENT_GROWTH", defaults.rent_growth)?,
                expense_growth: env_or("DEALX_EXPENSE_GROWTH", defaults.expense_growth)?,
                appreciation: env_or("DEALX_APPRECIATION", defaults.appreciation)?,
            },
            projection_years: env_or("DEALX_PROJECTION_YEARS", PROJECTION_YEARS)?,
        })
    }

    /// Environment defaults with any explicit flag values applied on top.
    pub fn assumptions_with(
        &self,
        rent_growth: Option<Decimal>,
        expense_growth: Option<Decimal>,
        appreciation: Option<Decimal>,
    ) -> ProjectionAssumptions {
        ProjectionAssumptions {
            rent_growth: rent_growth.unwrap_or(self.assumptions.rent_growth),
            expense_growth: expense_growth.unwrap_or(self.assumptions.expense_growth),
            appreciation: appreciation.unwrap_or(self.assumptions.appreciation),
        }
    }

    /// Horizon from the flag or the environment, bounded like the core analysis.
    pub fn projection_years_with(&self, years: Option<u32>) -> DealAnalysisResult<u32> {
        check_projection_years(years.unwrap_or(self.projection_years))
    }
}

fn env_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => {
            let parsed = raw.trim().parse();
            parsed.map_err(|_| ConfigError::InvalidValue { key, value: raw })
        }
        Err(_) => Ok(default),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => {
                write!(f, "{key} must be a number, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
