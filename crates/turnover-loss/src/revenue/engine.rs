use super::domain::{ChurnBasis, RevenueLossInputs, TurnoverLength, TurnoverStage};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const DAYS_IN_YEAR: f64 = 365.0;
pub const DAYS_PER_RENT_MONTH: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RevenueLossError {
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    #[error("{quantity} is undefined because its denominator is zero")]
    DivisionUndefined { quantity: &'static str },
}

impl RevenueLossError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub const fn label_key(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "error_invalid_input",
            Self::DivisionUndefined { .. } => "error_division_undefined",
        }
    }
}

/// Non-fatal conditions attached to an otherwise valid result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RevenueLossWarning {
    OccupancyOutOfBounds { effective_occupancy_rate: f64 },
}

/// Every derived figure of one computation. Occupancy is never clamped;
/// `occupancy_rate_out_of_bounds` reports when it left `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueLossResult {
    pub churn_rate_pct: f64,
    pub turnover_days: f64,
    pub rent_per_day: f64,
    pub total_unit_days_per_year: f64,
    pub void_days_per_year: f64,
    pub effective_occupancy_rate: f64,
    pub theoretical_revenue: f64,
    pub effective_revenue: f64,
    pub revenue_loss: f64,
    pub percentage_loss: f64,
    pub occupancy_rate_out_of_bounds: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<RevenueLossWarning>,
}

impl RevenueLossInputs {
    pub fn compute(&self) -> Result<RevenueLossResult, RevenueLossError> {
        compute(self)
    }
}

pub fn compute(inputs: &RevenueLossInputs) -> Result<RevenueLossResult, RevenueLossError> {
    validate_rent(inputs.monthly_rent)?;
    let churn_rate_pct = resolve_churn_rate(&inputs.churn_basis, inputs.unit_count)?;
    let turnover_days = resolve_turnover_days(&inputs.turnover)?;

    if inputs.unit_count == 0 {
        return Err(RevenueLossError::DivisionUndefined {
            quantity: "effective_occupancy_rate",
        });
    }
    if inputs.monthly_rent == 0.0 {
        return Err(RevenueLossError::DivisionUndefined {
            quantity: "percentage_loss",
        });
    }

    let units = f64::from(inputs.unit_count);
    let rent_per_day = inputs.monthly_rent / DAYS_PER_RENT_MONTH;
    let total_unit_days_per_year = units * DAYS_IN_YEAR;
    let void_days_per_year = (churn_rate_pct / 100.0) * turnover_days * units;
    let effective_occupancy_rate = 1.0 - (void_days_per_year / total_unit_days_per_year);
    let theoretical_revenue = total_unit_days_per_year * rent_per_day;
    let effective_revenue = effective_occupancy_rate * total_unit_days_per_year * rent_per_day;
    let revenue_loss = theoretical_revenue - effective_revenue;
    let percentage_loss = (revenue_loss / theoretical_revenue) * 100.0;

    ensure_finite("monthly_rent", "theoretical_revenue", theoretical_revenue)?;
    ensure_finite("turnover_days", "void_days_per_year", void_days_per_year)?;
    for (quantity, value) in [
        ("effective_occupancy_rate", effective_occupancy_rate),
        ("effective_revenue", effective_revenue),
        ("revenue_loss", revenue_loss),
        ("percentage_loss", percentage_loss),
    ] {
        ensure_finite("inputs", quantity, value)?;
    }

    let occupancy_rate_out_of_bounds = !(0.0..=1.0).contains(&effective_occupancy_rate);
    let mut warnings = Vec::new();
    if occupancy_rate_out_of_bounds {
        warn!(
            effective_occupancy_rate,
            void_days_per_year, total_unit_days_per_year, "occupancy rate outside [0, 1]"
        );
        warnings.push(RevenueLossWarning::OccupancyOutOfBounds {
            effective_occupancy_rate,
        });
    }

    debug!(
        unit_count = inputs.unit_count,
        churn_rate_pct, turnover_days, revenue_loss, "revenue loss computed"
    );

    Ok(RevenueLossResult {
        churn_rate_pct,
        turnover_days,
        rent_per_day,
        total_unit_days_per_year,
        void_days_per_year,
        effective_occupancy_rate,
        theoretical_revenue,
        effective_revenue,
        revenue_loss,
        percentage_loss,
        occupancy_rate_out_of_bounds,
        warnings,
    })
}

/// Annualized churn percentage for the given basis.
pub fn resolve_churn_rate(basis: &ChurnBasis, unit_count: u32) -> Result<f64, RevenueLossError> {
    match *basis {
        ChurnBasis::Duration { avg_tenancy_months } => {
            if !avg_tenancy_months.is_finite() || avg_tenancy_months <= 0.0 {
                return Err(RevenueLossError::invalid(
                    "avg_tenancy_months",
                    format!("must be a positive number of months, got {avg_tenancy_months}"),
                ));
            }
            let churn_rate_pct = (12.0 / avg_tenancy_months) * 100.0;
            if !churn_rate_pct.is_finite() {
                return Err(RevenueLossError::invalid(
                    "avg_tenancy_months",
                    format!("{avg_tenancy_months} months is too short to annualize"),
                ));
            }
            Ok(churn_rate_pct)
        }
        ChurnBasis::RenewalCount {
            renewing_units,
            total_units,
        } => {
            if total_units != unit_count {
                return Err(RevenueLossError::invalid(
                    "total_units",
                    format!("must equal unit_count {unit_count}, got {total_units}"),
                ));
            }
            if renewing_units > total_units {
                return Err(RevenueLossError::invalid(
                    "renewing_units",
                    format!("{renewing_units} renewing exceeds {total_units} total units"),
                ));
            }
            if total_units == 0 {
                return Err(RevenueLossError::DivisionUndefined {
                    quantity: "churn_rate_pct",
                });
            }
            let leaving = f64::from(total_units - renewing_units);
            Ok((leaving / f64::from(total_units)) * 100.0)
        }
        ChurnBasis::DirectRate { churn_rate_pct } => {
            if !churn_rate_pct.is_finite() || !(0.0..=100.0).contains(&churn_rate_pct) {
                return Err(RevenueLossError::invalid(
                    "churn_rate_pct",
                    format!("must be within 0-100, got {churn_rate_pct}"),
                ));
            }
            Ok(churn_rate_pct)
        }
    }
}

fn resolve_turnover_days(turnover: &TurnoverLength) -> Result<f64, RevenueLossError> {
    match turnover {
        TurnoverLength::Stages(delays) => {
            for stage in TurnoverStage::ordered() {
                if let Some(days) = delays.stage_days(stage) {
                    validate_days(stage.field(), days)?;
                }
            }
            let total = delays.total_days();
            validate_days("turnover_days", total)?;
            Ok(total)
        }
        TurnoverLength::Total { days } => {
            validate_days("turnover_days", *days)?;
            Ok(*days)
        }
    }
}

/// Rejects inputs whose derived `quantity` overflows to a non-finite value.
fn ensure_finite(field: &'static str, quantity: &str, value: f64) -> Result<(), RevenueLossError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RevenueLossError::invalid(
            field,
            format!("{quantity} is not representable ({value})"),
        ))
    }
}

fn validate_days(field: &'static str, days: f64) -> Result<(), RevenueLossError> {
    if days.is_finite() && days >= 0.0 {
        Ok(())
    } else {
        Err(RevenueLossError::invalid(
            field,
            format!("must be a non-negative day count, got {days}"),
        ))
    }
}

fn validate_rent(monthly_rent: f64) -> Result<(), RevenueLossError> {
    if monthly_rent.is_finite() && monthly_rent >= 0.0 {
        Ok(())
    } else {
        Err(RevenueLossError::invalid(
            "monthly_rent",
            format!("must be a non-negative amount, got {monthly_rent}"),
        ))
    }
}
