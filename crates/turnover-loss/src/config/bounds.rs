use crate::revenue::domain::{ChurnBasis, RevenueLossInputs, TurnoverDelays, TurnoverLength};
use serde::{Deserialize, Serialize};

/// Range, starting position and increment of a single input control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderBounds {
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl SliderBounds {
    pub const fn new(min: f64, max: f64, default: f64, step: f64) -> Self {
        Self {
            min,
            max,
            default,
            step,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Advisory ranges for UI callers. The engine validates its own invariants and
/// never consults these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputBounds {
    pub unit_count: SliderBounds,
    pub monthly_rent: SliderBounds,
    pub avg_tenancy_months: SliderBounds,
    pub inspection_days: SliderBounds,
    pub maintenance_callout_days: SliderBounds,
    pub repair_completion_days: SliderBounds,
    pub find_tenant_days: SliderBounds,
}

impl InputBounds {
    pub const fn standard() -> Self {
        Self {
            unit_count: SliderBounds::new(1.0, 200.0, 30.0, 1.0),
            monthly_rent: SliderBounds::new(3_000.0, 50_000.0, 5_000.0, 1_000.0),
            avg_tenancy_months: SliderBounds::new(1.0, 36.0, 12.0, 1.0),
            inspection_days: SliderBounds::new(0.0, 7.0, 2.0, 1.0),
            maintenance_callout_days: SliderBounds::new(0.0, 7.0, 1.0, 1.0),
            repair_completion_days: SliderBounds::new(0.0, 7.0, 1.0, 1.0),
            find_tenant_days: SliderBounds::new(1.0, 90.0, 30.0, 1.0),
        }
    }

    /// Inputs positioned at every control's default.
    pub fn default_inputs(&self) -> RevenueLossInputs {
        RevenueLossInputs {
            unit_count: self.unit_count.default as u32,
            monthly_rent: self.monthly_rent.default,
            churn_basis: ChurnBasis::Duration {
                avg_tenancy_months: self.avg_tenancy_months.default,
            },
            turnover: TurnoverLength::Stages(TurnoverDelays {
                inspection_days: self.inspection_days.default,
                maintenance_callout_days: self.maintenance_callout_days.default,
                repair_completion_days: self.repair_completion_days.default,
                find_tenant_days: self.find_tenant_days.default,
                ..TurnoverDelays::default()
            }),
        }
    }

    /// Names of controls whose value sits outside its range, in display order.
    pub fn out_of_range(&self, inputs: &RevenueLossInputs) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if !self.unit_count.contains(f64::from(inputs.unit_count)) {
            fields.push("unit_count");
        }
        if !self.monthly_rent.contains(inputs.monthly_rent) {
            fields.push("monthly_rent");
        }
        if let ChurnBasis::Duration { avg_tenancy_months } = inputs.churn_basis {
            if !self.avg_tenancy_months.contains(avg_tenancy_months) {
                fields.push("avg_tenancy_months");
            }
        }
        if let TurnoverLength::Stages(delays) = &inputs.turnover {
            let checks = [
                (&self.inspection_days, delays.inspection_days, "inspection_days"),
                (
                    &self.maintenance_callout_days,
                    delays.maintenance_callout_days,
                    "maintenance_callout_days",
                ),
                (
                    &self.repair_completion_days,
                    delays.repair_completion_days,
                    "repair_completion_days",
                ),
                (&self.find_tenant_days, delays.find_tenant_days, "find_tenant_days"),
            ];
            fields.extend(
                checks
                    .into_iter()
                    .filter(|(bounds, value, _)| !bounds.contains(*value))
                    .map(|(_, _, name)| name),
            );
        }
        fields
    }
}

impl Default for InputBounds {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_inputs_match_standard_scenario() {
        let inputs = InputBounds::standard().default_inputs();
        assert_eq!(inputs, RevenueLossInputs::default_scenario());
        assert_eq!(inputs.turnover.total_days(), 34.0);
    }

    #[test]
    fn flags_values_outside_control_ranges() {
        let bounds = InputBounds::standard();
        let mut inputs = bounds.default_inputs();
        assert!(bounds.out_of_range(&inputs).is_empty());

        inputs.unit_count = 500;
        inputs.monthly_rent = 100.0;
        if let TurnoverLength::Stages(delays) = &mut inputs.turnover {
            delays.inspection_days = 14.0;
        }

        assert_eq!(
            bounds.out_of_range(&inputs),
            vec!["unit_count", "monthly_rent", "inspection_days"]
        );
    }
}
