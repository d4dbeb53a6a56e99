use super::summary::RevenueLossReport;
use super::views::{GuidanceLevel, GuidanceNote};
use crate::i18n::{translate, Language};

pub(crate) fn generate_guidance(report: &RevenueLossReport<'_>, lang: Language) -> Vec<GuidanceNote> {
    let result = report.result;
    let mut keys = Vec::new();

    if result.occupancy_rate_out_of_bounds {
        keys.push(("guidance_out_of_bounds", GuidanceLevel::Warning));
    }

    if result.void_days_per_year == 0.0 {
        keys.push(("guidance_no_loss", GuidanceLevel::Info));
    } else {
        keys.push(("guidance_vacant_day_cost", GuidanceLevel::Info));
        keys.push(("guidance_reduce_turnover", GuidanceLevel::Info));

        if let Some(delays) = report.inputs.turnover.delays() {
            let make_ready = delays.make_ready_days();
            let letting = delays.net_letting_days();
            if letting > make_ready {
                keys.push(("guidance_letting_dominates", GuidanceLevel::Info));
            } else if make_ready > letting {
                keys.push(("guidance_make_ready_dominates", GuidanceLevel::Info));
            }
        }

        keys.push(("guidance_tenant_satisfaction", GuidanceLevel::Info));
    }

    keys.into_iter()
        .map(|(key, level)| GuidanceNote {
            key,
            level,
            text: translate(key, lang).into_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::revenue::domain::{ChurnBasis, RevenueLossInputs, TurnoverDelays, TurnoverLength};

    fn guidance_keys(inputs: &RevenueLossInputs) -> Vec<&'static str> {
        let result = inputs.compute().expect("inputs compute");
        let report = RevenueLossReport::new(inputs, &result);
        generate_guidance(&report, Language::En)
            .into_iter()
            .map(|note| note.key)
            .collect()
    }

    #[test]
    fn default_scenario_points_at_letting_delay() {
        let keys = guidance_keys(&RevenueLossInputs::default_scenario());
        assert_eq!(
            keys,
            vec![
                "guidance_vacant_day_cost",
                "guidance_reduce_turnover",
                "guidance_letting_dominates",
                "guidance_tenant_satisfaction",
            ]
        );
    }

    #[test]
    fn make_ready_heavy_turnover_is_called_out() {
        let mut inputs = RevenueLossInputs::default_scenario();
        inputs.turnover = TurnoverLength::Stages(TurnoverDelays {
            inspection_days: 7.0,
            maintenance_callout_days: 7.0,
            repair_completion_days: 7.0,
            find_tenant_days: 5.0,
            ..TurnoverDelays::default()
        });
        assert!(guidance_keys(&inputs).contains(&"guidance_make_ready_dominates"));
    }

    #[test]
    fn zero_void_days_reports_no_loss() {
        let mut inputs = RevenueLossInputs::default_scenario();
        inputs.churn_basis = ChurnBasis::DirectRate { churn_rate_pct: 0.0 };
        assert_eq!(guidance_keys(&inputs), vec!["guidance_no_loss"]);
    }

    #[test]
    fn out_of_bounds_warning_leads_the_list() {
        let mut inputs = RevenueLossInputs::default_scenario();
        inputs.churn_basis = ChurnBasis::Duration {
            avg_tenancy_months: 1.0,
        };
        inputs.turnover = TurnoverLength::Total { days: 60.0 };
        let result = inputs.compute().expect("computes");
        let notes = generate_guidance(&RevenueLossReport::new(&inputs, &result), Language::En);
        assert_eq!(notes[0].key, "guidance_out_of_bounds");
        assert_eq!(notes[0].level, GuidanceLevel::Warning);
    }
}
