use super::super::domain::{ChurnBasis, RevenueLossInputs};
use super::super::engine::RevenueLossResult;
use super::views::{ChartBar, ChartSlice, MetricEntry, MetricValue, RevenueLossSummary, StageEntry};
use crate::i18n::{translate, Language};

/// Pairs the inputs of a computation with its result for display.
#[derive(Debug, Clone, Copy)]
pub struct RevenueLossReport<'a> {
    pub inputs: &'a RevenueLossInputs,
    pub result: &'a RevenueLossResult,
}

impl<'a> RevenueLossReport<'a> {
    pub fn new(inputs: &'a RevenueLossInputs, result: &'a RevenueLossResult) -> Self {
        Self { inputs, result }
    }

    pub fn summary(&self, lang: Language) -> RevenueLossSummary {
        RevenueLossSummary {
            language: lang,
            title: translate("title", lang).into_owned(),
            revenue_distribution: self.revenue_distribution(lang),
            occupancy_comparison: self.occupancy_comparison(lang),
            metrics: self.metrics(lang),
            turnover_stages: self.turnover_stages(lang),
            guidance: super::generate_guidance(self, lang),
        }
    }

    fn revenue_distribution(&self, lang: Language) -> Vec<ChartSlice> {
        let result = self.result;
        let share = |value: f64| (value / result.theoretical_revenue) * 100.0;

        vec![
            ChartSlice {
                key: "retained_revenue",
                label: translate("retained_revenue", lang).into_owned(),
                value: result.effective_revenue,
                share_pct: share(result.effective_revenue),
            },
            ChartSlice {
                key: "lost_revenue",
                label: translate("lost_revenue", lang).into_owned(),
                value: result.revenue_loss,
                share_pct: share(result.revenue_loss),
            },
        ]
    }

    fn occupancy_comparison(&self, lang: Language) -> Vec<ChartBar> {
        vec![
            ChartBar {
                key: "theoretical_occupancy",
                label: translate("theoretical_occupancy", lang).into_owned(),
                occupancy_pct: 100.0,
            },
            ChartBar {
                key: "effective_occupancy",
                label: translate("effective_occupancy", lang).into_owned(),
                occupancy_pct: self.result.effective_occupancy_rate * 100.0,
            },
        ]
    }

    fn metrics(&self, lang: Language) -> Vec<MetricEntry> {
        let result = self.result;
        let average_stay = match self.inputs.churn_basis {
            ChurnBasis::Duration { avg_tenancy_months } => {
                Some(("average_stay", MetricValue::Months(avg_tenancy_months)))
            }
            ChurnBasis::RenewalCount { .. } | ChurnBasis::DirectRate { .. } => None,
        };

        [
            Some(("total_units", MetricValue::Count(self.inputs.unit_count))),
            average_stay,
            Some(("churn", MetricValue::Percent(result.churn_rate_pct))),
            Some(("turnover", MetricValue::Days(result.turnover_days))),
            Some(("void_days", MetricValue::Days(result.void_days_per_year))),
            Some(("monthly_rent", MetricValue::Currency(self.inputs.monthly_rent))),
            Some((
                "effective_occ",
                MetricValue::Percent(result.effective_occupancy_rate * 100.0),
            )),
            Some(("revenue", MetricValue::Currency(result.effective_revenue))),
            Some(("revenue_loss", MetricValue::Currency(result.revenue_loss))),
            Some(("percentage_loss", MetricValue::Percent(result.percentage_loss))),
        ]
        .into_iter()
        .flatten()
        .map(|(key, value)| MetricEntry {
            key,
            label: translate(key, lang).into_owned(),
            value,
        })
        .collect()
    }

    fn turnover_stages(&self, lang: Language) -> Vec<StageEntry> {
        self.inputs
            .turnover
            .delays()
            .map(|delays| {
                delays
                    .stages()
                    .into_iter()
                    .map(|(stage, days)| StageEntry {
                        key: stage.label_key(),
                        label: translate(stage.label_key(), lang).into_owned(),
                        days,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::revenue::domain::TurnoverLength;
    use approx::assert_relative_eq;

    #[test]
    fn distribution_shares_add_up_to_whole() {
        let inputs = RevenueLossInputs::default_scenario();
        let result = inputs.compute().expect("default scenario computes");
        let summary = RevenueLossReport::new(&inputs, &result).summary(Language::En);

        let total: f64 = summary
            .revenue_distribution
            .iter()
            .map(|slice| slice.share_pct)
            .sum();
        assert_relative_eq!(total, 100.0, epsilon = 1e-9);
        assert_eq!(summary.revenue_distribution[1].label, "Lost Revenue");
    }

    #[test]
    fn average_stay_only_listed_for_duration_basis() {
        let mut inputs = RevenueLossInputs::default_scenario();
        inputs.churn_basis = ChurnBasis::DirectRate {
            churn_rate_pct: 40.0,
        };
        let result = inputs.compute().expect("valid");
        let summary = RevenueLossReport::new(&inputs, &result).summary(Language::En);
        assert!(summary.metric("average_stay").is_none());
        assert!(summary.metric("churn").is_some());
    }

    #[test]
    fn stages_omitted_for_pre_summed_turnover() {
        let mut inputs = RevenueLossInputs::default_scenario();
        inputs.turnover = TurnoverLength::Total { days: 20.0 };
        let result = inputs.compute().expect("valid");
        let summary = RevenueLossReport::new(&inputs, &result).summary(Language::Th);
        assert!(summary.turnover_stages.is_empty());
        assert_eq!(summary.occupancy_comparison[0].label, "Theoretical Occupancy");
    }
}
