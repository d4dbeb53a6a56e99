use approx::assert_relative_eq;
use turnover_loss::i18n::Language;
use turnover_loss::revenue::report::views::{GuidanceLevel, MetricValue};
use turnover_loss::revenue::{ChurnBasis, RevenueLossInputs, RevenueLossReport, TurnoverLength};

#[test]
fn summary_mirrors_calculator_page_sections() {
    let inputs = RevenueLossInputs::default_scenario();
    let result = inputs.compute().expect("computes");
    let summary = RevenueLossReport::new(&inputs, &result).summary(Language::En);

    assert_eq!(summary.title, "Revenue Loss Simulator");
    assert_eq!(summary.revenue_distribution.len(), 2);
    assert_relative_eq!(
        summary.revenue_distribution[1].share_pct,
        result.percentage_loss,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        summary.occupancy_comparison[1].occupancy_pct,
        90.684_931,
        epsilon = 1e-5
    );

    let keys: Vec<_> = summary.metrics.iter().map(|entry| entry.key).collect();
    assert_eq!(
        keys,
        vec![
            "total_units",
            "average_stay",
            "churn",
            "turnover",
            "void_days",
            "monthly_rent",
            "effective_occ",
            "revenue",
            "revenue_loss",
            "percentage_loss",
        ]
    );
    assert_eq!(
        summary.metric("total_units").map(|entry| entry.value),
        Some(MetricValue::Count(30))
    );
    assert_eq!(summary.turnover_stages.len(), 6);
    assert!(summary
        .guidance
        .iter()
        .all(|note| note.level == GuidanceLevel::Info));
}

#[test]
fn thai_summary_falls_back_to_english_labels() {
    let inputs = RevenueLossInputs::default_scenario();
    let result = inputs.compute().expect("computes");
    let summary = RevenueLossReport::new(&inputs, &result).summary(Language::Th);

    assert_eq!(summary.language, Language::Th);
    assert_eq!(
        summary.metric("total_units").map(|entry| entry.label.as_str()),
        Some("จำนวนยูนิตทั้งหมด")
    );
    assert_eq!(
        summary.metric("void_days").map(|entry| entry.label.as_str()),
        Some("Void Days per Year")
    );
}

#[test]
fn out_of_bounds_summary_surfaces_warning_alongside_numbers() {
    let inputs = RevenueLossInputs {
        churn_basis: ChurnBasis::DirectRate {
            churn_rate_pct: 100.0,
        },
        turnover: TurnoverLength::Total { days: 400.0 },
        ..RevenueLossInputs::default_scenario()
    };
    let result = inputs.compute().expect("computes");
    let summary = RevenueLossReport::new(&inputs, &result).summary(Language::En);

    assert!(summary.occupancy_comparison[1].occupancy_pct < 0.0);
    assert_eq!(summary.guidance[0].key, "guidance_out_of_bounds");
    assert_eq!(summary.guidance[0].level, GuidanceLevel::Warning);

    let json = serde_json::to_value(&summary).expect("summary serializes");
    assert_eq!(json["metrics"][0]["value"]["unit"], "count");
    assert_eq!(json["language"], "en");
}
