use crate::i18n::Language;
use serde::Serialize;

/// One slice of the retained-versus-lost revenue proportion chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub key: &'static str,
    pub label: String,
    pub value: f64,
    pub share_pct: f64,
}

/// One bar of the theoretical-versus-effective occupancy chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub key: &'static str,
    pub label: String,
    pub occupancy_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum MetricValue {
    Count(u32),
    Months(f64),
    Days(f64),
    Percent(f64),
    Currency(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricEntry {
    pub key: &'static str,
    pub label: String,
    pub value: MetricValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuidanceLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuidanceNote {
    pub key: &'static str,
    pub level: GuidanceLevel,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageEntry {
    pub key: &'static str,
    pub label: String,
    pub days: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueLossSummary {
    pub language: Language,
    pub title: String,
    pub revenue_distribution: Vec<ChartSlice>,
    pub occupancy_comparison: Vec<ChartBar>,
    pub metrics: Vec<MetricEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub turnover_stages: Vec<StageEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub guidance: Vec<GuidanceNote>,
}

impl RevenueLossSummary {
    pub fn metric(&self, key: &str) -> Option<&MetricEntry> {
        self.metrics.iter().find(|entry| entry.key == key)
    }
}
