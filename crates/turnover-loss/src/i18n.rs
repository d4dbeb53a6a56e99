//! Display label lookup with ordered fallback.
//!
//! A key resolves against the active language table first, then the English
//! table, and finally becomes a bracketed placeholder so missing copy stays
//! visible on screen instead of disappearing.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Th,
}

impl Language {
    pub const FALLBACK: Language = Language::En;

    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Th => "th",
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::En => EN,
            Self::Th => TH,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language '{0}'")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "th" | "thai" => Ok(Self::Th),
            _ => Err(UnknownLanguage(value.to_string())),
        }
    }
}

/// Resolves `key` for `lang`, falling back to English and then to `[key]`.
pub fn translate(key: &str, lang: Language) -> Cow<'static, str> {
    lookup(lang.table(), key)
        .or_else(|| lookup(Language::FALLBACK.table(), key))
        .map(Cow::Borrowed)
        .unwrap_or_else(|| Cow::Owned(format!("[{key}]")))
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, text)| *text)
}

const EN: &[(&str, &str)] = &[
    ("title", "Revenue Loss Simulator"),
    ("caption", "Understand the hidden cost of tenant turnover"),
    ("params_header", "Building Details"),
    ("turnover_header", "Tenant Turnover"),
    ("vacancy_breakdown", "Vacancy Breakdown"),
    ("results_header", "Results"),
    ("flats", "Total number of rental units"),
    ("rent", "Monthly rent per unit"),
    ("let_duration", "Average Contract Duration (months)"),
    ("turnover", "Average days vacant per turnover"),
    ("churn", "Annual Churn Rate"),
    ("effective_occ", "Effective Occupancy"),
    ("void_days", "Void Days per Year"),
    ("revenue", "Annual Revenue"),
    ("total_units", "Total Units"),
    ("average_stay", "Average Tenant Stay"),
    ("monthly_rent", "Monthly Rent"),
    ("revenue_loss", "Total Annual Revenue Loss"),
    ("percentage_loss", "Share of Potential Revenue Lost"),
    ("financial_summary", "Financial Summary"),
    ("detailed_metrics", "Detailed Metrics"),
    ("revenue_distribution", "Annual Revenue Distribution"),
    ("retained_revenue", "Retained Revenue"),
    ("lost_revenue", "Lost Revenue"),
    ("occupancy_comparison", "Occupancy Comparison"),
    ("theoretical_occupancy", "Theoretical Occupancy"),
    ("effective_occupancy", "Effective Occupancy"),
    ("guidance_header", "What This Means"),
    ("stage_inspection", "Days for inspection"),
    ("stage_maintenance_callout", "Days waiting for maintenance"),
    ("stage_repair_completion", "Days to complete repairs"),
    ("stage_find_tenant", "Days to find new tenant"),
    ("stage_viewing", "Days for viewings"),
    ("stage_contract", "Days to sign contract"),
    ("stage_notice_offset", "Notice period already served"),
    ("guidance_vacant_day_cost", "Every vacant day costs you money"),
    (
        "guidance_reduce_turnover",
        "Reducing turnover time can significantly boost your revenue",
    ),
    (
        "guidance_tenant_satisfaction",
        "Invest in tenant satisfaction and quick maintenance",
    ),
    (
        "guidance_letting_dominates",
        "Most vacant days are spent finding and signing the next tenant",
    ),
    (
        "guidance_make_ready_dominates",
        "Most vacant days are spent preparing the unit between tenancies",
    ),
    (
        "guidance_no_loss",
        "No turnover vacancy is projected for this scenario",
    ),
    (
        "guidance_out_of_bounds",
        "Projected void days exceed the available unit-days; occupancy is below zero",
    ),
    ("error_invalid_input", "Some inputs are invalid"),
    ("error_division_undefined", "Revenue loss share is undefined for these inputs"),
];

// Deliberately partial: missing keys resolve through the English table.
const TH: &[(&str, &str)] = &[
    ("title", "เครื่องจำลองการสูญเสียรายได้"),
    ("caption", "ทำความเข้าใจต้นทุนแฝงจากการเปลี่ยนผู้เช่า"),
    ("params_header", "ตั้งค่าการจำลอง"),
    ("results_header", "ผลลัพธ์"),
    ("flats", "จำนวนยูนิต"),
    ("rent", "ค่าเช่าต่อเดือน (บาท)"),
    ("turnover", "จำนวนวันที่ว่างต่อการเปลี่ยนผู้เช่า"),
    ("churn", "อัตราการเปลี่ยนผู้เช่า (%)"),
    ("total_units", "จำนวนยูนิตทั้งหมด"),
    ("monthly_rent", "ค่าเช่ารายเดือน"),
    ("revenue_loss", "รายได้ที่สูญเสียต่อปี"),
    ("retained_revenue", "รายได้ที่รักษาไว้"),
    ("lost_revenue", "รายได้ที่สูญเสีย"),
    ("guidance_vacant_day_cost", "ทุกวันที่ห้องว่างทำให้คุณเสียเงิน"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_active_language_first() {
        assert_eq!(translate("flats", Language::Th), "จำนวนยูนิต");
        assert_eq!(translate("flats", Language::En), "Total number of rental units");
    }

    #[test]
    fn falls_back_to_english_when_key_missing() {
        assert_eq!(translate("void_days", Language::Th), "Void Days per Year");
    }

    #[test]
    fn marks_unknown_keys_with_placeholder() {
        assert_eq!(translate("does_not_exist", Language::Th), "[does_not_exist]");
        assert_eq!(translate("does_not_exist", Language::En), "[does_not_exist]");
    }

    #[test]
    fn parses_language_codes_and_names() {
        assert_eq!("TH".parse::<Language>(), Ok(Language::Th));
        assert_eq!(" english ".parse::<Language>(), Ok(Language::En));
        assert_eq!(
            "fr".parse::<Language>(),
            Err(UnknownLanguage("fr".to_string()))
        );
    }

    #[test]
    fn every_thai_key_exists_in_english() {
        for (key, _) in TH {
            assert!(
                EN.iter().any(|(candidate, _)| candidate == key),
                "thai key {key} missing from english table"
            );
        }
    }
}
