use std::fmt;
use turnover_loss::i18n::translate;
use turnover_loss::revenue::report::views::{
    GuidanceLevel, MetricEntry, MetricValue, RevenueLossSummary,
};
use turnover_loss::revenue::RevenueLossResult;

/// Whole-unit amount with thousands separators, e.g. `฿1,825,000`.
pub(crate) fn format_currency(symbol: &str, amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{sign}{symbol}{grouped}")
}

fn format_metric(entry: &MetricEntry, symbol: &str) -> String {
    match entry.value {
        MetricValue::Count(count) => count.to_string(),
        MetricValue::Months(months) => format!("{months} months"),
        MetricValue::Days(days) => format!("{days:.0}"),
        MetricValue::Percent(pct) if entry.key == "effective_occ" => format!("{pct:.2}%"),
        MetricValue::Percent(pct) => format!("{pct:.1}%"),
        MetricValue::Currency(amount) => format_currency(symbol, amount),
    }
}

/// Plain-text rendering of a summary, section by section.
pub(crate) struct SummaryText<'a> {
    summary: &'a RevenueLossSummary,
    result: &'a RevenueLossResult,
    currency_symbol: &'a str,
}

pub(crate) fn render_summary<'a>(
    summary: &'a RevenueLossSummary,
    result: &'a RevenueLossResult,
    currency_symbol: &'a str,
) -> SummaryText<'a> {
    SummaryText {
        summary,
        result,
        currency_symbol,
    }
}

impl fmt::Display for SummaryText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary;
        let symbol = self.currency_symbol;
        let lang = summary.language;

        writeln!(f, "{}", summary.title)?;
        writeln!(f, "{}", translate("caption", lang))?;

        writeln!(f, "\n{}", translate("financial_summary", lang))?;
        writeln!(
            f,
            "- {}: {} ({:.1}%)",
            translate("revenue_loss", lang),
            format_currency(symbol, self.result.revenue_loss),
            self.result.percentage_loss
        )?;

        writeln!(f, "\n{}", translate("revenue_distribution", lang))?;
        for slice in &summary.revenue_distribution {
            writeln!(
                f,
                "- {}: {} ({:.1}%)",
                slice.label,
                format_currency(symbol, slice.value),
                slice.share_pct
            )?;
        }

        writeln!(f, "\n{}", translate("occupancy_comparison", lang))?;
        for bar in &summary.occupancy_comparison {
            writeln!(f, "- {}: {:.2}%", bar.label, bar.occupancy_pct)?;
        }

        if !summary.turnover_stages.is_empty() {
            writeln!(f, "\n{}", translate("vacancy_breakdown", lang))?;
            for stage in &summary.turnover_stages {
                writeln!(f, "- {}: {}", stage.label, stage.days)?;
            }
        }

        writeln!(f, "\n{}", translate("detailed_metrics", lang))?;
        for entry in &summary.metrics {
            writeln!(f, "- {}: {}", entry.label, format_metric(entry, symbol))?;
        }

        if !summary.guidance.is_empty() {
            writeln!(f, "\n{}", translate("guidance_header", lang))?;
            for note in &summary.guidance {
                let marker = match note.level {
                    GuidanceLevel::Warning => "! ",
                    GuidanceLevel::Info => "",
                };
                writeln!(f, "- {marker}{}", note.text)?;
            }
        }

        Ok(())
    }
}
