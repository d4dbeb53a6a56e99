use crate::render::render_summary;
use clap::Args;
use serde_json::json;
use turnover_loss::config::{AppConfig, InputBounds};
use turnover_loss::error::AppError;
use turnover_loss::i18n::Language;
use turnover_loss::revenue::{
    ChurnBasis, NoticePeriod, RevenueLossInputs, RevenueLossReport, TurnoverDelays, TurnoverLength,
};

#[derive(Args, Debug, Default)]
pub(crate) struct CalculateArgs {
    /// Number of rentable units in the building
    #[arg(long)]
    pub(crate) units: Option<u32>,
    /// Monthly rent per unit
    #[arg(long)]
    pub(crate) rent: Option<f64>,
    /// Average tenancy length in months (default basis)
    #[arg(long, conflicts_with_all = ["renewing_units", "churn_rate"])]
    pub(crate) tenancy_months: Option<f64>,
    /// Units renewing this period, out of --units
    #[arg(long, conflicts_with = "churn_rate")]
    pub(crate) renewing_units: Option<u32>,
    /// Annual churn rate as a percentage (0-100)
    #[arg(long)]
    pub(crate) churn_rate: Option<f64>,
    /// Days for inspection after move-out
    #[arg(long)]
    pub(crate) inspection_days: Option<f64>,
    /// Days waiting for a maintenance callout
    #[arg(long)]
    pub(crate) callout_days: Option<f64>,
    /// Days to complete repairs
    #[arg(long)]
    pub(crate) repair_days: Option<f64>,
    /// Days to find a new tenant
    #[arg(long)]
    pub(crate) find_tenant_days: Option<f64>,
    /// Days spent on viewings
    #[arg(long, default_value_t = 0.0)]
    pub(crate) viewing_days: f64,
    /// Days to sign the new contract
    #[arg(long, default_value_t = 0.0)]
    pub(crate) contract_days: f64,
    /// Notice already served by the outgoing tenant, in days
    #[arg(long, conflicts_with = "notice_months")]
    pub(crate) notice_days: Option<f64>,
    /// Notice already served by the outgoing tenant, in months
    #[arg(long)]
    pub(crate) notice_months: Option<f64>,
    /// Label language (en or th); defaults to APP_LANGUAGE
    #[arg(long, value_parser = parse_language)]
    pub(crate) lang: Option<Language>,
    /// Print the result and summary as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

fn parse_language(raw: &str) -> Result<Language, String> {
    raw.parse::<Language>().map_err(|err| err.to_string())
}

impl CalculateArgs {
    /// Fills every omitted control with its default position.
    pub(crate) fn to_inputs(&self, bounds: &InputBounds) -> RevenueLossInputs {
        let unit_count = self.units.unwrap_or(bounds.unit_count.default as u32);

        let churn_basis = match (self.renewing_units, self.churn_rate) {
            (Some(renewing_units), _) => ChurnBasis::RenewalCount {
                renewing_units,
                total_units: unit_count,
            },
            (None, Some(churn_rate_pct)) => ChurnBasis::DirectRate { churn_rate_pct },
            (None, None) => ChurnBasis::Duration {
                avg_tenancy_months: self
                    .tenancy_months
                    .unwrap_or(bounds.avg_tenancy_months.default),
            },
        };

        let notice_period = match (self.notice_days, self.notice_months) {
            (Some(days), _) => Some(NoticePeriod::Days(days)),
            (None, Some(months)) => Some(NoticePeriod::Months(months)),
            (None, None) => None,
        };

        RevenueLossInputs {
            unit_count,
            monthly_rent: self.rent.unwrap_or(bounds.monthly_rent.default),
            churn_basis,
            turnover: TurnoverLength::Stages(TurnoverDelays {
                inspection_days: self
                    .inspection_days
                    .unwrap_or(bounds.inspection_days.default),
                maintenance_callout_days: self
                    .callout_days
                    .unwrap_or(bounds.maintenance_callout_days.default),
                repair_completion_days: self
                    .repair_days
                    .unwrap_or(bounds.repair_completion_days.default),
                find_tenant_days: self
                    .find_tenant_days
                    .unwrap_or(bounds.find_tenant_days.default),
                viewing_days: self.viewing_days,
                contract_days: self.contract_days,
                notice_period,
            }),
        }
    }
}

pub(crate) fn run_calculate(args: CalculateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let calculator = config.calculator;

    let inputs = args.to_inputs(&calculator.bounds);
    let lang = args.lang.unwrap_or(calculator.language);
    let result = inputs.compute()?;
    let summary = RevenueLossReport::new(&inputs, &result).summary(lang);

    if args.json {
        let payload = json!({
            "inputs": inputs,
            "result": result,
            "summary": summary,
        });
        println!("{payload:#}");
    } else {
        print!(
            "{}",
            render_summary(&summary, &result, &calculator.currency_symbol)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct Harness {
        #[command(flatten)]
        args: CalculateArgs,
    }

    fn parse(argv: &[&str]) -> CalculateArgs {
        let mut full = vec!["calculate"];
        full.extend_from_slice(argv);
        Harness::try_parse_from(full).expect("arguments parse").args
    }

    #[test]
    fn omitted_flags_fall_back_to_control_defaults() {
        let inputs = parse(&[]).to_inputs(&InputBounds::standard());
        assert_eq!(inputs, RevenueLossInputs::default_scenario());
    }

    #[test]
    fn renewing_units_use_building_size_as_total() {
        let inputs =
            parse(&["--units", "40", "--renewing-units", "30"]).to_inputs(&InputBounds::standard());
        assert_eq!(
            inputs.churn_basis,
            ChurnBasis::RenewalCount {
                renewing_units: 30,
                total_units: 40
            }
        );
    }

    #[test]
    fn notice_months_become_notice_period() {
        let inputs = parse(&["--notice-months", "1", "--viewing-days", "3"])
            .to_inputs(&InputBounds::standard());
        let delays = inputs.turnover.delays().expect("stage breakdown");
        assert_eq!(delays.notice_period, Some(NoticePeriod::Months(1.0)));
        assert_eq!(delays.viewing_days, 3.0);
    }

    #[test]
    fn language_flag_parses_codes() {
        assert_eq!(parse(&["--lang", "th"]).lang, Some(Language::Th));
    }
}
