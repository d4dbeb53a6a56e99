use serde::{Deserialize, Serialize};

/// Months of notice are converted to days at the same 30-day month used for rent.
pub const DAYS_PER_NOTICE_MONTH: f64 = 30.0;

/// Mutually exclusive ways of expressing how often tenancies end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "basis", rename_all = "snake_case")]
pub enum ChurnBasis {
    /// Average tenancy length; churn is `12 / months` turnovers per unit-year.
    Duration { avg_tenancy_months: f64 },
    /// Units renewing out of the building's units for the period.
    RenewalCount { renewing_units: u32, total_units: u32 },
    /// Churn percentage supplied as-is.
    DirectRate { churn_rate_pct: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnoverStage {
    Inspection,
    MaintenanceCallout,
    RepairCompletion,
    FindTenant,
    Viewing,
    Contract,
    NoticeOffset,
}

impl TurnoverStage {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Inspection,
            Self::MaintenanceCallout,
            Self::RepairCompletion,
            Self::FindTenant,
            Self::Viewing,
            Self::Contract,
            Self::NoticeOffset,
        ]
    }

    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Inspection => "stage_inspection",
            Self::MaintenanceCallout => "stage_maintenance_callout",
            Self::RepairCompletion => "stage_repair_completion",
            Self::FindTenant => "stage_find_tenant",
            Self::Viewing => "stage_viewing",
            Self::Contract => "stage_contract",
            Self::NoticeOffset => "stage_notice_offset",
        }
    }

    pub const fn field(self) -> &'static str {
        match self {
            Self::Inspection => "inspection_days",
            Self::MaintenanceCallout => "maintenance_callout_days",
            Self::RepairCompletion => "repair_completion_days",
            Self::FindTenant => "find_tenant_days",
            Self::Viewing => "viewing_days",
            Self::Contract => "contract_days",
            Self::NoticeOffset => "notice_period",
        }
    }
}

/// Notice already served by the outgoing tenant while the next one is found.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticePeriod {
    Days(f64),
    Months(f64),
}

impl NoticePeriod {
    pub fn days(self) -> f64 {
        match self {
            NoticePeriod::Days(days) => days,
            NoticePeriod::Months(months) => months * DAYS_PER_NOTICE_MONTH,
        }
    }
}

/// Sequential vacancy stages between one tenant leaving and the next moving in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnoverDelays {
    pub inspection_days: f64,
    pub maintenance_callout_days: f64,
    pub repair_completion_days: f64,
    pub find_tenant_days: f64,
    pub viewing_days: f64,
    pub contract_days: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_period: Option<NoticePeriod>,
}

impl TurnoverDelays {
    pub fn make_ready_days(&self) -> f64 {
        self.inspection_days + self.maintenance_callout_days + self.repair_completion_days
    }

    pub fn letting_days(&self) -> f64 {
        self.find_tenant_days + self.viewing_days + self.contract_days
    }

    /// Letting days left after the notice offset, never below zero.
    pub fn net_letting_days(&self) -> f64 {
        match self.notice_period {
            Some(notice) => (self.letting_days() - notice.days()).max(0.0),
            None => self.letting_days(),
        }
    }

    pub fn total_days(&self) -> f64 {
        self.make_ready_days() + self.net_letting_days()
    }

    /// Stage durations in order. The notice offset only appears when set.
    pub fn stages(&self) -> Vec<(TurnoverStage, f64)> {
        TurnoverStage::ordered()
            .into_iter()
            .filter_map(|stage| self.stage_days(stage).map(|days| (stage, days)))
            .collect()
    }

    pub fn stage_days(&self, stage: TurnoverStage) -> Option<f64> {
        match stage {
            TurnoverStage::Inspection => Some(self.inspection_days),
            TurnoverStage::MaintenanceCallout => Some(self.maintenance_callout_days),
            TurnoverStage::RepairCompletion => Some(self.repair_completion_days),
            TurnoverStage::FindTenant => Some(self.find_tenant_days),
            TurnoverStage::Viewing => Some(self.viewing_days),
            TurnoverStage::Contract => Some(self.contract_days),
            TurnoverStage::NoticeOffset => self.notice_period.map(NoticePeriod::days),
        }
    }
}

/// How the caller describes vacancy length per turnover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnoverLength {
    Stages(TurnoverDelays),
    Total { days: f64 },
}

impl TurnoverLength {
    pub fn total_days(&self) -> f64 {
        match self {
            TurnoverLength::Stages(delays) => delays.total_days(),
            TurnoverLength::Total { days } => *days,
        }
    }

    pub fn delays(&self) -> Option<&TurnoverDelays> {
        match self {
            TurnoverLength::Stages(delays) => Some(delays),
            TurnoverLength::Total { .. } => None,
        }
    }
}

/// Everything the engine needs for one computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueLossInputs {
    pub unit_count: u32,
    pub monthly_rent: f64,
    pub churn_basis: ChurnBasis,
    pub turnover: TurnoverLength,
}

impl RevenueLossInputs {
    /// 30 units at 5000 per month, 12-month tenancies, 2+1+1+30 vacant days.
    pub fn default_scenario() -> Self {
        Self {
            unit_count: 30,
            monthly_rent: 5_000.0,
            churn_basis: ChurnBasis::Duration {
                avg_tenancy_months: 12.0,
            },
            turnover: TurnoverLength::Stages(TurnoverDelays {
                inspection_days: 2.0,
                maintenance_callout_days: 1.0,
                repair_completion_days: 1.0,
                find_tenant_days: 30.0,
                ..TurnoverDelays::default()
            }),
        }
    }
}
