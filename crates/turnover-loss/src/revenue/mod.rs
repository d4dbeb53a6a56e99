pub mod domain;
mod engine;
pub mod report;

pub use domain::{
    ChurnBasis, NoticePeriod, RevenueLossInputs, TurnoverDelays, TurnoverLength, TurnoverStage,
};
pub use engine::{
    compute, resolve_churn_rate, RevenueLossError, RevenueLossResult, RevenueLossWarning,
    DAYS_IN_YEAR, DAYS_PER_RENT_MONTH,
};
pub use report::RevenueLossReport;
