//! Revenue loss engine for tenant turnover in multi-unit residential buildings.
//!
//! The [`revenue`] module holds the pure calculation pipeline; [`i18n`] resolves
//! display labels for callers that render the results.

pub mod config;
pub mod error;
pub mod i18n;
pub mod revenue;
pub mod telemetry;
