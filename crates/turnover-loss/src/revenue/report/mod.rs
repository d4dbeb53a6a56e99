mod insights;
mod summary;
pub mod views;

pub use summary::RevenueLossReport;

pub(crate) use insights::generate_guidance;
