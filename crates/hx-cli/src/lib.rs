//! CLI library components for the heading-extraction client.

pub mod logging;
pub mod report;
pub mod settings;
