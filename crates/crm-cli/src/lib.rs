//! CLI library components for the HubSpot → Reevo converter.

pub mod config;
pub mod logging;
pub mod pipeline;
