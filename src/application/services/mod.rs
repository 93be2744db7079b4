//! Application services

pub mod configurator;

pub use configurator::{ConfiguratorService, Verdict};
