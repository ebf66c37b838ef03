pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, LocalStorage};
pub use config::TomlConfig;

pub use adapters::AwardCatalogue;
pub use core::{etl::EtlEngine, pipeline::AwardsPipeline};
pub use domain::model::{IntervalReport, ProducerInterval, WinRecord};
pub use domain::services::compute_producer_intervals;
pub use utils::error::{EtlError, Result};
