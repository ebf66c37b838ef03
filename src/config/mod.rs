#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, LocalStorage};

pub const DEFAULT_ARCHIVE_NAME: &str = "awards_output.zip";
pub const DEFAULT_DELIMITER: char = ';';
