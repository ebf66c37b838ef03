use crate::config::DEFAULT_ARCHIVE_NAME;
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_delimiter, validate_output_formats, validate_path, validate_source, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "award-intervals")]
#[command(about = "Producer win intervals and studio/year aggregates from the worst-movie award catalogue")]
pub struct CliConfig {
    /// Catalogue location: a local path or an http(s) URL
    #[arg(long, default_value = "movielist.csv")]
    pub source: String,

    #[arg(long, default_value_t = ';')]
    pub delimiter: char,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Output formats, comma separated (json, csv)
    #[arg(long, value_delimiter = ',', default_value = "json")]
    pub formats: Vec<String>,

    #[arg(long, help = "Bundle all outputs into a single zip archive")]
    pub zip: bool,

    /// TOML config file; replaces the options above when given
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn source_location(&self) -> &str {
        &self.source
    }

    fn csv_delimiter(&self) -> u8 {
        u8::try_from(self.delimiter).unwrap_or(b';')
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }

    fn archive_name(&self) -> Option<&str> {
        self.zip.then_some(DEFAULT_ARCHIVE_NAME)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_source("source", &self.source)?;
        validate_delimiter("delimiter", self.delimiter)?;
        validate_path("output_path", &self.output_path)?;
        validate_output_formats("formats", &self.formats)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}
