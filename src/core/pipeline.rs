use crate::adapters::{parse_catalogue, AwardCatalogue, SourceLocation};
use crate::core::{AwardsSummary, ConfigProvider, MovieRecord, Pipeline, Storage};
use crate::domain::model::IntervalReport;
use crate::domain::services::build_summary;
use crate::utils::error::Result;
use reqwest::Client;
use serde::Serialize;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const INTERVALS_FILE: &str = "producer_intervals";
pub const STUDIOS_FILE: &str = "studios";
pub const YEARS_FILE: &str = "multiple_winner_years";
pub const SUMMARY_FILE: &str = "summary.json";

pub struct AwardsPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> AwardsPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for AwardsPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<MovieRecord>> {
        let location = SourceLocation::parse(self.config.source_location())?;
        let data = location.fetch(&self.client).await?;
        tracing::debug!("Read {} bytes of catalogue data", data.len());

        parse_catalogue(&data, self.config.csv_delimiter())
    }

    async fn transform(&self, data: Vec<MovieRecord>) -> Result<AwardsSummary> {
        let catalogue = AwardCatalogue::from_movies(data);
        tracing::debug!(
            studios = catalogue.studio_count(),
            producers = catalogue.producer_count(),
            "Catalogue loaded"
        );
        build_summary(&catalogue)
    }

    async fn load(&self, result: AwardsSummary) -> Result<String> {
        let files = render_outputs(&result, self.config.output_formats())?;

        if let Some(archive_name) = self.config.archive_name() {
            tracing::debug!("Creating ZIP file with {} files", files.len());
            let zip_data = bundle(&files)?;

            tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
            self.storage.write_file(archive_name, &zip_data).await?;
            return Ok(format!("{}/{}", self.config.output_path(), archive_name));
        }

        for (name, data) in &files {
            tracing::debug!("Writing {} ({} bytes)", name, data.len());
            self.storage.write_file(name, data).await?;
        }
        Ok(self.config.output_path().to_string())
    }
}

/// 依輸出格式產生檔案 (檔名, 內容)，重複的格式只輸出一次
pub fn render_outputs(summary: &AwardsSummary, formats: &[String]) -> Result<Vec<(String, Vec<u8>)>> {
    let mut files = Vec::new();

    for (i, format) in formats.iter().enumerate() {
        if formats[..i].contains(format) {
            tracing::warn!("Ignoring repeated output format: {}", format);
            continue;
        }

        match format.as_str() {
            "json" => {
                files.push((
                    format!("{}.json", INTERVALS_FILE),
                    serde_json::to_vec_pretty(&summary.producer_intervals)?,
                ));
                files.push((
                    format!("{}.json", STUDIOS_FILE),
                    serde_json::to_vec_pretty(&summary.studios)?,
                ));
                files.push((
                    format!("{}.json", YEARS_FILE),
                    serde_json::to_vec_pretty(&summary.years_with_multiple_winners)?,
                ));
                files.push((SUMMARY_FILE.to_string(), serde_json::to_vec_pretty(summary)?));
            }
            "csv" => {
                files.push((
                    format!("{}.csv", INTERVALS_FILE),
                    to_csv(&interval_rows(&summary.producer_intervals))?,
                ));
                files.push((format!("{}.csv", STUDIOS_FILE), to_csv(&summary.studios)?));
                files.push((
                    format!("{}.csv", YEARS_FILE),
                    to_csv(&summary.years_with_multiple_winners)?,
                ));
            }
            other => tracing::warn!("Skipping unsupported output format: {}", other),
        }
    }

    Ok(files)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct IntervalRow<'a> {
    kind: &'static str,
    producer: &'a str,
    interval: i32,
    previous_win: i32,
    following_win: i32,
}

fn interval_rows(report: &IntervalReport) -> Vec<IntervalRow<'_>> {
    let tagged = report
        .minimal
        .iter()
        .map(|interval| ("min", interval))
        .chain(report.maximal.iter().map(|interval| ("max", interval)));

    tagged
        .map(|(kind, interval)| IntervalRow {
            kind,
            producer: interval.producer(),
            interval: interval.gap_years(),
            previous_win: interval.earlier_win(),
            following_win: interval.later_win(),
        })
        .collect()
}

fn to_csv<T: Serialize>(rows: &[T]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.into_inner().map_err(|e| e.into_error().into())
}

fn bundle(files: &[(String, Vec<u8>)]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for (name, data) in files {
        zip.start_file::<_, ()>(name.as_str(), FileOptions::default())?;
        zip.write_all(data)?;
    }
    // 完成並取回底層 Vec<u8>
    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}
