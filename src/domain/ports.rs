use crate::domain::model::{AwardsSummary, MovieRecord, StudioWins, WinRecord, YearWinners};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Output sink; paths are relative to the configured output location.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// Local path or http(s) URL of the award catalogue.
    fn source_location(&self) -> &str;
    fn csv_delimiter(&self) -> u8;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    /// Zip archive name when outputs should be bundled.
    fn archive_name(&self) -> Option<&str>;
}

/// Read access to the normalized award catalogue.
pub trait AwardRepository {
    fn movie_count(&self) -> usize;
    fn winning_movie_count(&self) -> usize;
    /// Every (producer, year) pair of a winning movie, ordered by producer then year.
    fn winning_producers(&self) -> Vec<WinRecord>;
    fn studios_by_wins(&self) -> Vec<StudioWins>;
    fn years_with_multiple_winners(&self) -> Vec<YearWinners>;
    fn movies_by_year(&self, year: i32) -> Vec<MovieRecord>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<MovieRecord>>;
    async fn transform(&self, data: Vec<MovieRecord>) -> Result<AwardsSummary>;
    async fn load(&self, result: AwardsSummary) -> Result<String>;
}
