use crate::domain::model::AwardsSummary;
use crate::domain::ports::AwardRepository;
use crate::domain::services::intervals::compute_producer_intervals;
use crate::utils::error::Result;
use chrono::Utc;

/// Runs every aggregate query against the catalogue.
pub fn build_summary<R: AwardRepository>(repository: &R) -> Result<AwardsSummary> {
    let wins = repository.winning_producers();
    tracing::debug!("Found {} winning producer credits", wins.len());

    let producer_intervals = compute_producer_intervals(&wins)?;

    Ok(AwardsSummary {
        producer_intervals,
        studios: repository.studios_by_wins(),
        years_with_multiple_winners: repository.years_with_multiple_winners(),
        movie_count: repository.movie_count(),
        winning_movie_count: repository.winning_movie_count(),
        generated_at: Utc::now(),
    })
}
