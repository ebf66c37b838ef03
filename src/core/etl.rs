use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting awards ETL process");
        self.monitor.log_stats("Start");

        // Extract
        let movies = self.pipeline.extract().await?;
        tracing::info!("📥 Extracted {} movies", movies.len());
        self.monitor.log_stats("Extract");

        // Transform
        let summary = self.pipeline.transform(movies).await?;
        tracing::info!(
            "🔄 Summarized {} winning movies, {} studios with wins",
            summary.winning_movie_count,
            summary.studios.len()
        );
        for interval in &summary.producer_intervals.minimal {
            tracing::info!("⏱️ Shortest gap: {}", interval);
        }
        for interval in &summary.producer_intervals.maximal {
            tracing::info!("⏳ Longest gap: {}", interval);
        }
        self.monitor.log_stats("Transform");

        // Load
        let output_path = self.pipeline.load(summary).await?;
        tracing::info!("💾 Output saved to: {}", output_path);
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
