pub mod intervals;
pub mod summary;

pub use intervals::compute_producer_intervals;
pub use summary::build_summary;
