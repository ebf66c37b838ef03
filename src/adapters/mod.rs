// Adapters layer: concrete implementations for external systems (catalogue file, storage, source fetch).

pub mod catalogue_csv;
pub mod memory_catalogue;
pub mod source;

pub use catalogue_csv::{parse_catalogue, split_names};
pub use memory_catalogue::AwardCatalogue;
pub use source::SourceLocation;
