pub mod cache;
pub mod dataset;
pub mod loader;

pub use cache::DatasetCache;
pub use dataset::{Dataset, LoadReport};
