use std::path::Path;
use std::sync::OnceLock;

use tracing::info;

use crate::data::dataset::Dataset;
use crate::data::loader::load_listings;
use crate::errors::LoadError;

/// Compute-once holder for the parsed dataset. The first successful load
/// is kept for the life of the process; a failed load leaves the cache
/// empty so the caller can report it. `new` is const so the cache can
/// live in a `static` and hand out `&'static Dataset`.
pub struct DatasetCache {
    slot: OnceLock<Dataset>,
}

impl DatasetCache {
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Returns the cached dataset, loading it from `path` on first use.
    /// Once filled, later calls ignore `path`.
    pub fn get_or_load(&self, path: &Path) -> Result<&Dataset, LoadError> {
        if let Some(ds) = self.slot.get() {
            return Ok(ds);
        }

        let dataset = load_listings(path)?;
        info!("Cached {} listings from {}", dataset.len(), path.display());

        // Another thread may have raced us here; either copy is identical.
        Ok(self.slot.get_or_init(|| dataset))
    }
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new()
    }
}
