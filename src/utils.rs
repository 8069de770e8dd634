use std::path::PathBuf;

const CACHE_DIR_NAME: &str = "airquality";

/// Default location of the parquet dataset cache, under the platform cache
/// directory.
pub(crate) fn default_cache_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(CACHE_DIR_NAME))
}
