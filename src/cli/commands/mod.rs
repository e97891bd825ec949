pub mod config;
pub mod dashboard;
pub mod export;
pub mod materials;
pub mod portal;
pub mod project;
pub mod projects;
pub mod record;
pub mod workers;

use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{Store, load};
use crate::utils::path::expand_tilde;

/// Build the store for this invocation: the configured dataset file when
/// set, otherwise the built-in demo data.
pub(crate) fn open_store(cfg: &Config) -> AppResult<Store> {
    if cfg.data_file.is_empty() {
        return Ok(Store::demo());
    }

    let path = expand_tilde(&cfg.data_file);
    let dataset = load::read_dataset(&path.to_string_lossy())?;
    Ok(Store::new(dataset))
}
