use std::sync::Arc;

use crate::config::Config;
use crate::matching::aliases::AliasTable;
use crate::store::{JobCatalog, ProfileStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub profiles: Arc<dyn ProfileStore>,
    pub jobs: Arc<dyn JobCatalog>,
    /// Skill alias families used by every comparison. Default: the built-in table.
    pub aliases: &'static AliasTable,
}
