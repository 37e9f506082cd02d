//! Wiring a configured game: catalog + preferences + engine.

use std::sync::Arc;

use image::RgbaImage;
use tracing::{info, warn};

use crate::assets::{load_catalog, JsonFilePreferences};
use crate::config::Config;
use crate::core::{CatalogProvider, Result, RoundEngine};
use crate::types::{CatalogKind, Difficulty};

/// Engine type the terminal game runs.
pub type TerminalEngine = RoundEngine<RgbaImage>;

/// Load the catalog for `kind` and attach the on-disk preferences.
pub fn open_provider(config: &Config, kind: CatalogKind) -> Result<CatalogProvider> {
    let catalog = load_catalog(&config.assets_dir, kind)?;
    let prefs = JsonFilePreferences::open(&config.prefs_path);
    Ok(CatalogProvider::new(Arc::new(catalog), Box::new(prefs)))
}

/// Build an engine ready for `begin_session`.
///
/// `extended` overrides the stored preference (and persists it); a failed
/// write is logged and the override still applies.
pub fn build_engine(
    config: &Config,
    kind: CatalogKind,
    difficulty: Difficulty,
    extended: Option<bool>,
) -> Result<TerminalEngine> {
    let mut provider = open_provider(config, kind)?;
    if let Some(value) = extended {
        if let Err(e) = provider.set_include_extended(value) {
            warn!(error = %e, "could not persist extended-pool preference");
        }
    }

    let block_size = kind.block_size(difficulty);
    let seed = config.resolve_seed();
    info!(
        kind = kind.as_str(),
        entries = provider.catalog().len(),
        block_size,
        seed,
        "game configured"
    );
    Ok(RoundEngine::new(provider, block_size, seed))
}

/// Title shown in the side panel.
pub fn title(kind: CatalogKind, difficulty: Difficulty) -> String {
    match kind {
        CatalogKind::Characters => format!("Characters - {}", difficulty.label()),
        CatalogKind::Items => "Items".to_string(),
    }
}

/// Difficulty blurb under the title; item mode has a single fixed level.
pub fn subtitle(kind: CatalogKind, difficulty: Difficulty) -> Option<&'static str> {
    match kind {
        CatalogKind::Characters => Some(difficulty.description()),
        CatalogKind::Items => None,
    }
}
