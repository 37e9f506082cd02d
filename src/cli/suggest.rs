use anyhow::Result;

use pixel_guess::core::rank;
use pixel_guess::types::CatalogKind;
use pixel_guess::{open_provider, Config};

pub fn suggest_command(config: &Config, query: &str, kind: CatalogKind) -> Result<()> {
    let provider = open_provider(config, kind)?;
    let pool = provider.suggestion_pool();
    for name in rank(query, &pool) {
        println!("{name}");
    }
    Ok(())
}
