//! Catalog providers - guessable entry pools for one game mode
//!
//! A [`Catalog`] is the parsed, immutable content of a catalog data file
//! (plus, for characters, the flat display-name list used by the
//! autocomplete). A [`CatalogProvider`] wraps one catalog together with the
//! player's "include extended pool" preference and answers:
//!
//! - which entries are currently guessable ([`CatalogProvider::filtered`])
//! - a uniform random draw from that pool
//! - where an entry's image lives
//! - which names the autocomplete should offer

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{GameError, Result};
use crate::rng::SimpleRng;
use crate::types::{CatalogEntry, CatalogKind};

/// Key/value store for boolean player preferences.
///
/// Missing keys read as `false`.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> bool;
    fn set(&mut self, key: &str, value: bool) -> Result<()>;
}

/// In-memory preference store (tests, and hosts without persistence).
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, bool>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: bool) -> Self {
        self.values.insert(key.to_string(), value);
        self
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> bool {
        self.values.get(key).copied().unwrap_or(false)
    }

    fn set(&mut self, key: &str, value: bool) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    images: Vec<CatalogEntry>,
}

/// Parsed catalog content, shared read-only for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    kind: CatalogKind,
    entries: Vec<CatalogEntry>,
    names: Option<Vec<String>>,
}

impl Catalog {
    pub fn new(kind: CatalogKind, entries: Vec<CatalogEntry>) -> Self {
        Self {
            kind,
            entries,
            names: None,
        }
    }

    /// Attach the flat display-name list used for suggestions.
    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.names = Some(names);
        self
    }

    /// Parse a catalog document: `{"images": [{file, name|champion, category}, ...]}`.
    pub fn from_json(kind: CatalogKind, json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)
            .map_err(|e| GameError::data_load(format!("{} catalog", kind.as_str()), e))?;
        Ok(Self::new(kind, file.images))
    }

    /// Parse a flat JSON array of display names.
    pub fn names_from_json(json: &str) -> Result<Vec<String>> {
        serde_json::from_str(json).map_err(|e| GameError::data_load("name list", e))
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn names(&self) -> Option<&[String]> {
        self.names.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Owner of the guessable pool for one game mode.
pub struct CatalogProvider {
    catalog: Arc<Catalog>,
    prefs: Box<dyn PreferenceStore>,
}

impl CatalogProvider {
    pub fn new(catalog: Arc<Catalog>, prefs: Box<dyn PreferenceStore>) -> Self {
        Self { catalog, prefs }
    }

    pub fn kind(&self) -> CatalogKind {
        self.catalog.kind()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Whether extended-pool entries are currently guessable.
    pub fn include_extended(&self) -> bool {
        self.prefs.get(self.kind().preference_key())
    }

    /// Persist the extended-pool preference; takes effect on the next draw.
    pub fn set_include_extended(&mut self, value: bool) -> Result<()> {
        let key = self.kind().preference_key();
        self.prefs.set(key, value)
    }

    /// Entries guessable under the current preference, in catalog order.
    pub fn filtered(&self) -> Vec<&CatalogEntry> {
        let include_extended = self.include_extended();
        self.catalog
            .entries()
            .iter()
            .filter(|e| include_extended || !e.category.is_extended())
            .collect()
    }

    /// Draw one entry uniformly from the current filtered pool.
    pub fn random_entry(&self, rng: &mut SimpleRng) -> Result<CatalogEntry> {
        let pool = self.filtered();
        rng.pick(&pool)
            .map(|e| (*e).clone())
            .ok_or(GameError::EmptyPool {
                kind: self.kind().as_str(),
            })
    }

    /// Asset-relative image path: category folder + file name.
    pub fn image_path(&self, entry: &CatalogEntry) -> String {
        format!("{}/{}", self.kind().image_folder(entry.category), entry.file)
    }

    /// Names the autocomplete offers.
    ///
    /// Characters use the catalog's flat name list when one was loaded.
    /// Items (and characters without a list) use the distinct names of the
    /// filtered pool, sorted.
    pub fn suggestion_pool(&self) -> Vec<String> {
        if self.kind() == CatalogKind::Characters {
            if let Some(names) = self.catalog.names() {
                return names.to_vec();
            }
        }
        self.filtered()
            .into_iter()
            .map(|e| e.name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl std::fmt::Debug for CatalogProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogProvider")
            .field("kind", &self.kind())
            .field("entries", &self.catalog.len())
            .field("include_extended", &self.include_extended())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    const ITEMS_JSON: &str = r#"{"images":[
        {"file":"1001.png","name":"Boots","category":"classique"},
        {"file":"3089.png","name":"Rabadon's Deathcap","category":"classique"},
        {"file":"443061.png","name":"Boots","category":"arena"},
        {"file":"447100.png","name":"Mirage Blade","category":"arena"}
    ]}"#;

    fn items(prefs: MemoryPreferences) -> CatalogProvider {
        let catalog = Catalog::from_json(CatalogKind::Items, ITEMS_JSON).unwrap();
        CatalogProvider::new(Arc::new(catalog), Box::new(prefs))
    }

    #[test]
    fn parses_item_catalog() {
        let catalog = Catalog::from_json(CatalogKind::Items, ITEMS_JSON).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.entries()[2].category, Category::Extended);
    }

    #[test]
    fn malformed_catalog_is_data_load_error() {
        let err = Catalog::from_json(CatalogKind::Items, "{\"images\": 3}").unwrap_err();
        assert!(matches!(err, GameError::DataLoad { .. }));
        let err = Catalog::names_from_json("{}").unwrap_err();
        assert!(matches!(err, GameError::DataLoad { .. }));
    }

    #[test]
    fn filter_follows_preference() {
        let mut p = items(MemoryPreferences::new());
        assert!(!p.include_extended());
        assert_eq!(p.filtered().len(), 2);

        p.set_include_extended(true).unwrap();
        assert!(p.include_extended());
        assert_eq!(p.filtered().len(), 4);
    }

    #[test]
    fn image_paths_use_category_folder() {
        let p = items(MemoryPreferences::new());
        let entries = p.catalog().entries();
        assert_eq!(p.image_path(&entries[0]), "ImagesItems/Classique/1001.png");
        assert_eq!(p.image_path(&entries[3]), "ImagesItems/Arena/447100.png");

        let champ = CatalogEntry::new("Ahri_1.jpg", "Ahri", Category::Extended);
        let catalog = Catalog::new(CatalogKind::Characters, vec![champ.clone()]);
        let p = CatalogProvider::new(Arc::new(catalog), Box::new(MemoryPreferences::new()));
        assert_eq!(p.image_path(&champ), "ImagesChamps/SkinChamps/Ahri_1.jpg");
    }

    #[test]
    fn random_entry_respects_filter() {
        let p = items(MemoryPreferences::new());
        let mut rng = SimpleRng::new(11);
        for _ in 0..50 {
            assert_eq!(p.random_entry(&mut rng).unwrap().category, Category::Default);
        }
    }

    #[test]
    fn empty_pool_is_reported() {
        let only_extended = Catalog::new(
            CatalogKind::Items,
            vec![CatalogEntry::new("x.png", "X", Category::Extended)],
        );
        let p = CatalogProvider::new(Arc::new(only_extended), Box::new(MemoryPreferences::new()));
        let err = p.random_entry(&mut SimpleRng::new(1)).unwrap_err();
        assert!(err.is_empty_pool());
    }

    #[test]
    fn item_suggestions_are_distinct_sorted_and_filtered() {
        let p = items(MemoryPreferences::new().with("item_includeArena", true));
        assert_eq!(
            p.suggestion_pool(),
            vec!["Boots", "Mirage Blade", "Rabadon's Deathcap"]
        );
        let p = items(MemoryPreferences::new());
        assert_eq!(p.suggestion_pool(), vec!["Boots", "Rabadon's Deathcap"]);
    }

    #[test]
    fn character_suggestions_prefer_name_list() {
        let catalog = Catalog::new(
            CatalogKind::Characters,
            vec![CatalogEntry::new("Ashe_0.jpg", "Ashe", Category::Default)],
        )
        .with_names(vec!["Ashe".into(), "Annie".into()]);
        let p = CatalogProvider::new(Arc::new(catalog), Box::new(MemoryPreferences::new()));
        assert_eq!(p.suggestion_pool(), vec!["Ashe", "Annie"]);
    }
}
