//! Curated knowledge store — free-form entries persisted as JSON.
//!
//! Unlike the compiled-in pattern trees, these entries are user-extendable:
//! the store loads from `~/.craftsman/knowledge.json`, seeds itself with
//! default entries when the file is missing, and writes back on demand.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use craftsman_core::error::KnowledgeError;

/// A single curated knowledge entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub title: String,

    /// Coarse grouping (e.g., "model", "controller", "filament")
    pub category: String,

    /// The knowledge content itself, usually markdown with a code block
    pub content: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Where the knowledge came from (docs URL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Framework version this applies to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Keyed collection of knowledge entries with filtered retrieval.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeStore {
    entries: IndexMap<String, KnowledgeEntry>,
}

impl KnowledgeStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with the built-in default entries.
    pub fn with_defaults() -> Self {
        let mut store = Self::new();
        store.seed_defaults();
        store
    }

    /// Add an entry, keyed by its slugified title. Re-adding a title
    /// replaces the previous entry.
    pub fn add(&mut self, entry: KnowledgeEntry) {
        let key = slugify(&entry.title);
        self.entries.insert(key, entry);
    }

    /// Fetch by slug key. Unknown key → `None`.
    pub fn get(&self, key: &str) -> Option<&KnowledgeEntry> {
        self.entries.get(key)
    }

    /// Entries matching ANY of the given tags.
    pub fn search_by_tags(&self, tags: &[&str]) -> Vec<&KnowledgeEntry> {
        self.entries
            .values()
            .filter(|e| tags.iter().any(|t| e.tags.iter().any(|et| et == t)))
            .collect()
    }

    /// Entries in the given category.
    pub fn search_by_category(&self, category: &str) -> Vec<&KnowledgeEntry> {
        self.entries
            .values()
            .filter(|e| e.category == category)
            .collect()
    }

    /// Entries for the given framework version.
    pub fn search_by_version(&self, version: &str) -> Vec<&KnowledgeEntry> {
        self.entries
            .values()
            .filter(|e| e.version.as_deref() == Some(version))
            .collect()
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &KnowledgeEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Persist the store as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), KnowledgeError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| KnowledgeError::Storage(format!("create {}: {e}", parent.display())))?;
        }

        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| KnowledgeError::Serialization(e.to_string()))?;

        std::fs::write(path, json)
            .map_err(|e| KnowledgeError::Storage(format!("write {}: {e}", path.display())))?;

        debug!(path = %path.display(), count = self.entries.len(), "Knowledge store saved");
        Ok(())
    }

    /// Load the store from disk.
    ///
    /// A missing file is not an error: the store seeds itself with defaults
    /// and writes them back so the next load reads the file.
    pub fn load(path: &Path) -> Result<Self, KnowledgeError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "No knowledge store file, seeding defaults");
                let store = Self::with_defaults();
                store.save(path)?;
                return Ok(store);
            }
            Err(e) => {
                return Err(KnowledgeError::Storage(format!(
                    "read {}: {e}",
                    path.display()
                )));
            }
        };

        let entries: IndexMap<String, KnowledgeEntry> = serde_json::from_str(&content)
            .map_err(|e| KnowledgeError::Serialization(e.to_string()))?;

        Ok(Self { entries })
    }

    fn seed_defaults(&mut self) {
        self.add(KnowledgeEntry {
            title: "Laravel Model Conventions".into(),
            category: "model".into(),
            content: "Eloquent models are singular PascalCase over plural snake_case tables. \
                      Declare $fillable and $casts explicitly, define relationships as methods, \
                      and use scopes for recurring query fragments. Models live under \
                      App\\Models."
                .into(),
            tags: vec!["model".into(), "eloquent".into(), "conventions".into()],
            source: Some("https://laravel.com/docs/11.x/eloquent".into()),
            version: Some("11.x".into()),
        });

        self.add(KnowledgeEntry {
            title: "Laravel Controller Conventions".into(),
            category: "controller".into(),
            content: "Controllers are PascalCase with a Controller suffix and stay thin: \
                      validation in form requests, business logic in services, RESTful method \
                      names (index, store, show, update, destroy), dependencies injected \
                      through the constructor."
                .into(),
            tags: vec!["controller".into(), "crud".into(), "conventions".into()],
            source: Some("https://laravel.com/docs/11.x/controllers".into()),
            version: Some("11.x".into()),
        });

        self.add(KnowledgeEntry {
            title: "Laravel Migration Conventions".into(),
            category: "migration".into(),
            content: "Migrations are timestamp-prefixed snake_case files with both up() and \
                      down(). Keep each migration focused on one change, define foreign keys \
                      with constrained(), and give pivot tables their own migration."
                .into(),
            tags: vec!["migration".into(), "database".into(), "conventions".into()],
            source: Some("https://laravel.com/docs/11.x/migrations".into()),
            version: Some("11.x".into()),
        });

        self.add(KnowledgeEntry {
            title: "Filament Field Conventions".into(),
            category: "filament".into(),
            content: "Group related fields with sections, apply validation on the component \
                      chain, bind foreign keys and pivots through relationship(), and use \
                      descriptive labels matching the UI vocabulary."
                .into(),
            tags: vec!["filament".into(), "forms".into(), "conventions".into()],
            source: Some("https://filamentphp.com/docs/3.x/forms/fields/getting-started".into()),
            version: Some("3.x".into()),
        });
    }
}

/// Lowercase, spaces to underscores — the entry key format.
fn slugify(title: &str) -> String {
    title.to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, category: &str, tags: &[&str], version: Option<&str>) -> KnowledgeEntry {
        KnowledgeEntry {
            title: title.into(),
            category: category.into(),
            content: format!("{title} content"),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            source: None,
            version: version.map(Into::into),
        }
    }

    #[test]
    fn add_and_get_by_slug() {
        let mut store = KnowledgeStore::new();
        store.add(entry("Route Model Binding", "routing", &["routing"], None));

        let found = store.get("route_model_binding").unwrap();
        assert_eq!(found.title, "Route Model Binding");
        assert!(store.get("unknown_key").is_none());
    }

    #[test]
    fn readding_a_title_replaces() {
        let mut store = KnowledgeStore::new();
        store.add(entry("Caching", "performance", &[], None));
        store.add(KnowledgeEntry {
            content: "updated".into(),
            ..entry("Caching", "performance", &[], None)
        });

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("caching").unwrap().content, "updated");
    }

    #[test]
    fn tag_search_matches_any() {
        let mut store = KnowledgeStore::new();
        store.add(entry("A", "x", &["alpha", "shared"], None));
        store.add(entry("B", "y", &["beta"], None));
        store.add(entry("C", "z", &["shared"], None));

        let hits = store.search_by_tags(&["alpha", "beta"]);
        assert_eq!(hits.len(), 2);

        let hits = store.search_by_tags(&["shared"]);
        assert_eq!(hits.len(), 2);

        assert!(store.search_by_tags(&["missing"]).is_empty());
    }

    #[test]
    fn category_and_version_filters() {
        let mut store = KnowledgeStore::new();
        store.add(entry("A", "model", &[], Some("11.x")));
        store.add(entry("B", "model", &[], Some("10.x")));
        store.add(entry("C", "controller", &[], Some("11.x")));

        assert_eq!(store.search_by_category("model").len(), 2);
        assert_eq!(store.search_by_version("11.x").len(), 2);
        assert!(store.search_by_category("migration").is_empty());
    }

    #[test]
    fn defaults_are_seeded() {
        let store = KnowledgeStore::with_defaults();
        assert!(store.len() >= 4);
        assert!(store.get("laravel_model_conventions").is_some());
        assert!(!store.search_by_category("filament").is_empty());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("knowledge.json");

        let mut store = KnowledgeStore::new();
        store.add(entry("Eager Loading", "query", &["performance"], Some("11.x")));
        store.save(&path).unwrap();

        let loaded = KnowledgeStore::load(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        let found = loaded.get("eager_loading").unwrap();
        assert_eq!(found.category, "query");
        assert_eq!(found.version.as_deref(), Some("11.x"));
    }

    #[test]
    fn load_missing_file_seeds_and_persists_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("knowledge.json");

        let store = KnowledgeStore::load(&path).unwrap();
        assert!(!store.is_empty());
        assert!(path.exists());

        // Second load reads the file it just wrote.
        let again = KnowledgeStore::load(&path).unwrap();
        assert_eq!(again.len(), store.len());
    }

    #[test]
    fn load_rejects_corrupt_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("knowledge.json");
        std::fs::write(&path, "not json at all").unwrap();

        let err = KnowledgeStore::load(&path).unwrap_err();
        assert!(matches!(err, KnowledgeError::Serialization(_)));
    }
}
