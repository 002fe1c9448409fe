//! `craftsman kb` — browse the curated knowledge store.

use craftsman_config::AppConfig;
use craftsman_core::sink::OutputSink;
use craftsman_knowledge::{KnowledgeEntry, KnowledgeStore};

fn load_store() -> Result<KnowledgeStore, Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let path = config.knowledge.effective_store_path();
    Ok(KnowledgeStore::load(&path)?)
}

fn entry_rows<'a>(entries: impl IntoIterator<Item = &'a KnowledgeEntry>) -> Vec<Vec<String>> {
    entries
        .into_iter()
        .map(|e| {
            vec![
                e.title.clone(),
                e.category.clone(),
                e.tags.join(", "),
                e.version.clone().unwrap_or_default(),
            ]
        })
        .collect()
}

const HEADERS: [&str; 4] = ["Title", "Category", "Tags", "Version"];

pub fn list() -> Result<(), Box<dyn std::error::Error>> {
    let sink = super::console();
    let store = load_store()?;

    let rows = entry_rows(store.entries().map(|(_, e)| e));
    sink.table("Knowledge Entries", &HEADERS, &rows);
    Ok(())
}

pub fn by_category(category: &str) -> Result<(), Box<dyn std::error::Error>> {
    let sink = super::console();
    let store = load_store()?;

    let rows = entry_rows(store.search_by_category(category));
    sink.table(&format!("Knowledge: category '{category}'"), &HEADERS, &rows);
    Ok(())
}

pub fn by_tag(tag: &str) -> Result<(), Box<dyn std::error::Error>> {
    let sink = super::console();
    let store = load_store()?;

    let rows = entry_rows(store.search_by_tags(&[tag]));
    sink.table(&format!("Knowledge: tag '{tag}'"), &HEADERS, &rows);
    Ok(())
}
