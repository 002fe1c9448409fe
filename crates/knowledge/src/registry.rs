//! Topic registry over the compiled-in trees.
//!
//! Trees are materialized once per process and handed out as `'static`
//! references. Topic order matches authoring order in `trees::all()`.

use std::sync::OnceLock;

use crate::node::{PatternLeaf, PatternTree};
use crate::trees;

static REGISTRY: OnceLock<Vec<PatternTree>> = OnceLock::new();

fn registry() -> &'static [PatternTree] {
    REGISTRY.get_or_init(trees::all)
}

/// The ordered topic names.
pub fn topics() -> Vec<&'static str> {
    registry().iter().map(PatternTree::name).collect()
}

/// Look up a topic tree by name. Unknown topic → `None`.
pub fn tree(topic: &str) -> Option<&'static PatternTree> {
    registry().iter().find(|t| t.name() == topic)
}

/// A search hit qualified with the topic it came from.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TopicHit {
    pub topic: &'static str,
    pub path: Vec<String>,
    pub leaf: &'static PatternLeaf,
}

/// Search every topic tree, in topic order then tree order.
pub fn search_all(query: &str) -> Vec<TopicHit> {
    registry()
        .iter()
        .flat_map(|tree| {
            tree.search(query).into_iter().map(|hit| TopicHit {
                topic: tree.name(),
                path: hit.path,
                leaf: hit.leaf,
            })
        })
        .collect()
}
