//! # Craftsman Knowledge
//!
//! The reference side of the assistant: compiled-in pattern trees of
//! Laravel/FilamentPHP snippets with path lookup and substring search, plus
//! a small persistent store of curated free-form entries.
//!
//! Pattern trees are static data — no file or network loading. Every lookup
//! is total: a miss is `None`, never an error.

pub mod node;
pub mod registry;
pub mod store;
mod trees;

pub use node::{PatternLeaf, PatternNode, PatternTree, SearchHit};
pub use registry::{search_all, topics, tree, TopicHit};
pub use store::{KnowledgeEntry, KnowledgeStore};
