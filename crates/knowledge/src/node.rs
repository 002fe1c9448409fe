//! Pattern tree domain types and traversal.
//!
//! A tree is an insertion-ordered mapping whose values are either further
//! categories or leaf records. The two cases are a proper sum type, so a
//! category may safely contain a child named `description` without being
//! mistaken for a leaf — leaf-ness is decided when the tree is authored,
//! never guessed from key names at query time.

use indexmap::IndexMap;
use serde::Serialize;

/// A leaf record: a search-indexable unit of documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternLeaf {
    /// What this pattern is and when it applies
    pub description: String,

    /// Example code, usually PHP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,

    /// Situational guidance beyond the description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when_to_use: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl PatternLeaf {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            snippet: None,
            when_to_use: None,
            tags: Vec::new(),
        }
    }

    pub fn snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    pub fn when_to_use(mut self, guidance: impl Into<String>) -> Self {
        self.when_to_use = Some(guidance.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Case-insensitive substring match against description and snippet.
    /// `needle` must already be lowercased.
    fn matches(&self, needle: &str) -> bool {
        if self.description.to_lowercase().contains(needle) {
            return true;
        }
        self.snippet
            .as_deref()
            .is_some_and(|s| s.to_lowercase().contains(needle))
    }
}

/// A node in a pattern tree: either a category of further nodes or a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PatternNode {
    Category(IndexMap<String, PatternNode>),
    Leaf(PatternLeaf),
}

impl PatternNode {
    /// Build a category from ordered `(key, node)` pairs.
    pub fn category<K, I>(children: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, PatternNode)>,
    {
        Self::Category(
            children
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        )
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&PatternLeaf> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Category(_) => None,
        }
    }

    pub fn as_category(&self) -> Option<&IndexMap<String, PatternNode>> {
        match self {
            Self::Category(children) => Some(children),
            Self::Leaf(_) => None,
        }
    }
}

impl From<PatternLeaf> for PatternNode {
    fn from(leaf: PatternLeaf) -> Self {
        Self::Leaf(leaf)
    }
}

/// A search result: the key path from the root plus the matching leaf.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit<'a> {
    pub path: Vec<String>,
    pub leaf: &'a PatternLeaf,
}

/// A named, static topic tree.
///
/// All three operations are total functions: listing cannot fail, a bad
/// path is `None`, and search over an empty or non-matching tree is an
/// empty vec.
#[derive(Debug, Clone, Serialize)]
pub struct PatternTree {
    name: String,
    root: IndexMap<String, PatternNode>,
}

impl PatternTree {
    /// Build a tree from ordered top-level `(key, node)` pairs.
    pub fn build<K, I>(name: impl Into<String>, children: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, PatternNode)>,
    {
        Self {
            name: name.into(),
            root: children
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered top-level category keys.
    pub fn categories(&self) -> Vec<&str> {
        self.root.keys().map(String::as_str).collect()
    }

    /// Walk the tree one key at a time.
    ///
    /// Returns the exact node the full path resolves to. Any miss — an
    /// absent key, an empty path, or a path that tries to descend through a
    /// leaf — returns `None`. Never panics.
    pub fn get(&self, path: &[&str]) -> Option<&PatternNode> {
        let (first, rest) = path.split_first()?;
        let mut node = self.root.get(*first)?;

        for key in rest {
            node = node.as_category()?.get(*key)?;
        }

        Some(node)
    }

    /// Depth-first pre-order search over leaf records.
    ///
    /// A leaf matches when the query occurs case-insensitively in its
    /// description or snippet. Categories are never emitted and leaves are
    /// never recursed into, so a leaf's own metadata lists are not indexed.
    /// Results follow the tree's insertion order, making repeated calls
    /// identical.
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        let needle = query.to_lowercase();
        let mut hits = Vec::new();
        let mut path = Vec::new();
        Self::walk(&self.root, &mut path, &needle, &mut hits);
        hits
    }

    fn walk<'a>(
        children: &'a IndexMap<String, PatternNode>,
        path: &mut Vec<String>,
        needle: &str,
        hits: &mut Vec<SearchHit<'a>>,
    ) {
        for (key, node) in children {
            path.push(key.clone());
            match node {
                PatternNode::Leaf(leaf) => {
                    if leaf.matches(needle) {
                        hits.push(SearchHit {
                            path: path.clone(),
                            leaf,
                        });
                    }
                }
                PatternNode::Category(sub) => Self::walk(sub, path, needle, hits),
            }
            path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The two-leaf tree from the lookup contract:
    /// `{"a": {"x": {description: "alpha thing"}}, "b": {"y": {description: "beta thing"}}}`
    fn two_leaf_tree() -> PatternTree {
        PatternTree::build(
            "test",
            [
                (
                    "a",
                    PatternNode::category([("x", PatternLeaf::new("alpha thing").into())]),
                ),
                (
                    "b",
                    PatternNode::category([("y", PatternLeaf::new("beta thing").into())]),
                ),
            ],
        )
    }

    #[test]
    fn categories_are_ordered() {
        let tree = two_leaf_tree();
        assert_eq!(tree.categories(), vec!["a", "b"]);
    }

    #[test]
    fn get_resolves_full_path_to_exact_leaf() {
        let tree = two_leaf_tree();
        let node = tree.get(&["a", "x"]).unwrap();
        assert_eq!(node.as_leaf().unwrap().description, "alpha thing");
    }

    #[test]
    fn get_resolves_partial_path_to_category() {
        let tree = two_leaf_tree();
        let node = tree.get(&["a"]).unwrap();
        assert!(node.as_category().is_some());
    }

    #[test]
    fn get_missing_key_returns_none() {
        let tree = two_leaf_tree();
        assert!(tree.get(&["a", "missing"]).is_none());
        assert!(tree.get(&["nope"]).is_none());
    }

    #[test]
    fn get_through_leaf_returns_none() {
        let tree = two_leaf_tree();
        assert!(tree.get(&["a", "x", "deeper"]).is_none());
    }

    #[test]
    fn get_empty_path_returns_none() {
        let tree = two_leaf_tree();
        assert!(tree.get(&[]).is_none());
    }

    #[test]
    fn search_single_match() {
        let tree = two_leaf_tree();
        let hits = tree.search("alpha");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].path, vec!["a", "x"]);
    }

    #[test]
    fn search_multiple_matches_in_insertion_order() {
        let tree = two_leaf_tree();
        let hits = tree.search("thing");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].path, vec!["a", "x"]);
        assert_eq!(hits[1].path, vec!["b", "y"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let tree = two_leaf_tree();
        assert_eq!(tree.search("ALPHA").len(), 1);
        assert_eq!(tree.search("Alpha Thing").len(), 1);
    }

    #[test]
    fn search_is_idempotent() {
        let tree = two_leaf_tree();
        let first: Vec<_> = tree.search("thing").iter().map(|h| h.path.clone()).collect();
        let second: Vec<_> = tree.search("thing").iter().map(|h| h.path.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn search_matches_snippet_text() {
        let tree = PatternTree::build(
            "test",
            [(
                "forms",
                PatternNode::category([(
                    "text_input",
                    PatternLeaf::new("A text input")
                        .snippet("TextInput::make('title')->required()")
                        .into(),
                )]),
            )],
        );

        let hits = tree.search("required()");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].path, vec!["forms", "text_input"]);
    }

    #[test]
    fn search_never_emits_categories() {
        // A category keyed "description" must not be treated as a leaf.
        let tree = PatternTree::build(
            "test",
            [(
                "description",
                PatternNode::category([(
                    "child",
                    PatternLeaf::new("nested description leaf").into(),
                )]),
            )],
        );

        let hits = tree.search("description");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].path, vec!["description", "child"]);
    }

    #[test]
    fn search_no_match_is_empty() {
        let tree = two_leaf_tree();
        assert!(tree.search("gamma").is_empty());
    }

    #[test]
    fn deep_nesting_resolves() {
        let tree = PatternTree::build(
            "deep",
            [(
                "l1",
                PatternNode::category([(
                    "l2",
                    PatternNode::category([(
                        "l3",
                        PatternNode::category([("leaf", PatternLeaf::new("deep leaf").into())]),
                    )]),
                )]),
            )],
        );

        let node = tree.get(&["l1", "l2", "l3", "leaf"]).unwrap();
        assert_eq!(node.as_leaf().unwrap().description, "deep leaf");

        let hits = tree.search("deep");
        assert_eq!(hits[0].path, vec!["l1", "l2", "l3", "leaf"]);
    }
}
