//! Compiled-in topic trees.
//!
//! Content is authored here as ordered literals; the registry materializes
//! each tree once per process. Authoring order is load-bearing — it is the
//! order categories list and search results emit.

mod filament_forms;
mod filament_tables;
mod laravel_api;
mod laravel_database;
mod pest_testing;

use crate::node::PatternTree;

/// All built-in trees, in presentation order.
pub(crate) fn all() -> Vec<PatternTree> {
    vec![
        filament_forms::tree(),
        filament_tables::tree(),
        laravel_api::tree(),
        laravel_database::tree(),
        pest_testing::tree(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tree_has_categories() {
        for tree in all() {
            assert!(
                !tree.categories().is_empty(),
                "tree '{}' has no categories",
                tree.name()
            );
        }
    }

    #[test]
    fn tree_names_are_unique() {
        let trees = all();
        let mut names: Vec<_> = trees.iter().map(|t| t.name().to_string()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), trees.len());
    }

    #[test]
    fn every_leaf_is_reachable_by_its_search_path() {
        // A hit's path must resolve back to the same leaf via get().
        for tree in all() {
            for hit in tree.search("") {
                let path: Vec<&str> = hit.path.iter().map(String::as_str).collect();
                let node = tree
                    .get(&path)
                    .unwrap_or_else(|| panic!("{}: path {path:?} does not resolve", tree.name()));
                assert_eq!(node.as_leaf(), Some(hit.leaf));
            }
        }
    }
}
