//! Command-template catalog.
//!
//! A static two-level catalog: categories in presentation order, each holding
//! an ordered list of command templates. Templates may contain
//! `{placeholder}` tokens; [`fill`] substitutes caller-supplied values for
//! every occurrence.
//!
//! Misses are lenient throughout: an unknown category or out-of-range index
//! is `None`, mirroring the pattern-tree lookup contract.

pub mod catalog;

pub use catalog::{builtin_catalog, Category, CommandCatalog, CommandTemplate};

/// Ordered, deduplicated `{placeholder}` token names in a template.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}') else {
            break;
        };
        let name = &rest[open + 1..open + close];
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
        rest = &rest[open + close + 1..];
    }

    names
}

/// Substitute every `{placeholder}` occurrence in a template.
///
/// `value_for` is called once per distinct placeholder, in order of first
/// appearance; the returned value replaces all occurrences of that token.
pub fn fill(template: &str, mut value_for: impl FnMut(&str) -> String) -> String {
    let mut command = template.to_string();

    for name in placeholders(template) {
        let value = value_for(name);
        command = command.replace(&format!("{{{name}}}"), &value);
    }

    command
}
