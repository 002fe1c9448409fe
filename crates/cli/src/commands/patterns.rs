//! `craftsman patterns` — browse and search the built-in pattern trees.

use craftsman_core::sink::OutputSink;
use craftsman_knowledge::{registry, PatternLeaf, PatternNode};

/// List the available topic trees.
pub fn topics() {
    let sink = super::console();

    let rows: Vec<Vec<String>> = registry::topics()
        .iter()
        .map(|topic| {
            let tree = registry::tree(topic).expect("registered topic");
            vec![topic.to_string(), tree.categories().join(", ")]
        })
        .collect();

    sink.table("Pattern Topics", &["Topic", "Categories"], &rows);
}

/// List the top-level categories of a topic.
pub fn categories(topic: &str) {
    let sink = super::console();

    let Some(tree) = registry::tree(topic) else {
        sink.error(&format!("Unknown topic '{topic}'. Try `craftsman patterns topics`."));
        return;
    };

    let rows: Vec<Vec<String>> = tree
        .categories()
        .into_iter()
        .map(|category| {
            let children = tree
                .get(&[category])
                .and_then(PatternNode::as_category)
                .map(|c| c.keys().cloned().collect::<Vec<_>>().join(", "))
                .unwrap_or_default();
            vec![category.to_string(), children]
        })
        .collect();

    sink.table(
        &format!("Categories in {topic}"),
        &["Category", "Entries"],
        &rows,
    );
}

/// Show the node at a key path.
pub fn show(topic: &str, path: &[String]) {
    let sink = super::console();

    let Some(tree) = registry::tree(topic) else {
        sink.error(&format!("Unknown topic '{topic}'. Try `craftsman patterns topics`."));
        return;
    };

    let segments: Vec<&str> = path.iter().map(String::as_str).collect();
    match tree.get(&segments) {
        Some(PatternNode::Leaf(leaf)) => render_leaf(&sink, topic, &segments.join("/"), leaf),
        Some(PatternNode::Category(children)) => {
            let rows: Vec<Vec<String>> = children
                .iter()
                .map(|(key, node)| {
                    let kind = if node.is_leaf() { "pattern" } else { "category" };
                    vec![key.clone(), kind.to_string()]
                })
                .collect();
            sink.table(
                &format!("{topic}/{}", segments.join("/")),
                &["Key", "Kind"],
                &rows,
            );
        }
        None => sink.error(&format!(
            "Nothing at '{}' in topic '{topic}'.",
            segments.join("/")
        )),
    }
}

/// Search pattern descriptions and snippets, in one topic or all of them.
pub fn search(query: &str, topic: Option<&str>) {
    let sink = super::console();

    let hits: Vec<(String, Vec<String>, &PatternLeaf)> = match topic {
        Some(topic) => {
            let Some(tree) = registry::tree(topic) else {
                sink.error(&format!("Unknown topic '{topic}'. Try `craftsman patterns topics`."));
                return;
            };
            tree.search(query)
                .into_iter()
                .map(|hit| (topic.to_string(), hit.path, hit.leaf))
                .collect()
        }
        None => registry::search_all(query)
            .into_iter()
            .map(|hit| (hit.topic.to_string(), hit.path, hit.leaf))
            .collect(),
    };

    let rows: Vec<Vec<String>> = hits
        .iter()
        .map(|(topic, path, leaf)| {
            vec![
                topic.clone(),
                path.join("/"),
                truncate(&leaf.description, 70),
            ]
        })
        .collect();

    sink.table(
        &format!("Patterns matching '{query}'"),
        &["Topic", "Path", "Description"],
        &rows,
    );

    if !rows.is_empty() {
        sink.notice("Use `craftsman patterns show <topic> <path...>` for the full pattern.");
    }
}

fn render_leaf(sink: &impl OutputSink, topic: &str, path: &str, leaf: &PatternLeaf) {
    sink.snippet(&format!("{topic}/{path}"), &leaf.description);

    if let Some(when) = &leaf.when_to_use {
        sink.notice(&format!("When to use: {when}"));
    }
    if !leaf.tags.is_empty() {
        sink.notice(&format!("Tags: {}", leaf.tags.join(", ")));
    }
    if let Some(snippet) = &leaf.snippet {
        sink.snippet("Example", snippet);
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_text_unchanged() {
        assert_eq!(truncate("short", 70), "short");
    }

    #[test]
    fn truncate_long_text_bounded() {
        let long = "x".repeat(100);
        let out = truncate(&long, 70);
        assert!(out.chars().count() <= 70);
        assert!(out.ends_with('…'));
    }
}
