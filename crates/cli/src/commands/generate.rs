//! `craftsman generate` — artisan/composer command generation.
//!
//! One-shot with `--category`/`--index`, otherwise an interactive picker.
//! Placeholder values are prompted for in both modes.

use std::io::Write;

use craftsman_commands::{builtin_catalog, CommandCatalog};
use craftsman_core::sink::OutputSink;

pub fn run(
    category: Option<String>,
    index: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = builtin_catalog();
    let sink = super::console();

    match (category, index) {
        (Some(category), Some(index)) => one_shot(&catalog, &sink, &category, index),
        (None, None) => interactive(&catalog, &sink),
        _ => {
            sink.error("--category and --index must be given together.");
            Ok(())
        }
    }
}

fn one_shot(
    catalog: &CommandCatalog,
    sink: &impl OutputSink,
    category: &str,
    index: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    match catalog.generate(category, index, prompt_for_value) {
        Some(command) => sink.generated_command(&command),
        None => sink.error(&format!(
            "No command at index {index} in category '{category}'. \
             Run `craftsman generate` to browse."
        )),
    }
    Ok(())
}

fn interactive(
    catalog: &CommandCatalog,
    sink: &impl OutputSink,
) -> Result<(), Box<dyn std::error::Error>> {
    sink.notice("Generate common Laravel commands. Type 'exit' at any prompt to quit.");

    loop {
        show_categories(catalog, sink);

        let Some(input) = prompt("Select a category (number or name)")? else {
            break;
        };
        if is_exit(&input) {
            break;
        }

        let Some(category) = catalog.resolve_category(&input) else {
            sink.error(&format!("Category '{input}' not found."));
            continue;
        };

        show_commands(catalog, sink, category.key);

        let Some(input) = prompt("Select a command (number, 'back' to go back)")? else {
            break;
        };
        if is_exit(&input) {
            break;
        }
        if input.eq_ignore_ascii_case("back") {
            continue;
        }

        let Ok(index) = input.parse::<usize>() else {
            sink.error("Please enter a valid command number.");
            continue;
        };

        match catalog.generate(category.key, index, prompt_for_value) {
            Some(command) => sink.generated_command(&command),
            None => sink.error("Command index out of range."),
        }
    }

    Ok(())
}

fn show_categories(catalog: &CommandCatalog, sink: &impl OutputSink) {
    let rows: Vec<Vec<String>> = catalog
        .categories()
        .iter()
        .enumerate()
        .map(|(i, c)| {
            vec![
                (i + 1).to_string(),
                c.key.to_string(),
                c.description.to_string(),
            ]
        })
        .collect();

    sink.table(
        "Command Categories",
        &["Number", "Category", "Description"],
        &rows,
    );
}

fn show_commands(catalog: &CommandCatalog, sink: &impl OutputSink, key: &str) {
    let Some(commands) = catalog.commands(key) else {
        return;
    };

    let rows: Vec<Vec<String>> = commands
        .iter()
        .enumerate()
        .map(|(i, cmd)| {
            vec![
                (i + 1).to_string(),
                cmd.name.to_string(),
                cmd.template.to_string(),
            ]
        })
        .collect();

    sink.table(
        &format!("{key} commands"),
        &["Number", "Name", "Command"],
        &rows,
    );
}

/// Read one line from stdin with a label. `None` on EOF.
fn prompt(label: &str) -> std::io::Result<Option<String>> {
    print!("\n{label}: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    if std::io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt the user for a placeholder value; EOF yields an empty value.
fn prompt_for_value(name: &str) -> String {
    prompt(&format!("Enter value for '{name}'"))
        .ok()
        .flatten()
        .unwrap_or_default()
}

fn is_exit(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "exit" | "quit")
}

#[cfg(test)]
mod tests {
    use super::*;
    use craftsman_commands::placeholders;

    #[test]
    fn exit_inputs_recognized() {
        assert!(is_exit("exit"));
        assert!(is_exit("Quit"));
        assert!(!is_exit("model"));
        assert!(!is_exit("8"));
    }

    #[test]
    fn placeholder_scan_matches_catalog_content() {
        // The filament relation manager template drives two prompts.
        let names =
            placeholders("php artisan make:filament-relation-manager {model} {relationship}");
        assert_eq!(names.len(), 2);
    }
}
