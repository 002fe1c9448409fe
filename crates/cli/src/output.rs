//! Console output sink.
//!
//! The terminal-facing `OutputSink` implementation: tables via comfy-table,
//! color via `colored`. Errors go to stderr; everything else to stdout.

use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};
use craftsman_core::sink::OutputSink;

/// Renders display events to the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn reply(&self, text: &str) {
        println!();
        println!("{}", "Assistant".green().bold());
        let mut panel = Table::new();
        panel
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
        panel.add_row(vec![text]);
        println!("{panel}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "Error:".red().bold(), message);
    }

    fn notice(&self, message: &str) {
        println!("{}", message.dimmed());
    }

    fn table(&self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        if rows.is_empty() {
            println!("{}", "No results found.".dimmed());
            return;
        }

        println!("\n{}", title.bold());
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_header(headers.to_vec());
        for row in rows {
            table.add_row(row.clone());
        }
        println!("{table}");
    }

    fn snippet(&self, heading: &str, body: &str) {
        println!("\n{}", heading.bold().underline());
        println!("{body}");
    }

    fn generated_command(&self, command: &str) {
        println!("\n{}", "Generated command:".green().bold());
        println!("  {}", command.green());
    }
}
