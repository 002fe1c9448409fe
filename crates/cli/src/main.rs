//! Craftsman CLI — the main entry point.
//!
//! Commands:
//! - `query`    — Ask a single Laravel question and exit
//! - `chat`     — Interactive assistant session
//! - `patterns` — Browse and search the built-in pattern trees
//! - `generate` — Generate artisan/composer commands from templates
//! - `kb`       — Browse the curated knowledge store
//! - `doctor`   — Diagnose configuration and connectivity

use clap::{Parser, Subcommand};

mod commands;
mod output;

#[derive(Parser)]
#[command(
    name = "craftsman",
    about = "Craftsman — Laravel development assistant",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a single Laravel question and print the answer
    Query {
        /// The question to send
        text: String,
    },

    /// Start an interactive assistant session
    Chat,

    /// Browse and search the built-in pattern trees
    Patterns {
        #[command(subcommand)]
        command: PatternsCommand,
    },

    /// Generate common artisan/composer commands from templates
    Generate {
        /// Command category (e.g. "model", "filament")
        #[arg(short, long)]
        category: Option<String>,

        /// 1-based command index within the category
        #[arg(short, long)]
        index: Option<usize>,
    },

    /// Browse the curated knowledge store
    Kb {
        #[command(subcommand)]
        command: KbCommand,
    },

    /// Diagnose configuration and connectivity
    Doctor {
        /// Also send a minimal live request to verify the API key
        #[arg(long)]
        ping: bool,
    },
}

#[derive(Subcommand)]
enum PatternsCommand {
    /// List the available topic trees
    Topics,

    /// List the top-level categories of a topic
    Categories { topic: String },

    /// Show the node at a key path
    Show {
        topic: String,
        /// Key path from the topic root, one segment per argument
        #[arg(required = true)]
        path: Vec<String>,
    },

    /// Search pattern descriptions and snippets
    Search {
        query: String,

        /// Restrict the search to one topic
        #[arg(short, long)]
        topic: Option<String>,
    },
}

#[derive(Subcommand)]
enum KbCommand {
    /// List every entry
    List,

    /// List entries in a category
    Category { category: String },

    /// List entries carrying a tag
    Tag { tag: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Query { text } => commands::query::run(&text, cli.verbose).await?,
        Commands::Chat => commands::chat::run().await?,
        Commands::Patterns { command } => match command {
            PatternsCommand::Topics => commands::patterns::topics(),
            PatternsCommand::Categories { topic } => commands::patterns::categories(&topic),
            PatternsCommand::Show { topic, path } => commands::patterns::show(&topic, &path),
            PatternsCommand::Search { query, topic } => {
                commands::patterns::search(&query, topic.as_deref())
            }
        },
        Commands::Generate { category, index } => commands::generate::run(category, index)?,
        Commands::Kb { command } => match command {
            KbCommand::List => commands::kb::list()?,
            KbCommand::Category { category } => commands::kb::by_category(&category)?,
            KbCommand::Tag { tag } => commands::kb::by_tag(&tag)?,
        },
        Commands::Doctor { ping } => commands::doctor::run(ping).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_query() {
        let cli = Cli::try_parse_from(["craftsman", "query", "How do I paginate?"]).unwrap();
        assert!(matches!(cli.command, Commands::Query { .. }));
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_global_verbose_flag() {
        let cli = Cli::try_parse_from(["craftsman", "chat", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Chat));
    }

    #[test]
    fn parses_patterns_show_with_path() {
        let cli = Cli::try_parse_from([
            "craftsman",
            "patterns",
            "show",
            "filament-forms",
            "components",
            "text_input",
        ])
        .unwrap();
        match cli.command {
            Commands::Patterns {
                command: PatternsCommand::Show { topic, path },
            } => {
                assert_eq!(topic, "filament-forms");
                assert_eq!(path, vec!["components", "text_input"]);
            }
            _ => panic!("expected patterns show"),
        }
    }

    #[test]
    fn patterns_show_requires_a_path() {
        assert!(Cli::try_parse_from(["craftsman", "patterns", "show", "filament-forms"]).is_err());
    }

    #[test]
    fn parses_generate_flags() {
        let cli =
            Cli::try_parse_from(["craftsman", "generate", "-c", "model", "-i", "2"]).unwrap();
        match cli.command {
            Commands::Generate { category, index } => {
                assert_eq!(category.as_deref(), Some("model"));
                assert_eq!(index, Some(2));
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn parses_patterns_search_with_topic_filter() {
        let cli = Cli::try_parse_from([
            "craftsman",
            "patterns",
            "search",
            "relationship",
            "--topic",
            "laravel-database",
        ])
        .unwrap();
        match cli.command {
            Commands::Patterns {
                command: PatternsCommand::Search { query, topic },
            } => {
                assert_eq!(query, "relationship");
                assert_eq!(topic.as_deref(), Some("laravel-database"));
            }
            _ => panic!("expected patterns search"),
        }
    }
}
