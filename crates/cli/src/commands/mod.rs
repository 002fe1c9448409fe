pub mod chat;
pub mod doctor;
pub mod generate;
pub mod kb;
pub mod patterns;
pub mod query;

use craftsman_config::AppConfig;
use craftsman_core::sink::OutputSink;

use crate::output::ConsoleSink;

/// Load config and fail early, with setup instructions, when no API key is
/// available. Commands that talk to the provider call this first.
pub(crate) fn load_config_with_key() -> Result<AppConfig, Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if !config.has_api_key() {
        eprintln!();
        eprintln!("  ERROR: No API key configured!");
        eprintln!();
        eprintln!("  Set the environment variable:");
        eprintln!("    export ANTHROPIC_API_KEY='sk-ant-...'");
        eprintln!();
        eprintln!("  Or add it to your config file:");
        eprintln!("    {}", AppConfig::config_dir().join("config.toml").display());
        eprintln!();
        return Err("No API key found. See above for setup instructions.".into());
    }

    Ok(config)
}

/// The sink every command renders through.
pub(crate) fn console() -> impl OutputSink {
    ConsoleSink
}
