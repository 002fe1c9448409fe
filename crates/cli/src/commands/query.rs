//! `craftsman query` — single question mode.

use std::sync::Arc;

use craftsman_assistant::Session;
use craftsman_core::sink::OutputSink;

pub async fn run(text: &str, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config_with_key()?;
    let sink = super::console();

    if verbose {
        sink.notice(&format!("Model:       {}", config.model));
        sink.notice(&format!("Temperature: {}", config.temperature));
        sink.notice(&format!("Max tokens:  {}", config.max_tokens));
    }

    let provider = craftsman_providers::from_config(&config)?;
    let mut session = Session::new(Arc::new(provider), &config);

    eprint!("  Thinking...");
    match session.ask(text).await {
        Ok(reply) => {
            eprint!("\r             \r");
            sink.reply(&reply);
        }
        Err(e) => {
            eprint!("\r             \r");
            sink.error(&e.to_string());
            return Err(e.into());
        }
    }

    Ok(())
}
