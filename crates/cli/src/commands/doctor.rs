//! `craftsman doctor` — diagnose configuration and connectivity.

use craftsman_config::AppConfig;
use craftsman_core::provider::Provider;

pub async fn run(ping: bool) -> Result<(), Box<dyn std::error::Error>> {
    println!("Craftsman Doctor — Diagnostics");
    println!("==============================\n");

    let mut issues = 0;

    let config_path = AppConfig::config_dir().join("config.toml");
    let config = if config_path.exists() {
        match AppConfig::load() {
            Ok(config) => {
                println!("  [ok] Config file valid");
                Some(config)
            }
            Err(e) => {
                println!("  [!!] Config file invalid: {e}");
                issues += 1;
                None
            }
        }
    } else {
        println!("  [--] No config file (defaults in effect)");
        println!("       Create one at: {}", config_path.display());
        AppConfig::load().ok()
    };

    match &config {
        Some(config) if config.has_api_key() => {
            println!("  [ok] API key configured");

            if ping {
                use std::io::Write;
                print!("  .... Pinging Anthropic API");
                let _ = std::io::stdout().flush();
                match craftsman_providers::from_config(config) {
                    Ok(provider) => match provider.health_check().await {
                        Ok(true) => println!("\r  [ok] Anthropic API reachable "),
                        Ok(false) => {
                            println!("\r  [!!] API key rejected        ");
                            issues += 1;
                        }
                        Err(e) => {
                            println!("\r  [!!] API unreachable: {e}");
                            issues += 1;
                        }
                    },
                    Err(e) => {
                        println!("\r  [!!] Provider setup failed: {e}");
                        issues += 1;
                    }
                }
            }
        }
        Some(_) => {
            println!("  [!!] No API key — set ANTHROPIC_API_KEY");
            issues += 1;
        }
        None => {}
    }

    if let Some(config) = &config {
        let store_path = config.knowledge.effective_store_path();
        if store_path.exists() {
            println!("  [ok] Knowledge store present");
        } else {
            println!("  [--] Knowledge store not yet created (seeded on first `craftsman kb` use)");
        }
    }

    println!();
    if issues == 0 {
        println!("  All checks passed.");
    } else {
        println!("  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
