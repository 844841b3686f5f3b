//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Path => show_path(ctx),
        ConfigCommand::Init { force, as_json } => init_config(force, as_json, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    let loader = &ctx.config.loader;
    ctx.output.blank();
    ctx.output.info("[loader]");
    ctx.output.kv("delay_ms", &loader.delay_ms.to_string());
    ctx.output.kv("failure_rate", &loader.failure_rate.to_string());
    ctx.output.kv("max_attempts", &loader.max_attempts.to_string());
    ctx.output.kv(
        "catalog_path",
        loader.catalog_path.as_deref().unwrap_or("(built-in menu)"),
    );

    ctx.output.blank();
    ctx.output.info("[checkout]");
    ctx.output.kv(
        "processing_delay_ms",
        &ctx.config.checkout.processing_delay_ms.to_string(),
    );

    ctx.output.blank();
    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level);
    ctx.output.kv("format", &ctx.config.logging.format);

    Ok(())
}

fn show_path(ctx: &Context) -> Result<()> {
    match &ctx.config_path {
        Some(path) if ctx.output.is_json() => {
            ctx.output.json(&serde_json::json!({ "path": path }));
        }
        Some(path) => println!("{}", path.display()),
        None => ctx.output.info(&format!(
            "No config file found; using defaults. Looked for {}",
            CONFIG_NAMES.join(", ")
        )),
    }
    Ok(())
}

fn init_config(force: bool, as_json: bool, ctx: &Context) -> Result<()> {
    let name = if as_json { CONFIG_NAMES[2] } else { CONFIG_NAMES[0] };
    let config_path = ctx.cwd.join(name);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if as_json {
        CliConfig::default().save(&config_path)?;
    } else {
        fs::write(&config_path, generate_default_config())?;
    }
    ctx.output
        .success(&format!("Created {}", config_path.display()));
    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    let Some(path) = &ctx.config_path else {
        ctx.output.info("No config file found; defaults are valid.");
        return Ok(());
    };

    // Context::load already validated once; reload so edits since then are seen.
    let config = CliConfig::load(path)?;
    if let Some(catalog) = &config.loader.catalog_path {
        let catalog_path = ctx.resolve_path(catalog);
        if !catalog_path.exists() {
            bail!("Catalog file not found: {}", catalog_path.display());
        }
    }

    ctx.output
        .success(&format!("{} is valid", path.display()));
    Ok(())
}
