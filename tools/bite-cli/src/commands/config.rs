//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{Backend, StorefrontConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    let config = &ctx.config;

    ctx.output.info("[storage]");
    let backend = match config.storage.backend {
        Backend::File => "file",
        Backend::Memory => "memory",
    };
    ctx.output.kv("backend", backend);
    ctx.output
        .kv("dir", &ctx.resolve_path(&config.storage.dir).display().to_string());
    ctx.output.kv("cart_key", &config.storage.cart_key);
    ctx.output.kv("favorites_key", &config.storage.favorites_key);

    ctx.output.info("[catalog]");
    ctx.output
        .kv("dir", &ctx.resolve_path(&config.catalog.dir).display().to_string());

    ctx.output.info("[messaging]");
    ctx.output.kv("domain", &config.messaging.domain);

    ctx.output.info("[logging]");
    ctx.output.kv("level", config.logging.level.as_str());
    ctx.output.kv("format", &format!("{:?}", config.logging.format).to_lowercase());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    StorefrontConfig::default().save(&config_path.to_string_lossy())?;
    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Output;

    fn context(dir: &std::path::Path) -> Context {
        Context {
            config: StorefrontConfig::default(),
            output: Output::new(false, true),
            cwd: dir.to_path_buf(),
        }
    }

    #[test]
    fn test_init_writes_loadable_default() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());

        init_config(false, &ctx).unwrap();
        let path = dir.path().join("bite.toml");
        let loaded = StorefrontConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded, StorefrontConfig::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());

        init_config(false, &ctx).unwrap();
        assert!(init_config(false, &ctx).is_err());
        assert!(init_config(true, &ctx).is_ok());
    }
}
