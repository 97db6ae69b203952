use anyhow::{Context, Result};

use starlit_core::AppConfig;

/// Print the active configuration (file values merged with defaults)
pub fn show(config: &AppConfig) -> Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}

/// Write the default configuration, unless one already exists
pub fn init() -> Result<()> {
    let path = AppConfig::config_path();
    if path.exists() {
        println!("Configuration already exists at {}", path.display());
        return Ok(());
    }

    AppConfig::default()
        .save()
        .context("failed to write default configuration")?;
    println!("Wrote default configuration to {}", path.display());

    Ok(())
}
