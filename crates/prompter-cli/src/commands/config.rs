use anyhow::Result;

use prompter_core::AppConfig;

/// Write the current (or default) configuration to the config file
pub fn init(config: &AppConfig) -> Result<()> {
    config.save()?;
    println!("Wrote {}", AppConfig::config_path().display());
    Ok(())
}

/// Print the configuration file path
pub fn path() -> Result<()> {
    println!("{}", AppConfig::config_path().display());
    Ok(())
}
