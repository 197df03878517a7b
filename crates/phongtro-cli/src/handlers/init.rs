use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

pub fn handle(config_path: &PathBuf) -> Result<()> {
    if config_path.exists() {
        println!("Config already exists: {}", config_path.display());
        println!("Edit it directly to change the backend or token.");
        return Ok(());
    }

    Config::default().save_to(config_path)?;

    println!("Wrote {}", config_path.display());
    println!("\nNext steps:");
    println!("  1. Fill in [api] base_url and access_token");
    println!("  2. phongtro rental list");
    Ok(())
}
