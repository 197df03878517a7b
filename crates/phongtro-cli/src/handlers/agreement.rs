use crate::config::{Config, expand_tilde};
use anyhow::Result;
use phongtro_sdk::Client;
use phongtro_types::AgreementId;
use std::path::PathBuf;

pub fn download(client: &Client, config: &Config, id: &str, out: Option<&str>) -> Result<()> {
    let dir: PathBuf = out
        .or(config.downloads.dir.as_deref())
        .map(expand_tilde)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir)?;

    let path = client
        .agreements()
        .download_to(&AgreementId::new(id), &dir)?;

    println!("Saved {}", path.display());
    Ok(())
}
