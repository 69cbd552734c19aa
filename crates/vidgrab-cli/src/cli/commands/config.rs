//! `vidgrab-cli config` – show where the config lives and what it says.

use anyhow::Result;
use vidgrab_core::config::{self, VidgrabConfig};

pub fn run_config(cfg: &VidgrabConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    println!("# effective save_dir = {}", cfg.effective_save_dir().display());
    Ok(())
}
