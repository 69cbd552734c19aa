//! `vidgrab-cli options` – print the resolved yt-dlp options mapping.

use anyhow::Result;
use vidgrab_core::config::VidgrabConfig;

use super::resolve;
use crate::cli::Selection;

pub fn run_options(cfg: &VidgrabConfig, sel: &Selection) -> Result<()> {
    let (request, options) = resolve(cfg, "", sel);
    let options = options.with_outtmpl(request.output_template());
    println!("{}", serde_json::to_string_pretty(&options)?);
    Ok(())
}
