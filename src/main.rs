use anyhow::{Context, Result};
use log::info;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let jobs = badgeicon::default_jobs();
    let reports = badgeicon::generate_all(&jobs).context("failed to generate icon set")?;

    info!("generated {} icons", reports.len());
    Ok(())
}
