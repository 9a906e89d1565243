use crate::commands::Cli;
use crate::split::split_image;
use anyhow::Result;
use clap::{Parser, crate_name, crate_version};
use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;
use log::info;

mod cd;
mod commands;
mod cue;
mod split;
mod wav;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let logger = env_logger::builder()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .build();

    let level = logger.filter();
    let pb = MultiProgress::new();

    LogWrapper::new(pb.clone(), logger).try_init()?;
    log::set_max_level(level);

    info!("{} v{}", crate_name!(), crate_version!());

    let outputs = split_image(pb, cli).await?;

    info!("Split complete, {} track file(s) written", outputs.len());

    Ok(())
}
