use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

mod images {
    pub mod manifest;
    pub mod optimizer;
}
mod static_site;

use images::manifest::{build_manifest, write_manifest};
use images::optimizer::{optimize_all, OptimizeOptions, DEFAULT_AVIF_SPEED, DEFAULT_QUALITY};

#[derive(Parser)]
#[command(name = "supplier-backend", version, about = "Preview server and asset tooling for the Supplier IT site")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the built site with SPA fallback.
    Serve {
        #[arg(long, env = "SITE_DIST_DIR", default_value = "dist")]
        dist: PathBuf,
        #[arg(long, env = "SITE_ADDR", default_value = "127.0.0.1:4173")]
        addr: SocketAddr,
    },
    /// Convert source images to jpg/webp/avif at responsive widths and write a manifest.
    OptimizeImages {
        #[arg(long, env = "IMAGES_INPUT_DIR", default_value = "public/images")]
        input: PathBuf,
        #[arg(long, env = "IMAGES_OUTPUT_DIR", default_value = "public/optimized")]
        output: PathBuf,
        #[arg(long, default_value_t = DEFAULT_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
        quality: u8,
        #[arg(long, default_value_t = DEFAULT_AVIF_SPEED, value_parser = clap::value_parser!(u8).range(1..=10))]
        avif_speed: u8,
    },
}

fn run_optimizer(options: &OptimizeOptions) -> anyhow::Result<()> {
    tracing::info!("Starting image optimization from {}", options.input_dir.display());
    let report = optimize_all(options)?;
    if report.found == 0 {
        tracing::info!("Add images to {} and run again", options.input_dir.display());
    }

    let manifest = build_manifest(&options.output_dir, chrono::Utc::now())?;
    write_manifest(&options.output_dir, &manifest)?;

    tracing::info!(
        "Image optimization complete: {} optimized, {} failed, {} files written to {}",
        report.optimized,
        report.failed,
        report.files_written,
        options.output_dir.display()
    );
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Cli::parse().command {
        Command::Serve { dist, addr } => static_site::serve(&dist, addr).await,
        Command::OptimizeImages { input, output, quality, avif_speed } => {
            let options = OptimizeOptions { quality, avif_speed, ..OptimizeOptions::new(input, output) };
            tokio::task::spawn_blocking(move || run_optimizer(&options))
                .await
                .context("image optimizer task panicked")?
        }
    }
}
