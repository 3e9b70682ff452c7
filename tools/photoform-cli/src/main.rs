//! photoform-cli - generate preview GLBs from uploaded images
//!
//! Stands in for the uploader front-end: samples one dominant color per input
//! image, derives the sphere tessellation from the image count, and writes
//! the finished .glb to disk.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use photoform::{convert_with_progress, PreviewRequest};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "photoform-cli")]
#[command(about = "Procedural preview GLB generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a colored sphere preview from a set of images
    Scan {
        /// Input image files (PNG/JPEG)
        #[arg(required = true)]
        images: Vec<PathBuf>,

        /// Output .glb file
        #[arg(short, long, default_value = "preview.glb")]
        output: PathBuf,
    },

    /// Build the fixed calibration cube
    Cube {
        /// Output .glb file
        #[arg(short, long, default_value = "cube.glb")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { images, output } => {
            let mut sampled = Vec::with_capacity(images.len());
            for path in &images {
                let color = sample_dominant_color(path)
                    .with_context(|| format!("Failed to sample {:?}", path))?;
                tracing::info!(
                    "Sampled {:?}: ({:.3}, {:.3}, {:.3})",
                    path,
                    color[0],
                    color[1],
                    color[2]
                );
                sampled.push(color);
            }

            let request = PreviewRequest::scan(sampled);
            write_preview(&request, &output)?;
        }

        Commands::Cube { output } => {
            write_preview(&PreviewRequest::cube(), &output)?;
        }
    }

    Ok(())
}

fn write_preview(request: &PreviewRequest, output: &Path) -> Result<()> {
    let glb = convert_with_progress(request, |percent| {
        tracing::debug!("Progress: {percent}%");
    })?;
    std::fs::write(output, &glb).with_context(|| format!("Failed to write {:?}", output))?;
    println!("Generated: {} ({} bytes)", output.display(), glb.len());
    Ok(())
}

/// Average RGB of a downscaled copy of the image, components in [0, 1].
///
/// Full clustering would be overkill for the preview; one stable
/// representative color per photo is all the colorizer consumes.
fn sample_dominant_color(path: &Path) -> Result<[f32; 3]> {
    let image = image::open(path).context("Failed to decode image")?;
    let thumb = image.thumbnail(32, 32).to_rgb8();

    let mut sum = [0.0f64; 3];
    for pixel in thumb.pixels() {
        for channel in 0..3 {
            sum[channel] += pixel[channel] as f64 / 255.0;
        }
    }

    let pixel_count = (thumb.width() * thumb.height()) as f64;
    Ok([
        (sum[0] / pixel_count) as f32,
        (sum[1] / pixel_count) as f32,
        (sum[2] / pixel_count) as f32,
    ])
}
