//! inkpress - RGB -> CMYK separation demos on Little CMS 2

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "inkpress")]
#[command(version, about = "RGB -> CMYK separation demos on Little CMS 2")]
#[command(long_about = "
Demonstrations of the inkpress separation converter.

Examples:
  inkpress swatch -s sRGB.icc -d fogra39.icc
  inkpress image photo.png separated.tif -s sRGB.icc -d fogra39.icc
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Separate a handful of RGB swatches and print the CMYK values
    Swatch(commands::swatch::SwatchArgs),

    /// Separate an RGB image into a 16-bit CMYK TIFF
    #[command(visible_alias = "img")]
    Image(commands::image::ImageArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Swatch(args) => commands::swatch::run(args),
        Commands::Image(args) => commands::image::run(args),
    }
}
