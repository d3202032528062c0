//! CLI subcommands.

pub mod image;
pub mod swatch;

use anyhow::{Context, Result};
use clap::Args;
use inkpress_core::SeparationConverter;
use std::path::PathBuf;

/// Profile options shared by every subcommand.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Source (RGB) ICC profile
    #[arg(short = 's', long = "source-profile", value_name = "ICC")]
    pub source: PathBuf,

    /// Destination (CMYK) ICC profile
    #[arg(short = 'd', long = "destination-profile", value_name = "ICC")]
    pub destination: PathBuf,
}

/// Builds a ready converter from the shared profile arguments.
pub fn ready_converter(profiles: &ProfileArgs) -> Result<SeparationConverter> {
    let mut converter = SeparationConverter::new();
    converter
        .initialize(&profiles.source, &profiles.destination)
        .context("failed to initialize separation converter")?;
    Ok(converter)
}
