//! Swatch separation demo.
//!
//! Separates a small set of 16-bit RGB swatches and prints the resulting
//! CMYK values both raw and as ink percentages.

use super::ProfileArgs;
use anyhow::Result;
use clap::Args;
use inkpress_core::{Cmyk16, Rgb16, CHANNEL_MAX};
use tracing::info;

#[derive(Args, Debug)]
pub struct SwatchArgs {
    #[command(flatten)]
    pub profiles: ProfileArgs,
}

const SWATCHES: &[(&str, Rgb16)] = &[
    ("black", Rgb16::new(0, 0, 0)),
    ("white", Rgb16::new(CHANNEL_MAX, CHANNEL_MAX, CHANNEL_MAX)),
    ("red", Rgb16::new(CHANNEL_MAX, 0, 0)),
    ("green", Rgb16::new(0, CHANNEL_MAX, 0)),
    ("blue", Rgb16::new(0, 0, CHANNEL_MAX)),
];

pub fn run(args: SwatchArgs) -> Result<()> {
    let converter = super::ready_converter(&args.profiles)?;
    info!(
        source = %args.profiles.source.display(),
        destination = %args.profiles.destination.display(),
        "converter ready"
    );

    let input: Vec<Rgb16> = SWATCHES.iter().map(|(_, rgb)| *rgb).collect();
    let mut output = vec![Cmyk16::default(); input.len()];
    converter.convert(&input, &mut output)?;

    for ((name, rgb), cmyk) in SWATCHES.iter().zip(&output) {
        let [c, m, y, k] = cmyk.percentages();
        println!(
            "{name:>5}  rgb({:5}, {:5}, {:5})  ->  cmyk({:5}, {:5}, {:5}, {:5})  {c:5.1}% {m:5.1}% {y:5.1}% {k:5.1}%",
            rgb.r, rgb.g, rgb.b, cmyk.c, cmyk.m, cmyk.y, cmyk.k
        );
    }

    Ok(())
}
