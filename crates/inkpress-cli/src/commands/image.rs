//! Image separation demo.
//!
//! Decodes an RGB image (PNG/JPEG), widens it to 16 bits, separates it,
//! and writes a 16-bit CMYK TIFF with LZW compression and the destination
//! ICC profile embedded so downstream tools can interpret the inks.

use super::ProfileArgs;
use anyhow::{Context, Result};
use clap::Args;
use inkpress_core::{Cmyk16, Rgb16};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::PathBuf;
use tiff::encoder::{colortype, Compression, TiffEncoder, TiffValue};
use tiff::tags::{Tag, Type as TiffType};
use tracing::{debug, info};

/// TIFF tag 34675, the embedded ICC profile.
const TAG_ICC_PROFILE: Tag = Tag::Unknown(34675);

#[derive(Args, Debug)]
pub struct ImageArgs {
    /// Input image (PNG or JPEG)
    pub input: PathBuf,

    /// Output TIFF file
    pub output: PathBuf,

    #[command(flatten)]
    pub profiles: ProfileArgs,
}

/// ICC payloads are written as UNDEFINED bytes, not BYTE.
struct UndefinedBytes<'a>(&'a [u8]);

impl TiffValue for UndefinedBytes<'_> {
    const BYTE_LEN: u8 = 1;
    const FIELD_TYPE: TiffType = TiffType::UNDEFINED;

    fn count(&self) -> usize {
        self.0.len()
    }

    fn data(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.0)
    }
}

pub fn run(args: ImageArgs) -> Result<()> {
    let converter = super::ready_converter(&args.profiles)?;

    let decoded = image::open(&args.input)
        .with_context(|| format!("failed to decode {}", args.input.display()))?
        .to_rgb8();
    let (width, height) = decoded.dimensions();
    info!(
        input = %args.input.display(),
        width,
        height,
        "separating image"
    );

    let input: Vec<Rgb16> = decoded
        .pixels()
        .map(|px| Rgb16::from_8bit(px[0], px[1], px[2]))
        .collect();
    let mut separated = vec![Cmyk16::default(); input.len()];
    converter.convert(&input, &mut separated)?;

    let icc = converter
        .destination_profile()
        .context("converter lost its destination profile")?
        .to_bytes()
        .context("failed to serialize destination profile")?;
    debug!(icc_bytes = icc.len(), "embedding destination profile");

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    write_cmyk_tiff(BufWriter::new(file), width, height, &separated, &icc)?;

    info!(output = %args.output.display(), "wrote separated TIFF");
    println!(
        "{} -> {} ({}x{} CMYK16, LZW, ICC embedded)",
        args.input.display(),
        args.output.display(),
        width,
        height
    );
    Ok(())
}

/// Encodes a CMYK16 buffer as an LZW-compressed TIFF with the given ICC
/// profile embedded under tag 34675.
fn write_cmyk_tiff<W: Write + Seek>(
    writer: W,
    width: u32,
    height: u32,
    pixels: &[Cmyk16],
    icc: &[u8],
) -> Result<()> {
    let mut encoder = TiffEncoder::new(writer)
        .context("failed to start TIFF encoder")?
        .with_compression(Compression::Lzw);

    let mut tiff_image = encoder
        .new_image::<colortype::CMYK16>(width, height)
        .context("failed to start CMYK16 image")?;
    tiff_image
        .encoder()
        .write_tag(TAG_ICC_PROFILE, UndefinedBytes(icc))
        .context("failed to embed ICC profile")?;

    let mut samples: Vec<u16> = Vec::with_capacity(pixels.len() * 4);
    for px in pixels {
        samples.extend_from_slice(&[px.c, px.m, px.y, px.k]);
    }
    tiff_image
        .write_data(&samples)
        .context("failed to write CMYK scanlines")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tiff::decoder::{Decoder, DecodingResult};
    use tiff::ColorType;

    #[test]
    fn test_cmyk_tiff_roundtrip_with_icc() {
        let pixels = [
            Cmyk16::new(0, 0, 0, 65535),
            Cmyk16::new(65535, 0, 0, 0),
            Cmyk16::new(0, 65535, 0, 0),
            Cmyk16::new(0, 0, 65535, 0),
        ];
        let icc = b"not-a-real-profile";

        let mut buf = Cursor::new(Vec::new());
        write_cmyk_tiff(&mut buf, 2, 2, &pixels, icc).unwrap();

        buf.set_position(0);
        let mut decoder = Decoder::new(buf).unwrap();
        assert_eq!(decoder.dimensions().unwrap(), (2, 2));
        assert_eq!(decoder.colortype().unwrap(), ColorType::CMYK(16));

        // LZW is compression scheme 5.
        assert_eq!(decoder.get_tag_u32(Tag::Compression).unwrap(), 5);
        assert_eq!(decoder.get_tag_u8_vec(TAG_ICC_PROFILE).unwrap(), icc);

        match decoder.read_image().unwrap() {
            DecodingResult::U16(samples) => {
                assert_eq!(samples.len(), 16);
                assert_eq!(&samples[..4], &[0, 0, 0, 65535]);
                assert_eq!(&samples[4..8], &[65535, 0, 0, 0]);
            }
            other => panic!("unexpected decoding result: {other:?}"),
        }
    }
}
