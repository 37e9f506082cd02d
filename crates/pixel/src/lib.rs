//! Pixelization engine
//!
//! Turns a source raster into a blocky mosaic of the same size:
//!
//! 1. shrink to `max(1, w / block) x max(1, h / block)` with nearest-neighbour
//!    sampling (no smoothing)
//! 2. scale back up to `w x h`, again nearest-neighbour
//!
//! Every output block is therefore one flat colour taken from the source.
//! The engine is stateless; identical inputs always give identical pixels.

use std::io::Cursor;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, RgbaImage};

use pixel_guess_core::{GameError, Result};

/// Prefix of every data URI produced here.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Decode an in-memory image (PNG, JPEG, WebP).
pub fn decode(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).map_err(|e| GameError::image_load("<memory>", e))
}

/// Read and decode an image file.
pub fn open(path: &Path) -> Result<DynamicImage> {
    let shown = || path.display().to_string();
    let bytes = std::fs::read(path).map_err(|e| GameError::image_load(shown(), e))?;
    image::load_from_memory(&bytes).map_err(|e| GameError::image_load(shown(), e))
}

/// Dimensions of the intermediate low-resolution raster.
///
/// A block size of 0 is treated as 1.
pub fn reduced_size(width: u32, height: u32, block: u32) -> (u32, u32) {
    let block = block.max(1);
    ((width / block).max(1), (height / block).max(1))
}

/// Pixelize `img` with square blocks of `block` source pixels.
///
/// The result has exactly the source dimensions.
pub fn pixelize(img: &DynamicImage, block: u32) -> RgbaImage {
    let rgba = img.to_rgba8();
    pixelize_rgba(&rgba, block)
}

/// [`pixelize`] for an already converted RGBA raster.
pub fn pixelize_rgba(src: &RgbaImage, block: u32) -> RgbaImage {
    let (width, height) = src.dimensions();
    if width == 0 || height == 0 {
        return src.clone();
    }
    let (w, h) = reduced_size(width, height, block);
    let small = imageops::resize(src, w, h, FilterType::Nearest);
    imageops::resize(&small, width, height, FilterType::Nearest)
}

/// Encode a raster as PNG bytes.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .map_err(|e| GameError::image_load("<png encoder>", e))?;
    Ok(out.into_inner())
}

/// Wrap PNG bytes as a `data:image/png;base64,...` URI.
pub fn png_data_uri(png: &[u8]) -> String {
    let mut uri = String::with_capacity(PNG_DATA_URI_PREFIX.len() + png.len() * 4 / 3 + 4);
    uri.push_str(PNG_DATA_URI_PREFIX);
    STANDARD.encode_string(png, &mut uri);
    uri
}

/// Pixelize and encode as a PNG data URI in one step.
pub fn pixelize_data_uri(img: &DynamicImage, block: u32) -> Result<String> {
    let png = encode_png(&pixelize(img, block))?;
    Ok(png_data_uri(&png))
}
