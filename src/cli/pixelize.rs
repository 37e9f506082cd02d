use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use pixel_guess::pixel;

pub fn pixelize_command(image: &Path, block: u32, out: Option<PathBuf>) -> Result<()> {
    let img = pixel::open(image)?;

    match out {
        Some(out) => {
            let png = pixel::encode_png(&pixel::pixelize(&img, block))?;
            std::fs::write(&out, png)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            info!(input = %image.display(), output = %out.display(), block, "pixelized");
        }
        None => println!("{}", pixel::pixelize_data_uri(&img, block)?),
    }
    Ok(())
}
