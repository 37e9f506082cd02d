//! Background image loader.
//!
//! Bridges the sync game loop with a small tokio runtime: decode and
//! pixelize run on the blocking pool, results come back over a channel the
//! loop drains with [`ImageLoader::try_recv`] once per frame.
//!
//! The loader does not know which ticket is current. Results for superseded
//! tickets are still delivered; the round engine ignores them.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use tokio::runtime::{Builder, Runtime};
use tokio::sync::mpsc;
use tracing::debug;

use pixel_guess_core::{LoadRequest, LoadedImages, Result};

/// Result of one load request.
#[derive(Debug)]
pub struct LoadOutcome {
    pub ticket: u64,
    pub result: Result<LoadedImages<RgbaImage>>,
}

/// Running loader instance.
pub struct ImageLoader {
    rt: Runtime,
    root: PathBuf,
    done_tx: mpsc::UnboundedSender<LoadOutcome>,
    done_rx: mpsc::UnboundedReceiver<LoadOutcome>,
}

impl ImageLoader {
    /// Start a loader resolving image paths against the asset `root`.
    pub fn new(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let rt = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("pixel-guess-loader")
            .build()?;
        let (done_tx, done_rx) = mpsc::unbounded_channel();
        Ok(Self {
            rt,
            root: root.into(),
            done_tx,
            done_rx,
        })
    }

    /// Queue a request. The outcome arrives later through `try_recv`.
    pub fn request(&self, req: LoadRequest) {
        debug!(ticket = req.ticket, path = %req.path, "image load queued");
        let path = self.root.join(&req.path);
        let tx = self.done_tx.clone();
        self.rt.spawn_blocking(move || {
            let result = load_round_images(&path, req.block_size);
            // Receiver gone means the loader was dropped; nothing to do.
            let _ = tx.send(LoadOutcome {
                ticket: req.ticket,
                result,
            });
        });
    }

    pub fn try_recv(&mut self) -> Option<LoadOutcome> {
        self.done_rx.try_recv().ok()
    }

    /// Block until the next outcome. Must not be called from async context.
    pub fn recv_blocking(&mut self) -> Option<LoadOutcome> {
        self.done_rx.blocking_recv()
    }
}

impl std::fmt::Debug for ImageLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageLoader").field("root", &self.root).finish()
    }
}

/// Decode `path` and build the round's pixelized and source rasters.
pub fn load_round_images(path: &Path, block_size: u32) -> Result<LoadedImages<RgbaImage>> {
    let img = pixel_guess_pixel::open(path)?;
    let source = img.to_rgba8();
    let pixelized = pixel_guess_pixel::pixelize_rgba(&source, block_size);
    Ok(LoadedImages { pixelized, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use pixel_guess_core::GameError;
    use tempfile::TempDir;

    fn write_png(dir: &TempDir, rel: &str) {
        let path = dir.path().join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        let img = RgbaImage::from_fn(40, 20, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        img.save(&path).unwrap();
    }

    #[test]
    fn loads_and_pixelizes_off_thread() {
        let dir = TempDir::new().unwrap();
        write_png(&dir, "ImagesChamps/DefaultChamps/Ashe_0.png");

        let mut loader = ImageLoader::new(dir.path()).unwrap();
        loader.request(LoadRequest {
            ticket: 7,
            path: "ImagesChamps/DefaultChamps/Ashe_0.png".into(),
            block_size: 10,
        });

        let outcome = loader.recv_blocking().unwrap();
        assert_eq!(outcome.ticket, 7);
        let images = outcome.result.unwrap();
        assert_eq!(images.pixelized.dimensions(), (40, 20));
        assert_eq!(images.source.dimensions(), (40, 20));
        assert_ne!(images.pixelized, images.source);
    }

    #[test]
    fn missing_image_reports_image_load() {
        let dir = TempDir::new().unwrap();
        let mut loader = ImageLoader::new(dir.path()).unwrap();
        loader.request(LoadRequest {
            ticket: 1,
            path: "ImagesItems/Arena/missing.png".into(),
            block_size: 10,
        });
        let outcome = loader.recv_blocking().unwrap();
        assert!(matches!(outcome.result, Err(GameError::ImageLoad { .. })));
    }

    #[test]
    fn try_recv_is_non_blocking() {
        let dir = TempDir::new().unwrap();
        let mut loader = ImageLoader::new(dir.path()).unwrap();
        assert!(loader.try_recv().is_none());
    }
}
