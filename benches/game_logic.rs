use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{DynamicImage, Rgba, RgbaImage};

use pixel_guess::core::{
    normalize, rank, Catalog, CatalogProvider, LoadedImages, MemoryPreferences, RoundEngine,
};
use pixel_guess::pixel;
use pixel_guess::term::{FrameBuffer, GameView, StatusLine, Viewport};
use pixel_guess::types::{CatalogEntry, CatalogKind, Category};

/// Roughly a champion splash (1215x717).
fn splash() -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(1215, 717, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8, 255])
    }))
}

fn names() -> Vec<String> {
    (0..170).map(|i| format!("Chämpion_{i:03} Nàme")).collect()
}

fn bench_pixelize(c: &mut Criterion) {
    let img = splash();
    c.bench_function("pixelize_splash_block_33", |b| {
        b.iter(|| pixel::pixelize(black_box(&img), black_box(33)))
    });
    c.bench_function("pixelize_data_uri_block_59", |b| {
        b.iter(|| pixel::pixelize_data_uri(black_box(&img), black_box(59)))
    });
}

fn bench_rank(c: &mut Criterion) {
    let pool = names();
    c.bench_function("rank_170_names", |b| {
        b.iter(|| rank(black_box("cha"), black_box(&pool)))
    });
    c.bench_function("normalize_name", |b| {
        b.iter(|| normalize(black_box("  Héimérdinger_the   Revered  ")))
    });
}

fn bench_render(c: &mut Criterion) {
    let entries = vec![CatalogEntry::new("a.png", "Ashe", Category::Default)];
    let catalog = Catalog::new(CatalogKind::Characters, entries).with_names(names());
    let provider = CatalogProvider::new(Arc::new(catalog), Box::new(MemoryPreferences::new()));
    let mut engine: RoundEngine<RgbaImage> = RoundEngine::new(provider, 33, 1);
    let req = engine.begin_session().unwrap();
    let mosaic = pixel::pixelize(&splash(), 33);
    engine.complete_load(
        req.ticket,
        Ok(LoadedImages {
            pixelized: mosaic.clone(),
            source: mosaic,
        }),
    );
    engine.set_guess_input("cha");

    let view = GameView::default();
    let mut fb = FrameBuffer::new(160, 50);
    let status = StatusLine {
        title: "Characters - Medium",
        subtitle: Some("A little spicy"),
        message: None,
    };
    c.bench_function("render_frame_160x50", |b| {
        b.iter(|| {
            view.render_into(&engine.snapshot(), status, Viewport::new(160, 50), &mut fb);
        })
    });
}

criterion_group!(benches, bench_pixelize, bench_rank, bench_render);
criterion_main!(benches);
