use std::{path::Path, sync::Arc};

use anyhow::Context;
use image::{
    DynamicImage, RgbImage, Rgba, RgbaImage,
    imageops::{self, FilterType},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::foundation::error::SongTilesResult;

/// Side length photos are cropped and scaled to (~254dpi across a 6cm tile).
pub const PHOTO_PIXELS: u32 = 600;

#[derive(Clone, Debug)]
/// Background photo: square, opaque RGB8.
pub struct Photo {
    pub image: Arc<RgbImage>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Position of a photo in its [`PhotoPool`].
pub struct PhotoId(pub usize);

#[derive(Clone, Debug, Default)]
/// Unordered pool of background photos. No photo belongs to any particular song.
pub struct PhotoPool {
    photos: Vec<Photo>,
}

impl PhotoPool {
    pub fn new(photos: Vec<Photo>) -> Self {
        Self { photos }
    }

    /// Decode every file in `paths`; any unreadable file fails the whole load.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> SongTilesResult<Self> {
        let mut photos = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            let bytes =
                std::fs::read(path).with_context(|| format!("read photo '{}'", path.display()))?;
            let photo = decode_photo(&bytes)
                .with_context(|| format!("decode photo '{}'", path.display()))?;
            photos.push(photo);
        }
        Ok(Self { photos })
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn get(&self, id: PhotoId) -> Option<&Photo> {
        self.photos.get(id.0)
    }

    /// Keep at most `max` photos; extra uploads beyond one per song are never needed.
    pub fn truncate(&mut self, max: usize) {
        self.photos.truncate(max);
    }
}

/// Decode encoded image bytes into a square [`Photo`].
///
/// Transparent pixels are composited over white, then the image is center-cropped to a square
/// and scaled to [`PHOTO_PIXELS`].
pub fn decode_photo(bytes: &[u8]) -> SongTilesResult<Photo> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let square = dyn_img.resize_to_fill(PHOTO_PIXELS, PHOTO_PIXELS, FilterType::Triangle);
    let mut canvas = RgbaImage::from_pixel(PHOTO_PIXELS, PHOTO_PIXELS, Rgba([255, 255, 255, 255]));
    imageops::overlay(&mut canvas, &square.to_rgba8(), 0, 0);
    let rgb = DynamicImage::ImageRgba8(canvas).to_rgb8();

    Ok(Photo {
        image: Arc::new(rgb),
    })
}

/// Chooses a background photo per back tile: uniform, with replacement.
#[derive(Clone, Debug)]
pub struct PhotoPicker<R = StdRng> {
    rng: R,
}

impl PhotoPicker<StdRng> {
    /// Reproducible picks for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> PhotoPicker<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// `None` for an empty pool.
    pub fn pick(&mut self, pool: &PhotoPool) -> Option<PhotoId> {
        if pool.is_empty() {
            return None;
        }
        Some(PhotoId(self.rng.gen_range(0..pool.len())))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/photo.rs"]
mod tests;
