use image::{Luma, Rgb, RgbImage};
use qrcode::QrCode;

use crate::foundation::error::{SongTilesError, SongTilesResult};

/// Pixel size requested for a code rendered across a whole 6cm tile (~72dpi).
pub const QR_MIN_PIXELS: u32 = 170;

/// Encodes a payload (URL) into a black-on-white raster.
pub trait QrEncoder {
    fn encode(&self, payload: &str) -> SongTilesResult<RgbImage>;
}

/// [`QrEncoder`] backed by the `qrcode` crate.
#[derive(Clone, Copy, Debug)]
pub struct QrCodeEncoder {
    /// Minimum width/height of the symbol, excluding the margin.
    pub min_pixels: u32,
    /// White border around the symbol, in modules.
    pub margin_modules: u32,
}

impl Default for QrCodeEncoder {
    fn default() -> Self {
        Self {
            min_pixels: QR_MIN_PIXELS,
            margin_modules: 1,
        }
    }
}

impl QrEncoder for QrCodeEncoder {
    fn encode(&self, payload: &str) -> SongTilesResult<RgbImage> {
        let code = QrCode::new(payload.as_bytes())
            .map_err(|e| SongTilesError::qr(format!("encode {} byte payload: {e}", payload.len())))?;
        let modules = u32::try_from(code.width())
            .map_err(|_| SongTilesError::qr("symbol width overflow"))?
            .max(1);

        let symbol = code
            .render::<Luma<u8>>()
            .quiet_zone(false)
            .min_dimensions(self.min_pixels, self.min_pixels)
            .build();

        let pad = (symbol.width() / modules) * self.margin_modules;
        let mut out = RgbImage::from_pixel(
            symbol.width() + 2 * pad,
            symbol.height() + 2 * pad,
            Rgb([255, 255, 255]),
        );
        for (x, y, px) in symbol.enumerate_pixels() {
            let l = px.0[0];
            out.put_pixel(x + pad, y + pad, Rgb([l, l, l]));
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/qr.rs"]
mod tests;
