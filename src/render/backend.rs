use image::RgbImage;

use crate::{
    assets::photo::PhotoPool,
    compile::plan::{DrawOp, ImageSource, SheetPlan, TextOp},
    foundation::core::{Rect, Rgb8},
    foundation::error::{SongTilesError, SongTilesResult},
};

/// Stateful drawing surface a [`SheetPlan`] is replayed onto.
///
/// Coordinates are centimeters from the current page's top-left corner. Calls arrive in
/// strict page order; drawing before the first [`DocumentBackend::begin_page`] is an error.
pub trait DocumentBackend {
    fn begin_page(&mut self) -> SongTilesResult<()>;

    fn fill_rect(&mut self, rect: Rect, color: Rgb8) -> SongTilesResult<()>;

    fn stroke_rect(&mut self, rect: Rect, color: Rgb8, width_cm: f64) -> SongTilesResult<()>;

    /// Stretch `image` over `rect`.
    fn draw_image(&mut self, image: &RgbImage, rect: Rect) -> SongTilesResult<()>;

    fn draw_text(&mut self, text: &TextOp) -> SongTilesResult<()>;
}

/// Replay every page of `plan` onto `backend`. Photo references resolve against `photos`.
///
/// Any backend error aborts the pass; a partially drawn document is not recoverable.
#[tracing::instrument(skip_all, fields(pages = plan.pages.len()))]
pub fn execute_plan<B: DocumentBackend + ?Sized>(
    backend: &mut B,
    plan: &SheetPlan,
    photos: &PhotoPool,
) -> SongTilesResult<()> {
    for page in &plan.pages {
        backend.begin_page()?;
        for op in &page.ops {
            match op {
                DrawOp::FillRect { rect, color } => backend.fill_rect(*rect, *color)?,
                DrawOp::StrokeRect {
                    rect,
                    color,
                    width_cm,
                } => backend.stroke_rect(*rect, *color, *width_cm)?,
                DrawOp::Image { source, rect } => {
                    let image = resolve_image(*source, plan, photos)?;
                    backend.draw_image(image, *rect)?;
                }
                DrawOp::Text(text) => backend.draw_text(text)?,
            }
        }
    }
    Ok(())
}

fn resolve_image<'a>(
    source: ImageSource,
    plan: &'a SheetPlan,
    photos: &'a PhotoPool,
) -> SongTilesResult<&'a RgbImage> {
    match source {
        ImageSource::Photo(id) => photos
            .get(id)
            .map(|p| p.image.as_ref())
            .ok_or_else(|| SongTilesError::render(format!("unknown photo {}", id.0))),
        ImageSource::Raster(id) => plan
            .raster(id)
            .ok_or_else(|| SongTilesError::render(format!("unknown raster {}", id.0))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
