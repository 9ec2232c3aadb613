use std::io::BufWriter;

use image::RgbImage;
use printpdf::{
    BuiltinFont, Color, ColorBits, ColorSpace, Image as PdfImage, ImageTransform, ImageXObject,
    IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerIndex,
    PdfLayerReference, PdfPageIndex, Point as PdfPoint, Polygon, Px, Rgb as PdfRgb,
    path::{PaintMode, WindingOrder},
};

use crate::{
    compile::plan::{TextAlign, TextOp},
    foundation::core::{CM_PER_PT, Rect, Rgb8},
    foundation::error::{SongTilesError, SongTilesResult},
    layout::grid::{PAGE_HEIGHT_CM, PAGE_WIDTH_CM},
    render::{
        backend::DocumentBackend,
        text::{line_height_cm, text_width_cm, wrap_lines},
    },
};

const LAYER_NAME: &str = "Tiles";

/// [`DocumentBackend`] writing an A4 PDF with `printpdf`.
///
/// One instance per generated document; [`PdfBackend::finish`] consumes it.
pub struct PdfBackend {
    doc: PdfDocumentReference,
    font: IndirectFontRef,
    /// The page `PdfDocument::new` creates up front, handed out by the first `begin_page`.
    initial: Option<(PdfPageIndex, PdfLayerIndex)>,
    layer: Option<PdfLayerReference>,
    pages: usize,
}

impl PdfBackend {
    pub fn new(title: &str) -> SongTilesResult<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, cm_to_mm(PAGE_WIDTH_CM), cm_to_mm(PAGE_HEIGHT_CM), LAYER_NAME);
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| SongTilesError::render(format!("load builtin font: {e}")))?;
        Ok(Self {
            doc,
            font,
            initial: Some((page, layer)),
            layer: None,
            pages: 0,
        })
    }

    /// Pages started so far.
    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Serialize the document. A document with no pages still contains one blank page.
    pub fn finish(self) -> SongTilesResult<Vec<u8>> {
        let mut writer = BufWriter::new(Vec::new());
        self.doc
            .save(&mut writer)
            .map_err(|e| SongTilesError::render(format!("serialize pdf: {e}")))?;
        writer
            .into_inner()
            .map_err(|e| SongTilesError::render(format!("flush pdf: {e}")))
    }

    fn layer(&self) -> SongTilesResult<&PdfLayerReference> {
        self.layer
            .as_ref()
            .ok_or_else(|| SongTilesError::render("draw call before first page"))
    }
}

impl DocumentBackend for PdfBackend {
    fn begin_page(&mut self) -> SongTilesResult<()> {
        let (page, layer) = match self.initial.take() {
            Some(first) => first,
            None => self.doc.add_page(
                cm_to_mm(PAGE_WIDTH_CM),
                cm_to_mm(PAGE_HEIGHT_CM),
                LAYER_NAME,
            ),
        };
        self.layer = Some(self.doc.get_page(page).get_layer(layer));
        self.pages += 1;
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb8) -> SongTilesResult<()> {
        let layer = self.layer()?;
        layer.set_fill_color(pdf_color(color));
        layer.add_polygon(Polygon {
            rings: vec![rect_points(rect)],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgb8, width_cm: f64) -> SongTilesResult<()> {
        let layer = self.layer()?;
        layer.set_outline_color(pdf_color(color));
        layer.set_outline_thickness((width_cm / CM_PER_PT) as f32);
        layer.add_line(Line {
            points: rect_points(rect),
            is_closed: true,
        });
        Ok(())
    }

    fn draw_image(&mut self, image: &RgbImage, rect: Rect) -> SongTilesResult<()> {
        let layer = self.layer()?;
        let (width_px, height_px) = image.dimensions();
        if width_px == 0 || height_px == 0 || rect.width() <= 0.0 || rect.height() <= 0.0 {
            return Err(SongTilesError::render("cannot place an empty image"));
        }

        // printpdf sizes images by DPI; pick the DPI that maps the width onto the rect,
        // then scale vertically for the height.
        let dpi = f64::from(width_px) / (rect.width() / 2.54);
        let natural_h_cm = f64::from(height_px) / dpi * 2.54;
        let scale_y = rect.height() / natural_h_cm;

        let xobject = ImageXObject {
            width: Px(width_px as usize),
            height: Px(height_px as usize),
            color_space: ColorSpace::Rgb,
            bits_per_component: ColorBits::Bit8,
            interpolate: false,
            image_data: image.as_raw().clone(),
            image_filter: None,
            clipping_bbox: None,
            smask: None,
        };
        PdfImage::from(xobject).add_to_layer(
            layer.clone(),
            ImageTransform {
                translate_x: Some(cm_to_mm(rect.x0)),
                translate_y: Some(y_to_mm(rect.y1)),
                dpi: Some(dpi as f32),
                scale_y: Some(scale_y as f32),
                ..Default::default()
            },
        );
        Ok(())
    }

    fn draw_text(&mut self, op: &TextOp) -> SongTilesResult<()> {
        let layer = self.layer()?;
        let lines = match op.max_width_cm {
            Some(max) => wrap_lines(&op.text, op.size_pt, max),
            None => vec![op.text.clone()],
        };
        let advance = line_height_cm(op.size_pt);

        layer.set_fill_color(pdf_color(op.color));
        for (i, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let width = text_width_cm(line, op.size_pt);
            let x = match op.align {
                TextAlign::Left => op.anchor.x,
                TextAlign::Center => op.anchor.x - width / 2.0,
                TextAlign::Right => op.anchor.x - width,
            };
            let baseline = op.anchor.y + i as f64 * advance;
            layer.use_text(
                line.as_str(),
                op.size_pt,
                cm_to_mm(x),
                y_to_mm(baseline),
                &self.font,
            );
        }
        Ok(())
    }
}

fn cm_to_mm(cm: f64) -> Mm {
    Mm((cm * 10.0) as f32)
}

/// Top-down page centimeters to bottom-up PDF millimeters.
fn y_to_mm(y_cm: f64) -> Mm {
    cm_to_mm(PAGE_HEIGHT_CM - y_cm)
}

fn rect_points(rect: Rect) -> Vec<(PdfPoint, bool)> {
    [
        (rect.x0, rect.y0),
        (rect.x1, rect.y0),
        (rect.x1, rect.y1),
        (rect.x0, rect.y1),
    ]
    .into_iter()
    .map(|(x, y)| (PdfPoint::new(cm_to_mm(x), y_to_mm(y)), false))
    .collect()
}

fn pdf_color(c: Rgb8) -> Color {
    let (r, g, b) = c.to_unit();
    Color::Rgb(PdfRgb::new(r, g, b, None))
}
