use std::sync::Arc;

use image::Rgb;

use super::*;
use crate::{
    assets::photo::{Photo, PhotoId},
    compile::plan::{PagePlan, RasterId, TextAlign},
    foundation::core::Point,
    layout::paginate::{PageDescriptor, PageSide},
};

#[derive(Default)]
struct MockBackend {
    calls: Vec<&'static str>,
    image_sizes: Vec<(u32, u32)>,
    fail_on_text: bool,
}

impl DocumentBackend for MockBackend {
    fn begin_page(&mut self) -> SongTilesResult<()> {
        self.calls.push("begin_page");
        Ok(())
    }

    fn fill_rect(&mut self, _rect: Rect, _color: Rgb8) -> SongTilesResult<()> {
        self.calls.push("fill_rect");
        Ok(())
    }

    fn stroke_rect(&mut self, _rect: Rect, _color: Rgb8, _width_cm: f64) -> SongTilesResult<()> {
        self.calls.push("stroke_rect");
        Ok(())
    }

    fn draw_image(&mut self, image: &RgbImage, _rect: Rect) -> SongTilesResult<()> {
        self.calls.push("draw_image");
        self.image_sizes.push(image.dimensions());
        Ok(())
    }

    fn draw_text(&mut self, _text: &TextOp) -> SongTilesResult<()> {
        if self.fail_on_text {
            return Err(SongTilesError::render("text failed"));
        }
        self.calls.push("draw_text");
        Ok(())
    }
}

fn descriptor(side: PageSide) -> PageDescriptor {
    PageDescriptor {
        side,
        pair: 0,
        first_song: 0,
        tile_count: 1,
    }
}

fn text_op() -> TextOp {
    TextOp {
        text: "x".to_string(),
        anchor: Point::new(1.0, 1.0),
        size_pt: 8.0,
        color: Rgb8::BLACK,
        align: TextAlign::Center,
        max_width_cm: None,
    }
}

fn sample_plan() -> SheetPlan {
    let unit = Rect::new(0.0, 0.0, 1.0, 1.0);
    let mut plan = SheetPlan::default();
    let raster = plan.push_raster(RgbImage::new(3, 3));
    plan.pages.push(PagePlan {
        descriptor: descriptor(PageSide::Front),
        ops: vec![
            DrawOp::FillRect {
                rect: unit,
                color: Rgb8::WHITE,
            },
            DrawOp::Text(text_op()),
        ],
    });
    plan.pages.push(PagePlan {
        descriptor: descriptor(PageSide::Back),
        ops: vec![
            DrawOp::Image {
                source: ImageSource::Photo(PhotoId(0)),
                rect: unit,
            },
            DrawOp::StrokeRect {
                rect: unit,
                color: Rgb8::BLACK,
                width_cm: 0.01,
            },
            DrawOp::Image {
                source: ImageSource::Raster(raster),
                rect: unit,
            },
        ],
    });
    plan
}

fn one_photo() -> PhotoPool {
    PhotoPool::new(vec![Photo {
        image: Arc::new(RgbImage::from_pixel(5, 5, Rgb([9, 9, 9]))),
    }])
}

#[test]
fn execute_plan_replays_pages_in_order() {
    let mut backend = MockBackend::default();
    execute_plan(&mut backend, &sample_plan(), &one_photo()).unwrap();
    assert_eq!(
        backend.calls,
        vec![
            "begin_page",
            "fill_rect",
            "draw_text",
            "begin_page",
            "draw_image",
            "stroke_rect",
            "draw_image",
        ]
    );
    assert_eq!(backend.image_sizes, vec![(5, 5), (3, 3)]);
}

#[test]
fn unknown_photo_aborts() {
    let mut backend = MockBackend::default();
    let err = execute_plan(&mut backend, &sample_plan(), &PhotoPool::default()).unwrap_err();
    assert!(matches!(err, SongTilesError::Render(_)));
}

#[test]
fn unknown_raster_aborts() {
    let mut plan = sample_plan();
    plan.pages[1].ops.push(DrawOp::Image {
        source: ImageSource::Raster(RasterId(99)),
        rect: Rect::new(0.0, 0.0, 1.0, 1.0),
    });
    let mut backend = MockBackend::default();
    assert!(execute_plan(&mut backend, &plan, &one_photo()).is_err());
}

#[test]
fn backend_error_aborts_pass() {
    let mut backend = MockBackend {
        fail_on_text: true,
        ..MockBackend::default()
    };
    assert!(execute_plan(&mut backend, &sample_plan(), &one_photo()).is_err());
    // Nothing after the failing op on the first page is replayed.
    assert_eq!(backend.calls, vec!["begin_page", "fill_rect"]);
}
