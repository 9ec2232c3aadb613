use std::path::Path;

use anyhow::Context;
use rand::Rng;

use crate::{
    assets::{
        photo::{PhotoPicker, PhotoPool},
        qr::{QrCodeEncoder, QrEncoder},
    },
    compile::{
        compositor::{ComposeOpts, DEFAULT_FOOTER_TEXT, compose_sheet},
        plan::{SheetPlan, SheetReport},
    },
    foundation::error::{SongTilesError, SongTilesResult},
    model::song::Song,
    render::{
        backend::{DocumentBackend, execute_plan},
        pdf::PdfBackend,
    },
};

/// Default PDF document title.
pub const DEFAULT_TITLE: &str = "Song Tiles";

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// User-facing knobs for one sheet. Every field has a default, so `{}` is a valid config.
pub struct SheetOptions {
    /// PDF document title.
    pub title: String,
    /// Footer stamped on every page; empty disables it.
    pub footer_text: String,
    /// Seed for background photo selection; `None` draws from OS entropy.
    pub photo_seed: Option<u64>,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            footer_text: DEFAULT_FOOTER_TEXT.to_string(),
            photo_seed: None,
        }
    }
}

impl SheetOptions {
    /// Load options from a JSON file.
    pub fn from_path(path: &Path) -> SongTilesResult<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("open options '{}'", path.display()))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| SongTilesError::serde(format!("parse options '{}': {e}", path.display())))
    }

    fn compose_opts(&self) -> ComposeOpts {
        ComposeOpts {
            footer_text: self.footer_text.clone(),
        }
    }
}

#[derive(Clone, Debug)]
/// A generated sheet: serialized PDF plus what happened to each back tile.
pub struct SheetDocument {
    pub pdf: Vec<u8>,
    pub page_count: usize,
    pub report: SheetReport,
}

/// Compose `songs` and replay the result onto `backend`.
///
/// Per-tile code failures are reported in the returned plan; backend failures abort.
pub fn render_sheet<B, R, Q>(
    songs: &[Song],
    photos: &PhotoPool,
    picker: &mut PhotoPicker<R>,
    qr: &Q,
    opts: &ComposeOpts,
    backend: &mut B,
) -> SongTilesResult<SheetPlan>
where
    B: DocumentBackend + ?Sized,
    R: Rng,
    Q: QrEncoder + ?Sized,
{
    let plan = compose_sheet(songs, photos, picker, qr, opts);
    execute_plan(backend, &plan, photos)?;
    Ok(plan)
}

/// One-shot API: songs (+ optional photos) to PDF bytes.
///
/// Pipeline:
/// 1. [`compose_sheet`](crate::compose_sheet): songs -> [`SheetPlan`]
/// 2. [`execute_plan`](crate::execute_plan): plan -> [`PdfBackend`]
/// 3. [`PdfBackend::finish`]: serialize
///
/// An empty song list is a validation error: a PDF cannot be saved without a page, so
/// there would be no honest page count to report.
#[tracing::instrument(skip_all, fields(songs = songs.len(), photos = photos.len()))]
pub fn generate_sheet(
    songs: &[Song],
    photos: &PhotoPool,
    opts: &SheetOptions,
) -> SongTilesResult<SheetDocument> {
    if songs.is_empty() {
        return Err(SongTilesError::validation("song list is empty"));
    }
    let mut picker = PhotoPicker::from_seed_opt(opts.photo_seed);
    let qr = QrCodeEncoder::default();
    let mut backend = PdfBackend::new(&opts.title)?;

    let plan = render_sheet(
        songs,
        photos,
        &mut picker,
        &qr,
        &opts.compose_opts(),
        &mut backend,
    )?;
    let page_count = backend.page_count();
    let pdf = backend.finish()?;

    if !plan.report.is_clean() {
        tracing::warn!(
            degraded = plan.report.degraded_count(),
            "some tiles were rendered without a code"
        );
    }
    tracing::info!(pages = page_count, bytes = pdf.len(), "sheet generated");

    Ok(SheetDocument {
        pdf,
        page_count,
        report: plan.report,
    })
}

/// Write a generated sheet to `path`, creating parent directories as needed.
pub fn write_sheet_pdf(path: &Path, doc: &SheetDocument) -> SongTilesResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, &doc.pdf).with_context(|| format!("write pdf '{}'", path.display()))?;
    Ok(())
}
