use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use songtiles::TrackCatalog as _;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "songtiles", version, about = "Printable double-sided song tile sheets")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a song list JSON into a tile sheet PDF.
    Render(RenderArgs),
    /// Fetch a playlist from the catalog and save it as a song list JSON.
    Fetch(FetchArgs),
    /// Print the playlist id extracted from a catalog URI, URL or bare id.
    PlaylistId(PlaylistIdArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input song list JSON (array of songs, or a raw playlist response).
    #[arg(long)]
    songs: PathBuf,

    /// Output PDF path.
    #[arg(long)]
    out: PathBuf,

    /// Background photo for tile backs; repeat for a pool. Photos are picked at random.
    #[arg(long = "photo")]
    photos: Vec<PathBuf>,

    /// Sheet options JSON; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for photo selection (reproducible backs).
    #[arg(long)]
    seed: Option<u64>,

    /// Footer text stamped on every page.
    #[arg(long)]
    footer: Option<String>,

    /// PDF document title.
    #[arg(long)]
    title: Option<String>,
}

#[derive(Parser, Debug)]
struct FetchArgs {
    /// Playlist URI, URL or id.
    #[arg(long)]
    playlist: String,

    /// Output song list JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Endpoint answering `{"token": "..."}` with a catalog access token.
    #[arg(long)]
    token_url: String,

    /// Catalog Web API base URL.
    #[arg(long, default_value = songtiles::DEFAULT_API_BASE)]
    api_base: String,
}

#[derive(Parser, Debug)]
struct PlaylistIdArgs {
    /// Playlist URI, URL or id.
    input: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Fetch(args) => cmd_fetch(args),
        Command::PlaylistId(args) => cmd_playlist_id(args),
    }
}

fn load_options(args: &RenderArgs) -> anyhow::Result<songtiles::SheetOptions> {
    let mut opts = match &args.config {
        Some(path) => songtiles::SheetOptions::from_path(path)?,
        None => songtiles::SheetOptions::default(),
    };
    if let Some(seed) = args.seed {
        opts.photo_seed = Some(seed);
    }
    if let Some(footer) = &args.footer {
        opts.footer_text = footer.clone();
    }
    if let Some(title) = &args.title {
        opts.title = title.clone();
    }
    Ok(opts)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let opts = load_options(&args)?;
    let songs = songtiles::load_songs(&args.songs)?;

    let mut photos = songtiles::PhotoPool::load(&args.photos)?;
    photos.truncate(songs.len());

    let doc = songtiles::generate_sheet(&songs, &photos, &opts)?;
    songtiles::write_sheet_pdf(&args.out, &doc)?;

    for tile in doc.report.degraded() {
        if let songtiles::TileOutcome::Degraded { reason } = &tile.outcome {
            eprintln!("warning: tile {} has no code: {reason}", tile.song_index);
        }
    }
    eprintln!("wrote {} ({} pages)", args.out.display(), doc.page_count);
    Ok(())
}

fn cmd_fetch(args: FetchArgs) -> anyhow::Result<()> {
    let playlist_id = songtiles::extract_playlist_id(&args.playlist)?;
    let catalog = songtiles::HttpCatalog::new(args.token_url, args.api_base);
    let songs = catalog
        .playlist_tracks(&playlist_id)
        .with_context(|| format!("fetch playlist '{playlist_id}'"))?;
    songtiles::save_songs(&args.out, &songs)?;
    eprintln!("wrote {} ({} songs)", args.out.display(), songs.len());
    Ok(())
}

fn cmd_playlist_id(args: PlaylistIdArgs) -> anyhow::Result<()> {
    let id = songtiles::extract_playlist_id(&args.input)?;
    println!("{id}");
    Ok(())
}
