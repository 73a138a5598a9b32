use std::{
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "looped", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a scorecard graphic as SVG (optionally PNG).
    Render(RenderArgs),
    /// Flatten an overlay editing session into a PNG.
    Composite(CompositeArgs),
    /// Watermark an image and save it as a shareable JPEG.
    Export(ExportArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Hole scores, comma separated, hole 1 first. Empty cells are unset.
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    scores: Vec<String>,

    /// Course name shown above the grid.
    #[arg(long)]
    course: Option<String>,

    /// Text color.
    #[arg(long, value_enum, default_value_t = ColorChoice::Black)]
    color: ColorChoice,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Also rasterize to this PNG path.
    #[arg(long)]
    png: Option<PathBuf>,

    /// PNG width in pixels; height follows the 800x380 view box.
    #[arg(long, default_value_t = 800)]
    png_width: u32,

    /// Print the `data:` URI to stdout.
    #[arg(long)]
    data_uri: bool,
}

#[derive(Parser, Debug)]
struct CompositeArgs {
    /// Session JSON describing base photo, overlay and layout.
    #[arg(long)]
    session: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Image to export.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Watermark image (PNG). Defaults to a text wordmark.
    #[arg(long)]
    watermark: Option<PathBuf>,

    /// Label used in the output file name (usually the course name).
    #[arg(long, default_value = "")]
    label: String,

    /// Download directory.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ColorChoice {
    Black,
    White,
}

impl From<ColorChoice> for looped::TextColor {
    fn from(c: ColorChoice) -> Self {
        match c {
            ColorChoice::Black => Self::Black,
            ColorChoice::White => Self::White,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Composite(args) => cmd_composite(args),
        Command::Export(args) => cmd_export(args),
    };
    if let Err(e) = &result
        && let Some(err) = e.downcast_ref::<looped::LoopedError>()
    {
        eprintln!("{}", err.user_message());
    }
    result
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn parse_grid(cells: &[String]) -> anyhow::Result<looped::ScoreGrid> {
    if cells.len() > looped::HOLES {
        anyhow::bail!(
            "expected at most {} scores, got {}",
            looped::HOLES,
            cells.len()
        );
    }
    let mut grid = looped::ScoreGrid::new();
    for (hole, raw) in cells.iter().enumerate() {
        let raw = raw.trim();
        if grid.set_score(hole, raw) == looped::ScoreEdit::Rejected {
            tracing::warn!(hole = hole + 1, input = raw, "ignoring non-numeric score");
        }
    }
    Ok(grid)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let grid = parse_grid(&args.scores)?;
    let opts = looped::RenderOptions {
        text_color: args.color.into(),
        course_name: args.course,
    };
    let Some(graphic) = looped::render_if_entered(&grid, &opts) else {
        anyhow::bail!("no scores entered, nothing to render");
    };

    ensure_parent_dir(&args.out)?;
    std::fs::write(&args.out, &graphic.markup)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());

    if let Some(png) = &args.png {
        let height = (f64::from(args.png_width) * 380.0 / 800.0).round() as u32;
        let raster = graphic.rasterize(args.png_width, height)?;
        ensure_parent_dir(png)?;
        std::fs::write(png, looped::encode_png(&raster)?)
            .with_context(|| format!("write png '{}'", png.display()))?;
        eprintln!("wrote {}", png.display());
    }

    if args.data_uri {
        println!("{}", graphic.data_uri);
    }

    let agg = grid.aggregate();
    eprintln!(
        "out {} / in {} / total {}",
        agg.front_nine, agg.back_nine, agg.total
    );
    Ok(())
}

fn cmd_composite(args: CompositeArgs) -> anyhow::Result<()> {
    let session = looped::EditSession::read(&args.session)?;
    let root = args.session.parent().unwrap_or_else(|| Path::new("."));
    let editor = session.into_editor(root)?;

    match editor.apply()? {
        looped::ApplyOutcome::Unchanged => {
            eprintln!("nothing to apply; original photo kept");
        }
        looped::ApplyOutcome::Composite(img) => {
            ensure_parent_dir(&args.out)?;
            std::fs::write(&args.out, &img.png)
                .with_context(|| format!("write png '{}'", args.out.display()))?;
            eprintln!("wrote {} ({}x{})", args.out.display(), img.width, img.height);
        }
    }
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let image = looped::read_asset_bytes(&args.in_path)?;
    let watermark = match &args.watermark {
        Some(path) => looped::Watermark::from_bytes(&looped::read_asset_bytes(path)?)?,
        None => looped::Watermark::from_text("Looped")?,
    };
    let timestamp_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before the unix epoch")?
        .as_millis();

    let downloads = looped::DownloadDir::new(&args.out_dir);
    let outcome = looped::export_image(
        &image,
        &watermark,
        &args.label,
        timestamp_ms,
        &mut looped::NoShare,
        &downloads,
    )?;

    match outcome {
        looped::ExportOutcome::Downloaded(path) => eprintln!("wrote {}", path.display()),
        looped::ExportOutcome::Shared => eprintln!("shared"),
        looped::ExportOutcome::ShareCancelled => eprintln!("share cancelled"),
    }
    Ok(())
}
