//! Command-line host that replays a stroke script and exports the result

use crate::canvas::Grid;
use crate::io::configuration::{
    DEFAULT_CELL_PIXEL_SIZE, DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH, DEFAULT_SEED, PREVIEW_SUFFIX,
    SessionConfig,
};
use crate::io::error::Result;
use crate::io::image::export_grid_as_png;
use crate::io::progress::ReplayProgress;
use crate::io::script::{ReplaySummary, StrokeScript};
use crate::paint::{EditSession, PlacementLog};
use crate::palette::Palette;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tilecanvas")]
#[command(
    author,
    version,
    about = "Replay a stroke script on a tile grid and export the placements"
)]
/// Command-line arguments for the stroke script host
pub struct Cli {
    /// Stroke script to replay
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Initial number of columns (rounded, at least 1)
    #[arg(short = 'W', long, default_value_t = DEFAULT_MAP_WIDTH as f64)]
    pub width: f64,

    /// Initial number of rows (rounded, at least 1)
    #[arg(short = 'H', long, default_value_t = DEFAULT_MAP_HEIGHT as f64)]
    pub height: f64,

    /// Random seed for palette colors
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Cell edge in pointer pixels, also used for the preview
    #[arg(short, long, default_value_t = DEFAULT_CELL_PIXEL_SIZE)]
    pub cell_size: f32,

    /// Use deterministic spectrum colors instead of random ones
    #[arg(long)]
    pub spectrum: bool,

    /// Preview output path (defaults to <SCRIPT>_preview.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip writing the preview image
    #[arg(long)]
    pub no_preview: bool,

    /// Suppress progress output and informational logs
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Install the stderr log subscriber
    ///
    /// `RUST_LOG` wins when set; otherwise `info`, or `warn` when quiet.
    pub fn init_tracing(&self) {
        let default_level = if self.quiet { "warn" } else { "info" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));
        // A subscriber may already be installed by an embedding host
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Where the preview image goes
    pub fn preview_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| Self::default_preview_path(&self.script))
    }

    fn default_preview_path(script: &Path) -> PathBuf {
        let stem = script.file_stem().unwrap_or_default();
        let preview_name = format!("{}{PREVIEW_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = script.parent() {
            parent.join(preview_name)
        } else {
            PathBuf::from(preview_name)
        }
    }
}

/// What a replay produced
#[derive(Debug)]
pub struct RunOutcome {
    /// Session state after the last event
    pub session: EditSession,
    /// Replay counters
    pub summary: ReplaySummary,
    /// Requests sent to the placement log
    pub placements: PlacementLog,
    /// Cells whose placement failed
    pub failed_placements: usize,
    /// Preview image path, if one was written
    pub preview: Option<PathBuf>,
}

/// Replays one stroke script according to the CLI arguments
pub struct ScriptRunner {
    cli: Cli,
}

impl ScriptRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parse, replay, preview and materialize the script
    ///
    /// # Errors
    ///
    /// Returns an error if the script cannot be read or parsed, the initial
    /// grid cannot be created, or the preview cannot be written
    pub fn run(&self) -> Result<RunOutcome> {
        let script = StrokeScript::from_path(&self.cli.script)?;

        let mut palette = Palette::new(script.definitions.iter().cloned(), self.cli.seed);
        if self.cli.spectrum {
            palette.apply_spectrum_colors();
        }

        let config = SessionConfig::default().with_cell_pixel_size(self.cli.cell_size);
        let mut session = EditSession::new(
            palette,
            Grid::sanitize_dimension(self.cli.width),
            Grid::sanitize_dimension(self.cli.height),
            config,
        )?;

        let progress = if self.cli.should_show_progress() {
            ReplayProgress::new(&self.cli.script, script.commands.len())
        } else {
            ReplayProgress::hidden()
        };
        let summary = script.replay(&mut session, |replayed| progress.update(replayed));
        progress.finish();

        tracing::info!(
            events = summary.commands,
            changed = summary.cells_changed,
            rejected = summary.rejected,
            "script replayed"
        );

        let preview = if self.cli.no_preview {
            None
        } else {
            let path = self.cli.preview_path();
            let cell_size = session.config().cell_pixel_size.round() as u32;
            export_grid_as_png(&session.grid, cell_size, &path)?;
            Some(path)
        };

        let mut placements = PlacementLog::default();
        let report = session.materialize(&mut placements);

        Ok(RunOutcome {
            session,
            summary,
            placements,
            failed_placements: report.failures.len(),
            preview,
        })
    }
}
