//! Command-line interface for batch wallpaper generation

use crate::algorithm::billiards::{BilliardsConfig, pick_random_corner, pick_random_tile};
use crate::algorithm::drawer::Drawer;
use crate::algorithm::noise::{ChaosNoise, pick_random_brush};
use crate::algorithm::walker::Corner;
use crate::io::color::{ColorPair, parse_hex_color};
use crate::io::configuration::{
    DEFAULT_COUNT, DEFAULT_HEIGHT, DEFAULT_INSIDE_COLOR, DEFAULT_OUTSIDE_COLOR, DEFAULT_SEED,
    DEFAULT_WIDTH, OUTPUT_EXTENSION,
};
use crate::io::error::{PatternError, Result};
use crate::io::image::export_png;
use crate::io::progress::ProgressManager;
use clap::{ArgAction, Args, Parser, Subcommand};
use image::Rgba;
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "billiardwall")]
#[command(
    author,
    version,
    about = "Generate arithmetic billiards and chaotic noise wallpapers"
)]
/// Command-line arguments for the wallpaper generator
pub struct Cli {
    /// Generation method
    #[command(subcommand)]
    pub method: Method,

    /// Directory receiving the generated PNG files
    #[arg(short, long, global = true, default_value = ".")]
    pub output: PathBuf,

    /// Random seed for corner, brush and noise selection
    #[arg(short, long, global = true, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of images to generate
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Hide the progress bar and log errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Regenerate images even if the output exists
    #[arg(long, global = true)]
    pub no_skip: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Wallpaper generation methods
#[derive(Subcommand, Debug)]
pub enum Method {
    /// Bounce-fill fractal traced by a ray reflecting inside the canvas
    #[command(visible_alias = "mb")]
    Billiards(BilliardsArgs),
    /// Two-color noise with an independent coin flip per cell
    #[command(visible_alias = "cn")]
    Noise(NoiseArgs),
}

/// Canvas size and colors shared by every method
#[derive(Args, Debug)]
pub struct CanvasArgs {
    /// Canvas width in pixels (implies square if height not specified)
    #[arg(short = 'w', long)]
    pub width: Option<u32>,

    /// Canvas height in pixels (implies square if width not specified)
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// One or two hex colors: #rgb, #rrggbb or #aarrggbb
    #[arg(short = 'c', long, num_args = 1..=2, value_name = "COLOR")]
    pub colors: Vec<String>,
}

impl CanvasArgs {
    /// Requested canvas size, falling back to the defaults
    pub fn dimensions(&self) -> (u32, u32) {
        match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, w),
            (None, Some(h)) => (h, h),
            (None, None) => (DEFAULT_WIDTH, DEFAULT_HEIGHT),
        }
    }

    /// First and second color, falling back to the defaults
    ///
    /// # Errors
    ///
    /// Returns `InvalidColor` if a given color cannot be parsed
    pub fn color_pair(&self) -> Result<(Rgba<u8>, Rgba<u8>)> {
        let first = self.colors.first().map_or(DEFAULT_INSIDE_COLOR, String::as_str);
        let second = self.colors.get(1).map_or(DEFAULT_OUTSIDE_COLOR, String::as_str);
        Ok((parse_hex_color(first)?, parse_hex_color(second)?))
    }
}

/// Options of the billiards method
#[derive(Args, Debug)]
pub struct BilliardsArgs {
    /// Canvas size and colors (inside, then outside)
    #[command(flatten)]
    pub canvas: CanvasArgs,

    /// Tile size in pixels; defaults to gcd(width, height)
    #[arg(short = 'b', long, conflicts_with = "random_brush")]
    pub brush: Option<u32>,

    /// Pick the tile size at random among the divisors of the width
    #[arg(long)]
    pub random_brush: bool,

    /// Start corner: top-left, top-right, bottom-right, bottom-left or 0..=3
    #[arg(long, value_parser = parse_corner)]
    pub corner: Option<Corner>,
}

/// Options of the noise method
#[derive(Args, Debug)]
pub struct NoiseArgs {
    /// Canvas size and colors (colored, then background)
    #[command(flatten)]
    pub canvas: CanvasArgs,

    /// Cell size in pixels: one value for square cells or X and Y
    #[arg(short = 'b', long, num_args = 1..=2, value_name = "PX")]
    pub brush: Vec<u32>,
}

fn parse_corner(value: &str) -> Result<Corner> {
    Corner::from_str(value)
}

impl Method {
    /// Resolve the arguments into a drawer, drawing any unset choice from `rng`
    ///
    /// # Errors
    ///
    /// Returns an error if a color cannot be parsed or no random brush fits
    pub fn drawer(&self, rng: &mut StdRng, seed: u64) -> Result<Box<dyn Drawer>> {
        match self {
            Self::Billiards(args) => {
                let (width, height) = args.canvas.dimensions();
                let (inside, outside) = args.canvas.color_pair()?;
                let tile = if args.random_brush {
                    Some(pick_random_tile(width, height, rng)?)
                } else {
                    args.brush
                };
                let corner = args.corner.unwrap_or_else(|| pick_random_corner(rng));
                Ok(Box::new(
                    BilliardsConfig::new(width, height, ColorPair::new(inside, outside), corner)
                        .with_tile(tile),
                ))
            }
            Self::Noise(args) => {
                let (width, height) = args.canvas.dimensions();
                let (colored, background) = args.canvas.color_pair()?;
                let (brush_x, brush_y) = match args.brush.as_slice() {
                    [] => pick_random_brush(width, height, rng)?,
                    [size] => (*size, *size),
                    [x, y, ..] => (*x, *y),
                };
                Ok(Box::new(ChaosNoise {
                    width,
                    height,
                    brush_x,
                    brush_y,
                    colored,
                    background,
                    seed,
                }))
            }
        }
    }
}

/// Orchestrates generation of a batch of wallpapers with progress tracking
pub struct BatchGenerator {
    cli: Cli,
    progress: ProgressManager,
}

impl BatchGenerator {
    /// Create a generator for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self { cli, progress }
    }

    /// Progress of the current or last run
    pub const fn progress(&self) -> &ProgressManager {
        &self.progress
    }

    /// Generate `count` images, returning the paths written
    ///
    /// Image `i` draws its random choices from a generator seeded with
    /// `seed + i`, so a batch is reproducible from its seed.
    ///
    /// # Errors
    ///
    /// Returns the first sizing, color or export error encountered
    pub fn run(&mut self) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        if self.cli.count == 0 {
            return Ok(written);
        }

        if self.cli.output.exists() && !self.cli.output.is_dir() {
            return Err(PatternError::InvalidParameter {
                parameter: "output",
                value: self.cli.output.display().to_string(),
                reason: "output must be a directory".to_string(),
            });
        }

        self.progress.initialize(self.cli.count);

        for index in 0..self.cli.count {
            let seed = self.cli.seed.wrapping_add(index as u64);
            if let Some(path) = self.generate_one(seed)? {
                written.push(path);
            }
        }

        self.progress.finish();
        log::info!(
            "{} generated, {} skipped",
            self.progress.generated(),
            self.progress.skipped()
        );

        Ok(written)
    }

    fn generate_one(&mut self, seed: u64) -> Result<Option<PathBuf>> {
        let mut rng = StdRng::seed_from_u64(seed);
        let drawer = self.cli.method.drawer(&mut rng, seed)?;
        let output_path = Self::get_output_path(&self.cli.output, drawer.as_ref());

        if self.cli.skip_existing() && output_path.exists() {
            log::info!("Skipping: {} (output exists)", output_path.display());
            self.progress.skip_image();
            return Ok(None);
        }

        let start_time = Instant::now();
        self.progress.start_image(&drawer.file_stem());

        let image = drawer.draw()?;
        export_png(&image, &output_path)?;

        log::info!("{} -> {}", drawer.describe(), output_path.display());
        self.progress.complete_image(start_time.elapsed());

        Ok(Some(output_path))
    }

    /// Output path of a drawer inside `output_dir`
    pub fn get_output_path(output_dir: &Path, drawer: &dyn Drawer) -> PathBuf {
        output_dir.join(format!("{}.{OUTPUT_EXTENSION}", drawer.file_stem()))
    }
}
