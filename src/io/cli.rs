//! Command-line interfaces and batch drivers for both tools

use crate::io::configuration::{
    DEFAULT_BLOCK_HEIGHT, DEFAULT_BLOCK_SIZE, DEFAULT_BLOCK_WIDTH, DEFAULT_COLS,
    DEFAULT_IMAGE_COUNT, DEFAULT_OUT_PREFIX, DEFAULT_PREVIEW_COLS, DEFAULT_ROWS,
    DEFAULT_TILE_SIZE, PREVIEW_BACKGROUND, PREVIEW_FILE_NAME, PREVIEW_PADDING,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{load_rgb_image, save_png};
use crate::io::output::{create_run_folder, desktop_dir};
use crate::io::progress::ProgressManager;
use crate::raster::blocks::{BlockSpec, generate_block_image};
use crate::raster::sampling::{SamplingMethod, sample_cell};
use crate::raster::sheet::build_contact_sheet;
use crate::raster::tiles::{solid_tile, tile_file_name};
use crate::spatial::{GridPartition, SheetLayout};
use chrono::{DateTime, Local, TimeZone};
use clap::Parser;
use image::{Rgb, RgbImage};
use log::{error, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt::Display;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "generate-tiles")]
#[command(
    author,
    version,
    about = "Generate solid-color tiles and a contact sheet from a source image"
)]
/// Command-line arguments for the tile generator
pub struct TileCli {
    /// Path to the source image
    #[arg(long, value_name = "PATH")]
    pub source: PathBuf,

    /// Number of columns in the grid (raised to 1 if smaller)
    #[arg(long, default_value_t = DEFAULT_COLS, allow_negative_numbers = true)]
    pub cols: i32,

    /// Number of rows in the grid (raised to 1 if smaller)
    #[arg(long, default_value_t = DEFAULT_ROWS, allow_negative_numbers = true)]
    pub rows: i32,

    /// Pixel size (square) of each tile to save
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    pub tile_size: u32,

    /// Columns in the preview contact sheet (a value below 1 skips the preview)
    #[arg(long, default_value_t = DEFAULT_PREVIEW_COLS, allow_negative_numbers = true)]
    pub preview_cols: i32,

    /// How each cell is reduced to one color
    #[arg(long, value_enum, default_value_t = SamplingMethod::Mean)]
    pub sampling: SamplingMethod,

    /// Directory that receives the timestamped run folder [default: ~/Desktop]
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Suppress progress output and informational messages
    #[arg(short, long)]
    pub quiet: bool,
}

impl TileCli {
    /// Grid size as `(cols, rows)`, each at least 1
    pub fn grid_dimensions(&self) -> (u32, u32) {
        (self.cols.max(1) as u32, self.rows.max(1) as u32)
    }

    /// Contact sheet column count
    ///
    /// # Errors
    ///
    /// Returns an error if `preview_cols` is below 1
    pub fn preview_columns(&self) -> Result<u32> {
        u32::try_from(self.preview_cols)
            .ok()
            .filter(|&columns| columns > 0)
            .ok_or_else(|| {
                invalid_parameter("preview_cols", &self.preview_cols, &"must be at least 1")
            })
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// What a tile run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileRunSummary {
    /// Timestamped folder holding every output
    pub output_dir: PathBuf,
    /// Number of tile files written
    pub tiles_written: usize,
    /// Number of grid cells skipped for having no pixels
    pub cells_skipped: usize,
    /// Path of the contact sheet, if it was built and saved
    pub preview: Option<PathBuf>,
}

/// Drives one tile generation run from source image to output folder
pub struct TileProcessor {
    cli: TileCli,
    progress_manager: ProgressManager,
}

impl TileProcessor {
    /// Create a tile processor with the given CLI arguments
    pub const fn new(cli: TileCli) -> Self {
        Self {
            cli,
            progress_manager: ProgressManager::new(),
        }
    }

    /// Run using the current local time for the folder name
    ///
    /// # Errors
    ///
    /// See [`TileProcessor::process_at`]
    pub fn process(&mut self) -> Result<TileRunSummary> {
        self.process_at(&Local::now())
    }

    /// Run with the output folder named after `timestamp`
    ///
    /// A failure to build or save the preview is logged and reflected in
    /// [`TileRunSummary::preview`], not returned.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source image is missing or cannot be decoded (nothing is written)
    /// - The output folder cannot be resolved or created
    /// - Any tile cannot be saved
    pub fn process_at<Tz>(&mut self, timestamp: &DateTime<Tz>) -> Result<TileRunSummary>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let source = load_rgb_image(&self.cli.source)?;

        let base = match self.cli.output_dir {
            Some(ref dir) => dir.clone(),
            None => desktop_dir()?,
        };
        let output_dir = create_run_folder(&base, timestamp)?;

        let (cols, rows) = self.cli.grid_dimensions();
        let partition = GridPartition::new(source.width(), source.height(), cols, rows);

        info!(
            "Source image: {} ({}x{}), grid: {cols}x{rows}, output: {}",
            self.cli.source.display(),
            source.width(),
            source.height(),
            output_dir.display()
        );

        if self.cli.should_show_progress() {
            self.progress_manager
                .initialize(partition.cell_count(), "Tiles");
        }

        let written = self.write_tiles(&source, &partition, &output_dir);
        self.progress_manager.finish();
        let (tiles, cells_skipped) = written?;

        let preview = match self.write_preview(&tiles, &output_dir) {
            Ok(path) => {
                info!("Saved preview: {}", path.display());
                Some(path)
            }
            Err(e) => {
                error!("Failed to build preview: {e}");
                None
            }
        };

        info!("Done.");

        Ok(TileRunSummary {
            output_dir,
            tiles_written: tiles.len(),
            cells_skipped,
            preview,
        })
    }

    // Returns the tiles in row-major order and the number of skipped cells
    fn write_tiles(
        &self,
        source: &RgbImage,
        partition: &GridPartition,
        output_dir: &Path,
    ) -> Result<(Vec<RgbImage>, usize)> {
        let mut tiles = Vec::new();
        let mut skipped = 0;

        for cell in partition.cells() {
            let name = tile_file_name(cell.row, cell.col);

            if cell.bounds.is_empty() {
                skipped += 1;
                self.progress_manager.suspend(|| {
                    warn!("Skipping empty cell at r={}, c={}", cell.row, cell.col);
                });
                self.progress_manager.advance(&name);
                continue;
            }

            let color = sample_cell(source, cell.bounds, self.cli.sampling);
            let tile = solid_tile(color, self.cli.tile_size);
            save_png(&tile, &output_dir.join(&name))?;
            tiles.push(tile);

            self.progress_manager.advance(&name);
        }

        Ok((tiles, skipped))
    }

    fn write_preview(&self, tiles: &[RgbImage], output_dir: &Path) -> Result<PathBuf> {
        let columns = self.cli.preview_columns()?;
        let layout = SheetLayout::new(columns, self.cli.tile_size, PREVIEW_PADDING)?;
        let sheet = build_contact_sheet(tiles, &layout, Rgb(PREVIEW_BACKGROUND))?;
        let path = output_dir.join(PREVIEW_FILE_NAME);
        save_png(&sheet, &path)?;
        Ok(path)
    }
}

#[derive(Parser, Debug)]
#[command(name = "random-blocks")]
#[command(
    author,
    version,
    about = "Generate random images made of big pixel blocks"
)]
/// Command-line arguments for the block image generator
pub struct BlockCli {
    /// Number of logical pixels horizontally
    #[arg(short = 'W', long, default_value_t = DEFAULT_BLOCK_WIDTH)]
    pub width: u32,

    /// Number of logical pixels vertically
    #[arg(short = 'H', long, default_value_t = DEFAULT_BLOCK_HEIGHT)]
    pub height: u32,

    /// Size of each block in actual pixels
    #[arg(short = 'b', long, default_value_t = DEFAULT_BLOCK_SIZE)]
    pub block_size: u32,

    /// How many images to generate
    #[arg(short = 'c', long, default_value_t = DEFAULT_IMAGE_COUNT)]
    pub count: u32,

    /// Output filename prefix; images are written as <PREFIX><N>.png
    #[arg(short = 'o', long, default_value = DEFAULT_OUT_PREFIX)]
    pub out_prefix: String,

    /// Random seed for reproducible output [default: seeded from the OS]
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress progress output and informational messages
    #[arg(short, long)]
    pub quiet: bool,
}

impl BlockCli {
    /// Block layout described by the arguments
    pub const fn block_spec(&self) -> BlockSpec {
        BlockSpec {
            width: self.width,
            height: self.height,
            block_size: self.block_size,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Generates and saves a numbered series of block images
pub struct BlockProcessor {
    cli: BlockCli,
    rng: StdRng,
    progress_manager: ProgressManager,
}

impl BlockProcessor {
    /// Create a block processor, seeding from `--seed` when given
    pub fn new(cli: BlockCli) -> Self {
        let rng = cli
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Self {
            cli,
            rng,
            progress_manager: ProgressManager::new(),
        }
    }

    /// Output path of the image numbered `index` (1-based)
    pub fn output_path(&self, index: u32) -> PathBuf {
        PathBuf::from(format!("{}{index}.png", self.cli.out_prefix))
    }

    /// Generate every requested image and return the written paths in order
    ///
    /// # Errors
    ///
    /// Returns an error if the pixel dimensions overflow or any image cannot be
    /// saved; images written before the failure are left in place
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let spec = self.cli.block_spec();
        let (pixel_width, pixel_height) = spec.pixel_dimensions()?;

        if self.cli.should_show_progress() {
            self.progress_manager
                .initialize(u64::from(self.cli.count), "Images");
        }

        let written = self.write_images(&spec);
        self.progress_manager.finish();
        let paths = written?;

        info!(
            "Generated {} image(s) of {pixel_width}x{pixel_height} pixels",
            paths.len()
        );

        Ok(paths)
    }

    fn write_images(&mut self, spec: &BlockSpec) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();

        for index in 1..=self.cli.count {
            let image = generate_block_image(spec, &mut self.rng)?;
            let path = self.output_path(index);
            save_png(&image, &path)?;
            self.progress_manager.advance(&path.display().to_string());
            paths.push(path);
        }

        Ok(paths)
    }
}
