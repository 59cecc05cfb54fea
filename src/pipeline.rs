//! Reduce job: load palette, load image, remap, save.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use less_colors::{ColorSpace, Metric, Palette, RemapStats, Remapper};

use crate::codec;
use crate::error::AppError;

/// Where the palette comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteSource {
    /// Every pixel of an image, column by column
    Image(PathBuf),
    /// Explicit hex colors, in order
    Colors(Vec<String>),
}

/// A fully resolved reduce job.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
    pub output_type: String,
    pub palette: PaletteSource,
    pub space: ColorSpace,
    pub include_alpha: bool,
    pub parallel: bool,
    pub dedup_palette: bool,
}

/// What a finished job did.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub width: usize,
    pub height: usize,
    /// Palette entries matched against, after deduplication
    pub palette_len: usize,
    pub stats: RemapStats,
    pub elapsed: Duration,
}

fn require_file(path: &Path) -> Result<(), AppError> {
    if path.exists() {
        Ok(())
    } else {
        Err(AppError::FileNotFound(path.to_path_buf()))
    }
}

impl Job {
    /// Check that every input file exists and the output type is writable.
    pub fn validate(&self) -> Result<(), AppError> {
        require_file(&self.input)?;
        if let PaletteSource::Image(path) = &self.palette {
            require_file(path)?;
        }
        codec::resolve_format(&self.output_type)?;
        Ok(())
    }

    pub fn metric(&self) -> Metric {
        Metric::new(self.space).with_alpha(self.include_alpha)
    }
}

/// Build the palette from `source`, optionally without repeated entries.
pub fn load_palette(source: &PaletteSource, dedup: bool) -> Result<Palette, AppError> {
    let palette = match source {
        PaletteSource::Image(path) => Palette::from_grid(&codec::load_grid(path)?),
        PaletteSource::Colors(colors) => {
            let colors: Vec<&str> = colors.iter().map(String::as_str).collect();
            Palette::from_hex(&colors)?
        }
    };

    if palette.is_empty() {
        return Err(less_colors::Error::EmptyPalette.into());
    }

    let loaded = palette.len();
    let palette = if dedup { palette.deduplicated() } else { palette };
    tracing::info!(entries = loaded, unique = palette.len(), "Loaded palette");
    Ok(palette)
}

/// Palette entries as hex strings, in palette order.
pub fn palette_listing(source: &PaletteSource, unique: bool) -> Result<Vec<String>, AppError> {
    if let PaletteSource::Image(path) = source {
        require_file(path)?;
    }
    let palette = load_palette(source, unique)?;
    palette
        .iter()
        .map(|color| color.to_hex().map_err(AppError::from))
        .collect()
}

/// Run a reduce job end to end.
pub fn run(job: &Job) -> Result<Report, AppError> {
    let started = Instant::now();
    job.validate()?;

    let palette = load_palette(&job.palette, job.dedup_palette)?;
    let palette_len = palette.len();

    let mut grid = codec::load_grid(&job.input)?;
    tracing::info!(
        input = %job.input.display(),
        width = grid.width(),
        height = grid.height(),
        "Loaded image"
    );

    let remapper = Remapper::new(palette)
        .with_metric(job.metric())
        .parallel(job.parallel);
    let stats = remapper.remap(&mut grid)?;

    codec::save_grid(&grid, &job.output, &job.output_type)?;
    tracing::info!(
        output = %job.output.display(),
        colors_used = stats.colors_used,
        "Saved image"
    );

    Ok(Report {
        width: grid.width(),
        height: grid.height(),
        palette_len,
        stats,
        elapsed: started.elapsed(),
    })
}
