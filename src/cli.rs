//! Command-line arguments and their resolution against the config file.

use clap::{Args, Parser, Subcommand};
use less_colors::ColorSpace;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::pipeline::{Job, PaletteSource};

#[derive(Parser, Debug)]
#[command(name = "lesscolors")]
#[command(about = "Reduce the colors of an image to those of a reference palette")]
pub struct Cli {
    /// YAML config file (defaults to $LESSCOLORS_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace every pixel of an image with its closest palette color
    Reduce(ReduceArgs),
    /// Print the palette entries as hex colors, in matching order
    Palette {
        #[command(flatten)]
        source: PaletteArgs,

        /// Drop repeated entries
        #[arg(long)]
        unique: bool,
    },
}

/// Palette source flags shared by both subcommands.
#[derive(Args, Debug, Default)]
pub struct PaletteArgs {
    /// Palette image; every pixel becomes an entry, column by column
    #[arg(long, visible_alias = "lut")]
    pub palette: Option<PathBuf>,

    /// Palette as comma-separated hex colors (e.g. "#000000,#FFFFFF,#FF0000")
    #[arg(long, value_delimiter = ',')]
    pub colors: Option<Vec<String>>,
}

#[derive(Args, Debug)]
pub struct ReduceArgs {
    /// Path to the input image
    #[arg(long)]
    pub input: PathBuf,

    /// Path of the output image
    #[arg(long)]
    pub output: PathBuf,

    #[command(flatten)]
    pub source: PaletteArgs,

    /// File format of the output image (png, jpeg, bmp, ...)
    #[arg(long)]
    pub output_type: Option<String>,

    /// Comparison space: lab (CIEDE2000), oklab, xyz or rgb
    #[arg(long)]
    pub space: Option<ColorSpace>,

    /// Let alpha take part in the distance (not used by lab)
    #[arg(long)]
    pub include_alpha: bool,

    /// Match on a single thread
    #[arg(long)]
    pub no_parallel: bool,

    /// Keep repeated palette entries
    #[arg(long)]
    pub keep_duplicates: bool,
}

impl PaletteArgs {
    /// Exactly one source: the palette image, the color list, or failing
    /// both, the colors from the config file.
    pub fn resolve(&self, config: &AppConfig) -> Result<PaletteSource, AppError> {
        match (&self.palette, &self.colors) {
            (Some(_), Some(_)) => Err(AppError::ConflictingPalette),
            (Some(path), None) => Ok(PaletteSource::Image(path.clone())),
            (None, Some(colors)) => Ok(PaletteSource::Colors(trimmed(colors))),
            (None, None) if !config.colors.is_empty() => {
                Ok(PaletteSource::Colors(trimmed(&config.colors)))
            }
            (None, None) => Err(AppError::MissingPalette),
        }
    }
}

fn trimmed(colors: &[String]) -> Vec<String> {
    colors
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

impl ReduceArgs {
    /// Merge flags over config values.
    pub fn into_job(self, config: &AppConfig) -> Result<Job, AppError> {
        let palette = self.source.resolve(config)?;
        Ok(Job {
            input: self.input,
            output: self.output,
            output_type: self
                .output_type
                .unwrap_or_else(|| config.output_type.clone()),
            palette,
            space: self.space.unwrap_or(config.space),
            include_alpha: self.include_alpha || config.include_alpha,
            parallel: !self.no_parallel && config.parallel,
            dedup_palette: !self.keep_duplicates && config.dedup_palette,
        })
    }
}
