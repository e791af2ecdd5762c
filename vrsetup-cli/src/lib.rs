//! Command line front ends for the vrsetup tools
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use vrsetup_core::config::{
    DEFAULT_DIRECTORY, DEFAULT_FILE_PATTERN, DEFAULT_MULTISAMPLING_LEVEL, DEFAULT_TILE_COUNT,
    DEFAULT_VIEWER_NAME, DEFAULT_WINDOW_TYPE,
};
use vrsetup_core::{load_tiles, render, LayoutConfig, OutputMode};

pub mod logging;
pub mod progress;

pub use progress::ProgressLine;

/// Generate screen and window sections for a multi-tile display wall
#[derive(Parser, Debug)]
#[command(name = "vrsetup-config")]
pub struct ConfigArgs {
    /// Block to print: screens, windows or displays
    pub mode: OutputMode,
    /// Directory holding the per-tile files
    #[arg(short, long, default_value = DEFAULT_DIRECTORY)]
    pub directory: PathBuf,
    /// File name pattern; {n} is replaced by the tile index
    #[arg(short, long, default_value = DEFAULT_FILE_PATTERN)]
    pub pattern: String,
    /// Number of tiles, read as indices 0..N
    #[arg(short, long, default_value_t = DEFAULT_TILE_COUNT)]
    pub tiles: usize,
    /// Factor applied to every corner coordinate (1.88 for the scaled YURT layout)
    #[arg(short, long, default_value_t = 1.0)]
    pub scale: f64,
    #[arg(long, default_value = DEFAULT_VIEWER_NAME)]
    pub viewer_name: String,
    #[arg(long, default_value = DEFAULT_WINDOW_TYPE)]
    pub window_type: String,
    #[arg(long, default_value_t = DEFAULT_MULTISAMPLING_LEVEL)]
    pub multisampling: u32,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ConfigArgs {
    pub fn layout(&self) -> LayoutConfig {
        LayoutConfig {
            directory: self.directory.clone(),
            file_pattern: self.pattern.clone(),
            tile_count: self.tiles,
            scale: self.scale,
            viewer_name: self.viewer_name.clone(),
            window_type: self.window_type.clone(),
            multisampling_level: self.multisampling,
        }
    }
}

/// Negate the first two components of every vertex and normal in an OBJ file
#[derive(Parser, Debug)]
#[command(name = "obj-flip")]
pub struct FlipArgs {
    /// Mesh to read
    pub source: PathBuf,
    /// Output path; an existing file is renamed to <destination>.backup
    pub destination: PathBuf,
    /// Don't draw the progress line
    #[arg(short, long)]
    pub quiet: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Load the layout described by `args` and render the requested block
pub fn generate(args: &ConfigArgs) -> Result<String> {
    let layout = args.layout();
    let tiles = load_tiles(&layout).with_context(|| {
        format!(
            "failed to load tile layout from {}",
            layout.directory.display()
        )
    })?;
    Ok(render(args.mode, &tiles, &layout))
}
