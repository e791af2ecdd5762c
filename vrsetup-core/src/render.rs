//! Text rendering of screen, window and display blocks
use std::fmt;
use std::str::FromStr;

use nalgebra::{Point3, Vector3};

use crate::config::LayoutConfig;
use crate::error::Error;
use crate::tile::TileRecord;

/// Decimal places kept for every emitted coordinate and dimension
pub const DECIMAL_PLACES: usize = 6;

/// Which block the generator prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Screens,
    Windows,
    Displays,
}

impl OutputMode {
    pub const ALL: [OutputMode; 3] = [OutputMode::Screens, OutputMode::Windows, OutputMode::Displays];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Screens => "screens",
            OutputMode::Windows => "windows",
            OutputMode::Displays => "displays",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "unknown output mode {s:?}, expected one of: screens, windows, displays"
                ))
            })
    }
}

/// Format a scalar with fixed precision, trimming trailing zeros.
///
/// At least one fractional digit is kept and negative zero prints as `0.0`.
pub fn format_scalar(value: f64) -> String {
    let mut text = format!("{:.*}", DECIMAL_PLACES, value);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').len();
        text.truncate(trimmed);
        if text.ends_with('.') {
            text.push('0');
        }
    }
    if text == "-0.0" {
        text.remove(0);
    }
    text
}

pub fn format_triple(x: f64, y: f64, z: f64) -> String {
    format!(
        "({}, {}, {})",
        format_scalar(x),
        format_scalar(y),
        format_scalar(z)
    )
}

pub fn format_point(p: &Point3<f64>) -> String {
    format_triple(p.x, p.y, p.z)
}

pub fn format_vector(v: &Vector3<f64>) -> String {
    format_triple(v.x, v.y, v.z)
}

pub fn render_screen(tile: &TileRecord) -> String {
    let geometry = &tile.geometry;
    let name = tile.screen_name();
    [
        format!("\t\tsection {name}\n"),
        format!("\t\t\tname {name}\n"),
        "\t\t\tdeviceMounted false\n".to_string(),
        format!("\t\t\torigin {}\n", format_point(&geometry.origin)),
        format!(
            "\t\t\thorizontalAxis {}\n",
            format_vector(&geometry.horizontal_axis)
        ),
        format!("\t\t\twidth {}\n", format_scalar(geometry.width)),
        format!(
            "\t\t\tverticalAxis {}\n",
            format_vector(&geometry.vertical_axis)
        ),
        format!("\t\t\theight {}\n", format_scalar(geometry.height)),
        "\t\tendsection\n\n".to_string(),
    ]
    .concat()
}

pub fn render_window(tile: &TileRecord, config: &LayoutConfig) -> String {
    [
        format!("\t\tsection {}\n", tile.window_name()),
        format!("\t\t\tdisplay {}\n", tile.display),
        format!(
            "\t\t\twindowPos (0, 0), ({}, {})\n",
            tile.window_width, tile.window_height
        ),
        "\t\t\twindowFullscreen false\n".to_string(),
        format!("\t\t\twindowType {}\n", config.window_type),
        format!("\t\t\tmultisamplingLevel {}\n", config.multisampling_level),
        format!("\t\t\tscreenName {}\n", tile.screen_name()),
        format!("\t\t\tviewerName {}\n", config.viewer_name),
        "\t\t\tjoinSwapGroup false\n".to_string(),
        "\t\tendsection\n\n".to_string(),
    ]
    .concat()
}

pub fn render_screens(tiles: &[TileRecord]) -> String {
    tiles.iter().map(render_screen).collect()
}

pub fn render_windows(tiles: &[TileRecord], config: &LayoutConfig) -> String {
    tiles.iter().map(|tile| render_window(tile, config)).collect()
}

/// Quoted display identifiers in tile order, on one line
pub fn render_displays(tiles: &[TileRecord]) -> String {
    tiles
        .iter()
        .map(|tile| format!("\"{}\"", tile.display))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render(mode: OutputMode, tiles: &[TileRecord], config: &LayoutConfig) -> String {
    match mode {
        OutputMode::Screens => render_screens(tiles),
        OutputMode::Windows => render_windows(tiles, config),
        OutputMode::Displays => render_displays(tiles),
    }
}
