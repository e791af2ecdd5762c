//! Layout configuration: where the tile files live and how windows are emitted
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Directory holding the CAVE tile files on the cluster
pub const DEFAULT_DIRECTORY: &str = "/gpfs/runtime/opt/cave/ccv/share/vrsetup";
pub const DEFAULT_FILE_PATTERN: &str = "cave_{n}.vrsetup";
pub const DEFAULT_TILE_COUNT: usize = 38;
pub const DEFAULT_VIEWER_NAME: &str = "YURTViewer";
pub const DEFAULT_WINDOW_TYPE: &str = "QuadbufferStereo";
pub const DEFAULT_MULTISAMPLING_LEVEL: u32 = 1;

/// Corner scale used by the unit-converting variant of the YURT layout
pub const YURT_UNIT_SCALE: f64 = 1.88;

/// Placeholder in [`LayoutConfig::file_pattern`] replaced by the tile index
pub const INDEX_PLACEHOLDER: &str = "{n}";

/// Inputs for one run of the config generator.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub directory: PathBuf,
    pub file_pattern: String,
    pub tile_count: usize,
    pub scale: f64,
    pub viewer_name: String,
    pub window_type: String,
    pub multisampling_level: u32,
}

impl LayoutConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }

    pub fn with_tile_count(mut self, tile_count: usize) -> Self {
        self.tile_count = tile_count;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn tile_file_name(&self, index: usize) -> String {
        self.file_pattern.replace(INDEX_PLACEHOLDER, &index.to_string())
    }

    pub fn tile_path(&self, index: usize) -> PathBuf {
        self.directory.join(self.tile_file_name(index))
    }

    /// Check the configuration, reporting the first offending field
    pub fn validate(&self) -> Result<()> {
        if !self.file_pattern.contains(INDEX_PLACEHOLDER) {
            return Err(Error::InvalidArgument(format!(
                "file pattern {:?} must contain {INDEX_PLACEHOLDER}",
                self.file_pattern
            )));
        }
        if self.tile_count == 0 {
            return Err(Error::InvalidArgument(
                "tile count must be at least 1".to_string(),
            ));
        }
        if !self.scale.is_finite() || self.scale == 0.0 {
            return Err(Error::InvalidArgument(format!(
                "scale must be a finite non-zero number, got {}",
                self.scale
            )));
        }
        for (field, value) in [
            ("viewer name", &self.viewer_name),
            ("window type", &self.window_type),
        ] {
            if value.is_empty() || value.chars().any(char::is_whitespace) {
                return Err(Error::InvalidArgument(format!(
                    "{field} must be a single non-empty word, got {value:?}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
            tile_count: DEFAULT_TILE_COUNT,
            scale: 1.0,
            viewer_name: DEFAULT_VIEWER_NAME.to_string(),
            window_type: DEFAULT_WINDOW_TYPE.to_string(),
            multisampling_level: DEFAULT_MULTISAMPLING_LEVEL,
        }
    }
}
