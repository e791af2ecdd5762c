//! vrsetup core library - tile layout parsing and screen geometry
//!
//! Reads the per-tile `.vrsetup` files of a multi-projector display wall,
//! derives the origin, axes and extent of every screen, and renders the
//! screen and window sections consumed by the display framework. Also hosts
//! the OBJ axis flipper used to bring models into the wall's frame.

pub mod attributes;
pub mod config;
pub mod coords;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod render;
pub mod tile;

// Re-export commonly used types
pub use attributes::AttributeMap;
pub use config::LayoutConfig;
pub use error::{Error, Result};
pub use geometry::{TileCorners, TileGeometry};
pub use mesh::{flip_file, FlipSummary};
pub use render::{render, OutputMode};
pub use tile::{compute_tiles, load_tiles, TileRecord};
