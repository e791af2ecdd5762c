//! Per-tile records: attribute lookup, corner parsing and geometry
use nalgebra::Point3;
use rayon::prelude::*;

use crate::attributes::AttributeMap;
use crate::config::LayoutConfig;
use crate::coords;
use crate::error::{Error, Result};
use crate::geometry::{TileCorners, TileGeometry};

pub const KEY_TOP_LEFT: &str = "TileTopLeft";
pub const KEY_TOP_RIGHT: &str = "TileTopRight";
pub const KEY_BOTTOM_LEFT: &str = "TileBotLeft";
pub const KEY_BOTTOM_RIGHT: &str = "TileBotRight";
pub const KEY_DISPLAY: &str = "#conf";
pub const KEY_WINDOW_WIDTH: &str = "WindowWidth";
pub const KEY_WINDOW_HEIGHT: &str = "WindowHeight";

/// Everything the renderer needs for one tile
#[derive(Debug, Clone, PartialEq)]
pub struct TileRecord {
    pub index: usize,
    /// Display identifier with all whitespace removed
    pub display: String,
    pub window_width: String,
    pub window_height: String,
    pub geometry: TileGeometry,
}

impl TileRecord {
    /// Build the record for tile `index`, scaling its corners by `scale`.
    pub fn from_attributes(index: usize, attributes: &AttributeMap, scale: f64) -> Result<Self> {
        let corner = |key: &'static str| corner_point(attributes, index, key);
        let corners = TileCorners::new(
            corner(KEY_TOP_LEFT)?,
            corner(KEY_TOP_RIGHT)?,
            corner(KEY_BOTTOM_LEFT)?,
            corner(KEY_BOTTOM_RIGHT)?,
        )
        .scaled(scale);

        let display_id = require(attributes, index, KEY_DISPLAY)?
            .split_whitespace()
            .collect::<String>();
        let window_width = require(attributes, index, KEY_WINDOW_WIDTH)?.to_string();
        let window_height = require(attributes, index, KEY_WINDOW_HEIGHT)?.to_string();

        let geometry = TileGeometry::from_corners(&corners);
        tracing::debug!(
            tile = index,
            display = %display_id,
            width = geometry.width,
            height = geometry.height,
            "Computed tile geometry"
        );

        Ok(Self {
            index,
            display: display_id,
            window_width,
            window_height,
            geometry,
        })
    }

    pub fn screen_name(&self) -> String {
        format!("screen{}", self.index)
    }

    pub fn window_name(&self) -> String {
        format!("window{}", self.index)
    }
}

fn require<'a>(attributes: &'a AttributeMap, tile: usize, key: &'static str) -> Result<&'a str> {
    attributes
        .get(key)
        .ok_or(Error::MissingAttribute { tile, key })
}

fn corner_point(attributes: &AttributeMap, tile: usize, key: &'static str) -> Result<Point3<f64>> {
    let raw = require(attributes, tile, key)?;
    coords::parse_point(raw).map_err(|reason| Error::MalformedCoordinate {
        tile,
        key,
        value: raw.to_string(),
        reason,
    })
}

/// Derive records for an ordered sequence of attribute maps, one per tile.
///
/// Tiles are computed in parallel; the result is in index order and the
/// error for the lowest failing index wins.
pub fn compute_tiles(maps: &[AttributeMap], scale: f64) -> Result<Vec<TileRecord>> {
    maps.par_iter()
        .enumerate()
        .map(|(index, attributes)| TileRecord::from_attributes(index, attributes, scale))
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}

/// Read every tile file named by `config` and derive its record.
pub fn load_tiles(config: &LayoutConfig) -> Result<Vec<TileRecord>> {
    config.validate()?;

    let maps = (0..config.tile_count)
        .into_par_iter()
        .map(|index| AttributeMap::from_file(config.tile_path(index)))
        .collect::<Vec<_>>()
        .into_iter()
        .collect::<Result<Vec<_>>>()?;

    let tiles = compute_tiles(&maps, config.scale)?;
    tracing::info!(
        tiles = tiles.len(),
        directory = %config.directory.display(),
        "Loaded tile layout"
    );
    Ok(tiles)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_attributes(offset: f64) -> AttributeMap {
        let mut map = AttributeMap::new();
        map.insert(KEY_DISPLAY, "cave001 :0.0");
        map.insert(KEY_TOP_LEFT, format!("({offset}, 2.0, 0.0)"));
        map.insert(KEY_TOP_RIGHT, format!("({}, 2.0, 0.0)", offset + 1.0));
        map.insert(KEY_BOTTOM_LEFT, format!("({offset}, 0.0, 0.0)"));
        map.insert(KEY_BOTTOM_RIGHT, format!("({}, 0.0, 0.0)", offset + 1.0));
        map.insert(KEY_WINDOW_WIDTH, "1920");
        map.insert(KEY_WINDOW_HEIGHT, "1080");
        map
    }

    #[test]
    fn test_record_from_attributes() {
        let record = TileRecord::from_attributes(4, &sample_attributes(0.0), 1.0).unwrap();
        assert_eq!(record.index, 4);
        assert_eq!(record.display, "cave001:0.0");
        assert_eq!(record.window_width, "1920");
        assert_eq!(record.window_height, "1080");
        assert_eq!(record.geometry.origin, Point3::new(1.0, 0.0, 0.0));
        assert!((record.geometry.width - 2.0).abs() < 1e-12);
        assert!((record.geometry.height - 1.0).abs() < 1e-12);
        assert_eq!(record.screen_name(), "screen4");
        assert_eq!(record.window_name(), "window4");
    }

    #[test]
    fn test_display_id_is_logged_and_stored() {
        let mut map = sample_attributes(0.0);
        map.insert(KEY_DISPLAY, " cave 017 : 0.1 ");
        let record = TileRecord::from_attributes(17, &map, 1.0).unwrap();
        assert_eq!(record.display, "cave017:0.1");
    }

    #[test]
    fn test_scale_applies_to_origin_and_extent() {
        let record = TileRecord::from_attributes(0, &sample_attributes(0.0), 2.0).unwrap();
        assert_eq!(record.geometry.origin, Point3::new(2.0, 0.0, 0.0));
        assert!((record.geometry.width - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_missing_attribute_names_tile() {
        for key in [
            KEY_TOP_LEFT,
            KEY_TOP_RIGHT,
            KEY_BOTTOM_LEFT,
            KEY_BOTTOM_RIGHT,
            KEY_DISPLAY,
            KEY_WINDOW_WIDTH,
            KEY_WINDOW_HEIGHT,
        ] {
            let map: AttributeMap = sample_attributes(0.0)
                .iter()
                .filter(|(k, _)| *k != key)
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            match TileRecord::from_attributes(9, &map, 1.0) {
                Err(Error::MissingAttribute { tile, key: missing }) => {
                    assert_eq!(tile, 9);
                    assert_eq!(missing, key);
                }
                other => panic!("expected missing {key}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_malformed_corner_is_reported() {
        let mut map = sample_attributes(0.0);
        map.insert(KEY_TOP_RIGHT, "(1.0, 2.0)");
        let err = TileRecord::from_attributes(2, &map, 1.0).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedCoordinate { tile: 2, key: KEY_TOP_RIGHT, .. }
        ));
    }

    #[test]
    fn test_compute_tiles_keeps_index_order() {
        let maps: Vec<_> = (0..16).map(|i| sample_attributes(i as f64 * 10.0)).collect();
        let tiles = compute_tiles(&maps, 1.0).unwrap();
        assert_eq!(tiles.len(), 16);
        for (i, tile) in tiles.iter().enumerate() {
            assert_eq!(tile.index, i);
            assert_eq!(tile.geometry.origin.x, i as f64 * 10.0 + 1.0);
        }
    }

    #[test]
    fn test_compute_tiles_reports_lowest_failing_tile() {
        let mut maps: Vec<_> = (0..8).map(|i| sample_attributes(i as f64)).collect();
        maps[3] = AttributeMap::new();
        maps[6] = AttributeMap::new();
        match compute_tiles(&maps, 1.0) {
            Err(Error::MissingAttribute { tile, .. }) => assert_eq!(tile, 3),
            other => panic!("expected missing attribute, got {other:?}"),
        }
    }
}
