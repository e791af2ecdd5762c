//! Screen geometry derived from tile corner points
use nalgebra::{Point3, Vector3};

/// The four physical corners of a tile, in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileCorners {
    pub top_left: Point3<f64>,
    pub top_right: Point3<f64>,
    pub bottom_left: Point3<f64>,
    pub bottom_right: Point3<f64>,
}

impl TileCorners {
    pub fn new(
        top_left: Point3<f64>,
        top_right: Point3<f64>,
        bottom_left: Point3<f64>,
        bottom_right: Point3<f64>,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// Multiply every corner by a uniform unit conversion factor
    pub fn scaled(&self, factor: f64) -> Self {
        let scale = |p: Point3<f64>| Point3::from(p.coords * factor);
        Self {
            top_left: scale(self.top_left),
            top_right: scale(self.top_right),
            bottom_left: scale(self.bottom_left),
            bottom_right: scale(self.bottom_right),
        }
    }
}

/// Origin, axes and extent of one screen.
///
/// The bottom-right corner is the origin for every tile. The horizontal axis
/// runs to the top-right corner and the vertical axis to the bottom-left
/// corner. Axes are neither normalized nor checked for orthogonality; width
/// and height are their Euclidean lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileGeometry {
    pub origin: Point3<f64>,
    pub horizontal_axis: Vector3<f64>,
    pub vertical_axis: Vector3<f64>,
    pub width: f64,
    pub height: f64,
}

impl TileGeometry {
    pub fn from_corners(corners: &TileCorners) -> Self {
        let origin = corners.bottom_right;
        let horizontal_axis = corners.top_right - origin;
        let vertical_axis = corners.bottom_left - origin;

        Self {
            origin,
            horizontal_axis,
            vertical_axis,
            width: horizontal_axis.norm(),
            height: vertical_axis.norm(),
        }
    }
}
