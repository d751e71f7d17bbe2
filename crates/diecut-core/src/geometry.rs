//! Planar geometry helpers: bounds, edge orientation, edges.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding rectangle on the working plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2 {
    /// Minimum corner.
    pub min: DVec2,
    /// Maximum corner.
    pub max: DVec2,
}

impl Bounds2 {
    /// Creates bounds from min and max corners.
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Creates bounds from any two opposite corners.
    pub fn from_corners(a: DVec2, b: DVec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates empty (inverted) bounds.
    pub fn empty() -> Self {
        Self {
            min: DVec2::splat(f64::INFINITY),
            max: DVec2::splat(f64::NEG_INFINITY),
        }
    }

    /// Creates bounds containing all given points.
    pub fn from_points(points: impl IntoIterator<Item = DVec2>) -> Self {
        points
            .into_iter()
            .fold(Self::empty(), |bounds, point| bounds.expand_to_include(point))
    }

    /// Full extents.
    pub fn size(&self) -> DVec2 {
        if self.is_valid() {
            self.max - self.min
        } else {
            DVec2::ZERO
        }
    }

    /// Width along X.
    pub fn width(&self) -> f64 {
        self.size().x
    }

    /// Height along Y.
    pub fn height(&self) -> f64 {
        self.size().y
    }

    /// Returns true if the point lies inside or on the boundary.
    pub fn contains_point(&self, point: DVec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Returns true if `other` lies entirely inside these bounds.
    pub fn contains(&self, other: &Bounds2) -> bool {
        !other.is_valid() || (self.contains_point(other.min) && self.contains_point(other.max))
    }

    /// Returns true if the two bounds overlap (touching counts).
    pub fn intersects(&self, other: &Bounds2) -> bool {
        self.is_valid()
            && other.is_valid()
            && self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Union of two bounds.
    pub fn union(&self, other: &Bounds2) -> Bounds2 {
        Bounds2 {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Bounds grown to include the point.
    pub fn expand_to_include(&self, point: DVec2) -> Bounds2 {
        Bounds2 {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    /// Bounds shifted by `offset`.
    pub fn translated(&self, offset: DVec2) -> Bounds2 {
        Bounds2 {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Returns true if the bounds are non-empty.
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self::empty()
    }
}

/// Axis an edge runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Unit vector along the edge.
    pub fn along(self) -> DVec2 {
        match self {
            Orientation::Horizontal => DVec2::X,
            Orientation::Vertical => DVec2::Y,
        }
    }

    /// Unit vector across the edge, pointing toward positive coordinates.
    pub fn across(self) -> DVec2 {
        match self {
            Orientation::Horizontal => DVec2::Y,
            Orientation::Vertical => DVec2::X,
        }
    }
}

/// Sign of the across-edge axis a feature grows toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::Positive => 1.0,
            Direction::Negative => -1.0,
        }
    }

    pub fn flipped(self) -> Direction {
        match self {
            Direction::Positive => Direction::Negative,
            Direction::Negative => Direction::Positive,
        }
    }
}

/// Directed segment that locking features are distributed along.
///
/// The edge always runs from `anchor` toward increasing X (horizontal) or
/// increasing Y (vertical); `normal` picks the side features grow into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub anchor: DVec2,
    pub length: f64,
    pub orientation: Orientation,
    pub normal: Direction,
}

impl Edge {
    pub fn new(anchor: DVec2, length: f64, orientation: Orientation, normal: Direction) -> Self {
        Self {
            anchor,
            length,
            orientation,
            normal,
        }
    }

    /// Horizontal edge with features growing toward +Y.
    pub fn horizontal(anchor: DVec2, length: f64) -> Self {
        Self::new(anchor, length, Orientation::Horizontal, Direction::Positive)
    }

    /// Vertical edge with features growing toward +X.
    pub fn vertical(anchor: DVec2, length: f64) -> Self {
        Self::new(anchor, length, Orientation::Vertical, Direction::Positive)
    }

    /// Same edge with features growing toward the other side.
    pub fn with_normal(self, normal: Direction) -> Self {
        Self { normal, ..self }
    }

    /// Unit vector along the edge.
    pub fn along(&self) -> DVec2 {
        self.orientation.along()
    }

    /// Unit vector toward the side features grow into.
    pub fn normal_vector(&self) -> DVec2 {
        self.orientation.across() * self.normal.sign()
    }

    /// Point at `distance` along the edge.
    pub fn point_at(&self, distance: f64) -> DVec2 {
        self.anchor + self.along() * distance
    }
}
