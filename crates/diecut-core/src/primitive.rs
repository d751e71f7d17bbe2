//! Geometric primitives produced by the layout engine
//!
//! A primitive is either a cut (closed rectangle or open path) or a fold
//! line. Primitives carry no styling; renderers pick strokes by [`LineRole`].

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::geometry::Bounds2;

/// What a line does to the material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineRole {
    Cut,
    Fold,
}

/// Which way the material bends along a fold line, seen from the printed side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoldSense {
    /// Panels rise toward the viewer
    Valley,
    /// Panels drop away from the viewer
    Mountain,
}

impl FoldSense {
    pub fn reversed(self) -> FoldSense {
        match self {
            FoldSense::Valley => FoldSense::Mountain,
            FoldSense::Mountain => FoldSense::Valley,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FoldSense::Valley => "valley",
            FoldSense::Mountain => "mountain",
        }
    }
}

/// One line-work element of a pattern, in absolute sheet coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// Closed rectangular cut
    Rect {
        name: String,
        min: DVec2,
        size: DVec2,
    },
    /// Open polyline cut
    Path { name: String, points: Vec<DVec2> },
    /// Scored fold line
    Fold {
        name: String,
        start: DVec2,
        end: DVec2,
        sense: FoldSense,
    },
}

impl Primitive {
    /// Rectangle spanning two opposite corners
    pub fn rect(name: impl Into<String>, a: DVec2, b: DVec2) -> Self {
        let bounds = Bounds2::from_corners(a, b);
        Primitive::Rect {
            name: name.into(),
            min: bounds.min,
            size: bounds.max - bounds.min,
        }
    }

    pub fn path(name: impl Into<String>, points: Vec<DVec2>) -> Self {
        Primitive::Path {
            name: name.into(),
            points,
        }
    }

    pub fn fold(name: impl Into<String>, start: DVec2, end: DVec2, sense: FoldSense) -> Self {
        Primitive::Fold {
            name: name.into(),
            start,
            end,
            sense,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Primitive::Rect { name, .. }
            | Primitive::Path { name, .. }
            | Primitive::Fold { name, .. } => name,
        }
    }

    pub fn role(&self) -> LineRole {
        match self {
            Primitive::Rect { .. } | Primitive::Path { .. } => LineRole::Cut,
            Primitive::Fold { .. } => LineRole::Fold,
        }
    }

    /// Every vertex of the primitive
    pub fn points(&self) -> Vec<DVec2> {
        match self {
            Primitive::Rect { min, size, .. } => vec![
                *min,
                *min + DVec2::new(size.x, 0.0),
                *min + *size,
                *min + DVec2::new(0.0, size.y),
            ],
            Primitive::Path { points, .. } => points.clone(),
            Primitive::Fold { start, end, .. } => vec![*start, *end],
        }
    }

    pub fn bounds(&self) -> Bounds2 {
        match self {
            Primitive::Rect { min, size, .. } => Bounds2::from_corners(*min, *min + *size),
            _ => Bounds2::from_points(self.points()),
        }
    }

    /// Copy moved by `offset`
    pub fn translated(&self, offset: DVec2) -> Primitive {
        let mut moved = self.clone();
        match &mut moved {
            Primitive::Rect { min, .. } => *min += offset,
            Primitive::Path { points, .. } => {
                for p in points.iter_mut() {
                    *p += offset;
                }
            }
            Primitive::Fold { start, end, .. } => {
                *start += offset;
                *end += offset;
            }
        }
        moved
    }

    /// Prepend `prefix-` to the name
    pub fn prefixed(mut self, prefix: &str) -> Primitive {
        let name = match &mut self {
            Primitive::Rect { name, .. }
            | Primitive::Path { name, .. }
            | Primitive::Fold { name, .. } => name,
        };
        *name = format!("{}-{}", prefix, name);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_from_reversed_corners() {
        let r = Primitive::rect("panel", DVec2::new(10.0, 8.0), DVec2::new(2.0, 3.0));
        match r {
            Primitive::Rect { min, size, .. } => {
                assert_eq!(min, DVec2::new(2.0, 3.0));
                assert_eq!(size, DVec2::new(8.0, 5.0));
            }
            _ => panic!("expected rect"),
        }
    }

    #[test]
    fn test_roles() {
        let cut = Primitive::path("flap", vec![DVec2::ZERO, DVec2::X]);
        let fold = Primitive::fold("hinge", DVec2::ZERO, DVec2::Y, FoldSense::Valley);
        assert_eq!(cut.role(), LineRole::Cut);
        assert_eq!(fold.role(), LineRole::Fold);
    }

    #[test]
    fn test_translate_and_bounds() {
        let path = Primitive::path(
            "tab",
            vec![DVec2::ZERO, DVec2::new(0.0, 2.0), DVec2::new(15.0, 2.0), DVec2::new(15.0, 0.0)],
        );
        let moved = path.translated(DVec2::new(5.0, 5.0));
        let b = moved.bounds();
        assert_eq!(b.min, DVec2::new(5.0, 5.0));
        assert_eq!(b.max, DVec2::new(20.0, 7.0));
        assert_eq!(moved.name(), "tab");
    }

    #[test]
    fn test_prefixed_name() {
        let fold = Primitive::fold("front-fold", DVec2::ZERO, DVec2::X, FoldSense::Mountain);
        assert_eq!(fold.prefixed("lid").name(), "lid-front-fold");
    }
}
