//! Shell descriptions: which container an unfolded net represents

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::dimensions::Dimensions;
use crate::primitive::FoldSense;

/// The two shells of a lidded box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShellKind {
    Box,
    Lid,
}

impl ShellKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ShellKind::Box => "box",
            ShellKind::Lid => "lid",
        }
    }

    /// Name of the central panel the walls hinge from
    pub fn panel_name(self) -> &'static str {
        match self {
            ShellKind::Box => "base",
            ShellKind::Lid => "top",
        }
    }
}

/// Which way the walls rise from the central panel once assembled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opening {
    /// Box: walls fold up from the base
    Up,
    /// Lid: walls fold down from the top
    Down,
}

impl Opening {
    /// Sense of the hinges between the central panel and the outer walls
    pub fn wall_fold(self) -> FoldSense {
        match self {
            Opening::Up => FoldSense::Valley,
            Opening::Down => FoldSense::Mountain,
        }
    }

    /// Sense of the hinges between outer and inner walls (folded back on themselves)
    pub fn inner_fold(self) -> FoldSense {
        self.wall_fold().reversed()
    }
}

/// Plan size and wall height of one shell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellSpec {
    pub kind: ShellKind,
    pub plan_width: f64,
    pub plan_depth: f64,
    pub wall_height: f64,
    pub opening: Opening,
}

impl ShellSpec {
    /// Box body sized to the inside dimensions
    pub fn box_shell(dims: &Dimensions) -> Self {
        Self {
            kind: ShellKind::Box,
            plan_width: dims.width,
            plan_depth: dims.depth,
            wall_height: dims.height,
            opening: Opening::Up,
        }
    }

    /// Lid sized to slide over the box's outer envelope
    pub fn lid_shell(dims: &Dimensions) -> Self {
        Self {
            kind: ShellKind::Lid,
            plan_width: dims.lid_plan_width(),
            plan_depth: dims.lid_plan_depth(),
            wall_height: dims.lid_wall_height,
            opening: Opening::Down,
        }
    }

    pub fn plan(&self) -> DVec2 {
        DVec2::new(self.plan_width, self.plan_depth)
    }

    /// Unfolded size: the plan plus two wall strips (outer, inner and tab) per axis
    pub fn footprint(&self) -> DVec2 {
        self.plan() + DVec2::splat(4.0 * self.wall_height)
    }

    /// Offset of the central panel from the net origin
    pub fn panel_offset(&self) -> DVec2 {
        DVec2::splat(2.0 * self.wall_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_box_and_lid_specs() {
        let dims = Dimensions::default();
        let body = ShellSpec::box_shell(&dims);
        let lid = ShellSpec::lid_shell(&dims);

        assert_eq!(body.plan(), DVec2::new(150.0, 100.0));
        assert_relative_eq!(lid.plan_width, 155.0);
        assert_relative_eq!(lid.plan_depth, 105.0);
        assert_eq!(lid.wall_height, 25.0);
    }

    #[test]
    fn test_footprint() {
        let dims = Dimensions::default();
        assert_eq!(ShellSpec::box_shell(&dims).footprint(), DVec2::new(470.0, 420.0));
        assert_eq!(ShellSpec::lid_shell(&dims).footprint(), DVec2::new(255.0, 205.0));
    }

    #[test]
    fn test_lid_folds_opposite_to_box() {
        assert_eq!(Opening::Up.wall_fold(), Opening::Down.inner_fold());
        assert_ne!(Opening::Up.wall_fold(), Opening::Down.wall_fold());
    }
}
