//! Local frames for the four walls around a central panel

use glam::DVec2;

use crate::geometry::{Direction, Edge, Orientation};

/// One of the four edges of the central panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallSide {
    Front,
    Back,
    Left,
    Right,
}

impl WallSide {
    /// Drawing order
    pub const ALL: [WallSide; 4] = [WallSide::Front, WallSide::Back, WallSide::Left, WallSide::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            WallSide::Front => "front",
            WallSide::Back => "back",
            WallSide::Left => "left",
            WallSide::Right => "right",
        }
    }

    pub fn orientation(self) -> Orientation {
        match self {
            WallSide::Front | WallSide::Back => Orientation::Horizontal,
            WallSide::Left | WallSide::Right => Orientation::Vertical,
        }
    }

    /// Side of the panel edge the wall lies on
    pub fn outward(self) -> Direction {
        match self {
            WallSide::Front | WallSide::Left => Direction::Negative,
            WallSide::Back | WallSide::Right => Direction::Positive,
        }
    }

    /// Names of the flaps at the start and far end of this wall
    pub fn flap_names(self) -> [&'static str; 2] {
        match self {
            WallSide::Front | WallSide::Back => ["left", "right"],
            WallSide::Left | WallSide::Right => ["front", "back"],
        }
    }

    /// Front and back walls carry full-height corner flaps; the side walls'
    /// flaps are inset by one material thickness so the two never overlap.
    fn carries_full_flaps(self) -> bool {
        matches!(self, WallSide::Front | WallSide::Back)
    }

    /// Frame of this side for a central panel at `panel_min` of size `plan`
    pub fn frame(self, panel_min: DVec2, plan: DVec2, thickness: f64) -> SideFrame {
        let (start, length) = match self {
            WallSide::Front => (panel_min, plan.x),
            WallSide::Back => (panel_min + DVec2::new(0.0, plan.y), plan.x),
            WallSide::Left => (panel_min, plan.y),
            WallSide::Right => (panel_min + DVec2::new(plan.x, 0.0), plan.y),
        };
        let orientation = self.orientation();
        SideFrame {
            side: self,
            start,
            length,
            along: orientation.along(),
            outward: orientation.across() * self.outward().sign(),
            flap_inset: if self.carries_full_flaps() { 0.0 } else { thickness },
        }
    }
}

/// Panel edge plus the directions walls unfold along
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideFrame {
    pub side: WallSide,
    /// Edge start (lowest along-edge coordinate)
    pub start: DVec2,
    pub length: f64,
    pub along: DVec2,
    /// Away from the central panel
    pub outward: DVec2,
    /// Distance from the panel edge where the corner flaps begin
    pub flap_inset: f64,
}

impl SideFrame {
    /// Point at `along_dist` along the edge and `out_dist` away from the panel
    pub fn point(&self, along_dist: f64, out_dist: f64) -> DVec2 {
        self.start + self.along * along_dist + self.outward * out_dist
    }

    /// Edge parallel to the panel edge, `out_dist` away, features growing outward
    pub fn outward_edge(&self, out_dist: f64) -> Edge {
        Edge::new(
            self.point(0.0, out_dist),
            self.length,
            self.side.orientation(),
            self.side.outward(),
        )
    }

    /// The panel edge itself, features growing into the panel
    pub fn inward_edge(&self) -> Edge {
        Edge::new(
            self.start,
            self.length,
            self.side.orientation(),
            self.side.outward().flipped(),
        )
    }
}
