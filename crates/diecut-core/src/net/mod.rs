//! Panel unfolding
//!
//! Produces the flat net of one hinged shell:
//! - Central panel (base or top) with slots along all four edges
//! - Four outer walls hinged to the panel
//! - Four inner walls hinged to the outer walls, tabbed along their free edge
//! - Eight corner flaps, two per wall
//!
//! Every coordinate is the panel corner plus sums of plan size, wall height
//! and material thickness, so each fold line coincides with the shared edge
//! of the two panels it joins.

mod shell;
mod side;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::dimensions::Dimensions;
use crate::features::{FeatureMode, feature_primitives};
use crate::geometry::Bounds2;
use crate::primitive::Primitive;

pub use shell::{Opening, ShellKind, ShellSpec};
pub use side::{SideFrame, WallSide};

/// Fully unfolded shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelNet {
    pub kind: ShellKind,
    /// Primitives in drawing order
    pub primitives: Vec<Primitive>,
    /// Union of the primitives' bounds
    pub bounds: Bounds2,
}

impl PanelNet {
    pub fn new(kind: ShellKind, primitives: Vec<Primitive>) -> Self {
        let bounds = primitives
            .iter()
            .fold(Bounds2::empty(), |acc, p| acc.union(&p.bounds()));
        Self {
            kind,
            primitives,
            bounds,
        }
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn size(&self) -> DVec2 {
        self.bounds.size()
    }

    /// Copy moved by `offset`; relative geometry is unchanged
    pub fn translated(&self, offset: DVec2) -> PanelNet {
        PanelNet {
            kind: self.kind,
            primitives: self.primitives.iter().map(|p| p.translated(offset)).collect(),
            bounds: self.bounds.translated(offset),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Primitive> {
        self.primitives.iter().find(|p| p.name() == name)
    }
}

/// Unfold one shell with its net's top-left corner at `origin`.
pub fn unfold(spec: &ShellSpec, origin: DVec2, dims: &Dimensions) -> PanelNet {
    let h = spec.wall_height;
    let t = dims.material_thickness;
    let plan = spec.plan();
    let panel_min = origin + spec.panel_offset();
    let panel = spec.kind.panel_name();

    let frames = WallSide::ALL.map(|side| side.frame(panel_min, plan, t));
    let mut primitives = Vec::new();

    primitives.push(Primitive::rect(panel, panel_min, panel_min + plan));
    for frame in &frames {
        let prefix = format!("{}-{}", panel, frame.side.as_str());
        primitives.extend(feature_primitives(
            &frame.inward_edge(),
            FeatureMode::Slot,
            dims,
            &prefix,
        ));
    }

    for frame in &frames {
        unfold_wall(frame, spec, dims, &mut primitives);
    }

    let kind = spec.kind.as_str();
    let primitives: Vec<Primitive> = primitives.into_iter().map(|p| p.prefixed(kind)).collect();
    let net = PanelNet::new(spec.kind, primitives);

    tracing::debug!(
        "Unfolded {} net: {} primitives, {:.2} x {:.2} (wall height {}, thickness {})",
        kind,
        net.len(),
        net.size().x,
        net.size().y,
        h,
        t
    );

    net
}

/// Outer wall, inner wall, tabs and corner flaps of one side
fn unfold_wall(frame: &SideFrame, spec: &ShellSpec, dims: &Dimensions, out: &mut Vec<Primitive>) {
    let h = spec.wall_height;
    let t = dims.material_thickness;
    let len = frame.length;
    let name = frame.side.as_str();
    let wall_fold = spec.opening.wall_fold();
    let inner_fold = spec.opening.inner_fold();

    // Outer wall, hinged on the panel edge
    out.push(Primitive::rect(
        format!("{}-wall", name),
        frame.point(0.0, 0.0),
        frame.point(len, h),
    ));
    out.push(Primitive::fold(
        format!("{}-fold", name),
        frame.point(0.0, 0.0),
        frame.point(len, 0.0),
        wall_fold,
    ));

    // Inner wall, hinged on the outer wall's free edge, one thickness shorter
    out.push(Primitive::rect(
        format!("{}-inner", name),
        frame.point(0.0, h),
        frame.point(len, 2.0 * h - t),
    ));
    out.push(Primitive::fold(
        format!("{}-inner-fold", name),
        frame.point(0.0, h),
        frame.point(len, h),
        inner_fold,
    ));
    out.extend(feature_primitives(
        &frame.outward_edge(2.0 * h - t),
        FeatureMode::Tab,
        dims,
        &format!("{}-inner", name),
    ));

    // Corner flaps at both ends of the wall
    let inset = frame.flap_inset;
    for (end, flap) in frame.side.flap_names().into_iter().enumerate() {
        let (at, lateral) = if end == 0 { (0.0, -t) } else { (len, t) };
        let hinge_far = frame.point(at, h);
        let hinge_near = frame.point(at, inset);
        let flap_name = format!("{}-{}-flap", name, flap);

        out.push(Primitive::path(
            flap_name.clone(),
            vec![
                hinge_far,
                frame.point(at + lateral, h),
                frame.point(at + lateral, inset),
                hinge_near,
            ],
        ));
        out.push(Primitive::fold(
            format!("{}-fold", flap_name),
            hinge_far,
            hinge_near,
            wall_fold,
        ));
    }
}
