//! Sheet composition
//!
//! Stacks the box net above the lid net on one canvas with a uniform border
//! and a gap between the two.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::geometry::Bounds2;
use crate::net::{PanelNet, ShellKind, ShellSpec, unfold};
use crate::params::PatternParams;
use crate::primitive::Primitive;

/// Where a shell ended up on the sheet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub kind: ShellKind,
    pub bounds: Bounds2,
    /// Index of the shell's first primitive in [`Sheet::primitives`]
    pub first: usize,
    /// Number of primitives belonging to the shell
    pub count: usize,
}

/// Composed pattern ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub primitives: Vec<Primitive>,
    pub width: f64,
    pub height: f64,
    pub placements: Vec<Placement>,
}

impl Sheet {
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn placement(&self, kind: ShellKind) -> Option<&Placement> {
        self.placements.iter().find(|p| p.kind == kind)
    }

    /// Primitives belonging to one shell
    pub fn shell_primitives(&self, kind: ShellKind) -> &[Primitive] {
        match self.placement(kind) {
            Some(p) => &self.primitives[p.first..p.first + p.count],
            None => &[],
        }
    }

    /// Placed size of each shell
    pub fn summary(&self) -> PatternSummary {
        let size_of = |kind| self.placement(kind).map(|p| p.bounds.size());
        PatternSummary {
            sheet: DVec2::new(self.width, self.height),
            box_size: size_of(ShellKind::Box),
            lid_size: size_of(ShellKind::Lid),
        }
    }
}

/// Overall sizes of a composed pattern
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternSummary {
    pub sheet: DVec2,
    pub box_size: Option<DVec2>,
    pub lid_size: Option<DVec2>,
}

impl std::fmt::Display for PatternSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sheet {:.1} x {:.1}", self.sheet.x, self.sheet.y)?;
        if let Some(size) = self.box_size {
            write!(f, ", box {:.1} x {:.1}", size.x, size.y)?;
        }
        if let Some(size) = self.lid_size {
            write!(f, ", lid {:.1} x {:.1}", size.x, size.y)?;
        }
        Ok(())
    }
}

/// Place the requested nets on one sheet.
///
/// The box goes at the top-left inside the border; the lid goes below it,
/// one `padding` further down, or takes the box's place when the box is
/// hidden. Nets keep their internal geometry; only a translation is applied.
pub fn compose(
    show_box: bool,
    show_lid: bool,
    box_net: &PanelNet,
    lid_net: &PanelNet,
    padding: f64,
) -> Sheet {
    let mut primitives = Vec::new();
    let mut placements = Vec::new();
    let mut cursor_y = padding;
    let mut content_width: f64 = 0.0;
    let mut content_height: f64 = 0.0;

    let requested = [(show_box, box_net), (show_lid, lid_net)];
    for net in requested.into_iter().filter(|(show, _)| *show).map(|(_, net)| net) {
        if !placements.is_empty() {
            cursor_y += padding;
            content_height += padding;
        }

        let size = net.size();
        let origin = if net.bounds.is_valid() {
            net.bounds.min
        } else {
            DVec2::ZERO
        };
        let placed = net.translated(DVec2::new(padding, cursor_y) - origin);

        placements.push(Placement {
            kind: net.kind,
            bounds: placed.bounds,
            first: primitives.len(),
            count: placed.len(),
        });
        primitives.extend(placed.primitives);

        cursor_y += size.y;
        content_height += size.y;
        content_width = content_width.max(size.x);
    }

    let sheet = Sheet {
        primitives,
        width: content_width + 2.0 * padding,
        height: content_height + 2.0 * padding,
        placements,
    };

    tracing::debug!(
        "Composed sheet {:.2} x {:.2} with {} primitives in {} shells",
        sheet.width,
        sheet.height,
        sheet.primitives.len(),
        sheet.placements.len()
    );

    sheet
}

/// Run the whole pipeline: unfold both shells and compose the requested ones
pub fn generate_sheet(params: &PatternParams) -> Sheet {
    let dims = &params.dimensions;
    let box_net = unfold(&ShellSpec::box_shell(dims), DVec2::ZERO, dims);
    let lid_net = unfold(&ShellSpec::lid_shell(dims), DVec2::ZERO, dims);
    compose(
        params.show_box,
        params.show_lid,
        &box_net,
        &lid_net,
        params.padding,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimensions::Dimensions;
    use approx::assert_relative_eq;

    fn nets() -> (PanelNet, PanelNet) {
        let dims = Dimensions::default();
        (
            unfold(&ShellSpec::box_shell(&dims), DVec2::ZERO, &dims),
            unfold(&ShellSpec::lid_shell(&dims), DVec2::ZERO, &dims),
        )
    }

    #[test]
    fn test_both_shells_stacked() {
        let (box_net, lid_net) = nets();
        let sheet = compose(true, true, &box_net, &lid_net, 20.0);

        assert_relative_eq!(sheet.width, 470.0 + 40.0);
        assert_relative_eq!(sheet.height, 420.0 + 205.0 + 20.0 + 40.0);
        assert_eq!(sheet.primitives.len(), box_net.len() + lid_net.len());

        let body = sheet.placement(ShellKind::Box).map(|p| p.bounds);
        let lid = sheet.placement(ShellKind::Lid).map(|p| p.bounds);
        let (body, lid) = (body.unwrap_or_default(), lid.unwrap_or_default());
        assert_eq!(body.min, DVec2::new(20.0, 20.0));
        assert_eq!(lid.min, DVec2::new(20.0, 460.0));
        assert!(!body.intersects(&lid));
        assert!(lid.min.y - body.max.y >= 20.0);
    }

    #[test]
    fn test_everything_fits_on_sheet() {
        let (box_net, lid_net) = nets();
        let sheet = compose(true, true, &box_net, &lid_net, 20.0);
        let canvas = Bounds2::new(DVec2::ZERO, DVec2::new(sheet.width, sheet.height));
        for p in &sheet.primitives {
            assert!(canvas.contains(&p.bounds()), "{} is off the sheet", p.name());
        }
    }

    #[test]
    fn test_lid_only_takes_box_position() {
        let (box_net, lid_net) = nets();
        let sheet = compose(false, true, &box_net, &lid_net, 20.0);
        assert_eq!(sheet.placements.len(), 1);
        assert_eq!(sheet.primitives.len(), lid_net.len());
        assert_relative_eq!(sheet.width, 255.0 + 40.0);
        assert_relative_eq!(sheet.height, 205.0 + 40.0);
        assert!(sheet.shell_primitives(ShellKind::Box).is_empty());
    }

    #[test]
    fn test_hiding_lid_keeps_box_geometry() {
        let (box_net, lid_net) = nets();
        let both = compose(true, true, &box_net, &lid_net, 20.0);
        let alone = compose(true, false, &box_net, &lid_net, 20.0);
        assert_eq!(both.shell_primitives(ShellKind::Box), alone.shell_primitives(ShellKind::Box));
        assert_relative_eq!(alone.height, 420.0 + 40.0);
    }

    #[test]
    fn test_relative_geometry_preserved() {
        let (box_net, lid_net) = nets();
        let sheet = compose(true, true, &box_net, &lid_net, 20.0);
        let placed = sheet.shell_primitives(ShellKind::Lid);
        let shift = sheet.placement(ShellKind::Lid).map(|p| p.bounds.min).unwrap_or_default();
        for (original, moved) in lid_net.primitives.iter().zip(placed) {
            assert_eq!(&original.translated(shift - lid_net.bounds.min), moved);
        }
    }

    #[test]
    fn test_empty_sheet() {
        let (box_net, lid_net) = nets();
        let sheet = compose(false, false, &box_net, &lid_net, 20.0);
        assert!(sheet.is_empty());
        assert_eq!((sheet.width, sheet.height), (40.0, 40.0));
    }

    #[test]
    fn test_generate_sheet_deterministic() {
        let params = PatternParams::default();
        assert_eq!(generate_sheet(&params), generate_sheet(&params));
        let summary = generate_sheet(&params).summary();
        assert_eq!(summary.box_size, Some(DVec2::new(470.0, 420.0)));
        assert_eq!(summary.lid_size, Some(DVec2::new(255.0, 205.0)));
    }
}
