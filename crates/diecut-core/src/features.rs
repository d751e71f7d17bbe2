//! Tab and slot generation along an edge
//!
//! Features are spread evenly: whatever length is left after placing the
//! tabs is split into equal leading, trailing and inter-feature gaps.

use crate::constants::MAX_FEATURES_PER_EDGE;
use crate::dimensions::Dimensions;
use crate::geometry::Edge;
use crate::primitive::Primitive;

/// Whether an edge gets protruding tabs or receiving slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureMode {
    Tab,
    Slot,
}

impl FeatureMode {
    pub fn as_str(self) -> &'static str {
        match self {
            FeatureMode::Tab => "tab",
            FeatureMode::Slot => "slot",
        }
    }
}

/// Distribution of features along one edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureLayout {
    /// Number of features
    pub count: usize,
    /// Gap before, between and after features
    pub spacing: f64,
    /// Along-edge width of a single tab
    pub tab_width: f64,
}

impl FeatureLayout {
    /// Along-edge offset of the leading side of feature `index`
    pub fn offset(&self, index: usize) -> f64 {
        self.spacing + index as f64 * (self.tab_width + self.spacing)
    }

    pub fn offsets(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(|i| self.offset(i))
    }

    /// Returns true if the features run past either end of the edge
    pub fn overruns(&self) -> bool {
        self.count > 0 && self.spacing < 0.0
    }
}

/// Work out how many features fit along `length` and how far apart they sit.
///
/// `count = max(1, floor((length - tab_width) / (tab_width + tab_spacing)))`.
/// A short edge still gets one feature, even if it does not fit. Zero-length
/// edges and non-positive tab widths get none. A non-positive pitch counts as
/// one feature, and the count never exceeds the number of tabs laid edge to
/// edge (nor [`MAX_FEATURES_PER_EDGE`]).
pub fn feature_layout(length: f64, tab_width: f64, tab_spacing: f64) -> FeatureLayout {
    if !(length > 0.0 && tab_width > 0.0) || !length.is_finite() || !tab_width.is_finite() {
        return FeatureLayout {
            count: 0,
            spacing: 0.0,
            tab_width,
        };
    }

    let pitch = tab_width + tab_spacing;
    let fitted = if pitch > 0.0 {
        ((length - tab_width) / pitch).floor()
    } else {
        1.0
    };
    let room = (length / tab_width)
        .floor()
        .clamp(1.0, MAX_FEATURES_PER_EDGE as f64);
    if fitted > room {
        tracing::warn!(
            "Edge of length {} cannot hold {} features of width {}; capping at {}",
            length,
            fitted,
            tab_width,
            room
        );
    }
    let count = fitted.clamp(1.0, room) as usize;
    let spacing = (length - count as f64 * tab_width) / (count as f64 + 1.0);

    FeatureLayout {
        count,
        spacing,
        tab_width,
    }
}

/// A single generated locking feature
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub mode: FeatureMode,
    pub index: usize,
    /// Along-edge distance from the edge anchor to the feature's leading side
    pub offset: f64,
    /// Along-edge extent
    pub width: f64,
    /// Across-edge extent
    pub depth: f64,
    pub primitive: Primitive,
}

/// Generate tabs or slots along `edge`.
///
/// Tabs are three-sided paths reaching one material thickness across the
/// edge. Slots are closed rectangles widened by the clearance on every side
/// so the matching tab passes through with uniform play.
pub fn generate_features(edge: &Edge, mode: FeatureMode, dims: &Dimensions) -> Vec<Feature> {
    let layout = feature_layout(edge.length, dims.tab_width, dims.tab_spacing);
    if layout.overruns() {
        tracing::warn!(
            "Edge of length {} is shorter than tab width {}; placing one oversized {}",
            edge.length,
            dims.tab_width,
            mode.as_str()
        );
    }

    let along = edge.along();
    let across = edge.normal_vector();
    let t = dims.material_thickness;
    let c = dims.clearance;

    layout
        .offsets()
        .enumerate()
        .map(|(index, tab_offset)| match mode {
            FeatureMode::Tab => {
                let p0 = edge.point_at(tab_offset);
                let p1 = p0 + across * t;
                let p2 = p1 + along * layout.tab_width;
                let p3 = p0 + along * layout.tab_width;
                Feature {
                    mode,
                    index,
                    offset: tab_offset,
                    width: layout.tab_width,
                    depth: t,
                    primitive: Primitive::path(format!("tab-{}", index), vec![p0, p1, p2, p3]),
                }
            }
            FeatureMode::Slot => {
                let offset = tab_offset - c;
                let width = layout.tab_width + 2.0 * c;
                let depth = t + c;
                let corner = edge.point_at(offset) - across * (c / 2.0);
                let opposite = corner + along * width + across * depth;
                Feature {
                    mode,
                    index,
                    offset,
                    width,
                    depth,
                    primitive: Primitive::rect(format!("slot-{}", index), corner, opposite),
                }
            }
        })
        .collect()
}

/// Primitives of [`generate_features`], renamed `{prefix}-{mode}-{index}`
pub fn feature_primitives(
    edge: &Edge,
    mode: FeatureMode,
    dims: &Dimensions,
    prefix: &str,
) -> Vec<Primitive> {
    generate_features(edge, mode, dims)
        .into_iter()
        .map(|feature| feature.primitive.prefixed(prefix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Direction, Orientation};
    use approx::assert_relative_eq;
    use glam::DVec2;

    fn dims() -> Dimensions {
        Dimensions::default()
    }

    fn center(feature: &Feature) -> f64 {
        feature.offset + feature.width / 2.0
    }

    #[test]
    fn test_layout_matches_reference_edge() {
        let layout = feature_layout(150.0, 15.0, 30.0);
        assert_eq!(layout.count, 3);
        assert_relative_eq!(layout.spacing, 26.25);
        let offsets: Vec<f64> = layout.offsets().collect();
        assert_relative_eq!(offsets[0], 26.25);
        assert_relative_eq!(offsets[1], 67.5);
        assert_relative_eq!(offsets[2], 108.75);
    }

    #[test]
    fn test_layout_fills_edge_exactly() {
        for &(length, tab, spacing) in &[
            (150.0, 15.0, 30.0),
            (100.0, 15.0, 30.0),
            (333.3, 12.5, 7.0),
            (40.0, 10.0, 0.0),
        ] {
            let layout = feature_layout(length, tab, spacing);
            let total = layout.count as f64 * tab + (layout.count as f64 + 1.0) * layout.spacing;
            assert_relative_eq!(total, length, epsilon = 1e-9);
            let expected = (((length - tab) / (tab + spacing)).floor() as usize).max(1);
            assert_eq!(layout.count, expected);
        }
    }

    #[test]
    fn test_short_edge_still_gets_one_feature() {
        let layout = feature_layout(10.0, 15.0, 30.0);
        assert_eq!(layout.count, 1);
        assert_relative_eq!(layout.spacing, -2.5);
        assert!(layout.overruns());
    }

    #[test]
    fn test_near_zero_pitch_is_capped_by_edge() {
        let layout = feature_layout(150.0, 15.0, -15.0 + 1e-9);
        assert_eq!(layout.count, 10);
        let total = layout.count as f64 * 15.0 + 11.0 * layout.spacing;
        assert_relative_eq!(total, 150.0, epsilon = 1e-9);

        let layout = feature_layout(150.0, 15.0, -15.0 + 1e-14);
        assert!(layout.count <= 10);

        assert_eq!(feature_layout(150.0, 15.0, -20.0).count, 1);
    }

    #[test]
    fn test_tiny_tab_width_is_bounded() {
        let layout = feature_layout(150.0, 1e-9, 0.0);
        assert_eq!(layout.count, MAX_FEATURES_PER_EDGE);
        assert!(layout.spacing > 0.0);

        let d = Dimensions {
            tab_width: 1e-9,
            tab_spacing: 0.0,
            ..dims()
        };
        let edge = Edge::horizontal(DVec2::ZERO, 150.0);
        assert_eq!(generate_features(&edge, FeatureMode::Slot, &d).len(), MAX_FEATURES_PER_EDGE);
    }

    #[test]
    fn test_zero_length_edge_has_no_features() {
        assert_eq!(feature_layout(0.0, 15.0, 30.0).count, 0);
        assert_eq!(feature_layout(-5.0, 15.0, 30.0).count, 0);
        assert_eq!(feature_layout(100.0, 0.0, 30.0).count, 0);

        let edge = Edge::horizontal(DVec2::ZERO, 0.0);
        assert!(generate_features(&edge, FeatureMode::Tab, &dims()).is_empty());
    }

    #[test]
    fn test_horizontal_tab_path() {
        let edge = Edge::horizontal(DVec2::new(10.0, 20.0), 150.0);
        let tabs = generate_features(&edge, FeatureMode::Tab, &dims());
        assert_eq!(tabs.len(), 3);

        let expected = vec![
            DVec2::new(36.25, 20.0),
            DVec2::new(36.25, 22.0),
            DVec2::new(51.25, 22.0),
            DVec2::new(51.25, 20.0),
        ];
        assert_eq!(tabs[0].primitive, Primitive::path("tab-0", expected));
    }

    #[test]
    fn test_vertical_tab_grows_toward_normal() {
        let edge = Edge::new(
            DVec2::new(50.0, 0.0),
            100.0,
            Orientation::Vertical,
            Direction::Negative,
        );
        let tabs = generate_features(&edge, FeatureMode::Tab, &dims());
        let b = tabs[0].primitive.bounds();
        assert_relative_eq!(b.min.x, 48.0);
        assert_relative_eq!(b.max.x, 50.0);
        assert_relative_eq!(b.height(), 15.0);
    }

    #[test]
    fn test_slot_clearance_law() {
        let d = dims();
        let edge = Edge::horizontal(DVec2::ZERO, 150.0);
        let tabs = generate_features(&edge, FeatureMode::Tab, &d);
        let slots = generate_features(&edge, FeatureMode::Slot, &d);
        assert_eq!(tabs.len(), slots.len());

        for (tab, slot) in tabs.iter().zip(&slots) {
            assert_relative_eq!(slot.width, tab.width + 2.0 * d.clearance);
            assert_relative_eq!(slot.offset, tab.offset - d.clearance);
            assert_relative_eq!(center(slot), center(tab));
        }
        assert_relative_eq!(slots[0].width, 16.0);
        assert_relative_eq!(slots[0].offset, 25.75);
    }

    #[test]
    fn test_slot_rectangle_straddles_edge() {
        let d = dims();
        let edge = Edge::horizontal(DVec2::new(0.0, 100.0), 150.0).with_normal(Direction::Negative);
        let slots = generate_features(&edge, FeatureMode::Slot, &d);
        let b = slots[0].primitive.bounds();
        // Offset back by half the clearance, then reaches t + c into the panel.
        assert_relative_eq!(b.max.y, 100.25);
        assert_relative_eq!(b.min.y, 100.25 - 2.5);
        assert_relative_eq!(b.min.x, 25.75);
        assert_relative_eq!(b.width(), 16.0);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let edge = Edge::vertical(DVec2::new(3.0, 4.0), 123.4);
        let a = generate_features(&edge, FeatureMode::Slot, &dims());
        let b = generate_features(&edge, FeatureMode::Slot, &dims());
        assert_eq!(a, b);
    }

    #[test]
    fn test_feature_primitives_prefixed() {
        let edge = Edge::horizontal(DVec2::ZERO, 150.0);
        let prims = feature_primitives(&edge, FeatureMode::Slot, &dims(), "base-front");
        let names: Vec<&str> = prims.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["base-front-slot-0", "base-front-slot-1", "base-front-slot-2"]);
    }
}
