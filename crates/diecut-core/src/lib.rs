//! Die-Cut Pattern Core
//!
//! This crate computes flat die-cut patterns for a lidded corrugated box:
//! - Dimensions: box, lid and material parameters
//! - Features: evenly distributed locking tabs and slots along an edge
//! - Net: the unfolded shell (panel, walls, inner walls, corner flaps)
//! - Sheet: box and lid nets placed on one canvas
//! - Export: SVG output in screen or laser-cutting style

pub mod constants;
pub mod dimensions;
pub mod export;
pub mod features;
pub mod geometry;
pub mod net;
pub mod params;
pub mod primitive;
pub mod sheet;

pub use constants::*;
pub use dimensions::{DimensionError, DimensionField, Dimensions, parse_dimension};
pub use export::{ExportError, ExportOptions, export_svg, export_svg_to_string};
pub use features::{Feature, FeatureLayout, FeatureMode, feature_layout, generate_features};
pub use geometry::{Bounds2, Direction, Edge, Orientation};
pub use net::{Opening, PanelNet, ShellKind, ShellSpec, WallSide, unfold};
pub use params::{LineStyle, ParamsError, ParamsFormat, PatternParams};
pub use primitive::{FoldSense, LineRole, Primitive};
pub use sheet::{PatternSummary, Placement, Sheet, compose, generate_sheet};
