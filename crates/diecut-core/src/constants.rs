//! Global constants for diecut-core

/// Border padding around the sheet and gap between stacked shells
pub const DEFAULT_SHEET_PADDING: f64 = 20.0;

/// Default stroke width for every exported line
pub const DEFAULT_STROKE_WIDTH: f64 = 0.5;

/// Cut line colour (both styles)
pub const CUT_COLOR: &str = "#000000";

/// Fold line colour in screen-preview style
pub const SCREEN_FOLD_COLOR: &str = "#FF0000";

/// Fold line dash pattern in laser-cutting style
pub const LASER_FOLD_DASH: &str = "5,3";

/// Default exported file name prefix
pub const DEFAULT_FILE_PREFIX: &str = "banker-box";

/// Default unit suffix used in exported file names
pub const DEFAULT_UNIT_SUFFIX: &str = "mm";

/// Upper bound on tabs or slots generated along one edge
pub const MAX_FEATURES_PER_EDGE: usize = 1000;

/// Default decimal places kept when writing coordinates
pub const COORDINATE_PRECISION: usize = 4;

/// SVG namespace declared on the root element
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
