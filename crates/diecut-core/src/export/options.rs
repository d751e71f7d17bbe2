//! Export options for SVG generation

use std::path::PathBuf;

use crate::constants::{
    COORDINATE_PRECISION, CUT_COLOR, DEFAULT_FILE_PREFIX, DEFAULT_STROKE_WIDTH,
    DEFAULT_UNIT_SUFFIX, LASER_FOLD_DASH, SCREEN_FOLD_COLOR,
};
use crate::params::LineStyle;

/// Export options for SVG generation
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Output directory
    pub output_dir: PathBuf,
    /// File name prefix (e.g., "banker-box")
    pub file_prefix: String,
    /// Unit written after the dimensions in the file name
    pub unit_suffix: String,
    /// Stroke width for every line
    pub stroke_width: f64,
    /// Stroke colour of cut lines
    pub cut_color: String,
    /// Stroke colour of fold lines in screen style
    pub fold_color: String,
    /// Dash pattern of fold lines in laser style
    pub fold_dash: String,
    /// Decimal places written for coordinates, lengths and file-name
    /// dimensions. Finer detail is rounded away; trailing zeros are dropped.
    pub precision: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            unit_suffix: DEFAULT_UNIT_SUFFIX.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            cut_color: CUT_COLOR.to_string(),
            fold_color: SCREEN_FOLD_COLOR.to_string(),
            fold_dash: LASER_FOLD_DASH.to_string(),
            precision: COORDINATE_PRECISION,
        }
    }
}

/// Resolved stroke attributes for one line role
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
    pub dash: Option<String>,
}

impl ExportOptions {
    pub fn cut_stroke(&self) -> Stroke {
        Stroke {
            color: self.cut_color.clone(),
            width: self.stroke_width,
            dash: None,
        }
    }

    /// Screen style folds are coloured; laser style folds are dashed cut-colour lines
    pub fn fold_stroke(&self, style: LineStyle) -> Stroke {
        match style {
            LineStyle::Screen => Stroke {
                color: self.fold_color.clone(),
                width: self.stroke_width,
                dash: None,
            },
            LineStyle::Laser => Stroke {
                color: self.cut_color.clone(),
                width: self.stroke_width,
                dash: Some(self.fold_dash.clone()),
            },
        }
    }
}
