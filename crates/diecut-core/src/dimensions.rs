//! Box dimensions and material parameters
//!
//! All values share one linear unit; the engine never converts units.

use serde::{Deserialize, Serialize};

/// Dimensional input for a box and its lid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    /// Inside width of the box
    pub width: f64,
    /// Inside depth of the box
    pub depth: f64,
    /// Inside height of the box
    pub height: f64,
    /// Wall height of the lid
    pub lid_wall_height: f64,
    /// Corrugate thickness
    pub material_thickness: f64,
    /// Along-edge width of a locking tab
    pub tab_width: f64,
    /// Preferred gap between neighbouring tabs
    pub tab_spacing: f64,
    /// Play around each tab inside its slot
    pub clearance: f64,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 150.0,
            depth: 100.0,
            height: 80.0,
            lid_wall_height: 25.0,
            material_thickness: 2.0,
            tab_width: 15.0,
            tab_spacing: 30.0,
            clearance: 0.5,
        }
    }
}

impl Dimensions {
    /// Plan width of the lid: the box's outer envelope plus clearance on both sides
    pub fn lid_plan_width(&self) -> f64 {
        self.width + 2.0 * self.material_thickness + 2.0 * self.clearance
    }

    /// Plan depth of the lid
    pub fn lid_plan_depth(&self) -> f64 {
        self.depth + 2.0 * self.material_thickness + 2.0 * self.clearance
    }

    /// Read a field by key
    pub fn get_field(&self, field: DimensionField) -> f64 {
        match field {
            DimensionField::Width => self.width,
            DimensionField::Depth => self.depth,
            DimensionField::Height => self.height,
            DimensionField::LidWallHeight => self.lid_wall_height,
            DimensionField::MaterialThickness => self.material_thickness,
            DimensionField::TabWidth => self.tab_width,
            DimensionField::TabSpacing => self.tab_spacing,
            DimensionField::Clearance => self.clearance,
        }
    }

    /// Set a field from user-entered text.
    ///
    /// Unparseable text becomes `0.0`; no error is raised here. Use
    /// [`Dimensions::validate`] when strict input is required.
    pub fn set_field(&mut self, field: DimensionField, text: &str) {
        let value = parse_dimension(text);
        let slot = match field {
            DimensionField::Width => &mut self.width,
            DimensionField::Depth => &mut self.depth,
            DimensionField::Height => &mut self.height,
            DimensionField::LidWallHeight => &mut self.lid_wall_height,
            DimensionField::MaterialThickness => &mut self.material_thickness,
            DimensionField::TabWidth => &mut self.tab_width,
            DimensionField::TabSpacing => &mut self.tab_spacing,
            DimensionField::Clearance => &mut self.clearance,
        };
        *slot = value;
    }

    /// Strict input guard. The layout engine never calls this.
    pub fn validate(&self) -> Result<(), DimensionError> {
        for field in DimensionField::ALL {
            let value = self.get_field(field);
            if !value.is_finite() {
                return Err(DimensionError::NotFinite { field });
            }
            if field.allows_zero() {
                if value < 0.0 {
                    return Err(DimensionError::Negative { field, value });
                }
            } else if value <= 0.0 {
                return Err(DimensionError::NonPositive { field, value });
            }
        }

        let t = self.material_thickness;
        if self.height <= t {
            return Err(DimensionError::WallTooShort {
                field: DimensionField::Height,
                wall: self.height,
                thickness: t,
            });
        }
        if self.lid_wall_height <= t {
            return Err(DimensionError::WallTooShort {
                field: DimensionField::LidWallHeight,
                wall: self.lid_wall_height,
                thickness: t,
            });
        }
        Ok(())
    }
}

/// Coerce user-entered text to a dimension value (`0.0` when unparseable)
pub fn parse_dimension(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Addressable numeric fields of [`Dimensions`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionField {
    Width,
    Depth,
    Height,
    LidWallHeight,
    MaterialThickness,
    TabWidth,
    TabSpacing,
    Clearance,
}

impl DimensionField {
    /// Every field, in form order
    pub const ALL: [DimensionField; 8] = [
        DimensionField::Width,
        DimensionField::Depth,
        DimensionField::Height,
        DimensionField::LidWallHeight,
        DimensionField::MaterialThickness,
        DimensionField::TabWidth,
        DimensionField::TabSpacing,
        DimensionField::Clearance,
    ];

    /// Key used in parameter files and overrides
    pub fn key(self) -> &'static str {
        match self {
            DimensionField::Width => "width",
            DimensionField::Depth => "depth",
            DimensionField::Height => "height",
            DimensionField::LidWallHeight => "lid_wall_height",
            DimensionField::MaterialThickness => "material_thickness",
            DimensionField::TabWidth => "tab_width",
            DimensionField::TabSpacing => "tab_spacing",
            DimensionField::Clearance => "clearance",
        }
    }

    /// Look up a field by its key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    fn allows_zero(self) -> bool {
        matches!(self, DimensionField::TabSpacing | DimensionField::Clearance)
    }
}

impl std::fmt::Display for DimensionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Invalid dimensional input
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DimensionError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: DimensionField, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: DimensionField, value: f64 },
    #[error("{field} is not a finite number")]
    NotFinite { field: DimensionField },
    #[error("{field} ({wall}) must exceed the material thickness ({thickness})")]
    WallTooShort {
        field: DimensionField,
        wall: f64,
        thickness: f64,
    },
}
