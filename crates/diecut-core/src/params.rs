//! Pattern parameter file serialization

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SHEET_PADDING;
use crate::dimensions::Dimensions;

/// How fold lines are told apart from cut lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// Folds drawn solid in a distinct colour
    #[default]
    Screen,
    /// Folds drawn dashed, all lines one colour
    Laser,
}

impl LineStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            LineStyle::Screen => "screen",
            LineStyle::Laser => "laser",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "screen" => Some(LineStyle::Screen),
            "laser" => Some(LineStyle::Laser),
            _ => None,
        }
    }
}

/// Everything needed to generate and export one pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternParams {
    pub dimensions: Dimensions,
    /// Include the box shell
    pub show_box: bool,
    /// Include the lid shell
    pub show_lid: bool,
    /// Fold line presentation
    pub style: LineStyle,
    /// Sheet border and gap between shells
    pub padding: f64,
}

impl Default for PatternParams {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            show_box: true,
            show_lid: true,
            style: LineStyle::Screen,
            padding: DEFAULT_SHEET_PADDING,
        }
    }
}

/// Parameter file encoding, picked by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamsFormat {
    Ron,
    Json,
}

impl ParamsFormat {
    /// Detect format from file path
    pub fn from_path(path: &Path) -> Result<Self, ParamsError> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .as_deref()
        {
            Some("ron") => Ok(ParamsFormat::Ron),
            Some("json") => Ok(ParamsFormat::Json),
            _ => Err(ParamsError::UnsupportedFormat(
                path.to_string_lossy().to_string(),
            )),
        }
    }
}

impl PatternParams {
    /// Save parameters to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ParamsError> {
        let path = path.as_ref();
        let content = self.to_bytes(ParamsFormat::from_path(path)?)?;
        std::fs::write(path, content).map_err(|e| ParamsError::Io(e.to_string()))?;
        Ok(())
    }

    /// Serialize parameters to bytes
    pub fn to_bytes(&self, format: ParamsFormat) -> Result<Vec<u8>, ParamsError> {
        let content = match format {
            ParamsFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ParamsError::Serialize(e.to_string()))?,
            ParamsFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| ParamsError::Serialize(e.to_string()))?,
        };
        Ok(content.into_bytes())
    }

    /// Load parameters from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let path = path.as_ref();
        let format = ParamsFormat::from_path(path)?;
        let content = std::fs::read(path).map_err(|e| ParamsError::Io(e.to_string()))?;
        Self::load_from_bytes(&content, format)
    }

    /// Load parameters from bytes
    pub fn load_from_bytes(data: &[u8], format: ParamsFormat) -> Result<Self, ParamsError> {
        let content =
            std::str::from_utf8(data).map_err(|e| ParamsError::Deserialize(e.to_string()))?;
        let params = match format {
            ParamsFormat::Ron => {
                ron::from_str(content).map_err(|e| ParamsError::Deserialize(e.to_string()))?
            }
            ParamsFormat::Json => serde_json::from_str(content)
                .map_err(|e| ParamsError::Deserialize(e.to_string()))?,
        };
        Ok(params)
    }
}

/// Parameter file errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParamsError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    #[error("Unsupported parameter file: {0} (expected .ron or .json)")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ron_file_roundtrip() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("pattern.ron");

        let mut params = PatternParams::default();
        params.dimensions.width = 210.0;
        params.style = LineStyle::Laser;
        params.show_lid = false;
        params.save(&path).unwrap();

        let loaded = PatternParams::load(&path).unwrap();
        assert_eq!(loaded, params);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = br#"{ "dimensions": { "width": 200.0 }, "style": "laser" }"#;
        let params = PatternParams::load_from_bytes(json, ParamsFormat::Json).unwrap();
        assert_eq!(params.dimensions.width, 200.0);
        assert_eq!(params.dimensions.depth, 100.0);
        assert_eq!(params.style, LineStyle::Laser);
        assert!(params.show_box && params.show_lid);
        assert_eq!(params.padding, DEFAULT_SHEET_PADDING);
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let ron = b"(dimensions: (height: 120.0), show_box: false)";
        let params = PatternParams::load_from_bytes(ron, ParamsFormat::Ron).unwrap();
        assert_eq!(params.dimensions.height, 120.0);
        assert!(!params.show_box);
        assert_eq!(params.style, LineStyle::Screen);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let result = PatternParams::load("pattern.toml");
        assert!(matches!(result, Err(ParamsError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_style_names() {
        assert_eq!(LineStyle::from_name("Laser"), Some(LineStyle::Laser));
        assert_eq!(LineStyle::from_name("screen"), Some(LineStyle::Screen));
        assert_eq!(LineStyle::from_name("plotter"), None);
    }
}
