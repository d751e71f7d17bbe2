//! SVG export functionality

mod options;
mod svg;

use std::path::PathBuf;

use crate::params::{LineStyle, PatternParams};
use crate::sheet::Sheet;

pub use options::{ExportOptions, Stroke};
pub use svg::{export_filename, format_number, path_data, sanitize_filename, xml_escape};

use svg::generate_svg_string;

/// Export a sheet to an SVG file in `options.output_dir`, returning its path
pub fn export_svg(
    sheet: &Sheet,
    params: &PatternParams,
    options: &ExportOptions,
) -> Result<PathBuf, ExportError> {
    let svg = export_svg_to_string(sheet, params.style, options)?;

    std::fs::create_dir_all(&options.output_dir).map_err(|e| ExportError::Io(e.to_string()))?;
    let path = options
        .output_dir
        .join(export_filename(&params.dimensions, params.style, options));
    std::fs::write(&path, &svg).map_err(|e| ExportError::Io(e.to_string()))?;

    tracing::info!(
        "Exported {} primitives ({} style) to {}",
        sheet.primitives.len(),
        params.style.as_str(),
        path.display()
    );

    Ok(path)
}

/// Export a sheet to an SVG string only (no file I/O)
pub fn export_svg_to_string(
    sheet: &Sheet,
    style: LineStyle,
    options: &ExportOptions,
) -> Result<String, ExportError> {
    if sheet.is_empty() {
        return Err(ExportError::EmptySheet);
    }
    Ok(generate_svg_string(sheet, style, options))
}

/// Export-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExportError {
    #[error("Nothing to export: both box and lid are hidden")]
    EmptySheet,
    #[error("IO error: {0}")]
    Io(String),
}
