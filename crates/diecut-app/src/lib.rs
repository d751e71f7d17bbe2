//! Die-Cut Pattern Generator application
//!
//! Resolves pattern parameters from a file, flags and overrides, then
//! writes the composed pattern as SVG.

pub mod args;

use std::path::PathBuf;

use diecut_core::{
    DimensionError, ExportError, ExportOptions, ParamsError, PatternParams, export_svg,
    generate_sheet,
};

pub use args::{AppArgs, StyleArg};

/// Application errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid dimensions: {0}")]
    Dimensions(#[from] DimensionError),
    #[error("Parameter file: {0}")]
    Params(#[from] ParamsError),
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

/// Build the effective parameters for an invocation
pub fn resolve_params(args: &AppArgs) -> Result<PatternParams, AppError> {
    let mut params = match &args.params_path {
        Some(path) => {
            tracing::debug!("Loading parameters from {}", path.display());
            PatternParams::load(path)?
        }
        None => PatternParams::default(),
    };

    for (field, value) in &args.overrides {
        params.dimensions.set_field(*field, value);
        tracing::debug!("{} = {}", field, params.dimensions.get_field(*field));
    }
    if let Some(style) = args.style {
        params.style = style.into();
    }
    if args.hide_box {
        params.show_box = false;
    }
    if args.hide_lid {
        params.show_lid = false;
    }

    Ok(params)
}

/// Generate and export one pattern, returning the written file
pub fn run(args: &AppArgs) -> Result<PathBuf, AppError> {
    let params = resolve_params(args)?;

    if let Err(e) = params.dimensions.validate() {
        if !args.lenient {
            return Err(e.into());
        }
        tracing::warn!("Continuing with invalid dimensions: {}", e);
    }

    if let Some(path) = &args.save_params {
        params.save(path)?;
        tracing::info!("Saved parameters to {}", path.display());
    }

    let sheet = generate_sheet(&params);
    tracing::info!("Pattern size: {}", sheet.summary());

    let mut options = ExportOptions::default();
    if let Some(dir) = &args.output_dir {
        options.output_dir = dir.clone();
    }

    Ok(export_svg(&sheet, &params, &options)?)
}
