//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use diecut_core::{DimensionField, LineStyle};

/// Die-cut pattern generator for lidded corrugated boxes
#[derive(Debug, Clone, Default, PartialEq, Parser)]
#[command(name = "diecut")]
#[command(about = "Writes a die-cut box and lid pattern as SVG")]
#[command(version)]
pub struct AppArgs {
    /// Dimension overrides such as `width=210`, applied in order
    #[arg(value_name = "FIELD=VALUE", value_parser = parse_override)]
    pub overrides: Vec<(DimensionField, String)>,

    /// Parameter file (.ron or .json); defaults are used when absent
    #[arg(short, long = "params", value_name = "FILE")]
    pub params_path: Option<PathBuf>,

    /// Output directory (default: current directory)
    #[arg(short, long = "out", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Fold line style, overriding the parameter file
    #[arg(short, long, value_enum)]
    pub style: Option<StyleArg>,

    /// Leave the box out of the pattern
    #[arg(long = "no-box")]
    pub hide_box: bool,

    /// Leave the lid out of the pattern
    #[arg(long = "no-lid")]
    pub hide_lid: bool,

    /// Generate even if the dimensions are invalid
    #[arg(long)]
    pub lenient: bool,

    /// Write the resolved parameters to this file
    #[arg(long = "save", value_name = "FILE")]
    pub save_params: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// Red solid folds
    Screen,
    /// Dashed folds for cutting machines
    Laser,
}

impl From<StyleArg> for LineStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Screen => LineStyle::Screen,
            StyleArg::Laser => LineStyle::Laser,
        }
    }
}

/// Split `field=value`; the value is kept as text and coerced later
fn parse_override(arg: &str) -> Result<(DimensionField, String), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", arg))?;
    let field = DimensionField::from_key(key.trim()).ok_or_else(|| {
        let known: Vec<&str> = DimensionField::ALL.iter().map(|f| f.key()).collect();
        format!("unknown dimension '{}' (one of: {})", key, known.join(", "))
    })?;
    Ok((field, value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        assert_eq!(AppArgs::try_parse_from(["diecut"]).unwrap(), AppArgs::default());
    }

    #[test]
    fn test_full_invocation() {
        let args = AppArgs::try_parse_from([
            "diecut",
            "--params",
            "box.ron",
            "--out",
            "patterns",
            "--style",
            "laser",
            "--no-lid",
            "width=210",
            "clearance=abc",
        ])
        .unwrap();

        assert_eq!(args.params_path, Some(PathBuf::from("box.ron")));
        assert_eq!(args.output_dir, Some(PathBuf::from("patterns")));
        assert_eq!(args.style, Some(StyleArg::Laser));
        assert!(args.hide_lid && !args.hide_box);
        assert_eq!(
            args.overrides,
            vec![
                (DimensionField::Width, "210".to_string()),
                (DimensionField::Clearance, "abc".to_string()),
            ]
        );
    }

    #[test]
    fn test_short_flags() {
        let args = AppArgs::try_parse_from(["diecut", "-p", "box.json", "-o", "out", "-s", "screen"])
            .unwrap();
        assert_eq!(args.params_path, Some(PathBuf::from("box.json")));
        assert_eq!(args.output_dir, Some(PathBuf::from("out")));
        assert_eq!(args.style.map(LineStyle::from), Some(LineStyle::Screen));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(AppArgs::try_parse_from(["diecut", "--style", "plotter"]).is_err());
        assert!(AppArgs::try_parse_from(["diecut", "colour=red"]).is_err());
        assert!(AppArgs::try_parse_from(["diecut", "box.ron"]).is_err());
        assert!(AppArgs::try_parse_from(["diecut", "--frobnicate"]).is_err());
        assert!(AppArgs::try_parse_from(["diecut", "--out"]).is_err());
    }

    #[test]
    fn test_override_parser() {
        assert_eq!(
            parse_override("tab_width=12.5"),
            Ok((DimensionField::TabWidth, "12.5".to_string()))
        );
        assert_eq!(
            parse_override(" height =80"),
            Ok((DimensionField::Height, "80".to_string()))
        );
        assert!(parse_override("height").is_err());
    }
}
