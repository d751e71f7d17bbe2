//! SVG generation for composed sheets

use glam::DVec2;

use crate::constants::SVG_NAMESPACE;
use crate::dimensions::Dimensions;
use crate::params::LineStyle;
use crate::primitive::Primitive;
use crate::sheet::Sheet;

use super::options::{ExportOptions, Stroke};

/// Render a sheet as a standalone SVG document
pub fn generate_svg_string(sheet: &Sheet, style: LineStyle, options: &ExportOptions) -> String {
    let precision = options.precision;
    let cut = stroke_attrs(&options.cut_stroke(), precision);
    let fold = stroke_attrs(&options.fold_stroke(style), precision);
    let width = format_number(sheet.width, precision);
    let height = format_number(sheet.height, precision);

    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"{}\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
        SVG_NAMESPACE, width, height, width, height
    ));

    for placement in &sheet.placements {
        svg.push_str(&format!(
            "  <g id=\"{}\">\n",
            xml_escape(placement.kind.as_str())
        ));
        for primitive in sheet.shell_primitives(placement.kind) {
            write_primitive(&mut svg, primitive, &cut, &fold, precision);
        }
        svg.push_str("  </g>\n");
    }

    svg.push_str("</svg>\n");
    svg
}

fn write_primitive(
    svg: &mut String,
    primitive: &Primitive,
    cut: &str,
    fold: &str,
    precision: usize,
) {
    let id = xml_escape(primitive.name());
    match primitive {
        Primitive::Rect { min, size, .. } => {
            svg.push_str(&format!(
                "    <rect id=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {}/>\n",
                id,
                format_number(min.x, precision),
                format_number(min.y, precision),
                format_number(size.x, precision),
                format_number(size.y, precision),
                cut
            ));
        }
        Primitive::Path { points, .. } => {
            svg.push_str(&format!(
                "    <path id=\"{}\" d=\"{}\" {}/>\n",
                id,
                path_data(points, precision),
                cut
            ));
        }
        Primitive::Fold {
            start, end, sense, ..
        } => {
            svg.push_str(&format!(
                "    <line id=\"{}\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" data-fold=\"{}\" {}/>\n",
                id,
                format_number(start.x, precision),
                format_number(start.y, precision),
                format_number(end.x, precision),
                format_number(end.y, precision),
                sense.as_str(),
                fold
            ));
        }
    }
}

/// `M x y L x y ...` for an open polyline
pub fn path_data(points: &[DVec2], precision: usize) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            format!(
                "{} {} {}",
                if i == 0 { "M" } else { "L" },
                format_number(p.x, precision),
                format_number(p.y, precision)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn stroke_attrs(stroke: &Stroke, precision: usize) -> String {
    let mut attrs = format!(
        "stroke=\"{}\" stroke-width=\"{}\" fill=\"none\"",
        xml_escape(&stroke.color),
        format_number(stroke.width, precision)
    );
    if let Some(dash) = &stroke.dash {
        attrs.push_str(&format!(" stroke-dasharray=\"{}\"", xml_escape(dash)));
    }
    attrs
}

/// Number rounded to `precision` decimals with trailing zeros removed
pub fn format_number(value: f64, precision: usize) -> String {
    let text = format!("{:.*}", precision, value);
    let trimmed = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// `{prefix}-{w}x{d}x{h}{unit}-{style}.svg`
pub fn export_filename(dims: &Dimensions, style: LineStyle, options: &ExportOptions) -> String {
    format!(
        "{}-{}x{}x{}{}-{}.svg",
        sanitize_filename(&options.file_prefix),
        format_number(dims.width, options.precision),
        format_number(dims.depth, options.precision),
        format_number(dims.height, options.precision),
        sanitize_filename(&options.unit_suffix),
        style.as_str()
    )
}

pub fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
