//! warpweft - weave pattern generator CLI.
//!
//! Generates a triangular or orthogonal weave primitive cell,
//! optionally tessellates it over a target rectangle, and writes the
//! result as GeoJSON or SVG.
//!
//! Usage:
//!   warpweft triangular --width 1 --spacing 2 --labels a,b,c
//!   warpweft orthogonal --h-width 1 --h-spacing 1.5 --v-width 1 \
//!       --v-spacing 1.5 --rows h1 --cols v1 --tile -50,-50,50,50

mod geojson;
mod svg;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use geo::{Rect, coord};
use tracing_subscriber::fmt::SubscriberBuilder;
use warpweft::{OrthogonalWeave, PrimitiveCell, TriangularWeave, tessellate};

#[derive(Parser)]
#[command(name = "warpweft")]
#[command(about = "Tileable over/under weave patterns for map symbology")]
struct Cmd {
    /// Tessellate over minx,miny,maxx,maxy instead of emitting one cell
    #[arg(long, global = true, value_name = "RECT", allow_hyphen_values = true)]
    tile: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Geojson)]
    format: Format,

    /// Output path (stdout when omitted)
    #[arg(long, global = true)]
    out: Option<std::path::PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Geojson,
    Svg,
}

#[derive(Subcommand)]
enum Action {
    /// Triangular weave: three ribbon families at 0/-120/+120 degrees
    Triangular {
        /// Ribbon width
        #[arg(long)]
        width: f64,
        /// Center-to-center ribbon spacing (at least the width)
        #[arg(long)]
        spacing: f64,
        /// Inward inset opening the over/under gap
        #[arg(long, default_value_t = 0.0)]
        margin: f64,
        /// Three comma-separated ribbon labels
        #[arg(long, value_delimiter = ',', default_value = "a,b,c")]
        labels: Vec<String>,
    },
    /// Orthogonal weave: alternating horizontal and vertical ribbons
    Orthogonal {
        /// Horizontal ribbon width
        #[arg(long)]
        h_width: f64,
        /// Horizontal ribbon spacing (row period)
        #[arg(long)]
        h_spacing: f64,
        /// Vertical ribbon width
        #[arg(long)]
        v_width: f64,
        /// Vertical ribbon spacing (column period)
        #[arg(long)]
        v_spacing: f64,
        /// Inward inset opening the over/under gap
        #[arg(long, default_value_t = 0.0)]
        margin: f64,
        /// Comma-separated row-class labels
        #[arg(long, value_delimiter = ',')]
        rows: Vec<String>,
        /// Comma-separated column-class labels
        #[arg(long, value_delimiter = ',')]
        cols: Vec<String>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();

    let cell = build_cell(&cmd.action)?;
    tracing::info!(records = cell.records().len(), "primitive cell ready");

    let output = match &cmd.tile {
        None => match cmd.format {
            Format::Geojson => geojson::cell_geojson(&cell)?,
            Format::Svg => svg::cell_svg(&cell),
        },
        Some(spec) => {
            let target = parse_rect(spec)?;
            let ribbons = tessellate(&cell, target)?;
            tracing::info!(ribbons = ribbons.len(), "tessellated");
            match cmd.format {
                Format::Geojson => geojson::ribbons_geojson(&ribbons)?,
                Format::Svg => svg::ribbons_svg(&ribbons),
            }
        }
    };

    match &cmd.out {
        Some(path) => std::fs::write(path, output)
            .with_context(|| format!("writing {}", path.display()))?,
        None => println!("{output}"),
    }
    Ok(())
}

fn build_cell(action: &Action) -> Result<PrimitiveCell> {
    match action {
        Action::Triangular {
            width,
            spacing,
            margin,
            labels,
        } => {
            let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
            let weave = TriangularWeave::new(*width, *spacing, *margin, &labels)?;
            Ok(weave.into_primitive_cell())
        }
        Action::Orthogonal {
            h_width,
            h_spacing,
            v_width,
            v_spacing,
            margin,
            rows,
            cols,
        } => {
            let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
            let cols: Vec<&str> = cols.iter().map(String::as_str).collect();
            let weave = OrthogonalWeave::new(
                *h_width, *h_spacing, *v_width, *v_spacing, *margin, &rows, &cols,
            )?;
            Ok(weave.into_primitive_cell())
        }
    }
}

/// Parse "minx,miny,maxx,maxy" into a target rectangle.
fn parse_rect(spec: &str) -> Result<Rect<f64>> {
    let parts: Vec<f64> = spec
        .split(',')
        .map(|s| s.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .with_context(|| format!("--tile takes minx,miny,maxx,maxy, got {spec:?}"))?;
    if parts.len() != 4 {
        bail!("--tile takes minx,miny,maxx,maxy, got {spec:?}");
    }
    if parts[2] <= parts[0] || parts[3] <= parts[1] {
        bail!("--tile rectangle must have positive size, got {spec:?}");
    }
    Ok(Rect::new(
        coord! { x: parts[0], y: parts[1] },
        coord! { x: parts[2], y: parts[3] },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_rect() {
        let rect = parse_rect("-50, -50, 50, 50").unwrap();
        assert_eq!(rect.min().x, -50.0);
        assert_eq!(rect.max().y, 50.0);
    }

    #[test]
    fn rejects_malformed_rects() {
        assert!(parse_rect("1,2,3").is_err());
        assert!(parse_rect("a,b,c,d").is_err());
        assert!(parse_rect("0,0,0,1").is_err());
        assert!(parse_rect("0,0,1,-1").is_err());
    }
}
