//! SVG export - quick visual inspection of cells and tessellations.
//!
//! Builds the document by hand: one filled path per record, a small
//! fixed palette cycled in label order, the bounding record drawn as
//! an outline.

use geo::{BoundingRect, MultiPolygon, Polygon, Rect, coord};
use warpweft::{FragmentKind, PrimitiveCell, Ribbon};

const PALETTE: [&str; 6] = [
    "#4c78a8", "#f58518", "#54a24b", "#eeca3b", "#b279a2", "#e45756",
];
const OUTLINE: &str = "#555555";

/// Render every record of a primitive cell.
pub fn cell_svg(cell: &PrimitiveCell) -> String {
    let labels = cell.labels();
    let mut bounds = None;
    for record in cell.records() {
        bounds = expand(bounds, record.polygon.bounding_rect());
    }
    let Some(bounds) = bounds else {
        return document(unit_bounds(), "");
    };

    let stroke_width = 0.004 * bounds.width().max(bounds.height());
    let mut body = String::new();
    for record in cell.records() {
        match record.kind {
            FragmentKind::Bounding => body.push_str(&format!(
                "<path d=\"{}\" fill=\"none\" stroke=\"{OUTLINE}\" stroke-width=\"{stroke_width:.6}\"/>\n",
                path_data(&record.polygon)
            )),
            FragmentKind::Shape => {
                let idx = labels.iter().position(|l| *l == record.label).unwrap_or(0);
                body.push_str(&format!(
                    "<path d=\"{}\" fill=\"{}\" fill-rule=\"evenodd\"/>\n",
                    path_data(&record.polygon),
                    PALETTE[idx % PALETTE.len()],
                ));
            }
        }
    }
    document(bounds, &body)
}

/// Render merged tessellation ribbons, one path per label.
pub fn ribbons_svg(ribbons: &[Ribbon]) -> String {
    let mut bounds = None;
    for ribbon in ribbons {
        bounds = expand(bounds, ribbon.geometry.bounding_rect());
    }
    let Some(bounds) = bounds else {
        return document(unit_bounds(), "");
    };

    let mut body = String::new();
    for (idx, ribbon) in ribbons.iter().enumerate() {
        body.push_str(&format!(
            "<path d=\"{}\" fill=\"{}\" fill-rule=\"evenodd\"/>\n",
            multi_path_data(&ribbon.geometry),
            PALETTE[idx % PALETTE.len()],
        ));
    }
    document(bounds, &body)
}

fn unit_bounds() -> Rect<f64> {
    Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 1.0 })
}

fn expand(acc: Option<Rect<f64>>, next: Option<Rect<f64>>) -> Option<Rect<f64>> {
    match (acc, next) {
        (None, b) => b,
        (a, None) => a,
        (Some(a), Some(b)) => Some(Rect::new(
            coord! {
                x: a.min().x.min(b.min().x),
                y: a.min().y.min(b.min().y),
            },
            coord! {
                x: a.max().x.max(b.max().x),
                y: a.max().y.max(b.max().y),
            },
        )),
    }
}

fn path_data(polygon: &Polygon<f64>) -> String {
    let mut d = String::new();
    for ring in std::iter::once(polygon.exterior()).chain(polygon.interiors().iter()) {
        for (i, c) in ring.coords().enumerate() {
            if i == 0 {
                d.push_str(&format!("M{:.6},{:.6}", c.x, c.y));
            } else {
                d.push_str(&format!(" L{:.6},{:.6}", c.x, c.y));
            }
        }
        d.push_str(" Z ");
    }
    d.trim_end().to_string()
}

fn multi_path_data(geometry: &MultiPolygon<f64>) -> String {
    geometry
        .iter()
        .map(path_data)
        .collect::<Vec<_>>()
        .join(" ")
}

fn document(bounds: Rect<f64>, body: &str) -> String {
    let pad = 0.02 * bounds.width().max(bounds.height());
    let x = bounds.min().x - pad;
    let y = bounds.min().y - pad;
    let w = bounds.width() + 2.0 * pad;
    let h = bounds.height() + 2.0 * pad;
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{x:.6} {y:.6} {w:.6} {h:.6}\">\n{body}</svg>\n"
    )
}
