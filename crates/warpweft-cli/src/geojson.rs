//! GeoJSON export.
//!
//! One feature per primitive-cell record, or one MultiPolygon feature
//! per merged tessellation ribbon. Coordinates are passed through as
//! abstract planar units; no CRS is claimed.

use anyhow::Result;
use geo::{LineString, MultiPolygon, Polygon};
use serde_json::{Value, json};
use warpweft::{FragmentKind, PrimitiveCell, Ribbon};

fn ring_coords(ring: &LineString<f64>) -> Value {
    Value::Array(ring.coords().map(|c| json!([c.x, c.y])).collect())
}

fn polygon_coords(polygon: &Polygon<f64>) -> Value {
    let mut rings = vec![ring_coords(polygon.exterior())];
    rings.extend(polygon.interiors().iter().map(ring_coords));
    Value::Array(rings)
}

fn multi_polygon_coords(geometry: &MultiPolygon<f64>) -> Value {
    Value::Array(geometry.iter().map(polygon_coords).collect())
}

fn category(kind: FragmentKind) -> &'static str {
    match kind {
        FragmentKind::Bounding => "bounding",
        FragmentKind::Shape => "shape",
    }
}

/// A FeatureCollection with every record of the cell, bounding box
/// first, in generation order.
pub fn cell_geojson(cell: &PrimitiveCell) -> Result<String> {
    let features: Vec<Value> = cell
        .records()
        .iter()
        .map(|record| {
            json!({
                "type": "Feature",
                "properties": {
                    "label": record.label,
                    "category": category(record.kind),
                },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": polygon_coords(&record.polygon),
                },
            })
        })
        .collect();
    collection(features)
}

/// A FeatureCollection with one merged MultiPolygon per ribbon label.
pub fn ribbons_geojson(ribbons: &[Ribbon]) -> Result<String> {
    let features: Vec<Value> = ribbons
        .iter()
        .map(|ribbon| {
            json!({
                "type": "Feature",
                "properties": { "label": ribbon.label },
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": multi_polygon_coords(&ribbon.geometry),
                },
            })
        })
        .collect();
    collection(features)
}

fn collection(features: Vec<Value>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&json!({
        "type": "FeatureCollection",
        "features": features,
    }))?)
}
