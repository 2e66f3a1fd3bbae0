//! Extract the outlines of polygonal GeoJSON features.
//!
//! A Polygon becomes a LineString (one ring) or a MultiLineString (outer ring
//! plus holes), a MultiPolygon becomes a FeatureCollection with one such line
//! feature per polygon.
use self::convert::convert_all;
use self::error::Poly2LineError;
use self::geojson::{Entity, GeoJson, Properties};
use log::info;
use serde_json::{from_reader, from_str, Value};
use std::io::Read;

pub mod convert;
pub mod error;
pub mod geo;
pub mod geojson;
pub mod output;

#[cfg(test)]
mod test_helpers;

pub use self::convert::{convert, convert_geometry};
pub use self::error::ConvertError;

/// Parse a properties override, which has to be a JSON object.
pub fn parse_properties(json: &str) -> Result<Properties, Poly2LineError> {
    match from_str::<Value>(json)? {
        Value::Object(properties) => Ok(properties),
        _ => Err(Poly2LineError::InvalidProperties),
    }
}

/// Read a GeoJSON object and convert all polygonal features in it to lines.
pub fn process(
    reader: impl Read,
    properties: Option<&Properties>,
) -> Result<Vec<Entity>, Poly2LineError> {
    let input: GeoJson = from_reader(reader)?;
    let lines = convert_all(&input, properties)?;
    info!("converted {} polygonal objects", lines.len());
    Ok(lines)
}
