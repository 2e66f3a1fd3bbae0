use super::error::ConvertError;
use super::geojson::{Entity, GeoJson, Geometry, LineGeometry, Properties, Ring};
use log::debug;
use rayon::prelude::*;

/// The polygonal geometries that have an outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AreaGeometry<'a> {
    Polygon(&'a [Ring]),
    MultiPolygon(&'a [Vec<Ring>]),
}

/// Classify a geometry as an area, rejecting every other type and empty
/// coordinate arrays.
pub fn classify(geometry: &Geometry) -> Result<AreaGeometry<'_>, ConvertError> {
    let area = match geometry {
        Geometry::Polygon { coordinates } => AreaGeometry::Polygon(coordinates),
        Geometry::MultiPolygon { coordinates } => AreaGeometry::MultiPolygon(coordinates),
        Geometry::Point { .. }
        | Geometry::MultiPoint { .. }
        | Geometry::LineString { .. }
        | Geometry::MultiLineString { .. }
        | Geometry::GeometryCollection { .. } => {
            return Err(ConvertError::UnsupportedGeometryType(geometry.type_name()))
        }
    };
    let is_empty = match area {
        AreaGeometry::Polygon(rings) => rings.is_empty(),
        AreaGeometry::MultiPolygon(polygons) => polygons.is_empty(),
    };
    if is_empty {
        return Err(ConvertError::InvalidGeometry);
    }
    Ok(area)
}

/// Pick the properties for the output features.
///
/// Explicitly given properties win, even when empty. Otherwise the input
/// feature's own properties are used, falling back to an empty map.
pub fn resolve_properties(explicit: Option<&Properties>, own: Option<&Properties>) -> Properties {
    match (explicit, own) {
        (Some(properties), _) => properties.clone(),
        (None, Some(properties)) => properties.clone(),
        (None, None) => Properties::new(),
    }
}

/// Turn the rings of one polygon into a line feature.
///
/// A single ring becomes a LineString, several rings a MultiLineString with
/// one member per ring. Positions are passed through as they are, closed or
/// not.
pub fn rings_to_line(rings: &[Ring], properties: &Properties) -> Result<Entity, ConvertError> {
    let line = match rings {
        [] => return Err(ConvertError::InvalidGeometry),
        [ring] => LineGeometry::LineString(ring.clone()),
        _ => LineGeometry::MultiLineString(rings.to_vec()),
    };
    Ok(Entity::feature(line.into(), properties.clone()))
}

fn area_to_lines(area: AreaGeometry, properties: &Properties) -> Result<Entity, ConvertError> {
    match area {
        AreaGeometry::Polygon(rings) => rings_to_line(rings, properties),
        AreaGeometry::MultiPolygon(polygons) => {
            let features = polygons
                .iter()
                .map(|rings| rings_to_line(rings, properties))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Entity::FeatureCollection { features })
        }
    }
}

/// Convert a (Multi)Polygon feature into its outline.
///
/// A Polygon yields a (Multi)LineString feature, a MultiPolygon a
/// FeatureCollection with one such feature per polygon. Without explicit
/// `properties` the feature's own properties are carried over.
///
/// # Example
///
/// ```
/// use poly2line::convert::convert;
/// use poly2line::geojson::{Entity, Geometry};
///
/// let polygon: Entity = serde_json::from_str(
///     r#"{"type":"Feature","properties":null,"geometry":{"type":"Polygon",
///         "coordinates":[[[125,-30],[145,-30],[145,-20],[125,-20],[125,-30]]]}}"#,
/// )
/// .unwrap();
/// let line = convert(&polygon, None).unwrap();
/// assert_eq!(line.geometry().map(Geometry::type_name), Some("LineString"));
/// ```
pub fn convert(feature: &Entity, properties: Option<&Properties>) -> Result<Entity, ConvertError> {
    match feature {
        Entity::Feature {
            geometry,
            properties: own,
        } => {
            let area = classify(geometry)?;
            let properties = resolve_properties(properties, own.as_ref());
            area_to_lines(area, &properties)
        }
        Entity::FeatureCollection { .. } => {
            Err(ConvertError::UnsupportedGeometryType(feature.type_name()))
        }
    }
}

/// Same as [`convert`] for a geometry that is not wrapped in a feature.
pub fn convert_geometry(
    geometry: &Geometry,
    properties: Option<&Properties>,
) -> Result<Entity, ConvertError> {
    let area = classify(geometry)?;
    let properties = resolve_properties(properties, None);
    area_to_lines(area, &properties)
}

/// Convert every polygonal feature of a GeoJSON object.
///
/// Members of a FeatureCollection are converted in parallel; the results keep
/// the input order and any failure aborts the whole batch.
pub fn convert_all(
    input: &GeoJson,
    properties: Option<&Properties>,
) -> Result<Vec<Entity>, ConvertError> {
    match input {
        GeoJson::Geometry(geometry) => Ok(vec![convert_geometry(geometry, properties)?]),
        GeoJson::Entity(Entity::FeatureCollection { features }) => {
            debug!("converting {} features", features.len());
            features
                .par_iter()
                .map(|feature| convert(feature, properties))
                .collect()
        }
        GeoJson::Entity(feature) => Ok(vec![convert(feature, properties)?]),
    }
}
