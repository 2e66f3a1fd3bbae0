use super::error::ConvertError;
use super::geojson::{Geometry, Position, Ring};
use geo_types::{Coordinate, LineString, MultiLineString, MultiPolygon, Polygon};
use std::convert::TryFrom;

fn ring_from_line_string(line_string: &LineString<f64>) -> Ring {
    line_string.0.iter().map(|c| vec![c.x, c.y]).collect()
}

fn rings_from_polygon(polygon: &Polygon<f64>) -> Vec<Ring> {
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(ring_from_line_string)
        .collect()
}

impl From<&Polygon<f64>> for Geometry {
    fn from(polygon: &Polygon<f64>) -> Self {
        Geometry::Polygon {
            coordinates: rings_from_polygon(polygon),
        }
    }
}

impl From<&MultiPolygon<f64>> for Geometry {
    fn from(multi_polygon: &MultiPolygon<f64>) -> Self {
        let coordinates = multi_polygon.0.iter().map(rings_from_polygon).collect();
        Geometry::MultiPolygon { coordinates }
    }
}

// geo-types is planar, a third coordinate is dropped
fn to_coordinate(position: &Position) -> Result<Coordinate<f64>, ConvertError> {
    match position.as_slice() {
        [x, y, ..] => Ok(Coordinate { x: *x, y: *y }),
        _ => Err(ConvertError::InvalidGeometry),
    }
}

fn to_line_string(positions: &[Position]) -> Result<LineString<f64>, ConvertError> {
    let coordinates = positions
        .iter()
        .map(to_coordinate)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(LineString(coordinates))
}

impl TryFrom<&Geometry> for geo_types::Geometry<f64> {
    type Error = ConvertError;

    fn try_from(geometry: &Geometry) -> Result<Self, Self::Error> {
        match geometry {
            Geometry::LineString { coordinates } => {
                Ok(geo_types::Geometry::LineString(to_line_string(coordinates)?))
            }
            Geometry::MultiLineString { coordinates } => {
                let line_strings = coordinates
                    .iter()
                    .map(|positions| to_line_string(positions))
                    .collect::<Result<Vec<_>, _>>()?;
                let multi_line_string = MultiLineString(line_strings);
                Ok(geo_types::Geometry::MultiLineString(multi_line_string))
            }
            _ => Err(ConvertError::UnsupportedGeometryType(geometry.type_name())),
        }
    }
}
