use super::geojson::{Entity, Geometry, Properties, Ring};
use serde_json::Value;

/// A closed, counter-clockwise square ring with its lower left corner at `(x, y)`.
pub fn square(x: f64, y: f64, size: f64) -> Ring {
    vec![
        vec![x, y],
        vec![x + size, y],
        vec![x + size, y + size],
        vec![x, y + size],
        vec![x, y],
    ]
}

pub fn polygon(rings: Vec<Ring>) -> Geometry {
    Geometry::Polygon { coordinates: rings }
}

pub fn multi_polygon(polygons: Vec<Vec<Ring>>) -> Geometry {
    Geometry::MultiPolygon {
        coordinates: polygons,
    }
}

pub fn feature(geometry: Geometry, properties: Option<Properties>) -> Entity {
    Entity::Feature {
        properties,
        geometry,
    }
}

pub fn properties(tags: &[(&str, &str)]) -> Properties {
    tags.iter()
        .map(|(key, value)| ((*key).into(), Value::String((*value).into())))
        .collect()
}
