use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A coordinate tuple, `[x, y]` or `[x, y, z]`.
pub type Position = Vec<f64>;

/// A closed boundary of a polygon, outer boundary or hole.
pub type Ring = Vec<Position>;

pub type Properties = Map<String, Value>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        coordinates: Position,
    },
    MultiPoint {
        coordinates: Vec<Position>,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    Polygon {
        coordinates: Vec<Ring>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Ring>>,
    },
    GeometryCollection {
        geometries: Vec<Geometry>,
    },
}

impl Geometry {
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point { .. } => "Point",
            Geometry::MultiPoint { .. } => "MultiPoint",
            Geometry::LineString { .. } => "LineString",
            Geometry::MultiLineString { .. } => "MultiLineString",
            Geometry::Polygon { .. } => "Polygon",
            Geometry::MultiPolygon { .. } => "MultiPolygon",
            Geometry::GeometryCollection { .. } => "GeometryCollection",
        }
    }
}

/// Outline of a single polygon: one sequence per ring.
#[derive(Debug, Clone, PartialEq)]
pub enum LineGeometry {
    LineString(Vec<Position>),
    MultiLineString(Vec<Vec<Position>>),
}

impl From<LineGeometry> for Geometry {
    fn from(line: LineGeometry) -> Self {
        match line {
            LineGeometry::LineString(coordinates) => Geometry::LineString { coordinates },
            LineGeometry::MultiLineString(coordinates) => Geometry::MultiLineString { coordinates },
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Entity {
    Feature {
        // `null` and a missing member both mean "no properties"
        #[serde(default)]
        properties: Option<Properties>,
        geometry: Geometry,
    },
    FeatureCollection {
        features: Vec<Entity>,
    },
}

impl Entity {
    pub fn feature(geometry: Geometry, properties: Properties) -> Self {
        Entity::Feature {
            properties: Some(properties),
            geometry,
        }
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        match self {
            Entity::Feature { geometry, .. } => Some(geometry),
            Entity::FeatureCollection { .. } => None,
        }
    }

    pub fn properties(&self) -> Option<&Properties> {
        match self {
            Entity::Feature { properties, .. } => properties.as_ref(),
            Entity::FeatureCollection { .. } => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Entity::Feature { .. } => "Feature",
            Entity::FeatureCollection { .. } => "FeatureCollection",
        }
    }

    /// Yields the features of this entity depth-first, collections flattened.
    pub fn flatten(&self) -> Vec<&Entity> {
        match self {
            Entity::Feature { .. } => vec![self],
            Entity::FeatureCollection { features } => {
                features.iter().flat_map(Entity::flatten).collect()
            }
        }
    }
}

/// Any top-level GeoJSON object: a feature, a collection or a bare geometry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum GeoJson {
    Entity(Entity),
    Geometry(Geometry),
}
