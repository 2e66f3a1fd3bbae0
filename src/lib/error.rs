use thiserror::Error;

/// Reasons a geometry cannot be turned into lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The polygon (or multipolygon) has no rings at the top level.
    #[error("polygon must contain coordinates")]
    InvalidGeometry,
    /// Anything that is not a Polygon or MultiPolygon.
    #[error("geometry type {0} is not supported")]
    UnsupportedGeometryType(&'static str),
}

#[derive(Debug, Error)]
pub enum Poly2LineError {
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
    #[error("invalid geojson: {0}")]
    Json(#[from] serde_json::Error),
    #[error("properties must be a json object")]
    InvalidProperties,
    #[error(transparent)]
    Convert(#[from] ConvertError),
}
