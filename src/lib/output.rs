use super::geojson::Entity;
use serde_json::to_string;
use std::error::Error;
use std::io::Write;

pub trait Output {
    fn write_geojson(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>>;
    fn write_json_lines(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>>;
}

fn line_features(entities: &[Entity]) -> Vec<&Entity> {
    entities.iter().flat_map(Entity::flatten).collect()
}

impl Output for Vec<Entity> {
    fn write_geojson(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        let features = line_features(self).into_iter().cloned().collect();
        let feature_collection = Entity::FeatureCollection { features };
        let string = to_string(&feature_collection)?;
        writeln!(writer, "{}", string)?;
        Ok(())
    }

    fn write_json_lines(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        for feature in line_features(self) {
            let json = to_string(feature)?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::convert;
    use crate::test_helpers::{feature, multi_polygon, polygon, square};
    use serde_json::{from_str, Value};

    fn converted() -> Vec<Entity> {
        let single = feature(polygon(vec![square(0., 0., 1.)]), None);
        let multi = feature(
            multi_polygon(vec![vec![square(2., 0., 1.)], vec![square(4., 0., 1.)]]),
            None,
        );
        vec![convert(&single, None).unwrap(), convert(&multi, None).unwrap()]
    }

    #[test]
    fn geojson_is_one_flat_collection() {
        let mut out = Vec::new();
        converted().write_geojson(&mut out).unwrap();
        let value: Value = from_str(&String::from_utf8(out).unwrap()).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        let features = value["features"].as_array().unwrap();
        assert_eq!(features.len(), 3);
        for (i, feature) in features.iter().enumerate() {
            assert_eq!(feature["type"], "Feature");
            assert_eq!(feature["geometry"]["type"], "LineString");
            assert_eq!(feature["geometry"]["coordinates"][0][0], (i * 2) as f64);
        }
    }

    #[test]
    fn one_feature_per_line() {
        let mut out = Vec::new();
        converted().write_json_lines(&mut out).unwrap();
        let string = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = string.trim().split('\n').collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            let entity: Entity = from_str(line).unwrap();
            assert_eq!(entity.type_name(), "Feature");
        }
    }

    #[test]
    fn nothing_converted() {
        let mut out = Vec::new();
        Vec::<Entity>::new().write_json_lines(&mut out).unwrap();
        assert!(out.is_empty());

        Vec::<Entity>::new().write_geojson(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"type\":\"FeatureCollection\",\"features\":[]}\n"
        );
    }
}
