//! JSON encoding with a `$type` discriminator on every element.
//!
//! `[{"$type":"Point","x":1,"y":2},{"$type":"Point3D","x":3,"y":4,"z":5}]`

use serde::{Deserialize, Serialize};

use crate::codec::{DecodeError, EncodeError, PointCodec, PointFormat};
use crate::numerics::types::point::{Point, Point3D};
use crate::numerics::types::variant::PointVariant;

pub const TYPE_FIELD: &str = "$type";

/// Wire shape of one element: the variant name is stored inside the object.
#[derive(Serialize, Deserialize)]
#[serde(tag = "$type")]
enum TaggedPoint {
    Point(Point),
    Point3D(Point3D),
}

impl From<PointVariant> for TaggedPoint {
    fn from(point: PointVariant) -> Self {
        match point {
            PointVariant::Point(p) => TaggedPoint::Point(p),
            PointVariant::Point3D(p) => TaggedPoint::Point3D(p),
        }
    }
}

impl From<TaggedPoint> for PointVariant {
    fn from(point: TaggedPoint) -> Self {
        match point {
            TaggedPoint::Point(p) => PointVariant::Point(p),
            TaggedPoint::Point3D(p) => PointVariant::Point3D(p),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl PointCodec for JsonCodec {
    fn format(&self) -> PointFormat {
        PointFormat::Json
    }

    fn encode(&self, points: &[PointVariant]) -> Result<Vec<u8>, EncodeError> {
        let wire: Vec<TaggedPoint> = points.iter().copied().map(TaggedPoint::from).collect();
        let encoded = if self.pretty {
            serde_json::to_vec_pretty(&wire)
        } else {
            serde_json::to_vec(&wire)
        };
        encoded.map_err(|e| EncodeError::serialize(PointFormat::Json, e))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<PointVariant>, DecodeError> {
        let wire: Vec<TaggedPoint> =
            serde_json::from_slice(bytes).map_err(|e| DecodeError::malformed(PointFormat::Json, e))?;
        Ok(wire.into_iter().map(PointVariant::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_element_carries_type() {
        let points: Vec<PointVariant> = vec![Point::new(1, 2).into(), Point3D::new(3, 4, 5).into()];
        let bytes = JsonCodec::new(false).encode(&points).unwrap();

        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"[{"$type":"Point","x":1,"y":2},{"$type":"Point3D","x":3,"y":4,"z":5}]"#
        );
    }

    #[test]
    fn test_discriminator_decides_shape() {
        let text = r#"[{"x":1,"y":2,"$type":"Point3D","z":0}, {"$type":"Point","y":-4,"x":3}]"#;
        let points = JsonCodec::new(true).decode(text.as_bytes()).unwrap();

        let expected: Vec<PointVariant> = vec![Point3D::new(1, 2, 0).into(), Point::new(3, -4).into()];
        assert_eq!(points, expected);
    }

    #[test]
    fn test_missing_or_unknown_type_fails() {
        let codec = JsonCodec::new(true);
        assert!(codec.decode(br#"[{"x":1,"y":2}]"#).is_err());
        assert!(codec.decode(br#"[{"$type":"Point4D","x":1,"y":2}]"#).is_err());
        assert!(codec.decode(br#"[{"$type":"Point3D","x":1,"y":2}]"#).is_err());
        assert!(codec.decode(br#"{"$type":"Point","x":1,"y":2}"#).is_err());
    }

    #[test]
    fn test_extra_coordinate_is_rejected() {
        let codec = JsonCodec::new(true);
        assert!(codec.decode(br#"[{"$type":"Point","x":1,"y":2,"z":9}]"#).is_err());
        assert!(codec.decode(br#"[{"$type":"Point3D","x":1,"y":2,"z":3,"w":4}]"#).is_err());
    }

    #[test]
    fn test_empty_array() {
        let codec = JsonCodec::new(true);
        let bytes = codec.encode(&[]).unwrap();
        assert!(codec.decode(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_type_field_name() {
        let bytes = JsonCodec::new(false).encode(&[PointVariant::from(Point::new(0, 0))]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value[0][TYPE_FIELD], "Point");
    }
}
