//! YAML encoding with `!Point` / `!Point3D` tags and plain field names.
//!
//! ```yaml
//! - !Point
//!   x: 1
//!   y: 2
//! - !Point3D
//!   x: 3
//!   y: 4
//!   z: 5
//! ```

use crate::codec::{DecodeError, EncodeError, PointCodec, PointFormat};
use crate::numerics::types::variant::PointVariant;

#[derive(Debug, Default, Clone, Copy)]
pub struct YamlCodec;

impl YamlCodec {
    pub fn new() -> Self {
        Self
    }
}

impl PointCodec for YamlCodec {
    fn format(&self) -> PointFormat {
        PointFormat::Yaml
    }

    // serde_yaml writes externally tagged enum variants as YAML tags
    fn encode(&self, points: &[PointVariant]) -> Result<Vec<u8>, EncodeError> {
        serde_yaml::to_string(points)
            .map(String::into_bytes)
            .map_err(|e| EncodeError::serialize(PointFormat::Yaml, e))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<PointVariant>, DecodeError> {
        let format = PointFormat::Yaml;
        // a stream without a document (comments only, bare `---`, `~`) reads as null
        let points: Option<Vec<PointVariant>> =
            serde_yaml::from_slice(bytes).map_err(|e| DecodeError::malformed(format, e))?;
        points.ok_or(DecodeError::Empty { format })
    }
}
