//! Tagged binary encoding built on bincode.
//!
//! Layout: the 4-byte magic `PTB1` followed by the bincode (standard config)
//! serialization of the point sequence. The enum discriminant of each element
//! carries its shape.

use crate::codec::{DecodeError, EncodeError, PointCodec, PointFormat};
use crate::numerics::types::variant::PointVariant;

pub const MAGIC: &[u8; 4] = b"PTB1";

#[derive(Debug, Default, Clone, Copy)]
pub struct BinaryCodec;

impl BinaryCodec {
    pub fn new() -> Self {
        Self
    }
}

impl PointCodec for BinaryCodec {
    fn format(&self) -> PointFormat {
        PointFormat::Binary
    }

    fn encode(&self, points: &[PointVariant]) -> Result<Vec<u8>, EncodeError> {
        let body = bincode::serde::encode_to_vec(points, bincode::config::standard())
            .map_err(|e| EncodeError::serialize(PointFormat::Binary, e))?;

        let mut bytes = Vec::with_capacity(MAGIC.len() + body.len());
        bytes.extend_from_slice(MAGIC);
        bytes.extend_from_slice(&body);
        Ok(bytes)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<PointVariant>, DecodeError> {
        let body = bytes
            .strip_prefix(MAGIC.as_slice())
            .ok_or_else(|| DecodeError::malformed(PointFormat::Binary, "missing PTB1 header"))?;

        let (points, read): (Vec<PointVariant>, usize) =
            bincode::serde::decode_from_slice(body, bincode::config::standard())
                .map_err(|e| DecodeError::malformed(PointFormat::Binary, e))?;

        if read != body.len() {
            return Err(DecodeError::malformed(
                PointFormat::Binary,
                format!("{} trailing bytes", body.len() - read),
            ));
        }
        Ok(points)
    }
}
