//! Codec module of pointcodec
//!
//! Turns heterogeneous point sequences into bytes and back. Each format lives
//! in its own submodule behind the [`PointCodec`] trait; [`PointFormat`] picks
//! one. The caller decides the format, typically from a file extension.

pub mod binary;
pub mod config;
pub mod custom;
pub mod error;
pub mod json;
pub mod soap;
pub mod xml;
pub mod yaml;

use core::fmt;
use core::str::FromStr;

use crate::numerics::types::collection::PointCollection;
use crate::numerics::types::variant::PointVariant;

pub use config::CodecConfig;
pub use error::{CodecError, DecodeError, EncodeError};

/// Trait that all point codecs implement.
///
/// `decode(encode(points))` must reproduce every element's value and shape,
/// except where a format documents a lossy case.
pub trait PointCodec: fmt::Debug {
    fn format(&self) -> PointFormat;
    fn encode(&self, points: &[PointVariant]) -> Result<Vec<u8>, EncodeError>;
    fn decode(&self, bytes: &[u8]) -> Result<Vec<PointVariant>, DecodeError>;
}

/// Serialization formats available in pointcodec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointFormat {
    Binary,
    Soap,
    Xml,
    Json,
    Yaml,
    Custom,
}

impl PointFormat {
    pub fn all() -> Vec<Self> {
        vec![
            PointFormat::Binary,
            PointFormat::Soap,
            PointFormat::Xml,
            PointFormat::Json,
            PointFormat::Yaml,
            PointFormat::Custom,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            PointFormat::Binary => "binary",
            PointFormat::Soap => "soap",
            PointFormat::Xml => "xml",
            PointFormat::Json => "json",
            PointFormat::Yaml => "yaml",
            PointFormat::Custom => "custom",
        }
    }

    /// Conventional file extension, without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            PointFormat::Binary => "bin",
            PointFormat::Soap => "soap",
            PointFormat::Xml => "xml",
            PointFormat::Json => "json",
            PointFormat::Yaml => "yaml",
            PointFormat::Custom => "custom",
        }
    }

    /// Whether decode reproduces every input exactly.
    pub fn is_lossless(self) -> bool {
        !matches!(self, PointFormat::Custom)
    }

    pub fn codec(self, config: &CodecConfig) -> Box<dyn PointCodec> {
        match self {
            PointFormat::Binary => Box::new(binary::BinaryCodec::new()),
            PointFormat::Soap => Box::new(soap::SoapCodec::new(config.pretty)),
            PointFormat::Xml => Box::new(xml::XmlCodec::new(config.pretty)),
            PointFormat::Json => Box::new(json::JsonCodec::new(config.pretty)),
            PointFormat::Yaml => Box::new(yaml::YamlCodec::new()),
            PointFormat::Custom => Box::new(custom::CustomCodec::new(config.strict_custom)),
        }
    }
}

impl fmt::Display for PointFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PointFormat {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "bin" => Ok(PointFormat::Binary),
            "soap" => Ok(PointFormat::Soap),
            "xml" => Ok(PointFormat::Xml),
            "json" => Ok(PointFormat::Json),
            "yaml" | "yml" => Ok(PointFormat::Yaml),
            "custom" => Ok(PointFormat::Custom),
            _ => Err(CodecError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Encode `points` with the default configuration.
pub fn encode(points: &PointCollection, format: PointFormat) -> Result<Vec<u8>, EncodeError> {
    encode_with(points, format, &CodecConfig::default())
}

/// Decode a stream produced by [`encode`] with the same `format`.
pub fn decode(bytes: &[u8], format: PointFormat) -> Result<PointCollection, DecodeError> {
    decode_with(bytes, format, &CodecConfig::default())
}

pub fn encode_with(
    points: &PointCollection,
    format: PointFormat,
    config: &CodecConfig,
) -> Result<Vec<u8>, EncodeError> {
    let bytes = format.codec(config).encode(points.as_slice())?;
    tracing::debug!(%format, points = points.len(), bytes = bytes.len(), "encoded points");
    Ok(bytes)
}

pub fn decode_with(
    bytes: &[u8],
    format: PointFormat,
    config: &CodecConfig,
) -> Result<PointCollection, DecodeError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(DecodeError::Empty { format });
    }

    let points = format.codec(config).decode(bytes)?;
    tracing::debug!(%format, points = points.len(), bytes = bytes.len(), "decoded points");
    Ok(PointCollection::from_points(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names_parse_back() {
        for format in PointFormat::all() {
            assert_eq!(format.name().parse::<PointFormat>().unwrap(), format);
            assert_eq!(format.extension().parse::<PointFormat>().unwrap(), format);
            assert_eq!(format.codec(&CodecConfig::default()).format(), format);
        }
        assert_eq!(" YML ".parse::<PointFormat>().unwrap(), PointFormat::Yaml);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result = "csv".parse::<PointFormat>();
        assert!(matches!(result, Err(CodecError::UnsupportedFormat(name)) if name == "csv"));
    }

    #[test]
    fn test_only_custom_is_lossy() {
        let lossy: Vec<_> = PointFormat::all().into_iter().filter(|f| !f.is_lossless()).collect();
        assert_eq!(lossy, vec![PointFormat::Custom]);
    }

    #[test]
    fn test_empty_stream_is_rejected_for_every_format() {
        for format in PointFormat::all() {
            let result = decode(b"", format);
            assert!(matches!(result, Err(DecodeError::Empty { format: f }) if f == format));

            let result = decode(b" \n\t", format);
            assert!(matches!(result, Err(DecodeError::Empty { .. })));
        }
    }
}
