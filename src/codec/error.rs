use crate::codec::PointFormat;

/// Errors raised while turning points into bytes.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("Failed to encode {format}: {message}")]
    Serialize { format: PointFormat, message: String },
}

/// Errors raised while rebuilding points from bytes.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Empty {format} stream")]
    Empty { format: PointFormat },

    #[error("Malformed {format} stream: {message}")]
    Malformed { format: PointFormat, message: String },

    #[error("Malformed line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("Unknown point type {name:?} in {format} stream")]
    UnknownVariant { format: PointFormat, name: String },

    #[error("Declared length {declared} does not match {actual} decoded points")]
    LengthMismatch { declared: usize, actual: usize },
}

/// Errors raised while selecting a codec by name.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("Unsupported format: {0:?}")]
    UnsupportedFormat(String),
}

impl EncodeError {
    pub(crate) fn serialize(format: PointFormat, err: impl std::fmt::Display) -> Self {
        EncodeError::Serialize { format, message: err.to_string() }
    }
}

impl DecodeError {
    pub(crate) fn malformed(format: PointFormat, err: impl std::fmt::Display) -> Self {
        DecodeError::Malformed { format, message: err.to_string() }
    }
}
