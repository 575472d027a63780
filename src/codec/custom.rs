//! Line-oriented `X;Y;Z` text format.
//!
//! ```text
//! X;Y;Z
//! 1;2;0
//! 3;4;5
//! ```
//!
//! A plain point is written with `Z = 0`, and any line whose `Z` is `0` reads
//! back as a plain point. A 3D point lying on the `z = 0` plane therefore comes
//! back as 2D; this format is lossy for that case only.

use std::fmt::Write as _;

use crate::codec::{DecodeError, EncodeError, PointCodec, PointFormat};
use crate::numerics::types::point::{Point, Point3D};
use crate::numerics::types::traits::Planar;
use crate::numerics::types::variant::PointVariant;

pub const HEADER: &str = "X;Y;Z";
pub const SEPARATOR: char = ';';

#[derive(Debug, Default, Clone, Copy)]
pub struct CustomCodec {
    strict: bool,
}

impl CustomCodec {
    /// `strict` turns skipped lines into errors.
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }
}

/// Parse one record. `None` unless the line holds exactly three integers.
pub fn parse_line(line: &str) -> Option<PointVariant> {
    let mut fields = line.trim().split(SEPARATOR);
    let x = fields.next()?.trim().parse::<i32>().ok()?;
    let y = fields.next()?.trim().parse::<i32>().ok()?;
    let z = fields.next()?.trim().parse::<i32>().ok()?;
    if fields.next().is_some() {
        return None;
    }

    Some(if z == 0 {
        PointVariant::Point(Point::new(x, y))
    } else {
        PointVariant::Point3D(Point3D::new(x, y, z))
    })
}

impl PointCodec for CustomCodec {
    fn format(&self) -> PointFormat {
        PointFormat::Custom
    }

    fn encode(&self, points: &[PointVariant]) -> Result<Vec<u8>, EncodeError> {
        let mut text = String::with_capacity(HEADER.len() + 1 + points.len() * 12);
        text.push_str(HEADER);
        text.push('\n');
        for point in points {
            writeln!(text, "{}{sep}{}{sep}{}", point.x(), point.y(), point.z_or_zero(), sep = SEPARATOR)
                .map_err(|e| EncodeError::serialize(PointFormat::Custom, e))?;
        }
        Ok(text.into_bytes())
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<PointVariant>, DecodeError> {
        let format = PointFormat::Custom;
        let text = std::str::from_utf8(bytes).map_err(|e| DecodeError::malformed(format, e))?;
        let mut lines = text.split('\n');

        // header line is always present for non-empty input
        let header = lines.next().unwrap_or_default().trim();
        if header != HEADER {
            if self.strict {
                return Err(DecodeError::malformed(format, format!("expected header {:?}, found {:?}", HEADER, header)));
            }
            tracing::warn!(header, "unexpected custom-format header");
        }

        let mut points = Vec::new();
        for (index, line) in lines.enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match parse_line(trimmed) {
                Some(point) => points.push(point),
                None if self.strict => {
                    return Err(DecodeError::MalformedLine { line: index + 2, content: trimmed.to_string() })
                }
                None => tracing::warn!(line = index + 2, content = trimmed, "skipping malformed custom-format line"),
            }
        }
        Ok(points)
    }
}
