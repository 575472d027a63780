//! XML encoding with the allowed element types declared on the root.
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <ArrayOfPoint types="Point Point3D">
//!   <Point>
//!     <X>1</X>
//!     <Y>2</Y>
//!   </Point>
//!   <Point3D>
//!     <X>3</X>
//!     <Y>4</Y>
//!     <Z>5</Z>
//!   </Point3D>
//! </ArrayOfPoint>
//! ```
//!
//! The element name is the shape; a reader only accepts names listed in the
//! root's `types` attribute.
//!
//! The event helpers at the bottom are shared with the SOAP codec.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::codec::{DecodeError, EncodeError, PointCodec, PointFormat};
use crate::numerics::types::traits::Planar;
use crate::numerics::types::variant::{PointVariant, VariantTag};

pub const ROOT: &str = "ArrayOfPoint";
pub const TYPES_ATTRIBUTE: &str = "types";

#[derive(Debug, Clone, Copy)]
pub struct XmlCodec {
    pretty: bool,
}

impl XmlCodec {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl PointCodec for XmlCodec {
    fn format(&self) -> PointFormat {
        PointFormat::Xml
    }

    fn encode(&self, points: &[PointVariant]) -> Result<Vec<u8>, EncodeError> {
        let format = PointFormat::Xml;
        let mut writer = new_writer(self.pretty);
        emit(&mut writer, format, Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

        let declared = VariantTag::all().map(VariantTag::name).join(" ");
        let mut root = BytesStart::new(ROOT);
        root.push_attribute((TYPES_ATTRIBUTE, declared.as_str()));
        emit(&mut writer, format, Event::Start(root))?;

        for point in points {
            let name = point.variant_name();
            emit(&mut writer, format, Event::Start(BytesStart::new(name)))?;
            write_coordinates(&mut writer, format, point)?;
            emit(&mut writer, format, Event::End(BytesEnd::new(name)))?;
        }

        emit(&mut writer, format, Event::End(BytesEnd::new(ROOT)))?;
        Ok(writer.into_inner())
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<PointVariant>, DecodeError> {
        let format = PointFormat::Xml;
        let mut reader = new_reader(bytes);

        let (allowed, has_children) = match next_significant(&mut reader, format)? {
            Event::Start(e) if e.name().as_ref() == ROOT.as_bytes() => (declared_types(&e)?, true),
            Event::Empty(e) if e.name().as_ref() == ROOT.as_bytes() => (declared_types(&e)?, false),
            Event::Eof => return Err(DecodeError::Empty { format }),
            other => return Err(unexpected(format, &other, ROOT)),
        };

        let mut points = Vec::new();
        while has_children {
            match next_significant(&mut reader, format)? {
                Event::Start(e) => {
                    let name = element_name(&e);
                    let tag = allowed
                        .iter()
                        .copied()
                        .find(|tag| tag.name() == name)
                        .ok_or_else(|| DecodeError::UnknownVariant { format, name: name.clone() })?;
                    points.push(read_coordinates(&mut reader, format, tag, &name)?);
                }
                Event::End(_) => break,
                other => return Err(unexpected(format, &other, "a point element")),
            }
        }

        expect_eof(&mut reader, format)?;
        Ok(points)
    }
}

/// Parse the root's `types` attribute into the shapes it allows.
fn declared_types(root: &BytesStart<'_>) -> Result<Vec<VariantTag>, DecodeError> {
    let format = PointFormat::Xml;
    let attribute = root
        .try_get_attribute(TYPES_ATTRIBUTE)
        .map_err(|e| DecodeError::malformed(format, e))?
        .ok_or_else(|| DecodeError::malformed(format, "root does not declare its element types"))?;
    let value = attribute
        .unescape_value()
        .map_err(|e| DecodeError::malformed(format, e))?;

    value
        .split_whitespace()
        .map(|name| {
            name.parse::<VariantTag>()
                .map_err(|name| DecodeError::UnknownVariant { format, name })
        })
        .collect()
}

pub(crate) fn new_writer(pretty: bool) -> Writer<Vec<u8>> {
    if pretty {
        Writer::new_with_indent(Vec::new(), b' ', 2)
    } else {
        Writer::new(Vec::new())
    }
}

pub(crate) fn new_reader(bytes: &[u8]) -> Reader<&[u8]> {
    let mut reader = Reader::from_reader(bytes);
    reader.config_mut().trim_text(true);
    reader
}

pub(crate) fn emit(writer: &mut Writer<Vec<u8>>, format: PointFormat, event: Event<'_>) -> Result<(), EncodeError> {
    writer
        .write_event(event)
        .map_err(|e| EncodeError::serialize(format, e))
}

fn write_field(writer: &mut Writer<Vec<u8>>, format: PointFormat, name: &str, value: i32) -> Result<(), EncodeError> {
    let text = value.to_string();
    emit(writer, format, Event::Start(BytesStart::new(name)))?;
    emit(writer, format, Event::Text(BytesText::new(&text)))?;
    emit(writer, format, Event::End(BytesEnd::new(name)))
}

/// Write `<X>`, `<Y>` and, for 3D points, `<Z>`.
pub(crate) fn write_coordinates(
    writer: &mut Writer<Vec<u8>>,
    format: PointFormat,
    point: &PointVariant,
) -> Result<(), EncodeError> {
    write_field(writer, format, "X", point.x())?;
    write_field(writer, format, "Y", point.y())?;
    if point.is_3d() {
        write_field(writer, format, "Z", point.z_or_zero())?;
    }
    Ok(())
}

/// Read coordinate children until the closing tag of the enclosing element.
pub(crate) fn read_coordinates(
    reader: &mut Reader<&[u8]>,
    format: PointFormat,
    tag: VariantTag,
    element: &str,
) -> Result<PointVariant, DecodeError> {
    let mut fields: [Option<i32>; 3] = [None; 3];

    loop {
        match next_significant(reader, format)? {
            Event::Start(e) => {
                let name = element_name(&e);
                let slot = match name.as_str() {
                    "X" => 0,
                    "Y" => 1,
                    "Z" if tag == VariantTag::Point3D => 2,
                    _ => {
                        return Err(DecodeError::malformed(
                            format,
                            format!("unexpected <{}> in <{}>", name, element),
                        ))
                    }
                };
                if fields[slot].is_some() {
                    return Err(DecodeError::malformed(format, format!("duplicate <{}> in <{}>", name, element)));
                }
                fields[slot] = Some(read_integer(reader, format, &name)?);
            }
            Event::End(_) => break,
            other => return Err(unexpected(format, &other, "a coordinate")),
        }
    }

    let missing = |name: &str| DecodeError::malformed(format, format!("<{}> without <{}>", element, name));
    let x = fields[0].ok_or_else(|| missing("X"))?;
    let y = fields[1].ok_or_else(|| missing("Y"))?;
    let z = match tag {
        VariantTag::Point => 0,
        VariantTag::Point3D => fields[2].ok_or_else(|| missing("Z"))?,
    };
    Ok(PointVariant::from_parts(tag, x, y, z))
}

fn read_integer(reader: &mut Reader<&[u8]>, format: PointFormat, field: &str) -> Result<i32, DecodeError> {
    let value = match next_significant(reader, format)? {
        Event::Text(text) => {
            let text = text.unescape().map_err(|e| DecodeError::malformed(format, e))?;
            text.trim()
                .parse::<i32>()
                .map_err(|e| DecodeError::malformed(format, format!("<{}>{}: {}", field, text, e)))?
        }
        other => return Err(unexpected(format, &other, "an integer")),
    };

    match next_significant(reader, format)? {
        Event::End(_) => Ok(value),
        other => Err(unexpected(format, &other, field)),
    }
}

/// Next event that carries structure, skipping declarations and comments.
pub(crate) fn next_significant<'a>(
    reader: &mut Reader<&'a [u8]>,
    format: PointFormat,
) -> Result<Event<'a>, DecodeError> {
    loop {
        match reader.read_event() {
            Ok(Event::Decl(_)) | Ok(Event::Comment(_)) | Ok(Event::PI(_)) | Ok(Event::DocType(_)) => continue,
            Ok(event) => return Ok(event),
            Err(e) => return Err(DecodeError::malformed(format, e)),
        }
    }
}

pub(crate) fn expect_eof(reader: &mut Reader<&[u8]>, format: PointFormat) -> Result<(), DecodeError> {
    match next_significant(reader, format)? {
        Event::Eof => Ok(()),
        other => Err(unexpected(format, &other, "end of document")),
    }
}

pub(crate) fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

pub(crate) fn unexpected(format: PointFormat, event: &Event<'_>, expected: &str) -> DecodeError {
    let found = match event {
        Event::Start(e) | Event::Empty(e) => format!("<{}>", element_name(e)),
        Event::End(e) => format!("</{}>", String::from_utf8_lossy(e.name().as_ref())),
        Event::Text(_) | Event::CData(_) => "text".to_string(),
        Event::Eof => "end of document".to_string(),
        other => format!("{:?}", other),
    };
    DecodeError::malformed(format, format!("expected {}, found {}", expected, found))
}
