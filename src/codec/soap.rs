//! SOAP-envelope encoding.
//!
//! Every element is an `<item>` carrying its shape in `xsi:type`, and the
//! array declares its length so truncated payloads are detected:
//!
//! ```xml
//! <SOAP-ENV:Envelope xmlns:SOAP-ENV="..." xmlns:xsi="...">
//!   <SOAP-ENV:Body>
//!     <PointArray length="1">
//!       <item xsi:type="Point3D"><X>3</X><Y>4</Y><Z>5</Z></item>
//!     </PointArray>
//!   </SOAP-ENV:Body>
//! </SOAP-ENV:Envelope>
//! ```

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use crate::codec::xml::{
    element_name, emit, expect_eof, new_reader, new_writer, next_significant, read_coordinates, unexpected,
    write_coordinates,
};
use crate::codec::{DecodeError, EncodeError, PointCodec, PointFormat};
use crate::numerics::types::variant::{PointVariant, VariantTag};

pub const ENVELOPE: &str = "SOAP-ENV:Envelope";
pub const BODY: &str = "SOAP-ENV:Body";
pub const ARRAY: &str = "PointArray";
pub const ITEM: &str = "item";
pub const TYPE_ATTRIBUTE: &str = "xsi:type";
pub const LENGTH_ATTRIBUTE: &str = "length";

const ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

#[derive(Debug, Clone, Copy)]
pub struct SoapCodec {
    pretty: bool,
}

impl SoapCodec {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl PointCodec for SoapCodec {
    fn format(&self) -> PointFormat {
        PointFormat::Soap
    }

    fn encode(&self, points: &[PointVariant]) -> Result<Vec<u8>, EncodeError> {
        let format = PointFormat::Soap;
        let mut writer = new_writer(self.pretty);
        emit(&mut writer, format, Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

        let mut envelope = BytesStart::new(ENVELOPE);
        envelope.push_attribute(("xmlns:SOAP-ENV", ENVELOPE_NS));
        envelope.push_attribute(("xmlns:xsi", XSI_NS));
        emit(&mut writer, format, Event::Start(envelope))?;
        emit(&mut writer, format, Event::Start(BytesStart::new(BODY)))?;

        let length = points.len().to_string();
        let mut array = BytesStart::new(ARRAY);
        array.push_attribute((LENGTH_ATTRIBUTE, length.as_str()));
        emit(&mut writer, format, Event::Start(array))?;

        for point in points {
            let mut item = BytesStart::new(ITEM);
            item.push_attribute((TYPE_ATTRIBUTE, point.variant_name()));
            emit(&mut writer, format, Event::Start(item))?;
            write_coordinates(&mut writer, format, point)?;
            emit(&mut writer, format, Event::End(BytesEnd::new(ITEM)))?;
        }

        emit(&mut writer, format, Event::End(BytesEnd::new(ARRAY)))?;
        emit(&mut writer, format, Event::End(BytesEnd::new(BODY)))?;
        emit(&mut writer, format, Event::End(BytesEnd::new(ENVELOPE)))?;
        Ok(writer.into_inner())
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<PointVariant>, DecodeError> {
        let format = PointFormat::Soap;
        let mut reader = new_reader(bytes);

        match next_significant(&mut reader, format)? {
            Event::Start(e) if e.name().as_ref() == ENVELOPE.as_bytes() => {}
            Event::Eof => return Err(DecodeError::Empty { format }),
            other => return Err(unexpected(format, &other, ENVELOPE)),
        }
        match next_significant(&mut reader, format)? {
            Event::Start(e) if e.name().as_ref() == BODY.as_bytes() => {}
            other => return Err(unexpected(format, &other, BODY)),
        }

        let (declared, has_children) = match next_significant(&mut reader, format)? {
            Event::Start(e) if e.name().as_ref() == ARRAY.as_bytes() => (declared_length(&e)?, true),
            Event::Empty(e) if e.name().as_ref() == ARRAY.as_bytes() => (declared_length(&e)?, false),
            other => return Err(unexpected(format, &other, ARRAY)),
        };

        let mut points = Vec::with_capacity(declared.min(1024));
        while has_children {
            match next_significant(&mut reader, format)? {
                Event::Start(e) if e.name().as_ref() == ITEM.as_bytes() => {
                    let tag = item_type(&e)?;
                    points.push(read_coordinates(&mut reader, format, tag, ITEM)?);
                }
                Event::End(_) => break,
                other => return Err(unexpected(format, &other, ITEM)),
            }
        }

        if points.len() != declared {
            return Err(DecodeError::LengthMismatch { declared, actual: points.len() });
        }

        // closing Body and Envelope; quick-xml checks the names match
        for expected in [BODY, ENVELOPE] {
            match next_significant(&mut reader, format)? {
                Event::End(_) => {}
                other => return Err(unexpected(format, &other, expected)),
            }
        }
        expect_eof(&mut reader, format)?;
        Ok(points)
    }
}

fn required_attribute(e: &BytesStart<'_>, name: &str) -> Result<String, DecodeError> {
    let format = PointFormat::Soap;
    let attribute = e
        .try_get_attribute(name)
        .map_err(|err| DecodeError::malformed(format, err))?
        .ok_or_else(|| DecodeError::malformed(format, format!("<{}> without {}", element_name(e), name)))?;
    let value = attribute
        .unescape_value()
        .map_err(|err| DecodeError::malformed(format, err))?;
    Ok(value.into_owned())
}

fn declared_length(e: &BytesStart<'_>) -> Result<usize, DecodeError> {
    let value = required_attribute(e, LENGTH_ATTRIBUTE)?;
    value
        .trim()
        .parse::<usize>()
        .map_err(|err| DecodeError::malformed(PointFormat::Soap, format!("length {:?}: {}", value, err)))
}

fn item_type(e: &BytesStart<'_>) -> Result<VariantTag, DecodeError> {
    let name = required_attribute(e, TYPE_ATTRIBUTE)?;
    name.parse::<VariantTag>()
        .map_err(|name| DecodeError::UnknownVariant { format: PointFormat::Soap, name })
}
