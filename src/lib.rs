//! # pointcodec
//!
//! Heterogeneous collections of 2D and 3D points, and the codecs that store
//! them as binary, SOAP, XML, JSON, YAML or a `X;Y;Z` text format while
//! keeping track of which elements are 3D.
//!
//! ```rust
//! use pointcodec::{decode, encode, Point, Point3D, PointCollection, PointFormat, PointVariant};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let points = PointCollection::from_points(vec![
//!     PointVariant::from(Point::new(1, 2)),
//!     PointVariant::from(Point3D::new(3, 4, 5)),
//! ]);
//!
//! let bytes = encode(&points, PointFormat::Json)?;
//! let restored = decode(&bytes, PointFormat::Json)?;
//! assert_eq!(restored, points);
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod numerics;

pub use codec::{
    decode, decode_with, encode, encode_with, CodecConfig, CodecError, DecodeError, EncodeError, PointCodec,
    PointFormat,
};
pub use numerics::types::collection::{GenerationRange, PointCollection};
pub use numerics::types::point::{Point, Point3D};
pub use numerics::types::traits::Planar;
pub use numerics::types::variant::{PointVariant, VariantTag};

/// Version information for the pointcodec crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
