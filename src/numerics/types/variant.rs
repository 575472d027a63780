// src/numerics/types/variant.rs
// Sum type over the two point shapes, used for heterogeneous collections.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use super::point::{Point, Point3D};
use super::traits::Planar;

/// Discriminator naming the concrete shape held by a [`PointVariant`].
///
/// `Point` sorts before `Point3D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VariantTag {
    Point,
    Point3D,
}

impl VariantTag {
    pub fn all() -> [Self; 2] {
        [VariantTag::Point, VariantTag::Point3D]
    }

    /// Type name written into the self-describing formats.
    pub fn name(self) -> &'static str {
        match self {
            VariantTag::Point => "Point",
            VariantTag::Point3D => "Point3D",
        }
    }
}

impl fmt::Display for VariantTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VariantTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Point" => Ok(VariantTag::Point),
            "Point3D" => Ok(VariantTag::Point3D),
            other => Err(other.to_string()),
        }
    }
}

/// A point of either shape.
///
/// Equality is value based and includes the shape: `Point(1, 2)` never equals
/// `Point3D(1, 2, 0)`. Ordering is lexicographic on `(x, y, z_or_zero)` with the
/// [`VariantTag`] as the last tie-break, which keeps it a strict total order
/// consistent with `Eq`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointVariant {
    Point(Point),
    Point3D(Point3D),
}

impl PointVariant {
    pub fn tag(&self) -> VariantTag {
        match self {
            PointVariant::Point(_) => VariantTag::Point,
            PointVariant::Point3D(_) => VariantTag::Point3D,
        }
    }

    pub fn variant_name(&self) -> &'static str {
        self.tag().name()
    }

    pub fn is_3d(&self) -> bool {
        matches!(self, PointVariant::Point3D(_))
    }

    /// Build a variant from its tag and coordinates. `z` is ignored for `Point`.
    pub fn from_parts(tag: VariantTag, x: i32, y: i32, z: i32) -> Self {
        match tag {
            VariantTag::Point => PointVariant::Point(Point::new(x, y)),
            VariantTag::Point3D => PointVariant::Point3D(Point3D::new(x, y, z)),
        }
    }

    fn sort_key(&self) -> (i32, i32, i32, VariantTag) {
        let (x, y, z) = self.key();
        (x, y, z, self.tag())
    }
}

impl Planar for PointVariant {
    fn x(&self) -> i32 {
        match self {
            PointVariant::Point(p) => p.x,
            PointVariant::Point3D(p) => p.x,
        }
    }

    fn y(&self) -> i32 {
        match self {
            PointVariant::Point(p) => p.y,
            PointVariant::Point3D(p) => p.y,
        }
    }

    fn z_or_zero(&self) -> i32 {
        match self {
            PointVariant::Point(p) => p.z_or_zero(),
            PointVariant::Point3D(p) => p.z_or_zero(),
        }
    }

    fn dimensions(&self) -> usize {
        match self {
            PointVariant::Point(p) => p.dimensions(),
            PointVariant::Point3D(p) => p.dimensions(),
        }
    }
}

impl Ord for PointVariant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for PointVariant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PointVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointVariant::Point(p) => fmt::Display::fmt(p, f),
            PointVariant::Point3D(p) => fmt::Display::fmt(p, f),
        }
    }
}

impl From<Point> for PointVariant {
    fn from(p: Point) -> Self {
        PointVariant::Point(p)
    }
}

impl From<Point3D> for PointVariant {
    fn from(p: Point3D) -> Self {
        PointVariant::Point3D(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_includes_shape() {
        let flat: PointVariant = Point::new(1, 2).into();
        let deep: PointVariant = Point3D::new(1, 2, 0).into();

        assert_ne!(flat, deep);
        assert_eq!(flat, PointVariant::Point(Point::new(1, 2)));
    }

    #[test]
    fn test_mixed_ordering() {
        let flat: PointVariant = Point::new(1, 2).into();
        let zero: PointVariant = Point3D::new(1, 2, 0).into();
        let below: PointVariant = Point3D::new(1, 2, -1).into();
        let above: PointVariant = Point3D::new(1, 2, 1).into();

        // z takes precedence over shape; shape only breaks exact key ties
        assert!(below < flat);
        assert!(flat < zero);
        assert!(zero < above);
        assert!(PointVariant::from(Point::new(0, 99)) < PointVariant::from(Point3D::new(1, 0, 0)));
    }

    #[test]
    fn test_tag_names_roundtrip() {
        for tag in VariantTag::all() {
            assert_eq!(tag.name().parse::<VariantTag>(), Ok(tag));
        }
        assert_eq!("Point4D".parse::<VariantTag>(), Err("Point4D".to_string()));
    }

    #[test]
    fn test_from_parts() {
        assert_eq!(
            PointVariant::from_parts(VariantTag::Point, 1, 2, 7),
            PointVariant::Point(Point::new(1, 2))
        );
        assert_eq!(
            PointVariant::from_parts(VariantTag::Point3D, 1, 2, 7),
            PointVariant::Point3D(Point3D::new(1, 2, 7))
        );
    }

    #[test]
    fn test_display_matches_inner_shape() {
        assert_eq!(PointVariant::from(Point::new(-1, 4)).to_string(), "(-1, 4)");
        assert_eq!(PointVariant::from(Point3D::new(0, 0, 3)).to_string(), "(0, 0, 3)");
        assert_eq!(PointVariant::from(Point3D::new(0, 0, 3)).variant_name(), "Point3D");
    }
}
