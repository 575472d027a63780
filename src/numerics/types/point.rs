// src/numerics/types/point.rs
// Point and Point3D value types with integer coordinates.

use core::fmt;
use serde::{Deserialize, Serialize};

use super::traits::Planar;

/// A point on the plane.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// A point in space. Substitutable for [`Point`] through [`Planar`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Point3D {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point {
    /// Construct a new Point
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Point3D {
    /// Construct a new Point3D
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Projection onto the plane, dropping `z`.
    pub fn planar(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl Planar for Point {
    fn x(&self) -> i32 {
        self.x
    }

    fn y(&self) -> i32 {
        self.y
    }
}

impl Planar for Point3D {
    fn x(&self) -> i32 {
        self.x
    }

    fn y(&self) -> i32 {
        self.y
    }

    fn z_or_zero(&self) -> i32 {
        self.z
    }

    fn dimensions(&self) -> usize {
        3
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// Conversions between points and tuples / arrays

impl From<(i32, i32)> for Point {
    fn from(tuple: (i32, i32)) -> Self {
        Self::new(tuple.0, tuple.1)
    }
}

impl From<[i32; 2]> for Point {
    fn from(array: [i32; 2]) -> Self {
        Self::new(array[0], array[1])
    }
}

impl From<(i32, i32, i32)> for Point3D {
    fn from(tuple: (i32, i32, i32)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

impl From<[i32; 3]> for Point3D {
    fn from(array: [i32; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl From<Point3D> for (i32, i32, i32) {
    fn from(p: Point3D) -> Self {
        (p.x, p.y, p.z)
    }
}
