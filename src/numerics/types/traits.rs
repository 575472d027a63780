// src/numerics/types/traits.rs
// Planar trait shared by every point shape.

/// Planar is implemented by anything that can stand in for a 2D point.
///
/// A 3D point is usable wherever a planar one is expected; its third axis is
/// reported through `z_or_zero`, which is `0` for shapes without one.
pub trait Planar {
    fn x(&self) -> i32;
    fn y(&self) -> i32;

    /// Third coordinate, or `0` when the shape has none.
    fn z_or_zero(&self) -> i32 {
        0
    }

    /// Number of coordinates carried by the shape.
    fn dimensions(&self) -> usize {
        2
    }

    /// Coordinates as an `(x, y, z)` triple with `z` defaulting to `0`.
    fn key(&self) -> (i32, i32, i32) {
        (self.x(), self.y(), self.z_or_zero())
    }
}
