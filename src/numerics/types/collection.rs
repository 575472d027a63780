// src/numerics/types/collection.rs
// Fixed-length, heterogeneous sequence of points.

use core::fmt;
use core::ops::RangeInclusive;
use rand::Rng;

use super::point::{Point, Point3D};
use super::variant::PointVariant;

/// Inclusive coordinate range used when generating random points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRange {
    pub min: i32,
    pub max: i32,
}

impl Default for GenerationRange {
    /// Coordinates in `-100..=100`.
    fn default() -> Self {
        Self { min: -100, max: 100 }
    }
}

impl GenerationRange {
    pub fn new(min: i32, max: i32) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    fn as_range(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }
}

/// Ordered sequence of [`PointVariant`] values.
///
/// The length is fixed once created. The collection is replaced as a whole
/// (generate, load) or reordered in place (sort); there is no way to insert
/// or remove single elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointCollection {
    points: Vec<PointVariant>,
}

impl PointCollection {
    pub fn from_points(points: Vec<PointVariant>) -> Self {
        Self { points }
    }

    /// Generate `count` random points using the thread-local generator.
    pub fn generate(count: usize) -> Self {
        Self::generate_with(count, &GenerationRange::default(), &mut rand::thread_rng())
    }

    /// Generate `count` random points from `rng`.
    ///
    /// Each element is a plain [`Point`] with probability 2/3 and a
    /// [`Point3D`] otherwise.
    pub fn generate_with<R: Rng>(count: usize, range: &GenerationRange, rng: &mut R) -> Self {
        let points = (0..count)
            .map(|_| {
                let x = rng.gen_range(range.as_range());
                let y = rng.gen_range(range.as_range());
                if rng.gen_range(0..3) % 2 == 0 {
                    PointVariant::Point(Point::new(x, y))
                } else {
                    let z = rng.gen_range(range.as_range());
                    PointVariant::Point3D(Point3D::new(x, y, z))
                }
            })
            .collect::<Vec<_>>();

        tracing::debug!(count, "generated point collection");
        Self { points }
    }

    /// Stable sort by the total order of [`PointVariant`].
    pub fn sort_in_place(&mut self) {
        self.points.sort();
    }

    pub fn as_slice(&self) -> &[PointVariant] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, PointVariant> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<PointVariant> {
        self.points
    }
}

impl From<Vec<PointVariant>> for PointCollection {
    fn from(points: Vec<PointVariant>) -> Self {
        Self::from_points(points)
    }
}

impl FromIterator<PointVariant> for PointCollection {
    fn from_iter<I: IntoIterator<Item = PointVariant>>(iter: I) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PointCollection {
    type Item = &'a PointVariant;
    type IntoIter = core::slice::Iter<'a, PointVariant>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for PointCollection {
    /// One element per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for point in &self.points {
            writeln!(f, "{}", point)?;
        }
        Ok(())
    }
}
