//! Problem instances: the set of cities to visit.
//!
//! An [`Instance`] is an ordered list of 2-D points. The optimizer never
//! touches coordinates directly; it refers to cities by index, with index 0
//! acting as the fixed depot where every tour starts and ends.

use rand::Rng;

/// A city position in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// An ordered set of cities.
///
/// The first city (index 0) is the depot. Indices are stable for the
/// lifetime of the instance; tours store indices, never coordinates.
///
/// # Examples
///
/// ```
/// use tsp_evolve::{Instance, Point};
///
/// let square = Instance::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ]);
/// assert_eq!(square.len(), 4);
/// assert_eq!(square.route_length(&[0, 1, 2, 3, 0]), 4.0);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    points: Vec<Point>,
}

impl Instance {
    /// Creates an instance from an explicit point list.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Generates `count` cities placed uniformly at random inside a
    /// `width × height` rectangle.
    ///
    /// Coordinates are drawn from the supplied generator, so a seeded
    /// `rng` reproduces the same instance.
    pub fn random<R: Rng>(count: usize, width: f64, height: f64, rng: &mut R) -> Self {
        let points = (0..count)
            .map(|_| Point::new(rng.random_range(0.0..width), rng.random_range(0.0..height)))
            .collect();
        Self { points }
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Position of city `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn point(&self, index: usize) -> Point {
        self.points[index]
    }

    /// Euclidean distance between cities `a` and `b`.
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        self.points[a].distance_to(self.points[b])
    }

    /// Total length of a route: the sum of distances between each pair of
    /// consecutive cities in `route`.
    ///
    /// The route is taken as-is; for a closed tour the caller passes a
    /// sequence whose last index repeats the first.
    pub fn route_length(&self, route: &[usize]) -> f64 {
        route
            .windows(2)
            .map(|pair| self.distance(pair[0], pair[1]))
            .sum()
    }
}
