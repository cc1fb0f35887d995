use gridpath_core::Point;

/// Estimate of the remaining cost between two nodes, used to order the A*
/// frontier.
///
/// The estimate must be non-negative and must never exceed the true
/// shortest-path cost (admissible), otherwise [`find_path`](crate::find_path)
/// may return a suboptimal path.
///
/// Any `Fn(Point, Point) -> i32` is a heuristic, so the distance functions of
/// this crate can be passed directly:
///
/// ```
/// use gridpath_paths::{Heuristic, manhattan};
/// use gridpath_core::Point;
///
/// assert_eq!(manhattan.estimate(Point::new(0, 0), Point::new(2, 3)), 5);
/// ```
pub trait Heuristic {
    fn estimate(&self, from: Point, to: Point) -> i32;
}

impl<F> Heuristic for F
where
    F: Fn(Point, Point) -> i32,
{
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        self(from, to)
    }
}
