use super::types::Point;
use crate::parallelogram_area;

/// Side of a directed line a point lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Left,
    On,
    Right,
}

/// Signed cross product `(b - a) × (p - a)`.
///
/// Positive if `p` is strictly left of the directed line `a → b`, negative if
/// strictly right, `0.0` if collinear. Only the sign is meaningful.
#[inline]
pub fn is_left(a: Point, b: Point, p: Point) -> f64 {
    parallelogram_area(b.coords() - a.coords(), p.coords() - a.coords())
}

/// Discrete form of `is_left`.
#[inline]
pub fn orientation(a: Point, b: Point, p: Point) -> Orientation {
    let s = is_left(a, b, p);
    if s > 0.0 {
        Orientation::Left
    } else if s < 0.0 {
        Orientation::Right
    } else {
        Orientation::On
    }
}
