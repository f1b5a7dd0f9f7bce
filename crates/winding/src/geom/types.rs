//! Value types: `Point` and rectangle `Polygon`.

use nalgebra::Vector2;

/// Immutable 2D point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point(Vector2<f64>);

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self(Vector2::new(x, y))
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }
    /// Coordinates as a column vector.
    #[inline]
    pub fn coords(&self) -> Vector2<f64> {
        self.0
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self(v)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{X:{}, Y:{}}}", self.x(), self.y())
    }
}

/// Axis-aligned rectangle as a closed vertex loop.
///
/// Vertex order is fixed at construction:
/// `(x, y) → (x, y+h) → (x+w, y+h) → (x+w, y)`, i.e. bottom-left, top-left,
/// top-right, bottom-right. For `w, h > 0` this is clockwise, so interior
/// points get winding number `-1`.
///
/// Width and height are not validated; zero or negative extents produce a
/// degenerate or mirrored loop and the evaluator handles both.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    origin: Point,
    width: f64,
    height: f64,
    vertices: [Point; 4],
}

impl Polygon {
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        let vertices = [
            Point::new(x, y),
            Point::new(x, y + height),
            Point::new(x + width, y + height),
            Point::new(x + width, y),
        ];
        Self {
            origin: Point::new(x, y),
            width,
            height,
            vertices,
        }
    }
    /// Bottom-left corner the rectangle was built from.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }
    /// Winding number of `p` with respect to this loop.
    #[inline]
    pub fn winding_number(&self, p: Point) -> i32 {
        super::winding_number(p, &self.vertices)
    }
    /// Non-zero winding rule.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.winding_number(p) != 0
    }
}

impl std::fmt::Display for Polygon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{X:{}, Y:{}, W:{}, H:{}}}",
            self.origin.x(),
            self.origin.y(),
            self.width,
            self.height
        )
    }
}
