use super::{orient::is_left, types::Point};

/// Winding number of `p` with respect to the closed loop `vertices`.
///
/// Crossing rule (half-open in y): an edge `v[i] → v[i+1]` counts as an
/// upward crossing when `v[i].y <= p.y < v[i+1].y` and adds `+1` if `p` is
/// strictly left of it; it counts as a downward crossing when
/// `v[i+1].y <= p.y < v[i].y` and adds `-1` if `p` is strictly right of it.
/// Horizontal edges never count.
///
/// Boundary points get a deterministic but asymmetric answer. For the
/// clockwise rectangle loop of `Polygon::rectangle` with positive extents the
/// result is `-1` exactly on `[x, x+w) × [y, y+h)`; callers should not rely on
/// either side of the boundary.
///
/// Returns `0` for an empty loop.
pub fn winding_number(p: Point, vertices: &[Point]) -> i32 {
    let n = vertices.len();
    let mut wn = 0;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        if a.y() <= p.y() {
            if b.y() > p.y() && is_left(a, b, p) > 0.0 {
                wn += 1;
            }
        } else if b.y() <= p.y() && is_left(a, b, p) < 0.0 {
            wn -= 1;
        }
    }
    wn
}
