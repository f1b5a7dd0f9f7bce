//! 2D geometry for the point-in-polygon test.
//!
//! Purpose
//! - `Point`: immutable coordinate value backed by `nalgebra::Vector2<f64>`.
//! - `Polygon`: axis-aligned rectangle stored as a closed loop of four vertices.
//! - `is_left`/`orientation`: signed-area side test against a directed line.
//! - `winding_number`: crossing-rule winding number over any closed vertex loop.
//!
//! Conventions
//! - Predicates compare signs exactly; there is no epsilon. Points on an edge
//!   give `is_left == 0.0` and follow the half-open crossing rule (see
//!   `winding_number`).
//! - Edges wrap: the loop always includes `v[N-1] → v[0]`.

mod orient;
mod types;
mod wind;

pub use orient::{is_left, orientation, Orientation};
pub use types::{Point, Polygon};
pub use wind::winding_number;
