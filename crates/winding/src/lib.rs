//! Point-in-rectangle classification by winding number.
//!
//! Layout
//! - `geom`: `Point`, `Polygon`, the orientation predicate and the
//!   winding-number evaluator. Pure, infallible.
//! - `classify`: batch classifier producing one `ResultCode` per query point.
//! - `rows`: numeric-row text format (parse inputs, write result codes).
//! - `rand`: deterministic random scenes for benches and the CLI `gen` command.
//!
//! API Policy
//! - The core (`geom`, `classify`) performs no I/O and never logs; callers
//!   observe decisions through `classify_points_with`.

pub mod api;
pub mod classify;
pub mod geom;
pub mod rand;
pub mod rows;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::classify::{classify_points, classify_points_with, Decision, ResultCode};
    pub use crate::geom::{is_left, orientation, winding_number, Orientation, Point, Polygon};
    pub use crate::rand::{draw_scene, ReplayToken, Scene, SceneCfg};
    pub use crate::rows::RowError;
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rand::{rngs::StdRng, Rng, SeedableRng};
    use nalgebra::vector;

    #[test]
    fn area_axis_aligned() {
        let a = vector![1.0, 0.0];
        let b = vector![0.0, 2.5];
        assert!((parallelogram_area(a, b) - 2.5).abs() < 1e-12);
        assert!((parallelogram_area(b, a) + 2.5).abs() < 1e-12);
    }

    #[test]
    fn area_randomized_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..32 {
            let a = Vec2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
            let b = Vec2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
            let via_det = nalgebra::Matrix2::from_columns(&[a, b]).determinant();
            assert!((parallelogram_area(a, b) - via_det).abs() < 1e-12);
        }
    }
}
