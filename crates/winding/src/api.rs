//! Curated re-exports for the CLI and benches.
//!
//! Prefer these over reaching into submodules so call sites read the same
//! across the workspace.

pub use crate::classify::{classify_points, classify_points_with, Decision, ResultCode};
pub use crate::geom::{is_left, winding_number, Point, Polygon};
pub use crate::rand::{
    draw_points, draw_rectangles, draw_scene, ReplayToken as SceneReplay, Scene, SceneCfg,
};
pub use crate::rows::{
    format_points, format_polygons, format_results, parse_rows, read_points, read_polygons,
    write_points, write_polygons, write_results, RowError,
};
