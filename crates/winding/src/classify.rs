//! Batch classification of query points against a list of polygons.
//!
//! One `ResultCode` per point: `Inside` as soon as any polygon (tested in
//! order) has non-zero winding number for it, `Outside` otherwise.

use crate::geom::{Point, Polygon};

/// Per-point classification, written to the results file as `0`/`1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResultCode {
    /// Inside (or on a counted boundary of) at least one polygon.
    Inside,
    /// Outside every polygon.
    Outside,
}

impl ResultCode {
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            ResultCode::Inside => 0,
            ResultCode::Outside => 1,
        }
    }
    #[inline]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(ResultCode::Inside),
            1 => Some(ResultCode::Outside),
            _ => None,
        }
    }
    #[inline]
    pub fn is_inside(self) -> bool {
        self == ResultCode::Inside
    }
}

impl std::fmt::Display for ResultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One classification decision, handed to the observer of
/// `classify_points_with`.
#[derive(Clone, Copy, Debug)]
pub struct Decision<'a> {
    /// Index of the point in the input slice.
    pub index: usize,
    pub point: Point,
    /// First polygon containing the point, with its index.
    pub matched: Option<(usize, &'a Polygon)>,
}

impl Decision<'_> {
    #[inline]
    pub fn result(&self) -> ResultCode {
        if self.matched.is_some() {
            ResultCode::Inside
        } else {
            ResultCode::Outside
        }
    }
}

/// Classify every point; pure, no observer.
pub fn classify_points(points: &[Point], polygons: &[Polygon]) -> Vec<ResultCode> {
    classify_points_with(points, polygons, |_| {})
}

/// Classify every point and report each decision to `on_decision`.
///
/// The observer runs once per point, in input order, after the polygon search
/// for that point has finished.
pub fn classify_points_with<'a, F>(
    points: &[Point],
    polygons: &'a [Polygon],
    mut on_decision: F,
) -> Vec<ResultCode>
where
    F: FnMut(Decision<'a>),
{
    let mut results = Vec::with_capacity(points.len());
    for (index, &point) in points.iter().enumerate() {
        let matched = polygons
            .iter()
            .enumerate()
            .find(|(_, poly)| poly.contains(point));
        let decision = Decision {
            index,
            point,
            matched,
        };
        results.push(decision.result());
        on_decision(decision);
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn single_point_inside_single_rectangle() {
        let points = [Point::new(1.0, 0.0)];
        let polygons = [Polygon::rectangle(0.0, 0.0, 5.0, 5.0)];
        let res = classify_points(&points, &polygons);
        assert_eq!(res, vec![ResultCode::Inside]);
        assert_eq!(res.iter().map(|r| r.code()).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn empty_inputs() {
        let polygons = [Polygon::rectangle(0.0, 0.0, 5.0, 5.0)];
        assert!(classify_points(&[], &polygons).is_empty());
        let points = [Point::new(1.0, 1.0), Point::new(-1.0, -1.0)];
        assert_eq!(
            classify_points(&points, &[]),
            vec![ResultCode::Outside, ResultCode::Outside]
        );
    }

    #[test]
    fn mixed_points_keep_input_order() {
        let points = [
            Point::new(1.0, 1.0),
            Point::new(10.0, 10.0),
            Point::new(-2.0, -2.0),
            Point::new(0.0, -1.0),
        ];
        let polygons = [
            Polygon::rectangle(0.0, 0.0, 5.0, 5.0),
            Polygon::rectangle(-3.0, -4.0, 3.0, 3.0),
        ];
        let res = classify_points(&points, &polygons);
        assert_eq!(
            res,
            vec![
                ResultCode::Inside,
                ResultCode::Outside,
                ResultCode::Inside,
                ResultCode::Outside,
            ]
        );
    }

    #[test]
    fn observer_sees_first_match_only() {
        let points = [Point::new(1.0, 1.0), Point::new(9.0, 9.0)];
        let polygons = [
            Polygon::rectangle(-1.0, -1.0, 1.5, 1.5),
            Polygon::rectangle(0.0, 0.0, 5.0, 5.0),
            Polygon::rectangle(0.5, 0.5, 1.0, 1.0),
        ];
        let mut seen = Vec::new();
        let res = classify_points_with(&points, &polygons, |d| {
            seen.push((d.index, d.matched.map(|(j, _)| j)));
        });
        assert_eq!(res, vec![ResultCode::Inside, ResultCode::Outside]);
        assert_eq!(seen, vec![(0, Some(1)), (1, None)]);
    }

    #[test]
    fn result_code_round_trip() {
        assert_eq!(ResultCode::from_code(0), Some(ResultCode::Inside));
        assert_eq!(ResultCode::from_code(1), Some(ResultCode::Outside));
        assert_eq!(ResultCode::from_code(2), None);
        assert_eq!(ResultCode::Outside.to_string(), "1");
    }

    proptest! {
        #[test]
        fn one_result_per_point(
            pts in prop::collection::vec((-20.0f64..20.0, -20.0f64..20.0), 0..40),
            rects in prop::collection::vec(
                (-20.0f64..20.0, -20.0f64..20.0, 0.0f64..10.0, 0.0f64..10.0), 0..8),
        ) {
            let points: Vec<Point> = pts.iter().map(|&(x, y)| Point::new(x, y)).collect();
            let polygons: Vec<Polygon> = rects
                .iter()
                .map(|&(x, y, w, h)| Polygon::rectangle(x, y, w, h))
                .collect();
            let res = classify_points(&points, &polygons);
            prop_assert_eq!(res.len(), points.len());
            for (p, r) in points.iter().zip(&res) {
                let any = polygons.iter().any(|poly| poly.contains(*p));
                prop_assert_eq!(r.is_inside(), any);
            }
        }
    }
}
