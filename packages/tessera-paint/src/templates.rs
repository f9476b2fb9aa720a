//! The four hand-authored polygon templates.
//!
//! Each template partitions the 3×3 cell into five polygons, given as vertex
//! lists in cell-local coordinates (x right, y up, origin at the cell's
//! bottom-left corner).

use kurbo::BezPath;

use tessera_glyphs::Case;

pub(crate) type Polygon = &'static [(f64, f64)];

#[rustfmt::skip]
const CASE_1: [Polygon; 5] = [
    &[(0.0, 0.0), (0.0, 3.0), (1.0, 3.0), (1.0, 1.0)],
    &[(1.0, 1.0), (1.0, 3.0), (3.0, 3.0)],
    &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)],
    &[(1.0, 0.0), (1.0, 1.0), (2.0, 2.0), (2.0, 0.0)],
    &[(2.0, 0.0), (2.0, 2.0), (3.0, 3.0), (3.0, 0.0)],
];

#[rustfmt::skip]
const CASE_2: [Polygon; 5] = [
    &[(0.0, 0.0), (0.0, 3.0), (1.0, 3.0), (1.0, 1.0)],
    &[(1.0, 1.0), (1.0, 3.0), (2.0, 3.0), (2.0, 2.0)],
    &[(2.0, 2.0), (2.0, 3.0), (3.0, 3.0)],
    &[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0)],
    &[(2.0, 0.0), (2.0, 2.0), (3.0, 3.0), (3.0, 0.0)],
];

#[rustfmt::skip]
const CASE_3: [Polygon; 5] = [
    &[(0.0, 3.0), (1.0, 3.0), (1.0, 2.0)],
    &[(1.0, 2.0), (1.0, 3.0), (2.0, 3.0), (2.0, 1.0)],
    &[(2.0, 1.0), (2.0, 3.0), (3.0, 3.0), (3.0, 0.0)],
    &[(0.0, 0.0), (0.0, 3.0), (1.0, 2.0), (1.0, 0.0)],
    &[(1.0, 0.0), (1.0, 2.0), (3.0, 0.0)],
];

#[rustfmt::skip]
const CASE_4: [Polygon; 5] = [
    &[(0.0, 3.0), (2.0, 3.0), (2.0, 1.0)],
    &[(2.0, 1.0), (2.0, 3.0), (3.0, 3.0), (3.0, 0.0)],
    &[(0.0, 0.0), (0.0, 3.0), (1.0, 2.0), (1.0, 0.0)],
    &[(1.0, 0.0), (1.0, 2.0), (2.0, 1.0), (2.0, 0.0)],
    &[(2.0, 0.0), (2.0, 1.0), (3.0, 0.0)],
];

pub(crate) fn case_polygons(case: Case) -> &'static [Polygon; 5] {
    match case {
        Case::One => &CASE_1,
        Case::Two => &CASE_2,
        Case::Three => &CASE_3,
        Case::Four => &CASE_4,
    }
}

/// Build a closed path from a template polygon.
pub(crate) fn polygon_path(vertices: Polygon) -> BezPath {
    let mut path = BezPath::new();
    let (first, rest) = vertices
        .split_first()
        .expect("template polygons have at least three vertices");
    path.move_to(*first);
    for vertex in rest {
        path.line_to(*vertex);
    }
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Shape;

    #[test]
    fn every_case_has_five_polygons_with_positive_area() {
        for case in [Case::One, Case::Two, Case::Three, Case::Four] {
            let polygons = case_polygons(case);
            for polygon in polygons {
                let path = polygon_path(polygon);
                assert!(path.area().abs() > 0.0, "degenerate polygon in {case:?}");
            }
        }
    }

    #[test]
    fn case_polygons_tile_the_cell() {
        // The five polygons of each template partition the 3×3 square, so
        // their areas must sum to 9.
        for case in [Case::One, Case::Two, Case::Three, Case::Four] {
            let total: f64 = case_polygons(case)
                .iter()
                .map(|polygon| polygon_path(polygon).area().abs())
                .sum();
            assert!(
                (total - 9.0).abs() < 1e-9,
                "{case:?} polygons cover {total} square units"
            );
        }
    }
}
