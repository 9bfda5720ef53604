use crate::error::EngineError;
use crate::geometry::{
    bounding_box, open_ring, point_in_region, polygon_area, shoelace_area, triangulate, Point,
    Rect,
};

fn pts(coords: &[(i64, i64)]) -> Vec<Point> {
    coords.iter().map(|&c| Point::from(c)).collect()
}

fn rect(x1: i64, y1: i64, x2: i64, y2: i64) -> Rect {
    Rect::spanning(Point::new(x1, y1), Point::new(x2, y2))
}

/// Rectangles must not overlap, must cover the shoelace area and must
/// contain every polygon vertex.
fn assert_tiles(polygon: &[Point]) -> Vec<Rect> {
    let rects = triangulate(polygon).expect("decomposition should succeed");

    for (i, a) in rects.iter().enumerate() {
        for b in &rects[i + 1..] {
            assert_eq!(a.overlap_area(b), 0, "{:?} overlaps {:?}", a, b);
        }
    }
    assert_eq!(polygon_area(&rects), shoelace_area(polygon));

    for p in open_ring(polygon) {
        assert!(point_in_region(*p, &rects, true), "vertex {} not covered", p);
    }
    for r in &rects {
        for c in r.corners() {
            assert!(point_in_region(c, &rects, true));
        }
    }
    rects
}

fn l_shape() -> Vec<Point> {
    pts(&[(0, 0), (300, 0), (300, 250), (600, 250), (600, 500), (0, 500), (0, 0)])
}

fn u_shape() -> Vec<Point> {
    pts(&[(0, 0), (100, 0), (100, 300), (200, 300), (200, 0), (300, 0), (300, 400), (0, 400)])
}

fn arch() -> Vec<Point> {
    pts(&[(0, 0), (300, 0), (300, 300), (200, 300), (200, 100), (100, 100), (100, 300), (0, 300)])
}

fn stem_on_slab() -> Vec<Point> {
    pts(&[
        (0, 0),
        (100, 0),
        (100, 100),
        (150, 100),
        (150, 200),
        (-50, 200),
        (-50, 100),
        (0, 100),
    ])
}

#[test]
fn test_rectangle_is_its_own_decomposition() {
    let rects = assert_tiles(&pts(&[(0, 0), (600, 0), (600, 500), (0, 500), (0, 0)]));
    assert_eq!(rects, vec![rect(0, 0, 600, 500)]);
}

#[test]
fn test_l_shape() {
    let rects = assert_tiles(&l_shape());
    assert_eq!(rects, vec![rect(0, 0, 300, 250), rect(0, 250, 600, 500)]);
}

#[test]
fn test_u_shape() {
    let rects = assert_tiles(&u_shape());
    assert_eq!(
        rects,
        vec![rect(0, 0, 100, 300), rect(200, 0, 300, 400), rect(0, 300, 200, 400)]
    );
    assert_eq!(polygon_area(&rects), 90_000);
}

#[test]
fn test_box_swallowing_a_vertex_is_skipped() {
    let rects = assert_tiles(&arch());
    assert_eq!(
        rects,
        vec![rect(200, 0, 300, 300), rect(0, 0, 200, 100), rect(0, 100, 100, 300)]
    );
    // the gap under the arch is not part of the region
    assert!(!point_in_region(Point::new(150, 200), &rects, true));
}

#[test]
fn test_box_with_four_existing_corners() {
    let rects = assert_tiles(&stem_on_slab());
    assert_eq!(rects, vec![rect(0, 0, 100, 100), rect(-50, 100, 150, 200)]);
}

#[test]
fn test_counter_clockwise_input() {
    let ccw: Vec<Point> = open_ring(&l_shape()).iter().rev().copied().collect();
    let rects = assert_tiles(&ccw);
    assert_eq!(polygon_area(&rects), 225_000);
}

#[test]
fn test_unnormalized_input() {
    // flat vertex on the top edge and an explicit duplicate
    let messy = pts(&[(0, 0), (150, 0), (300, 0), (300, 250), (300, 250), (600, 250), (600, 500), (0, 500)]);
    assert_eq!(polygon_area(&assert_tiles(&messy)), 225_000);
}

#[test]
fn test_points_outside_bounding_box_are_outside() {
    for shape in [l_shape(), u_shape(), arch(), stem_on_slab()] {
        let rects = triangulate(&shape).unwrap();
        let bbox = bounding_box(&shape).unwrap();
        let outside = [
            Point::new(bbox.min.x - 1, bbox.min.y),
            Point::new(bbox.max.x + 1, bbox.max.y),
            Point::new(bbox.min.x, bbox.min.y - 1),
            Point::new(bbox.max.x, bbox.max.y + 1),
        ];
        for p in outside {
            assert!(!point_in_region(p, &rects, true));
        }
    }
}

#[test]
fn test_degenerate_input_has_no_rectangles() {
    assert_eq!(triangulate(&[]), Ok(vec![]));
    assert_eq!(triangulate(&pts(&[(0, 0), (10, 0), (20, 0)])), Ok(vec![]));
}

#[test]
fn test_non_rectilinear_input_fails() {
    let diamond = pts(&[(5, 0), (10, 5), (5, 10), (0, 5)]);
    assert!(matches!(triangulate(&diamond), Err(EngineError::GeometryError(_))));
}

#[test]
fn test_self_intersecting_input_fails() {
    // two squares meeting at (10,10)
    let bowtie = pts(&[(0, 0), (10, 0), (10, 10), (20, 10), (20, 20), (10, 20), (10, 10), (0, 10)]);
    assert!(matches!(triangulate(&bowtie), Err(EngineError::GeometryError(_))));

    let crossing = pts(&[(0, 0), (20, 0), (20, 10), (10, 10), (10, -10), (0, -10)]);
    assert!(matches!(triangulate(&crossing), Err(EngineError::GeometryError(_))));
}
