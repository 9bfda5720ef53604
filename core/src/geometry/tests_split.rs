use crate::error::EngineError;
use crate::geometry::{cut_poly, open_ring, polygon_area, shoelace_area, triangulate, Point};

fn pts(coords: &[(i64, i64)]) -> Vec<Point> {
    coords.iter().map(|&c| Point::from(c)).collect()
}

fn field() -> Vec<Point> {
    pts(&[(0, 0), (600, 0), (600, 500), (0, 500), (0, 0)])
}

fn area(polygon: &[Point]) -> i64 {
    polygon_area(&triangulate(polygon).unwrap())
}

#[test]
fn test_elbow_cut() {
    let cut = pts(&[(600, 250), (300, 250), (300, 0)]);
    let (inside, outside) = cut_poly(&field(), &cut).unwrap();

    assert_eq!(
        inside,
        pts(&[(0, 0), (300, 0), (300, 250), (600, 250), (600, 500), (0, 500), (0, 0)])
    );
    assert_eq!(outside, pts(&[(300, 0), (600, 0), (600, 250), (300, 250), (300, 0)]));

    assert_eq!(area(&inside), 225_000);
    assert_eq!(area(&outside), 75_000);
    assert_eq!(area(&inside) + area(&outside), 600 * 500);
}

#[test]
fn test_cut_direction_does_not_matter() {
    let cut = pts(&[(600, 250), (300, 250), (300, 0)]);
    let reversed: Vec<Point> = cut.iter().rev().copied().collect();
    assert_eq!(cut_poly(&field(), &cut).unwrap(), cut_poly(&field(), &reversed).unwrap());
}

#[test]
fn test_partition_completeness() {
    let boundary = field();
    let cut = pts(&[(600, 250), (300, 250), (300, 0)]);
    let (a, b) = cut_poly(&boundary, &cut).unwrap();
    let (a, b) = (open_ring(&a), open_ring(&b));

    for vertex in open_ring(&boundary) {
        let hits = a.iter().chain(b.iter()).filter(|p| *p == vertex).count();
        assert_eq!(hits, 1, "boundary vertex {} should land in exactly one region", vertex);
    }
    for p in &cut {
        assert!(a.contains(p) && b.contains(p), "cut point {} should border both regions", p);
    }
}

#[test]
fn test_notch_on_single_edge() {
    let cut = pts(&[(100, 0), (100, 100), (200, 100), (200, 0)]);
    let (big, notch) = cut_poly(&field(), &cut).unwrap();

    assert_eq!(notch, pts(&[(100, 0), (200, 0), (200, 100), (100, 100), (100, 0)]));
    assert_eq!(open_ring(&big).len(), 8);
    assert_eq!(area(&big), 290_000);
    assert_eq!(area(&notch), 10_000);

    let reversed: Vec<Point> = cut.iter().rev().copied().collect();
    assert_eq!(cut_poly(&field(), &reversed).unwrap(), (big, notch));
}

#[test]
fn test_straight_cut_across() {
    let (top, bottom) = cut_poly(&field(), &pts(&[(0, 250), (600, 250)])).unwrap();
    assert_eq!(top, pts(&[(0, 0), (600, 0), (600, 250), (0, 250), (0, 0)]));
    assert_eq!(bottom, pts(&[(0, 250), (600, 250), (600, 500), (0, 500), (0, 250)]));
}

#[test]
fn test_corner_cut_wrapping_first_vertex() {
    // starts on the first edge, ends on the last: both anchors are (0,0)
    let cut = pts(&[(100, 0), (100, 100), (0, 100)]);
    let (rest, corner) = cut_poly(&field(), &cut).unwrap();

    assert_eq!(corner, pts(&[(0, 0), (100, 0), (100, 100), (0, 100), (0, 0)]));
    assert_eq!(area(&corner), 10_000);
    assert_eq!(area(&rest), 290_000);
    assert_eq!(shoelace_area(&rest), 290_000);
}

#[test]
fn test_cut_between_vertices() {
    let l_shape = pts(&[(0, 0), (300, 0), (300, 250), (600, 250), (600, 500), (0, 500)]);
    let (a, b) = cut_poly(&l_shape, &pts(&[(0, 250), (300, 250)])).unwrap();
    assert_eq!(a, pts(&[(0, 0), (300, 0), (300, 250), (0, 250), (0, 0)]));
    assert_eq!(b, pts(&[(0, 250), (600, 250), (600, 500), (0, 500), (0, 250)]));
}

#[test]
fn test_invalid_cuts() {
    let off_boundary = cut_poly(&field(), &pts(&[(300, 250), (300, 0)]));
    assert!(matches!(off_boundary, Err(EngineError::InvalidCut(_))));

    let lone_point = cut_poly(&field(), &pts(&[(300, 0)]));
    assert!(matches!(lone_point, Err(EngineError::InvalidCut(_))));

    let loop_back = cut_poly(&field(), &pts(&[(300, 0), (300, 100), (300, 0)]));
    assert!(matches!(loop_back, Err(EngineError::InvalidCut(_))));
}

#[test]
fn test_cut_running_back_into_first_corner() {
    // the last leg follows the top edge into (0,0)
    let cut = pts(&[(0, 100), (100, 100), (100, 0), (0, 0)]);
    let (rest, corner) = cut_poly(&field(), &cut).unwrap();

    assert_eq!(
        rest,
        pts(&[(100, 0), (600, 0), (600, 500), (0, 500), (0, 100), (100, 100), (100, 0)])
    );
    assert_eq!(corner, pts(&[(0, 0), (100, 0), (100, 100), (0, 100), (0, 0)]));
    assert!(!open_ring(&rest).contains(&Point::new(0, 0)));
    assert_eq!(area(&rest), 290_000);
    assert_eq!(area(&corner), 10_000);
}

#[test]
fn test_cut_running_back_into_far_corner() {
    let cut = pts(&[(600, 100), (500, 100), (500, 0), (600, 0)]);
    let (rest, corner) = cut_poly(&field(), &cut).unwrap();

    assert_eq!(
        rest,
        pts(&[(0, 0), (500, 0), (500, 100), (600, 100), (600, 500), (0, 500), (0, 0)])
    );
    assert_eq!(corner, pts(&[(500, 0), (600, 0), (600, 100), (500, 100), (500, 0)]));
    assert!(!open_ring(&rest).contains(&Point::new(600, 0)));
    assert_eq!(area(&rest), 290_000);
    assert_eq!(area(&corner), 10_000);
}
