//! Ordered-polygon helpers.
//!
//! Polygons are plain point sequences. Functions here accept rings that are
//! either open or explicitly closed (first point repeated at the end); every
//! polygon they return is explicitly closed.

use super::{Point, Rect, Segment};
use crate::error::{EngineError, EngineResult};

/// The ring without its closing duplicate.
pub fn open_ring(polygon: &[Point]) -> &[Point] {
    match polygon {
        [first, .., last] if first == last => &polygon[..polygon.len() - 1],
        _ => polygon,
    }
}

/// Repeats the first point at the end.
pub fn close(mut ring: Vec<Point>) -> Vec<Point> {
    if let Some(&first) = ring.first() {
        ring.push(first);
    }
    ring
}

/// Every edge of the ring, closing edge included.
pub fn edges(polygon: &[Point]) -> impl Iterator<Item = Segment> + '_ {
    let ring = open_ring(polygon);
    let m = ring.len();
    (0..m).map(move |i| Segment::new(ring[i], ring[(i + 1) % m]))
}

fn vertex_index(point: Point, ring: &[Point]) -> EngineResult<usize> {
    ring.iter()
        .position(|p| *p == point)
        .ok_or(EngineError::InvalidVertex(point))
}

/// The vertex before `point`, wrapping around.
pub fn prev_vertex(point: Point, polygon: &[Point]) -> EngineResult<Point> {
    let ring = open_ring(polygon);
    let idx = vertex_index(point, ring)?;
    Ok(ring[(idx + ring.len() - 1) % ring.len()])
}

/// The vertex after `point`, wrapping around.
pub fn next_vertex(point: Point, polygon: &[Point]) -> EngineResult<Point> {
    let ring = open_ring(polygon);
    let idx = vertex_index(point, ring)?;
    Ok(ring[(idx + 1) % ring.len()])
}

pub fn bounding_box(points: &[Point]) -> Option<Rect> {
    let first = *points.first()?;
    Some(points.iter().fold(Rect::spanning(first, first), |acc, p| Rect {
        min: Point::new(acc.min.x.min(p.x), acc.min.y.min(p.y)),
        max: Point::new(acc.max.x.max(p.x), acc.max.y.max(p.y)),
    }))
}

/// Area of a rectangle decomposition. This is the authoritative area figure
/// for a polygon.
pub fn polygon_area(rects: &[Rect]) -> i64 {
    rects.iter().map(Rect::area).sum()
}

/// With `inclusive` a point on any rectangle's border counts as inside,
/// otherwise the point must be in some rectangle's open interior.
pub fn point_in_region(point: Point, rects: &[Rect], inclusive: bool) -> bool {
    rects.iter().any(|r| r.contains(point, inclusive))
}

/// Twice the signed shoelace area. Positive iff the ring is clockwise on the
/// y-down grid.
pub fn signed_area2(polygon: &[Point]) -> i64 {
    edges(polygon)
        .map(|e| e.start.x * e.end.y - e.end.x * e.start.y)
        .sum()
}

/// Shoelace area of the ring.
pub fn shoelace_area(polygon: &[Point]) -> i64 {
    signed_area2(polygon).abs() / 2
}

/// The same ring, reversed if it was counter-clockwise. Returned closed.
pub fn ensure_clockwise(polygon: &[Point]) -> Vec<Point> {
    let mut ring = open_ring(polygon).to_vec();
    if signed_area2(&ring) < 0 {
        ring.reverse();
    }
    close(ring)
}

/// Canonical form of a polygon: no closing duplicate, no repeated points, no
/// vertex collinear with its neighbours, starting at the topmost then
/// leftmost vertex. Returned closed.
///
/// Splits leave flat vertices where a straight boundary got subdivided by
/// the cut, and spikes where the cut ran back along the boundary into a
/// corner, so every split result goes through here.
pub fn normalize(polygon: &[Point]) -> Vec<Point> {
    let mut ring = open_ring(polygon).to_vec();

    loop {
        ring.dedup();
        while ring.len() > 1 && ring.first() == ring.last() {
            ring.pop();
        }
        if ring.len() < 3 {
            break;
        }

        let m = ring.len();
        let neighbours = |i: usize| (ring[(i + m - 1) % m], ring[i], ring[(i + 1) % m]);
        // flat vertices first, then the tips of zero-width spikes
        let flat = (0..m)
            .find(|&i| {
                let (prev, v, next) = neighbours(i);
                Segment::new(prev, next).contains_strictly(v)
            })
            .or_else(|| {
                (0..m).find(|&i| {
                    let (prev, v, next) = neighbours(i);
                    (v.x - prev.x) * (next.y - v.y) == (v.y - prev.y) * (next.x - v.x)
                })
            });
        match flat {
            Some(i) => {
                ring.remove(i);
            }
            None => break,
        }
    }

    if let Some(start) = ring
        .iter()
        .enumerate()
        .min_by_key(|(_, p)| (p.y, p.x))
        .map(|(i, _)| i)
    {
        ring.rotate_left(start);
    }
    close(ring)
}
