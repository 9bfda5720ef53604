//! Rectangle decomposition of rectilinear polygons.
//!
//! Each step peels one axis-aligned rectangle off the polygon: the box spanned
//! by a vertex and the vertex two steps ahead, separated from the rest with
//! [`cut_poly`]. The decomposition backs both area figures and containment
//! queries.

use super::intersection::{intersection, locate};
use super::polygon::{bounding_box, ensure_clockwise, next_vertex, normalize, open_ring, prev_vertex};
use super::split::cut_poly;
use super::{Point, Rect, Segment};
use crate::error::{EngineError, EngineResult};
use tracing::debug;

/// Decomposes a simple rectilinear polygon into non-overlapping rectangles
/// whose union is the polygon.
///
/// Degenerate input (fewer than four distinct corners) yields no rectangles.
/// Fails with `GeometryError` on non-rectilinear input, on a ring that touches
/// or crosses itself, or when no rectangle can be peeled.
pub fn triangulate(polygon: &[Point]) -> EngineResult<Vec<Rect>> {
    let mut remaining = normalize(&ensure_clockwise(polygon));
    if let Some(edge) = non_rectilinear_edge(open_ring(&remaining)) {
        return Err(EngineError::GeometryError(format!(
            "edge {} is not axis-aligned",
            edge
        )));
    }

    if let Some(hit) = self_intersection(open_ring(&remaining)) {
        return Err(EngineError::GeometryError(format!(
            "polygon touches itself at {}",
            hit
        )));
    }

    let budget = open_ring(&remaining).len();
    let mut rects = Vec::new();

    loop {
        let ring = open_ring(&remaining);
        if ring.len() < 4 {
            break;
        }
        if ring.len() == 4 {
            if let Some(rect) = bounding_box(ring).filter(|r| !r.is_degenerate()) {
                rects.push(rect);
            }
            break;
        }
        if rects.len() >= budget {
            return Err(EngineError::GeometryError(
                "rectangle decomposition did not converge".into(),
            ));
        }

        let (rect, rest) = peel_rectangle(ring).ok_or_else(|| {
            EngineError::GeometryError(format!(
                "no rectangle can be cut from a polygon of {} vertices",
                ring.len()
            ))
        })?;
        rects.push(rect);
        remaining = rest;
    }

    Ok(rects)
}

fn non_rectilinear_edge(ring: &[Point]) -> Option<Segment> {
    let m = ring.len();
    (0..m)
        .map(|i| Segment::new(ring[i], ring[(i + 1) % m]))
        .find(|e| !e.is_vertical() && !e.is_horizontal())
}

/// A point shared by two edges that are not neighbours on the ring.
fn self_intersection(ring: &[Point]) -> Option<Point> {
    let m = ring.len();
    let edge = |i: usize| Segment::new(ring[i], ring[(i + 1) % m]);
    (0..m).find_map(|i| {
        (i + 2..m)
            .filter(|&j| (j + 1) % m != i)
            .find_map(|j| intersection(edge(i), edge(j)))
            .map(|hit| hit.point())
    })
}

/// Clockwise turn at `b` on the y-down grid.
fn is_convex(a: Point, b: Point, c: Point) -> bool {
    (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x) > 0
}

/// Finds the first rectangle that can be cut off the clockwise, normalized
/// ring and returns it with the polygon left over.
fn peel_rectangle(ring: &[Point]) -> Option<(Rect, Vec<Point>)> {
    let m = ring.len();

    for i in 0..m {
        let v = ring[i];
        let v1 = ring[(i + 1) % m];
        let v2 = ring[(i + 2) % m];
        if !is_convex(v, v1, v2) {
            continue;
        }

        let rect = Rect::spanning(v, v2);
        if rect.is_degenerate() {
            continue;
        }

        // Box corners in ring direction; only the fourth can be new.
        let corner = Point::new(v.x + v2.x - v1.x, v.y + v2.y - v1.y);
        let corners = [v, v1, v2, corner];

        if locate(corner, ring).is_none() {
            continue;
        }
        if ring.iter().any(|p| rect.contains(*p, false)) {
            debug!("box at {} swallows a vertex", v);
            continue;
        }

        let (cut_a, cut_b) = match chord(ring, i, corner).and_then(|(a, b)| shorten(ring, a, b)) {
            Some(cut) => cut,
            None => continue,
        };

        let (first, second) = match cut_poly(ring, &[cut_a, cut_b]) {
            Ok(regions) => regions,
            Err(e) => {
                debug!("chord {}-{} rejected: {}", cut_a, cut_b, e);
                continue;
            }
        };

        if has_corners(&first, &corners) {
            return Some((rect, second));
        }
        if has_corners(&second, &corners) {
            return Some((rect, first));
        }
        debug!("chord {}-{} does not separate the box at {}", cut_a, cut_b, v);
    }

    None
}

/// The box side separating the box from the rest of the ring.
fn chord(ring: &[Point], i: usize, corner: Point) -> Option<(Point, Point)> {
    let m = ring.len();
    let v = ring[i];
    let v2 = ring[(i + 2) % m];

    if ring.contains(&corner) {
        // Every corner is a vertex: the chord is the side that is not a ring edge.
        let sides = [v, ring[(i + 1) % m], v2, corner];
        return (0..4)
            .map(|k| (sides[k], sides[(k + 1) % 4]))
            .find(|&(p, q)| next_vertex(p, ring).ok() != Some(q));
    }

    // A new corner sits on the edge leaving v2 or on the edge reaching v; the
    // chord runs to the other one.
    if Segment::new(v2, ring[(i + 3) % m]).contains(corner) {
        Some((corner, v))
    } else {
        Some((corner, v2))
    }
}

/// Stops the chord at a single vertex lying on it. More than one means the
/// chord is ambiguous.
fn shorten(ring: &[Point], a: Point, b: Point) -> Option<(Point, Point)> {
    let chord = Segment::new(a, b);
    let inbetween: Vec<Point> = ring
        .iter()
        .copied()
        .filter(|p| chord.contains_strictly(*p))
        .collect();

    match inbetween.as_slice() {
        [] => Some((a, b)),
        [w] => {
            let hugs_a = prev_vertex(a, ring).ok() == Some(*w) || next_vertex(a, ring).ok() == Some(*w);
            if hugs_a {
                Some((*w, b))
            } else {
                Some((a, *w))
            }
        }
        _ => None,
    }
}

fn has_corners(region: &[Point], corners: &[Point; 4]) -> bool {
    let ring = open_ring(region);
    ring.len() == 4 && corners.iter().all(|c| ring.contains(c))
}
