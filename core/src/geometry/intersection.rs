//! Point/segment relations on the game grid: which boundary edge a point sits
//! on, and where two segments meet.

use super::polygon::open_ring;
use super::{Point, Segment};
use serde::{Deserialize, Serialize};

/// The line through two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LineEquation {
    /// x = constant
    Vertical { x: f64 },
    /// y = slope * x + intercept
    Sloped { slope: f64, intercept: f64 },
}

pub fn line_equation(a: Point, b: Point) -> LineEquation {
    if a.x == b.x {
        return LineEquation::Vertical { x: a.x as f64 };
    }
    let slope = (b.y - a.y) as f64 / (b.x - a.x) as f64;
    LineEquation::Sloped {
        slope,
        intercept: b.y as f64 - b.x as f64 * slope,
    }
}

/// Where two segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intersection {
    /// The segments cross or touch at a single point.
    Point(Point),
    /// The segments are collinear and overlap; carries one shared point.
    Overlap(Point),
}

impl Intersection {
    pub fn point(&self) -> Point {
        match self {
            Intersection::Point(p) | Intersection::Overlap(p) => *p,
        }
    }
}

/// Returns the first edge of `boundary` that contains `point`, endpoints
/// included. Consecutive pairs are walked exactly as given, so a closed
/// polygon must repeat its first point to have its closing edge checked.
pub fn on_line(point: Point, boundary: &[Point]) -> Option<Segment> {
    boundary
        .windows(2)
        .map(|w| Segment::new(w[0], w[1]))
        .find(|seg| seg.contains(point))
}

/// A position on a polygon ring: the edge index (edge `i` runs from vertex
/// `i` to vertex `i + 1`, wrapping) and the distance from that edge's start.
///
/// Positions order the same way the ring is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoundaryPosition {
    pub edge: usize,
    pub offset: i64,
}

/// Ring-aware `on_line`: accepts open or closed polygons, always checks the
/// closing edge. A vertex resolves to the edge that ends at it, except the
/// first vertex which resolves to edge 0.
pub fn locate(point: Point, polygon: &[Point]) -> Option<BoundaryPosition> {
    let ring = open_ring(polygon);
    let m = ring.len();
    (0..m).find_map(|i| {
        let seg = Segment::new(ring[i], ring[(i + 1) % m]);
        if seg.contains(point) {
            Some(BoundaryPosition {
                edge: i,
                offset: Segment::new(seg.start, point).length(),
            })
        } else {
            None
        }
    })
}

/// Intersection of two segments.
///
/// Collinear overlapping segments report the first endpoint (of `a`, then
/// of `b`) lying on both. Parallel and disjoint segments report nothing.
pub fn intersection(a: Segment, b: Segment) -> Option<Intersection> {
    match (line_equation(a.start, a.end), line_equation(b.start, b.end)) {
        (LineEquation::Vertical { x: x1 }, LineEquation::Vertical { x: x2 }) => {
            if x1 == x2 {
                overlap(a, b)
            } else {
                None
            }
        }
        (
            LineEquation::Sloped { slope: s1, intercept: i1 },
            LineEquation::Sloped { slope: s2, intercept: i2 },
        ) if s1 == s2 => {
            if i1 == i2 {
                overlap(a, b)
            } else {
                None
            }
        }
        (LineEquation::Vertical { x }, LineEquation::Sloped { slope, intercept }) => {
            cross_vertical(x, a, slope, intercept, b)
        }
        (LineEquation::Sloped { slope, intercept }, LineEquation::Vertical { x }) => {
            cross_vertical(x, b, slope, intercept, a)
        }
        (
            LineEquation::Sloped { slope: s1, intercept: i1 },
            LineEquation::Sloped { slope: s2, intercept: i2 },
        ) => {
            let x = (i2 - i1) / (s1 - s2);
            if within(x, a.start.x, a.end.x) && within(x, b.start.x, b.end.x) {
                let y = s1 * x + i1;
                Some(Intersection::Point(Point::new(x.round() as i64, y.round() as i64)))
            } else {
                None
            }
        }
    }
}

pub fn distance(a: Point, b: Point) -> f64 {
    let dx = (b.x - a.x) as f64;
    let dy = (b.y - a.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

fn overlap(a: Segment, b: Segment) -> Option<Intersection> {
    [a.start, a.end, b.start, b.end]
        .into_iter()
        .find(|p| a.contains(*p) && b.contains(*p))
        .map(Intersection::Overlap)
}

fn within(v: f64, a: i64, b: i64) -> bool {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    lo as f64 <= v && v <= hi as f64
}

fn cross_vertical(
    x: f64,
    vertical: Segment,
    slope: f64,
    intercept: f64,
    sloped: Segment,
) -> Option<Intersection> {
    let y = slope * x + intercept;
    if within(x, sloped.start.x, sloped.end.x) && within(y, vertical.start.y, vertical.end.y) {
        Some(Intersection::Point(Point::new(x as i64, y.round() as i64)))
    } else {
        None
    }
}
