use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the game grid. (0,0) is the top left corner and y grows
/// downward, like canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[inline]
fn between(v: i64, a: i64, b: i64) -> bool {
    (a <= v && v <= b) || (b <= v && v <= a)
}

/// A straight piece of boundary or trail. Valid inputs are axis-aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Direction-agnostic equality.
    pub fn same_as(&self, other: &Segment) -> bool {
        self == other || *self == other.reversed()
    }

    /// Length along the axis. Only meaningful for axis-aligned segments.
    pub fn length(&self) -> i64 {
        (self.end.x - self.start.x).abs() + (self.end.y - self.start.y).abs()
    }

    /// Inclusive containment test. Endpoints count as on the segment.
    pub fn contains(&self, p: Point) -> bool {
        let cross = (self.end.x - self.start.x) * (p.y - self.start.y)
            - (self.end.y - self.start.y) * (p.x - self.start.x);
        cross == 0
            && between(p.x, self.start.x, self.end.x)
            && between(p.y, self.start.y, self.end.y)
    }

    /// Containment excluding both endpoints.
    pub fn contains_strictly(&self, p: Point) -> bool {
        p != self.start && p != self.end && self.contains(p)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Axis-aligned rectangle, the unit of a polygon's rectangle decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// The rectangle with `a` and `b` as opposite corners.
    pub fn spanning(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub fn width(&self) -> i64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i64 {
        self.max.y - self.min.y
    }

    pub fn area(&self) -> i64 {
        self.width() * self.height()
    }

    pub fn is_degenerate(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Corners in clockwise order: top left, top right, bottom right,
    /// bottom left.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.min,
            Point::new(self.max.x, self.min.y),
            self.max,
            Point::new(self.min.x, self.max.y),
        ]
    }

    /// The explicitly closed 5-point ring.
    pub fn to_polygon(&self) -> Vec<Point> {
        let c = self.corners();
        vec![c[0], c[1], c[2], c[3], c[0]]
    }

    /// With `inclusive` the border counts as inside, otherwise only the open
    /// interior does.
    pub fn contains(&self, p: Point, inclusive: bool) -> bool {
        if inclusive {
            self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
        } else {
            self.min.x < p.x && p.x < self.max.x && self.min.y < p.y && p.y < self.max.y
        }
    }

    /// Area shared with `other`; zero when they only touch.
    pub fn overlap_area(&self, other: &Rect) -> i64 {
        let w = self.max.x.min(other.max.x) - self.min.x.max(other.min.x);
        let h = self.max.y.min(other.max.y) - self.min.y.max(other.min.y);
        if w > 0 && h > 0 {
            w * h
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_contains() {
        let seg = Segment::new(Point::new(0, 10), Point::new(0, -10));
        assert!(seg.contains(Point::new(0, 0)));
        assert!(seg.contains(Point::new(0, 10)));
        assert!(seg.contains(Point::new(0, -10)));
        assert!(!seg.contains(Point::new(0, 11)));
        assert!(!seg.contains(Point::new(1, 0)));
        assert!(!seg.contains_strictly(Point::new(0, -10)));
    }

    #[test]
    fn test_segment_same_as() {
        let a = Segment::new(Point::new(0, 0), Point::new(5, 0));
        assert!(a.same_as(&a.reversed()));
        assert!(!a.same_as(&Segment::new(Point::new(0, 0), Point::new(6, 0))));
        assert_eq!(a.length(), 5);
    }

    #[test]
    fn test_rect() {
        let r = Rect::spanning(Point::new(10, 20), Point::new(0, 0));
        assert_eq!(r.min, Point::new(0, 0));
        assert_eq!(r.area(), 200);
        assert!(r.contains(Point::new(10, 5), true));
        assert!(!r.contains(Point::new(10, 5), false));
        assert!(r.contains(Point::new(5, 5), false));

        let ring = r.to_polygon();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring[0], ring[4]);
        assert_eq!(ring[2], Point::new(10, 20));
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::spanning(Point::new(0, 0), Point::new(10, 10));
        let touching = Rect::spanning(Point::new(10, 0), Point::new(20, 10));
        let crossing = Rect::spanning(Point::new(5, 5), Point::new(15, 15));
        assert_eq!(a.overlap_area(&touching), 0);
        assert_eq!(a.overlap_area(&crossing), 25);
    }
}
