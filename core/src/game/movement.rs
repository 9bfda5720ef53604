//! Enemy movement queries against the free area and the trail being drawn.

use crate::error::{EngineError, EngineResult};
use crate::geometry::{
    bounding_box, edges, intersection, locate, normalize, open_ring, Point, Rect, Segment,
};

/// Moves `pos` along the boundary of `polygon` by `distance` grid units,
/// turning at the vertices. With `clockwise` the walk follows the ring order,
/// otherwise it runs against it. A negative distance walks the other way.
pub fn walk_boundary(
    pos: Point,
    polygon: &[Point],
    distance: i64,
    clockwise: bool,
) -> EngineResult<Point> {
    if distance < 0 {
        return walk_boundary(pos, polygon, -distance, !clockwise);
    }

    let normalized = normalize(polygon);
    let ring = open_ring(&normalized);
    let m = ring.len();

    let at = locate(pos, ring)
        .ok_or_else(|| EngineError::GeometryError(format!("{} is not on the boundary", pos)))?;
    if let Some(edge) = edges(ring).find(|e| !e.is_vertical() && !e.is_horizontal()) {
        return Err(EngineError::GeometryError(format!("cannot walk along {}", edge)));
    }

    let perimeter: i64 = edges(ring).map(|e| e.length()).sum();
    if perimeter == 0 {
        return Ok(pos);
    }

    let step = |i: usize| if clockwise { (i + 1) % m } else { (i + m - 1) % m };
    let mut target = if clockwise { (at.edge + 1) % m } else { at.edge };
    let mut remaining = distance % perimeter;
    let mut cur = pos;

    loop {
        if ring[target] == cur {
            target = step(target);
        }
        let leg = Segment::new(cur, ring[target]).length();
        if remaining <= leg {
            let dx = (ring[target].x - cur.x).signum();
            let dy = (ring[target].y - cur.y).signum();
            return Ok(Point::new(cur.x + dx * remaining, cur.y + dy * remaining));
        }
        remaining -= leg;
        cur = ring[target];
        target = step(target);
    }
}

/// Whether the square of half side `half_size` around `center` touches any
/// segment of `trail`.
pub fn touching_path(center: Point, half_size: i64, trail: &[Point]) -> bool {
    let square = Rect::spanning(
        Point::new(center.x - half_size, center.y - half_size),
        Point::new(center.x + half_size, center.y + half_size),
    );

    let Some(extent) = bounding_box(trail) else {
        return false;
    };
    let apart = extent.max.x < square.min.x
        || square.max.x < extent.min.x
        || extent.max.y < square.min.y
        || square.max.y < extent.min.y;
    if apart {
        return false;
    }

    if trail.iter().any(|p| square.contains(*p, true)) {
        return true;
    }

    let sides: Vec<Segment> = square
        .to_polygon()
        .windows(2)
        .map(|w| Segment::new(w[0], w[1]))
        .collect();
    trail.windows(2).any(|w| {
        let leg = Segment::new(w[0], w[1]);
        sides.iter().any(|side| intersection(*side, leg).is_some())
    })
}
