//! Splitting a polygon in two along a cut path.

use super::intersection::locate;
use super::polygon::{normalize, open_ring};
use super::Point;
use crate::error::{EngineError, EngineResult};
use tracing::debug;

/// Splits `boundary` along `cut` and returns both resulting polygons,
/// normalized and closed.
///
/// The cut's first and last points must lie on the boundary; the points in
/// between are expected inside it. The cut is walked in the boundary's own
/// direction, so the first region is the cut followed by the boundary from
/// the cut's end back around to its start, and the second region is the
/// remaining boundary stretch followed by the cut reversed. Both keep the
/// boundary's winding.
pub fn cut_poly(boundary: &[Point], cut: &[Point]) -> EngineResult<(Vec<Point>, Vec<Point>)> {
    let ring = open_ring(boundary);
    let m = ring.len();
    if m < 3 {
        return Err(EngineError::GeometryError(format!(
            "cannot cut a boundary of {} vertices",
            m
        )));
    }

    let (first, last) = match cut {
        [first, .., last] => (*first, *last),
        _ => return Err(EngineError::InvalidCut("cut needs at least two points".into())),
    };
    if first == last {
        return Err(EngineError::InvalidCut(format!("cut starts and ends at {}", first)));
    }

    let mut start = locate(first, ring)
        .ok_or_else(|| EngineError::InvalidCut(format!("cut start {} is off the boundary", first)))?;
    let mut end = locate(last, ring)
        .ok_or_else(|| EngineError::InvalidCut(format!("cut end {} is off the boundary", last)))?;

    let mut path = cut.to_vec();
    if end < start {
        path.reverse();
        std::mem::swap(&mut start, &mut end);
    }

    // The boundary walk resumes after the cut at `resume` and stops at `stop`,
    // right before closing back onto the cut's first point.
    let mut resume = (end.edge + 1) % m;
    let mut stop = start.edge;
    if resume == stop {
        // Cut runs from the first edge to the last one around vertex 0; walking
        // from vertex 0 to itself would fold the region onto the corner.
        debug!("cut wraps around corner {}, shifting anchors", ring[stop]);
        resume = (resume + 1) % m;
        stop = (stop + m - 1) % m;
        path.reverse();
    }

    let a_len = (stop + m - resume) % m + 1;
    let b_len = (resume + m - stop - 1) % m;

    let mut region_a = path.clone();
    region_a.extend((0..a_len).map(|k| ring[(resume + k) % m]));

    let mut region_b: Vec<Point> = (0..b_len).map(|k| ring[(stop + 1 + k) % m]).collect();
    region_b.extend(path.iter().rev());

    Ok((normalize(&region_a), normalize(&region_b)))
}
