//! Deciding which side of a cut is claimed.
//!
//! A cut splits the free area in two. One side stays playable, the other is
//! removed from play. By default the region away from the marker's approach
//! stays free, unless that would leave most enemies stranded on the claimed
//! side, or would hand the player the bigger half while no enemy is left to
//! defend it.

use crate::error::EngineResult;
use crate::geometry::{cut_poly, point_in_region, polygon_area, triangulate, Point, Rect};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimResult {
    pub new_free_area: Vec<Point>,
    pub new_free_rects: Vec<Rect>,
    pub claimed_polygon: Vec<Point>,
    /// Area removed from play: previous remaining area minus the new free area.
    pub claimed_area: i64,
    /// Indices into the enemy slice of the enemies left on the claimed side.
    pub frozen: Vec<usize>,
    /// Whether the region next to the marker's approach ended up free.
    pub swapped: bool,
}

/// Swap rule.
///
/// `stranded` enemies would end up on the claimed side out of `total`
/// active enemies, were the far region kept free. Swaps when a strict
/// majority is stranded, or when the free side would be strictly smaller
/// than the claimed one while every enemy is stranded. An even split never
/// swaps.
pub fn should_swap(stranded: usize, total: usize, free_area: i64, claimed_area: i64) -> bool {
    2 * stranded > total || (free_area < claimed_area && stranded >= total)
}

/// Splits `free_area` along `cut_path` and picks the claimed side.
///
/// `prev_remaining_area` is the free area figure tracked by the caller
/// before this cut. `enemies` are the positions of the enemies still
/// roaming; a position on the border of the free side counts as free.
pub fn resolve_claim(
    free_area: &[Point],
    cut_path: &[Point],
    prev_remaining_area: i64,
    enemies: &[Point],
) -> EngineResult<ClaimResult> {
    let (inside, outside) = cut_poly(free_area, cut_path)?;
    let rects_out = triangulate(&outside)?;

    let stranded = enemies
        .iter()
        .filter(|e| !point_in_region(**e, &rects_out, true))
        .count();
    let free = polygon_area(&rects_out);
    let claimed = prev_remaining_area - free;

    let swapped = should_swap(stranded, enemies.len(), free, claimed);
    debug!(
        "swap rule: {}/{} enemies stranded, free {} vs claimed {} -> swap {}",
        stranded,
        enemies.len(),
        free,
        claimed,
        swapped
    );

    let (claimed_polygon, new_free_area, new_free_rects) = if swapped {
        let rects_in = triangulate(&inside)?;
        (outside, inside, rects_in)
    } else {
        (inside, outside, rects_out)
    };

    let frozen: Vec<usize> = enemies
        .iter()
        .enumerate()
        .filter(|(_, e)| !point_in_region(**e, &new_free_rects, true))
        .map(|(i, _)| i)
        .collect();

    let claimed_area = prev_remaining_area - polygon_area(&new_free_rects);
    info!(
        "claimed {} of {} remaining, {} enemies frozen",
        claimed_area,
        prev_remaining_area,
        frozen.len()
    );

    Ok(ClaimResult {
        new_free_area,
        new_free_rects,
        claimed_polygon,
        claimed_area,
        frozen,
        swapped,
    })
}
