//! The game session state between claims.
//!
//! The free area is never edited in place: every claim swaps in the polygon
//! and rectangle decomposition computed by the claim resolver.

use super::movement::touching_path;
use super::score::{ClaimScore, Scoreboard, Speed};
use crate::claim::{resolve_claim, ClaimResult};
use crate::config::GameConfig;
use crate::error::{EngineError, EngineResult};
use crate::geometry::{distance, normalize, point_in_region, triangulate, Point, Rect};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub position: Point,
    /// Caught on a claimed side; no longer moves or threatens the player.
    pub frozen: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimedPolygon {
    pub polygon: Vec<Point>,
    pub speed: Speed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimOutcome {
    pub claim: ClaimResult,
    pub score: ClaimScore,
    /// Board indices of the enemies frozen by this claim.
    pub frozen_enemies: Vec<usize>,
    pub level_cleared: bool,
}

/// Serializable view of the board for hosts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub free_area: Vec<Point>,
    pub free_rects: Vec<Rect>,
    pub claimed: Vec<ClaimedPolygon>,
    pub enemies: Vec<Enemy>,
    pub walkers: Vec<Point>,
    pub level: u32,
    pub lives: u32,
    pub speed: f64,
    pub score: i64,
    pub total_score: i64,
    pub claimed_percent: f64,
    pub roamers: u32,
    pub walker_count: u32,
}

#[derive(Debug, Clone)]
pub struct Board {
    config: GameConfig,
    start_area: Rect,
    free_area: Vec<Point>,
    free_rects: Vec<Rect>,
    claimed: Vec<ClaimedPolygon>,
    enemies: Vec<Enemy>,
    /// Enemies patrolling the free area's boundary. They never get frozen.
    walkers: Vec<Point>,
    scoreboard: Scoreboard,
}

impl Board {
    pub fn new(config: GameConfig) -> EngineResult<Self> {
        let start_area = config.field();
        if start_area.is_degenerate() {
            return Err(EngineError::GeometryError(format!(
                "field of {}x{} has no area",
                config.field_width, config.field_height
            )));
        }
        let free_area = normalize(&start_area.to_polygon());
        let free_rects = triangulate(&free_area)?;
        let scoreboard = Scoreboard::new(&config);

        Ok(Self {
            config,
            start_area,
            free_area,
            free_rects,
            claimed: Vec::new(),
            enemies: Vec::new(),
            walkers: Vec::new(),
            scoreboard,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn free_area(&self) -> &[Point] {
        &self.free_area
    }

    pub fn free_rects(&self) -> &[Rect] {
        &self.free_rects
    }

    pub fn claimed(&self) -> &[ClaimedPolygon] {
        &self.claimed
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn scoreboard_mut(&mut self) -> &mut Scoreboard {
        &mut self.scoreboard
    }

    /// Strictly inside the outer field.
    pub fn in_game_bounds(&self, p: Point) -> bool {
        self.start_area.contains(p, false)
    }

    /// Inside the outer field and on or inside the free area.
    pub fn in_free_area(&self, p: Point) -> bool {
        self.in_game_bounds(p) && point_in_region(p, &self.free_rects, true)
    }

    /// Updates enemy positions from a snapshot indexed like the board's
    /// enemies. Frozen enemies keep their position; extra entries join as
    /// roaming enemies, missing ones are dropped.
    pub fn set_enemies(&mut self, positions: &[Point]) {
        self.enemies.truncate(positions.len());
        for (enemy, &p) in self.enemies.iter_mut().zip(positions) {
            if !enemy.frozen {
                enemy.position = p;
            }
        }
        let known = self.enemies.len();
        self.enemies.extend(positions[known..].iter().map(|&position| Enemy {
            position,
            frozen: false,
        }));
    }

    pub fn walkers(&self) -> &[Point] {
        &self.walkers
    }

    pub fn set_walkers(&mut self, positions: &[Point]) {
        self.walkers = positions.to_vec();
    }

    pub fn active_enemies(&self) -> Vec<Point> {
        self.enemies
            .iter()
            .filter(|e| !e.frozen)
            .map(|e| e.position)
            .collect()
    }

    /// Whether a roaming enemy touches the trail being drawn.
    pub fn trail_hit(&self, trail: &[Point]) -> bool {
        self.enemies
            .iter()
            .filter(|e| !e.frozen)
            .any(|e| touching_path(e.position, self.config.enemy_half_size, trail))
    }

    /// Whether the marker at `marker` dies. Off the trail only boundary
    /// walkers are a threat; while drawing, roaming enemies kill by coming
    /// close to the marker or by touching the trail behind it.
    pub fn check_death(&self, marker: Point, claiming: bool, trail: &[Point]) -> bool {
        if !claiming {
            return self
                .walkers
                .iter()
                .any(|w| distance(marker, *w) < self.config.walker_kill_distance);
        }

        let near = self
            .enemies
            .iter()
            .filter(|e| !e.frozen)
            .any(|e| distance(marker, e.position) < self.config.roamer_kill_distance);
        let mut drawn = trail.to_vec();
        drawn.push(marker);
        near || self.trail_hit(&drawn)
    }

    /// Closes the trail `path` against the free area and books the claim.
    ///
    /// Points between the trail's ends must lie on or inside the free area.
    /// On error the board is left as it was.
    pub fn close_claim(&mut self, path: &[Point], speed: Speed) -> EngineResult<ClaimOutcome> {
        if let Some(p) = path
            .iter()
            .skip(1)
            .take(path.len().saturating_sub(2))
            .find(|p| !point_in_region(**p, &self.free_rects, true))
        {
            warn!("trail point {} leaves the free area", p);
            return Err(EngineError::InvalidCut(format!("{} is outside the free area", p)));
        }

        let active: Vec<usize> = (0..self.enemies.len())
            .filter(|&i| !self.enemies[i].frozen)
            .collect();
        let positions: Vec<Point> = active.iter().map(|&i| self.enemies[i].position).collect();

        let claim = resolve_claim(
            &self.free_area,
            path,
            self.scoreboard.remaining_area(),
            &positions,
        )
        .map_err(|e| {
            warn!("claim rejected: {}", e);
            e
        })?;

        let frozen_enemies: Vec<usize> = claim.frozen.iter().map(|&k| active[k]).collect();
        for &i in &frozen_enemies {
            self.enemies[i].frozen = true;
        }

        self.free_area = claim.new_free_area.clone();
        self.free_rects = claim.new_free_rects.clone();
        self.claimed.push(ClaimedPolygon {
            polygon: claim.claimed_polygon.clone(),
            speed,
        });

        let score = self.scoreboard.record_claim(claim.claimed_area, speed);
        let level_cleared = self.scoreboard.claimed_enough();
        info!(
            "claim worth {} points, {:.1}% of level {} claimed",
            score.points,
            self.scoreboard.stats().claimed_percent,
            self.scoreboard.level()
        );

        Ok(ClaimOutcome {
            claim,
            score,
            frozen_enemies,
            level_cleared,
        })
    }

    /// Resets the field for the next level. Score and lives carry over.
    pub fn next_level(&mut self) -> EngineResult<()> {
        self.free_area = normalize(&self.start_area.to_polygon());
        self.free_rects = triangulate(&self.free_area)?;
        self.claimed.clear();
        self.enemies.clear();
        self.walkers.clear();
        self.scoreboard.next_level();
        Ok(())
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let stats = self.scoreboard.stats();
        BoardSnapshot {
            free_area: self.free_area.clone(),
            free_rects: self.free_rects.clone(),
            claimed: self.claimed.clone(),
            enemies: self.enemies.clone(),
            walkers: self.walkers.clone(),
            level: self.scoreboard.level(),
            lives: self.scoreboard.lives(),
            speed: self.scoreboard.speed(),
            score: stats.score,
            total_score: self.scoreboard.total_stats().score,
            claimed_percent: stats.claimed_percent,
            roamers: self.scoreboard.roamer_count(),
            walker_count: self.scoreboard.walker_count(),
        }
    }
}
