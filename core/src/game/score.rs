//! Score, lives and level progression.

use crate::config::GameConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

/// How the trail of a claim was drawn. Slow claims score more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    Slow,
    Fast,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub claimed_percent: f64,
    pub speed: Speed,
    pub points: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub score: i64,
    pub claimed_area: i64,
    pub claimed_percent: f64,
    pub claims: Vec<ClaimRecord>,
}

/// What a single claim was worth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClaimScore {
    pub claimed_percent: f64,
    pub points: i64,
    pub extra_lives: u32,
}

/// Level zero holds the running totals across levels.
const TOTALS: u32 = 0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scoreboard {
    total_area: i64,
    slow_multiplier: i64,
    claim_target_percent: f64,
    extra_life_thresholds: Vec<i64>,
    level: u32,
    speed: f64,
    lives: u32,
    levels: BTreeMap<u32, Stats>,
}

impl Scoreboard {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            total_area: config.field().area(),
            slow_multiplier: config.slow_multiplier,
            claim_target_percent: config.claim_target_percent,
            extra_life_thresholds: config.extra_life_thresholds().collect(),
            level: 1,
            speed: 1.0,
            lives: config.lives,
            levels: BTreeMap::new(),
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn total_area(&self) -> i64 {
        self.total_area
    }

    /// Stats of the level being played.
    pub fn stats(&self) -> Stats {
        self.levels.get(&self.level).cloned().unwrap_or_default()
    }

    pub fn total_stats(&self) -> Stats {
        self.levels.get(&TOTALS).cloned().unwrap_or_default()
    }

    /// Free area left on the current level.
    pub fn remaining_area(&self) -> i64 {
        self.total_area - self.levels.get(&self.level).map_or(0, |s| s.claimed_area)
    }

    /// Books a claim of `claimed_area` into the current level and the
    /// totals, granting extra lives for every threshold the total score
    /// crosses.
    pub fn record_claim(&mut self, claimed_area: i64, speed: Speed) -> ClaimScore {
        let claimed_percent = claimed_area as f64 * 100.0 / self.total_area as f64;
        let mut points = (claimed_percent * 100.0) as i64;
        if speed == Speed::Slow {
            points *= self.slow_multiplier;
        }

        for level in [TOTALS, self.level] {
            let stats = self.levels.entry(level).or_default();
            stats.score += points;
            stats.claimed_area += claimed_area;
            stats.claimed_percent = stats.claimed_area as f64 * 100.0 / self.total_area as f64;
            stats.claims.push(ClaimRecord {
                claimed_percent,
                speed,
                points,
            });
        }

        let total = self.levels.get(&TOTALS).map_or(0, |s| s.score);
        let extra_lives = self
            .extra_life_thresholds
            .iter()
            .filter(|&&t| total >= t && total - points < t)
            .count() as u32;
        if extra_lives > 0 {
            info!("score {} earns {} extra lives", total, extra_lives);
        }
        self.lives += extra_lives;

        ClaimScore {
            claimed_percent,
            points,
            extra_lives,
        }
    }

    pub fn claimed_enough(&self) -> bool {
        self.stats().claimed_percent > self.claim_target_percent
    }

    pub fn next_level(&mut self) {
        self.level += 1;
        self.speed = 1.0 + self.level as f64 * 0.03;
        info!("level {} at speed {:.2}", self.level, self.speed);
    }

    /// Loses a life and returns how many are left.
    pub fn die(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }

    pub fn is_game_over(&self) -> bool {
        self.lives == 0
    }

    /// Free-roaming enemies on this level, never more than three.
    pub fn roamer_count(&self) -> u32 {
        (0.8 + self.level as f64 * 0.33).round().min(3.0) as u32
    }

    /// Enemies patrolling the boundary on this level.
    pub fn walker_count(&self) -> u32 {
        (1.0 + self.level as f64 * 0.6).round() as u32
    }
}
