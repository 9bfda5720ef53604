use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Tunables of a game session. Every field falls back to the classic arcade
/// values when missing from the JSON source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field_width: i64,
    pub field_height: i64,
    pub lives: u32,
    /// Claimed percent of the field a level needs before it can be cleared.
    pub claim_target_percent: f64,
    pub slow_multiplier: i64,
    pub extra_life_base: i64,
    pub extra_life_step: i64,
    pub extra_life_count: u32,
    /// Half the side of the square an enemy occupies when checking whether
    /// it touches the trail being drawn.
    pub enemy_half_size: i64,
    /// A boundary walker this close to the marker kills it while the
    /// marker is not drawing.
    pub walker_kill_distance: f64,
    /// A roaming enemy this close to the marker kills it while drawing.
    pub roamer_kill_distance: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 600,
            field_height: 500,
            lives: 3,
            claim_target_percent: 75.0,
            slow_multiplier: 3,
            extra_life_base: 100_000,
            extra_life_step: 50_000,
            extra_life_count: 10,
            enemy_half_size: 10,
            walker_kill_distance: 10.0,
            roamer_kill_distance: 20.0,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn field(&self) -> Rect {
        Rect::spanning(Point::new(0, 0), Point::new(self.field_width, self.field_height))
    }

    /// Scores at which an extra life is granted, ascending.
    pub fn extra_life_thresholds(&self) -> impl Iterator<Item = i64> + '_ {
        (0..self.extra_life_count as i64).map(move |i| self.extra_life_base + self.extra_life_step * i)
    }
}
