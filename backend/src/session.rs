use qix_core::game::{Board, Speed};
use qix_core::geometry::Point;
use qix_core::{EngineError, GameConfig};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

/// Format an engine error as a JSON message for the frontend
pub fn format_error(code: &str, message: &str, severity: &str) -> String {
    format!(
        "ERROR_UPDATE:{}",
        json!({
            "code": code,
            "message": message,
            "severity": severity
        })
    )
}

fn engine_error_code(e: &EngineError) -> &'static str {
    match e {
        EngineError::InvalidCut(_) => "INVALID_CUT",
        EngineError::InvalidVertex(_) => "INVALID_VERTEX",
        EngineError::GeometryError(_) => "GEOMETRY_ERROR",
    }
}

#[derive(Deserialize)]
struct CutCmd {
    path: Vec<Point>,
    speed: Speed,
}

#[derive(Deserialize)]
struct MarkerCmd {
    position: Point,
    claiming: bool,
    #[serde(default)]
    trail: Vec<Point>,
}

/// One game per WebSocket connection.
pub struct Session {
    pub id: Uuid,
    config: GameConfig,
    board: Board,
}

impl Session {
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        let board = Board::new(config.clone())?;
        Ok(Self {
            id: Uuid::new_v4(),
            config,
            board,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_update(&self) -> String {
        let json = serde_json::to_string(&self.board.snapshot()).unwrap_or("{}".into());
        format!("BOARD_UPDATE:{}", json)
    }

    /// Runs one text command and returns the replies to send, in order.
    /// Failures become `ERROR_UPDATE` replies; the session carries on.
    pub fn handle(&mut self, text: &str) -> Vec<String> {
        if text == "NEW_GAME" {
            match Board::new(self.config.clone()) {
                Ok(board) => {
                    self.board = board;
                    info!("[{}] new game", self.id);
                    vec![self.board_update()]
                }
                Err(e) => vec![format_error(engine_error_code(&e), &e.to_string(), "error")],
            }
        } else if text == "STATE" {
            vec![self.board_update()]
        } else if let Some(json_str) = text.strip_prefix("ENEMIES:") {
            match serde_json::from_str::<Vec<Point>>(json_str) {
                Ok(positions) => {
                    self.board.set_enemies(&positions);
                    vec![]
                }
                Err(e) => {
                    warn!("[{}] failed to parse enemies: {}", self.id, e);
                    vec![format_error("BAD_REQUEST", &format!("Invalid enemies: {}", e), "error")]
                }
            }
        } else if let Some(json_str) = text.strip_prefix("WALKERS:") {
            match serde_json::from_str::<Vec<Point>>(json_str) {
                Ok(positions) => {
                    self.board.set_walkers(&positions);
                    vec![]
                }
                Err(e) => {
                    warn!("[{}] failed to parse walkers: {}", self.id, e);
                    vec![format_error("BAD_REQUEST", &format!("Invalid walkers: {}", e), "error")]
                }
            }
        } else if let Some(json_str) = text.strip_prefix("MARKER:") {
            let cmd = match serde_json::from_str::<MarkerCmd>(json_str) {
                Ok(cmd) => cmd,
                Err(e) => {
                    warn!("[{}] failed to parse marker: {}", self.id, e);
                    return vec![format_error("BAD_REQUEST", &format!("Invalid marker: {}", e), "error")];
                }
            };
            if !self.board.check_death(cmd.position, cmd.claiming, &cmd.trail) {
                return vec![];
            }
            let lives = self.board.scoreboard_mut().die();
            info!("[{}] marker hit at {}, {} lives left", self.id, cmd.position, lives);
            vec![
                format!(
                    "DEATH_UPDATE:{}",
                    json!({ "lives": lives, "game_over": self.board.scoreboard().is_game_over() })
                ),
                self.board_update(),
            ]
        } else if let Some(json_str) = text.strip_prefix("CUT:") {
            let cmd = match serde_json::from_str::<CutCmd>(json_str) {
                Ok(cmd) => cmd,
                Err(e) => {
                    warn!("[{}] failed to parse cut: {}", self.id, e);
                    return vec![format_error("BAD_REQUEST", &format!("Invalid cut: {}", e), "error")];
                }
            };
            match self.board.close_claim(&cmd.path, cmd.speed) {
                Ok(outcome) => {
                    let json = serde_json::to_string(&outcome).unwrap_or("{}".into());
                    vec![format!("CLAIM_UPDATE:{}", json), self.board_update()]
                }
                Err(e) => {
                    // the move is illegal, the board is unchanged
                    vec![format_error(engine_error_code(&e), &e.to_string(), "warning")]
                }
            }
        } else if text == "NEXT_LEVEL" {
            if !self.board.scoreboard().claimed_enough() {
                return vec![format_error(
                    "LEVEL_NOT_CLEARED",
                    &format!(
                        "Only {:.1}% claimed, {}% needed",
                        self.board.scoreboard().stats().claimed_percent,
                        self.config.claim_target_percent
                    ),
                    "warning",
                )];
            }
            match self.board.next_level() {
                Ok(()) => vec![self.board_update()],
                Err(e) => vec![format_error(engine_error_code(&e), &e.to_string(), "error")],
            }
        } else if text == "DIE" {
            let lives = self.board.scoreboard_mut().die();
            info!("[{}] life lost, {} left", self.id, lives);
            vec![self.board_update()]
        } else {
            warn!("[{}] unknown command: {}", self.id, text);
            vec![format_error("UNKNOWN_COMMAND", &format!("Unknown command: {}", text), "warning")]
        }
    }
}
