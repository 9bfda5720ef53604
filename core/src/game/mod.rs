//! Game-state layer: the board a session plays on, its scoring and the
//! movement queries enemies need.

pub mod board;
pub use board::{Board, BoardSnapshot, ClaimOutcome, ClaimedPolygon, Enemy};

pub mod movement;
pub use movement::{touching_path, walk_boundary};

pub mod score;
pub use score::{ClaimRecord, ClaimScore, Scoreboard, Speed, Stats};
