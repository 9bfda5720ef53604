pub mod claim;
pub mod config;
pub mod error;
pub mod game;
pub mod geometry;

pub use claim::{resolve_claim, ClaimResult};
pub use config::GameConfig;
pub use error::{EngineError, EngineResult};
pub use game::{Board, Speed};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
