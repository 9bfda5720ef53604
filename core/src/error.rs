use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures raised by the engine. Every one of them means the attempted move
/// is illegal; callers reject the move and keep their previous state.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineError {
    #[error("Invalid cut: {0}")]
    InvalidCut(String),
    #[error("Point {0} is not a vertex of the polygon")]
    InvalidVertex(Point),
    #[error("Geometry error: {0}")]
    GeometryError(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
