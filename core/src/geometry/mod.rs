//! Axis-aligned polygon geometry on the integer game grid.

pub mod primitives;
pub use primitives::*;

pub mod intersection;
pub use intersection::*;

pub mod polygon;
pub use polygon::*;

pub mod split;
pub use split::cut_poly;

pub mod tessellation;
pub use tessellation::triangulate;

#[cfg(test)]
mod tests_split;

#[cfg(test)]
mod tests_tessellation;
