//! Triangle generation and triangle centers
//!
//! The geometric core of the quiz:
//! - **Triangle generation**: rejection sampling of "well shaped" triangles
//! - **Center calculation**: closed-form centroid, circumcenter, incenter and
//!   orthocenter
//!
//! # Overview
//!
//! ```text
//! bounds (width, height)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │    generate()    │  ── rejection sampling + shape check
//! └────────┬─────────┘
//!          │
//!          ▼
//!      Triangle
//!          │
//!          ▼
//! ┌──────────────────┐
//! │    compute()     │  ── G, O, I, H
//! └────────┬─────────┘
//!          │
//!          ▼
//!      CenterSet
//! ```
//!
//! # Example
//!
//! ```
//! use tricenter::geometry::{compute, generate, CenterKind};
//!
//! let triangle = generate(600.0, 600.0)?;
//! let centers = compute(&triangle)?;
//! let target = centers.get(CenterKind::Incenter);
//! assert!(triangle.contains_point(target));
//! # Ok::<(), tricenter::geometry::GeometryError>(())
//! ```

mod centers;
mod error;
mod generator;
mod point;
mod triangle;

#[cfg(test)]
mod tests;

// ============================================================================
// Public API
// ============================================================================

pub use centers::{compute, CenterKind, CenterSet};
pub use error::GeometryError;
pub use generator::{generate, GeneratorConfig, TriangleGenerator};
pub use point::Point;
pub use triangle::{Angles, EdgeLengths, ShapeConstraints, Triangle};
