use rand::distr::{Distribution, Uniform};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::GeometryError;
use super::point::Point;
use super::triangle::{ShapeConstraints, Triangle};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

/// Configuration for random triangle generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of samples drawn before giving up with a timeout
    pub max_attempts: u32,

    /// Shape check every accepted triangle passes
    pub constraints: ShapeConstraints,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            constraints: ShapeConstraints::default(),
        }
    }
}

/// Random triangle source
///
/// Samples three independent points uniformly inside `[0, width] × [0, height]`
/// and keeps the first triple that passes [`ShapeConstraints`].
#[derive(Debug, Clone, Default)]
pub struct TriangleGenerator {
    config: GeneratorConfig,
}

impl TriangleGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a triangle using the thread-local RNG.
    pub fn generate(&self, width: f64, height: f64) -> Result<Triangle, GeometryError> {
        self.generate_with(&mut rand::rng(), width, height)
    }

    /// Generates a triangle from the given RNG.
    ///
    /// # Errors
    /// - [`GeometryError::InvalidBounds`] if either side is negative or not finite
    /// - [`GeometryError::GenerationTimeout`] once `max_attempts` samples were rejected
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        width: f64,
        height: f64,
    ) -> Result<Triangle, GeometryError> {
        let invalid = || GeometryError::InvalidBounds { width, height };
        let xs = Uniform::new_inclusive(0.0, width).map_err(|_| invalid())?;
        let ys = Uniform::new_inclusive(0.0, height).map_err(|_| invalid())?;

        for attempt in 1..=self.config.max_attempts {
            let triangle = Triangle::new([
                Point::new(xs.sample(rng), ys.sample(rng)),
                Point::new(xs.sample(rng), ys.sample(rng)),
                Point::new(xs.sample(rng), ys.sample(rng)),
            ]);

            if triangle.is_well_shaped(&self.config.constraints) {
                log::debug!("accepted triangle after {attempt} attempt(s): {triangle:?}");
                return Ok(triangle);
            }
        }

        log::warn!(
            "no valid triangle in {width}x{height} after {} attempts",
            self.config.max_attempts
        );
        Err(GeometryError::GenerationTimeout {
            attempts: self.config.max_attempts,
        })
    }
}

/// Generates a triangle inside `[0, width] × [0, height]` with the default
/// shape constraints.
pub fn generate(width: f64, height: f64) -> Result<Triangle, GeometryError> {
    TriangleGenerator::default().generate(width, height)
}
