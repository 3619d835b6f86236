/// Errors raised by the geometry core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// The three vertices are collinear, so the circumcenter is undefined.
    #[error("degenerate triangle: vertices are collinear")]
    DegenerateTriangle,
    /// The generator gave up before finding a triangle that passes the shape check.
    #[error("no valid triangle found after {attempts} attempts")]
    GenerationTimeout { attempts: u32 },
    /// The sampling region is not a finite, non-negative rectangle.
    #[error("invalid sampling bounds {width}x{height}")]
    InvalidBounds { width: f64, height: f64 },
}
