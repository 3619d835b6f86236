use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::GeometryError;
use super::point::Point;
use super::triangle::Triangle;

/// The four triangle centers the quiz asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CenterKind {
    Centroid,
    Circumcenter,
    Incenter,
    Orthocenter,
}

impl CenterKind {
    /// Presentation order of a game.
    pub const ALL: [CenterKind; 4] = [
        CenterKind::Centroid,
        CenterKind::Circumcenter,
        CenterKind::Incenter,
        CenterKind::Orthocenter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CenterKind::Centroid => "Centroid",
            CenterKind::Circumcenter => "Circumcenter",
            CenterKind::Incenter => "Incenter",
            CenterKind::Orthocenter => "Orthocenter",
        }
    }

    /// Conventional single-letter label.
    pub fn symbol(self) -> &'static str {
        match self {
            CenterKind::Centroid => "G",
            CenterKind::Circumcenter => "O",
            CenterKind::Incenter => "I",
            CenterKind::Orthocenter => "H",
        }
    }
}

impl fmt::Display for CenterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Centers derived from a single triangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterSet {
    centroid: Point,
    circumcenter: Point,
    incenter: Point,
    orthocenter: Point,
}

impl CenterSet {
    pub fn get(&self, kind: CenterKind) -> Point {
        match kind {
            CenterKind::Centroid => self.centroid,
            CenterKind::Circumcenter => self.circumcenter,
            CenterKind::Incenter => self.incenter,
            CenterKind::Orthocenter => self.orthocenter,
        }
    }

    pub fn centroid(&self) -> Point {
        self.centroid
    }

    pub fn circumcenter(&self) -> Point {
        self.circumcenter
    }

    pub fn incenter(&self) -> Point {
        self.incenter
    }

    pub fn orthocenter(&self) -> Point {
        self.orthocenter
    }

    /// Centers in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (CenterKind, Point)> + '_ {
        CenterKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }
}

/// Computes the four centers of `triangle`.
///
/// # Errors
/// [`GeometryError::DegenerateTriangle`] when the vertices are collinear.
pub fn compute(triangle: &Triangle) -> Result<CenterSet, GeometryError> {
    let circumcenter = circumcenter(triangle)?;
    let [a, b, c] = triangle.vertices();

    Ok(CenterSet {
        centroid: centroid(triangle),
        circumcenter,
        incenter: incenter(triangle),
        // Euler line: H = A + B + C - 2O
        orthocenter: a + b + c - circumcenter * 2.0,
    })
}

fn centroid(triangle: &Triangle) -> Point {
    let [a, b, c] = triangle.vertices();
    Point::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
}

fn circumcenter(triangle: &Triangle) -> Result<Point, GeometryError> {
    let [a, b, c] = triangle.vertices();

    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d == 0.0 || !d.is_finite() {
        return Err(GeometryError::DegenerateTriangle);
    }

    let (a2, b2, c2) = (a.length_sq(), b.length_sq(), c.length_sq());
    let center = Point::new(
        (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d,
        (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d,
    );

    if center.is_finite() {
        Ok(center)
    } else {
        Err(GeometryError::DegenerateTriangle)
    }
}

/// Perimeter-weighted vertex average.
fn incenter(triangle: &Triangle) -> Point {
    let [a, b, c] = triangle.vertices();
    let edges = triangle.edge_lengths();
    let perimeter = edges.perimeter();

    Point::new(
        (edges.a * a.x + edges.b * b.x + edges.c * c.x) / perimeter,
        (edges.a * a.y + edges.b * b.y + edges.c * c.y) / perimeter,
    )
}
