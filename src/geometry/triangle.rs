use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::point::Point;

/// Triangle with three ordered vertices `A`, `B`, `C`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    points: [Point; 3],
}

/// Side lengths, each named after the vertex it faces
///
/// `a = |BC|`, `b = |CA|`, `c = |AB|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeLengths {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Interior angles in radians at `A`, `B` and `C`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angles {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Shape limits a generated triangle has to respect
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConstraints {
    /// Upper bound for `longest edge / shortest edge`
    pub max_edge_ratio: f64,

    /// Smallest interior angle allowed, in radians
    pub min_angle: f64,
}

impl Default for ShapeConstraints {
    fn default() -> Self {
        Self {
            max_edge_ratio: 3.0,
            min_angle: PI / 18.0,
        }
    }
}

impl Triangle {
    pub fn new(points: [Point; 3]) -> Self {
        Self { points }
    }

    pub fn vertices(&self) -> [Point; 3] {
        self.points
    }

    pub fn a(&self) -> Point {
        self.points[0]
    }

    pub fn b(&self) -> Point {
        self.points[1]
    }

    pub fn c(&self) -> Point {
        self.points[2]
    }

    pub fn edge_lengths(&self) -> EdgeLengths {
        let [a, b, c] = self.points;
        EdgeLengths {
            a: b.distance(c),
            b: c.distance(a),
            c: a.distance(b),
        }
    }

    /// Twice the signed area; positive when `A`, `B`, `C` run counter-clockwise.
    pub fn doubled_signed_area(&self) -> f64 {
        let [a, b, c] = self.points;
        (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
    }

    /// Interior angles, or `None` if the edges do not form a proper triangle.
    pub fn angles(&self) -> Option<Angles> {
        self.edge_lengths().angles()
    }

    pub fn is_well_shaped(&self, constraints: &ShapeConstraints) -> bool {
        self.edge_lengths().is_well_shaped(constraints)
    }

    /// Checks whether `point` lies inside the triangle or on its boundary.
    pub fn contains_point(&self, point: Point) -> bool {
        let [a, b, c] = self.points;

        // Barycentric test
        let doubled_area = self.doubled_signed_area();
        if doubled_area == 0.0 || !doubled_area.is_finite() {
            return false;
        }

        let s = (a.y * c.x - a.x * c.y + (c.y - a.y) * point.x + (a.x - c.x) * point.y)
            / doubled_area;
        let t = (a.x * b.y - a.y * b.x + (a.y - b.y) * point.x + (b.x - a.x) * point.y)
            / doubled_area;
        let u = 1.0 - s - t;

        s >= 0.0 && t >= 0.0 && u >= 0.0
    }
}

impl EdgeLengths {
    pub fn min(&self) -> f64 {
        self.a.min(self.b).min(self.c)
    }

    pub fn max(&self) -> f64 {
        self.a.max(self.b).max(self.c)
    }

    pub fn perimeter(&self) -> f64 {
        self.a + self.b + self.c
    }

    /// Strict triangle inequality on all three sides.
    pub fn satisfies_triangle_inequality(&self) -> bool {
        let EdgeLengths { a, b, c } = *self;
        a + b > c && a + c > b && b + c > a
    }

    /// Law of cosines. The angle at `C` is derived from the other two.
    pub fn angles(&self) -> Option<Angles> {
        let EdgeLengths { a, b, c } = *self;
        let bc = 2.0 * b * c;
        let ac = 2.0 * a * c;
        if bc.is_nan() || ac.is_nan() || bc <= 0.0 || ac <= 0.0 {
            return None;
        }

        let angle_a = ((b * b + c * c - a * a) / bc).clamp(-1.0, 1.0).acos();
        let angle_b = ((a * a + c * c - b * b) / ac).clamp(-1.0, 1.0).acos();
        let angle_c = PI - angle_a - angle_b;

        if !(angle_a.is_finite() && angle_b.is_finite() && angle_c.is_finite()) {
            return None;
        }

        Some(Angles {
            a: angle_a,
            b: angle_b,
            c: angle_c,
        })
    }

    /// Shape check applied to every sampled triangle:
    /// 1. strict triangle inequality
    /// 2. `max / min` edge ratio within bound
    /// 3. smallest angle not below the minimum
    pub fn is_well_shaped(&self, constraints: &ShapeConstraints) -> bool {
        if !self.satisfies_triangle_inequality() {
            return false;
        }

        let shortest = self.min();
        if shortest.is_nan() || shortest <= 0.0 {
            return false;
        }
        if self.max() / shortest > constraints.max_edge_ratio {
            return false;
        }

        match self.angles() {
            Some(angles) => angles.min() >= constraints.min_angle,
            None => false,
        }
    }
}

impl Angles {
    pub fn min(&self) -> f64 {
        self.a.min(self.b).min(self.c)
    }
}
