#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::super::{
        compute, CenterKind, GeneratorConfig, GeometryError, Point, ShapeConstraints, Triangle,
        TriangleGenerator,
    };

    const TOLERANCE: f64 = 1e-9;

    fn right_triangle() -> Triangle {
        Triangle::new([
            Point::new(0.0, 0.0),
            Point::new(6.0, 0.0),
            Point::new(0.0, 6.0),
        ])
    }

    fn assert_close(actual: Point, expected: Point, tolerance: f64) {
        assert!(
            actual.distance(expected) < tolerance,
            "expected {expected:?}, got {actual:?}"
        );
    }

    /// Orthocenter as the intersection of the altitudes from A and B.
    fn orthocenter_from_altitudes(triangle: &Triangle) -> Point {
        let [a, b, c] = triangle.vertices();
        let u = c - b;
        let v = c - a;
        let ua = u.x * a.x + u.y * a.y;
        let vb = v.x * b.x + v.y * b.y;
        let det = u.x * v.y - u.y * v.x;
        Point::new((ua * v.y - u.y * vb) / det, (u.x * vb - v.x * ua) / det)
    }

    #[test]
    fn test_centroid_of_right_triangle() {
        let centers = compute(&right_triangle()).unwrap();
        assert_close(centers.centroid(), Point::new(2.0, 2.0), TOLERANCE);
    }

    #[test]
    fn test_circumcenter_of_right_triangle() {
        let triangle = right_triangle();
        let centers = compute(&triangle).unwrap();
        let o = centers.circumcenter();
        assert_close(o, Point::new(3.0, 3.0), TOLERANCE);

        // equidistant from every vertex
        let [a, b, c] = triangle.vertices();
        assert!((o.distance(a) - o.distance(b)).abs() < TOLERANCE);
        assert!((o.distance(b) - o.distance(c)).abs() < TOLERANCE);
    }

    #[test]
    fn test_incenter_of_right_triangle() {
        let centers = compute(&right_triangle()).unwrap();
        let r = (6.0 + 6.0 - 6.0 * 2.0_f64.sqrt()) / 2.0;
        assert!((r - 1.757).abs() < 1e-3);
        assert_close(centers.incenter(), Point::new(r, r), TOLERANCE);
    }

    #[test]
    fn test_orthocenter_of_right_triangle_is_right_angle_vertex() {
        let centers = compute(&right_triangle()).unwrap();
        assert_close(centers.orthocenter(), Point::ZERO, TOLERANCE);
    }

    #[test]
    fn test_compute_is_deterministic() {
        let triangle = Triangle::new([
            Point::new(12.5, 480.25),
            Point::new(333.0, 41.0),
            Point::new(590.75, 402.5),
        ]);
        let first = compute(&triangle).unwrap();
        for _ in 0..10 {
            assert_eq!(compute(&triangle).unwrap(), first);
        }
    }

    #[test]
    fn test_collinear_points_are_degenerate() {
        let triangle = Triangle::new([
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
        ]);
        assert_eq!(compute(&triangle), Err(GeometryError::DegenerateTriangle));
    }

    #[test]
    fn test_coincident_points_are_degenerate() {
        let p = Point::new(5.0, 5.0);
        let triangle = Triangle::new([p, p, Point::new(9.0, 1.0)]);
        assert_eq!(compute(&triangle), Err(GeometryError::DegenerateTriangle));
    }

    #[test]
    fn test_tiny_triangle_still_has_centers() {
        // D is about 2e-16 here, but the points are not collinear
        let s = 1e-8;
        let triangle = Triangle::new([
            Point::new(0.0, 0.0),
            Point::new(s, 0.0),
            Point::new(0.0, s),
        ]);
        assert!(triangle.is_well_shaped(&ShapeConstraints::default()));

        let centers = compute(&triangle).unwrap();
        assert_close(centers.circumcenter(), Point::new(s / 2.0, s / 2.0), 1e-15);
        assert_close(centers.orthocenter(), Point::ZERO, 1e-15);
        assert!(triangle.contains_point(centers.centroid()));
        assert!(triangle.contains_point(centers.incenter()));
        assert!(!triangle.contains_point(Point::new(s, s)));
    }

    #[test]
    fn test_center_set_iterates_in_presentation_order() {
        let centers = compute(&right_triangle()).unwrap();
        let kinds: Vec<_> = centers.iter().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, CenterKind::ALL.to_vec());
        for (kind, point) in centers.iter() {
            assert_eq!(point, centers.get(kind));
        }
    }

    #[test]
    fn test_shape_check_rejects_needles_and_slivers() {
        let constraints = ShapeConstraints::default();

        // edge ratio close to 9
        let needle = Triangle::new([
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(5.0, 10.0),
        ]);
        assert!(!needle.is_well_shaped(&constraints));

        // ratio below 3 but an angle of roughly 7 degrees
        let sliver = Triangle::new([
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(40.0, 5.0),
        ]);
        let edges = sliver.edge_lengths();
        assert!(edges.max() / edges.min() <= 3.0);
        assert!(!sliver.is_well_shaped(&constraints));

        let equilateral = Triangle::new([
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(50.0, 50.0 * 3.0_f64.sqrt()),
        ]);
        assert!(equilateral.is_well_shaped(&constraints));
    }

    #[test]
    fn test_shape_check_rejects_collinear_and_coincident() {
        let constraints = ShapeConstraints::default();
        let collinear = Triangle::new([
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
        ]);
        assert!(!collinear.is_well_shaped(&constraints));

        let p = Point::new(3.0, 4.0);
        assert!(!Triangle::new([p, p, p]).is_well_shaped(&constraints));
    }

    #[test]
    fn test_angles_sum_to_pi() {
        let angles = right_triangle().angles().unwrap();
        assert!((angles.a - PI / 2.0).abs() < TOLERANCE);
        assert!((angles.b - PI / 4.0).abs() < TOLERANCE);
        assert!((angles.a + angles.b + angles.c - PI).abs() < TOLERANCE);
    }

    #[test]
    fn test_generated_triangles_are_valid_and_bounded() {
        let generator = TriangleGenerator::default();
        let constraints = generator.config().constraints;
        let (width, height) = (600.0, 400.0);

        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let triangle = generator.generate_with(&mut rng, width, height).unwrap();

            let edges = triangle.edge_lengths();
            assert!(edges.satisfies_triangle_inequality());
            assert!(edges.max() / edges.min() <= constraints.max_edge_ratio + TOLERANCE);
            let angles = triangle.angles().unwrap();
            assert!(angles.min() >= constraints.min_angle - TOLERANCE);

            for p in triangle.vertices() {
                assert!((0.0..=width).contains(&p.x), "x out of bounds: {p:?}");
                assert!((0.0..=height).contains(&p.y), "y out of bounds: {p:?}");
            }
        }
    }

    #[test]
    fn test_euler_line_matches_altitude_intersection() {
        let generator = TriangleGenerator::default();
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let triangle = generator.generate_with(&mut rng, 600.0, 600.0).unwrap();
            let centers = compute(&triangle).unwrap();
            assert_close(
                centers.orthocenter(),
                orthocenter_from_altitudes(&triangle),
                1e-6,
            );
        }
    }

    #[test]
    fn test_generation_is_reproducible_with_seed() {
        let generator = TriangleGenerator::default();
        let a = generator
            .generate_with(&mut ChaCha8Rng::seed_from_u64(42), 600.0, 600.0)
            .unwrap();
        let b = generator
            .generate_with(&mut ChaCha8Rng::seed_from_u64(42), 600.0, 600.0)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_area_region_times_out() {
        let generator = TriangleGenerator::new(GeneratorConfig {
            max_attempts: 50,
            ..Default::default()
        });
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(
            generator.generate_with(&mut rng, 0.0, 600.0),
            Err(GeometryError::GenerationTimeout { attempts: 50 })
        );
    }

    #[test]
    fn test_invalid_bounds_are_rejected() {
        let generator = TriangleGenerator::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!(matches!(
            generator.generate_with(&mut rng, -1.0, 600.0),
            Err(GeometryError::InvalidBounds { .. })
        ));
        assert!(matches!(
            generator.generate_with(&mut rng, 600.0, f64::NAN),
            Err(GeometryError::InvalidBounds { .. })
        ));
    }
}
