use glam::{Mat4, Vec3};
use quadric_beach::{Quadric, QuadricMatrix, SceneError, Transform};

fn sample_transforms() -> Vec<Transform> {
    vec![
        Transform::identity().translate(Vec3::new(1.0, -2.0, 3.5)),
        Transform::identity().scale(Vec3::new(2.0, 0.5, 3.0)),
        Transform::identity().rotate(0.7, Vec3::new(1.0, 1.0, 0.0)),
        Transform::identity()
            .scale(Vec3::new(3.0, 1.0, 3.0))
            .translate(Vec3::new(0.0, 2.01, 0.0))
            .rotate(2.0, Vec3::new(0.25, 1.0, -0.15))
            .translate(Vec3::new(2.0, 4.0, 2.0)),
    ]
}

fn sample_points() -> Vec<Vec3> {
    vec![
        Vec3::ZERO,
        Vec3::X,
        Vec3::new(0.3, -0.4, 0.5),
        Vec3::new(-2.0, 1.0, 0.25),
        Vec3::new(0.0, 0.0, 1.0),
    ]
}

fn ellipsoid() -> QuadricMatrix {
    QuadricMatrix::from_coefficients([
        1.0, 0.2, 0.0, 0.1, //
        0.2, 2.0, 0.0, 0.0, //
        0.0, 0.0, 0.5, -0.3, //
        0.1, 0.0, -0.3, -1.0,
    ])
}

#[cfg(test)]
mod conjugation_tests {
    use super::*;

    #[test]
    fn test_transformed_value_equals_original_at_preimage() {
        let original = ellipsoid();
        for trafo in sample_transforms() {
            let mut moved = original;
            moved.transform(trafo).unwrap();

            for p in sample_points() {
                let image = trafo.transform_point(p);
                let expected = original.evaluate(p);
                let actual = moved.evaluate(image);
                assert!(
                    (expected - actual).abs() < 1e-3 * (1.0 + expected.abs()),
                    "q'(M p) = {} but q(p) = {} for p = {:?}",
                    actual,
                    expected,
                    p
                );
            }
        }
    }

    #[test]
    fn test_identity_leaves_matrix_unchanged() {
        let mut q = ellipsoid();
        q.transform(Transform::identity()).unwrap();
        assert!(q.abs_diff_eq(&ellipsoid(), 1e-6));
    }

    #[test]
    fn test_transform_preserves_symmetry() {
        for trafo in sample_transforms() {
            let mut q = ellipsoid();
            q.transform(trafo).unwrap();
            assert!(q.is_symmetric(1e-6));
        }
    }

    #[test]
    fn test_singular_transform_is_rejected_untouched() {
        let mut q = QuadricMatrix::unit_sphere();
        let flatten = Transform::identity().scale(Vec3::new(1.0, 0.0, 1.0));

        let err = q.transform(flatten).unwrap_err();

        assert!(matches!(err, SceneError::SingularTransform { .. }));
        assert_eq!(q, QuadricMatrix::unit_sphere());
    }

    #[test]
    fn test_quadric_transform_is_all_or_nothing() {
        let mut quadric = Quadric::new(QuadricMatrix::unit_sphere(), QuadricMatrix::unit_slab(), 3.0);
        let before = quadric;
        assert!(quadric.transform(Mat4::ZERO).is_err());
        assert_eq!(quadric, before);
    }
}

#[cfg(test)]
mod composition_tests {
    use super::*;

    #[test]
    fn test_sequence_equals_composed_product() {
        let m1 = Transform::identity().scale(Vec3::new(2.0, 1.0, 0.5));
        let m2 = Transform::identity().translate(Vec3::new(0.0, 3.0, -1.0));

        let mut stepwise = QuadricMatrix::unit_sphere();
        stepwise.transform(m1).unwrap().transform(m2).unwrap();

        let mut composed = QuadricMatrix::unit_sphere();
        composed.transform(m2.matrix() * m1.matrix()).unwrap();

        assert!(stepwise.abs_diff_eq(&composed, 1e-5));
    }

    #[test]
    fn test_order_matters() {
        let m1 = Transform::identity().scale(Vec3::new(2.0, 1.0, 0.5));
        let m2 = Transform::identity().translate(Vec3::new(0.0, 3.0, -1.0));

        let mut scale_then_move = QuadricMatrix::unit_sphere();
        scale_then_move.transform(m2.matrix() * m1.matrix()).unwrap();

        let mut move_then_scale = QuadricMatrix::unit_sphere();
        move_then_scale.transform(m1.matrix() * m2.matrix()).unwrap();

        assert!(!scale_then_move.abs_diff_eq(&move_then_scale, 1e-3));
    }

    #[test]
    fn test_builder_chain_matches_manual_product() {
        let chained = Transform::identity()
            .scale(Vec3::splat(2.0))
            .translate(Vec3::new(1.0, 0.0, 0.0));
        let manual = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0)) * Mat4::from_scale(Vec3::splat(2.0));
        assert!(chained.matrix().abs_diff_eq(manual, 1e-6));
    }
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_scaled_and_moved_sphere() {
        let mut q = QuadricMatrix::unit_sphere();
        q.transform(
            Transform::identity()
                .scale(Vec3::splat(2.0))
                .translate(Vec3::new(5.0, 0.0, 0.0)),
        )
        .unwrap();

        // Radius 2 around (5, 0, 0)
        assert!(q.evaluate(Vec3::new(7.0, 0.0, 0.0)).abs() < 1e-5);
        assert!(q.evaluate(Vec3::new(5.0, 2.0, 0.0)).abs() < 1e-5);
        assert!(q.evaluate(Vec3::new(5.0, 0.0, 0.0)) < 0.0);
        assert!(q.evaluate(Vec3::ZERO) > 0.0);
    }

    #[test]
    fn test_clipped_slab_keeps_band() {
        let mut quadric = Quadric::new(
            QuadricMatrix::unit_sphere(),
            QuadricMatrix::unit_slab(),
            10.0,
        );
        quadric
            .transform(Transform::identity().translate(Vec3::new(0.0, 2.0, 0.0)))
            .unwrap();

        assert!(quadric.is_visible_at(Vec3::new(1.0, 2.0, 0.0), 1e-5));
        assert!(!quadric.is_clipped_in(Vec3::new(0.0, 3.5, 0.0)));
        assert!(quadric.is_clipped_in(Vec3::new(0.0, 1.5, 0.0)));
    }
}
