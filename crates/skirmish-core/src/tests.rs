#[cfg(test)]
mod tests {
    use crate::constants::DRIFT_BOUND;
    use crate::enums::{CraftMode, Outcome};
    use crate::error::SimError;
    use crate::report::SimReport;
    use crate::types::Vec3;

    // ---- Vector arithmetic ----

    #[test]
    fn test_vec3_componentwise_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 2.0);

        assert_eq!(a + b, Vec3::new(-3.0, 2.5, 5.0));
        assert_eq!(a - b, Vec3::new(5.0, 1.5, 1.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
    }

    #[test]
    fn test_vec3_magnitude() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert!((v.magnitude() - 5.0).abs() < 1e-10);
        assert_eq!(Vec3::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_vec3_dot() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(a.dot(&b), 0.0);
        assert_eq!(a.dot(&a), 1.0);
    }

    // ---- Normalization ----

    #[test]
    fn test_to_unit_has_unit_magnitude() {
        let vectors = vec![
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(3.0, -4.0, 12.0),
            Vec3::new(-0.001, 0.002, 0.0005),
            Vec3::new(1e8, -2e8, 3e8),
        ];
        for v in vectors {
            let unit = v.to_unit().unwrap();
            assert!(
                (unit.magnitude() - 1.0).abs() < 1e-12,
                "unit magnitude should be 1, got {} for {v:?}",
                unit.magnitude()
            );
        }
    }

    #[test]
    fn test_to_unit_zero_vector_is_checked_error() {
        assert_eq!(Vec3::ZERO.to_unit(), Err(SimError::DivisionByZero));
    }

    #[test]
    fn test_normal_toward_points_at_other() {
        let from = Vec3::new(1.0, 1.0, 1.0);
        let to = Vec3::new(1.0, 5.0, 1.0);
        let n = from.normal_toward(&to).unwrap();
        assert!((n.x).abs() < 1e-12);
        assert!((n.y - 1.0).abs() < 1e-12);
        assert!((n.z).abs() < 1e-12);
    }

    #[test]
    fn test_normal_toward_coincident_points_is_checked_error() {
        let p = Vec3::new(2.0, 3.0, 4.0);
        assert_eq!(p.normal_toward(&p), Err(SimError::DivisionByZero));
    }

    // ---- Angles ----

    #[test]
    fn test_angle_between_orthogonal() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 7.0, 0.0);
        let angle = a.angle_between(&b).unwrap();
        assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_angle_between_parallel_and_opposite() {
        let a = Vec3::new(2.0, 0.0, 0.0);
        let b = Vec3::new(5.0, 0.0, 0.0);
        assert!(a.angle_between(&b).unwrap().abs() < 1e-12);

        let c = Vec3::new(-1.0, 0.0, 0.0);
        let angle = a.angle_between(&c).unwrap();
        assert!((angle - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_angle_between_zero_vector_is_checked_error() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(a.angle_between(&Vec3::ZERO), Err(SimError::DivisionByZero));
        assert_eq!(Vec3::ZERO.angle_between(&a), Err(SimError::DivisionByZero));
    }

    #[test]
    fn test_angle_between_never_nan_near_parallel() {
        // Rounding can push the raw cosine past 1; the clamp keeps acos finite.
        let a = Vec3::new(1.0, 1.0, 1.0);
        let b = a * (1.0 + 1e-15);
        let angle = a.angle_between(&b).unwrap();
        assert!(angle.is_finite(), "near-parallel angle should be finite");
    }

    // ---- Serde round-trips ----

    #[test]
    fn test_craft_mode_serde() {
        let variants = vec![CraftMode::Neutral, CraftMode::Offense, CraftMode::Defense];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: CraftMode = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_outcome_serde() {
        let variants = vec![Outcome::Peace, Outcome::Destruction];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: Outcome = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_report_serde() {
        let report = SimReport {
            outcome: Outcome::Destruction,
            end_step: 4,
            history: vec![
                vec![Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO],
                vec![Vec3::new(9.0, 0.5, 0.0), Vec3::new(1.0, 0.0, 0.0)],
            ],
        };
        let json = serde_json::to_string(&report).unwrap();
        let back: SimReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }

    // ---- Constants sanity ----

    #[test]
    fn test_drift_bound_positive() {
        assert!(DRIFT_BOUND > 0.0);
    }
}
