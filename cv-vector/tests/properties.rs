use approx::assert_relative_eq;
use cv_vector::{EulerAngles, Vector3D, SNAP_EPSILON};
use float_eq::assert_float_eq;
use proptest::prelude::*;

const EPSILON_APPROX: f32 = 1e-4;

fn component() -> impl Strategy<Value = f32> {
    -100.0f32..100.0
}

fn vector() -> impl Strategy<Value = Vector3D> {
    (component(), component(), component()).prop_map(|(x, y, z)| Vector3D::new(x, y, z))
}

/// Vectors long enough that normalizing them is well conditioned.
fn nonzero_vector() -> impl Strategy<Value = Vector3D> {
    vector().prop_filter("length too small", |v| v.length() > 1e-2)
}

fn angle() -> impl Strategy<Value = f32> {
    -core::f32::consts::PI..core::f32::consts::PI
}

proptest! {
    #[test]
    fn adding_negation_gives_zero(v in vector()) {
        prop_assert_eq!(v + (-v), Vector3D::zeros());
    }

    #[test]
    fn dot_is_commutative(a in vector(), b in vector()) {
        prop_assert_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn cross_is_anti_commutative(a in vector(), b in vector()) {
        prop_assert_eq!(a.cross(b), -b.cross(a));
    }

    #[test]
    fn cross_is_orthogonal(a in vector(), b in vector()) {
        let c = a.cross(b);
        // Scale the tolerance with the magnitudes involved.
        let tolerance = 1e-5 * a.length() * b.length() * (a.length() + b.length()) + 1e-5;
        prop_assert!(c.dot(a).abs() <= tolerance);
        prop_assert!(c.dot(b).abs() <= tolerance);
    }

    #[test]
    fn normalized_has_unit_length(v in nonzero_vector()) {
        assert_float_eq!(v.normalize().length(), 1.0, abs <= 1e-5);
    }

    #[test]
    fn normalize_mut_agrees_with_normalize(v in nonzero_vector()) {
        let mut m = v;
        m.normalize_mut();
        prop_assert_eq!(m, v.normalize());
    }

    #[test]
    fn reflection_preserves_length(v in vector(), n in nonzero_vector()) {
        assert_relative_eq!(v.reflect(n).length(), v.length(), epsilon = EPSILON_APPROX, max_relative = EPSILON_APPROX);
    }

    #[test]
    fn reflecting_twice_is_identity(v in vector(), n in nonzero_vector()) {
        assert_relative_eq!(v.reflect(n).reflect(n), v, epsilon = 1e-3, max_relative = EPSILON_APPROX);
    }

    #[test]
    fn reflection_ignores_normal_length(v in vector(), n in nonzero_vector(), scale in 0.5f32..20.0) {
        assert_relative_eq!(v.reflect(n * scale), v.reflect(n), epsilon = 1e-3, max_relative = EPSILON_APPROX);
    }

    #[test]
    fn zero_angle_only_snaps(v in vector()) {
        prop_assert_eq!(v.rotate_yaw(0.0), v.snapped());
        prop_assert_eq!(v.rotate_pitch(0.0), v.snapped());
        prop_assert_eq!(v.rotate_roll(0.0), v.snapped());
    }

    #[test]
    fn tiny_angles_barely_move(v in vector(), theta in -SNAP_EPSILON..SNAP_EPSILON) {
        let tolerance = 1e-4;
        assert_relative_eq!(v.rotate_yaw(theta), v.snapped(), epsilon = tolerance);
        assert_relative_eq!(v.rotate_pitch(theta), v.snapped(), epsilon = tolerance);
        assert_relative_eq!(v.rotate_roll(theta), v.snapped(), epsilon = tolerance);
    }

    #[test]
    fn rotating_back_restores_vector(v in vector(), theta in angle()) {
        let tolerance = 1e-3;
        assert_relative_eq!(v.rotate_yaw(theta).rotate_yaw(-theta), v, epsilon = tolerance);
        assert_relative_eq!(v.rotate_pitch(theta).rotate_pitch(-theta), v, epsilon = tolerance);
        assert_relative_eq!(v.rotate_roll(theta).rotate_roll(-theta), v, epsilon = tolerance);
    }

    #[test]
    fn euler_rotation_preserves_length(v in vector(), roll in angle(), pitch in angle(), yaw in angle()) {
        let r = EulerAngles::new(roll, pitch, yaw).rotate(v);
        assert_relative_eq!(r.length(), v.length(), epsilon = 1e-3);
    }

    #[test]
    fn equality_matches_components(a in vector(), b in vector()) {
        let same = a.x == b.x && a.y == b.y && a.z == b.z;
        prop_assert_eq!(a == b, same);
        prop_assert_eq!(a != b, !same);
    }
}

#[test]
fn light_straight_down_bounces_straight_up() {
    let light = Vector3D::new(0.0, -1.0, 0.0);
    let normal = Vector3D::new(0.0, 1.0, 0.0);
    assert_eq!(light.reflect(normal), Vector3D::new(0.0, 1.0, 0.0));
}

#[test]
fn cross_of_x_and_y_is_exactly_z() {
    let c = Vector3D::new(1.0, 0.0, 0.0).cross(Vector3D::new(0.0, 1.0, 0.0));
    assert_eq!(c, Vector3D::new(0.0, 0.0, 1.0));
}

#[test]
fn dot_of_one_two_three_and_four_five_six() {
    assert_eq!(Vector3D::new(1.0, 2.0, 3.0).dot(Vector3D::new(4.0, 5.0, 6.0)), 32.0);
}

#[test]
fn yaw_quarter_turn_of_x_axis() {
    let r = Vector3D::new(1.0, 0.0, 0.0).rotate_yaw(core::f32::consts::FRAC_PI_2);
    assert_eq!(r.x, 0.0);
    assert_relative_eq!(r, Vector3D::new(0.0, 1.0, 0.0));
}

#[test]
fn one_ulp_breaks_equality() {
    let a = Vector3D::new(1.0, 2.0, 3.0);
    let b = Vector3D::new(1.0, f32::from_bits(2.0f32.to_bits() + 1), 3.0);
    assert_eq!(a, Vector3D::new(1.0, 2.0, 3.0));
    assert_ne!(a, b);
}

#[test]
fn displays_as_tuple() {
    assert_eq!(Vector3D::new(1.5, -2.0, 0.0).to_string(), "(1.5, -2, 0)");
}
