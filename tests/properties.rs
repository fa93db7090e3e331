//! Property tests over the math and collision invariants

use proptest::prelude::*;
use std::f64::consts::TAU;

use vectile::collision::{self, MovingBody};
use vectile::matrix::{Mat3, Mat4};
use vectile::shape::Circle;
use vectile::vec::Vec2;
use vectile::wrap_angle;

fn finite_coord() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6
}

fn vec2() -> impl Strategy<Value = Vec2> {
    (finite_coord(), finite_coord()).prop_map(|(x, y)| Vec2::new(x, y))
}

proptest! {
    #[test]
    fn additive_inverse_cancels(v in vec2()) {
        let sum = v + -v;
        prop_assert_eq!(sum, Vec2::ZERO);
    }

    #[test]
    fn normalize_yields_unit_or_zero(v in vec2()) {
        let n = v.normalize_or_zero();
        if v == Vec2::ZERO {
            prop_assert_eq!(n, Vec2::ZERO);
        } else {
            prop_assert!((n.length() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn rotate_preserves_length(v in vec2(), theta in -10.0..10.0f64) {
        let rotated = v.rotate(theta);
        prop_assert!((rotated.length() - v.length()).abs() < v.length().max(1.0) * 1e-9);
    }

    #[test]
    fn rotation_matrix_matches_rotate(v in vec2(), theta in -10.0..10.0f64) {
        let m = Mat3::rotation(theta);
        let a = m.mul_vec2(v);
        let b = v.rotate(theta);
        let scale = v.length().max(1.0);
        prop_assert!((a.x - b.x).abs() < scale * 1e-9);
        prop_assert!((a.y - b.y).abs() < scale * 1e-9);
    }

    #[test]
    fn transpose_is_an_involution(values in prop::array::uniform16(-100.0..100.0f64)) {
        let mut rows = [[0.0; 4]; 4];
        for (i, v) in values.iter().enumerate() {
            rows[i / 4][i % 4] = *v;
        }
        let m = Mat4::new(rows);
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn wrap_angle_lands_in_range(a in -1000.0..1000.0f64) {
        let w = wrap_angle(a);
        prop_assert!((0.0..TAU).contains(&w));
    }

    #[test]
    fn circle_overlap_is_symmetric(
        a in vec2(), ra in 0.0..100.0f64,
        b in vec2(), rb in 0.0..100.0f64,
    ) {
        let ca = Circle { center: a, radius: ra };
        let cb = Circle { center: b, radius: rb };
        prop_assert_eq!(
            collision::circle_overlap(&ca, &cb),
            collision::circle_overlap(&cb, &ca)
        );
    }

    #[test]
    fn elastic_collision_conserves_momentum_and_energy(
        vel_a in (-50.0..50.0f64, -50.0..50.0f64),
        vel_b in (-50.0..50.0f64, -50.0..50.0f64),
        mass_a in 0.1..10.0f64,
        mass_b in 0.1..10.0f64,
    ) {
        let mut a = MovingBody::with_mass(Vec2::ZERO, 1.0, mass_a);
        let mut b = MovingBody::with_mass(Vec2::new(1.5, 0.0), 1.0, mass_b);
        a.vel = Vec2::new(vel_a.0, vel_a.1);
        b.vel = Vec2::new(vel_b.0, vel_b.1);

        let momentum_before = a.vel * mass_a + b.vel * mass_b;
        let energy_before = mass_a * a.vel.length_squared() + mass_b * b.vel.length_squared();

        collision::resolve_elastic(&mut a, &mut b);

        let momentum_after = a.vel * mass_a + b.vel * mass_b;
        let energy_after = mass_a * a.vel.length_squared() + mass_b * b.vel.length_squared();

        prop_assert!((momentum_after.x - momentum_before.x).abs() < 1e-6);
        prop_assert!((momentum_after.y - momentum_before.y).abs() < 1e-6);
        prop_assert!((energy_after - energy_before).abs() < energy_before.max(1.0) * 1e-9);
    }
}
