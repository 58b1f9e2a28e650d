use std::f32::consts::{FRAC_PI_2, PI};

use proptest::prelude::*;

use super::*;
use crate::EPS;

#[test]
fn axes_are_unit_basis_vectors() {
    assert_eq!(x_axis::<3>(), Vec3::from_components([1.0, 0.0, 0.0]));
    assert_eq!(y_axis::<3>(), Vec3::from_components([0.0, 1.0, 0.0]));
    assert_eq!(z_axis::<3>(), Vec3::from_components([0.0, 0.0, 1.0]));
    assert_eq!(axis::<4>(3), Vec4::from_components([0.0, 0.0, 0.0, 1.0]));
}

#[test]
fn component_accessors() {
    let v = Vec4::from_components([1.0, 2.0, 3.0, 4.0]);
    assert_eq!((v.x(), v.y(), v.z(), v.w()), (1.0, 2.0, 3.0, 4.0));
    assert_eq!(v.component(2), 3.0);
    let v2 = Vec2::from_components([5.0, 6.0]);
    assert_eq!((v2.x(), v2.y()), (5.0, 6.0));
}

#[test]
fn dot_products() {
    let a = Vec3::from_components([1.0, 2.0, 3.0]);
    let b = Vec3::from_components([4.0, -5.0, 6.0]);
    assert_eq!(dot(&a, &b), 12.0);
    // Orthogonal basis vectors.
    assert_eq!(dot(&x_axis::<3>(), &y_axis::<3>()), 0.0);
}

#[test]
fn cross_of_x_and_y_is_z() {
    let c = cross(&x_axis::<3>(), &y_axis::<3>());
    assert_eq!(c, z_axis::<3>());
    // Anti-commutes.
    assert_eq!(cross(&y_axis::<3>(), &x_axis::<3>()), -z_axis::<3>());
}

#[test]
fn magnitude_of_pythagorean_triple() {
    let v = Vec3::from_components([3.0, 4.0, 0.0]);
    assert!((magnitude(&v) - 5.0).abs() < 1e-6);
    assert_eq!(magnitude(&Vec3::zeros()), 0.0);
}

#[test]
fn normalize_near_zero_degrades_to_zero_vector() {
    assert_eq!(normalize(&Vec3::zeros()), Vec3::zeros());
    let tiny = Vec3::from_components([EPS / 2.0, 0.0, 0.0]);
    assert_eq!(normalize(&tiny), Vec3::zeros());
    // Just above the guard it normalizes normally.
    let small = Vec3::from_components([2.0 * EPS, 0.0, 0.0]);
    assert!((magnitude(&normalize(&small)) - 1.0).abs() < 1e-5);
}

#[test]
fn angle_between_clamps_the_cosine() {
    // Parallel vectors whose cosine can land just above 1 under round-off.
    let a = Vec3::from_components([0.1, 0.2, 0.3]);
    let b = a * 3.0;
    let angle = angle_between(&a, &b);
    assert!(angle.is_finite());
    assert!(angle.abs() < 1e-3);
    // Anti-parallel: π, not NaN.
    let angle_opp = angle_between(&a, &(-b));
    assert!((angle_opp - PI).abs() < 1e-3);
}

#[test]
fn angle_between_right_angle() {
    let angle = angle_between(&x_axis::<3>(), &y_axis::<3>());
    assert!((angle - FRAC_PI_2).abs() < 1e-6);
}

#[test]
fn angle_between_degenerate_operand_is_zero() {
    let v = Vec3::from_components([1.0, 0.0, 0.0]);
    assert_eq!(angle_between(&v, &Vec3::zeros()), 0.0);
    assert_eq!(angle_between(&Vec3::zeros(), &v), 0.0);
}

#[test]
fn resize_pads_and_truncates() {
    let v3 = Vec3::from_components([1.0, 2.0, 3.0]);
    let v4: Vec4 = resize(&v3);
    assert_eq!(v4, Vec4::from_components([1.0, 2.0, 3.0, 0.0]));
    let v2: Vec2 = resize(&v3);
    assert_eq!(v2, Vec2::from_components([1.0, 2.0]));
}

fn vec3(c: [f32; 3]) -> Vec3 {
    Vec3::from_components(c)
}

proptest! {
    #[test]
    fn cross_is_orthogonal_to_operands(
        a in prop::array::uniform3(-10.0f32..10.0),
        b in prop::array::uniform3(-10.0f32..10.0),
    ) {
        let (va, vb) = (vec3(a), vec3(b));
        let c = cross(&va, &vb);
        prop_assert!(dot(&c, &va).abs() < 1e-2);
        prop_assert!(dot(&c, &vb).abs() < 1e-2);
    }

    #[test]
    fn normalize_yields_unit_magnitude(a in prop::array::uniform3(-10.0f32..10.0)) {
        let v = vec3(a);
        if magnitude(&v) > EPS {
            prop_assert!((magnitude(&normalize(&v)) - 1.0).abs() < 1e-4);
        } else {
            prop_assert_eq!(normalize(&v), Vec3::zeros());
        }
    }

    #[test]
    fn angle_between_never_nan(
        a in prop::array::uniform3(-10.0f32..10.0),
        b in prop::array::uniform3(-10.0f32..10.0),
    ) {
        let angle = angle_between(&vec3(a), &vec3(b));
        prop_assert!(angle.is_finite());
        prop_assert!((0.0..=PI + 1e-6).contains(&angle));
    }

    #[test]
    fn dot_is_symmetric(
        a in prop::array::uniform3(-10.0f32..10.0),
        b in prop::array::uniform3(-10.0f32..10.0),
    ) {
        let (va, vb) = (vec3(a), vec3(b));
        prop_assert_eq!(dot(&va, &vb), dot(&vb, &va));
    }
}
