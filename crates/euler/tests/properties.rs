//! Algebraic properties checked over seeded random inputs, for every scalar kind.

use approx::assert_relative_eq;
use euler::*;

const ITERATIONS: usize = 1000;

fn rng() -> fastrand::Rng {
    fastrand::Rng::with_seed(0x5EED_0F_E1_1E5)
}

fn small_i32(rng: &mut fastrand::Rng) -> i32 {
    rng.i32(-10_000..=10_000)
}

/// Integer-valued floats, so that sums and differences stay exact.
fn integral_f32(rng: &mut fastrand::Rng) -> f32 {
    small_i32(rng) as f32
}

fn any_f64(rng: &mut fastrand::Rng) -> f64 {
    (rng.f64() - 0.5) * 2.0e6
}

#[test]
fn add_then_subtract_is_identity() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = Vec3i::from_fn(|_| small_i32(&mut rng));
        assert_eq!(a + a - a, a);

        let a = Vec4u::from_fn(|_| rng.u32(0..1 << 30));
        assert_eq!(a + a - a, a);

        let a = Vec2f::from_fn(|_| integral_f32(&mut rng));
        assert_eq!(a + a - a, a);

        let mut b = Vec4f::from_fn(|_| integral_f32(&mut rng));
        let orig = b;
        b += orig;
        b -= orig;
        assert_eq!(b, orig);
    }
}

#[test]
fn integer_arithmetic_wraps_around() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = Vec4u::from_fn(|_| rng.u32(..));
        let b = Vec4u::from_fn(|_| rng.u32(..));
        assert_eq!(a + b - b, a);
        assert_eq!(a - b + b, a);
        assert_eq!(a + b, a.zip(b).map(|(l, r)| l.wrapping_add(r)));

        let a = Vec3i::from_fn(|_| rng.i32(..));
        let b = Vec3i::from_fn(|_| rng.i32(..));
        assert_eq!(a - b + b, a);
        assert_eq!(a * 3, a.map(|e| e.wrapping_mul(3)));
        let dot = a
            .zip(b)
            .into_array()
            .into_iter()
            .fold(0i32, |sum, (l, r)| sum.wrapping_add(l.wrapping_mul(r)));
        assert_eq!(a.dot(b), dot);
    }
}

#[test]
fn multiply_by_one_is_identity() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = Vec2i::from_fn(|_| rng.i32(..));
        assert_eq!(a * 1, a);

        let a = Vec3u::from_fn(|_| rng.u32(..));
        assert_eq!(a * 1, a);

        let a = Vec4d::from_fn(|_| any_f64(&mut rng));
        assert_eq!(a * 1.0, a);

        let a = Vec3f::from_fn(|_| rng.f32());
        assert_eq!(a * 1.0, a);
        assert_eq!(a / 1.0, a);
    }
}

#[test]
fn negation_is_an_involution() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = Vec4i::from_fn(|_| rng.i32(i32::MIN + 1..));
        assert_eq!(-(-a), a);

        let a = Vec2d::from_fn(|_| any_f64(&mut rng));
        assert_eq!(-(-a), a);
    }
}

#[test]
fn scalar_multiplication_commutes() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let k = small_i32(&mut rng);
        let v = Vec3i::from_fn(|_| small_i32(&mut rng));
        assert_eq!(k * v, v * k);

        let k = rng.u32(0..1 << 16);
        let v = Vec2u::from_fn(|_| rng.u32(0..1 << 16));
        assert_eq!(k * v, v * k);

        let k = rng.f32();
        let v = Vec4f::from_fn(|_| rng.f32());
        assert_eq!(k * v, v * k);

        let k = any_f64(&mut rng);
        let v = Vec3d::from_fn(|_| any_f64(&mut rng));
        assert_eq!(k * v, v * k);
    }
}

#[test]
fn float_division_multiplies_by_reciprocal() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let k = rng.f32() + 0.01;
        let v = Vec4f::from_fn(|_| rng.f32() * 100.0);
        assert_eq!(v / k, v * (1.0 / k));

        let mut w = v;
        w /= k;
        assert_eq!(w, v * (1.0 / k));

        let k = any_f64(&mut rng);
        let v = Vec3d::from_fn(|_| any_f64(&mut rng));
        assert_eq!(v / k, v * (1.0 / k));
    }

    assert_eq!(vec2(6.0f32, 2.0) / 0.1, vec2(60.0, 20.0));
}

#[test]
fn float_division_by_zero_is_not_finite() {
    let v = vec3(1.0f32, -1.0, 0.0) / 0.0;
    assert_eq!(v.x(), f32::INFINITY);
    assert_eq!(v.y(), f32::NEG_INFINITY);
    assert!(v.z().is_nan());
}

#[test]
fn integer_division_truncates() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let k = rng.i32(1..100) * if rng.bool() { 1 } else { -1 };
        let v = Vec4i::from_fn(|_| small_i32(&mut rng));
        assert_eq!(v / k, v.map(|e| e / k));

        let k = rng.u32(1..100);
        let v = Vec2u::from_fn(|_| rng.u32(..));
        assert_eq!(v / k, v.map(|e| e / k));
    }
}

#[test]
#[should_panic]
fn integer_division_by_zero_panics() {
    let mut v = vec3(1u32, 2, 3);
    v /= 0;
}

#[test]
fn normalized_vectors_have_unit_length() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let v = Vec3f::from_fn(|_| rng.f32() + 0.1);
        assert_relative_eq!(length_square(normalize(v)), 1.0, max_relative = 1.0e-5);

        let v = Vec4d::from_fn(|_| any_f64(&mut rng) + 1.0e7);
        assert_relative_eq!(length_square(normalize(v)), 1.0, max_relative = 1.0e-12);
        assert_relative_eq!(normalize(v).length(), 1.0, max_relative = 1.0e-12);
    }
}

#[test]
fn abs_strips_sign() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let v = Vec3i::from_fn(|_| small_i32(&mut rng));
        let a = abs(v);
        for i in 0..3 {
            assert_eq!(a[i], v[i].abs());
        }
        assert_eq!(abs(-v), a);

        let v = Vec2u::from_fn(|_| rng.u32(..));
        assert_eq!(abs(v), v);
    }

    assert_eq!(abs(vec3(-3.0f32, -4.0, -5.0)), vec3(3.0, 4.0, 5.0));
    assert_eq!(abs(vec3(-14.0f64, 0.0, 6.0)), vec3(14.0, 0.0, 6.0));
}

#[test]
fn max_min_extract_elements() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let v = Vec4i::from_fn(|_| small_i32(&mut rng));
        let arr = v.into_array();
        assert_eq!(max(v), arr.into_iter().max().unwrap());
        assert_eq!(min(v), arr.into_iter().min().unwrap());
        assert!(v.as_slice().contains(&max(v)));
    }
}

#[test]
fn indexed_and_named_access_alias() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let mut v = Vec4f::from_fn(|_| rng.f32());
        assert_eq!([v.x(), v.y(), v.z(), v.w()], v.into_array());
        for i in 0..4 {
            assert_eq!(v[i], v.get(i));
        }

        let before = v;
        let i = rng.usize(0..4);
        let x = rng.f32() + 2.0;
        v.set(i, x);
        assert_eq!(v[i], x);
        for j in (0..4).filter(|&j| j != i) {
            assert_eq!(v[j], before[j]);
        }
    }

    let mut v = Vec3u::ZERO;
    v.set_const::<0>(1).set_y(2).set(2, 3);
    assert_eq!(v, vec3(1, 2, 3));
    assert_eq!(v.get_const::<2>(), v.z());
}

#[test]
fn equality_is_exact() {
    let a = vec3(0.1f32, 0.2, 0.3);
    let b = vec3(0.1f32, 0.2, 0.3);
    assert_eq!(a, b);

    let mut c = a;
    c.set_z(f32::from_bits(a.z().to_bits() + 1));
    assert_ne!(a, c);

    let d = vec2(1.0f64, 2.0);
    let e = vec2(1.0f64, f64::from_bits(2.0f64.to_bits() - 1));
    assert_ne!(d, e);

    assert_ne!(vec4(1, 2, 3, 4), vec4(1, 2, 3, 5));
}
