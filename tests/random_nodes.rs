use core::fmt::Debug;

use approx::{RelativeEq, assert_abs_diff_eq, assert_relative_eq};
use baryrat::interp::DynBarycentricRational;
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const N: usize = 500;

fn lit<T: Float>(v: f64) -> T {
    T::from(v).unwrap()
}

/// Abscissas starting in `[lo, hi)` with gaps drawn from `[lo, hi)`.
fn random_abscissas<T, R>(rng: &mut R, lo: T, hi: T) -> Vec<T>
where
    T: Float + SampleUniform,
    R: Rng,
{
    let mut x = Vec::with_capacity(N);
    x.push(rng.gen_range(lo..hi));
    for i in 1..N {
        let step = rng.gen_range(lo..hi);
        x.push(x[i - 1] + step);
    }
    x
}

/// Near-uniform grid from `-2` with gaps in `[0.005, 0.01)`, sampled from
/// Runge's function.
fn runge_samples<T, R>(rng: &mut R) -> (Vec<T>, Vec<T>)
where
    T: Float + SampleUniform,
    R: Rng,
{
    let mut x = Vec::with_capacity(N);
    x.push(lit::<T>(-2.0));
    for i in 1..N {
        let step = rng.gen_range(lit::<T>(0.005)..lit::<T>(0.01));
        x.push(x[i - 1] + step);
    }
    let y = x.iter().map(|&t| runge(t)).collect();
    (x, y)
}

fn runge<T: Float>(t: T) -> T {
    T::one() / (T::one() + lit::<T>(25.0) * t * t)
}

// ── Interpolation condition ──────────────────────────────────────────

fn check_interpolation_condition<T>(seed: u64, order: usize)
where
    T: Float + SampleUniform + Debug,
{
    let mut rng = StdRng::seed_from_u64(seed);
    let (lo, hi) = (lit::<T>(0.1), T::one());
    let x = random_abscissas(&mut rng, lo, hi);
    let y: Vec<T> = (0..N).map(|_| rng.gen_range(lo..hi)).collect();

    let interp = DynBarycentricRational::with_order(x.clone(), y.clone(), order).unwrap();
    assert_eq!(interp.order(), order);
    for i in 0..N {
        assert_eq!(interp.eval(x[i]), y[i], "node {i}, order {order}");
    }
}

#[test]
fn interpolation_condition_f32() {
    check_interpolation_condition::<f32>(0x5eed_0001, baryrat::DEFAULT_ORDER);
}

#[test]
fn interpolation_condition_f64() {
    check_interpolation_condition::<f64>(0x5eed_0002, baryrat::DEFAULT_ORDER);
}

#[test]
fn interpolation_condition_high_order_f32() {
    check_interpolation_condition::<f32>(0x5eed_0003, 5);
}

#[test]
fn interpolation_condition_high_order_f64() {
    check_interpolation_condition::<f64>(0x5eed_0004, 5);
    check_interpolation_condition::<f64>(0x5eed_0005, 7);
}

// ── Constant reproduction ────────────────────────────────────────────

fn check_constant<T>(seed: u64, constant: T, order: usize, tol: T)
where
    T: Float + SampleUniform + RelativeEq<Epsilon = T> + Debug,
{
    let mut rng = StdRng::seed_from_u64(seed);
    let (lo, hi) = (lit::<T>(0.1), T::one());
    let x = random_abscissas(&mut rng, lo, hi);
    let y = vec![constant; N];

    let interp = DynBarycentricRational::with_order(x.clone(), y, order).unwrap();
    for &xi in &x {
        // Off-node; the last one extrapolates
        let t = xi + rng.gen_range(lo..hi);
        let z = interp.eval(t);
        assert_relative_eq!(z, constant, max_relative = tol);
    }
}

#[test]
fn constant_f32() {
    check_constant::<f32>(0xc0_0001, -8.0, baryrat::DEFAULT_ORDER, f32::EPSILON.sqrt());
}

#[test]
fn constant_f64() {
    check_constant::<f64>(0xc0_0002, -8.0, baryrat::DEFAULT_ORDER, f64::EPSILON.sqrt());
}

#[test]
fn constant_high_order_f32() {
    check_constant::<f32>(0xc0_0003, 5.0, 7, 10.0 * f32::EPSILON.sqrt());
}

#[test]
fn constant_high_order_f64() {
    check_constant::<f64>(0xc0_0004, 5.0, 7, 10.0 * f64::EPSILON.sqrt());
}

// ── Runge's function ─────────────────────────────────────────────────

fn check_runge<T>(seed: u64)
where
    T: Float + SampleUniform + Debug,
{
    let mut rng = StdRng::seed_from_u64(seed);
    let (x, y) = runge_samples::<T, _>(&mut rng);

    let interp = DynBarycentricRational::with_order(x.clone(), y, 5).unwrap();
    for &xi in &x {
        let t = xi + rng.gen_range(lit::<T>(0.005)..lit::<T>(0.01));
        let z = interp.eval(t);
        assert_abs_diff_eq!(z.to_f64().unwrap(), runge(t).to_f64().unwrap(), epsilon = 0.02);
    }
}

#[test]
fn runge_f32() {
    check_runge::<f32>(0x2a_0001);
}

#[test]
fn runge_f64() {
    check_runge::<f64>(0x2a_0002);
}

#[test]
fn runge_f64_relative() {
    let mut rng = StdRng::seed_from_u64(0x2a_0003);
    let (x, y) = runge_samples::<f64, _>(&mut rng);

    let interp = DynBarycentricRational::with_order(x.clone(), y, 5).unwrap();
    for &xi in &x {
        let t = xi + rng.gen_range(0.005_f64..0.01);
        assert_relative_eq!(interp.eval(t), runge(t), max_relative = 2e-4);
    }
}

// ── Closed-form weights ──────────────────────────────────────────────

#[test]
fn weights_closed_form() {
    let mut rng = StdRng::seed_from_u64(0x3e_0001);
    let (x, y) = runge_samples::<f64, _>(&mut rng);

    let berrut = DynBarycentricRational::with_order(x.clone(), y.clone(), 0).unwrap();
    for i in 0..N {
        let expected = if i % 2 == 0 { 1.0 } else { -1.0 };
        assert_eq!(*berrut.weight(i), expected, "d = 0, weight {i}");
    }

    let linear = DynBarycentricRational::with_order(x.clone(), y, 1).unwrap();
    for i in 1..N - 1 {
        let magnitude = 1.0 / (x[i] - x[i - 1]) + 1.0 / (x[i + 1] - x[i]);
        let expected = if i % 2 == 0 { -magnitude } else { magnitude };
        assert_relative_eq!(*linear.weight(i), expected, max_relative = 1e-7);
    }
}

// ── Concurrent evaluation ────────────────────────────────────────────

#[test]
fn concurrent_evaluation_matches_serial() {
    let mut rng = StdRng::seed_from_u64(0x7a_0001);
    let (x, y) = runge_samples::<f64, _>(&mut rng);
    let interp = DynBarycentricRational::with_order(x, y, 4).unwrap();

    let queries: Vec<f64> = (0..400).map(|k| -2.0 + 0.009 * k as f64 + 1e-4).collect();
    let serial: Vec<f64> = queries.iter().map(|&t| interp.eval(t)).collect();

    let interp = &interp;
    std::thread::scope(|s| {
        let handles: Vec<_> = queries
            .chunks(100)
            .map(|chunk| s.spawn(move || chunk.iter().map(|&t| interp.eval(t)).collect::<Vec<_>>()))
            .collect();
        let parallel: Vec<f64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        assert_eq!(parallel, serial);
    });
}
