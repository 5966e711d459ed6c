use num_traits::Num;

/// Trait for types that can be used as abscissas, values, and weights.
///
/// Blanket-implemented for all types satisfying the bounds. Covers `f32`,
/// `f64`, and software number types such as `num_rational::BigRational`.
///
/// Only arithmetic, ordering, and the constants `zero()` / `one()` are needed.
/// `Copy` is not required, so heap-backed arbitrary-precision types qualify.
pub trait Scalar: Clone + PartialOrd + Num {}

impl<T: Clone + PartialOrd + Num> Scalar for T {}

/// `(-1)^k` as a value of `T`.
#[inline]
pub(crate) fn alternating_sign<T: Scalar>(k: usize) -> T {
    if k % 2 == 0 { T::one() } else { T::zero() - T::one() }
}
