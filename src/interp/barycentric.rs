use crate::traits::Scalar;

use super::weights::floater_hormann_weight;
use super::{DEFAULT_ORDER, InterpError, effective_order, validate_sorted};

/// Floater–Hormann barycentric rational interpolant (fixed-size, stack-allocated).
///
/// Precomputes weights in O(N·d), then evaluates in O(N). Pole-free on the
/// real line for every blending order `d`. Requires at least 1 point.
///
/// # Example
///
/// ```
/// use baryrat::interp::BarycentricRational;
///
/// let xs = [0.0_f64, 1.0, 2.0];
/// let ys = [0.0, 1.0, 4.0];
/// let interp = BarycentricRational::with_order(xs, ys, 1).unwrap();
/// assert_eq!(interp.eval(1.0), 1.0);
/// assert_eq!(*interp.weight(1), 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct BarycentricRational<T, const N: usize> {
    xs: [T; N],
    ys: [T; N],
    ws: [T; N],
    order: usize,
}

impl<T: Scalar, const N: usize> BarycentricRational<T, N> {
    /// Construct an interpolant with blending order [`DEFAULT_ORDER`].
    pub fn new(xs: [T; N], ys: [T; N]) -> Result<Self, InterpError> {
        Self::with_order(xs, ys, DEFAULT_ORDER)
    }

    /// Construct an interpolant with blending order `order`.
    ///
    /// `order` is clamped to `N - 1`. Returns `InterpError::TooFewPoints` if
    /// `N == 0`, `InterpError::NotSorted` if `xs` is not strictly increasing.
    pub fn with_order(xs: [T; N], ys: [T; N], order: usize) -> Result<Self, InterpError> {
        if N == 0 {
            return Err(InterpError::TooFewPoints);
        }
        validate_sorted(&xs)?;

        let order = resolve_order(N, order);
        let ws = core::array::from_fn(|i| floater_hormann_weight(&xs, order, i));

        Ok(Self { xs, ys, ws, order })
    }

    /// Evaluate the interpolant at `x`.
    ///
    /// Returns `ys[i]` exactly when `x == xs[i]`. For floats, `x` closer to a
    /// knot than `|w_i| / MAX` (a subnormal distance) overflows and yields NaN.
    pub fn eval(&self, x: T) -> T {
        barycentric_eval(&self.xs, &self.ys, &self.ws, x)
    }

    /// The weight of node `i`. Panics if `i >= N`.
    pub fn weight(&self, i: usize) -> &T {
        &self.ws[i]
    }

    /// All weights, one per node.
    pub fn weights(&self) -> &[T; N] {
        &self.ws
    }

    /// Effective blending order after clamping.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        N
    }

    /// Always `false`: construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The knot x-values.
    pub fn xs(&self) -> &[T; N] {
        &self.xs
    }

    /// The knot y-values.
    pub fn ys(&self) -> &[T; N] {
        &self.ys
    }
}

// ---------- Dynamic variant ----------

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Floater–Hormann barycentric rational interpolant (heap-allocated, runtime-sized).
///
/// Dynamic counterpart of [`BarycentricRational`]. Requires at least 1 point.
///
/// # Example
///
/// ```
/// use baryrat::interp::DynBarycentricRational;
///
/// let interp = DynBarycentricRational::with_order(
///     vec![0.0_f64, 1.0, 2.0, 3.0, 4.0],
///     vec![1.0; 5],
///     0,
/// ).unwrap();
/// assert_eq!(interp.eval(2.0), 1.0);
/// assert!((interp.eval(2.5) - 1.0).abs() < 1e-14);
/// ```
#[cfg(feature = "alloc")]
#[derive(Debug, Clone)]
pub struct DynBarycentricRational<T> {
    xs: Vec<T>,
    ys: Vec<T>,
    ws: Vec<T>,
    order: usize,
}

#[cfg(feature = "alloc")]
impl<T: Scalar> DynBarycentricRational<T> {
    /// Construct an interpolant with blending order [`DEFAULT_ORDER`].
    pub fn new(xs: Vec<T>, ys: Vec<T>) -> Result<Self, InterpError> {
        Self::with_order(xs, ys, DEFAULT_ORDER)
    }

    /// Construct an interpolant with blending order `order`, clamped to `n - 1`.
    pub fn with_order(xs: Vec<T>, ys: Vec<T>, order: usize) -> Result<Self, InterpError> {
        if xs.len() != ys.len() {
            return Err(InterpError::LengthMismatch);
        }
        if xs.is_empty() {
            return Err(InterpError::TooFewPoints);
        }
        validate_sorted(&xs)?;

        let order = resolve_order(xs.len(), order);
        let ws = (0..xs.len())
            .map(|i| floater_hormann_weight(&xs, order, i))
            .collect();

        Ok(Self { xs, ys, ws, order })
    }

    /// Construct from borrowed data, copying it.
    pub fn from_slices(xs: &[T], ys: &[T], order: usize) -> Result<Self, InterpError> {
        Self::with_order(xs.to_vec(), ys.to_vec(), order)
    }

    /// Evaluate the interpolant at `x`.
    pub fn eval(&self, x: T) -> T {
        barycentric_eval(&self.xs, &self.ys, &self.ws, x)
    }

    /// The weight of node `i`. Panics if `i >= len()`.
    pub fn weight(&self, i: usize) -> &T {
        &self.ws[i]
    }

    /// All weights, one per node.
    pub fn weights(&self) -> &[T] {
        &self.ws
    }

    /// Effective blending order after clamping.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always `false`: construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// The knot x-values.
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// The knot y-values.
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Give back the knot data, dropping the weights.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.xs, self.ys)
    }
}

// ---------- Shared helpers ----------

fn resolve_order(n: usize, requested: usize) -> usize {
    let order = effective_order(n, requested);
    if order != requested {
        log::debug!("blending order {requested} clamped to {order} for {n} nodes");
    }
    log::trace!("building Floater-Hormann weights: n = {n}, d = {order}");
    order
}

/// Barycentric evaluation: r(x) = (Σ w_j·y_j/(x-x_j)) / (Σ w_j/(x-x_j))
///
/// A query equal to a knot returns the stored value; no tolerance is applied.
/// Near a knot the formula stays accurate until `w_j/(x-x_j)` overflows: for
/// IEEE floats a query a subnormal distance from a knot gives `inf/inf = NaN`.
fn barycentric_eval<T: Scalar>(xs: &[T], ys: &[T], ws: &[T], x: T) -> T {
    let mut numer = T::zero();
    let mut denom = T::zero();

    for j in 0..xs.len() {
        if x == xs[j] {
            return ys[j].clone();
        }
        let term = ws[j].clone() / (x.clone() - xs[j].clone());
        numer = numer + term.clone() * ys[j].clone();
        denom = denom + term;
    }
    numer / denom
}
