//! Barycentric rational interpolation with Floater–Hormann weights.
//!
//! The interpolant is
//!
//! `r(t) = (Σ w_i·y_i/(t-x_i)) / (Σ w_i/(t-x_i))`
//!
//! with weights built from every window of `d + 1` consecutive nodes. For any
//! blending order `d` the result has no real poles, reproduces the data exactly
//! at the nodes, and reproduces polynomials of degree `≤ d` everywhere.
//! `d = 0` is Berrut's interpolant; `d = n - 1` is the interpolating polynomial.
//!
//! The interpolant comes in a fixed-size (const-generic, stack-allocated,
//! no-std) and a dynamic (`Dyn*`, requires `alloc`) variant. Queries outside
//! the knot range extrapolate with the same formula.
//!
//! # Examples
//!
//! ```
//! use baryrat::interp::BarycentricRational;
//!
//! let xs = [0.0_f64, 1.0, 2.0, 3.0, 4.0];
//! let ys = [1.0, 1.0, 1.0, 1.0, 1.0];
//! let interp = BarycentricRational::with_order(xs, ys, 0).unwrap();
//! assert_eq!(interp.eval(2.0), 1.0);
//! assert!((interp.eval(2.5) - 1.0).abs() < 1e-14);
//! ```

mod barycentric;
mod weights;


pub use barycentric::BarycentricRational;
pub use weights::{floater_hormann_weight, floater_hormann_weights};

#[cfg(feature = "alloc")]
pub use barycentric::DynBarycentricRational;

use core::cmp::Ordering;

use crate::traits::Scalar;

/// Blending order used by the `new` constructors.
pub const DEFAULT_ORDER: usize = 3;

/// Errors from interpolant construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpError {
    /// No data points were given.
    TooFewPoints,
    /// The `xs` array is not strictly increasing.
    NotSorted,
    /// `xs` and `ys` have different lengths (dynamic variant only).
    LengthMismatch,
}

impl core::fmt::Display for InterpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InterpError::TooFewPoints => write!(f, "not enough data points for interpolation"),
            InterpError::NotSorted => write!(f, "x values must be strictly increasing"),
            InterpError::LengthMismatch => write!(f, "xs and ys must have the same length"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InterpError {}

/// Validate that a slice is strictly increasing.
///
/// Incomparable neighbours (NaN) are rejected as well.
fn validate_sorted<T: Scalar>(xs: &[T]) -> Result<(), InterpError> {
    for i in 1..xs.len() {
        if xs[i - 1].partial_cmp(&xs[i]) != Some(Ordering::Less) {
            return Err(InterpError::NotSorted);
        }
    }
    Ok(())
}

/// Clamp a requested blending order to what `n` nodes support.
fn effective_order(n: usize, order: usize) -> usize {
    order.min(n.saturating_sub(1))
}
