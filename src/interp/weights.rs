use crate::traits::{Scalar, alternating_sign};

use super::effective_order;

/// Floater–Hormann weight of node `i` for blending order `order`.
///
/// `w_i = Σ_{k=max(0,i-d)}^{min(i,n-1-d)} (-1)^k · Π_{j=k, j≠i}^{k+d} 1/(x_i - x_j)`
///
/// Each term is the contribution of one window of `d + 1` consecutive nodes
/// containing `i`. Nodes near either boundary lie in fewer windows, so their
/// weights differ from interior ones. `order` is clamped to `xs.len() - 1`.
///
/// `xs` must be strictly increasing and `i < xs.len()`.
///
/// # Example
///
/// ```
/// use baryrat::interp::floater_hormann_weight;
///
/// let xs = [0.0_f64, 1.0, 3.0];
/// // d = 1, interior node: (-1)^2 · (1/(1-0) + 1/(3-1))
/// assert_eq!(floater_hormann_weight(&xs, 1, 1), 1.5);
/// ```
pub fn floater_hormann_weight<T: Scalar>(xs: &[T], order: usize, i: usize) -> T {
    let n = xs.len();
    debug_assert!(i < n);
    let d = effective_order(n, order);

    let k_min = i.saturating_sub(d);
    let k_max = i.min(n - 1 - d);

    let mut w = T::zero();
    for k in k_min..=k_max {
        let mut inv_product = alternating_sign::<T>(k);
        for j in k..=k + d {
            if j != i {
                inv_product = inv_product / (xs[i].clone() - xs[j].clone());
            }
        }
        w = w + inv_product;
    }
    w
}

/// Fill `ws` with the Floater–Hormann weights of every node in `xs`.
///
/// Panics if `ws.len() != xs.len()`.
pub fn floater_hormann_weights<T: Scalar>(xs: &[T], order: usize, ws: &mut [T]) {
    assert_eq!(xs.len(), ws.len(), "weight buffer must match the number of nodes");
    for (i, w) in ws.iter_mut().enumerate() {
        *w = floater_hormann_weight(xs, order, i);
    }
}
