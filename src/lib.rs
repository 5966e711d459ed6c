//! # baryrat
//!
//! Pole-free barycentric rational interpolation of unevenly spaced samples,
//! no-std compatible and generic over the numeric type.
//!
//! ## Quick start
//!
//! ```
//! use baryrat::interp::DynBarycentricRational;
//!
//! // Runge's function on an irregular grid, blending order 5
//! let xs: Vec<f64> = (0..400).map(|i| -1.0 + 0.005 * i as f64 + 0.001 * (i % 3) as f64).collect();
//! let ys: Vec<f64> = xs.iter().map(|x| 1.0 / (1.0 + 25.0 * x * x)).collect();
//! let interp = DynBarycentricRational::with_order(xs.clone(), ys.clone(), 5).unwrap();
//!
//! assert_eq!(interp.eval(xs[17]), ys[17]); // exact at the nodes
//! let t = 0.123;
//! assert!((interp.eval(t) - 1.0 / (1.0 + 25.0 * t * t)).abs() < 1e-4);
//! ```
//!
//! ## Modules
//!
//! - [`interp`] — Floater–Hormann barycentric rational interpolation.
//!   [`BarycentricRational<T, N>`](interp::BarycentricRational) stores its
//!   knots and weights inline; [`DynBarycentricRational<T>`](interp::DynBarycentricRational)
//!   is the heap-allocated counterpart (requires `alloc`). The weight table is
//!   also available as free functions over slices.
//!
//! - [`traits`] — [`Scalar`], the numeric bound: arithmetic, ordering, and
//!   `zero()` / `one()`. Blanket-implemented, so `f32`, `f64`, and software
//!   number types like `num_rational::BigRational` all work.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Implies `alloc`. `std::error::Error` for [`InterpError`](interp::InterpError) |
//! | `alloc` | via std  | `DynBarycentricRational` (heap-allocated, runtime-sized) |
//!
//! ## Logging
//!
//! Construction reports through the [`log`](https://docs.rs/log) facade: a
//! `debug` record when the requested blending order is clamped, and a `trace`
//! record with the node count and effective order. Evaluation never logs.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod interp;
pub mod traits;

pub use interp::{BarycentricRational, DEFAULT_ORDER, InterpError};
#[cfg(feature = "alloc")]
pub use interp::DynBarycentricRational;
pub use traits::Scalar;
