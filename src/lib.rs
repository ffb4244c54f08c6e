//! # blasgen
//!
//! Generic reference BLAS kernels in pure Rust, no-std compatible. Each
//! kernel is written once against a small scalar capability trait and works
//! for `f32`, `f64`, `Complex<f32>` and `Complex<f64>` alike.
//!
//! ## Quick start
//!
//! ```
//! use blasgen::{her, nrm2, Layout, Uplo};
//!
//! // A := x * x^T + A on the lower triangle of a 2x2 column-major matrix
//! let x = [3.0_f64, 4.0];
//! let mut a = [0.0_f64; 4];
//! her(Layout::ColMajor, Uplo::Lower, 2, 1.0, &x, 1, &mut a, 2).unwrap();
//! assert_eq!(a, [9.0, 12.0, 0.0, 16.0]);
//!
//! assert_eq!(nrm2(2, &x, 1).unwrap(), 5.0);
//! ```
//!
//! ## Modules
//!
//! - [`blas`] — the kernels ([`her`], [`nrm2`]), CBLAS-style [`Layout`] and
//!   [`Uplo`] selectors, strided views and [`BlasError`]. Kernels borrow
//!   caller buffers, validate every argument before touching them, and
//!   never allocate.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all buffer elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats, the real companion of every element type
//!   - [`LinalgScalar`] — real floats and complex numbers (`conj`, `re`, `im`)
//!   - [`Promote`] — lossless widening of vector elements into the matrix type
//!
//! ## Complex elements
//!
//! Enable the `complex` feature (on by default) to use `Complex<f32>` /
//! `Complex<f64>`. [`her`] then performs the Hermitian update
//! `A := alpha * x * x^H + A` and keeps the diagonal exactly real;
//! [`nrm2`] returns the real norm.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Hardware FPU via system libm |
//! | `complex` | yes      | `Complex<f32>` / `Complex<f64>` support via `num-complex` |
//! | `tracing` | no       | `trace`/`debug` events from the kernels via `tracing` |
//! | `all`     | no       | All features: `std` + `complex` + `tracing` |
//!
//! Without `std`, float functions come from the pure-Rust `libm` crate,
//! which is always linked as the no-std baseline.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod blas;
pub mod traits;

pub use blas::{her, nrm2, BlasError, Layout, StridedVec, Uplo};
pub use traits::{FloatScalar, LinalgScalar, Promote, RealType, Scalar};

#[cfg(feature = "complex")]
pub use num_complex::Complex;
