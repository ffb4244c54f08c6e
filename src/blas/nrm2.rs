use num_traits::{Float, Zero};

use super::view::StridedVec;
use super::BlasError;
use crate::traits::{LinalgScalar, RealType};

/// Euclidean norm `||x||_2 = sqrt(sum |x_i|^2)` of `n` elements of `x`
/// spaced `incx` apart.
///
/// `|x_i|^2` is `re^2 + im^2` (just `x_i^2` for reals). The sum is
/// accumulated in index order and square-rooted once at the end. `n == 0`
/// yields zero.
///
/// The accumulation is not rescaled: squares of very large or very small
/// magnitudes overflow to infinity or underflow to zero before the final
/// square root (e.g. `[1e200, 1e200]` gives `inf`).
///
/// # Errors
///
/// `BlasError::InvalidArgument` when `incx <= 0` or `x` is shorter than
/// `(n-1)*incx + 1`.
///
/// # Example
///
/// ```
/// use blasgen::nrm2;
///
/// assert_eq!(nrm2(2, &[3.0_f64, 4.0], 1).unwrap(), 5.0);
/// // every other element
/// assert_eq!(nrm2(2, &[3.0_f32, 100.0, 4.0], 2).unwrap(), 5.0);
/// ```
pub fn nrm2<T: LinalgScalar>(n: usize, x: &[T], incx: isize) -> Result<RealType<T>, BlasError> {
    kernel_trace!(n, incx, "nrm2");

    blas_error_if!("nrm2", incx <= 0);
    let xv = StridedVec::checked("nrm2", x, n, incx)?;

    // TODO: optional scaled accumulation (running max) as a separate entry point
    let mut result = <RealType<T> as Zero>::zero();
    if incx == 1 {
        for xi in &x[..n] {
            result = result + xi.abs_sq();
        }
    } else {
        for xi in xv.iter() {
            result = result + xi.abs_sq();
        }
    }
    Ok(result.sqrt())
}
