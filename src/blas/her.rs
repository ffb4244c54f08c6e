use num_traits::Zero;

use super::view::{ColMajorMut, StridedVec};
use super::{too_short, BlasError, Layout, Uplo};
use crate::traits::{LinalgScalar, Promote, RealType};

/// Hermitian rank-1 update: `A := alpha * x * x^H + A`.
///
/// `A` is an `n`-by-`n` Hermitian matrix of which only the `uplo` triangle
/// (plus the diagonal) is read or written; the opposite triangle is never
/// touched. `alpha` is real even for complex matrices. For real element
/// types this is the symmetric rank-1 update `A := alpha * x * x^T + A`.
///
/// - `layout`: `ColMajor` stores `A` as an `lda`-by-`n` array, `RowMajor`
///   as `n`-by-`lda`. A row-major buffer is processed as the column-major
///   transpose with the opposite triangle, so for complex elements the
///   row-major entry `(i, j)` receives `alpha * conj(x_i) * x_j`.
/// - `x`: `n` elements spaced `incx` apart, in a buffer of at least
///   `(n-1)*|incx| + 1` elements. `incx < 0` reads the elements back to
///   front, so logical `x[0]` is the last one in the buffer.
/// - `a`: at least `lda*(n-1) + n` elements, `lda >= max(1, n)`.
///
/// Imaginary parts of the diagonal are treated as zero on entry and are
/// set to exactly zero on exit.
///
/// Returns early without touching `a` when `n == 0` or `alpha == 0`.
/// Columns are never skipped when an element of `x` is zero, so a NaN or
/// Inf anywhere in `x` reaches every entry of its row and column within
/// the referenced triangle.
///
/// # Errors
///
/// `BlasError::InvalidArgument` when `incx == 0`, `lda < max(1, n)`, or a
/// buffer is too short (including extents too large for `usize`). Nothing
/// is written in that case.
///
/// # Example
///
/// ```
/// use blasgen::{her, Layout, Uplo};
///
/// // 2x2 column-major, upper triangle
/// let mut a = [1.0_f64, 0.0, 2.0, 3.0];
/// her(Layout::ColMajor, Uplo::Upper, 2, 2.0, &[1.0_f64, 2.0], 1, &mut a, 2).unwrap();
/// assert_eq!(a, [3.0, 0.0, 6.0, 11.0]);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn her<TA, TX>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: RealType<TA>,
    x: &[TX],
    incx: isize,
    a: &mut [TA],
    lda: usize,
) -> Result<(), BlasError>
where
    TA: Promote<TX>,
    TX: LinalgScalar,
{
    kernel_trace!(n, incx, lda, layout = %layout, uplo = %uplo, "her");

    let xv = StridedVec::checked("her", x, n, incx)?;
    blas_error_if!("her", lda < n.max(1));
    blas_error_if!("her", too_short(a.len(), matrix_len(n, lda)));

    if n == 0 || alpha.is_zero() {
        return Ok(());
    }

    // Row-major storage of one triangle is column-major storage of the other.
    let uplo = match layout {
        Layout::ColMajor => uplo,
        Layout::RowMajor => uplo.flip(),
    };
    let mut a = ColMajorMut::new(a, lda);
    let lift = |v: TX| <TA as Promote<TX>>::promote(v);

    match uplo {
        Uplo::Upper => {
            if incx == 1 {
                for j in 0..n {
                    // x[j] == 0 is not skipped: NaN elsewhere must still propagate
                    let xj = lift(x[j]);
                    let tmp = xj.conj().mul_real(alpha);
                    for i in 0..j {
                        let aij = a.get_mut(i, j);
                        *aij = *aij + lift(x[i]) * tmp;
                    }
                    let ajj = a.get(j, j).re() + (xj * tmp).re();
                    a.set(j, j, TA::from_real(ajj));
                }
            } else {
                for j in 0..n {
                    let xj = lift(xv.at(j));
                    let tmp = xj.conj().mul_real(alpha);
                    for (i, xi) in xv.iter().take(j).enumerate() {
                        let aij = a.get_mut(i, j);
                        *aij = *aij + lift(xi) * tmp;
                    }
                    let ajj = a.get(j, j).re() + (xj * tmp).re();
                    a.set(j, j, TA::from_real(ajj));
                }
            }
        }
        Uplo::Lower => {
            if incx == 1 {
                for j in 0..n {
                    let xj = lift(x[j]);
                    let tmp = xj.conj().mul_real(alpha);
                    let ajj = a.get(j, j).re() + (tmp * xj).re();
                    a.set(j, j, TA::from_real(ajj));
                    for i in (j + 1)..n {
                        let aij = a.get_mut(i, j);
                        *aij = *aij + lift(x[i]) * tmp;
                    }
                }
            } else {
                for j in 0..n {
                    let xj = lift(xv.at(j));
                    let tmp = xj.conj().mul_real(alpha);
                    let ajj = a.get(j, j).re() + (tmp * xj).re();
                    a.set(j, j, TA::from_real(ajj));
                    for i in (j + 1)..n {
                        let aij = a.get_mut(i, j);
                        *aij = *aij + lift(xv.at(i)) * tmp;
                    }
                }
            }
        }
    }

    Ok(())
}

/// Minimum length of an `n`-by-`n` matrix buffer with leading dimension
/// `lda`, or `None` when it overflows `usize`.
#[inline]
fn matrix_len(n: usize, lda: usize) -> Option<usize> {
    match n {
        0 => Some(0),
        _ => lda.checked_mul(n - 1)?.checked_add(n),
    }
}
