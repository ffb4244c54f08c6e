//! Reference BLAS kernels, generic over real and complex element types.
//!
//! Kernels operate on caller-owned flat buffers with CBLAS-style
//! `layout`/`uplo`/stride/leading-dimension arguments. They never allocate
//! and validate every argument before touching memory.
//!
//! | Kernel | Operation |
//! |--------|-----------|
//! | [`her`] | Hermitian rank-1 update `A := alpha * x * x^H + A` |
//! | [`nrm2`] | Euclidean norm `sqrt(sum |x_i|^2)` |

use core::fmt;

/// Return `BlasError::InvalidArgument` from the enclosing function when
/// `$cond` holds. The condition text becomes part of the error.
macro_rules! blas_error_if {
    ($routine:expr, $cond:expr) => {
        if $cond {
            #[cfg(feature = "tracing")]
            {
                tracing::debug!(routine = $routine, condition = stringify!($cond), "invalid argument");
            }
            return Err($crate::blas::BlasError::InvalidArgument {
                routine: $routine,
                condition: stringify!($cond),
            });
        }
    };
}

/// Emit a `tracing::trace!` event when the `tracing` feature is on.
macro_rules! kernel_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    };
}

mod her;
mod nrm2;
mod view;

pub use her::her;
pub use nrm2::nrm2;
pub use view::StridedVec;

/// Errors reported by argument validation.
///
/// Every kernel checks all of its preconditions before reading or writing
/// any buffer, so an `Err` means nothing was touched.
///
/// ```
/// use blasgen::{nrm2, BlasError};
///
/// let err = nrm2(2, &[3.0_f64, 4.0], 0).unwrap_err();
/// assert_eq!(
///     err,
///     BlasError::InvalidArgument { routine: "nrm2", condition: "incx <= 0" }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BlasError {
    /// A precondition on the arguments of `routine` failed.
    #[error("invalid argument to {routine}: {condition}")]
    InvalidArgument {
        /// Name of the routine that rejected its arguments.
        routine: &'static str,
        /// The violated condition, as written in the check.
        condition: &'static str,
    },
}

/// Matrix storage layout. Discriminants are the CBLAS codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(i32)]
pub enum Layout {
    /// Row-major (C-style): elements in a row are contiguous.
    RowMajor = 101,
    /// Column-major (Fortran-style): elements in a column are contiguous.
    #[default]
    ColMajor = 102,
}

impl Layout {
    /// Flat index of element `(i, j)` given the leading dimension `ld`.
    #[inline(always)]
    pub fn index(self, i: usize, j: usize, ld: usize) -> usize {
        match self {
            Layout::RowMajor => i * ld + j,
            Layout::ColMajor => i + j * ld,
        }
    }
}

impl TryFrom<i32> for Layout {
    type Error = BlasError;

    fn try_from(code: i32) -> Result<Self, BlasError> {
        match code {
            101 => Ok(Layout::RowMajor),
            102 => Ok(Layout::ColMajor),
            _ => Err(BlasError::InvalidArgument {
                routine: "Layout",
                condition: "layout != ColMajor && layout != RowMajor",
            }),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::RowMajor => write!(f, "RowMajor"),
            Layout::ColMajor => write!(f, "ColMajor"),
        }
    }
}

/// Which triangle of a symmetric/Hermitian matrix is referenced.
/// Discriminants are the CBLAS codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(i32)]
pub enum Uplo {
    #[default]
    Upper = 121,
    Lower = 122,
}

impl Uplo {
    /// The opposite triangle.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Uplo::Upper => Uplo::Lower,
            Uplo::Lower => Uplo::Upper,
        }
    }
}

impl TryFrom<i32> for Uplo {
    type Error = BlasError;

    fn try_from(code: i32) -> Result<Self, BlasError> {
        match code {
            121 => Ok(Uplo::Upper),
            122 => Ok(Uplo::Lower),
            _ => Err(BlasError::InvalidArgument {
                routine: "Uplo",
                condition: "uplo != Lower && uplo != Upper",
            }),
        }
    }
}

impl fmt::Display for Uplo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Uplo::Upper => write!(f, "Upper"),
            Uplo::Lower => write!(f, "Lower"),
        }
    }
}

/// Minimum buffer length holding `n` elements spaced `inc` apart, or `None`
/// when that length is not representable.
#[inline]
pub(crate) fn strided_len(n: usize, inc: usize) -> Option<usize> {
    match n {
        0 => Some(0),
        _ => (n - 1).checked_mul(inc)?.checked_add(1),
    }
}

/// Whether a buffer of `len` elements falls short of `required`. An
/// unrepresentable requirement is never met.
#[inline]
pub(crate) fn too_short(len: usize, required: Option<usize>) -> bool {
    required.map_or(true, |r| len < r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_from_cblas_code() {
        assert_eq!(Layout::try_from(101), Ok(Layout::RowMajor));
        assert_eq!(Layout::try_from(102), Ok(Layout::ColMajor));
        assert_eq!(Layout::RowMajor as i32, 101);
        assert!(matches!(
            Layout::try_from(0),
            Err(BlasError::InvalidArgument { routine: "Layout", .. })
        ));
    }

    #[test]
    fn uplo_from_cblas_code() {
        assert_eq!(Uplo::try_from(121), Ok(Uplo::Upper));
        assert_eq!(Uplo::try_from(122), Ok(Uplo::Lower));
        assert!(Uplo::try_from(123).is_err());
        assert_eq!(Uplo::Upper.flip(), Uplo::Lower);
        assert_eq!(Uplo::Lower.flip().flip(), Uplo::Lower);
    }

    #[test]
    fn layout_index() {
        assert_eq!(Layout::ColMajor.index(1, 2, 4), 9);
        assert_eq!(Layout::RowMajor.index(1, 2, 4), 6);
    }

    #[test]
    fn strided_len_edges() {
        assert_eq!(strided_len(0, 5), Some(0));
        assert_eq!(strided_len(1, 5), Some(1));
        assert_eq!(strided_len(3, 2), Some(5));
        // n == 1 never multiplies the stride
        assert_eq!(strided_len(1, usize::MAX), Some(1));
    }

    #[test]
    fn strided_len_overflow_is_none() {
        assert_eq!(strided_len(3, usize::MAX), None);
        assert_eq!(strided_len(2, usize::MAX), None);
        assert_eq!(strided_len(3, isize::MIN.unsigned_abs()), None);
        assert!(too_short(usize::MAX, None));
        assert!(too_short(4, Some(5)));
        assert!(!too_short(5, Some(5)));
    }

    #[cfg(feature = "std")]
    #[test]
    fn error_display() {
        let err = BlasError::InvalidArgument { routine: "her", condition: "lda < n" };
        assert_eq!(std::format!("{err}"), "invalid argument to her: lda < n");
    }
}
