use super::{strided_len, too_short, BlasError, Layout};

/// Read-only view of an `n`-element vector stored with a signed stride.
///
/// Logical element `i` lives at `start + i * inc` in the backing slice.
/// For a negative stride `start` is `(n-1) * |inc|`, so the logical
/// vector runs back to front through the buffer.
///
/// ```
/// use blasgen::StridedVec;
///
/// let buf = [1.0_f64, 2.0, 3.0];
/// let v = StridedVec::new(&buf, 3, -1).unwrap();
/// assert_eq!(v.get(0), Some(3.0));
/// assert_eq!(v.get(3), None);
/// assert_eq!(v.iter().collect::<Vec<_>>(), vec![3.0, 2.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StridedVec<'a, T> {
    data: &'a [T],
    n: usize,
    inc: isize,
    start: usize,
}

impl<'a, T: Copy> StridedVec<'a, T> {
    /// Wrap `data` as an `n`-element vector with stride `inc`.
    ///
    /// Fails if `inc == 0` or `data` is shorter than `(n-1)*|inc| + 1`.
    pub fn new(data: &'a [T], n: usize, inc: isize) -> Result<Self, BlasError> {
        Self::checked("StridedVec", data, n, inc)
    }

    /// As [`new`](Self::new), reporting failures against `routine`.
    pub(crate) fn checked(
        routine: &'static str,
        data: &'a [T],
        n: usize,
        incx: isize,
    ) -> Result<Self, BlasError> {
        blas_error_if!(routine, incx == 0);
        blas_error_if!(routine, too_short(data.len(), strided_len(n, incx.unsigned_abs())));
        Ok(Self {
            data,
            n,
            inc: incx,
            start: start_offset(n, incx),
        })
    }

    /// Number of logical elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Stride between logically consecutive elements.
    #[inline]
    pub fn inc(&self) -> isize {
        self.inc
    }

    /// Physical index of logical element 0.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Logical element `i`, or `None` if `i >= len()`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<T> {
        (i < self.n).then(|| self.at(i))
    }

    /// Logical element `i < len()`.
    #[inline(always)]
    pub(crate) fn at(&self, i: usize) -> T {
        self.data[offset(self.start, i, self.inc)]
    }

    /// Iterate over the logical elements in order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.n).map(move |i| self.at(i))
    }
}

/// Physical index of logical element 0 for a vector of `n` elements with
/// stride `inc`: `0` for forward strides, `(n-1)*|inc|` for reverse.
/// Only called once the buffer length has been validated.
#[inline]
fn start_offset(n: usize, inc: isize) -> usize {
    if inc > 0 || n == 0 {
        0
    } else {
        (n - 1) * inc.unsigned_abs()
    }
}

/// Physical index `start + i*inc`, computed without leaving `usize`.
#[inline(always)]
fn offset(start: usize, i: usize, inc: isize) -> usize {
    if inc >= 0 {
        start + i * inc as usize
    } else {
        start - i * inc.unsigned_abs()
    }
}

/// Column-major accessor over a mutable matrix buffer: `(i, j)` maps to
/// `i + j*lda`. Callers validate `lda` and the buffer length first.
#[derive(Debug)]
pub(crate) struct ColMajorMut<'a, T> {
    data: &'a mut [T],
    lda: usize,
}

impl<'a, T: Copy> ColMajorMut<'a, T> {
    #[inline]
    pub(crate) fn new(data: &'a mut [T], lda: usize) -> Self {
        Self { data, lda }
    }

    #[inline(always)]
    pub(crate) fn get(&self, i: usize, j: usize) -> T {
        self.data[Layout::ColMajor.index(i, j, self.lda)]
    }

    #[inline(always)]
    pub(crate) fn get_mut(&mut self, i: usize, j: usize) -> &mut T {
        &mut self.data[Layout::ColMajor.index(i, j, self.lda)]
    }

    #[inline(always)]
    pub(crate) fn set(&mut self, i: usize, j: usize, v: T) {
        self.data[Layout::ColMajor.index(i, j, self.lda)] = v;
    }
}
