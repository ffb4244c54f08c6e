use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

#[cfg(feature = "complex")]
use num_complex::Complex;

/// Trait for types that can be stored in a vector or matrix buffer.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for real floating-point elements.
///
/// Used as the real companion type of every [`LinalgScalar`]: norms,
/// scaling factors and Hermitian diagonal entries live here.
pub trait FloatScalar: Scalar + Float + LinalgScalar<Real = Self> {}

impl<T: Scalar + Float + LinalgScalar<Real = T>> FloatScalar for T {}

/// Trait for elements the BLAS kernels operate on.
///
/// Covers both real floats (`f32`, `f64`) and complex numbers (`Complex<f32>`,
/// `Complex<f64>`). Kernels are written once against this capability set;
/// real types implement `conj` as the identity and `im` as zero.
pub trait LinalgScalar: Scalar {
    /// The real component type (`Self` for reals, `T` for `Complex<T>`).
    type Real: FloatScalar;

    /// Complex conjugate (identity for reals).
    fn conj(self) -> Self;

    /// Real part.
    fn re(self) -> Self::Real;

    /// Imaginary part (zero for reals).
    fn im(self) -> Self::Real;

    /// Promote a real value into `Self`.
    fn from_real(r: Self::Real) -> Self;

    /// Multiply every component by the real factor `r`.
    fn mul_real(self, r: Self::Real) -> Self;

    /// Squared modulus, `re*re + im*im`, without scaling.
    #[inline]
    fn abs_sq(self) -> Self::Real {
        let (re, im) = (self.re(), self.im());
        re * re + im * im
    }
}

macro_rules! impl_linalg_scalar_real {
    ($($t:ty),*) => {
        $(
            impl LinalgScalar for $t {
                type Real = $t;

                #[inline] fn conj(self) -> $t { self }
                #[inline] fn re(self) -> $t { self }
                #[inline] fn im(self) -> $t { 0.0 }
                #[inline] fn from_real(r: $t) -> $t { r }
                #[inline] fn mul_real(self, r: $t) -> $t { self * r }
            }
        )*
    };
}

impl_linalg_scalar_real!(f32, f64);

#[cfg(feature = "complex")]
impl<T: FloatScalar> LinalgScalar for Complex<T> {
    type Real = T;

    #[inline]
    fn conj(self) -> Self {
        Complex::conj(&self)
    }

    #[inline]
    fn re(self) -> T {
        self.re
    }

    #[inline]
    fn im(self) -> T {
        self.im
    }

    #[inline]
    fn from_real(r: T) -> Self {
        Complex::new(r, T::zero())
    }

    #[inline]
    fn mul_real(self, r: T) -> Self {
        self.scale(r)
    }
}

/// Combined arithmetic type for a matrix element `Self` updated from
/// vector elements of type `X`.
///
/// The combined type is `Self`: every implemented pair widens `X`
/// losslessly into the matrix element type, so intermediate products are
/// formed in `Self` and stored back without narrowing. Pairs that would
/// need narrowing (a real matrix fed by a complex vector, `f32` fed by
/// `f64`) are deliberately not implemented.
///
/// ```
/// use blasgen::Promote;
///
/// let x: f64 = <f64 as Promote<f32>>::promote(1.5_f32);
/// assert_eq!(x, 1.5);
/// ```
pub trait Promote<X: LinalgScalar>: LinalgScalar {
    /// Widen a vector element into the matrix element type.
    fn promote(x: X) -> Self;
}

/// Real companion type used for `alpha` and the diagonal of `her`.
pub type RealType<T> = <T as LinalgScalar>::Real;

impl<T: LinalgScalar> Promote<T> for T {
    #[inline]
    fn promote(x: T) -> T {
        x
    }
}

impl Promote<f32> for f64 {
    #[inline]
    fn promote(x: f32) -> f64 {
        f64::from(x)
    }
}

#[cfg(feature = "complex")]
macro_rules! impl_promote_real_to_complex {
    ($($c:ty => $r:ty),*) => {
        $(
            impl Promote<$r> for Complex<$c> {
                #[inline]
                fn promote(x: $r) -> Complex<$c> {
                    Complex::new(<$c>::from(x), 0.0)
                }
            }
        )*
    };
}

#[cfg(feature = "complex")]
impl_promote_real_to_complex!(f32 => f32, f64 => f64, f64 => f32);

#[cfg(feature = "complex")]
impl Promote<Complex<f32>> for Complex<f64> {
    #[inline]
    fn promote(x: Complex<f32>) -> Complex<f64> {
        Complex::new(f64::from(x.re), f64::from(x.im))
    }
}
