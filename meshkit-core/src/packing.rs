//! Normalized integer packing
//!
//! Vertex data is often stored as normalized integers. [`unpack`] maps the
//! full range of an unsigned integer type to `[0, 1]` and of a signed integer
//! type to `[-1, 1]`; [`pack`] goes the other way.
//!
//! For best precision the floating-point type should be wider than the
//! integer type (e.g. `f32` from `i16`, `f64` from `i32`).

use nalgebra::{SVector, Scalar};
use std::ops::{Div, Mul};

/// Integer type usable as normalized storage
pub trait Normalized: Copy {
    /// Whether the type is signed and therefore maps to `[-1, 1]`
    const SIGNED: bool;

    const MAX: Self;

    fn to_f32(self) -> f32;

    fn to_f64(self) -> f64;

    /// Truncating conversion, saturating at the type bounds
    fn from_f32(value: f32) -> Self;

    /// Truncating conversion, saturating at the type bounds
    fn from_f64(value: f64) -> Self;
}

/// Floating-point type used for unpacked values
///
/// Packing arithmetic is carried out in this type, so `f32` results are
/// rounded once in `f32` rather than computed in `f64` and narrowed.
pub trait FloatingPoint:
    Copy + PartialOrd + Mul<Output = Self> + Div<Output = Self>
{
    const NEGATIVE_ONE: Self;

    fn from_normalized<I: Normalized>(value: I) -> Self;

    fn to_normalized<I: Normalized>(self) -> I;
}

macro_rules! impl_normalized {
    ($signed:expr => $($t:ty),*) => {
        $(
            impl Normalized for $t {
                const SIGNED: bool = $signed;
                const MAX: Self = <$t>::MAX;

                fn to_f32(self) -> f32 {
                    self as f32
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn from_f32(value: f32) -> Self {
                    value as $t
                }

                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_normalized!(false => u8, u16, u32, u64);
impl_normalized!(true => i8, i16, i32, i64);

impl FloatingPoint for f32 {
    const NEGATIVE_ONE: Self = -1.0;

    fn from_normalized<I: Normalized>(value: I) -> Self {
        value.to_f32()
    }

    fn to_normalized<I: Normalized>(self) -> I {
        I::from_f32(self)
    }
}

impl FloatingPoint for f64 {
    const NEGATIVE_ONE: Self = -1.0;

    fn from_normalized<I: Normalized>(value: I) -> Self {
        value.to_f64()
    }

    fn to_normalized<I: Normalized>(self) -> I {
        I::from_f64(self)
    }
}

/// Unpack an integral value into a floating-point representation
///
/// The most negative value of a signed type is clamped to `-1`, so both
/// `i8::MIN` and `-i8::MAX` unpack to `-1.0`.
pub fn unpack<F: FloatingPoint, I: Normalized>(value: I) -> F {
    let unpacked = F::from_normalized(value) / F::from_normalized(I::MAX);
    if I::SIGNED && unpacked < F::NEGATIVE_ONE {
        F::NEGATIVE_ONE
    } else {
        unpacked
    }
}

/// Pack a floating-point value into an integer representation
///
/// The input is expected in `[0, 1]` for unsigned and `[-1, 1]` for signed
/// targets. Values outside that range saturate.
pub fn pack<I: Normalized, F: FloatingPoint>(value: F) -> I {
    (value * F::from_normalized(I::MAX)).to_normalized()
}

/// Component-wise [`unpack`]
pub fn unpack_vector<F, I, const D: usize>(value: &SVector<I, D>) -> SVector<F, D>
where
    F: FloatingPoint + Scalar,
    I: Normalized + Scalar,
{
    value.map(unpack::<F, I>)
}

/// Component-wise [`pack`]
pub fn pack_vector<I, F, const D: usize>(value: &SVector<F, D>) -> SVector<I, D>
where
    I: Normalized + Scalar,
    F: FloatingPoint + Scalar,
{
    value.map(pack::<I, F>)
}
