//! The arithmetic contract every matrix element type must satisfy.

use core::ops::{Add, Div, Mul, Sub};

/// Numeric is the element contract for all matrix cells.
///
/// Note: We require Copy, PartialEq and the basic arithmetic ops on Self,
/// plus named additive and multiplicative identities. Send and Sync are
/// part of the bound so bulk operations can fan out across threads.
pub trait Numeric:
    Copy
    + PartialEq
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
}

impl Numeric for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
}

impl Numeric for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
}

macro_rules! impl_numeric_integer {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn zero() -> Self { 0 }
                fn one() -> Self { 1 }
            }
        )*
    };
}

impl_numeric_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
