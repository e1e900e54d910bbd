use crate::{RationalError, Result};

use num_traits::{CheckedNeg, CheckedRem, PrimInt, Signed};
use std::{fmt, hash::Hash};

/// A fixed-width signed integer that can back a rational. Implemented for
/// all of the primitive signed integers.
pub trait Integer: PrimInt + Signed + CheckedNeg + CheckedRem + fmt::Display + fmt::Debug + Hash {}

impl<T> Integer for T
    where T: PrimInt + Signed + CheckedNeg + CheckedRem + fmt::Display + fmt::Debug + Hash {}

/// Find the greatest common divisor of two numbers using Euclid's
/// algorithm. The result carries whatever sign the last step left on it, so
/// callers wanting a magnitude should use `gcd_abs`.
pub fn gcd<I: Integer>(mut a: I, mut b: I) -> I {
    while !b.is_zero() {
        // Only MIN % -1 can fail here, and its remainder is 0
        let r = a.checked_rem(&b).unwrap_or_else(I::zero);
        a = b;
        b = r;
    }
    a
}

/// Absolute value of `gcd`. Fails if the divisor is `I::min_value()`, which
/// has no positive counterpart.
pub fn gcd_abs<I: Integer>(a: I, b: I) -> Result<I> {
    checked_abs(gcd(a, b))
}

/// The largest factor both numbers can be divided by. This is `gcd_abs`,
/// except when the divisor is `I::min_value()`: then both numbers are 0 or
/// `I::min_value()` themselves and the signed divisor still divides them
/// exactly, so it is returned as is. Callers fix up signs afterwards.
pub(crate) fn common_factor<I: Integer>(a: I, b: I) -> I {
    let g = gcd(a, b);
    if g.is_negative() {
        g.checked_neg().unwrap_or(g)
    } else {
        g
    }
}

/// Abs function that reports overflow instead of wrapping
pub(crate) fn checked_abs<I: Integer>(i: I) -> Result<I> {
    if i.is_negative() {
        overflowing(i.checked_neg())
    } else {
        Ok(i)
    }
}

/// Turn a checked operation into a result
pub(crate) fn overflowing<I>(value: Option<I>) -> Result<I> {
    value.ok_or_else(|| {
        log::debug!("rational arithmetic overflowed");
        RationalError::Overflow
    })
}
