use crate::{rational::parse_rational, Integer, Rational, RationalError};

use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Num, One, Signed, ToPrimitive, Zero};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

fn math_error(err: RationalError) -> ! {
    panic!("integer overflow or other math error: {}", err)
}

macro_rules! impl_op {
    ($($trait:ident $fn:ident = $call:ident),* --- $($trait_assign:ident $fn_assign:ident = ($op_assign:tt)),*) => {
        $(impl<I: Integer> $trait for Rational<I> {
            type Output = Self;
            fn $fn(self, other: Self) -> Self {
                self.$call(other).unwrap_or_else(|err| math_error(err))
            }
        }
        impl<I: Integer> $trait<I> for Rational<I> {
            type Output = Self;
            fn $fn(self, other: I) -> Self {
                self.$call(other).unwrap_or_else(|err| math_error(err))
            }
        })*
        $(impl<I: Integer> $trait_assign for Rational<I> {
            fn $fn_assign(&mut self, other: Self) {
                *self = *self $op_assign other;
            }
        }
        impl<I: Integer> $trait_assign<I> for Rational<I> {
            fn $fn_assign(&mut self, other: I) {
                *self = *self $op_assign other;
            }
        })*
    }
}
impl_op! {
    Add add = checked_add,
    Sub sub = checked_sub,
    Mul mul = checked_mul,
    Div div = checked_div,
    Rem rem = checked_rem
    ---
    AddAssign add_assign = (+),
    SubAssign sub_assign = (-),
    MulAssign mul_assign = (*),
    DivAssign div_assign = (/),
    RemAssign rem_assign = (%)
}

// Integer on the left hand side. Coherence rules out doing this generically.
macro_rules! impl_int_lhs {
    ($($int:ident),*) => {
        $(impl Add<Rational<$int>> for $int {
            type Output = Rational<$int>;
            fn add(self, other: Rational<$int>) -> Self::Output {
                other + self
            }
        }
        impl Sub<Rational<$int>> for $int {
            type Output = Rational<$int>;
            fn sub(self, other: Rational<$int>) -> Self::Output {
                Rational::from_integer(self) - other
            }
        }
        impl Mul<Rational<$int>> for $int {
            type Output = Rational<$int>;
            fn mul(self, other: Rational<$int>) -> Self::Output {
                other * self
            }
        }
        impl Div<Rational<$int>> for $int {
            type Output = Rational<$int>;
            fn div(self, other: Rational<$int>) -> Self::Output {
                Rational::from_integer(self) / other
            }
        })*
    }
}
impl_int_lhs!(i8, i16, i32, i64, i128, isize);

impl<I: Integer> Neg for Rational<I> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.checked_neg().unwrap_or_else(|err| math_error(err))
    }
}

impl<I: Integer> Zero for Rational<I> {
    fn zero() -> Self {
        Self::default()
    }
    fn is_zero(&self) -> bool {
        Rational::is_zero(*self)
    }
}
impl<I: Integer> One for Rational<I> {
    fn one() -> Self {
        Self::from_integer(I::one())
    }
}
impl<I: Integer> Num for Rational<I> {
    type FromStrRadixErr = RationalError;

    fn from_str_radix(input: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        parse_rational(input, radix)
    }
}
impl<I: Integer> Signed for Rational<I> {
    fn abs(&self) -> Self {
        self.checked_abs().unwrap_or_else(|err| math_error(err))
    }
    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Self::zero()
        } else {
            *self - *other
        }
    }
    fn signum(&self) -> Self {
        Self::from_integer(self.numerator().signum())
    }
    fn is_positive(&self) -> bool {
        self.numerator().is_positive()
    }
    fn is_negative(&self) -> bool {
        self.numerator().is_negative()
    }
}

macro_rules! impl_checked {
    ($($trait:ident $fn:ident),*) => {
        $(impl<I: Integer> $trait for Rational<I> {
            fn $fn(&self, other: &Self) -> Option<Self> {
                Rational::$fn(*self, *other).ok()
            }
        })*
    }
}
impl_checked!(CheckedAdd checked_add, CheckedSub checked_sub, CheckedMul checked_mul, CheckedDiv checked_div);

impl<I: Integer> ToPrimitive for Rational<I> {
    fn to_i64(&self) -> Option<i64> {
        self.trunc().to_i64()
    }
    fn to_u64(&self) -> Option<u64> {
        self.trunc().to_u64()
    }
    fn to_i128(&self) -> Option<i128> {
        self.trunc().to_i128()
    }
    fn to_u128(&self) -> Option<u128> {
        self.trunc().to_u128()
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.decimal())
    }
}
