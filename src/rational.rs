use crate::{
    integer::{checked_abs, common_factor, overflowing},
    gcd, gcd_abs, Integer, Operand, RationalError, Result
};

use num_traits::{NumCast, ToPrimitive};
use std::{fmt, str::FromStr};

/// Reduce a numerator and denominator to lowest terms, moving the sign onto
/// the numerator. Zero always becomes 0/1.
fn normalize<I: Integer>(numerator: I, denominator: I) -> Result<(I, I)> {
    if denominator.is_zero() {
        log::debug!("rejected rational {}/{}", numerator, denominator);
        return Err(RationalError::ZeroDenominator);
    }
    if numerator.is_zero() {
        return Ok((I::zero(), I::one()));
    }
    let g = common_factor(numerator, denominator);
    sign_to_numerator(numerator / g, denominator / g)
}
/// Negate both sides if the denominator is negative, so the sign lives on
/// the numerator. Fails when either side is `I::min_value()` and has to flip.
fn sign_to_numerator<I: Integer>(numerator: I, denominator: I) -> Result<(I, I)> {
    if denominator.is_negative() {
        Ok((overflowing(numerator.checked_neg())?, overflowing(denominator.checked_neg())?))
    } else {
        Ok((numerator, denominator))
    }
}
/// Inspect whether the pair is already in lowest terms with a positive
/// denominator
fn is_normalized<I: Integer>(numerator: I, denominator: I) -> bool {
    denominator.is_positive()
        && (!numerator.is_zero() || denominator.is_one())
        && gcd_abs(numerator, denominator) == Ok(I::one())
}

/// An exact fraction of two fixed-width integers. The value is always kept
/// in lowest terms with a positive denominator, so two rationals are equal
/// exactly when their fields are.
///
/// Every arithmetic operation is checked: instead of wrapping or losing
/// precision it fails with `RationalError::Overflow` and leaves its operands
/// alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rational<I = i64> {
    numerator: I,
    denominator: I
}
impl<I: Integer> Default for Rational<I> {
    fn default() -> Self {
        Self::from_integer(I::zero())
    }
}
impl<I: Integer> From<I> for Rational<I> {
    fn from(i: I) -> Self {
        Self::from_integer(i)
    }
}
impl<I: Integer> Rational<I> {
    /// Construct a new rational in lowest terms.
    /// ```rust
    /// use rational_types::Rational;
    /// let half = Rational::new(-3, -6).unwrap();
    /// assert_eq!((half.numerator(), half.denominator()), (1, 2));
    /// ```
    ///
    /// ## Errors
    /// Fails with `ZeroDenominator` if the denominator is 0
    pub fn new(numerator: I, denominator: I) -> Result<Self> {
        let (numerator, denominator) = normalize(numerator, denominator)?;
        Ok(Self { numerator, denominator })
    }
    /// Construct the rational i/1
    pub fn from_integer(i: I) -> Self {
        Self {
            numerator: i,
            denominator: I::one()
        }
    }
    /// Construct a rational from a pair that must already be in lowest terms
    /// with a positive denominator. Nothing is reduced.
    pub fn from_raw(numerator: I, denominator: I) -> Result<Self> {
        if denominator.is_zero() {
            return Err(RationalError::ZeroDenominator);
        }
        if !is_normalized(numerator, denominator) {
            log::debug!("rejected denormalized pair {}/{}", numerator, denominator);
            return Err(RationalError::Denormalized);
        }
        Ok(Self { numerator, denominator })
    }
    /// Convert to a rational backed by another integer type. Fails with
    /// `Overflow` if either component doesn't fit.
    pub fn cast<J: Integer>(self) -> Result<Rational<J>> {
        Ok(Rational {
            numerator: overflowing(<J as NumCast>::from(self.numerator))?,
            denominator: overflowing(<J as NumCast>::from(self.denominator))?
        })
    }
    /// Replace the value with numerator/denominator, in lowest terms. On
    /// error the old value is kept.
    pub fn assign(&mut self, numerator: I, denominator: I) -> Result<&mut Self> {
        *self = Self::new(numerator, denominator)?;
        Ok(self)
    }
    /// Return the numerator
    pub fn numerator(self) -> I {
        self.numerator
    }
    /// Return the denominator, which is always positive
    pub fn denominator(self) -> I {
        self.denominator
    }
    /// Returns true if this rational is 0
    pub fn is_zero(self) -> bool {
        self.numerator.is_zero()
    }
    /// Returns true if this rational is 1
    pub fn is_one(self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
    /// Truthiness of the value: anything but 0 is true
    pub fn to_bool(self) -> bool {
        !self.is_zero()
    }
    /// Returns true if the denominator is 1
    pub fn is_integer(self) -> bool {
        self.denominator.is_one()
    }

    /// Calculates addition, but returns an error on overflow
    pub fn checked_add<O: Into<Operand<I>>>(self, other: O) -> Result<Self> {
        self.add_or_sub(other.into(), false)
    }
    /// Calculates subtraction, but returns an error on overflow
    pub fn checked_sub<O: Into<Operand<I>>>(self, other: O) -> Result<Self> {
        self.add_or_sub(other.into(), true)
    }
    fn add_or_sub(self, other: Operand<I>, subtract: bool) -> Result<Self> {
        let combine = |a: I, b: I| if subtract { a.checked_sub(&b) } else { a.checked_add(&b) };

        match other {
            // gcd(n ± i*d, d) = gcd(n, d) = 1, so this stays reduced
            Operand::Integer(i) => {
                let scaled = overflowing(i.checked_mul(&self.denominator))?;
                Ok(Self {
                    numerator: overflowing(combine(self.numerator, scaled))?,
                    denominator: self.denominator
                })
            },
            Operand::Rational(other) => {
                // Both denominators are positive, and so is their gcd
                let g = gcd(self.denominator, other.denominator);
                let denominator = self.denominator / g;
                let numerator = overflowing(combine(
                    overflowing(self.numerator.checked_mul(&(other.denominator / g)))?,
                    overflowing(other.numerator.checked_mul(&denominator))?
                ))?;

                let g = gcd_abs(numerator, g)?;
                Ok(Self {
                    numerator: numerator / g,
                    denominator: overflowing(denominator.checked_mul(&(other.denominator / g)))?
                })
            }
        }
    }
    /// Calculates multiplication, but returns an error on overflow. Common
    /// factors are cancelled crosswise before anything is multiplied.
    pub fn checked_mul<O: Into<Operand<I>>>(self, other: O) -> Result<Self> {
        match other.into() {
            Operand::Integer(i) => {
                let g = gcd_abs(i, self.denominator)?;
                Ok(Self {
                    numerator: overflowing(self.numerator.checked_mul(&(i / g)))?,
                    denominator: self.denominator / g
                })
            },
            Operand::Rational(other) => {
                let gcd1 = gcd_abs(self.numerator, other.denominator)?;
                let gcd2 = gcd_abs(other.numerator, self.denominator)?;
                Ok(Self {
                    numerator: overflowing((self.numerator / gcd1).checked_mul(&(other.numerator / gcd2)))?,
                    denominator: overflowing((self.denominator / gcd2).checked_mul(&(other.denominator / gcd1)))?
                })
            }
        }
    }
    /// Calculates division, but returns an error on overflow or if other is 0
    pub fn checked_div<O: Into<Operand<I>>>(self, other: O) -> Result<Self> {
        let other = other.into();
        if other.is_zero() {
            log::debug!("attempted to divide {} by zero", self);
            return Err(RationalError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(self);
        }
        let (numerator, denominator) = match other {
            Operand::Integer(i) => {
                let g = common_factor(self.numerator, i);
                (self.numerator / g, overflowing(self.denominator.checked_mul(&(i / g)))?)
            },
            Operand::Rational(other) => {
                // gcd1 may be negative, flipping both quotients; the sign fix
                // below undoes it
                let gcd1 = common_factor(self.numerator, other.numerator);
                let gcd2 = gcd_abs(other.denominator, self.denominator)?;
                (
                    overflowing((self.numerator / gcd1).checked_mul(&(other.denominator / gcd2)))?,
                    overflowing((self.denominator / gcd2).checked_mul(&(other.numerator / gcd1)))?
                )
            }
        };
        let (numerator, denominator) = sign_to_numerator(numerator, denominator)?;
        Ok(Self { numerator, denominator })
    }
    /// Calculates the remainder of a division truncated towards zero, so the
    /// result takes the sign of self. Fails on overflow or if other is 0.
    pub fn checked_rem<O: Into<Operand<I>>>(self, other: O) -> Result<Self> {
        let other = other.into();
        let quotient = self.checked_div(other)?.trunc();
        let product = match other {
            Operand::Integer(i) => Self::from_integer(overflowing(i.checked_mul(&quotient))?),
            Operand::Rational(other) => other.checked_mul(quotient)?
        };
        self.checked_sub(product)
    }
    /// The reciprocal 1/x. Fails with `DivisionByZero` for 0.
    pub fn checked_recip(self) -> Result<Self> {
        Self::from_integer(I::one()).checked_div(self)
    }
    /// Raise this value to an integer power. Negative powers take the
    /// reciprocal of the result, and any value to the power of 0 is 1, even 0.
    /// ```rust
    /// use rational_types::Rational;
    /// let x = Rational::new(2, 3).unwrap();
    /// assert_eq!(x.checked_pow(-3).unwrap(), Rational::new(27, 8).unwrap());
    /// ```
    pub fn checked_pow(self, exp: i64) -> Result<Self> {
        let mut base = self;
        let mut result = Self::from_integer(I::one());
        let mut remaining = exp.unsigned_abs();

        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result.checked_mul(base)?;
            }
            remaining >>= 1;
            if remaining > 0 {
                base = base.checked_mul(base)?;
            }
        }

        if exp < 0 {
            result.checked_recip()
        } else {
            Ok(result)
        }
    }
    /// Return this value with a positive sign, no matter if it's negative or
    /// already positive. Fails if the numerator is `I::min_value()`.
    pub fn checked_abs(self) -> Result<Self> {
        Ok(Self {
            numerator: checked_abs(self.numerator)?,
            denominator: self.denominator
        })
    }
    /// Flip the sign. Fails if the numerator is `I::min_value()`.
    pub fn checked_neg(self) -> Result<Self> {
        Ok(Self {
            numerator: overflowing(self.numerator.checked_neg())?,
            denominator: self.denominator
        })
    }

    /// Add 1 in place and return the new value
    pub fn increment(&mut self) -> Result<&mut Self> {
        // (n + d)/d shares no factor with d that n/d didn't
        self.numerator = overflowing(self.numerator.checked_add(&self.denominator))?;
        Ok(self)
    }
    /// Subtract 1 in place and return the new value
    pub fn decrement(&mut self) -> Result<&mut Self> {
        self.numerator = overflowing(self.numerator.checked_sub(&self.denominator))?;
        Ok(self)
    }
    /// Add 1 in place and return the value from before
    pub fn post_increment(&mut self) -> Result<Self> {
        let snapshot = *self;
        self.increment()?;
        Ok(snapshot)
    }
    /// Subtract 1 in place and return the value from before
    pub fn post_decrement(&mut self) -> Result<Self> {
        let snapshot = *self;
        self.decrement()?;
        Ok(snapshot)
    }

    /// Calculates the decimal result of this rational. Lossy.
    pub fn decimal(self) -> f64 {
        let numerator = self.numerator.to_f64().unwrap_or(std::f64::NAN);
        let denominator = self.denominator.to_f64().unwrap_or(std::f64::NAN);
        numerator / denominator
    }
    /// Calculates the integer part, rounded towards negative infinity
    pub fn floor(self) -> I {
        let quotient = self.numerator / self.denominator;
        if (self.numerator % self.denominator).is_negative() {
            quotient - I::one()
        } else {
            quotient
        }
    }
    /// Calculates the integer part, rounded towards zero
    pub fn trunc(self) -> I {
        self.numerator / self.denominator
    }
}
impl<I: Integer> fmt::Display for Rational<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.sign_plus() && !self.numerator.is_negative() {
            write!(f, "+")?;
        }
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Parse one side of a fraction in the given radix. Signs are allowed.
pub(crate) fn parse_integer<I: Integer>(input: &str, radix: u32) -> Result<I> {
    I::from_str_radix(input.trim(), radix).map_err(|_| {
        log::debug!("cannot parse {:?} as an integer", input);
        RationalError::InvalidFormat
    })
}
/// Parse `N` or `N/D` in the given radix, reducing the result
pub(crate) fn parse_rational<I: Integer>(input: &str, radix: u32) -> Result<Rational<I>> {
    let mut parts = input.splitn(2, '/');
    let numerator = parse_integer(parts.next().unwrap_or_default(), radix)?;
    let denominator = match parts.next() {
        Some(part) => parse_integer(part, radix)?,
        None => I::one()
    };
    Rational::new(numerator, denominator)
}
impl<I: Integer> FromStr for Rational<I> {
    type Err = RationalError;
    fn from_str(input: &str) -> Result<Self> {
        parse_rational(input, 10)
    }
}
