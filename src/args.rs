//! Loosely typed calls into `Rational`, for embedding it in a dynamic host
//! (a scripting language, a calculator REPL, ...). Values arrive as `Arg`s
//! and are coerced to integers the way such hosts expect: numbers are
//! truncated towards zero, numeric text is parsed, and big integers are
//! refused outright.

use crate::{integer::overflowing, Integer, Operand, Rational, RationalError, Result};

use log::{debug, trace};
use num_traits::NumCast;

/// A scalar value handed over by the host
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar<'a> {
    Integer(i128),
    Number(f64),
    Text(&'a str),
    /// An arbitrary precision integer literal, in whatever textual form the
    /// host uses. Never accepted.
    BigInt(&'a str),
    /// Anything else, named by its type
    Other(&'static str)
}
impl<'a> Scalar<'a> {
    /// Coerce this value into an integer, truncating towards zero
    pub fn to_integer<I: Integer>(self) -> Result<I> {
        match self {
            Scalar::Integer(i) => overflowing(<I as NumCast>::from(i)),
            Scalar::Number(f) => truncate(f),
            Scalar::Text(text) => parse_text(text),
            Scalar::BigInt(_) => {
                debug!("refusing big integer argument");
                Err(RationalError::UnsupportedType)
            },
            Scalar::Other(kind) => {
                debug!("cannot coerce a value of type {} into an integer", kind);
                Err(RationalError::InvalidArgument)
            }
        }
    }
}
/// Read numeric text: decimal integers, floats (truncated), and unsigned
/// `0x`, `0o` and `0b` literals. Text made only of whitespace reads as 0,
/// but empty text is rejected.
fn parse_text<I: Integer>(text: &str) -> Result<I> {
    let invalid = || {
        debug!("cannot coerce {:?} into an integer", text);
        RationalError::InvalidArgument
    };
    if text.is_empty() {
        return Err(invalid());
    }
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(I::zero());
    }

    const PREFIXES: [(&str, u32); 6] = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)];
    for &(prefix, radix) in &PREFIXES {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            if digits.starts_with(|c: char| c == '+' || c == '-') {
                return Err(invalid());
            }
            return I::from_str_radix(digits, radix).map_err(|_| invalid());
        }
    }

    match I::from_str_radix(trimmed, 10) {
        Ok(i) => Ok(i),
        Err(_) => trimmed.parse::<f64>().map_err(|_| invalid()).and_then(truncate)
    }
}
fn truncate<I: Integer>(f: f64) -> Result<I> {
    if !f.is_finite() {
        debug!("cannot coerce {} into an integer", f);
        return Err(RationalError::InvalidArgument);
    }
    overflowing(<I as NumCast>::from(f.trunc()))
}
impl<'a> From<f64> for Scalar<'a> {
    fn from(f: f64) -> Self {
        Scalar::Number(f)
    }
}
impl<'a> From<&'a str> for Scalar<'a> {
    fn from(text: &'a str) -> Self {
        Scalar::Text(text)
    }
}

/// One argument of a dynamic call
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Arg<'a, I: Integer = i64> {
    Rational(Rational<I>),
    Scalar(Scalar<'a>)
}
impl<'a, I: Integer> Arg<'a, I> {
    /// Coerce into an integer. Rationals are never accepted here.
    pub fn to_integer<J: Integer>(self) -> Result<J> {
        match self {
            Arg::Rational(_) => Err(RationalError::InvalidArgument),
            Arg::Scalar(scalar) => scalar.to_integer()
        }
    }
    /// Coerce into the right hand side of an arithmetic operation
    pub fn to_operand(self) -> Result<Operand<I>> {
        match self {
            Arg::Rational(r) => Ok(Operand::Rational(r)),
            Arg::Scalar(scalar) => Ok(Operand::Integer(scalar.to_integer()?))
        }
    }
}
impl<'a, I: Integer> From<Rational<I>> for Arg<'a, I> {
    fn from(r: Rational<I>) -> Self {
        Arg::Rational(r)
    }
}
impl<'a, I: Integer> From<Scalar<'a>> for Arg<'a, I> {
    fn from(scalar: Scalar<'a>) -> Self {
        Arg::Scalar(scalar)
    }
}

/// The result of a dynamic call
#[derive(Clone, Debug, PartialEq)]
pub enum Reply<I: Integer = i64> {
    Rational(Rational<I>),
    Integer(I),
    Bool(bool),
    Number(f64),
    Text(String)
}

fn arity<I: Integer>(args: &[Arg<I>], count: usize, expected: &'static str) -> Result<()> {
    if args.len() == count {
        Ok(())
    } else {
        debug!("expected {} arguments, got {}", expected, args.len());
        Err(RationalError::InvalidArity {
            expected,
            found: args.len()
        })
    }
}
fn no_args<I: Integer>(args: &[Arg<I>]) -> Result<()> {
    arity(args, 0, "0")
}
fn single<'a, I: Integer>(args: &[Arg<'a, I>]) -> Result<Arg<'a, I>> {
    arity(args, 1, "1")?;
    Ok(args[0])
}

impl<I: Integer> Rational<I> {
    /// Construct a rational from zero, one or two loosely typed arguments:
    /// nothing is 0, a single rational is copied, a single scalar is
    /// coerced into an integer, and two scalars are a numerator and a
    /// denominator.
    /// ```rust
    /// use rational_types::{Arg, Rational, Scalar};
    /// let args = [Arg::Scalar(Scalar::Text("6")), Arg::Scalar(Scalar::Number(-4.9))];
    /// assert_eq!(Rational::<i64>::from_args(&args), Rational::new(-3, 2));
    /// ```
    pub fn from_args(args: &[Arg<I>]) -> Result<Self> {
        match args {
            [] => Ok(Self::default()),
            [Arg::Rational(r)] => Ok(*r),
            [Arg::Scalar(scalar)] => Ok(Self::from_integer(scalar.to_integer()?)),
            [numerator, denominator] => Self::new(numerator.to_integer()?, denominator.to_integer()?),
            _ => {
                debug!("expected 0, 1 or 2 arguments, got {}", args.len());
                Err(RationalError::InvalidArity {
                    expected: "0, 1 or 2",
                    found: args.len()
                })
            }
        }
    }
    /// Call an operation by its name. Arithmetic and increments mutate self
    /// in place, like methods on a host object would, and reply with the
    /// new value (or the old one for the post forms). On error self is left
    /// unchanged.
    pub fn call(&mut self, method: &str, args: &[Arg<I>]) -> Result<Reply<I>> {
        trace!("{}.{} with {} arguments", self, method, args.len());

        let reply = match method {
            "add" => Reply::Rational(*self.apply(self.checked_add(single(args)?.to_operand()?)?)),
            "sub" => Reply::Rational(*self.apply(self.checked_sub(single(args)?.to_operand()?)?)),
            "mul" => Reply::Rational(*self.apply(self.checked_mul(single(args)?.to_operand()?)?)),
            "div" => Reply::Rational(*self.apply(self.checked_div(single(args)?.to_operand()?)?)),
            "pow" => Reply::Rational(*self.apply(self.checked_pow(single(args)?.to_integer()?)?)),
            "assign" => {
                if args.is_empty() {
                    arity(args, 1, "1 or 2")?;
                }
                Reply::Rational(*self.apply(Self::from_args(args)?))
            },

            "preInc" => {
                no_args(args)?;
                Reply::Rational(*self.increment()?)
            },
            "preDec" => {
                no_args(args)?;
                Reply::Rational(*self.decrement()?)
            },
            "postInc" => {
                no_args(args)?;
                Reply::Rational(self.post_increment()?)
            },
            "postDec" => {
                no_args(args)?;
                Reply::Rational(self.post_decrement()?)
            },

            "abs" => {
                no_args(args)?;
                Reply::Rational(*self.apply(self.checked_abs()?))
            },
            "neg" => {
                no_args(args)?;
                Reply::Rational(*self.apply(self.checked_neg()?))
            },
            "not" => {
                no_args(args)?;
                Reply::Bool(self.is_zero())
            },
            "bool" => {
                no_args(args)?;
                Reply::Bool(self.to_bool())
            },

            "lessThan" => Reply::Bool(match single(args)?.to_operand()? {
                Operand::Rational(other) => self.less_than(&other),
                Operand::Integer(i) => *self < i
            }),
            "greaterThan" => Reply::Bool(match single(args)?.to_operand()? {
                Operand::Rational(other) => self.greater_than(&other),
                Operand::Integer(i) => *self > i
            }),
            "equalTo" => Reply::Bool(match single(args)?.to_operand()? {
                Operand::Rational(other) => *self == other,
                Operand::Integer(i) => *self == i
            }),
            "notEqualTo" => Reply::Bool(match single(args)?.to_operand()? {
                Operand::Rational(other) => *self != other,
                Operand::Integer(i) => *self != i
            }),

            "valueOf" => {
                no_args(args)?;
                Reply::Number(self.decimal())
            },
            "toString" => {
                no_args(args)?;
                Reply::Text(self.to_string())
            },
            "getNumerator" => {
                no_args(args)?;
                Reply::Integer(self.numerator())
            },
            "getDenominator" => {
                no_args(args)?;
                Reply::Integer(self.denominator())
            },

            _ => {
                debug!("no method named {:?}", method);
                return Err(RationalError::UnknownMethod);
            }
        };
        Ok(reply)
    }
    fn apply(&mut self, value: Self) -> &mut Self {
        *self = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(numerator: i64, denominator: i64) -> Rational {
        Rational::new(numerator, denominator).unwrap()
    }
    fn int<'a>(i: i128) -> Arg<'a> {
        Arg::Scalar(Scalar::Integer(i))
    }
    fn text(s: &str) -> Arg {
        Arg::Scalar(Scalar::Text(s))
    }

    #[test]
    fn coerce() {
        assert_eq!(Scalar::Integer(5).to_integer::<i64>(), Ok(5));
        assert_eq!(Scalar::Integer(300).to_integer::<i8>(), Err(RationalError::Overflow));
        assert_eq!(Scalar::Number(2.9).to_integer::<i64>(), Ok(2));
        assert_eq!(Scalar::Number(-2.9).to_integer::<i64>(), Ok(-2));
        assert_eq!(Scalar::Number(std::f64::NAN).to_integer::<i64>(), Err(RationalError::InvalidArgument));
        assert_eq!(Scalar::Number(std::f64::INFINITY).to_integer::<i64>(), Err(RationalError::InvalidArgument));
        assert_eq!(Scalar::Number(1e30).to_integer::<i64>(), Err(RationalError::Overflow));
        assert_eq!(Scalar::Text(" 42 ").to_integer::<i64>(), Ok(42));
        assert_eq!(Scalar::Text("-7.8").to_integer::<i64>(), Ok(-7));
        assert_eq!(Scalar::Text("seven").to_integer::<i64>(), Err(RationalError::InvalidArgument));
        assert_eq!(Scalar::Text("").to_integer::<i64>(), Err(RationalError::InvalidArgument));
        assert_eq!(Scalar::Text("   ").to_integer::<i64>(), Ok(0));
        assert_eq!(Scalar::Text("0x10").to_integer::<i64>(), Ok(16));
        assert_eq!(Scalar::Text(" 0B101 ").to_integer::<i64>(), Ok(5));
        assert_eq!(Scalar::Text("0o17").to_integer::<i64>(), Ok(15));
        assert_eq!(Scalar::Text("0x-1").to_integer::<i64>(), Err(RationalError::InvalidArgument));
        assert_eq!(Scalar::Text("0x").to_integer::<i64>(), Err(RationalError::InvalidArgument));
        assert_eq!(Scalar::Text("0xfg").to_integer::<i64>(), Err(RationalError::InvalidArgument));
        assert_eq!(Scalar::Text("1e3").to_integer::<i64>(), Ok(1000));
        assert_eq!(Scalar::BigInt("12n").to_integer::<i64>(), Err(RationalError::UnsupportedType));
        assert_eq!(Scalar::Other("object").to_integer::<i64>(), Err(RationalError::InvalidArgument));
    }

    #[test]
    fn construct() {
        assert_eq!(Rational::from_args(&[]), Ok(r(0, 1)));
        assert_eq!(Rational::from_args(&[int(3)]), Ok(r(3, 1)));
        assert_eq!(Rational::from_args(&[Arg::Rational(r(2, 3))]), Ok(r(2, 3)));
        assert_eq!(Rational::from_args(&[int(4), text("-6")]), Ok(r(-2, 3)));
        assert_eq!(Rational::from_args(&[Arg::Scalar(Scalar::Number(7.5)), int(2)]), Ok(r(7, 2)));
        assert_eq!(Rational::<i64>::from_args(&[int(1), int(0)]), Err(RationalError::ZeroDenominator));
        assert_eq!(Rational::from_args(&[int(1), Arg::Rational(r(1, 2))]), Err(RationalError::InvalidArgument));
        assert_eq!(
            Rational::<i64>::from_args(&[Arg::Scalar(Scalar::BigInt("1")), int(2)]),
            Err(RationalError::UnsupportedType)
        );
        assert_eq!(
            Rational::<i64>::from_args(&[int(1), int(2), int(3)]),
            Err(RationalError::InvalidArity { expected: "0, 1 or 2", found: 3 })
        );
    }

    #[test]
    fn arithmetic() {
        let mut x = r(1, 1);
        assert_eq!(x.call("add", &[Arg::Rational(r(1, 1))]), Ok(Reply::Rational(r(2, 1))));
        assert_eq!(x, r(2, 1));
        assert_eq!(x.call("mul", &[Arg::Rational(r(1, 2))]), Ok(Reply::Rational(r(1, 1))));
        assert_eq!(x.call("sub", &[text("3")]), Ok(Reply::Rational(r(-2, 1))));
        assert_eq!(x.call("div", &[int(-4)]), Ok(Reply::Rational(r(1, 2))));
        assert_eq!(x.call("pow", &[int(-2)]), Ok(Reply::Rational(r(4, 1))));
        assert_eq!(x.call("pow", &[Arg::Rational(r(1, 2))]), Err(RationalError::InvalidArgument));
        assert_eq!(x.call("div", &[int(0)]), Err(RationalError::DivisionByZero));
        assert_eq!(x, r(4, 1));
        assert_eq!(
            x.call("add", &[]),
            Err(RationalError::InvalidArity { expected: "1", found: 0 })
        );
        assert_eq!(x.call("assign", &[int(6), int(4)]), Ok(Reply::Rational(r(3, 2))));
        assert_eq!(x.call("assign", &[int(6), int(0)]), Err(RationalError::ZeroDenominator));
        assert_eq!(x, r(3, 2));
        assert!(x.call("assign", &[]).is_err());
    }

    #[test]
    fn increments() {
        let mut x = r(1, 2);
        assert_eq!(x.call("postInc", &[]), Ok(Reply::Rational(r(1, 2))));
        assert_eq!(x.call("preInc", &[]), Ok(Reply::Rational(r(5, 2))));
        assert_eq!(x.call("postDec", &[]), Ok(Reply::Rational(r(5, 2))));
        assert_eq!(x.call("preDec", &[]), Ok(Reply::Rational(r(1, 2))));
        assert_eq!(
            x.call("preInc", &[int(1)]),
            Err(RationalError::InvalidArity { expected: "0", found: 1 })
        );
    }

    #[test]
    fn predicates() {
        let mut x = r(-1, 2);
        assert_eq!(x.call("not", &[]), Ok(Reply::Bool(false)));
        assert_eq!(x.call("bool", &[]), Ok(Reply::Bool(true)));
        assert_eq!(x.call("lessThan", &[int(0)]), Ok(Reply::Bool(true)));
        assert_eq!(x.call("lessThan", &[Arg::Rational(r(-2, 3))]), Ok(Reply::Bool(false)));
        assert_eq!(x.call("greaterThan", &[Arg::Rational(r(-2, 3))]), Ok(Reply::Bool(true)));
        assert_eq!(x.call("equalTo", &[Arg::Rational(r(2, -4))]), Ok(Reply::Bool(true)));
        assert_eq!(x.call("notEqualTo", &[int(0)]), Ok(Reply::Bool(true)));
        assert_eq!(x.call("abs", &[]), Ok(Reply::Rational(r(1, 2))));
        assert_eq!(x.call("neg", &[]), Ok(Reply::Rational(r(-1, 2))));
        assert_eq!(x.call("valueOf", &[]), Ok(Reply::Number(-0.5)));
        assert_eq!(x.call("toString", &[]), Ok(Reply::Text("-1/2".to_string())));
        assert_eq!(x.call("getNumerator", &[]), Ok(Reply::Integer(-1)));
        assert_eq!(x.call("getDenominator", &[]), Ok(Reply::Integer(2)));
        assert!(x.call("equalTo", &[]).is_err());
        assert_eq!(x.call("sqrt", &[]), Err(RationalError::UnknownMethod));

        let mut zero = Rational::<i64>::default();
        assert_eq!(zero.call("not", &[]), Ok(Reply::Bool(true)));
    }
}
