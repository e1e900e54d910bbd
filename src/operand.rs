use crate::{Integer, Rational};

/// The right hand side of an arithmetic operation. Integers get their own
/// variant because every operation has a cheaper path for them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand<I: Integer> {
    Rational(Rational<I>),
    Integer(I)
}
impl<I: Integer> Operand<I> {
    /// Return the numerator the operand would have as a rational
    pub fn numerator(self) -> I {
        match self {
            Operand::Rational(r) => r.numerator(),
            Operand::Integer(i) => i
        }
    }
    /// Returns true if the operand is 0
    pub fn is_zero(self) -> bool {
        self.numerator().is_zero()
    }
}
impl<I: Integer> From<Rational<I>> for Operand<I> {
    fn from(r: Rational<I>) -> Self {
        Operand::Rational(r)
    }
}
impl<'a, I: Integer> From<&'a Rational<I>> for Operand<I> {
    fn from(r: &'a Rational<I>) -> Self {
        Operand::Rational(*r)
    }
}
impl<I: Integer> From<I> for Operand<I> {
    fn from(i: I) -> Self {
        Operand::Integer(i)
    }
}
