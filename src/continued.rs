use crate::{integer::overflowing, Integer, Rational, RationalError, Result};

use smallvec::SmallVec;

/// One step of the Euclidean expansion of n/d, with n = q*d + r and
/// 0 <= r < d. The quotients of successive steps are the terms of the
/// continued fraction.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Expansion<I> {
    pub n: I,
    pub d: I,
    pub q: I,
    pub r: I
}
impl<I: Integer> Expansion<I> {
    /// Start expanding n/d. The denominator must be positive.
    pub fn new(n: I, d: I) -> Self {
        let mut q = n / d;
        let mut r = n % d;
        // Floor instead of truncating: |r| < d, so one correction is enough
        if r.is_negative() {
            r = r + d;
            q = q - I::one();
        }
        Self { n, d, q, r }
    }
    /// Continue with the reciprocal of the fractional part. Only valid while
    /// `r` is not 0.
    pub fn step(&mut self) {
        self.n = self.d;
        self.d = self.r;
        self.q = self.n / self.d;
        self.r = self.n % self.d;
    }
}

impl<I: Integer> Rational<I> {
    /// Expand this value into its regular continued fraction
    /// `[a0; a1, a2, ...]`, where `a0` is the floor and every other term is
    /// positive.
    /// ```rust
    /// use rational_types::Rational;
    /// let x = Rational::new(-7, 3).unwrap();
    /// assert_eq!(&x.terms()[..], &[-3, 1, 2]);
    /// ```
    pub fn terms(self) -> SmallVec<[I; 16]> {
        let mut expansion = Expansion::new(self.numerator(), self.denominator());
        let mut terms = SmallVec::new();
        loop {
            terms.push(expansion.q);
            if expansion.r.is_zero() {
                break;
            }
            expansion.step();
        }
        terms
    }
    /// Evaluate a finite continued fraction `[a0; a1, ...]` back into a
    /// rational. Fails on an empty slice, on overflow, or if a tail
    /// evaluates to 0.
    pub fn from_terms(terms: &[I]) -> Result<Self> {
        let (last, rest) = terms.split_last().ok_or(RationalError::InvalidFormat)?;
        let mut value = Self::from_integer(*last);
        for &term in rest.iter().rev() {
            value = value.checked_recip()?.checked_add(term)?;
        }
        Ok(value)
    }
    /// Returns the successive convergents of the continued fraction, ending
    /// with the value itself
    pub fn convergents(self) -> Result<SmallVec<[Self; 16]>> {
        let terms = self.terms();
        let (mut h, mut h_prev) = (terms[0], I::one());
        let (mut k, mut k_prev) = (I::one(), I::zero());
        let mut convergents = SmallVec::new();
        convergents.push(Self::from_integer(h));
        for &term in &terms[1..] {
            let next_h = overflowing(overflowing(term.checked_mul(&h))?.checked_add(&h_prev))?;
            let next_k = overflowing(overflowing(term.checked_mul(&k))?.checked_add(&k_prev))?;
            h_prev = h;
            k_prev = k;
            h = next_h;
            k = next_k;
            convergents.push(Self::new(h, k)?);
        }
        Ok(convergents)
    }
}
