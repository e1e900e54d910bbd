use crate::{continued::Expansion, Integer, Rational};

use std::cmp::Ordering;

impl<I: Integer> Rational<I> {
    /// Returns true if self is strictly smaller than other. Both values are
    /// expanded as continued fractions side by side and the first differing
    /// term decides, so no common denominator is ever formed and nothing can
    /// overflow.
    pub fn less_than(&self, other: &Self) -> bool {
        let mut ts = Expansion::new(self.numerator(), self.denominator());
        let mut rs = Expansion::new(other.numerator(), other.denominator());

        // Every step takes a reciprocal, which flips the ordering
        let mut reverse = false;

        loop {
            if ts.q != rs.q {
                return if reverse { ts.q > rs.q } else { ts.q < rs.q };
            }

            reverse = !reverse;

            if ts.r.is_zero() || rs.r.is_zero() {
                break;
            }

            ts.step();
            rs.step();
        }

        if ts.r == rs.r {
            // Same expansion all the way down
            false
        } else {
            // Whichever side still has a fractional part is the larger one
            !ts.r.is_zero() != reverse
        }
    }
    /// Returns true if self is strictly larger than other
    pub fn greater_than(&self, other: &Self) -> bool {
        !(self.less_than(other) || self == other)
    }
}
impl<I: Integer> PartialOrd for Rational<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<I: Integer> Ord for Rational<I> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.less_than(other) {
            Ordering::Less
        } else if self == other {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }
}

impl<I: Integer> PartialEq<I> for Rational<I> {
    fn eq(&self, other: &I) -> bool {
        self.is_integer() && self.numerator() == *other
    }
}
impl<I: Integer> PartialOrd<I> for Rational<I> {
    fn partial_cmp(&self, other: &I) -> Option<Ordering> {
        Some(if self == other {
            Ordering::Equal
        } else if self.floor() < *other {
            Ordering::Less
        } else {
            Ordering::Greater
        })
    }
}
