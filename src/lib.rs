mod args;
mod cmp;
mod continued;
mod error;
mod integer;
mod operand;
mod ops;
mod rational;

pub use self::args::*;
pub use self::error::*;
pub use self::integer::{gcd, gcd_abs, Integer};
pub use self::operand::*;
pub use self::rational::*;
