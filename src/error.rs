use thiserror::Error;

/// Everything that can go wrong while building or combining rationals
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RationalError {
    #[error("invalid number of arguments: expected {expected}, found {found}")]
    InvalidArity {
        expected: &'static str,
        found: usize
    },

    #[error("invalid argument")]
    InvalidArgument,

    #[error("big integers are not accepted")]
    UnsupportedType,

    #[error("bad rational: zero denominator")]
    ZeroDenominator,

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow")]
    Overflow,

    #[error("bad rational: denormalized conversion")]
    Denormalized,

    #[error("invalid rational format")]
    InvalidFormat,

    #[error("unknown method")]
    UnknownMethod
}

pub type Result<T> = std::result::Result<T, RationalError>;
