use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Construction was given an unsupported number of positional arguments.
    #[error("can use 0, 1 or 3 positional arguments, but there are {given}")]
    InvalidArgumentCount { given: usize },

    /// A value expected to be numeric (or, for frame axes, a vector) was
    /// neither.
    #[error("argument of kind '{kind}' cannot be used here")]
    InvalidArgumentType { kind: &'static str },

    /// A named argument used a key outside the recognized set.
    #[error("incorrect keyword argument: {0}")]
    UnknownField(String),

    /// An arithmetic operand had the wrong kind.
    #[error("operand of kind '{kind}' has an incorrect type")]
    InvalidOperandType { kind: &'static str },

    /// Scalar division by zero, or projection onto the zero vector.
    #[error("cannot divide by zero")]
    DivisionByZero,
}
