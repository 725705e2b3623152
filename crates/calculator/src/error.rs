use thiserror::Error;

/// Text carried by [`CalcError::DivisionByZero`]. Callers match on it verbatim.
pub const DIVISION_BY_ZERO_MESSAGE: &str = "деление на ноль невозможно";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The divisor passed to [`crate::Calculator::divide`] was zero.
    #[error("{}", DIVISION_BY_ZERO_MESSAGE)]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, CalcError>;
