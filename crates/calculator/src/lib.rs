// This is the calculator crate, providing the four integer arithmetic operations.

use tracing::debug;

mod error;

pub use error::{CalcError, DIVISION_BY_ZERO_MESSAGE, Result};

/// Stateless calculator over `i64` operands.
///
/// Addition, subtraction and multiplication wrap on overflow in every build
/// profile, so none of them can panic. Division widens both operands to `f64`
/// and fails only when the divisor is zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: i64, b: i64) -> i64 {
        debug!(a, b, "add");
        a.wrapping_add(b)
    }

    pub fn subtract(&self, a: i64, b: i64) -> i64 {
        debug!(a, b, "subtract");
        a.wrapping_sub(b)
    }

    pub fn multiply(&self, a: i64, b: i64) -> i64 {
        debug!(a, b, "multiply");
        a.wrapping_mul(b)
    }

    /// Floating-point quotient `a / b`, so `divide(5, 2)` is `2.5`.
    pub fn divide(&self, a: i64, b: i64) -> Result<f64> {
        debug!(a, b, "divide");
        if b == 0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(a as f64 / b as f64)
    }
}
