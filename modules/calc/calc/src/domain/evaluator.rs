use calc_sdk::Operator;

use super::error::DomainError;

pub const RESULT_OUT_OF_RANGE: &str = "result is out of range";

/// Applies `op` to two resolved operands.
///
/// Division checks the divisor before dividing, so a zero divisor never
/// produces an infinity or NaN. Any other non-finite result is rejected.
///
/// # Errors
///
/// `DivisionByZero` when dividing by zero (either sign), `Validation` when
/// the result overflows the `f64` range.
pub fn evaluate(op: Operator, lhs: f64, rhs: f64) -> Result<f64, DomainError> {
    let result = match op {
        Operator::Add => lhs + rhs,
        Operator::Subtract => lhs - rhs,
        Operator::Multiply => lhs * rhs,
        Operator::Divide => {
            if rhs == 0.0 {
                return Err(DomainError::DivisionByZero);
            }
            lhs / rhs
        }
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(DomainError::validation(RESULT_OUT_OF_RANGE))
    }
}
