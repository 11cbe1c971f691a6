use crate::errors::CoreError;

/// Parse a user-entered number that must be finite and strictly positive.
///
/// `field` names the input in the error message, e.g. "Quantity".
pub fn parse_positive(input: &str, field: &str) -> Result<f64, CoreError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidInput(format!("{field} is required")));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| CoreError::InvalidInput(format!("{field} must be a positive number")))?;
    require_positive(value, field)
}

/// Reject NaN, infinities, zero and negatives.
pub fn require_positive(value: f64, field: &str) -> Result<f64, CoreError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CoreError::InvalidInput(format!(
            "{field} must be a positive number"
        )));
    }
    Ok(value)
}

/// Reject a derived amount (a product or sum of valid inputs) that
/// overflowed past `f64::MAX`.
pub fn require_finite(value: f64, field: &str) -> Result<f64, CoreError> {
    if !value.is_finite() {
        return Err(CoreError::InvalidInput(format!("{field} is too large")));
    }
    Ok(value)
}

/// Trim a required text input, rejecting blank values.
pub fn require_text<'a>(input: &'a str, field: &str) -> Result<&'a str, CoreError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidInput(format!("{field} cannot be empty")));
    }
    Ok(trimmed)
}

