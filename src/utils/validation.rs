use crate::utils::error::{RecordError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Error for a value that is not one of `allowed`.
pub fn vocabulary_error(field_name: &str, value: &str, allowed: &[&str]) -> RecordError {
    tracing::debug!(field = field_name, value, "rejected out-of-vocabulary value");
    RecordError::invalid_argument(
        field_name,
        value,
        format!("Allowed values: {}", allowed.join(", ")),
    )
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RecordError::invalid_argument(
            field_name,
            path,
            "Path cannot be empty",
        ));
    }

    if path.contains('\0') {
        return Err(RecordError::invalid_argument(
            field_name,
            path,
            "Path contains null bytes",
        ));
    }

    Ok(())
}

pub fn validate_min<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
) -> Result<()> {
    if value < min {
        return Err(RecordError::invalid_argument(
            field_name,
            &value.to_string(),
            format!("Value must be at least {}", min),
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(RecordError::invalid_argument(
            field_name,
            &value.to_string(),
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}
