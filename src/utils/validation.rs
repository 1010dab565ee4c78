use crate::utils::error::{PanelError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PanelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    validate_non_empty_string(field_name, path)?;

    if path.contains('\0') {
        return Err(PanelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Environment variable names must be usable with `std::env::var`.
pub fn validate_env_var_name(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    if name.contains('=') || name.contains('\0') {
        return Err(PanelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Environment variable names cannot contain '=' or null bytes".to_string(),
        });
    }

    Ok(())
}

/// A single command-line argument; whitespace would be passed verbatim, not split.
pub fn validate_single_argument(field_name: &str, arg: &str) -> Result<()> {
    validate_non_empty_string(field_name, arg)?;

    if arg.chars().any(char::is_whitespace) {
        return Err(PanelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: arg.to_string(),
            reason: "Argument must be a single word".to_string(),
        });
    }

    Ok(())
}
