use crate::utils::error::{ReceiptError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(ReceiptError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReceiptError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Shared checks for anything that describes a listening socket.
pub fn validate_listen_address(host_field: &str, host: &str, port_field: &str, port: u16) -> Result<()> {
    validate_non_empty_string(host_field, host)?;
    if host.contains(char::is_whitespace) {
        return Err(ReceiptError::InvalidConfigValueError {
            field: host_field.to_string(),
            value: host.to_string(),
            reason: "Host cannot contain whitespace".to_string(),
        });
    }
    validate_positive_number(port_field, port as usize, 1)
}
