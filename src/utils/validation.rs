use crate::utils::error::{CicsError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Blank (empty or whitespace-only) required API parameter.
pub fn require_parameter(label: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CicsError::MissingParameterError {
            field: label.to_string(),
        });
    }
    Ok(())
}

/// Like [`require_parameter`] for parameters that are optional in the bag
/// but required by a particular action.
pub fn require_optional_parameter<'a>(label: &str, value: &'a Option<String>) -> Result<&'a str> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CicsError::MissingParameterError {
            field: label.to_string(),
        }),
    }
}

/// A positional CLI argument passed as an empty string counts as missing.
pub fn require_positional(argument: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CicsError::MissingPositionalError {
            argument: argument.to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| CicsError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CicsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CicsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CicsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(CicsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
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
        return Err(CicsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Restricts `value` to one of `allowed` (case-insensitive) and returns the
/// canonical upper-case spelling CMCI expects.
pub fn validate_choice(field_name: &str, value: &str, allowed: &[&str]) -> Result<String> {
    let upper = value.trim().to_ascii_uppercase();
    if allowed.contains(&upper.as_str()) {
        Ok(upper)
    } else {
        Err(CicsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_parameter() {
        assert!(require_parameter("CICS Program name", "PGM1").is_ok());
        let err = require_parameter("CICS Program name", "  ").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expect Error: Required parameter 'CICS Program name' must not be blank"
        );
    }

    #[test]
    fn test_require_optional_parameter() {
        assert_eq!(
            require_optional_parameter("CSD group", &Some("GRP".to_string())).unwrap(),
            "GRP"
        );
        assert!(require_optional_parameter("CSD group", &None).is_err());
        assert!(require_optional_parameter("CSD group", &Some(String::new())).is_err());
    }

    #[test]
    fn test_require_positional() {
        let err = require_positional("urimapName", "").unwrap_err();
        assert!(err.to_string().contains("Missing Positional Argument: urimapName"));
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("timeout", 5, 1).is_ok());
        assert!(validate_positive_number("timeout", 0, 1).is_err());
    }

    #[test]
    fn test_validate_choice() {
        assert_eq!(validate_choice("authenticate", "basic", &["NO", "BASIC"]).unwrap(), "BASIC");
        assert!(validate_choice("authenticate", "digest", &["NO", "BASIC"]).is_err());
    }
}
