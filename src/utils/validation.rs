use crate::utils::error::{ArchiveError, Result};
use chrono::NaiveDate;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ArchiveError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ArchiveError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(ArchiveError::ValidationError {
            field: field_name.to_string(),
            reason: "Value must be greater than zero".to_string(),
        });
    }
    Ok(())
}

pub fn validate_extensions(field_name: &str, extensions: &[String]) -> Result<()> {
    if extensions.is_empty() {
        return Err(ArchiveError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "At least one extension is required".to_string(),
        });
    }

    for ext in extensions {
        if ext.is_empty() || ext.starts_with('.') || ext.contains('/') {
            return Err(ArchiveError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: ext.clone(),
                reason: "Extensions are bare suffixes such as 'jpg'".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ArchiveError::ValidationError {
            field: field_name.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Parses a calendar date written as `YYYY-MM-DD`.
pub fn parse_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        ArchiveError::InvalidDateError {
            field: field_name.to_string(),
            value: value.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("archive.path", "./data/saveFile.json").is_ok());
        assert!(validate_path("archive.path", "").is_err());
        assert!(validate_path("archive.path", "bad\0name.json").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("iso", 400).is_ok());
        assert!(validate_positive_number("iso", 0).is_err());
    }

    #[test]
    fn test_validate_extensions() {
        let exts = vec!["jpg".to_string(), "png".to_string()];
        assert!(validate_extensions("photos.extensions", &exts).is_ok());
        assert!(validate_extensions("photos.extensions", &[]).is_err());
        assert!(validate_extensions("photos.extensions", &[".jpg".to_string()]).is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("expiry", "2020-12-30").unwrap(),
            NaiveDate::from_ymd_opt(2020, 12, 30).unwrap()
        );
        assert!(parse_date("expiry", "2021-02-30").is_err());
        assert!(parse_date("expiry", "30/12/2020").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "Portra").is_ok());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }
}
