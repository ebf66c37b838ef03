use crate::adapters::source::SourceLocation;
use crate::utils::error::{EtlError, Result};

pub const SUPPORTED_FORMATS: [&str; 2] = ["json", "csv"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Accepts a local path or an http(s) URL.
pub fn validate_source(field_name: &str, location: &str) -> Result<()> {
    match SourceLocation::parse(location) {
        Ok(SourceLocation::File(path)) => validate_path(field_name, &path),
        Ok(SourceLocation::Http(_)) => Ok(()),
        Err(EtlError::MissingConfigError { .. }) => Err(EtlError::MissingConfigError {
            field: field_name.to_string(),
        }),
        Err(e) => Err(e),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// CSV delimiters must be a single ASCII character other than a quote or line break.
pub fn validate_delimiter(field_name: &str, delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() || matches!(delimiter, '"' | '\n' | '\r') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: delimiter.to_string(),
            reason: "Delimiter must be a single ASCII character other than quote or newline"
                .to_string(),
        });
    }
    Ok(delimiter as u8)
}

pub fn validate_output_formats(field_name: &str, formats: &[String]) -> Result<()> {
    if formats.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "At least one output format is required".to_string(),
        });
    }

    for (i, format) in formats.iter().enumerate() {
        if formats[..i].contains(format) {
            return Err(EtlError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: "Output format listed more than once".to_string(),
            });
        }

        if !SUPPORTED_FORMATS.contains(&format.as_str()) {
            return Err(EtlError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    SUPPORTED_FORMATS.join(", ")
                ),
            });
        }
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_source() {
        assert!(validate_source("source", "movielist.csv").is_ok());
        assert!(validate_source("source", "https://example.com/movielist.csv").is_ok());
        assert!(validate_source("source", "").is_err());
        assert!(validate_source("source", "https://").is_err());
        assert!(validate_source("source", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_delimiter() {
        assert_eq!(validate_delimiter("delimiter", ';').unwrap(), b';');
        assert_eq!(validate_delimiter("delimiter", '\t').unwrap(), b'\t');
        assert!(validate_delimiter("delimiter", '"').is_err());
        assert!(validate_delimiter("delimiter", 'é').is_err());
    }

    #[test]
    fn test_validate_output_formats() {
        let formats = vec!["json".to_string(), "csv".to_string()];
        assert!(validate_output_formats("formats", &formats).is_ok());

        let invalid = vec!["xml".to_string()];
        assert!(validate_output_formats("formats", &invalid).is_err());
        assert!(validate_output_formats("formats", &[]).is_err());
    }

    #[test]
    fn test_validate_output_formats_rejects_duplicates() {
        let duplicated = vec!["json".to_string(), "json".to_string()];
        let err = validate_output_formats("formats", &duplicated).unwrap_err();
        assert!(matches!(
            err,
            EtlError::InvalidConfigValueError { ref value, .. } if value == "json"
        ));

        let mixed = vec!["csv".to_string(), "json".to_string(), "csv".to_string()];
        assert!(validate_output_formats("formats", &mixed).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("archive", "awards.zip").is_ok());
        assert!(validate_non_empty_string("archive", "  ").is_err());
    }
}
