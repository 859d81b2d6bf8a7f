// ABOUTME: Error types for parsing, validating and transforming token documents
// ABOUTME: Separates malformed input, schema violations and bad colors so callers can report each

use thiserror::Error;
use tokenvars_types::ValidationIssue;

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Failure of the full text → variables pipeline
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input is not JSON at all
    #[error("Failed to parse JSON file")]
    MalformedJson(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

impl ConvertError {
    /// Field-level issues, when the failure was a schema violation
    pub fn issues(&self) -> Option<&[ValidationIssue]> {
        match self {
            ConvertError::Validation(err) => Some(err.issues()),
            _ => None,
        }
    }
}

/// Every schema violation found in one pass over the document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Token document failed validation with {} issue(s)", .issues.len())]
pub struct ValidationError {
    issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }
}

/// Hex color string that cannot be converted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid hex color '{value}': {reason}")]
    InvalidHex { value: String, reason: &'static str },
}

impl ColorError {
    pub fn invalid_hex<S: Into<String>>(value: S, reason: &'static str) -> Self {
        Self::InvalidHex {
            value: value.into(),
            reason,
        }
    }
}

/// Aborts the whole transformation; no partial output is produced
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("colorSet entry '{key}' has an invalid color")]
    InvalidColor {
        key: String,
        #[source]
        source: ColorError,
    },
}

impl TransformError {
    pub fn invalid_color<S: Into<String>>(key: S, source: ColorError) -> Self {
        Self::InvalidColor {
            key: key.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokenvars_types::ValueKind;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new(vec![
            ValidationIssue::missing(vec!["typography".into()], ValueKind::Object),
            ValidationIssue::missing(vec!["spacing".into()], ValueKind::Object),
        ]);
        assert_eq!(
            err.to_string(),
            "Token document failed validation with 2 issue(s)"
        );
        assert_eq!(err.issues().len(), 2);
    }

    #[test]
    fn test_transform_error_names_entry() {
        let err = TransformError::invalid_color(
            "primary500",
            ColorError::invalid_hex("#12345", "expected 3 or 6 hex digits"),
        );
        assert_eq!(err.to_string(), "colorSet entry 'primary500' has an invalid color");
        assert_eq!(
            std::error::Error::source(&err).map(ToString::to_string),
            Some("Invalid hex color '#12345': expected 3 or 6 hex digits".to_string())
        );
    }

    #[test]
    fn test_convert_error_issues() {
        let validation = ConvertError::from(ValidationError::new(vec![ValidationIssue::missing(
            vec!["colorSet".into()],
            ValueKind::Object,
        )]));
        assert_eq!(validation.issues().map(<[_]>::len), Some(1));

        let malformed: ConvertError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(malformed.issues().is_none());
        assert_eq!(malformed.to_string(), "Failed to parse JSON file");
    }
}
