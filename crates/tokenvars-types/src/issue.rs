// ABOUTME: Field-level validation issue types reported for rejected token documents
// ABOUTME: Paths are key/index segment lists so a display layer can render them as a tree

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// One step in the path from the document root to a failing field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// JSON value kinds as reported in type mismatch messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    String,
    Number,
    Boolean,
    Null,
    Array,
    Object,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => ValueKind::String,
            Value::Number(_) => ValueKind::Number,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Null => ValueKind::Null,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Null => "null",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum IssueKind {
    /// Required field is absent
    Missing { expected: ValueKind },
    /// Field is present with the wrong type (no coercion is attempted)
    InvalidType {
        expected: ValueKind,
        received: ValueKind,
    },
    /// Structurally valid but rejected while re-typing the value
    Custom,
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub path: Vec<PathSegment>,
    #[serde(flatten)]
    pub kind: IssueKind,
    pub message: String,
}

impl ValidationIssue {
    /// Create a missing-field issue
    pub fn missing(path: Vec<PathSegment>, expected: ValueKind) -> Self {
        Self {
            path,
            kind: IssueKind::Missing { expected },
            message: "Required".to_string(),
        }
    }

    /// Create a wrong-type issue
    pub fn invalid_type(path: Vec<PathSegment>, expected: ValueKind, received: ValueKind) -> Self {
        Self {
            path,
            kind: IssueKind::InvalidType { expected, received },
            message: format!("Expected {expected}, received {received}"),
        }
    }

    /// Create an issue with a free-form message
    pub fn custom<M: Into<String>>(path: Vec<PathSegment>, message: M) -> Self {
        Self {
            path,
            kind: IssueKind::Custom,
            message: message.into(),
        }
    }

    /// Dotted path such as `colorSet.mode1.primary500`, or `<root>` for the document itself
    pub fn path_string(&self) -> String {
        if self.path.is_empty() {
            return "<root>".to_string();
        }

        let mut out = String::new();
        for segment in &self.path {
            if matches!(segment, PathSegment::Key(_)) && !out.is_empty() {
                out.push('.');
            }
            out.push_str(&segment.to_string());
        }
        out
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path_string(), self.message)
    }
}
