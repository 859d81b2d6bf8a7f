// ABOUTME: Schema validator checking an unstructured JSON value against the token document shape
// ABOUTME: Collects every field-level issue in one pass before re-typing the value

use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;
use tokenvars_logging::debug;
use tokenvars_types::{PathSegment, TokenDocument, ValidationIssue, ValueKind};

use crate::error::ValidationError;

/// Declarative description of an expected JSON shape
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    String,
    Number,
    /// Fixed set of required fields; unknown fields are ignored
    Object(Vec<(&'static str, Schema)>),
    /// Arbitrary keys, every value matching the inner schema
    Record(Box<Schema>),
}

impl Schema {
    pub fn object<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Schema)>,
    {
        Schema::Object(fields.into_iter().collect())
    }

    pub fn record(values: Schema) -> Self {
        Schema::Record(Box::new(values))
    }

    /// `{ "mode1": <inner> }`
    pub fn single_mode(inner: Schema) -> Self {
        Schema::object([("mode1", inner)])
    }

    fn fields_of(names: &[&'static str], leaf: Schema) -> Self {
        Schema::object(names.iter().map(|name| (*name, leaf.clone())))
    }

    /// Kind a value must have to satisfy this schema
    pub fn expected_kind(&self) -> ValueKind {
        match self {
            Schema::String => ValueKind::String,
            Schema::Number => ValueKind::Number,
            Schema::Object(_) | Schema::Record(_) => ValueKind::Object,
        }
    }

    /// Check `value` and return every issue found, in document order.
    pub fn check(&self, value: &Value) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        let mut path = Vec::new();
        self.check_at(value, &mut path, &mut issues);
        issues
    }

    fn check_at(
        &self,
        value: &Value,
        path: &mut Vec<PathSegment>,
        issues: &mut Vec<ValidationIssue>,
    ) {
        match self {
            Schema::String if value.is_string() => {}
            Schema::Number if value.is_number() => {}
            Schema::String | Schema::Number => issues.push(ValidationIssue::invalid_type(
                path.clone(),
                self.expected_kind(),
                ValueKind::of(value),
            )),
            Schema::Object(fields) => {
                let Some(map) = value.as_object() else {
                    issues.push(ValidationIssue::invalid_type(
                        path.clone(),
                        ValueKind::Object,
                        ValueKind::of(value),
                    ));
                    return;
                };

                for (name, field) in fields {
                    path.push(PathSegment::Key((*name).to_string()));
                    match map.get(*name) {
                        Some(child) => field.check_at(child, path, issues),
                        None => issues.push(ValidationIssue::missing(
                            path.clone(),
                            field.expected_kind(),
                        )),
                    }
                    path.pop();
                }
            }
            Schema::Record(values) => {
                let Some(map) = value.as_object() else {
                    issues.push(ValidationIssue::invalid_type(
                        path.clone(),
                        ValueKind::Object,
                        ValueKind::of(value),
                    ));
                    return;
                };

                for (key, child) in map {
                    path.push(PathSegment::Key(key.clone()));
                    values.check_at(child, path, issues);
                    path.pop();
                }
            }
        }
    }
}

/// The canonical token document shape
pub static TOKEN_DOCUMENT: LazyLock<Schema> = LazyLock::new(|| {
    Schema::object([
        (
            "typography",
            Schema::single_mode(Schema::fields_of(
                &["fontFamily", "fontWeightRegular", "fontWeightMedium"],
                Schema::String,
            )),
        ),
        ("colorSet", Schema::single_mode(Schema::record(Schema::String))),
        (
            "colorTokens",
            Schema::object([
                ("light", Schema::record(Schema::String)),
                ("dark", Schema::record(Schema::String)),
            ]),
        ),
        (
            "brandColors",
            Schema::single_mode(Schema::fields_of(
                &["logoCerise", "logoFuchsiaBlue", "logoPictonBlue", "logoSun"],
                Schema::String,
            )),
        ),
        (
            "spacing",
            Schema::single_mode(Schema::fields_of(
                &["xxs", "xs", "s", "m", "l", "xl", "xxl", "xxxl", "radius"],
                Schema::Number,
            )),
        ),
        (
            "conversion",
            Schema::object([("control", Schema::fields_of(&["mac", "window"], Schema::String))]),
        ),
    ])
});

/// Validate an unstructured JSON value and re-type it as a [`TokenDocument`].
///
/// No coercion or defaulting happens; extra keys are ignored.
pub fn validate(value: &Value) -> Result<TokenDocument, ValidationError> {
    let issues = TOKEN_DOCUMENT.check(value);
    if !issues.is_empty() {
        debug!(issue_count = issues.len(), "Token document rejected");
        return Err(ValidationError::new(issues));
    }

    TokenDocument::deserialize(value).map_err(|err| {
        ValidationError::new(vec![ValidationIssue::custom(Vec::new(), err.to_string())])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokenvars_types::IssueKind;

    fn valid_document() -> Value {
        json!({
            "typography": { "mode1": { "fontFamily": "Inter", "fontWeightRegular": "Regular", "fontWeightMedium": "Medium" } },
            "colorSet": { "mode1": { "primary500": "#3366ff" } },
            "colorTokens": { "light": { "textPrimary": "#3366ff" }, "dark": { "textPrimary": "#3366ff" } },
            "brandColors": { "mode1": { "logoCerise": "#de3163", "logoFuchsiaBlue": "#7a58c1", "logoPictonBlue": "#45b1e8", "logoSun": "#fdb813" } },
            "spacing": { "mode1": { "xxs": 2, "xs": 4, "s": 8, "m": 12, "l": 16, "xl": 24, "xxl": 32, "xxxl": 48, "radius": 8 } },
            "conversion": { "control": { "mac": "Cmd", "window": "Ctrl" } }
        })
    }

    fn paths(err: &ValidationError) -> Vec<String> {
        err.issues().iter().map(ValidationIssue::path_string).collect()
    }

    #[test]
    fn test_valid_document_is_accepted() {
        let document = validate(&valid_document()).expect("document should validate");
        assert_eq!(document.color_set().get("primary500").map(String::as_str), Some("#3366ff"));
        assert_eq!(document.spacing.mode1.xxxl, 48.0);
    }

    #[test]
    fn test_two_missing_fields_yield_two_issues() {
        let mut value = valid_document();
        let root = value.as_object_mut().unwrap();
        root.remove("typography");
        root.remove("conversion");

        let err = validate(&value).unwrap_err();
        assert_eq!(err.issues().len(), 2);
        assert_eq!(paths(&err), vec!["typography", "conversion"]);
        assert!(err.issues().iter().all(|issue| matches!(
            issue.kind,
            IssueKind::Missing { expected: ValueKind::Object }
        )));
    }

    #[test]
    fn test_numeric_string_is_not_coerced() {
        let mut value = valid_document();
        value["spacing"]["mode1"]["xs"] = json!("4");

        let err = validate(&value).unwrap_err();
        assert_eq!(err.issues().len(), 1);
        let issue = &err.issues()[0];
        assert_eq!(issue.path_string(), "spacing.mode1.xs");
        assert_eq!(
            issue.kind,
            IssueKind::InvalidType {
                expected: ValueKind::Number,
                received: ValueKind::String
            }
        );
    }

    #[test]
    fn test_record_values_are_checked_individually() {
        let mut value = valid_document();
        value["colorSet"]["mode1"] = json!({
            "primary500": "#3366ff",
            "primary600": 42,
            "primary700": null
        });
        value["colorTokens"]["dark"]["textPrimary"] = json!(["#fff"]);

        let err = validate(&value).unwrap_err();
        assert_eq!(
            paths(&err),
            vec![
                "colorSet.mode1.primary600",
                "colorSet.mode1.primary700",
                "colorTokens.dark.textPrimary",
            ]
        );
        assert_eq!(err.issues()[1].message, "Expected string, received null");
        assert_eq!(err.issues()[2].message, "Expected string, received array");
    }

    #[test]
    fn test_wrong_container_type_stops_descent() {
        let mut value = valid_document();
        value["colorTokens"] = json!("light");

        let err = validate(&value).unwrap_err();
        assert_eq!(paths(&err), vec!["colorTokens"]);
        assert_eq!(err.issues()[0].message, "Expected object, received string");
    }

    #[test]
    fn test_non_object_root() {
        let err = validate(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.issues().len(), 1);
        assert!(err.issues()[0].path.is_empty());
    }

    #[test]
    fn test_empty_object_reports_every_group() {
        let err = validate(&json!({})).unwrap_err();
        assert_eq!(
            paths(&err),
            vec!["typography", "colorSet", "colorTokens", "brandColors", "spacing", "conversion"]
        );
    }

    #[test]
    fn test_nested_missing_fields() {
        let mut value = valid_document();
        value["brandColors"]["mode1"] = json!({ "logoCerise": "#de3163" });
        value["conversion"]["control"] = json!({});

        let err = validate(&value).unwrap_err();
        assert_eq!(
            paths(&err),
            vec![
                "brandColors.mode1.logoFuchsiaBlue",
                "brandColors.mode1.logoPictonBlue",
                "brandColors.mode1.logoSun",
                "conversion.control.mac",
                "conversion.control.window",
            ]
        );
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let mut value = valid_document();
        value["colorTokens"]["contrast"] = json!({ "textPrimary": "#000000" });
        value["spacing"]["mode1"]["huge"] = json!("not checked");
        value["metadata"] = json!({ "exportedBy": "design tool" });

        let document = validate(&value).unwrap();
        assert_eq!(document.color_tokens.light.len(), 1);
    }

    #[test]
    fn test_empty_records_are_valid() {
        let mut value = valid_document();
        value["colorSet"]["mode1"] = json!({});
        value["colorTokens"] = json!({ "light": {}, "dark": {} });

        let document = validate(&value).unwrap();
        assert!(document.color_set().is_empty());
    }
}
