// src/domain/validation/rules.rs
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleName {
    Required,
    Pattern,
    Range,
}

impl RuleName {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Pattern => "pattern",
            Self::Range => "range",
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "required" => Ok(Self::Required),
            "pattern" => Ok(Self::Pattern),
            "range" => Ok(Self::Range),
            _ => Err(ParseError::UnknownRule(s.to_owned())),
        }
    }
}

/// Failure to rebuild a typed validator from its persisted configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown validator '{0}'")]
    UnknownRule(String),
    #[error("invalid '{rule}' config: {reason}")]
    InvalidConfig { rule: RuleName, reason: String },
}

/// A single value rejected by a single rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{rule}: {reason}")]
pub struct ValidationError {
    pub rule: RuleName,
    pub reason: String,
}

impl ValidationError {
    fn new(rule: RuleName, reason: impl Into<String>) -> Self {
        Self {
            rule,
            reason: reason.into(),
        }
    }
}

/// Typed form of a validator declared on a property definition.
///
/// Persisted configuration is loosely typed JSON keyed by rule name; it is
/// turned back into one of these variants through [`ValidatorConfig::parse`]
/// and matched exhaustively when a value is checked.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatorConfig {
    Required(bool),
    /// An empty pattern is disabled.
    Pattern(String),
    /// A range without bounds is disabled.
    Range { min: Option<f64>, max: Option<f64> },
}

impl ValidatorConfig {
    pub const fn rule(&self) -> RuleName {
        match self {
            Self::Required(_) => RuleName::Required,
            Self::Pattern(_) => RuleName::Pattern,
            Self::Range { .. } => RuleName::Range,
        }
    }

    pub fn parse(rule: &str, raw: &Value) -> Result<Self, ParseError> {
        Self::parse_rule(rule.parse()?, raw)
    }

    pub fn parse_rule(rule: RuleName, raw: &Value) -> Result<Self, ParseError> {
        match rule {
            RuleName::Required => raw
                .as_bool()
                .map(Self::Required)
                .ok_or_else(|| invalid(rule, "expected a boolean")),
            RuleName::Pattern => {
                let pattern = raw
                    .as_str()
                    .ok_or_else(|| invalid(rule, "expected a string"))?;
                if !pattern.is_empty() {
                    Regex::new(pattern).map_err(|err| invalid(rule, err.to_string()))?;
                }
                Ok(Self::Pattern(pattern.to_owned()))
            }
            RuleName::Range => {
                let object = raw
                    .as_object()
                    .ok_or_else(|| invalid(rule, "expected an object with optional min and max"))?;
                let min = bound(object, "min")?;
                let max = bound(object, "max")?;
                if let (Some(min), Some(max)) = (min, max) {
                    if min > max {
                        return Err(invalid(rule, "min must not exceed max"));
                    }
                }
                Ok(Self::Range { min, max })
            }
        }
    }

    pub fn to_raw(&self) -> Value {
        match self {
            Self::Required(enabled) => Value::Bool(*enabled),
            Self::Pattern(pattern) => Value::String(pattern.clone()),
            Self::Range { min, max } => {
                let mut object = Map::new();
                if let Some(min) = min {
                    object.insert("min".into(), Value::from(*min));
                }
                if let Some(max) = max {
                    object.insert("max".into(), Value::from(*max));
                }
                Value::Object(object)
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Required(enabled) => *enabled,
            Self::Pattern(pattern) => !pattern.is_empty(),
            Self::Range { min, max } => min.is_some() || max.is_some(),
        }
    }

    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        match self {
            Self::Required(enabled) => {
                if *enabled && is_blank(value) {
                    Err(ValidationError::new(RuleName::Required, "value is required"))
                } else {
                    Ok(())
                }
            }
            Self::Pattern(pattern) => validate_pattern(pattern, value),
            Self::Range { min, max } => validate_range(*min, *max, value),
        }
    }
}

fn invalid(rule: RuleName, reason: impl Into<String>) -> ParseError {
    ParseError::InvalidConfig {
        rule,
        reason: reason.into(),
    }
}

fn bound(object: &Map<String, Value>, key: &str) -> Result<Option<f64>, ParseError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| invalid(RuleName::Range, format!("{key} must be a number"))),
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn validate_pattern(pattern: &str, value: &Value) -> Result<(), ValidationError> {
    if pattern.is_empty() {
        return Ok(());
    }
    if value.is_null() {
        return Err(ValidationError::new(RuleName::Pattern, "value is missing"));
    }
    let regex = Regex::new(pattern)
        .map_err(|err| ValidationError::new(RuleName::Pattern, format!("invalid pattern: {err}")))?;
    let text = stringify(value);
    if regex.is_match(&text) {
        Ok(())
    } else {
        Err(ValidationError::new(
            RuleName::Pattern,
            format!("'{text}' does not match {pattern}"),
        ))
    }
}

#[allow(clippy::cast_precision_loss)]
fn magnitude(value: &Value) -> Option<f64> {
    match value {
        Value::String(text) => Some(text.chars().count() as f64),
        Value::Number(number) => number.as_f64(),
        _ => None,
    }
}

fn validate_range(min: Option<f64>, max: Option<f64>, value: &Value) -> Result<(), ValidationError> {
    if value.is_null() || (min.is_none() && max.is_none()) {
        return Ok(());
    }
    let magnitude = magnitude(value)
        .ok_or_else(|| ValidationError::new(RuleName::Range, "value is not numeric"))?;
    if let Some(min) = min {
        if magnitude < min {
            return Err(ValidationError::new(
                RuleName::Range,
                format!("{magnitude} is below the minimum {min}"),
            ));
        }
    }
    if let Some(max) = max {
        if magnitude > max {
            return Err(ValidationError::new(
                RuleName::Range,
                format!("{magnitude} is above the maximum {max}"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn required_rejects_null_and_empty_string() {
        let rule = ValidatorConfig::Required(true);
        assert!(rule.validate(&Value::Null).is_err());
        assert!(rule.validate(&json!("")).is_err());
        assert!(rule.validate(&json!("Alice")).is_ok());
    }

    #[test]
    fn required_accepts_numeric_zero_and_false() {
        let rule = ValidatorConfig::Required(true);
        assert!(rule.validate(&json!(0)).is_ok());
        assert!(rule.validate(&json!(false)).is_ok());
    }

    #[test]
    fn disabled_required_accepts_anything() {
        assert!(ValidatorConfig::Required(false).validate(&Value::Null).is_ok());
    }

    #[test]
    fn pattern_matches_stringified_values() {
        let rule = ValidatorConfig::Pattern("^[0-9]+$".into());
        assert!(rule.validate(&json!("123")).is_ok());
        assert!(rule.validate(&json!(42)).is_ok());
        let err = rule.validate(&json!("12a")).unwrap_err();
        assert_eq!(err.rule, RuleName::Pattern);
    }

    #[test]
    fn pattern_rejects_null_unless_disabled() {
        assert!(ValidatorConfig::Pattern("a".into()).validate(&Value::Null).is_err());
        assert!(ValidatorConfig::Pattern(String::new()).validate(&Value::Null).is_ok());
    }

    #[test]
    fn range_uses_length_for_strings() {
        let rule = ValidatorConfig::Range {
            min: Some(2.0),
            max: Some(4.0),
        };
        assert!(rule.validate(&json!("abc")).is_ok());
        assert!(rule.validate(&json!("a")).is_err());
        assert!(rule.validate(&json!("abcde")).is_err());
        assert!(rule.validate(&json!("åäö")).is_ok());
    }

    #[test]
    fn range_uses_value_for_numbers() {
        let rule = ValidatorConfig::Range {
            min: Some(0.0),
            max: Some(150.0),
        };
        assert!(rule.validate(&json!(0)).is_ok());
        assert!(rule.validate(&json!(150.0)).is_ok());
        assert!(rule.validate(&json!(-1)).is_err());
        assert!(rule.validate(&json!(151)).is_err());
    }

    #[test]
    fn range_skips_null_and_rejects_non_numeric() {
        let rule = ValidatorConfig::Range {
            min: None,
            max: Some(1.0),
        };
        assert!(rule.validate(&Value::Null).is_ok());
        let err = rule.validate(&json!(true)).unwrap_err();
        assert_eq!(err.reason, "value is not numeric");
    }

    #[test]
    fn parse_checks_config_shape() {
        assert_eq!(
            ValidatorConfig::parse("required", &json!(true)).unwrap(),
            ValidatorConfig::Required(true)
        );
        assert!(matches!(
            ValidatorConfig::parse("required", &json!("yes")),
            Err(ParseError::InvalidConfig {
                rule: RuleName::Required,
                ..
            })
        ));
        assert_eq!(
            ValidatorConfig::parse("range", &json!({ "min": 1 })).unwrap(),
            ValidatorConfig::Range {
                min: Some(1.0),
                max: None
            }
        );
        assert!(ValidatorConfig::parse("range", &json!({ "min": 5, "max": 1 })).is_err());
        assert!(ValidatorConfig::parse("pattern", &json!("(")).is_err());
        assert_eq!(
            ValidatorConfig::parse("length", &json!(1)),
            Err(ParseError::UnknownRule("length".into()))
        );
    }

    #[test]
    fn raw_config_survives_parse() {
        let configs = [
            ValidatorConfig::Required(true),
            ValidatorConfig::Pattern("^x".into()),
            ValidatorConfig::Range {
                min: None,
                max: Some(10.0),
            },
        ];
        for config in configs {
            let parsed = ValidatorConfig::parse_rule(config.rule(), &config.to_raw()).unwrap();
            assert_eq!(parsed, config);
        }
    }
}
