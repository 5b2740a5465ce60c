//! Validation logic for model-produced analyses
//!
//! Checks the raw JSON against the exact response schema before it is
//! converted into an `AnalysisResult`.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::model::analysis::{EXPLANATION_ITEMS, MAX_TRUTH_PROBABILITY};
use crate::model::Verdict;

const TOP_LEVEL_FIELDS: &[&str] = &["truthProbability", "explanation"];
const EXPLANATION_FIELDS: &[&str] = &["verdict", "keyPoints", "sources"];

/// Result of analysis validation
#[derive(Debug)]
pub struct AnalysisValidationResult {
    /// Whether the payload matches the schema
    pub is_valid: bool,
    /// Schema violations
    pub errors: Vec<String>,
    /// Quality issues that do not reject the payload
    pub warnings: Vec<String>,
}

impl AnalysisValidationResult {
    /// Create a new validation result with no issues
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error to the validation result
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Add a warning to the validation result
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

/// Rewrite an integral float `truthProbability` (e.g. `2.0`) as an integer
///
/// Fractional and negative values are left alone for `validate_analysis` to reject.
pub fn normalize_probability(payload: &mut Value) {
    let Some(slot) = payload
        .as_object_mut()
        .and_then(|root| root.get_mut("truthProbability"))
    else {
        return;
    };
    if let Some(f) = slot.as_f64()
        && slot.as_u64().is_none()
        && f >= 0.0
        && f.fract() == 0.0
        && f <= f64::from(MAX_TRUTH_PROBABILITY)
    {
        *slot = Value::from(f as u64);
    }
}

/// Validate a parsed payload against the analysis schema
///
/// Checks:
/// 1. Top-level and `explanation` objects carry exactly the expected fields
/// 2. `truthProbability` is an integer in [0, 100] (see `normalize_probability`)
/// 3. `verdict` is one of the fixed labels
/// 4. `keyPoints` and `sources` are arrays of exactly three strings
/// 5. Blank items and duplicate sources (warnings only)
pub fn validate_analysis(payload: &Value) -> AnalysisValidationResult {
    let mut result = AnalysisValidationResult::valid();

    let Some(root) = payload.as_object() else {
        result.add_error(format!("Payload must be an object, got {}", kind_of(payload)));
        return result;
    };
    check_field_set(root, TOP_LEVEL_FIELDS, "payload", &mut result);

    match root.get("truthProbability") {
        Some(Value::Number(n)) => match n.as_u64() {
            Some(p) if p <= u64::from(MAX_TRUTH_PROBABILITY) => {}
            Some(p) => result.add_error(format!("truthProbability {} is above 100", p)),
            None => result.add_error(format!(
                "truthProbability must be an integer in [0, 100], got {}",
                n
            )),
        },
        Some(other) => result.add_error(format!(
            "truthProbability must be an integer, got {}",
            kind_of(other)
        )),
        None => {}
    }

    let explanation = match root.get("explanation") {
        Some(Value::Object(explanation)) => explanation,
        Some(other) => {
            result.add_error(format!("explanation must be an object, got {}", kind_of(other)));
            return result;
        }
        None => return result,
    };
    check_field_set(explanation, EXPLANATION_FIELDS, "explanation", &mut result);

    match explanation.get("verdict") {
        Some(Value::String(label)) => {
            if Verdict::from_label(label).is_none() {
                result.add_error(format!("verdict '{}' is not a known label", label));
            }
        }
        Some(other) => {
            result.add_error(format!("verdict must be a string, got {}", kind_of(other)))
        }
        None => {}
    }

    let key_points = check_string_list(explanation.get("keyPoints"), "keyPoints", &mut result);
    let sources = check_string_list(explanation.get("sources"), "sources", &mut result);

    for (i, point) in key_points.iter().enumerate() {
        if point.trim().is_empty() {
            result.add_warning(format!("keyPoints item {} is blank", i + 1));
        }
    }

    let mut seen = HashSet::new();
    for (i, source) in sources.iter().enumerate() {
        if source.trim().is_empty() {
            result.add_warning(format!("sources item {} is blank", i + 1));
        } else if !seen.insert(source.trim().to_lowercase()) {
            result.add_warning(format!("sources item {} duplicates '{}'", i + 1, source));
        }
    }

    result
}

/// Report missing and unexpected keys of `object`
fn check_field_set(
    object: &Map<String, Value>,
    expected: &[&str],
    context: &str,
    result: &mut AnalysisValidationResult,
) {
    for field in expected {
        if !object.contains_key(*field) {
            result.add_error(format!("{} is missing field '{}'", context, field));
        }
    }
    for key in object.keys() {
        if !expected.contains(&key.as_str()) {
            result.add_error(format!("{} has unexpected field '{}'", context, key));
        }
    }
}

/// Check for an array of exactly `EXPLANATION_ITEMS` strings; returns the strings found
fn check_string_list<'a>(
    value: Option<&'a Value>,
    field: &str,
    result: &mut AnalysisValidationResult,
) -> Vec<&'a str> {
    let items = match value {
        Some(Value::Array(items)) => items,
        Some(other) => {
            result.add_error(format!("{} must be an array, got {}", field, kind_of(other)));
            return Vec::new();
        }
        None => return Vec::new(),
    };

    if items.len() != EXPLANATION_ITEMS {
        result.add_error(format!(
            "{} must have exactly {} items, got {}",
            field,
            EXPLANATION_ITEMS,
            items.len()
        ));
    }

    let mut strings = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match item.as_str() {
            Some(s) => strings.push(s),
            None => result.add_error(format!(
                "{} item {} must be a string, got {}",
                field,
                i + 1,
                kind_of(item)
            )),
        }
    }
    strings
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn flat_earth() -> Value {
        json!({
            "truthProbability": 2,
            "explanation": {
                "verdict": "Myth",
                "keyPoints": [
                    "Satellite imagery shows a curved horizon",
                    "Ships disappear hull-first over the horizon",
                    "Lunar eclipses cast a round shadow"
                ],
                "sources": ["nasa.gov", "esa.int", "britannica.com"]
            }
        })
    }

    #[test]
    fn test_valid_analysis() {
        let result = validate_analysis(&flat_earth());
        assert!(result.is_valid, "{:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_bounds_of_probability() {
        let mut payload = flat_earth();
        payload["truthProbability"] = json!(100);
        assert!(validate_analysis(&payload).is_valid);

        payload["truthProbability"] = json!(0);
        assert!(validate_analysis(&payload).is_valid);

        payload["truthProbability"] = json!(101);
        let result = validate_analysis(&payload);
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("above 100"));

        payload["truthProbability"] = json!(-5);
        assert!(!validate_analysis(&payload).is_valid);

        payload["truthProbability"] = json!(42.5);
        assert!(!validate_analysis(&payload).is_valid);

        payload["truthProbability"] = json!("42");
        assert!(!validate_analysis(&payload).is_valid);
    }

    #[test]
    fn test_normalize_only_touches_integral_floats() {
        let mut payload = flat_earth();
        payload["truthProbability"] = json!(100.0);
        normalize_probability(&mut payload);
        assert_eq!(payload["truthProbability"], json!(100));
        assert!(validate_analysis(&payload).is_valid);

        for untouched in [json!(42.5), json!(-3.0), json!(150.0), json!("7")] {
            payload["truthProbability"] = untouched.clone();
            normalize_probability(&mut payload);
            assert_eq!(payload["truthProbability"], untouched);
            assert!(!validate_analysis(&payload).is_valid);
        }
    }

    #[test]
    fn test_unknown_verdict() {
        let mut payload = flat_earth();
        payload["explanation"]["verdict"] = json!("Probably False");
        let result = validate_analysis(&payload);
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("Probably False"));
    }

    #[test]
    fn test_list_lengths_and_item_types() {
        let mut payload = flat_earth();
        payload["explanation"]["keyPoints"] = json!(["only one"]);
        payload["explanation"]["sources"] = json!(["a", 2, "c"]);
        let result = validate_analysis(&payload);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 2);
        assert!(result.errors[0].contains("keyPoints must have exactly 3 items, got 1"));
        assert!(result.errors[1].contains("sources item 2 must be a string"));
    }

    #[test]
    fn test_missing_and_extra_fields() {
        let payload = json!({
            "truthProbability": 50,
            "mood": "curious",
            "explanation": {
                "verdict": "Truth",
                "keyPoints": ["a", "b", "c"]
            }
        });
        let result = validate_analysis(&payload);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("unexpected field 'mood'")));
        assert!(result.errors.iter().any(|e| e.contains("missing field 'sources'")));
    }

    #[test]
    fn test_non_object_payload() {
        let result = validate_analysis(&json!([1, 2, 3]));
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("got array"));
    }

    #[test]
    fn test_blank_and_duplicate_items_are_warnings() {
        let mut payload = flat_earth();
        payload["explanation"]["keyPoints"][2] = json!("  ");
        payload["explanation"]["sources"] = json!(["nasa.gov", "NASA.gov", "esa.int"]);
        let result = validate_analysis(&payload);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 2);
        assert!(result.warnings[0].contains("keyPoints item 3 is blank"));
        assert!(result.warnings[1].contains("duplicates"));
    }
}
