//! Total helpers for probing loosely-shaped backend JSON.
//!
//! The backend returns the same conceptual entity in several inconsistent
//! shapes: bare arrays, arrays wrapped in `data`/`users`, nested objects
//! under varying key names, and single objects where an array is expected.
//! The helpers here never panic and never error; anything that does not
//! match yields an empty default, which is the contract every normalizer
//! in the application builds on.

use serde_json::Value;

/// Extract the element rows of a list response.
///
/// A bare array is taken as-is. Objects are probed for a `data` or `users`
/// array wrapper. Anything else (null, scalars, wrapper-less objects)
/// yields an empty slice.
pub fn rows(raw: &Value) -> &[Value] {
    match raw {
        Value::Array(items) => items,
        Value::Object(map) => ["data", "users"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_array))
            .map(Vec::as_slice)
            .unwrap_or(&[]),
        _ => &[],
    }
}

/// First non-null value among an ordered list of candidate field names.
pub fn first_present<'a>(value: &'a Value, candidates: &[&str]) -> Option<&'a Value> {
    let map = value.as_object()?;
    candidates
        .iter()
        .find_map(|key| map.get(*key).filter(|v| !v.is_null()))
}

/// Best-effort text for the first present candidate field.
///
/// Strings are taken verbatim; numbers and booleans stringify, matching how
/// the dashboard templates interpolate them. Missing, null, and structured
/// values yield the empty string.
pub fn text(value: &Value, candidates: &[&str]) -> String {
    first_present(value, candidates).map(scalar_text).unwrap_or_default()
}

/// Render a single scalar as display text; non-scalars yield empty.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Coerce a value into a list of elements.
///
/// Arrays map to their elements, a single object wraps into a one-element
/// list, and anything else is empty. Callers get identically-shaped output
/// whether the backend sent a scalar object or an array.
pub fn coerce_list(value: Option<&Value>) -> Vec<&Value> {
    match value {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(v @ Value::Object(_)) => vec![v],
        _ => Vec::new(),
    }
}

/// Join the unique non-empty values of an iterator in first-seen order.
///
/// Used to flatten multi-assignment fields (grades, classes, subjects) into
/// a single display string.
pub fn join_unique<I>(values: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !value.is_empty() && !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen.join(", ")
}

/// Stable identifier for a list element.
///
/// Prefers an explicit id field; otherwise synthesizes `{business-key}-{idx}`
/// from the given business key (staff or admission number), falling back to
/// `unknown-{idx}`. The synthesized form keeps keys stable across re-renders
/// without claiming uniqueness the backend does not provide.
pub fn stable_id(value: &Value, business_key: &str, index: usize) -> String {
    let explicit = text(value, &["id", "userId", "_id"]);
    if !explicit.is_empty() {
        return explicit;
    }
    if !business_key.is_empty() {
        return format!("{business_key}-{index}");
    }
    format!("unknown-{index}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rows_bare_array() {
        let raw = json!([{ "id": 1 }, { "id": 2 }]);
        assert_eq!(rows(&raw).len(), 2);
    }

    #[test]
    fn test_rows_unwraps_data_and_users() {
        let raw = json!({ "data": [{ "id": 1 }] });
        assert_eq!(rows(&raw).len(), 1);
        let raw = json!({ "users": [{}, {}, {}] });
        assert_eq!(rows(&raw).len(), 3);
    }

    #[test]
    fn test_rows_non_list_is_empty() {
        assert!(rows(&Value::Null).is_empty());
        assert!(rows(&json!("oops")).is_empty());
        assert!(rows(&json!({ "data": "not-a-list" })).is_empty());
        assert!(rows(&json!(42)).is_empty());
    }

    #[test]
    fn test_text_first_candidate_wins() {
        let v = json!({ "grade": null, "studentGrade": "5", "class": "A" });
        assert_eq!(text(&v, &["grade", "studentGrade"]), "5");
    }

    #[test]
    fn test_text_stringifies_numbers() {
        let v = json!({ "grade": 5 });
        assert_eq!(text(&v, &["grade"]), "5");
    }

    #[test]
    fn test_text_defaults_empty() {
        let v = json!({ "grade": { "nested": true } });
        assert_eq!(text(&v, &["grade"]), "");
        assert_eq!(text(&v, &["missing"]), "");
        assert_eq!(text(&Value::Null, &["grade"]), "");
    }

    #[test]
    fn test_coerce_list_shape_invariance() {
        let single = json!({ "subject": "Maths" });
        let wrapped = json!([{ "subject": "Maths" }]);
        assert_eq!(coerce_list(Some(&single)).len(), 1);
        assert_eq!(coerce_list(Some(&wrapped)).len(), 1);
        assert_eq!(coerce_list(Some(&single))[0], coerce_list(Some(&wrapped))[0]);
        assert!(coerce_list(Some(&Value::Null)).is_empty());
        assert!(coerce_list(None).is_empty());
    }

    #[test]
    fn test_join_unique_order_and_dedup() {
        let joined = join_unique(
            ["5", "6", "", "5", "7"].iter().map(|s| s.to_string()),
        );
        assert_eq!(joined, "5, 6, 7");
    }

    #[test]
    fn test_stable_id_preference_order() {
        assert_eq!(stable_id(&json!({ "id": "u9" }), "T1", 0), "u9");
        assert_eq!(stable_id(&json!({}), "T1", 0), "T1-0");
        assert_eq!(stable_id(&json!({}), "", 3), "unknown-3");
    }
}
