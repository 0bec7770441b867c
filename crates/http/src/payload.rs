//! Issue request bodies.
//!
//! Bodies are checked field by field so a rejection can name the field.
//! Nothing is coerced: `"3"` is not an integer and `null` is not a string.
//! The wire name for the union position on requests is `union_opt`.

use serde_json::{Map, Value};
use unionboard_core::{IssueInput, ValidationError};

const UNION_FIELD: &str = "union_opt";

/// `POST /issues`: only `title` is required.
pub fn create_input(body: &Value) -> Result<IssueInput, ValidationError> {
    let obj = as_object(body)?;
    Ok(IssueInput {
        title: required_string(obj, "title")?,
        summary: optional_string(obj, "summary")?.unwrap_or_default(),
        company: optional_string(obj, "company")?.unwrap_or_default(),
        union_position: optional_string(obj, UNION_FIELD)?.unwrap_or_default(),
        order: optional_integer(obj, "order")?.unwrap_or(0),
    })
}

/// `PUT /issues/{id}`: the full record is required.
pub fn update_input(body: &Value) -> Result<IssueInput, ValidationError> {
    let obj = as_object(body)?;
    Ok(IssueInput {
        title: required_string(obj, "title")?,
        summary: required_string(obj, "summary")?,
        company: required_string(obj, "company")?,
        union_position: required_string(obj, UNION_FIELD)?,
        order: optional_integer(obj, "order")?
            .ok_or_else(|| ValidationError::field("order", "field required"))?,
    })
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, ValidationError> {
    body.as_object().ok_or_else(|| ValidationError::body("request body must be a JSON object"))
}

fn required_string(obj: &Map<String, Value>, field: &str) -> Result<String, ValidationError> {
    optional_string(obj, field)?.ok_or_else(|| ValidationError::field(field, "field required"))
}

fn optional_string(
    obj: &Map<String, Value>,
    field: &str,
) -> Result<Option<String>, ValidationError> {
    match obj.get(field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ValidationError::field(
            field,
            format!("expected a string, got {}", type_name(other)),
        )),
    }
}

fn optional_integer(obj: &Map<String, Value>, field: &str) -> Result<Option<i64>, ValidationError> {
    match obj.get(field) {
        None => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| ValidationError::field(field, "expected an integer")),
        Some(other) => Err(ValidationError::field(
            field,
            format!("expected an integer, got {}", type_name(other)),
        )),
    }
}

const fn type_name(value: &Value) -> &'static str {
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

    #[test]
    fn create_defaults_optional_fields() {
        let input = create_input(&json!({"title": "Wage round"})).expect("valid");
        assert_eq!(input, IssueInput::titled("Wage round"));
    }

    #[test]
    fn create_reads_union_opt() {
        let input = create_input(&json!({
            "title": "Retirement",
            "company": "more talks",
            "union_opt": "age 63",
            "order": 3
        }))
        .expect("valid");
        assert_eq!(input.union_position, "age 63");
        assert_eq!(input.order, 3);
    }

    #[test]
    fn create_requires_title() {
        let err = create_input(&json!({"summary": "no title"})).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("title"));
    }

    #[test]
    fn wrong_order_type_names_the_field() {
        let err = create_input(&json!({"title": "t", "order": "3"})).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("order"));

        let err = create_input(&json!({"title": "t", "order": 1.5})).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("order"));
    }

    #[test]
    fn null_string_is_not_coerced() {
        let err = create_input(&json!({"title": "t", "company": null})).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("company"));
    }

    #[test]
    fn update_requires_every_field() {
        let err = update_input(&json!({
            "title": "t", "summary": "s", "company": "c", "order": 1
        }))
        .unwrap_err();
        assert_eq!(err.field.as_deref(), Some("union_opt"));

        let err = update_input(&json!({
            "title": "t", "summary": "s", "company": "c", "union_opt": "u"
        }))
        .unwrap_err();
        assert_eq!(err.field.as_deref(), Some("order"));
    }

    #[test]
    fn non_object_body_has_no_field() {
        let err = create_input(&json!(["title"])).unwrap_err();
        assert!(err.field.is_none());
    }
}
