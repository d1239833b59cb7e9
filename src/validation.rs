use serde_json::{Map, Value};

use crate::domain::{ApiError, CreateMovie, UpdateMovie};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Value must be a JSON array; `kind` applies to every element.
    pub each: bool,
}

/// Closed field schema for one operation's request body. Keys outside the
/// schema are rejected rather than dropped.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn create_movie() -> Self {
        Self {
            fields: vec![
                FieldSpec {
                    name: "title",
                    kind: FieldKind::Text,
                    required: true,
                    each: false,
                },
                FieldSpec {
                    name: "year",
                    kind: FieldKind::Number,
                    required: true,
                    each: false,
                },
                FieldSpec {
                    name: "genres",
                    kind: FieldKind::Text,
                    required: false,
                    each: true,
                },
            ],
        }
    }

    /// Same field set with every field made optional, for partial updates.
    pub fn partial(&self) -> Self {
        Self {
            fields: self
                .fields
                .iter()
                .map(|f| FieldSpec {
                    required: false,
                    ..f.clone()
                })
                .collect(),
        }
    }

    /// Checks `input` against the schema and returns a map holding exactly
    /// the declared fields that were present, with values coerced to their
    /// declared kind. All failures are collected into one error.
    pub fn validate(&self, input: &Value) -> Result<Map<String, Value>, ApiError> {
        let obj = input
            .as_object()
            .ok_or_else(|| ApiError::Validation("body must be a JSON object".to_string()))?;

        let mut errors = Vec::new();
        let mut out = Map::new();

        for key in obj.keys() {
            if !self.fields.iter().any(|f| f.name == key) {
                errors.push(format!("unexpected field: {}", key));
            }
        }

        for field in &self.fields {
            let value = match obj.get(field.name) {
                Some(v) => v,
                None => {
                    if field.required {
                        errors.push(format!("{} is required", field.name));
                    }
                    continue;
                }
            };

            if field.each {
                let Some(items) = value.as_array() else {
                    errors.push(format!("{} must be an array", field.name));
                    continue;
                };
                let coerced: Option<Vec<Value>> =
                    items.iter().map(|item| coerce(field.kind, item)).collect();
                match coerced {
                    Some(values) => {
                        out.insert(field.name.to_string(), Value::Array(values));
                    }
                    None => errors.push(format!(
                        "each element of {} must be a {}",
                        field.name,
                        kind_name(field.kind)
                    )),
                }
            } else {
                match coerce(field.kind, value) {
                    Some(v) => {
                        out.insert(field.name.to_string(), v);
                    }
                    None => errors.push(format!(
                        "{} must be a {}",
                        field.name,
                        kind_name(field.kind)
                    )),
                }
            }
        }

        if errors.is_empty() {
            Ok(out)
        } else {
            Err(ApiError::Validation(errors.join(", ")))
        }
    }
}

pub fn validate_create(input: &Value) -> Result<CreateMovie, ApiError> {
    let fields = Schema::create_movie().validate(input)?;
    serde_json::from_value(Value::Object(fields)).map_err(|e| ApiError::Validation(e.to_string()))
}

pub fn validate_update(input: &Value) -> Result<UpdateMovie, ApiError> {
    let fields = Schema::create_movie().partial().validate(input)?;
    serde_json::from_value(Value::Object(fields)).map_err(|e| ApiError::Validation(e.to_string()))
}

fn kind_name(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "non-empty string",
        FieldKind::Number => "number",
    }
}

/// Returns the value coerced to `kind`, or None on a type mismatch.
/// Numeric strings count as numbers; empty strings never count as text.
fn coerce(kind: FieldKind, value: &Value) -> Option<Value> {
    match kind {
        FieldKind::Text => match value.as_str() {
            Some(s) if !s.is_empty() => Some(Value::String(s.to_string())),
            _ => None,
        },
        FieldKind::Number => {
            if let Some(n) = value.as_i64() {
                Some(Value::from(n))
            } else if let Some(s) = value.as_str() {
                s.parse::<i64>().ok().map(Value::from)
            } else {
                None
            }
        }
    }
}
