//! JSON input schemas advertised by `tools/list`.
//!
//! Numeric limits come from the domain bounds so the advertised schema and the
//! validation that actually runs cannot drift apart.

use serde_json::{json, Value};

use securerand_domain::value_objects::bounds::{
    Bounds, BOOLEAN_COUNT, BYTE_LENGTH, CHOICE_COUNT, FLOAT_COUNT, FLOAT_PRECISION,
    INTEGER_COUNT, STRING_COUNT, STRING_LENGTH, UUID_COUNT,
};
use securerand_domain::Charset;

fn bounded_integer(bounds: Bounds, default: i64, description: &str) -> Value {
    let mut schema = json!({
        "type": "integer",
        "minimum": bounds.min,
        "default": default,
        "description": description,
    });
    if let Some(max) = bounds.upper() {
        schema["maximum"] = json!(max);
    }
    schema
}

fn object(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

pub(super) fn integer() -> Value {
    object(
        json!({
            "min": {"type": "integer", "default": 0, "description": "Minimum value (inclusive)"},
            "max": {"type": "integer", "default": 100, "description": "Maximum value (inclusive)"},
            "count": bounded_integer(INTEGER_COUNT, 1, "Number of integers to generate"),
        }),
        &[],
    )
}

pub(super) fn float() -> Value {
    object(
        json!({
            "min": {"type": "number", "default": 0.0, "description": "Minimum value (inclusive)"},
            "max": {"type": "number", "default": 1.0, "description": "Maximum value (exclusive)"},
            "count": bounded_integer(FLOAT_COUNT, 1, "Number of floats to generate"),
            "precision": bounded_integer(FLOAT_PRECISION, 6, "Number of decimal places"),
        }),
        &[],
    )
}

pub(super) fn bytes() -> Value {
    object(
        json!({
            "length": bounded_integer(BYTE_LENGTH, 32, "Number of bytes to generate"),
            "encoding": {
                "type": "string",
                "enum": ["hex", "base64"],
                "default": "hex",
                "description": "Output encoding",
            },
        }),
        &[],
    )
}

pub(super) fn uuid() -> Value {
    object(
        json!({
            "count": bounded_integer(UUID_COUNT, 1, "Number of UUIDs to generate"),
            "format": {
                "type": "string",
                "enum": ["standard", "compact"],
                "default": "standard",
                "description": "'standard' with hyphens, 'compact' without",
            },
        }),
        &[],
    )
}

pub(super) fn string() -> Value {
    let charsets: Vec<&str> = Charset::ALL.iter().map(|c| c.as_str()).collect();
    object(
        json!({
            "length": bounded_integer(STRING_LENGTH, 16, "Length of each string"),
            "charset": {
                "type": "string",
                "enum": charsets,
                "default": "alphanumeric",
                "description": "Character set to draw from",
            },
            "count": bounded_integer(STRING_COUNT, 1, "Number of strings to generate"),
        }),
        &[],
    )
}

pub(super) fn choice() -> Value {
    object(
        json!({
            "choices": {
                "type": "array",
                "items": {"type": "string"},
                "minItems": 1,
                "description": "Items to choose from",
            },
            "count": bounded_integer(CHOICE_COUNT, 1, "Number of items to select"),
            "allow_duplicates": {
                "type": "boolean",
                "default": true,
                "description": "Whether the same item may be selected more than once",
            },
        }),
        &["choices"],
    )
}

pub(super) fn boolean() -> Value {
    object(
        json!({
            "count": bounded_integer(BOOLEAN_COUNT, 1, "Number of booleans to generate"),
            "probability": {
                "type": "number",
                "minimum": 0.0,
                "maximum": 1.0,
                "default": 0.5,
                "description": "Probability of each value being true",
            },
        }),
        &[],
    )
}
