//! Purpose: Provide the document decode/encode entrypoints behind the facade.
//! Exports: `document_from_str`, `record_from_document`, `document_from_record`,
//! `render_document`, `render_document_pretty`.
//! Role: Parser boundary that centralizes json5 and serde_json usage details.
//! Invariants: Decoding accepts the JSON5 superset; rendering emits strict JSON.
//! Invariants: A decoded document is normalized so integer literals stay integers.
//! Notes: Error mapping is done by callsites so domain context stays explicit.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub(crate) fn document_from_str(input: &str) -> Result<Value, json5::Error> {
    let mut document = json5::from_str(input)?;
    normalize_numbers(&mut document);
    Ok(document)
}

pub(crate) fn record_from_document<T: DeserializeOwned>(
    document: Value,
) -> Result<T, serde_json::Error> {
    serde_json::from_value(document)
}

pub(crate) fn document_from_record<T: Serialize>(record: &T) -> Result<Value, serde_json::Error> {
    serde_json::to_value(record)
}

pub(crate) fn render_document(document: &Value) -> String {
    document.to_string()
}

pub(crate) fn render_document_pretty(document: &Value) -> String {
    format!("{document:#}")
}

// The JSON5 front end may surface integer literals as floats; fold integral
// floats back to i64 so integer record fields map cleanly.
fn normalize_numbers(document: &mut Value) {
    match document {
        Value::Number(number) => {
            if number.is_f64() {
                if let Some(float) = number.as_f64() {
                    if float.fract() == 0.0
                        && float >= i64::MIN as f64
                        && float <= i64::MAX as f64
                    {
                        *number = serde_json::Number::from(float as i64);
                    }
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                normalize_numbers(item);
            }
        }
        Value::Object(fields) => {
            for field in fields.values_mut() {
                normalize_numbers(field);
            }
        }
        _ => {}
    }
}
