//! Reading the provider's `errors` envelope and nested fields.

use serde_json::Value;

/// First entry of a provider `errors` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProviderFault {
    /// Only kept when the provider sent it as a string.
    pub code: Option<String>,
    /// Empty when absent.
    pub detail: String,
}

impl ProviderFault {
    /// `Some` whenever the body carries an `errors` key, even an empty one.
    pub fn from_body(body: &Value) -> Option<Self> {
        let errors = body.get("errors")?;
        let first = errors.get(0);

        Some(Self {
            code: first
                .and_then(|e| e.get("code"))
                .and_then(Value::as_str)
                .map(str::to_string),
            detail: first
                .and_then(|e| e.get("detail"))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        })
    }

    pub fn detail_or(&self, fallback: &str) -> String {
        if self.detail.is_empty() {
            fallback.to_string()
        } else {
            self.detail.clone()
        }
    }

    pub fn code_contains(&self, needle: &str) -> bool {
        self.code.as_deref().is_some_and(|c| c.contains(needle))
    }

    pub fn mentions_schedule_change(&self) -> bool {
        self.detail.to_lowercase().contains("schedule change detected")
    }
}

/// String or number at `pointer`, rendered as text.
pub(crate) fn scalar_at(value: &Value, pointer: &str) -> Option<String> {
    match value.pointer(pointer)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub(crate) fn text_at(value: &Value, pointer: &str, default: &str) -> String {
    scalar_at(value, pointer).unwrap_or_else(|| default.to_string())
}

/// Array at `key`, or an empty slice.
pub(crate) fn array_at<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}
