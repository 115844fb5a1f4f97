// File: src/messages.rs
// Purpose: Resolve symbolic error codes to display messages

use crate::validation::ValidationError;
use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

static DEFAULT_MESSAGES: &str = include_str!("../errors.toml");

static DEFAULTS: Lazy<MessageSource> = Lazy::new(|| {
    MessageSource::from_toml_str(DEFAULT_MESSAGES).expect("embedded errors.toml must parse")
});

/// Message templates keyed by error code.
///
/// Keys may be qualified with the object and field name. Resolution walks from
/// the most specific key to the bare code, so `range.item.price` wins over
/// `range` for the price field while other fields still get the generic text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageSource {
    messages: HashMap<String, String>,
}

impl MessageSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in messages shipped with the crate
    pub fn with_defaults() -> Self {
        DEFAULTS.clone()
    }

    /// Parse a TOML document of messages.
    ///
    /// Quoted keys (`"range.item.price" = "..."`) and nested tables
    /// (`[range.item] price = "..."`) are both accepted.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content).context("Failed to parse messages")?;
        let mut messages = HashMap::new();
        flatten(&mut messages, None, &table)?;
        Ok(Self { messages })
    }

    /// Load messages from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read messages file: {:?}", path))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid messages file: {:?}", path))
    }

    /// Add `other`'s messages, replacing any keys already present
    pub fn merge(&mut self, other: MessageSource) {
        self.messages.extend(other.messages);
    }

    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.messages.insert(key.into(), template.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Candidate message keys for an error, most specific first
    pub fn message_codes(error: &ValidationError) -> Vec<String> {
        let code = error.code.as_str();
        match error.field_name() {
            Some(field) => vec![
                format!("{}.{}.{}", code, error.object_name, field),
                format!("{}.{}", code, field),
                code.to_string(),
            ],
            None => vec![
                format!("{}.{}", code, error.object_name),
                code.to_string(),
            ],
        }
    }

    /// Resolve an error to its display message.
    ///
    /// Falls back to the bare code when no template matches.
    pub fn resolve(&self, error: &ValidationError) -> String {
        let codes = Self::message_codes(error);
        match codes.iter().find_map(|key| self.get(key)) {
            Some(template) => interpolate(template, &error.args),
            None => {
                tracing::warn!(codes = ?codes, "no message found for error code");
                error.code.as_str().to_string()
            }
        }
    }
}

fn flatten(
    out: &mut HashMap<String, String>,
    prefix: Option<&str>,
    table: &toml::Table,
) -> Result<()> {
    for (key, value) in table {
        let full_key = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.clone(),
        };
        match value {
            toml::Value::String(template) => {
                out.insert(full_key, template.clone());
            }
            toml::Value::Table(nested) => flatten(out, Some(&full_key), nested)?,
            other => bail!("message '{}' must be a string, found {}", full_key, other.type_str()),
        }
    }
    Ok(())
}

/// Replace `{N}` placeholders with the N-th argument.
///
/// Numbers are written with thousands separators. Placeholders that are not a
/// valid index are left as they are.
pub fn interpolate(template: &str, args: &[i64]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let replaced = after.find('}').and_then(|end| {
            let index = after[..end].parse::<usize>().ok()?;
            let value = args.get(index)?;
            Some((format_number(*value), end))
        });
        match replaced {
            Some((value, end)) => {
                out.push_str(&value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Format an integer with `,` every three digits
pub fn format_number(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ErrorCode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(10_000_000), "10,000,000");
        assert_eq!(format_number(-12345), "-12,345");
    }

    #[test]
    fn test_interpolate() {
        assert_eq!(interpolate("between {0} and {1}", &[1000, 10_000_000]), "between 1,000 and 10,000,000");
        assert_eq!(interpolate("{1}/{0}", &[1, 2]), "2/1");
        assert_eq!(interpolate("missing {2} {x} {", &[1]), "missing {2} {x} {");
        assert_eq!(interpolate("no placeholders", &[]), "no placeholders");
    }

    #[test]
    fn test_message_codes_for_field_error() {
        let error = ValidationError::field("item", "price", None, ErrorCode::Range, vec![]);
        assert_eq!(
            MessageSource::message_codes(&error),
            vec!["range.item.price", "range.price", "range"]
        );
    }

    #[test]
    fn test_message_codes_for_global_error() {
        let error = ValidationError::global("item", ErrorCode::TotalPriceMin, vec![]);
        assert_eq!(
            MessageSource::message_codes(&error),
            vec!["totalPriceMin.item", "totalPriceMin"]
        );
    }

    #[test]
    fn test_resolve_prefers_most_specific() {
        let mut source = MessageSource::new();
        source.insert("max", "generic {0}");
        source.insert("max.quantity", "field {0}");
        let error = ValidationError::field("item", "quantity", None, ErrorCode::Max, vec![9999]);
        assert_eq!(source.resolve(&error), "field 9,999");

        source.insert("max.item.quantity", "object field {0}");
        assert_eq!(source.resolve(&error), "object field 9,999");
    }

    #[test]
    fn test_resolve_falls_back_to_generic_code() {
        let source = MessageSource::with_defaults();
        let error = ValidationError::field("order", "count", None, ErrorCode::Max, vec![5]);
        assert_eq!(source.resolve(&error), "Must be at most 5.");
    }

    #[test]
    fn test_resolve_unknown_code_returns_code() {
        let source = MessageSource::new();
        let error = ValidationError::global("item", ErrorCode::TotalPriceMin, vec![10000, 1]);
        assert_eq!(source.resolve(&error), "totalPriceMin");
    }

    #[test]
    fn test_default_messages() {
        let source = MessageSource::with_defaults();
        let total = ValidationError::global("item", ErrorCode::TotalPriceMin, vec![10000, 100]);
        assert_eq!(
            source.resolve(&total),
            "Price * quantity must be at least 10,000. Current value = 100."
        );
        let price = ValidationError::field("item", "price", None, ErrorCode::Range, vec![1000, 10_000_000]);
        assert_eq!(source.resolve(&price), "Price must be between 1,000 and 10,000,000.");
    }

    #[test]
    fn test_nested_tables_are_flattened() {
        let source = MessageSource::from_toml_str(
            r#"
            [required.item]
            name = "Name please"
            "#,
        )
        .unwrap();
        assert_eq!(source.get("required.item.name"), Some("Name please"));
        assert_eq!(source.len(), 1);
    }

    #[test]
    fn test_non_string_message_is_rejected() {
        assert!(MessageSource::from_toml_str("max = 3").is_err());
    }

    #[test]
    fn test_merge_overrides() {
        let mut source = MessageSource::with_defaults();
        let overrides = MessageSource::from_toml_str(r#""required.item.name" = "Give it a name""#).unwrap();
        source.merge(overrides);
        let error = ValidationError::field("item", "name", None, ErrorCode::Required, vec![]);
        assert_eq!(source.resolve(&error), "Give it a name");
    }
}
