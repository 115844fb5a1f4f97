// File: src/form_context.rs
// Purpose: Form context for templates to display validation errors and preserve values

use crate::item::{Item, ItemForm};
use crate::messages::MessageSource;
use crate::validation::BindingResult;
use std::collections::HashMap;

/// Display-ready errors and values for one form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormContext {
    /// Field names to resolved error messages, in the order they were raised
    pub errors: HashMap<String, Vec<String>>,
    /// Object-level messages
    pub global_errors: Vec<String>,
    /// Values to put back into the inputs
    pub values: HashMap<String, String>,
}

impl FormContext {
    /// Context for a fresh form showing `item`'s current values
    pub fn for_item(item: &Item) -> Self {
        let form = ItemForm::from(item);
        let values = HashMap::from([
            ("name".to_string(), form.name),
            ("price".to_string(), form.price),
            ("quantity".to_string(), form.quantity),
        ]);
        Self {
            values,
            ..Self::default()
        }
    }

    /// Resolve every error in `result` and pick the values to redisplay.
    ///
    /// A field with errors shows the value that was rejected, so input that
    /// could not be converted at all (`"abc"` for a price) is not lost.
    pub fn resolve(item: &Item, result: &BindingResult, messages: &MessageSource) -> Self {
        let mut context = Self::for_item(item);

        for error in result.errors() {
            let message = messages.resolve(error);
            match error.field_name() {
                Some(field) => {
                    context
                        .errors
                        .entry(field.to_string())
                        .or_default()
                        .push(message);
                }
                None => context.global_errors.push(message),
            }
        }

        for (field, value) in context.values.iter_mut() {
            let rejected = result
                .field_errors(field)
                .into_iter()
                .find_map(|e| e.rejected_value());
            if let Some(rejected) = rejected {
                *value = rejected.to_string();
            }
        }

        context
    }

    /// Check if field has an error
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Get all error messages for a field
    pub fn field_errors(&self, field: &str) -> &[String] {
        self.errors.get(field).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || !self.global_errors.is_empty()
    }

    /// Get original value for a field
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(|s| s.as_str()).unwrap_or("")
    }
}
