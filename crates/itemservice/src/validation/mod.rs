// File: src/validation/mod.rs
// Purpose: Validation errors, the binding result accumulator and the Validate trait

use std::fmt;

pub mod validators;

pub use validators::{MAX_PRICE, MAX_QUANTITY, MIN_PRICE, MIN_TOTAL_PRICE};

/// Trait for types that can be validated
///
/// Validation never fails as an operation: an empty vector means the value is
/// acceptable. Every rule is evaluated, so one pass reports all problems.
pub trait Validate {
    fn validate(&self) -> Vec<ValidationError>;
}

/// Symbolic error code. Message text is looked up separately by code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Required,
    Range,
    Max,
    TotalPriceMin,
    TypeMismatch,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Required => "required",
            ErrorCode::Range => "range",
            ErrorCode::Max => "max",
            ErrorCode::TotalPriceMin => "totalPriceMin",
            ErrorCode::TypeMismatch => "typeMismatch",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an error belongs to a single field or to the object as a whole
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorScope {
    Field {
        field: String,
        /// Value the user submitted, as text, if any
        rejected_value: Option<String>,
    },
    Global,
}

/// A single validation failure: a code plus the arguments its message needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub object_name: String,
    pub scope: ErrorScope,
    pub code: ErrorCode,
    pub args: Vec<i64>,
    /// Set when the raw input could not be converted at all
    pub binding_failure: bool,
}

impl ValidationError {
    pub fn field(
        object_name: impl Into<String>,
        field: impl Into<String>,
        rejected_value: Option<String>,
        code: ErrorCode,
        args: Vec<i64>,
    ) -> Self {
        Self {
            object_name: object_name.into(),
            scope: ErrorScope::Field {
                field: field.into(),
                rejected_value,
            },
            code,
            args,
            binding_failure: false,
        }
    }

    pub fn global(object_name: impl Into<String>, code: ErrorCode, args: Vec<i64>) -> Self {
        Self {
            object_name: object_name.into(),
            scope: ErrorScope::Global,
            code,
            args,
            binding_failure: false,
        }
    }

    /// Field name, or `None` for object-level errors
    pub fn field_name(&self) -> Option<&str> {
        match &self.scope {
            ErrorScope::Field { field, .. } => Some(field),
            ErrorScope::Global => None,
        }
    }

    pub fn rejected_value(&self) -> Option<&str> {
        match &self.scope {
            ErrorScope::Field { rejected_value, .. } => rejected_value.as_deref(),
            ErrorScope::Global => None,
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self.scope, ErrorScope::Global)
    }
}

/// Ordered collection of the errors raised while binding and validating one
/// submitted object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingResult {
    object_name: String,
    errors: Vec<ValidationError>,
}

impl BindingResult {
    pub fn new(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            errors: Vec::new(),
        }
    }

    /// Record a field error against this object
    pub fn reject_value(
        &mut self,
        field: &str,
        rejected_value: Option<String>,
        code: ErrorCode,
        args: Vec<i64>,
    ) {
        self.errors.push(ValidationError::field(
            self.object_name.clone(),
            field,
            rejected_value,
            code,
            args,
        ));
    }

    /// Record a conversion failure for a raw field value
    pub fn reject_binding(&mut self, field: &str, raw: &str, code: ErrorCode) {
        let mut error = ValidationError::field(
            self.object_name.clone(),
            field,
            Some(raw.to_string()),
            code,
            Vec::new(),
        );
        error.binding_failure = true;
        self.errors.push(error);
    }

    /// Record an object-level error
    pub fn reject(&mut self, code: ErrorCode, args: Vec<i64>) {
        self.errors
            .push(ValidationError::global(self.object_name.clone(), code, args));
    }

    pub fn extend(&mut self, errors: impl IntoIterator<Item = ValidationError>) {
        self.errors.extend(errors);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn field_errors(&self, field: &str) -> Vec<&ValidationError> {
        self.errors
            .iter()
            .filter(|e| e.field_name() == Some(field))
            .collect()
    }

    pub fn has_field_errors(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field_name() == Some(field))
    }

    pub fn global_errors(&self) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.is_global()).collect()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl fmt::Display for BindingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error(s) on '{}'", self.errors.len(), self.object_name)?;
        for error in &self.errors {
            match error.field_name() {
                Some(field) => write!(f, "; {}: {}{:?}", field, error.code, error.args)?,
                None => write!(f, "; <global>: {}{:?}", error.code, error.args)?,
            }
        }
        Ok(())
    }
}
