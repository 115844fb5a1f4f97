// File: src/validation/validators.rs
// Purpose: Item rules and the small predicates they are built from

use super::{BindingResult, ErrorCode, Validate, ValidationError};
use crate::item::Item;

pub const MIN_PRICE: i32 = 1_000;
pub const MAX_PRICE: i32 = 10_000_000;
pub const MAX_QUANTITY: i32 = 9_999;
pub const MIN_TOTAL_PRICE: i64 = 10_000;

/// True when the string contains at least one non-whitespace character
pub fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Inclusive range check; absent values are out of range
pub fn in_range(value: Option<i32>, min: i32, max: i32) -> bool {
    matches!(value, Some(v) if v >= min && v <= max)
}

/// Upper-bound check; absent values fail
pub fn at_most(value: Option<i32>, max: i32) -> bool {
    matches!(value, Some(v) if v <= max)
}

fn rejected(value: Option<i32>) -> Option<String> {
    value.map(|v| v.to_string())
}

impl Validate for Item {
    fn validate(&self) -> Vec<ValidationError> {
        let mut result = BindingResult::new(Item::OBJECT_NAME);

        if !has_text(&self.name) {
            result.reject_value("name", Some(self.name.clone()), ErrorCode::Required, Vec::new());
        }

        if !in_range(self.price, MIN_PRICE, MAX_PRICE) {
            result.reject_value(
                "price",
                rejected(self.price),
                ErrorCode::Range,
                vec![i64::from(MIN_PRICE), i64::from(MAX_PRICE)],
            );
        }

        if !at_most(self.quantity, MAX_QUANTITY) {
            result.reject_value(
                "quantity",
                rejected(self.quantity),
                ErrorCode::Max,
                vec![i64::from(MAX_QUANTITY)],
            );
        }

        // Cross-field rule, only when both operands were supplied
        if let Some(total) = self.total_price() {
            if total < MIN_TOTAL_PRICE {
                result.reject(ErrorCode::TotalPriceMin, vec![MIN_TOTAL_PRICE, total]);
            }
        }

        result.into_errors()
    }
}
