// File: src/item.rs
// Purpose: Item model and binding of raw submitted form fields

use crate::validation::{BindingResult, ErrorCode};
use serde::{Deserialize, Serialize};

/// An item offered for sale.
///
/// `price` and `quantity` are optional so that a partially filled form can be
/// carried back to the user unchanged; validation decides whether they are
/// acceptable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: Option<i64>,
    pub name: String,
    pub price: Option<i32>,
    pub quantity: Option<i32>,
}

impl Item {
    /// Object name used when building message keys (`required.item.name`).
    pub const OBJECT_NAME: &'static str = "item";

    pub fn new(name: impl Into<String>, price: Option<i32>, quantity: Option<i32>) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
            quantity,
        }
    }

    /// `price * quantity` when both are present, widened so it cannot overflow.
    pub fn total_price(&self) -> Option<i64> {
        match (self.price, self.quantity) {
            (Some(price), Some(quantity)) => Some(i64::from(price) * i64::from(quantity)),
            _ => None,
        }
    }
}

/// Raw form submission, exactly as typed by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ItemForm {
    pub name: String,
    pub price: String,
    pub quantity: String,
}

impl ItemForm {
    /// Convert the raw fields into an [`Item`].
    ///
    /// Blank numeric fields become `None`. Numeric fields that fail to parse
    /// also become `None`, and a `typeMismatch` error carrying the raw text is
    /// recorded so the form can show what was entered.
    pub fn bind(&self) -> (Item, BindingResult) {
        let mut result = BindingResult::new(Item::OBJECT_NAME);

        let price = bind_number(&mut result, "price", &self.price);
        let quantity = bind_number(&mut result, "quantity", &self.quantity);

        let item = Item {
            id: None,
            name: self.name.clone(),
            price,
            quantity,
        };
        (item, result)
    }
}

impl From<&Item> for ItemForm {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price.map(|p| p.to_string()).unwrap_or_default(),
            quantity: item.quantity.map(|q| q.to_string()).unwrap_or_default(),
        }
    }
}

fn bind_number(result: &mut BindingResult, field: &str, raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<i32>() {
        Ok(value) => Some(value),
        Err(_) => {
            result.reject_binding(field, raw, ErrorCode::TypeMismatch);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form(name: &str, price: &str, quantity: &str) -> ItemForm {
        ItemForm {
            name: name.to_string(),
            price: price.to_string(),
            quantity: quantity.to_string(),
        }
    }

    #[test]
    fn test_bind_valid_numbers() {
        let (item, result) = form("book", "10000", " 10 ").bind();
        assert!(!result.has_errors());
        assert_eq!(item, Item::new("book", Some(10000), Some(10)));
    }

    #[test]
    fn test_bind_blank_numbers_are_absent() {
        let (item, result) = form("book", "", "   ").bind();
        assert!(!result.has_errors());
        assert_eq!(item.price, None);
        assert_eq!(item.quantity, None);
    }

    #[test]
    fn test_bind_type_mismatch_keeps_raw_value() {
        let (item, result) = form("book", "abc", "3").bind();
        assert_eq!(item.price, None);
        assert_eq!(item.quantity, Some(3));

        let errors = result.field_errors("price");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::TypeMismatch);
        assert_eq!(errors[0].rejected_value(), Some("abc"));
        assert!(errors[0].binding_failure);
    }

    #[test]
    fn test_total_price_does_not_overflow() {
        let item = Item::new("bulk", Some(10_000_000), Some(9999));
        assert_eq!(item.total_price(), Some(99_990_000_000));
        assert_eq!(Item::new("x", None, Some(1)).total_price(), None);
    }

    #[test]
    fn test_item_json_shape() {
        let mut item = Item::new("book", Some(10000), None);
        item.id = Some(3);
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            serde_json::json!({"id": 3, "name": "book", "price": 10000, "quantity": null})
        );
    }

    #[test]
    fn test_form_from_item() {
        let item = Item::new("book", Some(1500), None);
        assert_eq!(ItemForm::from(&item), form("book", "1500", ""));
    }
}
