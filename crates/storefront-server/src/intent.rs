//! Cart mutation intents.
//!
//! Form submissions against the cart endpoint name their operation in an
//! `intent` field. Decoding turns that into a typed variant up front, so the
//! handlers dispatch with an exhaustive match and the "invalid action" case
//! is a real branch rather than the end of a string-comparison chain.

use serde::Deserialize;

use crate::error::AppError;

/// Raw form fields as they arrive on the wire.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartForm {
    #[serde(default)]
    pub intent: Option<String>,
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default)]
    pub quantity: Option<String>,
}

/// A decoded cart mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartIntent {
    /// Replace an item's quantity; zero or less removes it.
    UpdateQuantity { item_id: i64, quantity: i64 },
    /// Remove an item.
    RemoveItem { item_id: i64 },
    /// Remove the cart key from the session.
    ClearCart,
}

impl TryFrom<CartForm> for CartIntent {
    type Error = AppError;

    fn try_from(form: CartForm) -> Result<Self, Self::Error> {
        match form.intent.as_deref() {
            Some("update-quantity") => {
                let (Some(item_id), Some(quantity)) =
                    (parse_item_id(&form.item_id), parse_finite(&form.quantity))
                else {
                    return Err(AppError::Validation("Invalid item or quantity".to_owned()));
                };
                Ok(CartIntent::UpdateQuantity {
                    item_id,
                    quantity: quantity.trunc() as i64,
                })
            }
            Some("remove-item") => {
                let Some(item_id) = parse_item_id(&form.item_id) else {
                    return Err(AppError::Validation("Invalid item".to_owned()));
                };
                Ok(CartIntent::RemoveItem { item_id })
            }
            Some("clear-cart") => Ok(CartIntent::ClearCart),
            Some(_) | None => Err(AppError::Validation("Invalid action".to_owned())),
        }
    }
}

/// Parse a form field as a finite number; anything else is `None`.
fn parse_finite(field: &Option<String>) -> Option<f64> {
    field
        .as_deref()
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

/// Parse a form field as a line-item id.
///
/// Item ids are whole numbers; a fractional value like `1.5` identifies no
/// line item and must not be truncated onto a neighbouring id.
fn parse_item_id(field: &Option<String>) -> Option<i64> {
    parse_finite(field)
        .filter(|value| value.fract() == 0.0)
        .map(|value| value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(intent: Option<&str>, item_id: Option<&str>, quantity: Option<&str>) -> CartForm {
        CartForm {
            intent: intent.map(str::to_owned),
            item_id: item_id.map(str::to_owned),
            quantity: quantity.map(str::to_owned),
        }
    }

    #[test]
    fn test_update_quantity_decodes() {
        let intent = CartIntent::try_from(form(Some("update-quantity"), Some("3"), Some("5")));
        assert_eq!(
            intent.unwrap(),
            CartIntent::UpdateQuantity {
                item_id: 3,
                quantity: 5
            }
        );
    }

    #[test]
    fn test_update_quantity_truncates_fractional() {
        let intent = CartIntent::try_from(form(Some("update-quantity"), Some("3"), Some("2.9")));
        assert_eq!(
            intent.unwrap(),
            CartIntent::UpdateQuantity {
                item_id: 3,
                quantity: 2
            }
        );
    }

    #[test]
    fn test_update_quantity_rejects_non_finite() {
        for (item_id, quantity) in [
            (None, Some("2")),
            (Some("abc"), Some("2")),
            (Some("1"), None),
            (Some("1"), Some("abc")),
            (Some("1"), Some("inf")),
            (Some("NaN"), Some("2")),
        ] {
            let result = CartIntent::try_from(form(Some("update-quantity"), item_id, quantity));
            assert!(matches!(result, Err(AppError::Validation(_))));
        }
    }

    #[test]
    fn test_fractional_item_id_is_rejected() {
        // `1.5` is finite but names no line item; truncating it would land
        // the mutation on product 1 instead.
        let result = CartIntent::try_from(form(Some("remove-item"), Some("1.5"), None));
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = CartIntent::try_from(form(Some("update-quantity"), Some("1.5"), Some("2")));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_remove_item_decodes() {
        let intent = CartIntent::try_from(form(Some("remove-item"), Some("7"), None));
        assert_eq!(intent.unwrap(), CartIntent::RemoveItem { item_id: 7 });
    }

    #[test]
    fn test_remove_item_rejects_non_finite() {
        let result = CartIntent::try_from(form(Some("remove-item"), Some("abc"), None));
        assert!(matches!(result, Err(AppError::Validation(_))));
        let result = CartIntent::try_from(form(Some("remove-item"), None, None));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_clear_cart_needs_no_fields() {
        let intent = CartIntent::try_from(form(Some("clear-cart"), None, None));
        assert_eq!(intent.unwrap(), CartIntent::ClearCart);
    }

    #[test]
    fn test_unknown_or_missing_intent_is_invalid_action() {
        for intent in [Some("checkout"), Some(""), None] {
            let result = CartIntent::try_from(form(intent, Some("1"), Some("1")));
            match result {
                Err(AppError::Validation(message)) => assert_eq!(message, "Invalid action"),
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_negative_ids_are_finite_and_accepted() {
        // A negative id passes validation and later no-ops against the cart.
        let intent = CartIntent::try_from(form(Some("remove-item"), Some("-5"), None));
        assert_eq!(intent.unwrap(), CartIntent::RemoveItem { item_id: -5 });
    }
}
