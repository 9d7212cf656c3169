//! Checkout form validation.
//!
//! The client accepts any customer fields; these rules are what a storefront
//! UI applies before letting the customer place an order.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::checkout::CustomerInfo;

const PHONE_PATTERN: &str = r"^\+?[0-9]{1,4}?[-.\s]?(\(?\d{1,3}?\)?[-.\s]?){1,4}\d{1,4}$";
const CARD_PATTERN: &str = r"^\d{4}-?\d{4}-?\d{4}-?\d{4}$";

/// Minimum length of the customer name.
pub const MIN_NAME_LEN: usize = 2;

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern compiles"))
}

fn card_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CARD_PATTERN).expect("card pattern compiles"))
}

/// Fields of the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckoutField {
    Name,
    Phone,
    ShippingAddress,
    CreditCard,
}

impl CheckoutField {
    pub fn label(&self) -> &'static str {
        match self {
            CheckoutField::Name => "Name",
            CheckoutField::Phone => "Phone",
            CheckoutField::ShippingAddress => "Shipping Address",
            CheckoutField::CreditCard => "Credit Card",
        }
    }
}

/// A validation failure on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: CheckoutField,
    pub message: String,
}

impl FieldError {
    fn new(field: CheckoutField, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.label(), self.message)
    }
}

/// Raw checkout form input.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub name: String,
    pub phone: String,
    pub shipping_address: String,
    pub credit_card: String,
}

impl CheckoutForm {
    /// Check every field, collecting all failures.
    ///
    /// Values are trimmed before checking; the returned `CustomerInfo`
    /// carries the trimmed values.
    pub fn validate(&self) -> Result<CustomerInfo, Vec<FieldError>> {
        let name = self.name.trim();
        let phone = self.phone.trim();
        let address = self.shipping_address.trim();
        let card = self.credit_card.trim();

        let mut errors = Vec::new();

        if name.is_empty() {
            errors.push(FieldError::new(CheckoutField::Name, "Name is required"));
        } else if name.chars().count() < MIN_NAME_LEN {
            errors.push(FieldError::new(
                CheckoutField::Name,
                "Name must be at least 2 characters long.",
            ));
        }

        if phone.is_empty() {
            errors.push(FieldError::new(CheckoutField::Phone, "Phone number is required"));
        } else if !phone_regex().is_match(phone) {
            errors.push(FieldError::new(CheckoutField::Phone, "Enter a valid phone number"));
        }

        if address.is_empty() {
            errors.push(FieldError::new(
                CheckoutField::ShippingAddress,
                "Shipping address is required",
            ));
        }

        if card.is_empty() {
            errors.push(FieldError::new(CheckoutField::CreditCard, "Credit card is required"));
        } else if !card_regex().is_match(card) {
            errors.push(FieldError::new(
                CheckoutField::CreditCard,
                "Enter a valid 16-digit credit card number",
            ));
        }

        if errors.is_empty() {
            Ok(CustomerInfo::new(name, phone, address, card))
        } else {
            Err(errors)
        }
    }
}
