//! Order request and confirmation types.

use crate::cart::CartItem;
use crate::catalog::Variation;
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of an order: which product, in which variation, how many.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: ProductId,
    pub variation: Variation,
    pub quantity: u32,
}

impl From<&CartItem> for OrderLine {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product.id().clone(),
            variation: item.variation,
            quantity: item.quantity,
        }
    }
}

/// Customer-supplied shipping and payment fields.
///
/// Fields are free text; format checks live in [`CheckoutForm`](crate::checkout::CheckoutForm).
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub credit_card: String,
}

impl CustomerInfo {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        credit_card: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
            credit_card: credit_card.into(),
        }
    }

    /// Card number with all but the last four digits hidden.
    pub fn masked_card(&self) -> String {
        let digits: Vec<char> = self.credit_card.chars().filter(char::is_ascii_digit).collect();
        let tail: String = digits.iter().skip(digits.len().saturating_sub(4)).collect();
        format!("****{}", tail)
    }
}

// Keep card numbers out of logs.
impl fmt::Debug for CustomerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomerInfo")
            .field("name", &self.name)
            .field("phone", &self.phone)
            .field("address", &self.address)
            .field("credit_card", &self.masked_card())
            .finish()
    }
}

/// An order ready for submission.
///
/// Transient: built at checkout from the cart and customer fields, handed to
/// the client, and dropped afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", try_from = "OrderRequestRecord")]
pub struct OrderRequest {
    items: Vec<OrderLine>,
    #[serde(rename = "customerInfo")]
    customer: CustomerInfo,
}

impl OrderRequest {
    /// Build an order. Fails if there are no lines or a line has no units.
    pub fn new(items: Vec<OrderLine>, customer: CustomerInfo) -> Result<Self, CommerceError> {
        if items.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        if let Some(line) = items.iter().find(|l| l.quantity == 0) {
            return Err(CommerceError::EmptyLine(line.product_id.to_string()));
        }
        Ok(Self { items, customer })
    }

    /// Build an order from cart lines.
    pub fn from_cart(items: &[CartItem], customer: CustomerInfo) -> Result<Self, CommerceError> {
        Self::new(items.iter().map(OrderLine::from).collect(), customer)
    }

    pub fn items(&self) -> &[OrderLine] {
        &self.items
    }

    pub fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    /// Total units ordered.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|l| u64::from(l.quantity)).sum()
    }
}

/// Wire shape of an order request, checked by [`OrderRequest::new`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderRequestRecord {
    items: Vec<OrderLine>,
    customer_info: CustomerInfo,
}

impl TryFrom<OrderRequestRecord> for OrderRequest {
    type Error = CommerceError;

    fn try_from(record: OrderRequestRecord) -> Result<Self, Self::Error> {
        OrderRequest::new(record.items, record.customer_info)
    }
}

/// Result of a successful order submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_id: OrderId,
}
