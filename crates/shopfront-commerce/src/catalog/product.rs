//! Product, category and variation types.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A selectable product attribute (size or condition).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Variation {
    Digital,
    New,
    #[serde(rename = "Pre-Owned")]
    PreOwned,
    Refurbished,
    Small,
    Medium,
    Large,
}

impl Variation {
    /// Every variation, in display order.
    pub const ALL: [Variation; 7] = [
        Variation::Digital,
        Variation::New,
        Variation::PreOwned,
        Variation::Refurbished,
        Variation::Small,
        Variation::Medium,
        Variation::Large,
    ];

    /// The label shown to customers and used in the dataset.
    pub fn label(&self) -> &'static str {
        match self {
            Variation::Digital => "Digital",
            Variation::New => "New",
            Variation::PreOwned => "Pre-Owned",
            Variation::Refurbished => "Refurbished",
            Variation::Small => "Small",
            Variation::Medium => "Medium",
            Variation::Large => "Large",
        }
    }
}

impl fmt::Display for Variation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Variation {
    type Err = CommerceError;

    /// Parse a label case-insensitively; `pre-owned`, `preowned` and
    /// `pre_owned` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        Variation::ALL
            .into_iter()
            .find(|v| {
                v.label()
                    .chars()
                    .filter(|c| *c != '-')
                    .flat_map(char::to_lowercase)
                    .eq(normalized.chars())
            })
            .ok_or_else(|| CommerceError::UnknownVariation(s.to_string()))
    }
}

/// Product category. Each category admits a fixed set of variations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductKind {
    #[serde(rename = "video games")]
    VideoGame,
    #[serde(rename = "clothing")]
    Clothing,
    #[serde(rename = "console")]
    Console,
    #[serde(rename = "physical items")]
    PhysicalItem,
}

impl ProductKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::VideoGame => "video games",
            ProductKind::Clothing => "clothing",
            ProductKind::Console => "console",
            ProductKind::PhysicalItem => "physical items",
        }
    }

    /// The variations a product of this category may offer.
    ///
    /// This is the only category-to-variation mapping in the crate; both
    /// dataset validation and UI variation pickers read it.
    pub fn valid_variations(&self) -> &'static [Variation] {
        match self {
            ProductKind::VideoGame => &[Variation::Digital, Variation::New, Variation::PreOwned],
            ProductKind::Clothing => &[Variation::Small, Variation::Medium, Variation::Large],
            ProductKind::Console => &[Variation::New, Variation::PreOwned, Variation::Refurbished],
            ProductKind::PhysicalItem => &[Variation::New],
        }
    }

    /// Check whether a variation belongs to this category.
    pub fn allows(&self, variation: Variation) -> bool {
        self.valid_variations().contains(&variation)
    }

    /// Prompt shown when asking the customer to pick a variation.
    pub fn variation_prompt(&self) -> &'static str {
        match self {
            ProductKind::Clothing => "Select Size",
            ProductKind::VideoGame | ProductKind::Console => "Select Condition",
            ProductKind::PhysicalItem => "Select Option",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A product in the catalog.
///
/// Products are immutable once built. The variation list is never empty and
/// only contains variations allowed by the product's category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "ProductRecord", into = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    image: String,
    details: String,
    price: Money,
    kind: ProductKind,
    variations: Vec<Variation>,
}

impl Product {
    /// Build a product, checking the price and variation invariants.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        kind: ProductKind,
        price: Money,
        variations: Vec<Variation>,
    ) -> Result<Self, CommerceError> {
        let id = id.into();

        if price.amount_cents < 0 {
            return Err(CommerceError::InvalidPrice {
                product_id: id.into_inner(),
                price: price.to_decimal(),
            });
        }
        if variations.is_empty() {
            return Err(CommerceError::NoVariations(id.into_inner()));
        }
        if let Some(bad) = variations.iter().find(|v| !kind.allows(**v)) {
            return Err(CommerceError::InvalidVariation {
                product_id: id.into_inner(),
                kind,
                variation: *bad,
            });
        }

        Ok(Self {
            id,
            name: name.into(),
            image: String::new(),
            details: String::new(),
            price,
            kind,
            variations,
        })
    }

    /// Set the image URI.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the descriptive text.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    /// Unit price.
    pub fn price(&self) -> Money {
        self.price
    }

    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    /// Variations offered for this product.
    pub fn variations(&self) -> &[Variation] {
        &self.variations
    }

    /// Check whether this product is offered in the given variation.
    pub fn accepts(&self, variation: Variation) -> bool {
        self.variations.contains(&variation)
    }
}

/// Wire shape of a product in the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProductRecord {
    id: ProductId,
    name: String,
    image: String,
    details: String,
    price: f64,
    #[serde(rename = "type")]
    kind: ProductKind,
    variations: Vec<Variation>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = CommerceError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        if !record.price.is_finite() || record.price < 0.0 {
            return Err(CommerceError::InvalidPrice {
                product_id: record.id.into_inner(),
                price: record.price,
            });
        }

        Ok(Product::new(
            record.id,
            record.name,
            record.kind,
            Money::from_decimal(record.price),
            record.variations,
        )?
        .with_image(record.image)
        .with_details(record.details))
    }
}

impl From<Product> for ProductRecord {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            image: product.image,
            details: product.details,
            price: product.price.to_decimal(),
            kind: product.kind,
            variations: product.variations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tee() -> Product {
        Product::new(
            "p1",
            "Tee",
            ProductKind::Clothing,
            Money::from_decimal(19.99),
            vec![Variation::Small, Variation::Medium],
        )
        .unwrap()
    }

    #[test]
    fn test_valid_variations_per_kind() {
        assert_eq!(
            ProductKind::VideoGame.valid_variations(),
            &[Variation::Digital, Variation::New, Variation::PreOwned]
        );
        assert_eq!(
            ProductKind::Clothing.valid_variations(),
            &[Variation::Small, Variation::Medium, Variation::Large]
        );
        assert_eq!(
            ProductKind::Console.valid_variations(),
            &[Variation::New, Variation::PreOwned, Variation::Refurbished]
        );
        assert_eq!(ProductKind::PhysicalItem.valid_variations(), &[Variation::New]);
    }

    #[test]
    fn test_product_accepts_only_listed_variations() {
        let product = tee();
        assert!(product.accepts(Variation::Small));
        assert!(!product.accepts(Variation::Large));
        assert!(!product.accepts(Variation::New));
    }

    #[test]
    fn test_rejects_empty_variations() {
        let result = Product::new("p9", "Empty", ProductKind::Console, Money::new(100), vec![]);
        assert!(matches!(result, Err(CommerceError::NoVariations(id)) if id == "p9"));
    }

    #[test]
    fn test_rejects_variation_from_other_kind() {
        let result = Product::new(
            "p9",
            "Shirt",
            ProductKind::Clothing,
            Money::new(100),
            vec![Variation::Small, Variation::Digital],
        );
        assert!(matches!(
            result,
            Err(CommerceError::InvalidVariation {
                variation: Variation::Digital,
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_negative_price() {
        let result = Product::new(
            "p9",
            "Refund",
            ProductKind::PhysicalItem,
            Money::new(-1),
            vec![Variation::New],
        );
        assert!(matches!(result, Err(CommerceError::InvalidPrice { .. })));
    }

    #[test]
    fn test_deserialize_dataset_record() {
        let json = r#"{
            "id": "p2",
            "name": "Starfall",
            "image": "https://example.com/a.jpg",
            "details": "RPG",
            "price": 59.99,
            "type": "video games",
            "variations": ["Digital", "Pre-Owned"]
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id().as_str(), "p2");
        assert_eq!(product.kind(), ProductKind::VideoGame);
        assert_eq!(product.price().amount_cents, 5999);
        assert_eq!(product.variations(), &[Variation::Digital, Variation::PreOwned]);
        assert_eq!(product.image(), "https://example.com/a.jpg");
    }

    #[test]
    fn test_deserialize_rejects_invalid_variation() {
        let json = r#"{
            "id": "p2", "name": "Starfall", "image": "", "details": "",
            "price": 59.99, "type": "physical items", "variations": ["Large"]
        }"#;

        let result: Result<Product, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_uses_dataset_shape() {
        let value = serde_json::to_value(tee()).unwrap();
        assert_eq!(value["type"], "clothing");
        assert_eq!(value["price"], 19.99);
        assert_eq!(value["variations"][0], "Small");
    }

    #[test]
    fn test_variation_from_str() {
        assert_eq!("Small".parse::<Variation>().unwrap(), Variation::Small);
        assert_eq!("pre-owned".parse::<Variation>().unwrap(), Variation::PreOwned);
        assert_eq!("PreOwned".parse::<Variation>().unwrap(), Variation::PreOwned);
        assert_eq!(" refurbished ".parse::<Variation>().unwrap(), Variation::Refurbished);
        assert!("XL".parse::<Variation>().is_err());
    }

    #[test]
    fn test_variation_prompt() {
        assert_eq!(ProductKind::Clothing.variation_prompt(), "Select Size");
        assert_eq!(ProductKind::Console.variation_prompt(), "Select Condition");
    }
}
