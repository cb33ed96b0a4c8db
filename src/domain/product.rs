use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Serde adapter writing stored UTC timestamps as RFC 3339 with a `Z` offset.
pub mod utc_timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.and_utc().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        DateTime::<Utc>::deserialize(deserializer).map(|value| value.naive_utc())
    }
}

/// Sales label attached to a product.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    /// Product is available for purchase.
    #[default]
    ForSale,
    /// Product is no longer in stock.
    SoldOut,
}

/// Returned when a status string is not one of the known labels.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown product status: {0}")]
pub struct UnknownProductStatus(pub String);

impl ProductStatus {
    /// Every accepted status, in declaration order.
    pub const ALL: [ProductStatus; 2] = [ProductStatus::ForSale, ProductStatus::SoldOut];

    /// Wire and storage representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::ForSale => "FOR_SALE",
            ProductStatus::SoldOut => "SOLD_OUT",
        }
    }
}

impl FromStr for ProductStatus {
    type Err = UnknownProductStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| UnknownProductStatus(value.to_string()))
    }
}

impl From<ProductStatus> for &'static str {
    fn from(value: ProductStatus) -> Self {
        value.as_str()
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain representation of a catalog product, including its delete password.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier assigned by the store.
    pub id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// Longer description shown to buyers.
    pub description: String,
    /// Free-form identifier of the person responsible for the listing.
    pub manager: String,
    /// Plaintext password required to delete the product.
    pub password: String,
    /// Current sales label.
    pub status: ProductStatus,
    /// Timestamp for when the product record was created.
    #[serde(with = "utc_timestamp")]
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    #[serde(with = "utc_timestamp")]
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub manager: String,
    pub password: String,
    pub status: ProductStatus,
    /// Timestamp captured when the product payload was created.
    pub created_at: NaiveDateTime,
}

impl NewProduct {
    /// Build a new product payload with the default status and current timestamp.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        manager: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            manager: manager.into(),
            password: password.into(),
            status: ProductStatus::default(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    /// Override the default status for the new product.
    pub fn with_status(mut self, status: ProductStatus) -> Self {
        self.status = status;
        self
    }
}

/// Full replacement applied when updating an existing product.
///
/// Every field is overwritten; there is no partial patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProduct {
    pub name: String,
    pub description: String,
    pub manager: String,
    pub password: String,
    pub status: ProductStatus,
    /// Timestamp captured when the replacement was created.
    pub updated_at: NaiveDateTime,
}
