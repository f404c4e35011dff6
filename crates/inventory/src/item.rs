use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stock record for one item key.
///
/// `quantity` is signed: decrements are unchecked and may drive it below zero.
/// The optional extensions start out unset and are dropped whenever the item
/// is re-added under the same key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    pub supplier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_suppliers: Option<Vec<String>>,
}

impl InventoryItem {
    pub fn new(
        name: impl Into<String>,
        quantity: i64,
        price: f64,
        supplier: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
            supplier,
            discount_percentage: None,
            expiry_date: None,
            preferred_suppliers: None,
        }
    }

    /// Stock value at the list price (discounts ignored).
    pub fn value(&self) -> f64 {
        self.quantity as f64 * self.price
    }

    /// Price after the discount, or `None` when no discount has been set.
    pub fn discounted_price(&self) -> Option<f64> {
        self.discount_percentage
            .map(|pct| self.price - self.price * (pct / 100.0))
    }

    pub fn expiry_status(&self, now: DateTime<Utc>) -> ExpiryStatus {
        match self.expiry_date {
            Some(expiry) if expiry < now => ExpiryStatus::Expired,
            Some(_) => ExpiryStatus::NotExpired,
            None => ExpiryStatus::NotSet,
        }
    }
}

/// Result of comparing an item's expiry date against the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    Expired,
    NotExpired,
    NotSet,
}

impl core::fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            ExpiryStatus::Expired => "Expired",
            ExpiryStatus::NotExpired => "Not Expired",
            ExpiryStatus::NotSet => "Expiry date not set",
        })
    }
}
