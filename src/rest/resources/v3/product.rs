//! Product resource (licenses and hardware sold through the platform).

use serde::{Deserialize, Serialize};

/// A purchasable product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub sku: String,
    pub active: bool,
    /// `true` for licenses and other non-physical goods.
    pub digital: bool,
    pub price: f64,
}
