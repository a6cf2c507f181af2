use async_trait::async_trait;

use super::model::Product;

/// Read-only source of the product catalog.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns every product in catalog order.
    async fn get_all(&self) -> Vec<Product>;
}
