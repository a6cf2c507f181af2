use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::{PageNumber, SortKey};

/// Raw query parameters of a catalog listing. Missing values are `None`.
#[derive(Debug, Clone, Default)]
pub struct GetFilteredProductsParams {
    pub color: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
}

/// One non-empty page of a filtered, sorted listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub page: PageNumber,
    pub sort: SortKey,
    /// Products that passed the color filter, across all pages.
    pub matched: usize,
}

#[async_trait]
pub trait GetFilteredProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetFilteredProductsParams)
    -> Result<ProductPage, ProductError>;
}
