use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::catalog::{filter_by_color, page_of, sort_by};
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_filtered::{
    GetFilteredProductsParams, GetFilteredProductsUseCase, ProductPage,
};
use crate::domain::product::value_objects::{PageNumber, SortKey};

pub struct GetFilteredProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
    pub items_per_page: usize,
}

#[async_trait]
impl GetFilteredProductsUseCase for GetFilteredProductsUseCaseImpl {
    async fn execute(
        &self,
        params: GetFilteredProductsParams,
    ) -> Result<ProductPage, ProductError> {
        let color = params.color.as_deref().unwrap_or_default();
        let sort = SortKey::parse(params.sort.as_deref().unwrap_or_default());
        let page = PageNumber::parse(params.page.as_deref().unwrap_or_default());

        let products = self.repository.get_all().await;

        let filtered = filter_by_color(&products, color);
        if filtered.is_empty() {
            self.logger
                .warn(&format!("No products match color filter '{}'", color));
            return Err(ProductError::NoDataAvailable);
        }
        let matched = filtered.len();

        let sorted = sort_by(filtered, sort);

        let paginated = page_of(&sorted, page, self.items_per_page);
        if paginated.is_empty() {
            self.logger.warn(&format!(
                "Page {} is empty ({} products matched, {} per page)",
                page, matched, self.items_per_page
            ));
            return Err(ProductError::NoDataAvailable);
        }

        self.logger.info(&format!(
            "Filtered and paginated products: color_filter='{}' sort_by={} page={} items_per_page={} filtered_products={} paginated_products={}",
            color,
            sort,
            page,
            self.items_per_page,
            matched,
            paginated.len()
        ));

        Ok(ProductPage {
            products: paginated.to_vec(),
            page,
            sort,
            matched,
        })
    }
}
