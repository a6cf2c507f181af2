use std::sync::Arc;

use catalog::product::repository::ProductRepositoryInMemory;
use logger::TracingLogger;

use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_filtered::GetFilteredProductsUseCaseImpl;
use business::domain::product::catalog::ITEMS_PER_PAGE;

use crate::api::view::Views;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub home_api: crate::api::home::routes::HomeApi,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    pub fn new() -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger::new("catalog"));
        let views = Arc::new(Views::new()?);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryInMemory::new());

        // Product use cases
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_filtered_use_case = Arc::new(GetFilteredProductsUseCaseImpl {
            repository: product_repository,
            logger,
            items_per_page: ITEMS_PER_PAGE,
        });

        let home_api = crate::api::home::routes::HomeApi::new(views.clone());
        let product_api = crate::api::product::routes::ProductApi::new(
            get_all_use_case,
            get_filtered_use_case,
            views,
            ITEMS_PER_PAGE,
        );

        Ok(Self {
            health_api,
            home_api,
            product_api,
        })
    }
}
