use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Vec<Product> {
        self.logger.info("Fetching the full catalog");
        let products = self.repository.get_all().await;
        self.logger
            .info(&format!("Found {} products", products.len()));
        products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Vec<Product>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_catalog_unchanged() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().times(1).returning(|| {
            vec![
                Product::new("Jeans", 10000, "white", "Stylish", "https://img/1.jpg"),
                Product::new("T-shirt", 5000, "white", "Comfortable", "https://img/2.jpg"),
            ]
        });

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case.execute().await;

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Jeans");
        assert_eq!(products[1].name, "T-shirt");
    }
}
