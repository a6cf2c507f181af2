use async_trait::async_trait;

use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::SEED_PRODUCTS;

/// Serves a fixed product list held in memory.
///
/// The list is built once and only ever cloned out, so concurrent requests
/// share it without locking.
pub struct ProductRepositoryInMemory {
    products: Vec<Product>,
}

impl ProductRepositoryInMemory {
    /// Repository over the built-in mock catalog.
    pub fn new() -> Self {
        Self::with_products(
            SEED_PRODUCTS
                .iter()
                .map(|entity| entity.into_domain())
                .collect(),
        )
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl Default for ProductRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn get_all(&self) -> Vec<Product> {
        self.products.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_serve_six_seed_products_in_order() {
        let repository = ProductRepositoryInMemory::new();

        let products = repository.get_all().await;

        let summary: Vec<(&str, u32, &str)> = products
            .iter()
            .map(|p| (p.name.as_str(), p.price, p.color.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("T-shirt", 5000, "white"),
                ("T-shirt", 5500, "black"),
                ("Jeans", 10000, "white"),
                ("Jeans", 6000, "black"),
                ("Jacket", 12000, "white"),
                ("Jacket", 9000, "black"),
            ]
        );
    }

    #[tokio::test]
    async fn should_split_seed_evenly_between_white_and_black() {
        let products = ProductRepositoryInMemory::new().get_all().await;

        assert_eq!(products.iter().filter(|p| p.color == "white").count(), 3);
        assert_eq!(products.iter().filter(|p| p.color == "black").count(), 3);
    }

    #[tokio::test]
    async fn should_return_a_fresh_copy_on_every_call() {
        let repository = ProductRepositoryInMemory::new();

        let mut first = repository.get_all().await;
        first.clear();

        assert_eq!(repository.get_all().await.len(), 6);
    }

    #[tokio::test]
    async fn should_serve_custom_products() {
        let repository = ProductRepositoryInMemory::with_products(vec![Product::new(
            "Scarf",
            2500,
            "red",
            "Knitted scarf",
            "https://img/scarf.jpg",
        )]);

        let products = repository.get_all().await;

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Scarf");
    }
}
