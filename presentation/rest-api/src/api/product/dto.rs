use serde::Serialize;

use business::domain::product::model::Product;
use business::domain::product::use_cases::get_filtered::ProductPage;

/// A product card.
#[derive(Debug, Clone, Serialize)]
pub struct ProductCard {
    pub name: String,
    pub price: u32,
    pub color: String,
    pub description: String,
    pub image_url: String,
}

impl From<Product> for ProductCard {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            price: product.price,
            color: product.color,
            description: product.description,
            image_url: product.image_url,
        }
    }
}

/// Links to neighbouring pages, keeping the active filter and sort.
#[derive(Debug, Clone, Serialize)]
pub struct Pagination {
    pub page: u64,
    pub color: String,
    pub sort: String,
    pub previous_page: Option<u64>,
    pub next_page: Option<u64>,
}

/// Template context of `products.html`.
#[derive(Debug, Clone, Serialize)]
pub struct ProductsView {
    pub products: Vec<ProductCard>,
    pub pagination: Option<Pagination>,
}

impl ProductsView {
    /// The whole catalog on one page.
    pub fn catalog(products: Vec<Product>) -> Self {
        Self {
            products: products.into_iter().map(ProductCard::from).collect(),
            pagination: None,
        }
    }

    pub fn page(
        result: ProductPage,
        color: Option<String>,
        sort: Option<String>,
        items_per_page: usize,
    ) -> Self {
        let page = result.page.get();
        let shown_so_far = result
            .page
            .offset(items_per_page)
            .saturating_add(result.products.len());

        Self {
            pagination: Some(Pagination {
                page,
                color: color.unwrap_or_default(),
                sort: sort.unwrap_or_default(),
                previous_page: (page > 1).then(|| page - 1),
                next_page: (shown_so_far < result.matched).then(|| page + 1),
            }),
            products: result
                .products
                .into_iter()
                .map(ProductCard::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::value_objects::{PageNumber, SortKey};

    fn shirt(price: u32) -> Product {
        Product::new("T-shirt", price, "white", "Plain", "https://img/shirt.jpg")
    }

    #[test]
    fn should_link_to_next_page_when_more_products_matched() {
        let result = ProductPage {
            products: vec![shirt(1), shirt(2), shirt(3)],
            page: PageNumber::FIRST,
            sort: SortKey::Price,
            matched: 6,
        };

        let view = ProductsView::page(result, Some("white".into()), Some("price".into()), 3);
        let pagination = view.pagination.unwrap();

        assert_eq!(pagination.previous_page, None);
        assert_eq!(pagination.next_page, Some(2));
        assert_eq!(pagination.color, "white");
        assert_eq!(pagination.sort, "price");
    }

    #[test]
    fn should_not_link_past_the_last_page() {
        let result = ProductPage {
            products: vec![shirt(4)],
            page: PageNumber::parse("2"),
            sort: SortKey::Unsorted,
            matched: 4,
        };

        let pagination = ProductsView::page(result, None, None, 3).pagination.unwrap();

        assert_eq!(pagination.previous_page, Some(1));
        assert_eq!(pagination.next_page, None);
        assert_eq!(pagination.color, "");
    }

    #[test]
    fn should_render_full_catalog_without_pagination() {
        let view = ProductsView::catalog(vec![shirt(1), shirt(2)]);

        assert_eq!(view.products.len(), 2);
        assert!(view.pagination.is_none());
    }
}
