//! Catalog pipeline stages.
//!
//! A listing request runs filter, then sort, then paginate. Every stage is a
//! pure function: filtering copies the matching products, sorting takes
//! ownership of the vector it reorders, and pagination borrows a window of
//! its input.

use super::model::Product;
use super::value_objects::{PageNumber, SortKey};

/// Products shown on one page of `/filtered-products`.
pub const ITEMS_PER_PAGE: usize = 3;

/// Keeps the products whose color is exactly `color`, in catalog order.
///
/// An empty `color` means no filter.
pub fn filter_by_color(products: &[Product], color: &str) -> Vec<Product> {
    if color.is_empty() {
        return products.to_vec();
    }

    products
        .iter()
        .filter(|product| product.has_color(color))
        .cloned()
        .collect()
}

/// Orders `products` by `key`. `slice::sort_by` is stable, so products with
/// equal keys keep their relative order.
pub fn sort_by(mut products: Vec<Product>, key: SortKey) -> Vec<Product> {
    match key {
        SortKey::Name => products.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Price => products.sort_by_key(|product| product.price),
        SortKey::Unsorted => {}
    }
    products
}

/// Returns the window of `products` for the page named by `page_text`.
///
/// Pages past the end yield an empty slice.
pub fn paginate<'a>(products: &'a [Product], page_text: &str, page_size: usize) -> &'a [Product] {
    page_of(products, PageNumber::parse(page_text), page_size)
}

pub fn page_of(products: &[Product], page: PageNumber, page_size: usize) -> &[Product] {
    let start = page.offset(page_size);
    if start >= products.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(products.len());
    &products[start..end]
}
