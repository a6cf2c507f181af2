//! HTML views rendered with Tera.
//!
//! Templates are compiled into the binary and registered once at startup.

use poem::http::StatusCode;
use poem_openapi::payload::Json;
use tera::{Context, Tera};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::ProductsView;

const INDEX_TEMPLATE: &str = "index.html";
const PRODUCTS_TEMPLATE: &str = "products.html";

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("view.render_failed: {0}")]
    Template(#[from] tera::Error),
}

impl IntoErrorResponse for ViewError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to render view".to_string(),
            }),
        )
    }
}

pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> Result<Self, ViewError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (INDEX_TEMPLATE, include_str!("../../templates/index.html")),
            (
                PRODUCTS_TEMPLATE,
                include_str!("../../templates/products.html"),
            ),
        ])?;
        Ok(Self { tera })
    }

    pub fn index(&self) -> Result<String, ViewError> {
        Ok(self.tera.render(INDEX_TEMPLATE, &Context::new())?)
    }

    pub fn products(&self, view: &ProductsView) -> Result<String, ViewError> {
        let context = Context::from_serialize(view)?;
        Ok(self.tera.render(PRODUCTS_TEMPLATE, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::model::Product;

    #[test]
    fn should_render_landing_page() {
        let html = Views::new().unwrap().index().unwrap();

        assert!(html.contains("href=\"/products\""));
        assert!(html.contains("action=\"/filtered-products\""));
    }

    #[test]
    fn should_escape_product_fields() {
        let view = ProductsView::catalog(vec![Product::new(
            "<b>Scarf</b>",
            2500,
            "red",
            "Knitted",
            "https://img/scarf.jpg",
        )]);

        let html = Views::new().unwrap().products(&view).unwrap();

        assert!(html.contains("&lt;b&gt;Scarf&lt;&#x2F;b&gt;"));
        assert!(!html.contains("<b>Scarf</b>"));
    }
}
