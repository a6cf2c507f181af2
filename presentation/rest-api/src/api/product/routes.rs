use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::Query,
    payload::{Html, Json},
};

use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_filtered::{
    GetFilteredProductsParams, GetFilteredProductsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::ProductsView;
use crate::api::tags::ApiTags;
use crate::api::view::Views;

pub struct ProductApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_filtered_use_case: Arc<dyn GetFilteredProductsUseCase>,
    views: Arc<Views>,
    items_per_page: usize,
}

impl ProductApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_filtered_use_case: Arc<dyn GetFilteredProductsUseCase>,
        views: Arc<Views>,
        items_per_page: usize,
    ) -> Self {
        Self {
            get_all_use_case,
            get_filtered_use_case,
            views,
            items_per_page,
        }
    }

    fn render(&self, view: &ProductsView) -> ProductListResponse {
        match self.views.products(view) {
            Ok(html) => ProductListResponse::Ok(Html(html)),
            Err(err) => {
                tracing::error!(error = %err, "Failed to render product list");
                let (_status, json) = err.into_error_response();
                ProductListResponse::InternalError(json)
            }
        }
    }
}

/// Product catalog
///
/// Read-only listing of the mock catalog.
#[OpenApi]
impl ProductApi {
    /// List the whole catalog
    ///
    /// Renders every product in catalog order, without filtering or paging.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> ProductListResponse {
        let products = self.get_all_use_case.execute().await;
        self.render(&ProductsView::catalog(products))
    }

    /// Filter, sort and page the catalog
    ///
    /// - `color`: exact, case-sensitive color match; empty or missing keeps every product
    /// - `sort`: `name` or `price`; anything else keeps catalog order
    /// - `page`: 1-based page of three products; invalid values mean page 1
    ///
    /// Responds 404 with `{"error": "No data available"}` when nothing
    /// matches the color or the page is past the end.
    #[oai(path = "/filtered-products", method = "get", tag = "ApiTags::Products")]
    async fn get_filtered_products(
        &self,
        color: Query<Option<String>>,
        sort: Query<Option<String>>,
        page: Query<Option<String>>,
    ) -> ProductListResponse {
        let params = GetFilteredProductsParams {
            color: color.0,
            sort: sort.0,
            page: page.0,
        };

        match self.get_filtered_use_case.execute(params.clone()).await {
            Ok(result) => self.render(&ProductsView::page(
                result,
                params.color,
                params.sort,
                self.items_per_page,
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ProductListResponse::NotFound(json),
                    _ => ProductListResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProductListResponse {
    #[oai(status = 200)]
    Ok(Html<String>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
