use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    payload::{Html, Json},
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::view::Views;

/// Landing page
pub struct HomeApi {
    views: Arc<Views>,
}

impl HomeApi {
    pub fn new(views: Arc<Views>) -> Self {
        Self { views }
    }
}

#[OpenApi]
impl HomeApi {
    /// Landing page
    ///
    /// Links to the catalog and offers the color / sort form.
    #[oai(path = "/", method = "get", tag = "ApiTags::Home")]
    async fn index(&self) -> HomeResponse {
        match self.views.index() {
            Ok(html) => HomeResponse::Ok(Html(html)),
            Err(err) => {
                tracing::error!(error = %err, "Failed to render landing page");
                let (_status, json) = err.into_error_response();
                HomeResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum HomeResponse {
    #[oai(status = 200)]
    Ok(Html<String>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
