use std::time::Duration;

use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Cors,
    middleware::Tracing,
};
use poem_openapi::OpenApiService;
use tracing::{error, info};

use crate::middleware::rate_limit::RateLimit;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

/// Time in-flight requests get to finish once shutdown starts.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::app(
            container,
            &format!("http://{}", addr),
            config.cors,
            RateLimit::new(&config.rate_limit),
        );

        info!(%addr, "Server running");
        info!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr))
            .run_with_graceful_shutdown(app, shutdown_signal(), Some(SHUTDOWN_GRACE))
            .await?;
        info!("Server gracefully stopped");
        Ok(())
    }

    pub fn app(
        container: DependencyContainer,
        server_url: &str,
        cors: Cors,
        rate_limit: RateLimit,
    ) -> impl Endpoint + 'static {
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.home_api,
                container.product_api,
            ),
            "Product Catalog",
            env!("CARGO_PKG_VERSION"),
        )
        .server(server_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(rate_limit)
            .with(cors)
            .with(Tracing)
    }
}

/// Resolves on SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    info!("Shutdown signal received, shutting down gracefully");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::rate_limit_config::RateLimitConfig;
    use poem::http::StatusCode;
    use poem::test::TestClient;

    fn client(rate_limit: RateLimitConfig) -> TestClient<impl Endpoint> {
        let container = DependencyContainer::new().unwrap();
        TestClient::new(Server::app(
            container,
            "http://localhost:8080",
            Cors::new(),
            RateLimit::new(&rate_limit),
        ))
    }

    fn generous() -> RateLimitConfig {
        RateLimitConfig {
            per_second: 100,
            burst: 100,
        }
    }

    #[tokio::test]
    async fn should_serve_landing_page() {
        let resp = client(generous()).get("/").send().await;

        resp.assert_status_is_ok();
        resp.assert_content_type("text/html; charset=utf-8");
    }

    #[tokio::test]
    async fn should_wire_catalog_routes() {
        let cli = client(generous());

        cli.get("/products").send().await.assert_status_is_ok();
        cli.get("/filtered-products?color=white&sort=name&page=1")
            .send()
            .await
            .assert_status_is_ok();
        cli.get("/filtered-products?color=red")
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
        cli.get("/health").send().await.assert_status_is_ok();
        cli.get("/openapi.json").send().await.assert_status_is_ok();
    }

    #[tokio::test]
    async fn should_rate_limit_every_route() {
        let cli = client(RateLimitConfig {
            per_second: 0,
            burst: 3,
        });

        for _ in 0..3 {
            cli.get("/health").send().await.assert_status_is_ok();
        }
        cli.get("/products")
            .send()
            .await
            .assert_status(StatusCode::TOO_MANY_REQUESTS);
    }
}
