use std::net::SocketAddr;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use veterinary_graphql::{
    GraphQLContext, GraphQLError, GraphQLState, VeterinarySchemaBuilder, graphql_handler,
};
use veterinary_storage::DynUserService;

use crate::{config::AppConfig, handlers, middleware as app_middleware};

pub struct VeterinaryServer {
    addr: SocketAddr,
    app: Router,
}

/// Builds the GraphQL schema over `service` and wraps it as handler state.
pub fn build_graphql_state(
    cfg: &AppConfig,
    service: DynUserService,
) -> Result<GraphQLState, GraphQLError> {
    let context = GraphQLContext::builder()
        .with_service(service)
        .build()
        .map_err(|e| GraphQLError::Internal(e.to_string()))?;

    let schema =
        VeterinarySchemaBuilder::new(context, cfg.graphql.to_schema_builder_config()).build()?;

    Ok(GraphQLState::new(schema))
}

pub fn build_app(cfg: &AppConfig, graphql: GraphQLState) -> Router {
    let body_limit = cfg.server.body_limit_bytes;
    Router::new()
        // Health and info endpoints
        .route("/", get(handlers::root))
        .route("/healthz", get(handlers::healthz))
        // GraphQL endpoint
        .route(&cfg.graphql.path, post(graphql_handler))
        .with_state(graphql)
        // Middleware stack (outermost last: body limit -> request id -> trace -> compression/cors)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    use tracing::field::Empty;
                    let req_id = req
                        .headers()
                        .get(app_middleware::REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("")
                        .to_string();
                    tracing::info_span!(
                        "http.request",
                        http.method = %req.method(),
                        http.target = %req.uri(),
                        http.status_code = Empty,
                        request_id = %req_id
                    )
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &tracing::Span| {
                        span.record(
                            "http.status_code",
                            tracing::field::display(res.status().as_u16()),
                        );
                        tracing::info!(
                            http.status = %res.status().as_u16(),
                            elapsed_ms = %latency.as_millis(),
                            "request handled"
                        );
                    },
                ),
        )
        .layer(middleware::from_fn(app_middleware::request_id))
        .layer(axum::extract::DefaultBodyLimit::max(body_limit))
}

pub struct ServerBuilder {
    addr: SocketAddr,
    config: AppConfig,
    service: Option<DynUserService>,
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerBuilder {
    pub fn new() -> Self {
        let cfg = AppConfig::default();
        Self {
            addr: cfg.addr(),
            config: cfg,
            service: None,
        }
    }

    pub fn with_config(mut self, cfg: AppConfig) -> Self {
        self.addr = cfg.addr();
        self.config = cfg;
        self
    }

    /// Uses `service` instead of an in-memory service seeded from config.
    pub fn with_service(mut self, service: DynUserService) -> Self {
        self.service = Some(service);
        self
    }

    pub fn build(self) -> Result<VeterinaryServer, GraphQLError> {
        let service = self.service.unwrap_or_else(|| {
            veterinary_db_memory::create_user_service(self.config.bootstrap.roles.clone())
        });
        tracing::info!(
            backend = service.backend_name(),
            roles = self.config.bootstrap.roles.len(),
            "User service ready"
        );

        let graphql = build_graphql_state(&self.config, service)?;
        let app = build_app(&self.config, graphql);

        Ok(VeterinaryServer {
            addr: self.addr,
            app,
        })
    }
}

impl VeterinaryServer {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        tracing::info!("listening on {}", self.addr);
        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    // Wait for Ctrl+C
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
