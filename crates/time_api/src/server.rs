use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::core::{
    error::{TimeApiError, TimeApiResult},
    models::CurrentTime,
    provider::TimeProvider,
};

pub const TIME_ROUTE: &str = "/api/time";
pub const OPENAPI_ROUTE: &str = "/openapi/v1.json";
#[cfg(feature = "swagger-ui")]
pub const SWAGGER_UI_ROUTE: &str = "/swagger-ui";

/// Get the current time in several textual representations
#[utoipa::path(
    get,
    path = "/api/time",
    tag = "time",
    responses(
        (status = 200, description = "Current time snapshot", body = CurrentTime),
        (status = 500, description = "The clock could not be read", body = crate::core::models::ErrorBody)
    )
)]
pub(crate) async fn get_current_time(
    State(provider): State<TimeProvider>,
) -> TimeApiResult<Json<CurrentTime>> {
    let snapshot = provider.get_current_time()?;
    Ok(Json(snapshot))
}

#[cfg(not(feature = "swagger-ui"))]
async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(crate::openapi::get_openapi_json())
}

pub fn create_router(provider: TimeProvider) -> Router {
    let router = Router::new()
        .route(TIME_ROUTE, get(get_current_time))
        .with_state(provider);

    #[cfg(not(feature = "swagger-ui"))]
    let router = router.route(OPENAPI_ROUTE, get(openapi_handler));

    #[cfg(feature = "swagger-ui")]
    let router = {
        use axum::response::Redirect;
        use utoipa_swagger_ui::SwaggerUi;

        let swagger_ui =
            SwaggerUi::new(SWAGGER_UI_ROUTE).url(OPENAPI_ROUTE, crate::openapi::get_openapi_json());
        router
            .merge(swagger_ui)
            .route("/", get(|| async { Redirect::temporary("/swagger-ui/") }))
    };

    router
        .fallback(|| async { (StatusCode::NOT_FOUND, "path not found") })
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}

pub async fn run(config: Config) -> TimeApiResult<()> {
    let provider = TimeProvider::new(config.clock.into_clock());
    let router = create_router(provider);

    let listener = TcpListener::bind(config.address)
        .await
        .map_err(|source| TimeApiError::Bind {
            address: config.address,
            source,
        })?;

    tracing::info!(
        clock = ?config.clock,
        "Time API server listening on http://{}",
        config.address
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Time API server stopped");
    Ok(())
}
