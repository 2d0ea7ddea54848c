//! HTTP Handlers
//!
//! Routes under `/hunter` that configure the actors and run hunts.
//! Each actor sits behind its own lock so requests may arrive concurrently.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument, warn};

use crate::hunt::hunter::Hunter;
use crate::hunt::prey::Prey;
use crate::hunt::simulator::Subject;
use crate::network::protocol::{
    ApiResponse, ConfigureRequest, ErrorResponse, CAN_NOT_HUNT, HUNTER_CONFIGURED,
    INVALID_REQUEST_BODY, PREY_CONFIGURED, PREY_DECODE_ERROR_PREFIX, PREY_HUNTED,
};

/// Shared state behind the `/hunter` routes.
#[derive(Clone)]
pub struct HuntHandler {
    hunter: Arc<RwLock<Box<dyn Hunter>>>,
    prey: Arc<RwLock<Box<dyn Prey>>>,
}

impl HuntHandler {
    /// Serve the given hunter and prey.
    pub fn new(hunter: impl Hunter + 'static, prey: impl Prey + 'static) -> Self {
        let hunter: Box<dyn Hunter> = Box::new(hunter);
        let prey: Box<dyn Prey> = Box::new(prey);

        Self {
            hunter: Arc::new(RwLock::new(hunter)),
            prey: Arc::new(RwLock::new(prey)),
        }
    }

    /// Current hunter state.
    pub async fn hunter_subject(&self) -> Subject {
        self.hunter.read().await.subject()
    }

    /// Current prey state.
    pub async fn prey_subject(&self) -> Subject {
        self.prey.read().await.subject()
    }

    /// Build the router for this handler.
    pub fn router(self) -> Router {
        Router::new()
            .route("/hunter/configure-prey", post(configure_prey))
            .route("/hunter/configure-hunter", post(configure_hunter))
            .route("/hunter/hunt", post(hunt))
            .layer(TraceLayer::new_for_http())
            .with_state(self)
    }
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let reason = status.canonical_reason().unwrap_or_default();
    (status, Json(ErrorResponse::new(reason, message))).into_response()
}

/// `POST /hunter/configure-prey`
#[instrument(skip_all)]
async fn configure_prey(State(handler): State<HuntHandler>, body: Bytes) -> Response {
    let request: ConfigureRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejected prey configuration: {}", e);
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("{PREY_DECODE_ERROR_PREFIX}{e}"),
            );
        }
    };

    handler.prey.write().await.configure(request.speed, request.position);
    info!(speed = %request.speed, position = %request.position, "prey configured");

    (StatusCode::OK, PREY_CONFIGURED).into_response()
}

/// `POST /hunter/configure-hunter`
#[instrument(skip_all)]
async fn configure_hunter(State(handler): State<HuntHandler>, body: Bytes) -> Response {
    let request: ConfigureRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejected hunter configuration: {}", e);
            return error_response(StatusCode::BAD_REQUEST, INVALID_REQUEST_BODY);
        }
    };

    handler.hunter.write().await.configure(request.speed, request.position);
    info!(speed = %request.speed, position = %request.position, "hunter configured");

    (StatusCode::OK, Json(ApiResponse::message(HUNTER_CONFIGURED))).into_response()
}

/// `POST /hunter/hunt`
#[instrument(skip_all)]
async fn hunt(State(handler): State<HuntHandler>) -> Response {
    let hunter = handler.hunter.read().await;
    let prey = handler.prey.read().await;

    match hunter.hunt(&**prey) {
        Ok(()) => (StatusCode::OK, Json(ApiResponse::message(PREY_HUNTED))).into_response(),
        Err(e) => {
            warn!("Hunt failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, CAN_NOT_HUNT)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
