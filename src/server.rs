use crate::app::ports::{PlacesSearchPort, VerificationPort};
use crate::app::{AddressSearchUseCase, OtpUseCase};
use crate::config::{Config, Credentials};
use crate::constants::MSG_SEARCH_FAILED;
use crate::error::QuoteError;
use crate::infra::{GooglePlacesClient, TwilioVerifyClient};
use crate::otp::{SendOtpRequest, VerifyOtpRequest};
use crate::quote::{self, QuoteSubmission};
use axum::{
    extract::Query,
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Extension, Router,
};
use hyper::Server;
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

/// Shared state handed to every handler
pub struct AppState {
    pub config: Config,
    pub address_search: AddressSearchUseCase,
    pub otp: OtpUseCase,
}

impl AppState {
    pub fn new(
        config: Config,
        places: Arc<dyn PlacesSearchPort>,
        verifier: Arc<dyn VerificationPort>,
    ) -> Self {
        let otp = OtpUseCase::new(verifier, config.phone.default_country_code.clone());
        Self {
            address_search: AddressSearchUseCase::new(places),
            otp,
            config,
        }
    }

    /// Wires the real provider clients from configuration and credentials
    pub fn from_credentials(config: Config, credentials: Credentials) -> Self {
        let places = Arc::new(GooglePlacesClient::new(
            credentials.places_api_key,
            config.places.clone(),
        ));
        let verifier = Arc::new(TwilioVerifyClient::new(
            credentials.twilio,
            config.otp.verify_base_url.clone(),
        ));
        Self::new(config, places, verifier)
    }
}

impl IntoResponse for QuoteError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = match &self {
            QuoteError::Validation(fields) => serde_json::json!({
                "error": self.public_message(),
                "fields": fields,
            }),
            _ => serde_json::json!({ "error": self.public_message() }),
        };
        (status, Json(body)).into_response()
    }
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "boiler-quote",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Settings the form UI needs; no credentials or provider endpoints
async fn public_config(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    let config = &state.config;
    Json(serde_json::json!({
        "features": config.features,
        "company": config.company,
        "otp": {
            "resend_cooldown_secs": config.otp.resend_cooldown_secs,
            "code_length": config.otp.code_length,
            "auto_submit": config.otp.auto_submit,
            "verification_timeout_secs": config.otp.verification_timeout_secs,
        },
        "phone": config.phone,
    }))
}

async fn questions() -> impl IntoResponse {
    Json(quote::catalog())
}

#[derive(Debug, Deserialize)]
struct PlacesQuery {
    postcode: Option<String>,
}

async fn search_places(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<PlacesQuery>,
) -> Response {
    if !state.config.features.address_search_enabled {
        return QuoteError::FeatureDisabled("Address search").into_response();
    }
    let postcode = params.postcode.unwrap_or_default();

    // The use case has no timeout of its own
    let timeout = Duration::from_secs(state.config.places.timeout_seconds);
    let result = match tokio::time::timeout(timeout, state.address_search.normalize(&postcode)).await
    {
        Ok(result) => result,
        Err(_) => {
            warn!(%postcode, timeout_secs = timeout.as_secs(), "Places search timed out");
            Err(QuoteError::Upstream(MSG_SEARCH_FAILED.to_string()))
        }
    };

    match result {
        Ok(addresses) => Json(serde_json::json!({ "addresses": addresses })).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn send_otp(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<SendOtpRequest>,
) -> Response {
    if !state.config.features.otp_verification_enabled {
        return QuoteError::FeatureDisabled("OTP verification").into_response();
    }
    let phone_number = request.phone_number.unwrap_or_default();
    match state.otp.send(&phone_number).await {
        Ok(sent) => Json(sent).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn verify_otp(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<VerifyOtpRequest>,
) -> Response {
    if !state.config.features.otp_verification_enabled {
        return QuoteError::FeatureDisabled("OTP verification").into_response();
    }
    let phone_number = request.phone_number.unwrap_or_default();
    let code = request.code.unwrap_or_default();
    match state.otp.verify(&phone_number, &code).await {
        Ok(checked) => Json(checked).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn submit_quote(
    Extension(state): Extension<Arc<AppState>>,
    Json(submission): Json<QuoteSubmission>,
) -> Response {
    let config = &state.config;
    match quote::assemble(submission, &config.features, &config.phone.default_country_code) {
        Ok(request) => {
            info!(
                reference = %request.reference,
                postcode = %request.address.postcode,
                phone_verified = request.phone_verified,
                "Quote request received"
            );
            (StatusCode::CREATED, Json(request)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Create the HTTP router with all routes
pub fn create_server(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/config", get(public_config))
        .route("/api/questions", get(questions))
        .route("/api/places", get(search_places))
        .route("/api/otp/send", post(send_otp))
        .route("/api/otp/verify", post(verify_otp))
        .route("/api/quotes", post(submit_quote))
        .layer(Extension(state))
        .layer(ServiceBuilder::new().layer(cors))
}

/// Start the HTTP server on the specified port
pub async fn start_server(state: Arc<AppState>, port: u16) -> anyhow::Result<()> {
    let app = create_server(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("HTTP server running on http://localhost:{port}");
    info!("Health check: http://localhost:{port}/health");
    info!("Address search: http://localhost:{port}/api/places?postcode=SW1A1AA");

    Server::bind(&addr).serve(app.into_make_service()).await?;

    Ok(())
}
