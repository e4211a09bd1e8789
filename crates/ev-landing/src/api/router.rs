use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::service::{LandingService, LeadServiceError};
use super::views::{FinancingQuery, QuoteRequest, QuoteView, SavingsRequest, SavingsView};
use crate::analytics::AnalyticsSink;
use crate::catalog::Variant;
use crate::error::AppError;
use crate::leads::{LeadGateway, LeadSubmission};

/// Router builder exposing the landing-page endpoints.
pub fn landing_router<L, A>(service: Arc<LandingService<L, A>>) -> Router
where
    L: LeadGateway + 'static,
    A: AnalyticsSink + 'static,
{
    Router::new()
        .route("/api/v1/models", get(models_handler::<L, A>))
        .route("/api/v1/financing/quote", post(quote_handler::<L, A>))
        .route("/api/v1/financing/:model_id", get(financing_handler::<L, A>))
        .route("/api/v1/savings", post(savings_handler::<L, A>))
        .route("/api/v1/campaigns", get(campaign_paths_handler::<L, A>))
        .route(
            "/api/v1/campaigns/:campaign_id/:variant_id",
            get(campaign_handler::<L, A>),
        )
        .route("/api/v1/leads", post(lead_handler::<L, A>))
        .with_state(service)
}

pub(crate) async fn models_handler<L, A>(
    State(service): State<Arc<LandingService<L, A>>>,
) -> Response
where
    L: LeadGateway + 'static,
    A: AnalyticsSink + 'static,
{
    let payload = json!({ "models": service.models() });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn financing_handler<L, A>(
    State(service): State<Arc<LandingService<L, A>>>,
    Path(model_id): Path<String>,
    Query(query): Query<FinancingQuery>,
) -> Response
where
    L: LeadGateway + 'static,
    A: AnalyticsSink + 'static,
{
    let variant = query.variant.unwrap_or(Variant::Regular);
    let view = service.financing(&model_id, variant);
    (StatusCode::OK, Json(view)).into_response()
}

/// Bodies that fail to deserialize get the same `{error}` shape as every
/// other rejection.
fn rejected_body(rejection: JsonRejection) -> Response {
    let payload = json!({
        "error": rejection.body_text(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}

pub(crate) async fn quote_handler<L, A>(
    State(service): State<Arc<LandingService<L, A>>>,
    body: Result<Json<QuoteRequest>, JsonRejection>,
) -> Response
where
    L: LeadGateway + 'static,
    A: AnalyticsSink + 'static,
{
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return rejected_body(rejection),
    };

    match service.quote(&request) {
        Ok(view) => Json::<QuoteView>(view).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub(crate) async fn savings_handler<L, A>(
    State(service): State<Arc<LandingService<L, A>>>,
    body: Result<Json<SavingsRequest>, JsonRejection>,
) -> Response
where
    L: LeadGateway + 'static,
    A: AnalyticsSink + 'static,
{
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return rejected_body(rejection),
    };

    match service.savings(&request) {
        Ok(view) => Json::<SavingsView>(view).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub(crate) async fn campaign_paths_handler<L, A>(
    State(service): State<Arc<LandingService<L, A>>>,
) -> Response
where
    L: LeadGateway + 'static,
    A: AnalyticsSink + 'static,
{
    let payload = json!({ "paths": service.campaign_paths() });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn campaign_handler<L, A>(
    State(service): State<Arc<LandingService<L, A>>>,
    Path((campaign_id, variant_id)): Path<(String, String)>,
) -> Response
where
    L: LeadGateway + 'static,
    A: AnalyticsSink + 'static,
{
    match service.campaign_page(&campaign_id, &variant_id) {
        Some(view) => (StatusCode::OK, Json(view)).into_response(),
        None => {
            let payload = json!({
                "error": format!("campaign {campaign_id}/{variant_id} not found"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn lead_handler<L, A>(
    State(service): State<Arc<LandingService<L, A>>>,
    body: Result<Json<LeadSubmission>, JsonRejection>,
) -> Response
where
    L: LeadGateway + 'static,
    A: AnalyticsSink + 'static,
{
    let Json(submission) = match body {
        Ok(body) => body,
        Err(rejection) => return rejected_body(rejection),
    };

    match service.submit_lead(submission).await {
        Ok(_) => (StatusCode::OK, Json(json!({ "success": true }))).into_response(),
        Err(LeadServiceError::Invalid(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(LeadServiceError::Gateway(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_GATEWAY, Json(payload)).into_response()
        }
    }
}
