use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use ev_landing::analytics::TracingAnalyticsSink;
use ev_landing::api::{landing_router, LandingService};
use ev_landing::campaigns::CampaignRegistry;
use ev_landing::catalog::Catalog;
use ev_landing::leads::{LeadGateway, LeadGatewayError, LeadRecord};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Default)]
struct CapturingGateway {
    leads: Mutex<Vec<LeadRecord>>,
}

#[async_trait]
impl LeadGateway for CapturingGateway {
    async fn forward(&self, lead: &LeadRecord) -> Result<(), LeadGatewayError> {
        self.leads.lock().expect("gateway mutex").push(lead.clone());
        Ok(())
    }
}

fn build_router() -> (axum::Router, Arc<CapturingGateway>) {
    let gateway = Arc::new(CapturingGateway::default());
    let service = LandingService::new(
        Arc::new(Catalog::standard().expect("catalog")),
        Arc::new(CampaignRegistry::standard()),
        gateway.clone(),
        Arc::new(TracingAnalyticsSink),
        "6281100000000",
    );
    (landing_router(Arc::new(service)), gateway)
}

async fn send(router: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router dispatch");
    let status = response.status();
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let payload = serde_json::from_slice(&body).expect("json");
    (status, payload)
}

fn post(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request")
}

#[tokio::test]
async fn visitor_journey_from_campaign_to_lead() {
    let (router, gateway) = build_router();

    let page = Request::builder()
        .uri("/api/v1/campaigns/100102/b")
        .body(Body::empty())
        .expect("request");
    let (status, page) = send(&router, page).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["featured"]["extended_id"], "edpower-ext");

    let (status, quote) = send(
        &router,
        post(
            "/api/v1/financing/quote",
            json!({
                "model_id": "edpower",
                "variant": "extended",
                "down_payment": 6_000_000,
                "tenor_months": 24,
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(quote["model_id"], "edpower-ext");
    assert_eq!(quote["monthly_installment"], 1_813_000);
    assert_eq!(quote["total_payment"], 6_000_000 + 1_813_000 * 24);

    let (status, reply) = send(
        &router,
        post(
            "/api/v1/leads",
            json!({
                "name": "Rina",
                "phone": "+6285712345678",
                "location": "Depok",
                "program": "Cicilan Ringan",
                "model": "edpower-ext",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply, json!({ "success": true }));

    let leads = gateway.leads.lock().expect("gateway mutex");
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].phone, "085712345678");
}

#[tokio::test]
async fn extended_request_for_single_variant_model_degrades() {
    let (router, _) = build_router();
    let (status, quote) = send(
        &router,
        post(
            "/api/v1/financing/quote",
            json!({
                "model_id": "cargo",
                "variant": "extended",
                "down_payment": 4_000_000,
                "tenor_months": 12,
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(quote["model_id"], "cargo");
    assert_eq!(quote["fallback"], "extended_unavailable");
}
