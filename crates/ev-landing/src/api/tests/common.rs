use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::analytics::{AnalyticsEvent, AnalyticsSink};
use crate::api::LandingService;
use crate::campaigns::CampaignRegistry;
use crate::catalog::Catalog;
use crate::leads::{LeadGateway, LeadGatewayError, LeadRecord, LeadSubmission};

pub(super) const WHATSAPP_NUMBER: &str = "081122334455";

pub(super) fn submission() -> LeadSubmission {
    LeadSubmission {
        name: "Andi Wijaya".to_string(),
        phone: "0812 9988 7766".to_string(),
        location: "Jakarta Selatan".to_string(),
        program: "Cicilan Ringan".to_string(),
        model: "edpower".to_string(),
    }
}

pub(super) fn build_service() -> (
    LandingService<MemoryLeads, MemoryAnalytics>,
    Arc<MemoryLeads>,
    Arc<MemoryAnalytics>,
) {
    let leads = Arc::new(MemoryLeads::default());
    let analytics = Arc::new(MemoryAnalytics::default());
    let service = service_with(leads.clone(), analytics.clone());
    (service, leads, analytics)
}

pub(super) fn service_with<L, A>(leads: Arc<L>, analytics: Arc<A>) -> LandingService<L, A>
where
    L: LeadGateway + 'static,
    A: AnalyticsSink + 'static,
{
    let catalog = Arc::new(Catalog::standard().expect("standard catalog is valid"));
    let campaigns = Arc::new(CampaignRegistry::standard());
    LandingService::new(catalog, campaigns, leads, analytics, WHATSAPP_NUMBER)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    serde_json::from_slice(&body).expect("json")
}

pub(super) async fn assert_error_response(response: Response, status: StatusCode) -> Value {
    assert_eq!(response.status(), status);
    let payload = read_json_body(response).await;
    assert!(
        payload.get("error").and_then(Value::as_str).is_some(),
        "expected error body, got {payload}"
    );
    payload
}

#[derive(Default)]
pub(super) struct MemoryLeads {
    records: Mutex<Vec<LeadRecord>>,
}

impl MemoryLeads {
    pub(super) fn records(&self) -> Vec<LeadRecord> {
        self.records.lock().expect("lead mutex poisoned").clone()
    }
}

#[async_trait]
impl LeadGateway for MemoryLeads {
    async fn forward(&self, lead: &LeadRecord) -> Result<(), LeadGatewayError> {
        self.records
            .lock()
            .expect("lead mutex poisoned")
            .push(lead.clone());
        Ok(())
    }
}

pub(super) struct RejectingLeads;

#[async_trait]
impl LeadGateway for RejectingLeads {
    async fn forward(&self, _lead: &LeadRecord) -> Result<(), LeadGatewayError> {
        Err(LeadGatewayError::Rejected("sheet quota exceeded".to_string()))
    }
}

#[derive(Default)]
pub(super) struct MemoryAnalytics {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl MemoryAnalytics {
    pub(super) fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().expect("analytics mutex poisoned").clone()
    }

    pub(super) fn names(&self) -> Vec<&'static str> {
        self.events().into_iter().map(|event| event.name).collect()
    }
}

impl AnalyticsSink for MemoryAnalytics {
    fn dispatch(&self, event: AnalyticsEvent) {
        self.events
            .lock()
            .expect("analytics mutex poisoned")
            .push(event);
    }
}
