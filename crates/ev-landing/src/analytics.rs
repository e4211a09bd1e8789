//! Marketing-pixel style events emitted by the landing flows.

use crate::campaigns::CampaignConfig;
use crate::financing::Quote;
use crate::leads::LeadRecord;
use crate::savings::SavingsComparison;
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::info;

pub const VIEW_CONTENT: &str = "ViewContent";
pub const FINANCING_QUOTE: &str = "financing_quote";
pub const SAVINGS_CALCULATED: &str = "savings_calculated";
pub const LEAD: &str = "Lead";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub name: &'static str,
    pub params: Map<String, Value>,
}

impl AnalyticsEvent {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            params: Map::new(),
        }
    }

    pub fn with_param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn view_content(config: &CampaignConfig) -> Self {
        Self::new(VIEW_CONTENT)
            .with_param("content_name", config.name)
            .with_param("campaign_id", config.campaign_id)
            .with_param("variant_id", config.variant_id)
            .with_param("content_ids", json!([config.featured_model]))
    }

    pub fn financing_quote(quote: &Quote) -> Self {
        Self::new(FINANCING_QUOTE)
            .with_param("model_id", quote.model_id)
            .with_param("down_payment", quote.down_payment)
            .with_param("tenor_months", quote.tenor_months)
            .with_param("monthly_installment", quote.monthly_installment)
            .with_param("value", quote.otr)
            .with_param("currency", "IDR")
    }

    pub fn savings_calculated(comparison: &SavingsComparison) -> Self {
        Self::new(SAVINGS_CALCULATED)
            .with_param("model_id", comparison.model_id)
            .with_param("fuel_id", comparison.fuel_id)
            .with_param("distance_km", comparison.distance_km)
            .with_param("monthly_savings", comparison.monthly_savings.round())
    }

    /// Carries no contact details, only what the ad platform may see.
    pub fn lead(record: &LeadRecord) -> Self {
        Self::new(LEAD)
            .with_param("content_name", record.program.as_str())
            .with_param("content_ids", json!([record.model]))
            .with_param("location", record.location.as_str())
    }
}

/// Fire-and-forget destination for analytics events.
pub trait AnalyticsSink: Send + Sync {
    fn dispatch(&self, event: AnalyticsEvent);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAnalyticsSink;

impl AnalyticsSink for TracingAnalyticsSink {
    fn dispatch(&self, event: AnalyticsEvent) {
        let params = Value::Object(event.params);
        info!(target: "analytics", event = event.name, params = %params, "analytics event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaigns::CampaignRegistry;
    use chrono::Utc;

    #[test]
    fn view_content_describes_campaign() {
        let registry = CampaignRegistry::standard();
        let config = registry.get("100104", "fleet").expect("registered");
        let event = AnalyticsEvent::view_content(config);
        assert_eq!(event.name, "ViewContent");
        assert_eq!(event.params["campaign_id"], "100104");
        assert_eq!(event.params["content_ids"], json!(["cargo"]));
    }

    #[test]
    fn lead_event_omits_contact_details() {
        let record = LeadRecord {
            name: "Budi".to_string(),
            phone: "081234567890".to_string(),
            location: "Surabaya".to_string(),
            program: "Mitra Ojol".to_string(),
            model: "edpower".to_string(),
            submitted_at: Utc::now(),
        };
        let event = AnalyticsEvent::lead(&record);
        assert_eq!(event.name, "Lead");
        assert!(!event.params.contains_key("phone"));
        assert!(!event.params.contains_key("name"));
        assert_eq!(event.params["content_name"], "Mitra Ojol");
    }

    #[test]
    fn tracing_sink_accepts_events() {
        TracingAnalyticsSink.dispatch(AnalyticsEvent::new("PageView").with_param("path", "/"));
    }
}
