use super::common::*;
use std::sync::Arc;

use crate::api::{LeadServiceError, QuoteRequest, SavingsRequest};
use crate::catalog::{FallbackReason, Variant};
use crate::financing::SelectionError;
use crate::leads::{LeadError, LeadGatewayError};
use crate::savings::SavingsError;

#[test]
fn models_list_regular_and_extended_ids() {
    let (service, _, _) = build_service();
    let models = service.models();
    assert_eq!(models.len(), service.catalog().models().len());

    let extended = models
        .iter()
        .find(|model| model.id == "edpower-ext")
        .expect("extended entry listed");
    assert_eq!(extended.regular_id, "edpower");
    assert_eq!(extended.extended_id, Some("edpower-ext"));

    let edpower = models
        .iter()
        .find(|model| model.id == "edpower")
        .expect("edpower listed");
    assert!((edpower.efficiency_km_per_kwh - 40.18).abs() < 0.01);
}

#[test]
fn financing_reports_fallbacks() {
    let (service, _, _) = build_service();

    let exact = service.financing("edpower", Variant::Extended);
    assert_eq!(exact.option.model_id, "edpower-ext");
    assert!(exact.fallback.is_none());

    let degraded = service.financing("cargo", Variant::Extended);
    assert_eq!(degraded.option.model_id, "cargo");
    assert_eq!(degraded.fallback, Some(FallbackReason::ExtendedUnavailable));
    assert!(degraded.fallback_message.is_some());

    let unknown = service.financing("hoverbike", Variant::Regular);
    assert_eq!(unknown.option.model_id, "edpower");
    assert_eq!(unknown.fallback, Some(FallbackReason::UnknownModel));
}

#[test]
fn quote_dispatches_analytics() {
    let (service, _, analytics) = build_service();
    let request = QuoteRequest {
        model_id: "mini".to_string(),
        variant: None,
        down_payment: 3_200_000,
        tenor_months: 12,
    };

    let view = service.quote(&request).expect("valid selection");
    assert_eq!(view.quote.monthly_installment, 1_836_000);
    assert_eq!(view.quote.total_payment, 25_232_000);
    assert_eq!(analytics.names(), vec!["financing_quote"]);
}

#[test]
fn quote_rejects_unknown_models_and_offers() {
    let (service, _, analytics) = build_service();

    let unknown = QuoteRequest {
        model_id: "hoverbike".to_string(),
        variant: None,
        down_payment: 3_500_000,
        tenor_months: 12,
    };
    assert_eq!(
        service.quote(&unknown).map(|view| view.quote),
        Err(SelectionError::StaleSelection("hoverbike".to_string()))
    );

    let wrong_dp = QuoteRequest {
        model_id: "edpower".to_string(),
        variant: Some(Variant::Regular),
        down_payment: 1,
        tenor_months: 12,
    };
    assert!(matches!(
        service.quote(&wrong_dp),
        Err(SelectionError::DownPaymentNotOffered { .. })
    ));
    assert!(analytics.events().is_empty());
}

#[test]
fn savings_view_rounds_display_figures() {
    let (service, _, analytics) = build_service();
    let request = SavingsRequest {
        distance_km: 1_000.0,
        model_id: "edpower".to_string(),
        fuel_id: "pertalite".to_string(),
    };

    let view = service.savings(&request).expect("valid input");
    assert_eq!(view.display.monthly_fuel_cost, 250_000);
    assert!((view.display.monthly_savings - 214_034).abs() <= 2);
    assert_eq!(view.comparison.savings_percentage, Some(86));
    assert_eq!(analytics.names(), vec!["savings_calculated"]);

    let unknown_fuel = SavingsRequest {
        fuel_id: "solar".to_string(),
        ..request
    };
    assert_eq!(
        service.savings(&unknown_fuel).map(|view| view.comparison),
        Err(SavingsError::UnknownFuel("solar".to_string()))
    );
}

#[test]
fn campaign_page_builds_whatsapp_link() {
    let (service, _, analytics) = build_service();
    let page = service.campaign_page("100102", "a").expect("registered");
    assert_eq!(page.featured.id, "mini");
    assert!(page.whatsapp_link.starts_with("https://wa.me/6281122334455?text="));
    assert_eq!(analytics.names(), vec!["ViewContent"]);

    assert!(service.campaign_page("999999", "nonexistent").is_none());
    assert_eq!(analytics.events().len(), 1);
}

#[tokio::test]
async fn submit_lead_forwards_valid_submissions() {
    let (service, leads, analytics) = build_service();
    let record = service.submit_lead(submission()).await.expect("forwarded");

    assert_eq!(record.phone, "081299887766");
    assert_eq!(leads.records(), vec![record]);
    assert_eq!(analytics.names(), vec!["Lead"]);
}

#[tokio::test]
async fn submit_lead_does_not_forward_invalid_submissions() {
    let (service, leads, analytics) = build_service();
    let mut lead = submission();
    lead.name = String::new();

    let result = service.submit_lead(lead).await;
    assert!(matches!(
        result,
        Err(LeadServiceError::Invalid(LeadError::MissingField("name")))
    ));
    assert!(leads.records().is_empty());
    assert!(analytics.events().is_empty());
}

#[tokio::test]
async fn submit_lead_surfaces_gateway_failures() {
    let analytics = Arc::new(MemoryAnalytics::default());
    let service = service_with(Arc::new(RejectingLeads), analytics.clone());

    let result = service.submit_lead(submission()).await;
    assert!(matches!(
        result,
        Err(LeadServiceError::Gateway(LeadGatewayError::Rejected(_)))
    ));
    assert!(analytics.events().is_empty());
}
