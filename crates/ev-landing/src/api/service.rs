use std::sync::Arc;

use tracing::{info, warn};

use super::views::{
    CampaignPageView, FinancingView, ModelView, QuoteRequest, QuoteView, SavingsRequest,
    SavingsView,
};
use crate::analytics::{AnalyticsEvent, AnalyticsSink};
use crate::campaigns::{CampaignPath, CampaignRegistry};
use crate::catalog::{Catalog, FallbackReason, Variant};
use crate::contact::whatsapp_link;
use crate::financing::{self, SelectionError};
use crate::leads::{LeadError, LeadGateway, LeadGatewayError, LeadRecord, LeadSubmission};
use crate::savings::{SavingsCalculator, SavingsError};

/// Service composing the read-only registries with the lead gateway and the
/// analytics sink.
pub struct LandingService<L, A> {
    catalog: Arc<Catalog>,
    campaigns: Arc<CampaignRegistry>,
    leads: Arc<L>,
    analytics: Arc<A>,
    whatsapp_number: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LeadServiceError {
    #[error(transparent)]
    Invalid(#[from] LeadError),
    #[error(transparent)]
    Gateway(#[from] LeadGatewayError),
}

impl<L, A> LandingService<L, A>
where
    L: LeadGateway + 'static,
    A: AnalyticsSink + 'static,
{
    pub fn new(
        catalog: Arc<Catalog>,
        campaigns: Arc<CampaignRegistry>,
        leads: Arc<L>,
        analytics: Arc<A>,
        whatsapp_number: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            campaigns,
            leads,
            analytics,
            whatsapp_number: whatsapp_number.into(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn campaigns(&self) -> &CampaignRegistry {
        &self.campaigns
    }

    pub fn models(&self) -> Vec<ModelView> {
        self.catalog
            .models()
            .iter()
            .map(|model| ModelView::from_model(&self.catalog, model))
            .collect()
    }

    /// Credit terms for a model, degrading instead of failing.
    pub fn financing(&self, model_id: &str, variant: Variant) -> FinancingView {
        let resolved = financing::resolve_variant(&self.catalog, model_id, variant);
        let fallback = resolved.reason();
        FinancingView {
            requested_model: model_id.to_string(),
            requested_variant: variant,
            option: resolved.into_value().clone(),
            fallback,
            fallback_message: fallback.map(FallbackReason::label),
        }
    }

    /// Quotes an exact selection. Unknown models are rejected rather than
    /// quoted against the default model's table.
    pub fn quote(&self, request: &QuoteRequest) -> Result<QuoteView, SelectionError> {
        let variant = request.variant.unwrap_or(Variant::Regular);
        let resolved = financing::resolve_quotable(&self.catalog, &request.model_id, variant)?;

        let quote = financing::quote(
            resolved.value(),
            request.down_payment,
            request.tenor_months,
        )?;
        self.analytics
            .dispatch(AnalyticsEvent::financing_quote(&quote));

        Ok(QuoteView {
            quote,
            fallback: resolved.reason(),
        })
    }

    pub fn savings(&self, request: &SavingsRequest) -> Result<SavingsView, SavingsError> {
        let comparison = SavingsCalculator::new(&self.catalog).compare(
            request.distance_km,
            &request.model_id,
            &request.fuel_id,
        )?;
        self.analytics
            .dispatch(AnalyticsEvent::savings_calculated(&comparison));
        Ok(SavingsView::from(comparison))
    }

    pub fn campaign_paths(&self) -> Vec<CampaignPath> {
        self.campaigns.list_all_paths()
    }

    pub fn campaign_page(&self, campaign_id: &str, variant_id: &str) -> Option<CampaignPageView> {
        let config = self.campaigns.get(campaign_id, variant_id)?;
        let featured = self.catalog.model_or_default(config.featured_model).into_value();
        let link = whatsapp_link(
            &self.whatsapp_number,
            config.whatsapp_template,
            Some(featured.name),
        );

        self.analytics.dispatch(AnalyticsEvent::view_content(config));

        Some(CampaignPageView {
            config: config.clone(),
            featured: ModelView::from_model(&self.catalog, featured),
            whatsapp_link: link,
        })
    }

    /// Validates and forwards a lead. Nothing is retried; the visitor sees the
    /// failure and can resubmit.
    pub async fn submit_lead(
        &self,
        submission: LeadSubmission,
    ) -> Result<LeadRecord, LeadServiceError> {
        let record = submission.validate(&self.catalog)?;

        match self.leads.forward(&record).await {
            Ok(()) => {
                info!(
                    model = %record.model,
                    program = %record.program,
                    "lead forwarded"
                );
                self.analytics.dispatch(AnalyticsEvent::lead(&record));
                Ok(record)
            }
            Err(err) => {
                warn!(model = %record.model, error = %err, "lead forwarding failed");
                Err(err.into())
            }
        }
    }
}
