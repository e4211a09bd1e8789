//! HTTP surface over the catalog, calculators, campaign registry and lead
//! capture.

pub mod router;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use router::landing_router;
pub use service::{LandingService, LeadServiceError};
pub use views::{
    CampaignPageView, FinancingQuery, FinancingView, ModelView, QuoteRequest, QuoteView,
    SavingsRequest, SavingsView,
};
