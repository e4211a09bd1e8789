use serde::{Deserialize, Serialize};

use crate::campaigns::CampaignConfig;
use crate::catalog::{Catalog, FallbackReason, FinancingOption, Rupiah, Variant, VehicleModel};
use crate::financing::Quote;
use crate::savings::SavingsComparison;

/// Catalog entry as listed on the product pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelView {
    pub id: &'static str,
    pub name: &'static str,
    pub battery_ah: f64,
    pub voltage_v: f64,
    pub battery_kwh: f64,
    pub range_km: f64,
    pub price: Rupiah,
    pub efficiency_km_per_kwh: f64,
    pub regular_id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_id: Option<&'static str>,
}

impl ModelView {
    pub fn from_model(catalog: &Catalog, model: &VehicleModel) -> Self {
        let base = catalog.base_of(model);
        Self {
            id: model.id,
            name: model.name,
            battery_ah: model.battery_ah,
            voltage_v: model.voltage_v,
            battery_kwh: model.battery_kwh(),
            range_km: model.range_km,
            price: model.price,
            efficiency_km_per_kwh: round_to(model.efficiency_km_per_kwh, 2),
            regular_id: base.id,
            extended_id: base.extended_id,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct FinancingQuery {
    #[serde(default)]
    pub variant: Option<Variant>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FinancingView {
    pub requested_model: String,
    pub requested_variant: Variant,
    pub option: FinancingOption,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_message: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub model_id: String,
    #[serde(default)]
    pub variant: Option<Variant>,
    pub down_payment: Rupiah,
    pub tenor_months: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuoteView {
    #[serde(flatten)]
    pub quote: Quote,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackReason>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsRequest {
    pub distance_km: f64,
    pub model_id: String,
    pub fuel_id: String,
}

/// Comparison plus the figures the calculator widget shows rounded.
#[derive(Debug, Clone, Serialize)]
pub struct SavingsView {
    #[serde(flatten)]
    pub comparison: SavingsComparison,
    pub display: SavingsDisplay,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsDisplay {
    pub monthly_fuel_cost: Rupiah,
    pub monthly_electricity_cost: Rupiah,
    pub monthly_savings: Rupiah,
    pub yearly_savings: Rupiah,
    pub monthly_electricity_kwh: f64,
}

impl From<SavingsComparison> for SavingsView {
    fn from(comparison: SavingsComparison) -> Self {
        let display = SavingsDisplay {
            monthly_fuel_cost: comparison.monthly_fuel_cost.round() as Rupiah,
            monthly_electricity_cost: comparison.monthly_electricity_cost.round() as Rupiah,
            monthly_savings: comparison.monthly_savings.round() as Rupiah,
            yearly_savings: comparison.yearly_savings.round() as Rupiah,
            monthly_electricity_kwh: round_to(comparison.monthly_electricity_kwh, 2),
        };
        Self {
            comparison,
            display,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CampaignPageView {
    #[serde(flatten)]
    pub config: CampaignConfig,
    pub featured: ModelView,
    pub whatsapp_link: String,
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
