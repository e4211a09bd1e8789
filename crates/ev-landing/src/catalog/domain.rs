use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Whole rupiah. Every shipped price and installment is an integer amount.
pub type Rupiah = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Regular,
    Extended,
}

impl Variant {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Extended => "Extended",
        }
    }
}

/// Static definition of a catalog entry, before derived values are computed.
#[derive(Debug, Clone)]
pub struct ModelSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub battery_ah: f64,
    pub voltage_v: f64,
    pub range_km: f64,
    pub price: Rupiah,
    pub extended_id: Option<&'static str>,
    pub base_id: Option<&'static str>,
}

/// A purchasable product variant with its derived energy efficiency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleModel {
    pub id: &'static str,
    pub name: &'static str,
    pub battery_ah: f64,
    pub voltage_v: f64,
    pub range_km: f64,
    pub price: Rupiah,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_id: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_id: Option<&'static str>,
    pub efficiency_km_per_kwh: f64,
}

impl VehicleModel {
    pub(crate) fn from_spec(spec: &ModelSpec) -> Self {
        Self {
            id: spec.id,
            name: spec.name,
            battery_ah: spec.battery_ah,
            voltage_v: spec.voltage_v,
            range_km: spec.range_km,
            price: spec.price,
            extended_id: spec.extended_id,
            base_id: spec.base_id,
            efficiency_km_per_kwh: efficiency_km_per_kwh(
                spec.range_km,
                spec.battery_ah,
                spec.voltage_v,
            ),
        }
    }

    pub fn battery_kwh(&self) -> f64 {
        self.battery_ah * self.voltage_v / 1000.0
    }

    pub fn has_extended(&self) -> bool {
        self.extended_id.is_some()
    }

    /// Entries that are the larger-battery twin of another model.
    pub fn is_extended_entry(&self) -> bool {
        self.base_id.is_some()
    }
}

/// `range / (Ah * V / 1000)`: kilometres travelled per kWh of battery energy.
pub fn efficiency_km_per_kwh(range_km: f64, battery_ah: f64, voltage_v: f64) -> f64 {
    range_km / ((battery_ah * voltage_v) / 1000.0)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuelOption {
    pub id: &'static str,
    pub name: &'static str,
    pub price_per_liter: Rupiah,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElectricityTariff {
    pub label: &'static str,
    pub price_per_kwh: Rupiah,
}

/// Credit terms for one catalog entry.
///
/// Installments are lender table values keyed by tenor then down payment. They
/// are never derived from `otr - discount`, which is a display baseline only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancingOption {
    pub model_id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
    pub discount: Rupiah,
    pub otr: Rupiah,
    pub dp_options: Vec<Rupiah>,
    pub installments: BTreeMap<u32, BTreeMap<Rupiah, Rupiah>>,
}

impl FinancingOption {
    /// Builds an option from rows aligned positionally with `dp_options`.
    pub(crate) fn from_rows(
        model_id: &'static str,
        variant: Option<Variant>,
        otr: Rupiah,
        discount: Rupiah,
        dp_options: &[Rupiah],
        rows: &[(u32, &[Rupiah])],
    ) -> Self {
        let installments = rows
            .iter()
            .map(|(tenor, amounts)| {
                let by_dp = dp_options
                    .iter()
                    .copied()
                    .zip(amounts.iter().copied())
                    .collect::<BTreeMap<_, _>>();
                (*tenor, by_dp)
            })
            .collect();

        Self {
            model_id,
            variant,
            discount,
            otr,
            dp_options: dp_options.to_vec(),
            installments,
        }
    }

    pub fn tenors(&self) -> Vec<u32> {
        self.installments.keys().copied().collect()
    }

    pub fn offers_down_payment(&self, down_payment: Rupiah) -> bool {
        self.dp_options.contains(&down_payment)
    }

    pub fn offers_tenor(&self, tenor_months: u32) -> bool {
        self.installments.contains_key(&tenor_months)
    }

    pub fn installment(&self, down_payment: Rupiah, tenor_months: u32) -> Option<Rupiah> {
        self.installments
            .get(&tenor_months)
            .and_then(|by_dp| by_dp.get(&down_payment))
            .copied()
    }

    pub fn principal_baseline(&self) -> Rupiah {
        self.otr - self.discount
    }
}
