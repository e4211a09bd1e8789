//! Fuel-vs-electric running cost comparison.
//!
//! Petrol motorcycles are treated as one homogeneous baseline at
//! [`PETROL_KM_PER_LITER`]; the electric side uses the model's derived
//! efficiency. Output is a pure function of the inputs.

use crate::catalog::{Catalog, Rupiah};
use serde::Serialize;
use tracing::debug;

pub const PETROL_KM_PER_LITER: f64 = 40.0;
pub const MAX_MONTHLY_DISTANCE_KM: f64 = 2_000.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SavingsError {
    #[error("monthly distance must be a finite number of kilometres >= 0, got {0}")]
    InvalidDistance(f64),
    #[error("unknown model '{0}'")]
    UnknownModel(String),
    #[error("unknown fuel '{0}'")]
    UnknownFuel(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsComparison {
    pub model_id: &'static str,
    pub fuel_id: &'static str,
    pub distance_km: f64,
    pub fuel_price_per_liter: Rupiah,
    pub tariff_per_kwh: Rupiah,
    pub efficiency_km_per_kwh: f64,
    pub monthly_fuel_liters: f64,
    pub monthly_fuel_cost: f64,
    pub monthly_electricity_kwh: f64,
    pub monthly_electricity_cost: f64,
    pub monthly_savings: f64,
    pub yearly_savings: f64,
    /// Absent when there is no fuel cost to compare against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_percentage: Option<i64>,
    /// Months of savings needed to cover OTR less subsidy; absent when the
    /// electric model does not save anything.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roi_months: Option<u32>,
}

/// Runs comparisons against a shared catalog.
#[derive(Debug, Clone, Copy)]
pub struct SavingsCalculator<'a> {
    catalog: &'a Catalog,
}

impl<'a> SavingsCalculator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn compare(
        &self,
        distance_km: f64,
        model_id: &str,
        fuel_id: &str,
    ) -> Result<SavingsComparison, SavingsError> {
        let distance_km = clamp_distance(distance_km)?;
        let model = self
            .catalog
            .model(model_id)
            .ok_or_else(|| SavingsError::UnknownModel(model_id.to_string()))?;
        let fuel = self
            .catalog
            .fuel(fuel_id)
            .ok_or_else(|| SavingsError::UnknownFuel(fuel_id.to_string()))?;
        let tariff = self.catalog.tariff();

        let monthly_fuel_liters = distance_km / PETROL_KM_PER_LITER;
        let monthly_fuel_cost = monthly_fuel_liters * fuel.price_per_liter as f64;

        let efficiency = model.efficiency_km_per_kwh;
        let monthly_electricity_kwh = distance_km / efficiency;
        let monthly_electricity_cost = monthly_electricity_kwh * tariff.price_per_kwh as f64;

        let monthly_savings = monthly_fuel_cost - monthly_electricity_cost;
        let yearly_savings = monthly_savings * MONTHS_PER_YEAR;

        let net_price = self.catalog.otr_for(model) - self.catalog.subsidy();

        Ok(SavingsComparison {
            model_id: model.id,
            fuel_id: fuel.id,
            distance_km,
            fuel_price_per_liter: fuel.price_per_liter,
            tariff_per_kwh: tariff.price_per_kwh,
            efficiency_km_per_kwh: efficiency,
            monthly_fuel_liters,
            monthly_fuel_cost,
            monthly_electricity_kwh,
            monthly_electricity_cost,
            monthly_savings,
            yearly_savings,
            savings_percentage: savings_percentage(monthly_savings, monthly_fuel_cost),
            roi_months: roi_months(net_price, monthly_savings),
        })
    }

    /// One comparison per shipped fuel grade, in catalog order.
    pub fn compare_all_fuels(
        &self,
        distance_km: f64,
        model_id: &str,
    ) -> Result<Vec<SavingsComparison>, SavingsError> {
        self.catalog
            .fuels()
            .iter()
            .map(|fuel| self.compare(distance_km, model_id, fuel.id))
            .collect()
    }
}

fn clamp_distance(distance_km: f64) -> Result<f64, SavingsError> {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(SavingsError::InvalidDistance(distance_km));
    }
    if distance_km > MAX_MONTHLY_DISTANCE_KM {
        debug!(
            requested = distance_km,
            max = MAX_MONTHLY_DISTANCE_KM,
            "clamping monthly distance"
        );
        return Ok(MAX_MONTHLY_DISTANCE_KM);
    }
    Ok(distance_km)
}

/// `round(savings / fuel_cost * 100)`, undefined without a positive fuel cost.
pub fn savings_percentage(monthly_savings: f64, monthly_fuel_cost: f64) -> Option<i64> {
    if monthly_fuel_cost <= 0.0 {
        return None;
    }
    let pct = (monthly_savings / monthly_fuel_cost * 100.0).round();
    pct.is_finite().then_some(pct as i64)
}

/// `ceil(net_price / savings)`. Undefined without positive savings; zero when
/// the subsidy already covers the price.
pub fn roi_months(net_price: Rupiah, monthly_savings: f64) -> Option<u32> {
    if monthly_savings.is_nan() || monthly_savings <= 0.0 {
        return None;
    }
    if net_price <= 0 {
        return Some(0);
    }
    let months = (net_price as f64 / monthly_savings).ceil();
    (months.is_finite() && months <= u32::MAX as f64).then_some(months as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::standard().expect("catalog")
    }

    #[test]
    fn edpower_thousand_km_on_pertalite() {
        let catalog = catalog();
        let result = SavingsCalculator::new(&catalog)
            .compare(1_000.0, "edpower", "pertalite")
            .expect("comparison");

        assert!((result.efficiency_km_per_kwh - 40.18).abs() < 0.01);
        assert_eq!(result.monthly_fuel_liters, 25.0);
        assert_eq!(result.monthly_fuel_cost, 250_000.0);
        assert!((result.monthly_electricity_kwh - 24.89).abs() < 0.01);
        assert!((result.monthly_electricity_cost - 35_966.0).abs() < 5.0);
        assert!((result.monthly_savings - 214_034.0).abs() < 5.0);
        assert!((result.yearly_savings - result.monthly_savings * 12.0).abs() < 1e-6);
        assert_eq!(result.savings_percentage, Some(86));
        // (32.5M - 7M) / ~214,036
        assert_eq!(result.roi_months, Some(120));
    }

    #[test]
    fn zero_distance_suppresses_ratios() {
        let catalog = catalog();
        let result = SavingsCalculator::new(&catalog)
            .compare(0.0, "mini", "pertamax")
            .expect("comparison");
        assert_eq!(result.monthly_fuel_cost, 0.0);
        assert_eq!(result.monthly_electricity_cost, 0.0);
        assert_eq!(result.monthly_savings, 0.0);
        assert_eq!(result.savings_percentage, None);
        assert_eq!(result.roi_months, None);
    }

    #[test]
    fn rejects_negative_and_nan_distance() {
        let catalog = catalog();
        let calculator = SavingsCalculator::new(&catalog);
        assert!(matches!(
            calculator.compare(-1.0, "mini", "pertalite"),
            Err(SavingsError::InvalidDistance(_))
        ));
        assert!(matches!(
            calculator.compare(f64::NAN, "mini", "pertalite"),
            Err(SavingsError::InvalidDistance(_))
        ));
        assert!(matches!(
            calculator.compare(f64::INFINITY, "mini", "pertalite"),
            Err(SavingsError::InvalidDistance(_))
        ));
    }

    #[test]
    fn clamps_long_distances() {
        let catalog = catalog();
        let result = SavingsCalculator::new(&catalog)
            .compare(5_000.0, "cargo", "pertalite")
            .expect("comparison");
        assert_eq!(result.distance_km, MAX_MONTHLY_DISTANCE_KM);
        assert_eq!(result.monthly_fuel_liters, 50.0);
    }

    #[test]
    fn rejects_unknown_identifiers() {
        let catalog = catalog();
        let calculator = SavingsCalculator::new(&catalog);
        assert_eq!(
            calculator.compare(500.0, "bicycle", "pertalite"),
            Err(SavingsError::UnknownModel("bicycle".to_string()))
        );
        assert_eq!(
            calculator.compare(500.0, "mini", "solar"),
            Err(SavingsError::UnknownFuel("solar".to_string()))
        );
    }

    #[test]
    fn compares_every_fuel() {
        let catalog = catalog();
        let rows = SavingsCalculator::new(&catalog)
            .compare_all_fuels(800.0, "edpower-ext")
            .expect("comparisons");
        let fuels: Vec<_> = rows.iter().map(|row| row.fuel_id).collect();
        assert_eq!(fuels, vec!["pertalite", "pertamax"]);
        assert!(rows[1].monthly_savings > rows[0].monthly_savings);
    }

    #[test]
    fn roi_edge_cases() {
        assert_eq!(roi_months(10_000_000, 0.0), None);
        assert_eq!(roi_months(10_000_000, -5.0), None);
        assert_eq!(roi_months(10_000_000, f64::NAN), None);
        assert_eq!(roi_months(-1, 100.0), Some(0));
        assert_eq!(roi_months(1_000, 300.0), Some(4));
    }

    #[test]
    fn percentage_edge_cases() {
        assert_eq!(savings_percentage(0.0, 0.0), None);
        assert_eq!(savings_percentage(-10.0, -20.0), None);
        assert_eq!(savings_percentage(-50.0, 100.0), Some(-50));
    }
}
