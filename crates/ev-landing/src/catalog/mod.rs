//! Static product, fuel, tariff and credit tables.
//!
//! A [`Catalog`] is built once, validated, and then shared read-only. Lookups
//! that can miss return `Option`; lookups that must always produce something
//! for the page return [`Resolved`].

mod data;
pub mod domain;
mod resolved;

pub use domain::{
    efficiency_km_per_kwh, ElectricityTariff, FinancingOption, FuelOption, ModelSpec, Rupiah,
    Variant, VehicleModel,
};
pub use resolved::{FallbackReason, Resolved};

use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("model '{0}' is defined more than once")]
    DuplicateModel(String),
    #[error("default model '{0}' is not in the catalog")]
    MissingDefaultModel(String),
    #[error("model '{model}' points at extended variant '{extended}' which is not in the catalog")]
    DanglingExtended { model: String, extended: String },
    #[error("financing option references unknown model '{0}'")]
    DanglingFinancing(String),
    #[error("model '{0}' has no financing option")]
    MissingFinancing(String),
    #[error("model '{0}' has more than one financing option")]
    DuplicateFinancing(String),
    #[error("financing option for '{0}' must have a positive OTR")]
    NonPositiveOtr(String),
    #[error("fuel '{0}' must have a positive price")]
    NonPositiveFuelPrice(String),
    #[error("'{model}' tenor {tenor} lists down payment {down_payment} which is not offered")]
    OrphanedInstallment {
        model: String,
        tenor: u32,
        down_payment: Rupiah,
    },
    #[error("'{model}' tenor {tenor} has no installment for down payment {down_payment}")]
    MissingInstallment {
        model: String,
        tenor: u32,
        down_payment: Rupiah,
    },
    #[error(
        "'{model}' tenor {tenor}: installment for down payment {higher_dp} is not below the one for {lower_dp}"
    )]
    NonMonotonic {
        model: String,
        tenor: u32,
        lower_dp: Rupiah,
        higher_dp: Rupiah,
    },
}

/// Read-only reference data shared by the calculators.
#[derive(Debug, Clone)]
pub struct Catalog {
    models: Vec<VehicleModel>,
    model_index: HashMap<&'static str, usize>,
    financing: Vec<FinancingOption>,
    financing_index: HashMap<&'static str, usize>,
    fuels: Vec<FuelOption>,
    tariff: ElectricityTariff,
    subsidy: Rupiah,
    default_model: usize,
    default_financing: usize,
}

impl Catalog {
    /// The shipped product line.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(
            &data::standard_models(),
            data::standard_financing(),
            data::standard_fuels(),
            data::standard_tariff(),
            data::DEFAULT_MODEL_ID,
            data::PURCHASE_SUBSIDY,
        )
    }

    pub fn new(
        specs: &[ModelSpec],
        financing: Vec<FinancingOption>,
        fuels: Vec<FuelOption>,
        tariff: ElectricityTariff,
        default_model_id: &str,
        subsidy: Rupiah,
    ) -> Result<Self, CatalogError> {
        let models: Vec<VehicleModel> = specs.iter().map(VehicleModel::from_spec).collect();

        let mut model_index = HashMap::with_capacity(models.len());
        for (position, model) in models.iter().enumerate() {
            if model_index.insert(model.id, position).is_some() {
                return Err(CatalogError::DuplicateModel(model.id.to_string()));
            }
        }

        let mut financing_index = HashMap::with_capacity(financing.len());
        for (position, option) in financing.iter().enumerate() {
            if !model_index.contains_key(option.model_id) {
                return Err(CatalogError::DanglingFinancing(option.model_id.to_string()));
            }
            if financing_index.insert(option.model_id, position).is_some() {
                return Err(CatalogError::DuplicateFinancing(option.model_id.to_string()));
            }
        }

        let default_model = *model_index
            .get(default_model_id)
            .ok_or_else(|| CatalogError::MissingDefaultModel(default_model_id.to_string()))?;
        let default_financing = *financing_index
            .get(default_model_id)
            .ok_or_else(|| CatalogError::MissingFinancing(default_model_id.to_string()))?;

        let catalog = Self {
            models,
            model_index,
            financing,
            financing_index,
            fuels,
            tariff,
            subsidy,
            default_model,
            default_financing,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Re-checks every table invariant; `new` refuses catalogs that fail.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for model in &self.models {
            if let Some(extended) = model.extended_id {
                if !self.model_index.contains_key(extended) {
                    return Err(CatalogError::DanglingExtended {
                        model: model.id.to_string(),
                        extended: extended.to_string(),
                    });
                }
            }
            if !self.financing_index.contains_key(model.id) {
                return Err(CatalogError::MissingFinancing(model.id.to_string()));
            }
        }

        for fuel in &self.fuels {
            if fuel.price_per_liter <= 0 {
                return Err(CatalogError::NonPositiveFuelPrice(fuel.id.to_string()));
            }
        }

        for option in &self.financing {
            validate_option(option)?;
        }

        Ok(())
    }

    pub fn models(&self) -> &[VehicleModel] {
        &self.models
    }

    pub fn model(&self, id: &str) -> Option<&VehicleModel> {
        self.model_index.get(id).map(|position| &self.models[*position])
    }

    pub fn default_model(&self) -> &VehicleModel {
        &self.models[self.default_model]
    }

    pub fn model_or_default(&self, id: &str) -> Resolved<&VehicleModel> {
        match self.model(id) {
            Some(model) => Resolved::Exact(model),
            None => {
                debug!(requested = id, fallback = self.default_model().id, "unknown model");
                Resolved::Fallback {
                    value: self.default_model(),
                    reason: FallbackReason::UnknownModel,
                }
            }
        }
    }

    /// The base entry for an extended twin, or the model itself.
    pub fn base_of<'a>(&'a self, model: &'a VehicleModel) -> &'a VehicleModel {
        model
            .base_id
            .and_then(|base| self.model(base))
            .unwrap_or(model)
    }

    pub fn financing(&self) -> &[FinancingOption] {
        &self.financing
    }

    pub fn financing_for(&self, model_id: &str) -> Option<&FinancingOption> {
        self.financing_index
            .get(model_id)
            .map(|position| &self.financing[*position])
    }

    /// Terms for the regular or extended variant of a model, if configured.
    pub fn financing_option(&self, model_id: &str, variant: Variant) -> Option<&FinancingOption> {
        let base = self.base_of(self.model(model_id)?);
        match variant {
            Variant::Regular => self.financing_for(base.id),
            Variant::Extended => base.extended_id.and_then(|id| self.financing_for(id)),
        }
    }

    pub fn default_financing(&self) -> &FinancingOption {
        &self.financing[self.default_financing]
    }

    /// OTR used for payback estimates: the credit table's OTR, else list price.
    pub fn otr_for(&self, model: &VehicleModel) -> Rupiah {
        self.financing_for(model.id)
            .map(|option| option.otr)
            .unwrap_or(model.price)
    }

    pub fn fuels(&self) -> &[FuelOption] {
        &self.fuels
    }

    pub fn fuel(&self, id: &str) -> Option<&FuelOption> {
        self.fuels.iter().find(|fuel| fuel.id == id)
    }

    pub fn tariff(&self) -> ElectricityTariff {
        self.tariff
    }

    pub fn subsidy(&self) -> Rupiah {
        self.subsidy
    }

    pub fn tenors() -> [u32; 5] {
        data::TENORS
    }
}

fn validate_option(option: &FinancingOption) -> Result<(), CatalogError> {
    let model = option.model_id.to_string();

    if option.otr <= 0 {
        return Err(CatalogError::NonPositiveOtr(model));
    }

    let mut offered = option.dp_options.clone();
    offered.sort_unstable();

    for (tenor, by_dp) in &option.installments {
        if let Some(orphan) = by_dp.keys().find(|dp| !offered.contains(dp)) {
            return Err(CatalogError::OrphanedInstallment {
                model,
                tenor: *tenor,
                down_payment: *orphan,
            });
        }

        let mut previous: Option<(Rupiah, Rupiah)> = None;
        for dp in &offered {
            let amount = by_dp
                .get(dp)
                .copied()
                .ok_or_else(|| CatalogError::MissingInstallment {
                    model: model.clone(),
                    tenor: *tenor,
                    down_payment: *dp,
                })?;
            if let Some((lower_dp, lower_amount)) = previous {
                if amount >= lower_amount {
                    return Err(CatalogError::NonMonotonic {
                        model,
                        tenor: *tenor,
                        lower_dp,
                        higher_dp: *dp,
                    });
                }
            }
            previous = Some((*dp, amount));
        }
    }

    Ok(())
}
