use super::{quote, resolve_variant, Quote, SelectionError};
use crate::catalog::{Catalog, FallbackReason, FinancingOption, Rupiah, Variant};
use serde::Serialize;

/// Progressive disclosure of the simulator inputs. Transitions only move
/// forward; picking another model starts a fresh machine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SelectionState {
    ModelChosen {
        model_id: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        fallback: Option<FallbackReason>,
    },
    VariantChosen {
        model_id: &'static str,
        option_id: &'static str,
        variant: Variant,
    },
    DownPaymentChosen {
        model_id: &'static str,
        option_id: &'static str,
        variant: Variant,
        down_payment: Rupiah,
    },
    TenorChosen {
        model_id: &'static str,
        option_id: &'static str,
        variant: Variant,
        down_payment: Rupiah,
        tenor_months: u32,
    },
    Quoted {
        model_id: &'static str,
        variant: Variant,
        quote: Quote,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    ChooseVariant(Variant),
    ChooseDownPayment(Rupiah),
    ChooseTenor(u32),
    RequestQuote,
}

impl SelectionEvent {
    const fn label(self) -> &'static str {
        match self {
            Self::ChooseVariant(_) => "choose a variant",
            Self::ChooseDownPayment(_) => "choose a down payment",
            Self::ChooseTenor(_) => "choose a tenor",
            Self::RequestQuote => "request a quote",
        }
    }
}

/// What the next step may offer the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", content = "choices", rename_all = "snake_case")]
pub enum AvailableChoices {
    Variants(Vec<Variant>),
    DownPayments(Vec<Rupiah>),
    Tenors(Vec<u32>),
    Quote,
    Complete,
}

impl SelectionState {
    /// Begins a selection. Unknown models start from the default model.
    pub fn start(catalog: &Catalog, model_id: &str) -> Self {
        let resolved = catalog.model_or_default(model_id);
        let fallback = resolved.reason();
        let model = catalog.base_of(resolved.into_value());
        Self::ModelChosen {
            model_id: model.id,
            fallback,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::ModelChosen { .. } => "model chosen",
            Self::VariantChosen { .. } => "variant chosen",
            Self::DownPaymentChosen { .. } => "down payment chosen",
            Self::TenorChosen { .. } => "tenor chosen",
            Self::Quoted { .. } => "quoted",
        }
    }

    pub fn model_id(&self) -> &'static str {
        match self {
            Self::ModelChosen { model_id, .. }
            | Self::VariantChosen { model_id, .. }
            | Self::DownPaymentChosen { model_id, .. }
            | Self::TenorChosen { model_id, .. }
            | Self::Quoted { model_id, .. } => *model_id,
        }
    }

    pub fn quote(&self) -> Option<&Quote> {
        match self {
            Self::Quoted { quote, .. } => Some(quote),
            _ => None,
        }
    }

    /// Choices valid for the step after the current state.
    pub fn available_choices(&self, catalog: &Catalog) -> Result<AvailableChoices, SelectionError> {
        match self {
            Self::ModelChosen { model_id, .. } => {
                let mut variants = vec![Variant::Regular];
                let extended = resolve_variant(catalog, model_id, Variant::Extended);
                if !extended.is_fallback() {
                    variants.push(Variant::Extended);
                }
                Ok(AvailableChoices::Variants(variants))
            }
            Self::VariantChosen { option_id, .. } => {
                let option = option_by_id(catalog, option_id)?;
                Ok(AvailableChoices::DownPayments(option.dp_options.clone()))
            }
            Self::DownPaymentChosen {
                option_id,
                down_payment,
                ..
            } => {
                let option = option_by_id(catalog, option_id)?;
                let tenors = option
                    .tenors()
                    .into_iter()
                    .filter(|tenor| option.installment(*down_payment, *tenor).is_some())
                    .collect();
                Ok(AvailableChoices::Tenors(tenors))
            }
            Self::TenorChosen { .. } => Ok(AvailableChoices::Quote),
            Self::Quoted { .. } => Ok(AvailableChoices::Complete),
        }
    }

    /// Pure transition function.
    pub fn apply(&self, catalog: &Catalog, event: SelectionEvent) -> Result<Self, SelectionError> {
        match (self, event) {
            (Self::ModelChosen { model_id, .. }, SelectionEvent::ChooseVariant(requested)) => {
                let resolved = resolve_variant(catalog, model_id, requested);
                let variant = if resolved.reason() == Some(FallbackReason::ExtendedUnavailable) {
                    Variant::Regular
                } else {
                    requested
                };
                Ok(Self::VariantChosen {
                    model_id: *model_id,
                    option_id: resolved.value().model_id,
                    variant,
                })
            }
            (
                Self::VariantChosen {
                    model_id,
                    option_id,
                    variant,
                },
                SelectionEvent::ChooseDownPayment(down_payment),
            ) => {
                let option = option_by_id(catalog, option_id)?;
                if !option.offers_down_payment(down_payment) {
                    return Err(SelectionError::DownPaymentNotOffered {
                        model_id: option.model_id.to_string(),
                        down_payment,
                        offered: option.dp_options.clone(),
                    });
                }
                Ok(Self::DownPaymentChosen {
                    model_id: *model_id,
                    option_id: *option_id,
                    variant: *variant,
                    down_payment,
                })
            }
            (
                Self::DownPaymentChosen {
                    model_id,
                    option_id,
                    variant,
                    down_payment,
                },
                SelectionEvent::ChooseTenor(tenor_months),
            ) => {
                let option = option_by_id(catalog, option_id)?;
                if option.installment(*down_payment, tenor_months).is_none() {
                    return Err(SelectionError::TenorNotOffered {
                        model_id: option.model_id.to_string(),
                        tenor_months,
                        offered: option.tenors(),
                    });
                }
                Ok(Self::TenorChosen {
                    model_id: *model_id,
                    option_id: *option_id,
                    variant: *variant,
                    down_payment: *down_payment,
                    tenor_months,
                })
            }
            (
                Self::TenorChosen {
                    model_id,
                    option_id,
                    variant,
                    down_payment,
                    tenor_months,
                },
                SelectionEvent::RequestQuote,
            ) => {
                let option = option_by_id(catalog, option_id)?;
                let quote = quote(option, *down_payment, *tenor_months)?;
                Ok(Self::Quoted {
                    model_id: *model_id,
                    variant: *variant,
                    quote,
                })
            }
            (state, event) => Err(SelectionError::OutOfOrder {
                state: state.label(),
                event: event.label(),
            }),
        }
    }
}

fn option_by_id<'a>(
    catalog: &'a Catalog,
    option_id: &str,
) -> Result<&'a FinancingOption, SelectionError> {
    catalog
        .financing_for(option_id)
        .ok_or_else(|| SelectionError::StaleSelection(option_id.to_string()))
}
