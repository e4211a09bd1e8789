//! Installment simulator: variant resolution, quoting, and the progressive
//! model → variant → down payment → tenor selection flow.

mod selection;

pub use selection::{AvailableChoices, SelectionEvent, SelectionState};

use crate::catalog::{Catalog, FallbackReason, FinancingOption, Resolved, Rupiah, Variant};
use serde::Serialize;
use tracing::debug;

/// A selection outside the configured choices. The UI only offers valid
/// values, so reaching this is an integration bug, not a user error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("down payment {down_payment} is not offered for '{model_id}' (offered: {offered:?})")]
    DownPaymentNotOffered {
        model_id: String,
        down_payment: Rupiah,
        offered: Vec<Rupiah>,
    },
    #[error("tenor {tenor_months} months is not offered for '{model_id}' (offered: {offered:?})")]
    TenorNotOffered {
        model_id: String,
        tenor_months: u32,
        offered: Vec<u32>,
    },
    #[error("no installment configured for '{model_id}' at {down_payment} over {tenor_months} months")]
    MissingInstallment {
        model_id: String,
        down_payment: Rupiah,
        tenor_months: u32,
    },
    #[error("cannot {event} while {state}")]
    OutOfOrder {
        state: &'static str,
        event: &'static str,
    },
    #[error("selection refers to '{0}' which is not in this catalog")]
    StaleSelection(String),
}

/// Monthly installment and derived totals for one exact selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub model_id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
    pub otr: Rupiah,
    pub discount: Rupiah,
    pub down_payment: Rupiah,
    pub tenor_months: u32,
    pub monthly_installment: Rupiah,
    pub total_payment: Rupiah,
    /// `None` when promotions leave nothing above OTR to report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_interest: Option<Rupiah>,
    pub down_payment_pct: f64,
}

/// Picks the credit terms for a main model and requested variant.
///
/// Never fails: an unknown model degrades to the default model, and an
/// extended request without an extended twin degrades to the regular terms.
pub fn resolve_variant<'a>(
    catalog: &'a Catalog,
    main_model_id: &str,
    variant: Variant,
) -> Resolved<&'a FinancingOption> {
    let requested = catalog.model_or_default(main_model_id);
    let main = requested.map(|model| catalog.base_of(model));

    let regular = match catalog.financing_option(main.value().id, Variant::Regular) {
        Some(option) => main.map(|_| option),
        None => Resolved::Fallback {
            value: catalog.default_financing(),
            reason: FallbackReason::MissingFinancing,
        },
    };

    if variant == Variant::Regular {
        return regular;
    }

    let extended = catalog.financing_option(main.value().id, Variant::Extended);

    match (extended, main.reason()) {
        (Some(option), None) => Resolved::Exact(option),
        (Some(option), Some(reason)) => Resolved::Fallback {
            value: option,
            reason,
        },
        (None, _) => {
            debug!(
                model = main.value().id,
                "extended variant requested but not offered"
            );
            regular.degrade(FallbackReason::ExtendedUnavailable)
        }
    }
}

/// Variant resolution for quoting. Only the extended → regular degradation is
/// accepted; a model missing from the catalog or its terms is a stale
/// selection rather than a quote against the default model's table.
pub fn resolve_quotable<'a>(
    catalog: &'a Catalog,
    main_model_id: &str,
    variant: Variant,
) -> Result<Resolved<&'a FinancingOption>, SelectionError> {
    let resolved = resolve_variant(catalog, main_model_id, variant);
    match resolved.reason() {
        Some(FallbackReason::UnknownModel | FallbackReason::MissingFinancing) => {
            Err(SelectionError::StaleSelection(main_model_id.to_string()))
        }
        _ => Ok(resolved),
    }
}

/// Looks up the fixed installment for an exact `(down payment, tenor)` pair.
pub fn quote(
    option: &FinancingOption,
    down_payment: Rupiah,
    tenor_months: u32,
) -> Result<Quote, SelectionError> {
    if !option.offers_down_payment(down_payment) {
        return Err(SelectionError::DownPaymentNotOffered {
            model_id: option.model_id.to_string(),
            down_payment,
            offered: option.dp_options.clone(),
        });
    }

    if !option.offers_tenor(tenor_months) {
        return Err(SelectionError::TenorNotOffered {
            model_id: option.model_id.to_string(),
            tenor_months,
            offered: option.tenors(),
        });
    }

    let monthly_installment = option.installment(down_payment, tenor_months).ok_or_else(|| {
        SelectionError::MissingInstallment {
            model_id: option.model_id.to_string(),
            down_payment,
            tenor_months,
        }
    })?;

    let total_payment = down_payment + monthly_installment * Rupiah::from(tenor_months);
    let interest = total_payment - option.otr;

    Ok(Quote {
        model_id: option.model_id,
        variant: option.variant,
        otr: option.otr,
        discount: option.discount,
        down_payment,
        tenor_months,
        monthly_installment,
        total_payment,
        total_interest: (interest > 0).then_some(interest),
        down_payment_pct: down_payment_pct(down_payment, option.otr),
    })
}

/// Down payment as a share of OTR, one decimal place. Display only.
pub fn down_payment_pct(down_payment: Rupiah, otr: Rupiah) -> f64 {
    if otr <= 0 {
        return 0.0;
    }
    (down_payment as f64 / otr as f64 * 1000.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::standard().expect("catalog")
    }

    #[test]
    fn mini_twelve_months_matches_table() {
        let catalog = catalog();
        let option = resolve_variant(&catalog, "mini", Variant::Regular).into_value();
        let quote = quote(option, 3_200_000, 12).expect("valid selection");
        assert_eq!(quote.monthly_installment, 1_836_000);
        assert_eq!(quote.total_payment, 25_232_000);
        assert_eq!(quote.total_interest, Some(25_232_000 - 21_500_000));
        assert_eq!(quote.down_payment_pct, 14.9);
    }

    #[test]
    fn quoting_rejects_unknown_models() {
        let catalog = catalog();
        let err = resolve_quotable(&catalog, "hoverbike", Variant::Regular)
            .expect_err("unknown model is stale");
        assert_eq!(err, SelectionError::StaleSelection("hoverbike".to_string()));

        let degraded = resolve_quotable(&catalog, "cargo", Variant::Extended)
            .expect("extended falls back to regular terms");
        assert_eq!(degraded.reason(), Some(FallbackReason::ExtendedUnavailable));
    }

    #[test]
    fn extended_request_resolves_extended_terms() {
        let catalog = catalog();
        let resolved = resolve_variant(&catalog, "edpower", Variant::Extended);
        assert!(!resolved.is_fallback());
        assert_eq!(resolved.value().model_id, "edpower-ext");
        assert_eq!(resolved.value().variant, Some(Variant::Extended));
    }

    #[test]
    fn extended_request_without_twin_degrades_to_regular() {
        let catalog = catalog();
        let resolved = resolve_variant(&catalog, "mini", Variant::Extended);
        assert_eq!(resolved.reason(), Some(FallbackReason::ExtendedUnavailable));
        assert_eq!(resolved.value().model_id, "mini");
    }

    #[test]
    fn extended_id_as_main_model_uses_its_base() {
        let catalog = catalog();
        let regular = resolve_variant(&catalog, "edpower-ext", Variant::Regular);
        assert_eq!(regular.value().model_id, "edpower");
        assert!(!regular.is_fallback());
    }

    #[test]
    fn unknown_model_degrades_to_default_terms() {
        let catalog = catalog();
        let resolved = resolve_variant(&catalog, "hoverbike", Variant::Extended);
        assert_eq!(resolved.reason(), Some(FallbackReason::UnknownModel));
        assert_eq!(resolved.value().model_id, "edpower-ext");

        let regular = resolve_variant(&catalog, "hoverbike", Variant::Regular);
        assert_eq!(regular.reason(), Some(FallbackReason::UnknownModel));
        assert_eq!(regular.value().model_id, "edpower");
    }

    #[test]
    fn rejects_down_payment_outside_offer() {
        let catalog = catalog();
        let option = catalog.financing_for("mini").expect("mini terms");
        let err = quote(option, 3_000_000, 12).expect_err("not offered");
        assert!(matches!(
            err,
            SelectionError::DownPaymentNotOffered {
                down_payment: 3_000_000,
                ..
            }
        ));
    }

    #[test]
    fn rejects_tenor_outside_offer() {
        let catalog = catalog();
        let option = catalog.financing_for("mini").expect("mini terms");
        let err = quote(option, 3_200_000, 48).expect_err("not offered");
        match err {
            SelectionError::TenorNotOffered { offered, .. } => {
                assert_eq!(offered, vec![12, 18, 24, 30, 36]);
            }
            other => panic!("expected tenor error, got {other:?}"),
        }
    }

    #[test]
    fn non_positive_interest_is_not_reported() {
        let option = FinancingOption::from_rows(
            "promo",
            None,
            20_000_000,
            2_000_000,
            &[5_000_000],
            &[(12, &[1_000_000])],
        );
        let quote = quote(&option, 5_000_000, 12).expect("valid");
        assert_eq!(quote.total_payment, 17_000_000);
        assert_eq!(quote.total_interest, None);
    }

    #[test]
    fn percentage_guards_zero_otr() {
        assert_eq!(down_payment_pct(1_000_000, 0), 0.0);
        assert_eq!(down_payment_pct(5_000_000, 20_000_000), 25.0);
    }
}
