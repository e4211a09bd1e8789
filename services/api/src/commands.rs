use crate::cli::CampaignCommand;
use clap::Args;
use ev_landing::campaigns::{CampaignConfig, CampaignRegistry};
use ev_landing::catalog::{Catalog, Rupiah, Variant};
use ev_landing::config::AppConfig;
use ev_landing::contact::whatsapp_link;
use ev_landing::error::AppError;
use ev_landing::financing::{self, Quote};
use ev_landing::savings::{SavingsCalculator, SavingsComparison};
use std::io;

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Main model id (e.g. edpower, mini, cargo)
    #[arg(long)]
    pub(crate) model: String,
    /// Quote the extended-battery variant when the model has one
    #[arg(long)]
    pub(crate) extended: bool,
    /// Down payment in rupiah; must be one of the offered amounts
    #[arg(long)]
    pub(crate) down_payment: Rupiah,
    /// Tenor in months
    #[arg(long)]
    pub(crate) tenor: u32,
}

#[derive(Args, Debug)]
pub(crate) struct SavingsArgs {
    /// Monthly distance in kilometres (clamped at 2000)
    #[arg(long)]
    pub(crate) distance: f64,
    /// Model id
    #[arg(long, default_value = "edpower")]
    pub(crate) model: String,
    /// Fuel id; all fuels are compared when omitted
    #[arg(long)]
    pub(crate) fuel: Option<String>,
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let catalog = Catalog::standard()?;
    let variant = if args.extended {
        Variant::Extended
    } else {
        Variant::Regular
    };

    let resolved = financing::resolve_quotable(&catalog, &args.model, variant)?;
    if let Some(reason) = resolved.reason() {
        println!("Note: {}", reason.label());
    }

    let quote = financing::quote(resolved.value(), args.down_payment, args.tenor)?;
    print!("{}", render_quote(&quote));
    Ok(())
}

pub(crate) fn run_savings(args: SavingsArgs) -> Result<(), AppError> {
    let catalog = Catalog::standard()?;
    let calculator = SavingsCalculator::new(&catalog);

    let comparisons = match &args.fuel {
        Some(fuel) => vec![calculator.compare(args.distance, &args.model, fuel)?],
        None => calculator.compare_all_fuels(args.distance, &args.model)?,
    };

    for comparison in &comparisons {
        print!("{}", render_savings(comparison));
    }
    Ok(())
}

pub(crate) fn run_campaigns(command: CampaignCommand) -> Result<(), AppError> {
    let registry = CampaignRegistry::standard();

    match command {
        CampaignCommand::List { csv: true } => {
            registry.write_paths_csv(io::stdout().lock())?;
        }
        CampaignCommand::List { csv: false } => {
            println!("{} campaign pages", registry.len());
            for config in registry.configs() {
                println!(
                    "- /{}/{} | {} | {}",
                    config.campaign_id, config.variant_id, config.name, config.audience
                );
            }
        }
        CampaignCommand::Show {
            campaign_id,
            variant_id,
        } => match registry.get(&campaign_id, &variant_id) {
            Some(config) => {
                let catalog = Catalog::standard()?;
                let contact = AppConfig::load()?.contact;
                let model = catalog.model_or_default(config.featured_model).into_value();
                let link =
                    whatsapp_link(&contact.whatsapp_number, config.whatsapp_template, Some(model.name));
                print!("{}", render_campaign(config, model.name, &link));
            }
            None => println!("Campaign {campaign_id}/{variant_id} not found"),
        },
    }

    Ok(())
}

pub(crate) fn render_quote(quote: &Quote) -> String {
    let variant = quote
        .variant
        .map(|variant| format!(" ({})", variant.label()))
        .unwrap_or_default();

    let mut out = format!("Financing quote for {}{}\n", quote.model_id, variant);
    out.push_str(&format!("- OTR: {}\n", format_rupiah(quote.otr)));
    if quote.discount > 0 {
        out.push_str(&format!("- Discount: {}\n", format_rupiah(quote.discount)));
    }
    out.push_str(&format!(
        "- Down payment: {} ({:.1}% of OTR)\n",
        format_rupiah(quote.down_payment),
        quote.down_payment_pct
    ));
    out.push_str(&format!(
        "- Installment: {} x {} months\n",
        format_rupiah(quote.monthly_installment),
        quote.tenor_months
    ));
    out.push_str(&format!("- Total payment: {}\n", format_rupiah(quote.total_payment)));
    if let Some(interest) = quote.total_interest {
        out.push_str(&format!("- Total interest: {}\n", format_rupiah(interest)));
    }
    out
}

pub(crate) fn render_savings(comparison: &SavingsComparison) -> String {
    let mut out = format!(
        "{} vs {} at {:.0} km/month\n",
        comparison.model_id, comparison.fuel_id, comparison.distance_km
    );
    out.push_str(&format!(
        "- Fuel: {:.1} l, {}\n",
        comparison.monthly_fuel_liters,
        format_rupiah(comparison.monthly_fuel_cost.round() as Rupiah)
    ));
    out.push_str(&format!(
        "- Electricity: {:.2} kWh, {}\n",
        comparison.monthly_electricity_kwh,
        format_rupiah(comparison.monthly_electricity_cost.round() as Rupiah)
    ));
    out.push_str(&format!(
        "- Savings: {} per month, {} per year",
        format_rupiah(comparison.monthly_savings.round() as Rupiah),
        format_rupiah(comparison.yearly_savings.round() as Rupiah)
    ));
    match comparison.savings_percentage {
        Some(pct) => out.push_str(&format!(" ({pct}%)\n")),
        None => out.push('\n'),
    }
    match comparison.roi_months {
        Some(months) => out.push_str(&format!("- Pays for itself in {months} months\n")),
        None => out.push_str("- No payback at this distance\n"),
    }
    out
}

pub(crate) fn render_campaign(config: &CampaignConfig, model_name: &str, link: &str) -> String {
    let mut out = format!(
        "{} [{}/{}]\n{}\n",
        config.name, config.campaign_id, config.variant_id, config.description
    );
    out.push_str(&format!("Headline: {}\n", config.hero.headline));
    out.push_str(&format!("Featured model: {model_name}\n"));
    let sections: Vec<&str> = config.sections.iter().map(|kind| kind.as_str()).collect();
    out.push_str(&format!("Sections: {}\n", sections.join(", ")));
    out.push_str(&format!("WhatsApp: {link}\n"));
    out
}

/// `Rp 1.836.000`, the way prices are printed on the pages.
pub(crate) fn format_rupiah(amount: Rupiah) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}Rp {grouped}")
}
