//! Static `(campaign, variant)` → page descriptor registry.

mod data;
pub mod domain;

pub use domain::{
    Badge, CallToAction, CampaignConfig, CampaignDefinition, CampaignPath, HeroConfig,
    SectionKind, SeoMetadata,
};

use indexmap::map::Entry;
use indexmap::IndexMap;
use std::io::Write;
use tracing::warn;

/// Two-level map keyed by campaign id then variant id, so a pair can only
/// appear once. Both levels keep authoring order.
#[derive(Debug, Clone, Default)]
pub struct CampaignRegistry {
    campaigns: IndexMap<String, IndexMap<String, CampaignConfig>>,
}

impl CampaignRegistry {
    pub fn standard() -> Self {
        Self::from_definitions(data::standard_campaigns())
    }

    pub fn from_definitions(definitions: Vec<CampaignDefinition>) -> Self {
        let mut campaigns: IndexMap<String, IndexMap<String, CampaignConfig>> = IndexMap::new();

        for definition in definitions {
            let config = resolve_definition(definition);
            let variants = campaigns.entry(config.campaign_id.to_string()).or_default();
            match variants.entry(config.variant_id.to_string()) {
                Entry::Vacant(slot) => {
                    slot.insert(config);
                }
                Entry::Occupied(_) => {
                    warn!(
                        campaign = config.campaign_id,
                        variant = config.variant_id,
                        "duplicate campaign variant ignored"
                    );
                }
            }
        }

        Self { campaigns }
    }

    /// `None` is the normal answer for arbitrary URLs.
    pub fn get(&self, campaign_id: &str, variant_id: &str) -> Option<&CampaignConfig> {
        self.campaigns
            .get(campaign_id)
            .and_then(|variants| variants.get(variant_id))
    }

    pub fn exists(&self, campaign_id: &str, variant_id: &str) -> bool {
        self.get(campaign_id, variant_id).is_some()
    }

    /// Every registered pair once, in the order the definitions were authored.
    pub fn list_all_paths(&self) -> Vec<CampaignPath> {
        self.configs().map(CampaignConfig::path).collect()
    }

    pub fn configs(&self) -> impl Iterator<Item = &CampaignConfig> {
        self.campaigns.values().flat_map(|variants| variants.values())
    }

    pub fn variants_of(&self, campaign_id: &str) -> Vec<&str> {
        self.campaigns
            .get(campaign_id)
            .map(|variants| variants.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.campaigns.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Writes `campaign_id,variant_id` rows for static page generation.
    pub fn write_paths_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for path in self.list_all_paths() {
            csv_writer.serialize(path)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

fn resolve_definition(definition: CampaignDefinition) -> CampaignConfig {
    let sections = definition
        .sections
        .iter()
        .filter_map(|id| {
            let kind = SectionKind::parse(id);
            if kind.is_none() {
                warn!(
                    campaign = definition.campaign_id,
                    variant = definition.variant_id,
                    section = *id,
                    "skipping unknown section id"
                );
            }
            kind
        })
        .collect();

    CampaignConfig {
        campaign_id: definition.campaign_id,
        variant_id: definition.variant_id,
        name: definition.name,
        description: definition.description,
        audience: definition.audience,
        badge: definition.badge,
        featured_model: definition.featured_model,
        hero: definition.hero,
        sections,
        whatsapp_template: definition.whatsapp_template,
        seo: definition.seo,
    }
}
