use crate::contact::WhatsappTemplate;
use serde::{Deserialize, Serialize};

/// Renderable page sections, in the vocabulary the page templates understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Hero,
    ProductShowcase,
    Specs,
    SavingsCalculator,
    FinancingSimulator,
    Comparison,
    Testimonials,
    Gallery,
    Faq,
    LeadForm,
    DealerLocator,
}

impl SectionKind {
    pub const fn all() -> [Self; 11] {
        [
            Self::Hero,
            Self::ProductShowcase,
            Self::Specs,
            Self::SavingsCalculator,
            Self::FinancingSimulator,
            Self::Comparison,
            Self::Testimonials,
            Self::Gallery,
            Self::Faq,
            Self::LeadForm,
            Self::DealerLocator,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::ProductShowcase => "product_showcase",
            Self::Specs => "specs",
            Self::SavingsCalculator => "savings_calculator",
            Self::FinancingSimulator => "financing_simulator",
            Self::Comparison => "comparison",
            Self::Testimonials => "testimonials",
            Self::Gallery => "gallery",
            Self::Faq => "faq",
            Self::LeadForm => "lead_form",
            Self::DealerLocator => "dealer_locator",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::all().into_iter().find(|kind| kind.as_str() == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub text: &'static str,
    pub style: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub label: &'static str,
    pub target: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroConfig {
    pub headline: &'static str,
    pub subheadline: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<&'static str>,
    pub primary_cta: CallToAction,
    pub secondary_cta: CallToAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: Vec<&'static str>,
}

/// Registry entry as authored, with section ids still as strings.
#[derive(Debug, Clone)]
pub struct CampaignDefinition {
    pub campaign_id: &'static str,
    pub variant_id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub audience: &'static str,
    pub badge: Option<Badge>,
    pub featured_model: &'static str,
    pub hero: HeroConfig,
    pub sections: Vec<&'static str>,
    pub whatsapp_template: WhatsappTemplate,
    pub seo: SeoMetadata,
}

/// Fully resolved page descriptor for one `(campaign, variant)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignConfig {
    pub campaign_id: &'static str,
    pub variant_id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub audience: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    pub featured_model: &'static str,
    pub hero: HeroConfig,
    pub sections: Vec<SectionKind>,
    pub whatsapp_template: WhatsappTemplate,
    pub seo: SeoMetadata,
}

impl CampaignConfig {
    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.sections.contains(&kind)
    }

    pub fn path(&self) -> CampaignPath {
        CampaignPath {
            campaign_id: self.campaign_id.to_string(),
            variant_id: self.variant_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CampaignPath {
    pub campaign_id: String,
    pub variant_id: String,
}
