use super::domain::{Badge, CallToAction, CampaignDefinition, HeroConfig, SeoMetadata};
use crate::contact::WhatsappTemplate;

const CTA_LEAD_FORM: CallToAction = CallToAction {
    label: "Daftar Sekarang",
    target: "#lead-form",
};

const CTA_WHATSAPP: CallToAction = CallToAction {
    label: "Chat WhatsApp",
    target: "whatsapp",
};

const CTA_SIMULATOR: CallToAction = CallToAction {
    label: "Hitung Cicilan",
    target: "#financing-simulator",
};

const CTA_SAVINGS: CallToAction = CallToAction {
    label: "Hitung Penghematan",
    target: "#savings-calculator",
};

pub(crate) fn standard_campaigns() -> Vec<CampaignDefinition> {
    vec![
        CampaignDefinition {
            campaign_id: "100101",
            variant_id: "a",
            name: "Hemat BBM",
            description: "Fuel savings pitch leading with the savings calculator.",
            audience: "Daily commuters",
            badge: Some(Badge {
                text: "Hemat hingga 86%",
                style: "success",
            }),
            featured_model: "edpower",
            hero: HeroConfig {
                headline: "Stop bayar bensin, mulai hemat tiap hari",
                subheadline: "EdPower menempuh 135 km sekali cas dengan biaya listrik rumahan.",
                highlight: Some("SuperCharge 0-80% dalam 2 jam"),
                primary_cta: CTA_SAVINGS,
                secondary_cta: CTA_WHATSAPP,
            },
            sections: vec![
                "hero",
                "savings_calculator",
                "product_showcase",
                "specs",
                "testimonials",
                "faq",
                "lead_form",
            ],
            whatsapp_template: WhatsappTemplate::General,
            seo: SeoMetadata {
                title: "EdPower | Motor listrik hemat biaya harian",
                description: "Bandingkan biaya bensin dan listrik, lalu lihat berapa yang bisa kamu hemat dengan EdPower.",
                keywords: vec!["motor listrik", "hemat bbm", "edpower"],
            },
        },
        CampaignDefinition {
            campaign_id: "100101",
            variant_id: "b",
            name: "Hemat BBM",
            description: "Fuel savings pitch leading with a side-by-side comparison.",
            audience: "Daily commuters",
            badge: None,
            featured_model: "edpower",
            hero: HeroConfig {
                headline: "Rp 250 ribu bensin atau Rp 36 ribu listrik?",
                subheadline: "Hitung sendiri selisihnya untuk jarak tempuh bulananmu.",
                highlight: None,
                primary_cta: CTA_SAVINGS,
                secondary_cta: CTA_LEAD_FORM,
            },
            sections: vec![
                "hero",
                "comparison",
                "savings_calculator",
                "promo_countdown",
                "specs",
                "faq",
                "lead_form",
            ],
            whatsapp_template: WhatsappTemplate::General,
            seo: SeoMetadata {
                title: "Bensin vs listrik | EdPower",
                description: "Perbandingan biaya bulanan motor bensin dan motor listrik EdPower.",
                keywords: vec!["biaya motor listrik", "bensin vs listrik"],
            },
        },
        CampaignDefinition {
            campaign_id: "100102",
            variant_id: "a",
            name: "Cicilan Ringan",
            description: "Installment-first pitch with the simulator above the fold.",
            audience: "First-time buyers",
            badge: Some(Badge {
                text: "DP mulai Rp 3,2 juta",
                style: "promo",
            }),
            featured_model: "mini",
            hero: HeroConfig {
                headline: "Bawa pulang MINI, cicilan mulai Rp 694 ribu",
                subheadline: "Pilih DP dan tenor 12 sampai 36 bulan sesuai kemampuan.",
                highlight: Some("Diskon Rp 1 juta bulan ini"),
                primary_cta: CTA_SIMULATOR,
                secondary_cta: CTA_WHATSAPP,
            },
            sections: vec![
                "hero",
                "financing_simulator",
                "product_showcase",
                "specs",
                "testimonials",
                "lead_form",
            ],
            whatsapp_template: WhatsappTemplate::Financing,
            seo: SeoMetadata {
                title: "Cicilan motor listrik MINI | DP ringan",
                description: "Simulasi cicilan motor listrik MINI dengan DP mulai Rp 3,2 juta.",
                keywords: vec!["cicilan motor listrik", "kredit motor listrik", "mini"],
            },
        },
        CampaignDefinition {
            campaign_id: "100102",
            variant_id: "b",
            name: "Cicilan Ringan",
            description: "Installment pitch for the extended-range flagship.",
            audience: "Upgraders",
            badge: None,
            featured_model: "edpower",
            hero: HeroConfig {
                headline: "EdPower Extended, jarak 185 km tanpa cemas",
                subheadline: "Cicilan tetap tanpa biaya tersembunyi.",
                highlight: None,
                primary_cta: CTA_SIMULATOR,
                secondary_cta: CTA_LEAD_FORM,
            },
            sections: vec![
                "hero",
                "product_showcase",
                "financing_simulator",
                "savings_calculator",
                "gallery",
                "faq",
                "lead_form",
            ],
            whatsapp_template: WhatsappTemplate::Financing,
            seo: SeoMetadata {
                title: "Kredit EdPower Extended",
                description: "Simulasi cicilan EdPower regular dan extended dengan tenor fleksibel.",
                keywords: vec!["edpower extended", "kredit motor listrik"],
            },
        },
        CampaignDefinition {
            campaign_id: "100103",
            variant_id: "driver",
            name: "Mitra Ojol",
            description: "Ride-hailing driver program with high monthly mileage.",
            audience: "Ride-hailing drivers",
            badge: Some(Badge {
                text: "Program Mitra",
                style: "info",
            }),
            featured_model: "edpower",
            hero: HeroConfig {
                headline: "Narik lebih jauh, setoran bensin hilang",
                subheadline: "Driver menempuh 2.000 km sebulan bisa hemat jutaan rupiah.",
                highlight: Some("Gratis test ride"),
                primary_cta: CTA_LEAD_FORM,
                secondary_cta: CTA_WHATSAPP,
            },
            sections: vec![
                "hero",
                "savings_calculator",
                "financing_simulator",
                "testimonials",
                "dealer_locator",
                "lead_form",
            ],
            whatsapp_template: WhatsappTemplate::TestRide,
            seo: SeoMetadata {
                title: "Motor listrik untuk driver ojol",
                description: "Program khusus mitra driver: hemat biaya operasional dengan EdPower.",
                keywords: vec!["motor listrik ojol", "driver ojol"],
            },
        },
        CampaignDefinition {
            campaign_id: "100104",
            variant_id: "fleet",
            name: "Armada Usaha",
            description: "Fleet offer for delivery businesses.",
            audience: "Small business owners",
            badge: None,
            featured_model: "cargo",
            hero: HeroConfig {
                headline: "Armada pengiriman tanpa biaya bensin",
                subheadline: "Cargo membawa muatan harian dengan biaya listrik yang terprediksi.",
                highlight: None,
                primary_cta: CTA_WHATSAPP,
                secondary_cta: CTA_LEAD_FORM,
            },
            sections: vec![
                "hero",
                "product_showcase",
                "specs",
                "comparison",
                "savings_calculator",
                "lead_form",
            ],
            whatsapp_template: WhatsappTemplate::Fleet,
            seo: SeoMetadata {
                title: "Motor listrik Cargo untuk armada usaha",
                description: "Penawaran armada motor listrik Cargo untuk usaha pengiriman.",
                keywords: vec!["motor listrik cargo", "armada motor listrik"],
            },
        },
    ]
}
