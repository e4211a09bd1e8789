use serde::{Deserialize, Serialize};

const WHATSAPP_BASE: &str = "https://wa.me/";
const COUNTRY_CODE: &str = "62";

/// Prefilled WhatsApp message a campaign page links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhatsappTemplate {
    General,
    Financing,
    TestRide,
    Fleet,
}

impl WhatsappTemplate {
    pub fn message(self, model_name: Option<&str>) -> String {
        let model = model_name.unwrap_or("motor listrik");
        match self {
            Self::General => format!("Halo, saya tertarik dengan {model}. Boleh minta info lebih lanjut?"),
            Self::Financing => format!(
                "Halo, saya ingin simulasi cicilan untuk {model}. Berapa DP dan angsuran per bulannya?"
            ),
            Self::TestRide => format!("Halo, saya ingin jadwalkan test ride {model}. Kapan bisa?"),
            Self::Fleet => format!(
                "Halo, saya ingin penawaran pembelian armada {model} untuk usaha saya."
            ),
        }
    }
}

/// Digits only, with a local leading `0` rewritten to the country code.
pub fn normalize_number(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    match digits.strip_prefix('0') {
        Some(local) => format!("{COUNTRY_CODE}{local}"),
        None => digits,
    }
}

pub fn whatsapp_link(number: &str, template: WhatsappTemplate, model_name: Option<&str>) -> String {
    let message = template.message(model_name);
    format!(
        "{WHATSAPP_BASE}{}?text={}",
        normalize_number(number),
        urlencoding::encode(&message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_local_numbers() {
        assert_eq!(normalize_number("0812-3456-7890"), "6281234567890");
        assert_eq!(normalize_number("+62 812 3456 7890"), "6281234567890");
        assert_eq!(normalize_number("6281234567890"), "6281234567890");
    }

    #[test]
    fn link_encodes_message() {
        let link = whatsapp_link("081234567890", WhatsappTemplate::TestRide, Some("EdPower"));
        assert!(link.starts_with("https://wa.me/6281234567890?text="));
        assert!(link.contains("test%20ride%20EdPower"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn message_defaults_model_name() {
        let message = WhatsappTemplate::General.message(None);
        assert!(message.contains("motor listrik"));
    }
}
