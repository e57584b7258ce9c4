//! WhatsApp hand-off for users who would rather pay by a manual M-Pesa transfer.

use payday_core::config::ContactConfig;
use payday_core::Plan;
use reqwest::Url;

/// `https://wa.me/<digits>?text=<message>` asking the team for payment details.
pub fn whatsapp_link(contact: &ContactConfig, plan: &Plan) -> String {
    let digits: String = contact
        .whatsapp_number
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    let message = format!(
        "Hi! I want to subscribe to the {} plan on {}. Please send me the M-Pesa payment details.",
        plan.name, contact.brand_name
    );
    let base = format!("https://wa.me/{digits}");
    match Url::parse_with_params(&base, &[("text", message.as_str())]) {
        Ok(url) => url.to_string(),
        Err(_) => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payday_core::catalog::MONTHLY_VIP;

    #[test]
    fn link_targets_configured_number_with_encoded_text() {
        let link = whatsapp_link(&ContactConfig::default(), &MONTHLY_VIP);
        assert!(link.starts_with("https://wa.me/254711871225?text="));
        assert!(link.contains("Monthly"));
        assert!(!link.contains(' '), "message must be encoded: {link}");
    }
}
