//! WhatsApp deep links for contacting vendors about a listing.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::listing::{Product, Vendor};

const WHATSAPP_BASE: &str = "https://wa.me";

/// Characters escaped by the browser's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Country code and storefront phone used to build contact links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSettings {
    /// Dialing prefix without `+`, e.g. `"55"`.
    pub country_code: String,
    /// Phone used for product inquiries, which are routed through the storefront.
    pub storefront_phone: String,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            country_code: "55".to_string(),
            storefront_phone: "11999999999".to_string(),
        }
    }
}

impl ContactSettings {
    /// Link asking the vendor about a specific product.
    #[must_use]
    pub fn product_inquiry_link(&self, product: &Product) -> String {
        let message = format!(
            "Olá {}! Vi o produto \"{}\" no FreshLink e gostaria de saber mais informações.",
            product.vendor, product.name
        );
        whatsapp_link(&self.country_code, &self.storefront_phone, &message)
    }

    /// Link asking a vendor about their catalog, sent to the vendor's own phone.
    #[must_use]
    pub fn vendor_inquiry_link(&self, vendor: &Vendor) -> String {
        let message = format!(
            "Olá {}! Vi seu perfil no FreshLink e gostaria de saber mais sobre seus produtos.",
            vendor.name
        );
        whatsapp_link(&self.country_code, &vendor.phone, &message)
    }
}

/// Build `https://wa.me/<country><phone>?text=<message>`.
///
/// Non-digit characters are stripped from the country code and the phone.
#[must_use]
pub fn whatsapp_link(country_code: &str, phone: &str, message: &str) -> String {
    let number: String = country_code
        .chars()
        .chain(phone.chars())
        .filter(char::is_ascii_digit)
        .collect();
    let text = utf8_percent_encode(message, URI_COMPONENT);
    format!("{WHATSAPP_BASE}/{number}?text={text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_encodes_like_encode_uri_component() {
        let link = whatsapp_link("55", "11987654321", "Olá Sítio! (oi)");
        assert_eq!(
            link,
            "https://wa.me/5511987654321?text=Ol%C3%A1%20S%C3%ADtio!%20(oi)"
        );
    }

    #[test]
    fn whatsapp_link_strips_phone_formatting() {
        let link = whatsapp_link("+55", "(11) 98765-4321", "oi");
        assert_eq!(link, "https://wa.me/5511987654321?text=oi");
    }

    #[test]
    fn vendor_link_uses_vendor_phone_and_name() {
        let vendor = Vendor {
            id: 2,
            name: "Hortifruti do João".to_string(),
            image: String::new(),
            rating: 4.6,
            review_count: 89,
            distance: 1.2,
            location: "Pinheiros".to_string(),
            categories: vec![],
            is_open: true,
            hours: "7:00 - 19:00".to_string(),
            phone: "11987654322".to_string(),
            is_sponsored: false,
            product_count: 18,
            description: String::new(),
            category: None,
            address: None,
            coordinates: None,
        };
        let link = ContactSettings::default().vendor_inquiry_link(&vendor);
        assert!(link.starts_with(
            "https://wa.me/5511987654322?text=Ol%C3%A1%20Hortifruti%20do%20Jo%C3%A3o!"
        ));
        assert!(link.ends_with("seus%20produtos."));
    }
}
