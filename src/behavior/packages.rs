use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use web_sys::Element;

use crate::dom;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardState {
    #[default]
    Collapsed,
    Expanded,
}

impl CardState {
    pub fn toggled(self) -> Self {
        match self {
            CardState::Collapsed => CardState::Expanded,
            CardState::Expanded => CardState::Collapsed,
        }
    }

    pub fn class(self) -> Option<&'static str> {
        (self == CardState::Expanded).then_some("expanded")
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            CardState::Collapsed => "See More",
            CardState::Expanded => "See Less",
        }
    }
}

/// Cards with nothing folded away get no "See More" control.
pub fn shows_toggle(hidden_features: usize) -> bool {
    hidden_features > 0
}

pub fn hover_transform(pointer_inside: bool) -> &'static str {
    if pointer_inside {
        "translateY(-8px) scale(1.02)"
    } else {
        "translateY(0) scale(1)"
    }
}

/// What a rendered package card says about itself at the moment it is ordered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PackageSnapshot {
    pub name: Option<String>,
    pub currency: Option<String>,
    pub amount: Option<String>,
    pub features: Vec<String>,
}

impl PackageSnapshot {
    /// Reads name, price and every feature (folded ones included) from a `.package__card`.
    pub fn read(card: &Element) -> Self {
        let features = card
            .query_selector_all(".package__features li")
            .map(|list| {
                (0..list.length())
                    .filter_map(|i| list.item(i))
                    .filter_map(|li| li.text_content())
                    .map(|text| text.trim().to_string())
                    .collect()
            })
            .unwrap_or_default();

        PackageSnapshot {
            name: dom::text_in(card, ".package__name"),
            currency: dom::text_in(card, ".package__currency"),
            amount: dom::text_in(card, ".package__amount"),
            features,
        }
    }

    pub fn order_message(&self) -> String {
        let name = non_empty(&self.name).unwrap_or("Package");
        let currency = non_empty(&self.currency).unwrap_or("NPR");
        let amount = non_empty(&self.amount).unwrap_or("");
        let features = self
            .features
            .iter()
            .map(|feature| format!("• {}", feature))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Hello! I'm interested in ordering:\n\n*{}*\nPrice: {} {}\n\n*Features:*\n{}\n\nPlease let me know the next steps.",
            name, currency, amount, features
        )
    }

    pub fn order_url(&self, number: &str) -> String {
        whatsapp_url(number, Some(&self.order_message()))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Characters `encodeURIComponent` escapes: everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
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

pub fn encode_uri_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// `https://wa.me/<number>`, with the message pre-filled when given.
pub fn whatsapp_url(number: &str, message: Option<&str>) -> String {
    match message {
        Some(text) => format!("https://wa.me/{}?text={}", number, encode_uri_component(text)),
        None => format!("https://wa.me/{}", number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gold() -> PackageSnapshot {
        PackageSnapshot {
            name: Some("Gold".to_string()),
            currency: Some("NPR".to_string()),
            amount: Some("5000".to_string()),
            features: vec!["A".to_string(), "B".to_string()],
        }
    }

    #[test]
    fn order_message_lists_name_price_and_features() {
        let message = gold().order_message();
        assert!(message.starts_with("Hello! I'm interested in ordering:\n\n"));
        assert!(message.contains("*Gold*\nPrice: NPR 5000\n"));
        assert!(message.contains("*Features:*\n• A\n• B\n"));
        assert!(message.ends_with("Please let me know the next steps."));
    }

    #[test]
    fn order_url_matches_browser_encoding() {
        let url = gold().order_url("9779746686607");
        assert_eq!(
            url,
            "https://wa.me/9779746686607?text=\
             Hello!%20I'm%20interested%20in%20ordering%3A%0A%0A\
             *Gold*%0APrice%3A%20NPR%205000%0A%0A\
             *Features%3A*%0A%E2%80%A2%20A%0A%E2%80%A2%20B%0A%0A\
             Please%20let%20me%20know%20the%20next%20steps."
        );
        assert!(url.contains("%0A*Gold*%0APrice%3A%20NPR%205000"));
    }

    #[test]
    fn uri_component_keeps_marks_and_escapes_reserved() {
        assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_uri_component("a b&c=d/e?f#g+h"), "a%20b%26c%3Dd%2Fe%3Ff%23g%2Bh");
        assert_eq!(encode_uri_component("रु"), "%E0%A4%B0%E0%A5%81");
    }

    #[test]
    fn missing_text_falls_back_to_defaults() {
        let snapshot = PackageSnapshot {
            name: Some(String::new()),
            ..PackageSnapshot::default()
        };
        let message = snapshot.order_message();
        assert!(message.contains("*Package*\nPrice: NPR \n"));
        assert!(message.contains("*Features:*\n\n"));
    }

    #[test]
    fn card_text_is_used_verbatim() {
        let padded = PackageSnapshot {
            name: Some("  Gold ".to_string()),
            currency: Some("   ".to_string()),
            ..PackageSnapshot::default()
        };
        let message = padded.order_message();
        assert!(message.contains("*  Gold *\nPrice:     \n"));
    }

    #[test]
    fn toggle_flips_label_and_class() {
        let card = CardState::default();
        assert_eq!(card.toggle_label(), "See More");
        assert_eq!(card.class(), None);
        let open = card.toggled();
        assert_eq!(open.toggle_label(), "See Less");
        assert_eq!(open.class(), Some("expanded"));
        assert_eq!(open.toggled(), card);
    }

    #[test]
    fn toggle_hidden_without_folded_features() {
        assert!(!shows_toggle(0));
        assert!(shows_toggle(3));
    }

    #[test]
    fn plain_whatsapp_link_has_no_query() {
        assert_eq!(whatsapp_url("977", None), "https://wa.me/977");
    }
}
