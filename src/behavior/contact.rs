use serde::Serialize;
use web_sys::{FormData, HtmlFormElement};

use crate::dom::DomError;

/// Which half of the contact card is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactPanel {
    #[default]
    Fields,
    Success,
}

impl ContactPanel {
    pub fn fields_display(self) -> &'static str {
        match self {
            ContactPanel::Fields => "display: block;",
            ContactPanel::Success => "display: none;",
        }
    }

    pub fn success_display(self) -> &'static str {
        match self {
            ContactPanel::Fields => "display: none;",
            ContactPanel::Success => "display: block;",
        }
    }
}

/// Values typed into the contact form. Nothing is sent anywhere yet;
/// the struct is the payload a future contact endpoint would receive.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactMessage {
    pub fn from_fields(mut field: impl FnMut(&str) -> Option<String>) -> Self {
        let mut read = |name: &str| field(name).unwrap_or_default().trim().to_string();
        ContactMessage {
            name: read("name"),
            email: read("email"),
            phone: read("phone"),
            message: read("message"),
        }
    }

    pub fn read(form: &HtmlFormElement) -> Result<Self, DomError> {
        let data = FormData::new_with_form(form)?;
        Ok(Self::from_fields(|name| data.get(name).as_string()))
    }

    pub fn is_blank(&self) -> bool {
        [&self.name, &self.email, &self.phone, &self.message]
            .iter()
            .all(|value| value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn panels_are_mutually_exclusive() {
        for panel in [ContactPanel::Fields, ContactPanel::Success] {
            let shown = [panel.fields_display(), panel.success_display()]
                .iter()
                .filter(|style| style.contains("block"))
                .count();
            assert_eq!(shown, 1);
        }
        assert_eq!(ContactPanel::default().success_display(), "display: none;");
    }

    #[test]
    fn missing_fields_read_as_empty() {
        let message = ContactMessage::from_fields(|_| None);
        assert!(message.is_blank());
    }

    #[test]
    fn fields_are_trimmed() {
        let values: HashMap<&str, &str> = [("name", "  Sita "), ("email", "sita@example.com")]
            .into_iter()
            .collect();
        let message = ContactMessage::from_fields(|name| values.get(name).map(|v| v.to_string()));
        assert_eq!(message.name, "Sita");
        assert_eq!(message.email, "sita@example.com");
        assert_eq!(message.phone, "");
        assert!(!message.is_blank());

        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["name"], "Sita");
    }
}
