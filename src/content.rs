pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", href: "#home" },
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "Packages", href: "#packages" },
    NavLink { label: "Why Us", href: "#why-choose" },
    NavLink { label: "Contact", href: "#contact" },
];

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🌐",
        title: "Website Design",
        description: "Responsive, fast websites that look right on every phone, tablet and desktop.",
    },
    Service {
        icon: "🛒",
        title: "E-commerce",
        description: "Online stores with product catalogues, carts and local payment gateways.",
    },
    Service {
        icon: "📈",
        title: "SEO & Marketing",
        description: "Get found on Google and grow through social media campaigns.",
    },
    Service {
        icon: "🛠️",
        title: "Maintenance",
        description: "Updates, backups and security monitoring so your site keeps running.",
    },
];

pub struct Package {
    pub name: &'static str,
    pub currency: &'static str,
    pub amount: &'static str,
    pub period: &'static str,
    pub tagline: &'static str,
    pub features: &'static [&'static str],
    /// Features shown before the card is expanded.
    pub visible: usize,
    pub featured: bool,
}

impl Package {
    pub fn hidden_features(&self) -> usize {
        self.features.len().saturating_sub(self.visible)
    }
}

pub const PACKAGES: &[Package] = &[
    Package {
        name: "Landing Page",
        currency: "NPR",
        amount: "9,999",
        period: "one-time",
        tagline: "A single page to get your business online.",
        features: &[
            "1 page responsive design",
            "Contact form",
            "WhatsApp chat button",
            "Free SSL certificate",
        ],
        visible: 4,
        featured: false,
    },
    Package {
        name: "Business",
        currency: "NPR",
        amount: "24,999",
        period: "one-time",
        tagline: "Everything a growing local business needs.",
        features: &[
            "Up to 6 pages",
            "Responsive design",
            "Contact form",
            "Google Maps integration",
            "Basic SEO setup",
            "Social media links",
            "1 year free hosting",
            "3 months of support",
        ],
        visible: 5,
        featured: true,
    },
    Package {
        name: "E-commerce",
        currency: "NPR",
        amount: "49,999",
        period: "one-time",
        tagline: "Sell online with a complete store.",
        features: &[
            "Unlimited products",
            "Shopping cart & checkout",
            "eSewa / Khalti payments",
            "Order management dashboard",
            "Inventory tracking",
            "Advanced SEO",
            "1 year free hosting",
            "6 months of support",
        ],
        visible: 5,
        featured: false,
    },
];

pub struct Reason {
    pub title: &'static str,
    pub description: &'static str,
}

pub const REASONS: &[Reason] = &[
    Reason {
        title: "Fast delivery",
        description: "Most sites go live within two weeks of the first meeting.",
    },
    Reason {
        title: "Local support",
        description: "Talk to us in Nepali or English, by phone or WhatsApp.",
    },
    Reason {
        title: "Fair pricing",
        description: "One-time prices with no hidden monthly fees.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::packages::shows_toggle;

    #[test]
    fn every_section_has_a_nav_link() {
        for id in ["home", "services", "packages", "why-choose", "contact"] {
            assert!(NAV_LINKS.iter().any(|link| link.href == format!("#{}", id)));
        }
    }

    #[test]
    fn single_page_package_hides_its_toggle() {
        let landing = &PACKAGES[0];
        assert_eq!(landing.hidden_features(), 0);
        assert!(!shows_toggle(landing.hidden_features()));
        assert!(PACKAGES[1..]
            .iter()
            .all(|package| shows_toggle(package.hidden_features())));
    }
}
