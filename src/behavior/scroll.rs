use log::debug;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::{HEADER_OFFSET, SPY_LEAD, STICKY_THRESHOLD};
use crate::dom::{self, DomError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderState {
    #[default]
    Static,
    Stuck,
}

impl HeaderState {
    pub fn at(scroll_y: f64) -> Self {
        if scroll_y >= STICKY_THRESHOLD {
            HeaderState::Stuck
        } else {
            HeaderState::Static
        }
    }

    pub fn class(self) -> Option<&'static str> {
        (self == HeaderState::Stuck).then_some("scrolled")
    }
}

/// Vertical range of a page section during which its nav link is highlighted.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBand {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

impl SectionBand {
    pub fn from_layout(id: impl Into<String>, offset_top: f64, offset_height: f64) -> Self {
        let top = offset_top - SPY_LEAD;
        SectionBand {
            id: id.into(),
            top,
            bottom: top + offset_height,
        }
    }

    /// Lower edge exclusive so adjacent sections never both claim a boundary.
    pub fn contains(&self, scroll_y: f64) -> bool {
        scroll_y > self.top && scroll_y <= self.bottom
    }
}

/// Ids of every section whose band holds `scroll_y`.
pub fn active_sections(bands: &[SectionBand], scroll_y: f64) -> Vec<String> {
    bands
        .iter()
        .filter(|band| band.contains(scroll_y))
        .map(|band| band.id.clone())
        .collect()
}

/// Nav links point at sections by partial href match (`href*=id`).
pub fn link_targets(href: &str, section_id: &str) -> bool {
    !section_id.is_empty() && href.contains(section_id)
}

/// Window offset that brings an anchor target just below the fixed header.
pub fn anchor_scroll_top(target_rect_top: f64, page_y_offset: f64) -> f64 {
    target_rect_top + page_y_offset - HEADER_OFFSET
}

/// Selector for a same-page link, or `None` when there is nothing to jump to.
pub fn anchor_selector(href: &str) -> Option<&str> {
    match href {
        "" | "#" => None,
        href if href.starts_with('#') => Some(href),
        _ => None,
    }
}

/// Measures every `section[id]` currently in the document.
pub fn read_section_bands() -> Result<Vec<SectionBand>, DomError> {
    let bands = dom::query_all("section[id]")?
        .into_iter()
        .filter_map(|section| {
            let id = section.id();
            let html = section.dyn_into::<HtmlElement>().ok()?;
            Some(SectionBand::from_layout(
                id,
                f64::from(html.offset_top()),
                f64::from(html.offset_height()),
            ))
        })
        .collect();
    Ok(bands)
}

/// Smoothly scrolls to the element `href` names. Returns whether a target was found.
pub fn scroll_to_anchor(href: &str) -> Result<bool, DomError> {
    let Some(selector) = anchor_selector(href) else {
        return Ok(false);
    };
    let target = match dom::document()?.query_selector(selector) {
        Ok(Some(target)) => target,
        // Hrefs like "#!" are not valid selectors; treat them as unresolved.
        Ok(None) | Err(_) => return Ok(false),
    };
    let top = anchor_scroll_top(target.get_bounding_client_rect().top(), dom::scroll_y()?);
    debug!("Scrolling to {} at {}px", selector, top);
    dom::smooth_scroll_to(top)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBand> {
        vec![
            SectionBand::from_layout("home", 0.0, 600.0),
            SectionBand::from_layout("services", 600.0, 800.0),
            SectionBand::from_layout("packages", 1400.0, 900.0),
            SectionBand::from_layout("contact", 2300.0, 700.0),
        ]
    }

    #[test]
    fn sticky_boundary_is_inclusive() {
        assert_eq!(HeaderState::at(49.9), HeaderState::Static);
        assert_eq!(HeaderState::at(50.0), HeaderState::Stuck);
        assert_eq!(HeaderState::at(51.0).class(), Some("scrolled"));
        assert_eq!(HeaderState::at(0.0).class(), None);
    }

    #[test]
    fn band_is_led_by_one_hundred_pixels() {
        let band = SectionBand::from_layout("services", 600.0, 800.0);
        assert_eq!(band.top, 500.0);
        assert_eq!(band.bottom, 1300.0);
        assert!(!band.contains(500.0));
        assert!(band.contains(500.5));
        assert!(band.contains(1300.0));
        assert!(!band.contains(1300.5));
    }

    #[test]
    fn exactly_one_section_is_active() {
        let bands = page();
        assert_eq!(active_sections(&bands, 10.0), vec!["home"]);
        assert_eq!(active_sections(&bands, 1000.0), vec!["services"]);
        assert_eq!(active_sections(&bands, 1300.0), vec!["services"]);
        assert_eq!(active_sections(&bands, 1301.0), vec!["packages"]);
        assert_eq!(active_sections(&bands, 2900.0), vec!["contact"]);
    }

    #[test]
    fn nothing_active_outside_all_bands() {
        let bands = page();
        assert!(active_sections(&bands, -100.0).is_empty());
        assert!(active_sections(&bands, 5000.0).is_empty());
    }

    #[test]
    fn links_match_by_partial_href() {
        assert!(link_targets("#packages", "packages"));
        assert!(link_targets("/#contact", "contact"));
        assert!(!link_targets("#services", "packages"));
        assert!(!link_targets("#services", ""));
    }

    #[test]
    fn anchor_offset_compensates_for_header() {
        assert_eq!(anchor_scroll_top(400.0, 1000.0), 1330.0);
        assert_eq!(anchor_scroll_top(-200.0, 1000.0), 730.0);
    }

    #[test]
    fn bare_hash_has_no_target() {
        assert_eq!(anchor_selector("#"), None);
        assert_eq!(anchor_selector(""), None);
        assert_eq!(anchor_selector("https://wa.me/1"), None);
        assert_eq!(anchor_selector("#contact"), Some("#contact"));
    }
}
