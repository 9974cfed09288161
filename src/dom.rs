use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Window,
};

/// Failure to reach something the page markup is expected to provide.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element `{0}` is not of the expected type")]
    WrongType(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// All elements under `document` matching `selector`, in document order.
pub fn query_all(selector: &str) -> Result<Vec<Element>, DomError> {
    let list = document()?.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Text content of the first `selector` match below `parent`, as rendered.
pub fn text_in(parent: &Element, selector: &str) -> Option<String> {
    parent
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
}

/// Sets inline style properties on an element, stopping at the first failure.
pub fn set_styles(element: &Element, properties: &[(&str, &str)]) -> Result<(), DomError> {
    let html = element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| DomError::WrongType(element.tag_name()))?;
    let style = html.style();
    for (name, value) in properties {
        style.set_property(name, value)?;
    }
    Ok(())
}

pub fn scroll_y() -> Result<f64, DomError> {
    Ok(window()?.scroll_y()?)
}

pub fn smooth_scroll_to(top: f64) -> Result<(), DomError> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

pub fn smooth_scroll_into_view(element: &Element, block: ScrollLogicalPosition) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(block);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn open_in_new_tab(url: &str) -> Result<(), DomError> {
    window()?.open_with_url_and_target(url, "_blank")?;
    Ok(())
}
