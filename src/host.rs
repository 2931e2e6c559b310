//! Narrow wrappers over the browser document: measuring, scrolling, focusing
//! and scoped style sheets. Every lookup degrades to a no-op when the node
//! or window is missing.

use stylist::Style;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementBox {
    pub left: f64,
    pub width: f64,
}

pub fn measure_element(node: &NodeRef) -> Option<ElementBox> {
    let element = node.cast::<HtmlElement>()?;
    Some(ElementBox {
        left: element.offset_left() as f64,
        width: element.offset_width() as f64,
    })
}

/// Smooth-scrolls so the element with `id` lands `offset` pixels below the viewport top.
pub fn scroll_into_view(id: &str, offset: f64) {
    let Some(window) = window() else { return };
    let Some(element) = window.document().and_then(|doc| doc.get_element_by_id(id)) else {
        log::debug!("scroll target #{} not in document", id);
        return;
    };
    let page_y = window.page_y_offset().unwrap_or(0.0);
    let top = element.get_bounding_client_rect().top() + page_y - offset;

    let options = ScrollToOptions::new();
    options.set_top(top.max(0.0));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn focus(node: &NodeRef) {
    if let Some(element) = node.cast::<HtmlElement>() {
        let _ = element.focus();
    }
}

/// Owns a mounted style sheet and removes it from the document when dropped.
pub struct StyleGuard {
    style: Style,
}

impl StyleGuard {
    pub fn class_name(&self) -> &str {
        self.style.get_class_name()
    }
}

impl Drop for StyleGuard {
    fn drop(&mut self) {
        self.style.unregister();
    }
}

pub fn inject_style(css: &str) -> Result<StyleGuard, stylist::Error> {
    let style = Style::new(css)?;
    Ok(StyleGuard { style })
}

/// Mounts `css` for as long as the calling component lives (or until `css` changes).
/// Returns the generated scope class to put on the root element.
#[hook]
pub fn use_scoped_style(css: Option<&'static str>) -> Option<String> {
    let guard = use_memo(
        |css| {
            (*css).and_then(|css| match inject_style(css) {
                Ok(guard) => Some(guard),
                Err(e) => {
                    log::error!("Failed to mount scoped style: {}", e);
                    None
                }
            })
        },
        css,
    );
    match &*guard {
        Some(guard) => Some(guard.class_name().to_string()),
        None => None,
    }
}
