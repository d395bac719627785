use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::layout::{LayoutSource, Rect, Viewport};
use crate::scene::{Divider, Floor, Scene};

/// Live page geometry read straight from the DOM.
#[derive(Clone)]
pub struct DomLayout {
    window: Window,
}

impl DomLayout {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl LayoutSource for DomLayout {
    type Handle = HtmlElement;

    fn viewport(&self) -> Viewport {
        Viewport {
            scroll_y: self.window.scroll_y().unwrap_or(0.0),
            height: self.window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0),
        }
    }

    fn offset_top(&self, el: &HtmlElement) -> f64 {
        el.offset_top() as f64
    }

    fn offset_height(&self, el: &HtmlElement) -> f64 {
        el.offset_height() as f64
    }

    fn bounding_box(&self, el: &HtmlElement) -> Rect {
        let r = el.get_bounding_client_rect();
        Rect::new(r.top(), r.height())
    }
}

pub fn query(root: &impl AsRef<Element>, selector: &str) -> Option<HtmlElement> {
    root.as_ref().query_selector(selector).ok()??.dyn_into().ok()
}

pub fn query_doc(document: &Document, selector: &str) -> Option<HtmlElement> {
    document.query_selector(selector).ok()??.dyn_into().ok()
}

pub fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id)?.dyn_into().ok()
}

pub fn set_style(el: &HtmlElement, prop: &str, value: &str) {
    // Writes only fail on read-only declarations, which ours never are.
    let _ = el.style().set_property(prop, value);
}

pub fn set_text(el: &HtmlElement, text: &str) {
    el.set_text_content(Some(text));
}

pub fn toggle_class(el: &HtmlElement, class: &str, on: bool) -> Result<(), JsValue> {
    el.class_list().toggle_with_force(class, on)?;
    Ok(())
}

/// Builds the scene from the page's static markup.
pub fn discover_scene(document: &Document) -> Scene<HtmlElement> {
    let floors = query_all(document, "section.floor")
        .into_iter()
        .map(|section| Floor {
            card: query(&section, ".floor-card"),
            cover: query(&section, ".cover"),
            heading: query(&section, "h3").map(|h| h.text_content().unwrap_or_default()),
            section,
        })
        .collect();
    let dividers = query_all(document, ".divider")
        .into_iter()
        .map(|div| Divider { line: query(&div, ".fc-line"), panel: query(&div, ".pol-potolok") })
        .collect();
    Scene { floors, dividers }
}
