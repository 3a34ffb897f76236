#![forbid(unsafe_code)]

//! `StyleSink` implementation over the real DOM.

use condstyle::StyleSink;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// CSS class stamped on every generated `<style>` element.
const STYLE_CLASS: &str = "addon-style";
/// Attribute carrying the precedence marker.
const PRECEDENCE_ATTR: &str = "data-precedence";
/// Attribute listing the currently enabled addon ids (diagnostic only).
const ENABLED_ATTR: &str = "data-addons";

/// Style sink writing `<style>` elements into a hidden container `<div>`.
pub struct DomSink {
    document: Document,
    container: Element,
}

impl DomSink {
    /// Create the hidden container and mount it as the first child of
    /// `<body>`.
    ///
    /// # Errors
    /// Fails when the document has no `<body>` or the container cannot be
    /// created or inserted.
    pub fn mount(document: &Document) -> Result<Self, JsValue> {
        let container = document.create_element("div")?;
        container.set_attribute("style", "display: none")?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no <body>"))?;
        body.insert_before(&container, body.first_child().as_ref())?;
        Ok(Self {
            document: document.clone(),
            container,
        })
    }

    /// The container element owning all generated `<style>` elements.
    pub fn container(&self) -> &Element {
        &self.container
    }
}

impl StyleSink for DomSink {
    type Element = Element;

    fn create(&mut self, css: &str, precedence: u32) -> Element {
        let element = self
            .document
            .create_element("style")
            .expect("creating a <style> element cannot fail");
        element.set_class_name(STYLE_CLASS);
        set_attr(&element, PRECEDENCE_ATTR, &precedence.to_string());
        element.set_text_content(Some(css));
        element
    }

    fn set_precedence(&mut self, element: &Element, precedence: u32) {
        set_attr(element, PRECEDENCE_ATTR, &precedence.to_string());
    }

    fn set_enabled(&mut self, element: &Element, owners: &str) {
        set_attr(element, ENABLED_ATTR, owners);
    }

    fn insert(&mut self, element: &Element, precedence: u32) {
        let children = self.container.children();
        for index in 0..children.length() {
            let Some(child) = children.item(index) else {
                continue;
            };
            if sibling_precedence(&child) >= precedence {
                // `insert_before` moves an attached element; inserting it
                // before itself leaves it in place.
                self.container
                    .insert_before(element, Some(child.as_ref()))
                    .expect("insert_before with an in-container reference cannot fail");
                return;
            }
        }
        self.container
            .append_child(element)
            .expect("appending a <style> element cannot fail");
    }

    fn remove(&mut self, element: &Element) {
        element.remove();
    }
}

/// Precedence marker of a sibling, 0 when absent or non-numeric.
fn sibling_precedence(element: &Element) -> u32 {
    element
        .get_attribute(PRECEDENCE_ATTR)
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}

fn set_attr(element: &Element, name: &str, value: &str) {
    element
        .set_attribute(name, value)
        .expect("setting a data attribute cannot fail");
}
