use anyhow::anyhow;
use portrait_core::style::{Layer, Style};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn create<T: JsCast>(document: &web::Document, tag: &str) -> anyhow::Result<T> {
    document
        .create_element(tag)
        .map_err(|e| anyhow!("create <{}>: {:?}", tag, e))?
        .dyn_into::<T>()
        .map_err(|_| anyhow!("<{}> has unexpected element type", tag))
}

pub fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow!("append child: {:?}", e))
}

/// Copy every declaration onto the element's inline style. Custom properties
/// (`--name`) go through the same call.
pub fn apply_style(el: &web::HtmlElement, style: &Style) {
    let decl = el.style();
    for (name, value) in style.iter() {
        if let Err(e) = decl.set_property(name, value) {
            log::warn!("[dom] set {}: {:?}", name, e);
        }
    }
}

pub fn apply_layer(el: &web::HtmlElement, layer: &Layer) {
    if el.class_name() != layer.class {
        el.set_class_name(&layer.class);
    }
    apply_style(el, &layer.style);
}

#[inline]
pub fn set_visible(el: &web::HtmlElement, visible: bool) {
    let decl = el.style();
    let result = if visible {
        decl.remove_property("display").map(|_| ())
    } else {
        decl.set_property("display", "none")
    };
    if let Err(e) = result {
        log::warn!("[dom] toggle visibility: {:?}", e);
    }
}

/// `data-<key>` attribute lookup, in the shape the config parser expects.
pub fn data_attribute(el: &web::Element, key: &str) -> Option<String> {
    el.get_attribute(&format!("data-{}", key))
}
