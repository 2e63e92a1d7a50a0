//! DOMヘルパー
//!
//! 要素が無い・APIが使えない場合はNoneや何もしないで返し、パニックしない。

use codeaayu_common::Error;
use wasm_bindgen::prelude::*;
use web_sys::{CustomEvent, CustomEventInit, Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn by_id(id: &str) -> Option<Element> {
    document().and_then(|d| d.get_element_by_id(id))
}

pub fn query(selector: &str) -> Option<Element> {
    document().and_then(|d| d.query_selector(selector).ok().flatten())
}

/// セレクタに一致する要素（文書順）。不正なセレクタは空
pub fn query_all(selector: &str) -> Vec<Element> {
    match document().map(|d| d.query_selector_all(selector)) {
        Some(Ok(list)) => (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        _ => Vec::new(),
    }
}

pub fn query_within(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn clear_style(element: &Element, property: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().remove_property(property);
    }
}

/// オーバーレイ表示中はページのスクロールを止める
pub fn set_scroll_locked(locked: bool) {
    let Some(body) = document().and_then(|d| d.body()) else {
        return;
    };
    if locked {
        set_style(&body, "overflow", "hidden");
    } else {
        clear_style(&body, "overflow");
    }
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn offset_top(element: &Element) -> Option<f64> {
    element.dyn_ref::<HtmlElement>().map(|html| f64::from(html.offset_top()))
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// `document` にカスタムイベントを発火
pub fn dispatch(name: &str, detail: Option<&JsValue>) -> Result<(), Error> {
    let document = document().ok_or_else(|| Error::Dom("document is not available".into()))?;
    let init = CustomEventInit::new();
    if let Some(detail) = detail {
        init.set_detail(detail);
    }
    let event = CustomEvent::new_with_event_init_dict(name, &init).map_err(dom_error)?;
    document.dispatch_event(&event).map_err(dom_error)?;
    Ok(())
}

/// JsValueのエラーを文字列に
pub fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

pub fn dom_error(value: JsValue) -> Error {
    Error::Dom(js_error_message(&value))
}
