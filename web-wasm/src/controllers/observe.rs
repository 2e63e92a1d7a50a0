//! 画面に入った要素への処理（スクロール表示アニメーション・遅延読み込み画像）
//!
//! IntersectionObserverが使えないブラウザでは全要素に即時適用する。

use codeaayu_common::{Error, Result};
use gloo::console;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;

pub const REVEAL_SELECTOR: &str = "[data-aos]";
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub fn reveal(element: &Element) {
    dom::set_class(element, "aos-animate", true);
}

/// `data-src` を `src` に移す
pub fn load_lazy_image(img: &Element) {
    if let Some(src) = img.get_attribute("data-src") {
        let _ = img.set_attribute("src", &src);
    }
    dom::set_class(img, "loaded", true);
    dom::set_class(img, "lazy", false);
}

/// 要素が画面に入ったら `apply` を呼ぶ
///
/// `once` なら適用後に監視をやめる。
fn observe(
    elements: &[Element],
    init: &IntersectionObserverInit,
    once: bool,
    apply: fn(&Element),
) -> Result<()> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            apply(&target);
            if once {
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), init)
        .map_err(|e| Error::Dom(dom::js_error_message(&e)))?;
    callback.forget();

    for element in elements {
        observer.observe(element);
    }
    Ok(())
}

pub fn attach_reveal() {
    let elements = dom::query_all(REVEAL_SELECTOR);
    if elements.is_empty() {
        return;
    }

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);

    if let Err(e) = observe(&elements, &init, false, reveal) {
        console::warn!(format!("Scroll animations disabled: {}", e));
        elements.iter().for_each(reveal);
    }
}

pub fn attach_lazy_images() {
    let images = dom::query_all(LAZY_IMAGE_SELECTOR);
    if images.is_empty() {
        return;
    }

    let init = IntersectionObserverInit::new();
    if let Err(e) = observe(&images, &init, true, load_lazy_image) {
        console::warn!(format!("Lazy loading disabled: {}", e));
        images.iter().for_each(load_lazy_image);
    }
}

pub fn attach() {
    attach_reveal();
    attach_lazy_images();
}
