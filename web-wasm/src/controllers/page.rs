//! ページ全体の小さな演出

use codeaayu_common::effects::{magnetic_offset, magnetic_transform};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::dom;

/// windowのload後、一定時間でローディング画面を隠す
pub fn attach_loader(delay_ms: u32) {
    let Some(loader) = dom::query(".loader-wrapper") else {
        return;
    };
    let Some(window) = dom::window() else {
        return;
    };

    let complete = dom::document()
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(false);
    if complete {
        Timeout::new(delay_ms, move || dom::set_class(&loader, "hidden", true)).forget();
        return;
    }

    EventListener::once(&window, "load", move |_| {
        Timeout::new(delay_ms, move || dom::set_class(&loader, "hidden", true)).forget();
    })
    .forget();
}

/// `.btn` がポインタに少し引き寄せられる
pub fn attach_magnetic_buttons() {
    for button in dom::query_all(".btn") {
        let target = button.clone();
        EventListener::new(&button, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let rect = target.get_bounding_client_rect();
            let offset = magnetic_offset(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                (rect.left(), rect.top(), rect.width(), rect.height()),
            );
            dom::set_style(&target, "transform", &magnetic_transform(offset));
        })
        .forget();

        let target = button.clone();
        EventListener::new(&button, "mouseleave", move |_| {
            dom::clear_style(&target, "transform");
        })
        .forget();
    }
}

/// `.video-thumbnail` のクリックで同じカード内の `.video-link` を新しいタブで開く
pub fn attach_video_thumbnails() {
    for thumbnail in dom::query_all(".video-thumbnail") {
        let link = thumbnail
            .closest(".video-card")
            .ok()
            .flatten()
            .and_then(|card| dom::query_within(&card, ".video-link"))
            .and_then(|link| link.get_attribute("href"));
        let Some(href) = link else {
            continue;
        };
        dom::set_style(&thumbnail, "cursor", "pointer");
        EventListener::new(&thumbnail, "click", move |_| {
            if let Some(window) = dom::window() {
                let _ = window.open_with_url_and_target(&href, "_blank");
            }
        })
        .forget();
    }
}

pub fn attach(loader_delay_ms: u32) {
    attach_loader(loader_delay_ms);
    attach_magnetic_buttons();
    attach_video_thumbnails();
}
