//! スクロール連動（トップへ戻る・ページ内リンク・パララックス）

use codeaayu_common::effects::{anchor_scroll, back_to_top_visible, hero_parallax, AnchorScroll};
use codeaayu_common::SiteConfig;
use gloo::events::{EventListener, EventListenerOptions};

use crate::dom;

pub fn attach_back_to_top(threshold: f64) {
    let Some(button) = dom::query(".back-to-top") else {
        return;
    };

    EventListener::new(&button, "click", |_| dom::smooth_scroll_to(0.0)).forget();

    if let Some(window) = dom::window() {
        let update = move || dom::set_class(&button, "visible", back_to_top_visible(dom::scroll_y(), threshold));
        update();
        EventListener::new(&window, "scroll", move |_| update()).forget();
    }
}

/// `a[href^="#"]` をなめらかにスクロール。対象が無いリンクはブラウザに任せる
pub fn attach_anchor_links(offset: f64) {
    for anchor in dom::query_all("a[href^=\"#\"]") {
        let href = anchor.get_attribute("href").unwrap_or_default();
        EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let target_top = if href.len() > 1 {
                    dom::query(&href).and_then(|target| dom::offset_top(&target))
                } else {
                    None
                };
                match anchor_scroll(&href, target_top, offset) {
                    AnchorScroll::Top => {
                        event.prevent_default();
                        dom::smooth_scroll_to(0.0);
                    }
                    AnchorScroll::To(top) => {
                        event.prevent_default();
                        dom::smooth_scroll_to(top);
                    }
                    AnchorScroll::Ignore => {}
                }
            },
        )
        .forget();
    }
}

pub fn attach_parallax(breakpoint: f64) {
    let Some(hero) = dom::query(".hero") else {
        return;
    };
    let Some(window) = dom::window() else {
        return;
    };

    EventListener::new(&window, "scroll", move |_| {
        let style = hero_parallax(dom::scroll_y(), dom::viewport_width(), dom::viewport_height(), breakpoint);
        if let Some(style) = style {
            dom::set_style(&hero, "transform", &style.transform);
            dom::set_style(&hero, "opacity", &style.opacity.to_string());
        }
    })
    .forget();
}

pub fn attach(config: &SiteConfig) {
    attach_back_to_top(config.back_to_top_threshold);
    attach_anchor_links(config.anchor_offset);
    attach_parallax(config.mobile_breakpoint);
}
