//! ギャラリーのサムネイルとクリック可能画像
//!
//! 初期化時にDOMを一度だけ読み取り、`ImageSet` に取り込む。

use codeaayu_common::{ImageDescriptor, ImageModal, ImageSet, LightboxViewer};
use gloo::console;
use gloo::events::EventListener;
use leptos::prelude::*;
use web_sys::Element;

use crate::dom;

pub const THUMBNAIL_SELECTOR: &str = ".gallery-item img";
pub const CLICKABLE_SELECTOR: &str = ".clickable-image";

fn text_of(root: &Element, selector: &str) -> Option<String> {
    dom::query_within(root, selector).and_then(|el| el.text_content())
}

/// サムネイルのsrc。遅延読み込み前（`src` が空）なら `data-src`
fn thumbnail_src(img: &Element) -> String {
    img.get_attribute("src")
        .filter(|src| !src.trim().is_empty())
        .or_else(|| img.get_attribute("data-src"))
        .unwrap_or_default()
}

/// サムネイル1枚分を読み取る
///
/// キャプションはサムネイルの親（`.gallery-item`）内の `.gallery-overlay` の h3/p。
pub fn describe(img: &Element) -> ImageDescriptor {
    let thumbnail = thumbnail_src(img);
    let mut image = ImageDescriptor::new(thumbnail).with_alt(img.get_attribute("alt").unwrap_or_default());
    if let Some(full) = img.get_attribute("data-full") {
        image = image.with_full(full);
    }

    let overlay = img
        .parent_element()
        .and_then(|item| dom::query_within(&item, ".gallery-overlay"));
    if let Some(overlay) = overlay {
        let title = text_of(&overlay, "h3");
        let subtitle = text_of(&overlay, "p");
        image = image.with_caption(title.as_deref(), subtitle.as_deref());
    }
    image
}

/// `.gallery-item img` を文書順に取り込む
pub fn capture_thumbnails() -> (Vec<Element>, ImageSet) {
    let thumbnails = dom::query_all(THUMBNAIL_SELECTOR);
    let images = thumbnails.iter().map(describe).collect();
    (thumbnails, images)
}

/// サムネイルのクリックでライトボックスを開く
pub fn attach_thumbnails(thumbnails: &[Element], viewer: RwSignal<LightboxViewer>) {
    for (index, thumbnail) in thumbnails.iter().enumerate() {
        dom::set_style(thumbnail, "cursor", "pointer");
        EventListener::new(thumbnail, "click", move |_| {
            viewer.update(|v| {
                v.open(index);
            });
        })
        .forget();
    }
}

/// `.clickable-image` のクリックで単独モーダルを開く
///
/// `data-full` が無い要素はクリック時にエラーを出すだけ。
pub fn attach_clickable_images(modal: RwSignal<ImageModal>) -> usize {
    let images = dom::query_all(CLICKABLE_SELECTOR);
    for image in &images {
        let full = image.get_attribute("data-full").filter(|src| !src.trim().is_empty());
        let alt = image.get_attribute("alt").unwrap_or_default();
        EventListener::new(image, "click", move |_| match &full {
            Some(src) => modal.update(|m| m.open(src.clone(), alt.clone())),
            None => console::error!("No data-full attribute found on image"),
        })
        .forget();
    }
    images.len()
}
