//! アプリケーション本体
//!
//! 既存ページに各コントローラを配線し、オーバーレイと通知だけをLeptosで描画する。

use codeaayu_common::{ImageModal, KeyAction, LightboxViewer, SiteConfig};
use gloo::console;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::image_modal::ImageModalOverlay;
use crate::components::lightbox::LightboxOverlay;
use crate::components::notification::{NotificationBanner, Notifier, NOTIFICATION_STYLES};
use crate::controllers::{contact_form, filter, fragments, gallery, observe, page, scroll, theme};
use crate::dom;

/// キー入力を開いているオーバーレイに渡す
///
/// モーダルがライトボックスの上に重なるので先に見る。
/// どちらも閉じていれば何もしない。処理したらtrue。
pub fn dispatch_key(key: &str, viewer: RwSignal<LightboxViewer>, modal: RwSignal<ImageModal>) -> bool {
    let Some(action) = KeyAction::from_key(key) else {
        return false;
    };
    if modal.with_untracked(ImageModal::is_open) {
        modal.try_update(|m| m.handle_key(action)).unwrap_or(false)
    } else if viewer.with_untracked(LightboxViewer::is_open) {
        viewer.try_update(|v| v.handle_key(action)).unwrap_or(false)
    } else {
        false
    }
}

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let notifier = Notifier::new(config.notification_timeout_ms, config.notification_fade_ms);

    // ギャラリーは起動時に一度だけ読み取る
    let (thumbnails, images) = gallery::capture_thumbnails();
    let has_gallery = !images.is_empty();
    let viewer = RwSignal::new(LightboxViewer::new(images));
    let modal = RwSignal::new(ImageModal::default());

    if has_gallery {
        gallery::attach_thumbnails(&thumbnails, viewer);
    }
    let clickable = gallery::attach_clickable_images(modal);

    theme::attach(config.theme_storage_key.clone(), config.default_theme);
    let filtering = filter::attach().is_some();
    let has_form = contact_form::attach(config.form_endpoint.clone(), notifier);
    scroll::attach(&config);
    page::attach(config.loader_delay_ms);
    observe::attach();

    console::log!(format!(
        "Site ready: {} gallery images, {} clickable images, filter {}, contact form {}",
        thumbnails.len(),
        clickable,
        if filtering { "on" } else { "off" },
        if has_form { "on" } else { "off" },
    ));

    let _ = window_event_listener(ev::keydown, move |event| {
        dispatch_key(&event.key(), viewer, modal);
    });

    Effect::new(move |_| {
        let locked = viewer.with(LightboxViewer::is_open) || modal.with(ImageModal::is_open);
        dom::set_scroll_locked(locked);
    });

    spawn_local(async move {
        fragments::load_and_wire(config).await;
    });

    view! {
        <style>{NOTIFICATION_STYLES}</style>
        <Show when=move || has_gallery>
            <LightboxOverlay viewer=viewer />
        </Show>
        <ImageModalOverlay modal=modal />
        <NotificationBanner notifier=notifier />
    }
}
