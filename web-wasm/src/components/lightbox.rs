//! ライトボックスコンポーネント

use codeaayu_common::{ImageDescriptor, LightboxViewer};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[component]
pub fn LightboxOverlay(viewer: RwSignal<LightboxViewer>) -> impl IntoView {
    let is_open = move || viewer.with(LightboxViewer::is_open);
    let has_many = move || viewer.with(|v| v.len() > 1);

    let src = move || {
        viewer.with(|v| v.current().map(|image| image.display_src().to_string()).unwrap_or_default())
    };
    let alt = move || viewer.with(|v| v.current().map(|image| image.alt.clone()).unwrap_or_default());
    let caption = move || viewer.with(|v| v.current().map(ImageDescriptor::caption).unwrap_or_default());
    let counter = move || viewer.with(|v| format!("{} / {}", v.current_index() + 1, v.len()));

    let close = move || viewer.update(|v| {
        v.close();
    });

    view! {
        <div
            id="lightbox"
            class="lightbox"
            class:open=is_open
            style:display=move || if is_open() { "block" } else { "none" }
            on:click=move |_| close()
        >
            <span
                class="lightbox-close"
                aria-label="Close"
                on:click=move |ev: MouseEvent| {
                    ev.stop_propagation();
                    close();
                }
            >
                "×"
            </span>

            <Show when=has_many>
                <button
                    class="lightbox-prev"
                    aria-label="Previous image"
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        viewer.update(LightboxViewer::previous);
                    }
                >
                    "‹"
                </button>
                <button
                    class="lightbox-next"
                    aria-label="Next image"
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        viewer.update(LightboxViewer::next);
                    }
                >
                    "›"
                </button>
                <div class="lightbox-counter">{counter}</div>
            </Show>

            // 画像自体のクリックでは閉じない
            <img
                id="lightbox-img"
                class="lightbox-content"
                src=src
                alt=alt
                on:click=|ev: MouseEvent| ev.stop_propagation()
            />
            <div
                id="lightbox-caption"
                class="lightbox-caption"
                on:click=|ev: MouseEvent| ev.stop_propagation()
            >
                {caption}
            </div>
        </div>
    }
}
