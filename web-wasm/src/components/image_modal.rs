//! 単独画像モーダル
//!
//! 読み込み中はインジケータ、失敗したら失敗メッセージに置き換える。

use codeaayu_common::{ImageLoadState, ImageModal};
use gloo::console;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

#[component]
pub fn ImageModalOverlay(modal: RwSignal<ImageModal>) -> impl IntoView {
    let is_open = move || modal.with(ImageModal::is_open);
    // srcが変わったときだけimgを差し替える（読み込み状態の変化では再描画しない）
    let src = Memo::new(move |_| modal.with(|m| m.src().map(str::to_string)));
    let alt = move || modal.with(|m| m.alt().unwrap_or_default().to_string());
    let load_state = move || modal.with(|m| m.load_state().unwrap_or_default());

    let close = move || modal.update(|m| {
        m.close();
    });

    // 照合は発火元imgのsrcで行う（前に開いた画像のイベントは状態を変えない）
    let settle = move |event: &Event, loaded: bool| {
        let Some(event_src) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|img| img.get_attribute("src"))
        else {
            return;
        };
        if !loaded {
            console::error!(format!("Failed to load image: {}", event_src));
        }
        modal.update(|m| {
            if loaded {
                m.mark_loaded(&event_src);
            } else {
                m.mark_failed(&event_src);
            }
        });
    };

    view! {
        <Show when=is_open>
            <div class="image-modal" on:click=move |_| close()>
                <div class="image-modal-content" on:click=|ev: MouseEvent| ev.stop_propagation()>
                    <div
                        class="image-modal-status"
                        class:failed=move || load_state() == ImageLoadState::Failed
                        style:display=move || {
                            if load_state() == ImageLoadState::Loaded { "none" } else { "block" }
                        }
                    >
                        {move || load_state().indicator_text()}
                    </div>
                    <img
                        class="image-modal-img"
                        class:loaded=move || load_state() == ImageLoadState::Loaded
                        src=move || src.get().unwrap_or_default()
                        alt=alt
                        on:load=move |event| settle(&event, true)
                        on:error=move |event| settle(&event, false)
                    />
                    <span
                        class="image-modal-close"
                        aria-label="Close"
                        on:click=move |ev: MouseEvent| {
                            ev.stop_propagation();
                            close();
                        }
                    >
                        "×"
                    </span>
                </div>
            </div>
        </Show>
    }
}
