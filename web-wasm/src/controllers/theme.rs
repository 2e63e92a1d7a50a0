//! テーマ切り替え
//!
//! localStorageが使えない環境では保存せず、既定のテーマのまま動く。

use std::cell::Cell;
use std::rc::Rc;

use codeaayu_common::theme::THEME_ATTRIBUTE;
use codeaayu_common::Theme;
use gloo::events::EventListener;
use web_sys::Storage;

use crate::dom;

fn storage() -> Option<Storage> {
    dom::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load(key: &str, fallback: Theme) -> Theme {
    let stored = storage().and_then(|s| s.get_item(key).ok().flatten());
    Theme::from_stored(stored.as_deref(), fallback)
}

pub fn save(key: &str, theme: Theme) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(key, theme.as_str());
    }
}

/// `<html data-theme>` に反映
pub fn apply(theme: Theme) {
    if let Some(root) = dom::document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    }
}

/// 保存済みテーマを反映し、`.theme-toggle` を配線する
pub fn attach(key: String, fallback: Theme) -> Theme {
    let initial = load(&key, fallback);
    apply(initial);

    let current = Rc::new(Cell::new(initial));
    for toggle in dom::query_all(".theme-toggle") {
        let current = Rc::clone(&current);
        let key = key.clone();
        EventListener::new(&toggle, "click", move |_| {
            let next = current.get().toggled();
            current.set(next);
            apply(next);
            save(&key, next);
        })
        .forget();
    }
    initial
}
