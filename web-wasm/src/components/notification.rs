//! 通知バナー
//!
//! `Notifier` は各コントローラから呼ばれる表示窓口。
//! 表示は常に1件、一定時間後に自動で2段階消去（フェード → 削除）。

use codeaayu_common::{NotificationCenter, NotificationKind};
use gloo::timers::callback::Timeout;
use leptos::prelude::*;

/// スライドイン/アウトのキーフレーム
pub const NOTIFICATION_STYLES: &str = r#"
@keyframes slideIn {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOut {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(100%); opacity: 0; }
}
"#;

/// 通知の表示窓口（Copyなのでクロージャにそのまま渡せる）
#[derive(Clone, Copy)]
pub struct Notifier {
    center: RwSignal<NotificationCenter>,
    timeout_ms: u32,
    fade_ms: u32,
}

impl Notifier {
    pub fn new(timeout_ms: u32, fade_ms: u32) -> Self {
        Self {
            center: RwSignal::new(NotificationCenter::new()),
            timeout_ms,
            fade_ms,
        }
    }

    pub fn center(&self) -> RwSignal<NotificationCenter> {
        self.center
    }

    /// 表示中の通知を置き換えて表示し、自動消去を予約する
    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) {
        let message = message.into();
        let Some(id) = self.center.try_update(|c| c.show(message, kind)) else {
            return;
        };
        let this = *self;
        Timeout::new(self.timeout_ms, move || this.dismiss(id)).forget();
    }

    /// 消去開始。フェード後に削除する。対象が既に無ければ何もしない
    pub fn dismiss(&self, id: u64) {
        let started = self.center.try_update(|c| c.begin_dismiss(id)).unwrap_or(false);
        if !started {
            return;
        }
        let center = self.center;
        Timeout::new(self.fade_ms, move || {
            center.update(|c| {
                c.remove(id);
            });
        })
        .forget();
    }
}

#[component]
pub fn NotificationBanner(notifier: Notifier) -> impl IntoView {
    let center = notifier.center();
    let fade_ms = notifier.fade_ms;

    move || {
        center.with(|c| c.current().cloned()).map(|notification| {
            let id = notification.id;
            let (background, color, border) = notification.kind.colors();
            let animation = if notification.is_leaving() { "slideOut" } else { "slideIn" };
            let class = if notification.is_leaving() {
                format!("{} leaving", notification.kind.css_class())
            } else {
                notification.kind.css_class()
            };
            let style = format!(
                "position: fixed; top: 20px; right: 20px; z-index: 10000; max-width: 400px; \
                 display: flex; align-items: center; justify-content: space-between; gap: 10px; \
                 padding: 15px 20px; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.15); \
                 background: {}; color: {}; border: 1px solid {}; \
                 animation: {} {}ms ease forwards;",
                background, color, border, animation, fade_ms
            );

            view! {
                <div class=class style=style role="status">
                    <span class="notification-icon">{notification.kind.icon()}</span>
                    <span class="notification-message">{notification.message}</span>
                    <button
                        class="notification-close"
                        aria-label="Close"
                        on:click=move |_| notifier.dismiss(id)
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
