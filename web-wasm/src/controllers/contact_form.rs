//! お問い合わせフォーム
//!
//! 検証 → 送信中表示 → POST → 結果通知 → 元に戻す。
//! 送信中の二重送信は `SubmissionGuard` で弾く。

use std::cell::RefCell;
use std::rc::Rc;

use codeaayu_common::contact::{BUSY_LABEL, FAILURE_MESSAGE, SUCCESS_MESSAGE};
use codeaayu_common::{ContactSubmission, NotificationKind, SubmissionGuard};
use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, FormData, HtmlButtonElement, HtmlFormElement};

use crate::api::forms;
use crate::components::notification::Notifier;
use crate::dom;

pub const FORM_ID: &str = "contactForm";

/// フォームの全項目を読み取る（hidden含む。ファイルは対象外）
pub fn read_fields(form: &HtmlFormElement) -> Option<ContactSubmission> {
    let data = FormData::new_with_form(form).ok()?;
    let entries = js_sys::try_iter(&data).ok()??;

    let mut submission = ContactSubmission::new();
    for entry in entries.flatten() {
        let pair: js_sys::Array = entry.unchecked_into();
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            submission.insert(name, value);
        }
    }
    Some(submission)
}

/// 送信ボタンの送信中表示
pub struct SubmitButton {
    button: HtmlButtonElement,
    label: Element,
    original: String,
}

impl SubmitButton {
    pub fn find(form: &HtmlFormElement) -> Option<Self> {
        let button = dom::query_within(form, "button[type=\"submit\"]")?
            .dyn_into::<HtmlButtonElement>()
            .ok()?;
        // 中にspanがあればそのテキストだけ差し替える
        let label = dom::query_within(&button, "span").unwrap_or_else(|| button.clone().into());
        let original = label.text_content().unwrap_or_default();
        Some(Self { button, label, original })
    }

    pub fn set_busy(&self) {
        self.button.set_disabled(true);
        self.label.set_text_content(Some(BUSY_LABEL));
    }

    pub fn restore(&self) {
        self.button.set_disabled(false);
        self.label.set_text_content(Some(&self.original));
    }
}

/// 送信ハンドラを配線する。フォームが無ければfalse
pub fn attach(endpoint: String, notifier: Notifier) -> bool {
    let Some(form) = dom::by_id(FORM_ID).and_then(|el| el.dyn_into::<HtmlFormElement>().ok()) else {
        return false;
    };

    let guard = Rc::new(RefCell::new(SubmissionGuard::default()));
    let endpoint = Rc::new(endpoint);
    let target = form.clone();

    EventListener::new_with_options(
        &target,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();

            let Some(submission) = read_fields(&form) else {
                console::error!("Failed to read contact form fields");
                return;
            };
            if let Err(invalid) = submission.validate() {
                notifier.show(invalid.to_string(), NotificationKind::Error);
                return;
            }
            if !guard.borrow_mut().begin() {
                return;
            }

            let button = SubmitButton::find(&form);
            if let Some(button) = &button {
                button.set_busy();
            }

            let form = form.clone();
            let guard = Rc::clone(&guard);
            let endpoint = Rc::clone(&endpoint);
            spawn_local(async move {
                match forms::submit(&endpoint, &submission).await {
                    Ok(()) => {
                        notifier.show(SUCCESS_MESSAGE, NotificationKind::Success);
                        form.reset();
                    }
                    Err(e) => {
                        console::error!(format!("Form submission error: {}", e));
                        notifier.show(FAILURE_MESSAGE, NotificationKind::Error);
                    }
                }

                guard.borrow_mut().finish();
                if let Some(button) = button {
                    button.restore();
                }
            });
        },
    )
    .forget();

    true
}
