//! fetch ラッパー
//!
//! ステータスの判定は呼び出し側で行う（断片は2xx必須、フォームはJSON本文を優先）。

use codeaayu_common::{Error, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::dom::js_error_message;

/// レスポンス（本文はテキストのまま）
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

fn transport(value: JsValue) -> Error {
    Error::Transport(js_error_message(&value))
}

/// GET（断片HTMLの取得）
pub async fn get_text(url: &str) -> Result<HttpResponse> {
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;
    send(request).await
}

/// JSONをPOST
pub async fn post_json(url: &str, body: &str) -> Result<HttpResponse> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(transport)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(transport)?;

    send(request).await
}

async fn send(request: Request) -> Result<HttpResponse> {
    let window = web_sys::window().ok_or_else(|| Error::Dom("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let resp: Response = resp_value.dyn_into().map_err(transport)?;

    let text = JsFuture::from(resp.text().map_err(transport)?)
        .await
        .map_err(transport)?;

    Ok(HttpResponse {
        status: resp.status(),
        status_text: resp.status_text(),
        body: text.as_string().unwrap_or_default(),
    })
}
