//! ヘッダー/フッター断片の読み込み
//!
//! 全断片を並行に取得し、失敗した断片はログに出すだけで他は続行する。

use codeaayu_common::fragments::{check_status, ALL_COMPONENTS_LOADED_EVENT, COMPONENT_LOADED_EVENT};
use codeaayu_common::{Error, FragmentOutcome, FragmentSpec, LoadReport, Result, SiteConfig};
use futures::future::join_all;
use gloo::console;

use super::navigation;
use crate::api::http;
use crate::dom;

async fn fetch_fragment(path: &str) -> Result<String> {
    let response = http::get_text(path).await?;
    check_status(response.status, &response.status_text)?;
    Ok(response.body)
}

fn announce(spec: &FragmentSpec) -> Result<()> {
    let detail = serde_wasm_bindgen::to_value(spec).map_err(|e| Error::Dom(e.to_string()))?;
    dom::dispatch(COMPONENT_LOADED_EVENT, Some(&detail))
}

/// 断片1件を読み込んでプレースホルダに差し込む
pub async fn load_fragment(spec: &FragmentSpec) -> FragmentOutcome {
    let Some(placeholder) = dom::by_id(&spec.element_id) else {
        console::warn!(format!("Element with id '{}' not found", spec.element_id));
        return FragmentOutcome::MissingPlaceholder;
    };

    match fetch_fragment(&spec.path).await {
        Ok(html) => {
            placeholder.set_inner_html(&html);
            if let Err(e) = announce(spec) {
                console::warn!(format!("componentLoaded not dispatched for {}: {}", spec.element_id, e));
            }
            FragmentOutcome::Loaded
        }
        Err(e) => {
            console::error!(format!("Error loading component {}: {}", spec.path, e));
            FragmentOutcome::Failed(e.to_string())
        }
    }
}

/// 全断片を並行に読み込む
pub async fn load_all(fragments: &[FragmentSpec]) -> LoadReport {
    let outcomes = join_all(fragments.iter().map(load_fragment)).await;
    fragments.iter().cloned().zip(outcomes).collect()
}

/// 断片を読み込み、ナビを配線してから完了イベントを出す
pub async fn load_and_wire(config: SiteConfig) -> LoadReport {
    let report = load_all(&config.fragments).await;

    navigation::attach(&config);

    if let Err(e) = dom::dispatch(ALL_COMPONENTS_LOADED_EVENT, None) {
        console::warn!(format!("allComponentsLoaded not dispatched: {}", e));
    }
    console::log!(format!(
        "Components loaded: {}/{}",
        report.loaded_count(),
        report.len()
    ));
    report
}
