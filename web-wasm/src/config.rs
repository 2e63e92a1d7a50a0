//! ページ埋め込みの設定読み込み

use codeaayu_common::config::CONFIG_ELEMENT_ID;
use codeaayu_common::SiteConfig;
use gloo::console;

use crate::dom;

/// `<script type="application/json" id="site-config">` から読む
///
/// 無ければ既定値。壊れていればログを出して既定値。
pub fn load() -> SiteConfig {
    let Some(json) = dom::by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return SiteConfig::default();
    };
    if json.trim().is_empty() {
        return SiteConfig::default();
    }

    match SiteConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            console::error!(format!("Invalid site config, using defaults: {}", e));
            SiteConfig::default()
        }
    }
}
