//! サイト設定
//!
//! ページに埋め込まれた `<script type="application/json" id="site-config">` で
//! 一部だけ上書きできる。書かれていない項目は既定値のまま。

use crate::error::{Error, Result};
use crate::fragments::{default_fragments, FragmentSpec};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};

/// 設定を埋め込むscript要素のid
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// フォーム送信先（Web3Forms）
pub const DEFAULT_FORM_ENDPOINT: &str = "https://api.web3forms.com/submit";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    /// お問い合わせフォームのPOST先
    pub form_endpoint: String,
    /// 読み込むヘッダー/フッター断片
    pub fragments: Vec<FragmentSpec>,
    /// 通知の自動消去までの時間(ms)
    pub notification_timeout_ms: u32,
    /// 通知のフェードアウト時間(ms)
    pub notification_fade_ms: u32,
    /// ナビに `scrolled` を付けるスクロール量(px)
    pub nav_scroll_threshold: f64,
    /// トップへ戻るボタンを表示するスクロール量(px)
    pub back_to_top_threshold: f64,
    /// セクション判定の先読み量(px)
    pub section_offset: f64,
    /// 固定ヘッダー分のアンカースクロール補正(px)
    pub anchor_offset: f64,
    /// モバイル扱いにする最大幅(px)
    pub mobile_breakpoint: f64,
    /// load後にローディング画面を隠すまでの待ち(ms)
    pub loader_delay_ms: u32,
    /// テーマを保存するlocalStorageキー
    pub theme_storage_key: String,
    pub default_theme: Theme,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            form_endpoint: DEFAULT_FORM_ENDPOINT.into(),
            fragments: default_fragments(),
            notification_timeout_ms: 5000,
            notification_fade_ms: 300,
            nav_scroll_threshold: 50.0,
            back_to_top_threshold: 300.0,
            section_offset: 200.0,
            anchor_offset: 80.0,
            mobile_breakpoint: 768.0,
            loader_delay_ms: 800,
            theme_storage_key: "theme".into(),
            default_theme: Theme::Dark,
        }
    }
}

impl SiteConfig {
    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// JSONファイルから読み込み（非WASM環境のみ）
    #[cfg(not(feature = "wasm"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.form_endpoint.starts_with("https://") {
            return Err(Error::Config(format!(
                "formEndpoint must be an https URL: {}",
                self.form_endpoint
            )));
        }
        if self.theme_storage_key.trim().is_empty() {
            return Err(Error::Config("themeStorageKey is empty".into()));
        }
        if let Some(fragment) = self
            .fragments
            .iter()
            .find(|f| f.element_id.is_empty() || f.path.is_empty())
        {
            return Err(Error::Config(format!("incomplete fragment: {:?}", fragment)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.form_endpoint, DEFAULT_FORM_ENDPOINT);
        assert_eq!(config.fragments.len(), 2);
        assert_eq!(config.notification_timeout_ms, 5000);
        assert_eq!(config.default_theme, Theme::Dark);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{"notificationTimeoutMs": 3000}"#).unwrap();
        assert_eq!(config.notification_timeout_ms, 3000);
        assert_eq!(config.mobile_breakpoint, 768.0);
        assert_eq!(config.theme_storage_key, "theme");
    }

    #[test]
    fn test_theme_override() {
        let config = SiteConfig::from_json(r#"{"defaultTheme": "light"}"#).unwrap();
        assert_eq!(config.default_theme, Theme::Light);
    }

    #[test]
    fn test_rejects_plain_http_endpoint() {
        let result = SiteConfig::from_json(r#"{"formEndpoint": "http://example.com/submit"}"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_rejects_incomplete_fragment() {
        let json = r#"{"fragments": [{"elementId": "header-component", "componentPath": ""}]}"#;
        assert!(matches!(SiteConfig::from_json(json), Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(SiteConfig::from_json("{oops"), Err(Error::Json(_))));
    }
}
