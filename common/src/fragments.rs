//! ヘッダー/フッター断片の読み込み
//!
//! 断片の定義、読み込み結果の集計、完了時に発火するカスタムイベントの形。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 断片1件の読み込み完了時に `document` へ発火するイベント
pub const COMPONENT_LOADED_EVENT: &str = "componentLoaded";

/// すべての断片が片付いた（成功・失敗を問わない）後に発火するイベント
pub const ALL_COMPONENTS_LOADED_EVENT: &str = "allComponentsLoaded";

/// 読み込む断片
///
/// `componentLoaded` の `detail` としてもそのままシリアライズされる
/// （`{ elementId, componentPath }`）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentSpec {
    /// 差し込み先のプレースホルダ要素id
    pub element_id: String,
    /// 断片HTMLの相対パス
    #[serde(rename = "componentPath", alias = "path")]
    pub path: String,
}

impl FragmentSpec {
    pub fn new(element_id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            path: path.into(),
        }
    }
}

pub fn default_fragments() -> Vec<FragmentSpec> {
    vec![
        FragmentSpec::new("header-component", "components/header.html"),
        FragmentSpec::new("footer-component", "components/footer.html"),
    ]
}

/// HTTPステータスの判定。2xx以外は失敗
pub fn check_status(status: u16, status_text: &str) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(Error::Http {
            status,
            status_text: status_text.to_string(),
        })
    }
}

/// 断片1件の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentOutcome {
    Loaded,
    /// プレースホルダ要素がページに無い
    MissingPlaceholder,
    Failed(String),
}

/// 全断片の読み込み結果
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    entries: Vec<(FragmentSpec, FragmentOutcome)>,
}

impl LoadReport {
    pub fn record(&mut self, spec: FragmentSpec, outcome: FragmentOutcome) {
        self.entries.push((spec, outcome));
    }

    pub fn loaded_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, outcome)| *outcome == FragmentOutcome::Loaded)
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&FragmentSpec, &str)> {
        self.entries.iter().filter_map(|(spec, outcome)| match outcome {
            FragmentOutcome::Failed(reason) => Some((spec, reason.as_str())),
            _ => None,
        })
    }

    pub fn is_loaded(&self, element_id: &str) -> bool {
        self.entries
            .iter()
            .any(|(spec, outcome)| spec.element_id == element_id && *outcome == FragmentOutcome::Loaded)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(FragmentSpec, FragmentOutcome)> for LoadReport {
    fn from_iter<I: IntoIterator<Item = (FragmentSpec, FragmentOutcome)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_detail_shape() {
        let spec = FragmentSpec::new("header-component", "components/header.html");
        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(
            json,
            r#"{"elementId":"header-component","componentPath":"components/header.html"}"#
        );
    }

    #[test]
    fn test_path_alias() {
        let spec: FragmentSpec =
            serde_json::from_str(r#"{"elementId":"footer-component","path":"parts/footer.html"}"#).unwrap();
        assert_eq!(spec.path, "parts/footer.html");
    }

    #[test]
    fn test_check_status() {
        assert!(check_status(200, "OK").is_ok());
        assert!(check_status(204, "No Content").is_ok());
        let err = check_status(404, "Not Found").unwrap_err();
        assert!(matches!(err, Error::Http { status: 404, .. }));
        assert!(check_status(500, "").is_err());
    }

    #[test]
    fn test_load_report() {
        let report: LoadReport = vec![
            (FragmentSpec::new("header-component", "h.html"), FragmentOutcome::Loaded),
            (
                FragmentSpec::new("footer-component", "f.html"),
                FragmentOutcome::Failed("HTTP error: 404 Not Found".into()),
            ),
        ]
        .into_iter()
        .collect();

        assert_eq!(report.len(), 2);
        assert_eq!(report.loaded_count(), 1);
        assert!(report.is_loaded("header-component"));
        assert!(!report.is_loaded("footer-component"));
        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0.element_id, "footer-component");
    }
}
