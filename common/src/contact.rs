//! お問い合わせフォーム
//!
//! 入力検証、送信内容のJSON化、送信中ガード、レスポンスの解釈。
//! 実際の送信（fetch）は web-wasm 側。

use crate::error::{Error, Result, ValidationError};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use serde_json::{Map, Value};

/// 必須項目
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "message"];

/// 送信中のボタン表示
pub const BUSY_LABEL: &str = "Sending...";

pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";
pub const FAILURE_MESSAGE: &str = "Oops! Something went wrong. Please try again.";

lazy_static! {
    /// `local@domain.tld`：@は1つ、@の後ろに.が1つ以上、空白なし
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile");
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// フォームの入力内容（FormDataの順序を保持）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    fields: Vec<(String, String)>,
}

impl ContactSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同名の項目は後勝ち
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// 送信前の検証
    ///
    /// 必須項目のチェックを先に行い、その後にメール形式を見る。
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let missing = REQUIRED_FIELDS
            .iter()
            .any(|field| self.get(field).map_or(true, |value| value.trim().is_empty()));
        if missing {
            return Err(ValidationError::MissingRequired);
        }

        // 送信値そのものを検査する（前後の空白も不可）
        let email = self.get("email").unwrap_or_default();
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }

    /// `{fieldName: value, ...}` 形式のJSON
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .fields
            .iter()
            .map(|(name, value)| (name.clone(), Value::String(value.clone())))
            .collect();
        Value::Object(map)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_json())?)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ContactSubmission {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut submission = Self::new();
        for (name, value) in iter {
            submission.insert(name, value);
        }
        submission
    }
}

/// 送信先のレスポンス `{ success: boolean, message?: string, ... }`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: Option<String>,
}

impl SubmitResponse {
    pub fn parse(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// success=false はエラー扱い
    pub fn into_result(self) -> Result<()> {
        if self.success {
            Ok(())
        } else {
            Err(Error::Rejected(
                self.message.unwrap_or_else(|| "success flag was false".into()),
            ))
        }
    }
}

/// 二重送信ガード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionGuard {
    #[default]
    Idle,
    InFlight,
}

impl SubmissionGuard {
    /// 送信開始。既に送信中ならfalse（何もしない）
    pub fn begin(&mut self) -> bool {
        match self {
            SubmissionGuard::Idle => {
                *self = SubmissionGuard::InFlight;
                true
            }
            SubmissionGuard::InFlight => false,
        }
    }

    pub fn finish(&mut self) {
        *self = SubmissionGuard::Idle;
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionGuard::InFlight)
    }
}
