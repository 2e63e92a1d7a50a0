//! お問い合わせフォームの送信（Web3Forms）

use codeaayu_common::fragments::check_status;
use codeaayu_common::{ContactSubmission, Result, SubmitResponse};

use super::http;

/// フォーム内容をJSONでPOSTし、`success` フラグで成否を判定する
///
/// # Arguments
/// * `endpoint` - 送信先URL
/// * `submission` - フォームの全項目（hiddenのaccess_keyも含む）
///
/// # Returns
/// * `Ok(())` - `success: true`
/// * `Err` - 通信失敗、`success: false`、またはJSONでない応答
pub async fn submit(endpoint: &str, submission: &ContactSubmission) -> Result<()> {
    let body = submission.to_json_string()?;
    let response = http::post_json(endpoint, &body).await?;

    match SubmitResponse::parse(&response.body) {
        Ok(parsed) => parsed.into_result(),
        Err(parse_error) => {
            // JSONでない応答はHTTPエラーを優先して報告
            check_status(response.status, &response.status_text)?;
            Err(parse_error)
        }
    }
}
