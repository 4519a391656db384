//! # エラーレスポンス（RFC 9457 Problem Details）
//!
//! クライアントエラーを返すときの共通レスポンス構造体。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換はサービス側の責務（shared に axum 依存を入れない）
//! - サーバーエラー（5xx）はボディを返さない方針のため、ここには定義しない

use serde::{Deserialize, Serialize};

/// error_type URI のベースパス
const ERROR_TYPE_BASE: &str = "https://passgate.example.com/errors";

/// エラーレスポンス（RFC 9457 Problem Details）
///
/// `type` フィールドは URI で問題の種類を識別する。
/// パラメータ不足の場合のみ、拡張メンバー `param` に不足しているパラメータ名を入れる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,
    pub title:      String,
    pub status:     u16,
    pub detail:     String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param:      Option<String>,
}

impl ErrorResponse {
    /// 汎用コンストラクタ
    ///
    /// `error_type_suffix` はベース URI に付加される（例: `"missing-param"`）。
    pub fn new(
        error_type_suffix: &str,
        title: impl Into<String>,
        status: u16,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            error_type: format!("{ERROR_TYPE_BASE}/{error_type_suffix}"),
            title: title.into(),
            status,
            detail: detail.into(),
            param: None,
        }
    }

    /// 400 Missing Param
    pub fn missing_param(param: impl Into<String>) -> Self {
        let param = param.into();
        Self {
            param: Some(param.clone()),
            ..Self::new(
                "missing-param",
                "Missing Param",
                400,
                format!("Missing param: {param}"),
            )
        }
    }

    /// 401 Unauthorized
    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::new("unauthorized", "Unauthorized", 401, detail)
    }
}
