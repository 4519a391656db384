//! # Login Service エラー定義
//!
//! - [`LoginError`]: クライアントに返すエラー記述子（比較可能な値）
//! - [`AuthError`]: 認証ユースケースが失敗したときのエラー（クライアントには出さない）
//! - [`LoginRouterError`]: ハンドラの構成不備

use passgate_infra::InfraError;
use passgate_shared::ErrorResponse;
use thiserror::Error;

/// クライアントに返すエラー記述子
///
/// レスポンスボディにはこの値をそのまま保持する。
/// 同じ種類・同じパラメータ名で新しく作った値と `==` で比較できる。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    /// 必須パラメータ不足（400）
    #[error("Missing param: {0}")]
    MissingParam(String),

    /// 認証情報の不一致（401）
    #[error("Unauthorized")]
    Unauthorized,
}

impl LoginError {
    pub fn missing_param(param: impl Into<String>) -> Self {
        Self::MissingParam(param.into())
    }
}

impl From<&LoginError> for ErrorResponse {
    fn from(error: &LoginError) -> Self {
        match error {
            LoginError::MissingParam(param) => ErrorResponse::missing_param(param.as_str()),
            LoginError::Unauthorized => ErrorResponse::unauthorized(error.to_string()),
        }
    }
}

/// 認証ユースケースのエラー
///
/// ハンドラ境界で 500 に変換され、内容はログにのみ出力される。
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("インフラエラー: {0}")]
    Infra(#[from] InfraError),
}

/// LoginRouter の構成エラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginRouterError {
    #[error("認証ユースケースが設定されていません")]
    AuthUseCaseMissing,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_同じパラメータ名の記述子は等しい() {
        assert_eq!(
            LoginError::missing_param("email"),
            LoginError::MissingParam("email".to_string())
        );
        assert_ne!(
            LoginError::missing_param("email"),
            LoginError::missing_param("password")
        );
    }

    #[test]
    fn test_missing_paramはproblem_detailsのparamに変換される() {
        let response = ErrorResponse::from(&LoginError::missing_param("password"));

        assert_eq!(response, ErrorResponse::missing_param("password"));
    }

    #[test]
    fn test_unauthorizedは401のproblem_detailsに変換される() {
        let response = ErrorResponse::from(&LoginError::Unauthorized);

        assert_eq!(response.status, 401);
        assert_eq!(response.detail, "Unauthorized");
        assert_eq!(response.param, None);
    }
}
