//! # HTTP 形状の入出力
//!
//! ログインハンドラが扱うリクエスト・レスポンスの値型。
//! トランスポート（axum）から切り離しておくことで、ハンドラの判定ロジックを
//! ソケットやヘッダー処理なしに検証できる。
//!
//! axum への変換は [`HttpResponse`] の `IntoResponse` 実装だけが担う。

use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use passgate_domain::access_token::AccessToken;
use passgate_shared::ErrorResponse;
use serde::{Deserialize, Serialize};

use crate::error::LoginError;

/// ログインリクエスト
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpRequest {
    pub body: Option<LoginBody>,
}

impl HttpRequest {
    pub fn with_body(body: LoginBody) -> Self {
        Self { body: Some(body) }
    }
}

/// ログインリクエストのボディ
///
/// どちらのフィールドも欠落・空文字を許容し、判定は `validation` で行う。
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginBody {
    pub email:    Option<String>,
    pub password: Option<String>,
}

impl LoginBody {
    pub fn new(email: Option<&str>, password: Option<&str>) -> Self {
        Self {
            email:    email.map(str::to_string),
            password: password.map(str::to_string),
        }
    }
}

impl fmt::Debug for LoginBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginBody")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// ログインレスポンス
///
/// ステータスコードは常にちょうど 1 つ。5xx はボディを持たない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status_code: StatusCode,
    pub body:        Option<ResponseBody>,
}

/// レスポンスボディ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    /// ログイン成功時のアクセストークン
    Token(AccessToken),
    /// クライアントエラーの記述子
    Error(LoginError),
}

impl HttpResponse {
    /// 200 OK
    pub fn ok(access_token: AccessToken) -> Self {
        Self {
            status_code: StatusCode::OK,
            body:        Some(ResponseBody::Token(access_token)),
        }
    }

    /// 400 Bad Request
    pub fn bad_request(error: LoginError) -> Self {
        Self {
            status_code: StatusCode::BAD_REQUEST,
            body:        Some(ResponseBody::Error(error)),
        }
    }

    /// 401 Unauthorized
    pub fn unauthorized() -> Self {
        Self {
            status_code: StatusCode::UNAUTHORIZED,
            body:        Some(ResponseBody::Error(LoginError::Unauthorized)),
        }
    }

    /// 500 Internal Server Error（ボディなし）
    pub fn server_error() -> Self {
        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            body:        None,
        }
    }
}

/// ログイン成功時の JSON ボディ
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    access_token: AccessToken,
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        match self.body {
            None => self.status_code.into_response(),
            Some(ResponseBody::Token(access_token)) => {
                (self.status_code, Json(LoginResponse { access_token })).into_response()
            }
            Some(ResponseBody::Error(error)) => {
                (self.status_code, Json(ErrorResponse::from(&error))).into_response()
            }
        }
    }
}
