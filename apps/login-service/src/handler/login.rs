//! # ログインハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /api/login` - メールアドレスとパスワードでログインし、アクセストークンを返す
//!
//! ## レスポンス
//!
//! | 条件 | ステータス | ボディ |
//! |------|-----------|--------|
//! | リクエスト/ボディなし | 500 | なし |
//! | `email` なし | 400 | missing-param(`email`) |
//! | `password` なし | 400 | missing-param(`password`) |
//! | 認証ユースケース未設定 | 500 | なし |
//! | 認証ユースケースが失敗 | 500 | なし（原因はログのみ） |
//! | 認証情報不一致（空のトークンを含む） | 401 | unauthorized |
//! | 認証成功 | 200 | `{"accessToken": "..."}` |

use std::sync::Arc;

use axum::{body::Bytes, extract::State};

use crate::{
    error::{LoginError, LoginRouterError},
    http::{HttpRequest, HttpResponse, LoginBody},
    usecase::AuthUseCase,
    validation::{self, ValidationError},
};

/// ログインの判定ロジック
///
/// 状態は注入された認証ユースケースのみで、呼び出しごとの値はすべて
/// `route` のローカルに閉じる。並行に呼び出しても互いに影響しない。
pub struct LoginRouter {
    auth_usecase: Option<Arc<dyn AuthUseCase>>,
}

impl LoginRouter {
    /// 認証ユースケースを注入して作成する
    ///
    /// `None` でも作成はできるが、その場合すべての正常なリクエストが 500 になる。
    /// 起動時に [`ensure_configured`](Self::ensure_configured) で検出すること。
    pub fn new(auth_usecase: Option<Arc<dyn AuthUseCase>>) -> Self {
        Self { auth_usecase }
    }

    /// 認証ユースケースが設定されているか確認する
    pub fn ensure_configured(&self) -> Result<(), LoginRouterError> {
        match self.auth_usecase {
            Some(_) => Ok(()),
            None => Err(LoginRouterError::AuthUseCaseMissing),
        }
    }

    /// リクエストをレスポンスに変換する
    #[tracing::instrument(skip_all)]
    pub async fn route(&self, request: Option<&HttpRequest>) -> HttpResponse {
        let credentials = match validation::validate(request) {
            Ok(credentials) => credentials,
            Err(ValidationError::MalformedRequest) => {
                tracing::warn!("リクエストボディが存在しない");
                return HttpResponse::server_error();
            }
            Err(ValidationError::MissingParam(param)) => {
                tracing::info!(param, "ログイン失敗: 必須パラメータ不足");
                return HttpResponse::bad_request(LoginError::missing_param(param));
            }
        };

        let Some(auth_usecase) = &self.auth_usecase else {
            tracing::error!(
                error.category = "configuration",
                "認証ユースケースが設定されていません"
            );
            return HttpResponse::server_error();
        };

        match auth_usecase
            .auth(credentials.email, credentials.password)
            .await
        {
            Ok(Some(access_token)) if !access_token.as_str().is_empty() => {
                tracing::info!("ログイン成功");
                HttpResponse::ok(access_token)
            }
            Ok(_) => {
                tracing::info!("ログイン失敗: 認証情報不一致");
                HttpResponse::unauthorized()
            }
            Err(e) => {
                tracing::error!(
                    error.category = "authentication",
                    "認証処理で内部エラー: {}",
                    e
                );
                HttpResponse::server_error()
            }
        }
    }
}

/// POST /api/login
///
/// ボディを [`LoginBody`] として解釈し、[`LoginRouter::route`] に渡す。
/// 空のボディや JSON オブジェクトでないボディは「ボディなし」として扱う。
///
/// ## リクエストボディ
///
/// ```json
/// {
///   "email": "user@example.com",
///   "password": "password123"
/// }
/// ```
#[tracing::instrument(skip_all)]
pub async fn login(State(router): State<Arc<LoginRouter>>, body: Bytes) -> HttpResponse {
    let request = HttpRequest {
        body: parse_body(&body),
    };
    router.route(Some(&request)).await
}

fn parse_body(bytes: &[u8]) -> Option<LoginBody> {
    if bytes.is_empty() {
        return None;
    }

    let value = match serde_json::from_slice::<serde_json::Value>(bytes) {
        Ok(value) if value.is_object() => value,
        Ok(_) => {
            tracing::warn!("リクエストボディが JSON オブジェクトではない");
            return None;
        }
        Err(e) => {
            tracing::warn!(error = %e, "リクエストボディの JSON パースに失敗");
            return None;
        }
    };

    serde_json::from_value(value)
        .inspect_err(|e| tracing::warn!(error = %e, "リクエストボディの形式が不正"))
        .ok()
}
