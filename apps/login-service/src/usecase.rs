//! # ユースケース層
//!
//! ## 設計方針
//!
//! - **トレイトベースの設計**: ハンドラは [`AuthUseCase`] だけを知り、実装は注入する
//! - **依存性注入**: リポジトリ・パスワード照合・トークン生成を外部から注入
//! - **例外を使わない**: 失敗は `Result` で返し、ハンドラ境界で一度だけ変換する

pub mod auth;

use async_trait::async_trait;
pub use auth::AuthUseCaseImpl;
use passgate_domain::access_token::AccessToken;

use crate::error::AuthError;

/// 認証ユースケーストレイト
#[async_trait]
pub trait AuthUseCase: Send + Sync {
    /// メールアドレスとパスワードで認証する
    ///
    /// ## 戻り値
    ///
    /// - `Ok(Some(token))`: 認証成功
    /// - `Ok(None)`: 認証情報が一致しない（ユーザー不存在を含む）
    /// - `Err(AuthError)`: 認証処理そのものが失敗した
    async fn auth(&self, email: &str, password: &str) -> Result<Option<AccessToken>, AuthError>;
}

#[async_trait]
impl AuthUseCase for AuthUseCaseImpl {
    async fn auth(&self, email: &str, password: &str) -> Result<Option<AccessToken>, AuthError> {
        self.auth(email, password).await
    }
}
