//! # アクセストークン生成

use passgate_domain::{access_token::AccessToken, user::UserId};
use uuid::Uuid;

use crate::InfraError;

/// アクセストークンの払い出しを担当するトレイト
pub trait TokenGenerator: Send + Sync {
    /// ユーザーに対するアクセストークンを生成する
    fn generate(&self, user_id: &UserId) -> Result<AccessToken, InfraError>;
}

/// ランダムな UUID v4（ハイフンなし 32 桁）を不透明トークンとして払い出す
///
/// トークン自体にユーザー情報は含めない。照合はリポジトリに保存した値で行う。
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidTokenGenerator;

impl TokenGenerator for UuidTokenGenerator {
    fn generate(&self, _user_id: &UserId) -> Result<AccessToken, InfraError> {
        Ok(AccessToken::new(Uuid::new_v4().simple().to_string()))
    }
}
