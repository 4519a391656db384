//! # ユーザー
//!
//! ログイン対象となるユーザーと、その識別に使う値オブジェクトを定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: UserId は UUID をラップし、型安全性を確保
//! - **バリデーション**: Email は生成時に最低限の構造検証を行う
//! - **不変性**: User の変更はメソッド経由で新しい値を返す
//!
//! ## 使用例
//!
//! ```rust
//! use passgate_domain::{
//!     access_token::AccessToken,
//!     password::PasswordHash,
//!     user::{Email, User, UserId},
//! };
//!
//! let user = User::new(
//!     UserId::new(),
//!     Email::new("user@example.com").unwrap(),
//!     PasswordHash::new("$argon2id$..."),
//! );
//! assert!(user.access_token().is_none());
//!
//! let user = user.with_access_token(AccessToken::new("token"));
//! assert_eq!(user.access_token().map(AccessToken::as_str), Some("token"));
//! ```

use derive_more::Display;
use uuid::Uuid;

use crate::{DomainError, access_token::AccessToken, password::PasswordHash};

/// メールアドレスの最大長
const EMAIL_MAX_LENGTH: usize = 255;

/// ユーザー ID
///
/// UUID v7 を使用し、生成順にソート可能。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct UserId(Uuid);

impl UserId {
    /// 新しいユーザー ID を生成する
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

/// メールアドレス（値オブジェクト）
///
/// ここで行うのは保存・検索に耐えるための構造検証だけで、
/// RFC 準拠の書式チェックは `EmailValidator` の責務とする。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct Email(String);

impl Email {
    /// メールアドレスを作成する
    ///
    /// # バリデーション
    ///
    /// - 空文字列ではない
    /// - `local@domain` の形で、両側が空ではない
    /// - 最大 255 文字
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::Validation(
                "メールアドレスは必須です".to_string(),
            ));
        }

        let Some((local, domain)) = value.split_once('@') else {
            return Err(DomainError::Validation(
                "メールアドレスの形式が不正です".to_string(),
            ));
        };

        if local.is_empty() || domain.is_empty() {
            return Err(DomainError::Validation(
                "メールアドレスの形式が不正です".to_string(),
            ));
        }

        if value.len() > EMAIL_MAX_LENGTH {
            return Err(DomainError::Validation(format!(
                "メールアドレスは{EMAIL_MAX_LENGTH}文字以内である必要があります"
            )));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// ユーザーエンティティ
///
/// # 不変条件
///
/// - `email` はリポジトリ内で一意
/// - `access_token` は最後のログイン成功時に払い出したもの
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id:            UserId,
    email:         Email,
    password_hash: PasswordHash,
    access_token:  Option<AccessToken>,
}

impl User {
    pub fn new(id: UserId, email: Email, password_hash: PasswordHash) -> Self {
        Self {
            id,
            email,
            password_hash,
            access_token: None,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// アクセストークンを差し替えた新しいインスタンスを返す
    pub fn with_access_token(self, access_token: AccessToken) -> Self {
        Self {
            access_token: Some(access_token),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("user@example.com")]
    #[case("any_email@any_provider.any_domain")]
    #[case("a@b")]
    fn test_メールアドレスを作成できる(#[case] value: &str) {
        let email = Email::new(value).unwrap();

        assert_eq!(email.as_str(), value);
    }

    #[rstest]
    #[case("")]
    #[case("no-at-sign")]
    #[case("@example.com")]
    #[case("user@")]
    fn test_不正なメールアドレスはバリデーションエラー(#[case] value: &str) {
        let result = Email::new(value);

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_256文字のメールアドレスはバリデーションエラー() {
        let value = format!("{}@example.com", "a".repeat(256 - "@example.com".len()));
        assert_eq!(value.len(), 256);

        assert!(Email::new(value).is_err());
    }

    #[test]
    fn test_255文字のメールアドレスは作成できる() {
        let value = format!("{}@example.com", "a".repeat(255 - "@example.com".len()));

        assert!(Email::new(value).is_ok());
    }

    #[test]
    fn test_with_access_tokenはトークン以外を保持する() {
        let id = UserId::new();
        let user = User::new(
            id,
            Email::new("user@example.com").unwrap(),
            PasswordHash::new("hash"),
        );

        let updated = user.clone().with_access_token(AccessToken::new("token"));

        assert_eq!(updated.id(), user.id());
        assert_eq!(updated.email(), user.email());
        assert_eq!(updated.password_hash(), user.password_hash());
        assert_eq!(updated.access_token(), Some(&AccessToken::new("token")));
    }

    #[test]
    fn test_user_idはuuid_v7で生成される() {
        let id = UserId::new();

        assert_eq!(id.as_uuid().get_version_num(), 7);
    }
}
