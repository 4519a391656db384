//! # Passgate ドメイン層
//!
//! ログインに関わる値オブジェクトとエンティティを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! login-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（ストレージ、ハッシュ実装など）に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`user`] - ユーザーとメールアドレス
//! - [`password`] - 平文パスワード・ハッシュ・検証結果
//! - [`access_token`] - ログイン成功時に払い出すアクセストークン
//!
//! ## 使用例
//!
//! ```rust
//! use passgate_domain::{DomainError, user::Email};
//!
//! let email = Email::new("user@example.com").unwrap();
//! assert_eq!(email.as_str(), "user@example.com");
//!
//! let error = Email::new("").unwrap_err();
//! assert!(matches!(error, DomainError::Validation(_)));
//! ```

pub mod access_token;
pub mod error;
pub mod password;
pub mod user;

pub use error::DomainError;
