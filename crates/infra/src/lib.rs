//! # Passgate インフラ層
//!
//! ログインに必要な外部要素（ユーザー保存領域、パスワードハッシュ、
//! トークン生成、メールアドレス書式チェック）をトレイトとその実装として提供する。
//!
//! ## 依存関係
//!
//! ```text
//! login-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - インフラ層エラー定義
//! - [`password`] - Argon2id によるパスワード照合
//! - [`email_validator`] - `validator` クレートによる書式チェック
//! - [`repository`] - ユーザーリポジトリ
//! - [`token`] - アクセストークン生成

pub mod email_validator;
pub mod error;
pub mod password;
pub mod repository;
pub mod token;

pub use email_validator::{EmailValidator, ValidatorEmailValidator};
pub use error::InfraError;
pub use password::{Argon2PasswordChecker, PasswordChecker};
pub use token::{TokenGenerator, UuidTokenGenerator};
