//! # HTTP リクエストハンドラ
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `login`: ログイン（判定ロジック [`LoginRouter`] と axum ハンドラ）

pub mod health;
pub mod login;

pub use health::health_check;
pub use login::{LoginRouter, login};
