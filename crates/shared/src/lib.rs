//! # Passgate 共有ユーティリティ
//!
//! ワークスペース全体で使う共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - HTTP フレームワーク（axum）には依存しない
//! - トレーシング関連の依存は `observability` feature の背後に置く

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
