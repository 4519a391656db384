//! # リポジトリ実装
//!
//! - **依存性逆転**: ユースケースはトレイト経由でのみリポジトリを使う
//! - **テスタビリティ**: トレイトを実装したスタブに差し替え可能

pub mod user_repository;

pub use user_repository::{InMemoryUserRepository, UserRepository};
