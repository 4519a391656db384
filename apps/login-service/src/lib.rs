//! # Login Service ライブラリ
//!
//! メールアドレスとパスワードでログインし、アクセストークンを払い出す API のコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app`: ルーターとレイヤーの組み立て
//! - `config`: 環境変数からの設定読み込み
//! - `error`: エラー定義
//! - `handler`: HTTP ハンドラ
//! - `http`: トランスポートから切り離したリクエスト・レスポンス型
//! - `usecase`: 認証ユースケース
//! - `validation`: リクエスト検証

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod usecase;
pub mod validation;
