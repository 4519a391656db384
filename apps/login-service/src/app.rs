//! # アプリケーション構築
//!
//! ルーターとレイヤーの組み立てを担当する。
//! `main.rs` は設定読み込みと依存の初期化、サーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use passgate_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::handler::{LoginRouter, health_check, login};

/// Login Service のルーターを構築する
///
/// レイヤーは下から順に適用される。`SetRequestIdLayer` が最初に
/// `X-Request-Id` を決め、トレーシングのスパンとレスポンスヘッダーに流す。
pub fn build_app(login_router: Arc<LoginRouter>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/login", post(login))
        .with_state(login_router)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
