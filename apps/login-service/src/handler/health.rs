//! # ヘルスチェックハンドラ
//!
//! レスポンス型は [`passgate_shared::HealthResponse`] を参照。

use axum::Json;
use passgate_shared::HealthResponse;

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
