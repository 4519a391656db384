//! # インフラ層エラー定義
//!
//! ストレージやハッシュ処理など、外部要素との境界で発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別
//!
//! SpanTrace はコンストラクタ呼び出し時点でキャプチャされる。
//! `tracing_error::ErrorLayer` が登録されていない場合は空のトレースになる。

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// ストレージエラー
    ///
    /// ロックの poison など、保存領域にアクセスできない場合。
    #[error("ストレージエラー: {0}")]
    Storage(String),

    /// 更新対象が存在しない
    #[error("{entity} が見つかりません: {id}")]
    NotFound {
        /// エンティティ名（例: "User"）
        entity: String,
        /// エンティティの ID
        id:     String,
    },

    /// 一意制約違反
    #[error("{entity} が既に存在します: {id}")]
    Conflict {
        /// エンティティ名（例: "User"）
        entity: String,
        /// 重複したキー
        id:     String,
    },

    /// 予期しないエラー
    ///
    /// 不正なハッシュ形式、トークン生成失敗など、上記に分類できないもの。
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

impl InfraError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// SpanTrace を取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    fn with_kind(kind: InfraErrorKind) -> Self {
        Self {
            kind,
            span_trace: SpanTrace::capture(),
        }
    }

    // ===== Convenience constructors =====

    /// ストレージエラーを生成する
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::with_kind(InfraErrorKind::Storage(msg.into()))
    }

    /// 対象なしエラーを生成する
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::with_kind(InfraErrorKind::NotFound {
            entity: entity.into(),
            id:     id.into(),
        })
    }

    /// 一意制約違反エラーを生成する
    pub fn conflict(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::with_kind(InfraErrorKind::Conflict {
            entity: entity.into(),
            id:     id.into(),
        })
    }

    /// 予期しないエラーを生成する
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::with_kind(InfraErrorKind::Unexpected(msg.into()))
    }
}

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::layer::SubscriberExt as _;

    use super::*;

    /// テスト用に ErrorLayer 付き subscriber を設定する
    fn with_error_layer(f: impl FnOnce()) {
        let subscriber = tracing_subscriber::registry().with(tracing_error::ErrorLayer::default());
        let _guard = tracing::subscriber::set_default(subscriber);
        f();
    }

    #[test]
    fn test_storageでspan_traceがキャプチャされる() {
        with_error_layer(|| {
            let span = tracing::info_span!("test_find_by_email");
            let _enter = span.enter();

            let err = InfraError::storage("lock poisoned");

            assert!(matches!(err.kind(), InfraErrorKind::Storage(msg) if msg == "lock poisoned"));
            let trace_str = format!("{}", err.span_trace());
            assert!(
                trace_str.contains("test_find_by_email"),
                "SpanTrace がスパン名を含むこと: {trace_str}",
            );
        });
    }

    #[test]
    fn test_not_foundのdisplay() {
        let err = InfraError::not_found("User", "U-001");

        assert_eq!(format!("{err}"), "User が見つかりません: U-001");
    }

    #[test]
    fn test_unexpectedのkind() {
        let err = InfraError::unexpected("不正なハッシュ形式");

        assert!(matches!(
            err.kind(),
            InfraErrorKind::Unexpected(msg) if msg == "不正なハッシュ形式"
        ));
    }
}
