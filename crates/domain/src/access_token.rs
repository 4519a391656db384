//! # アクセストークン
//!
//! ログイン成功時にクライアントへ返す不透明なトークン。
//! 生成方法は `TokenGenerator` の実装に委ね、ドメイン層は文字列として扱うだけとする。

use std::fmt;

use serde::Serialize;

/// アクセストークン
///
/// シリアライズ時は素の文字列になる（`{"accessToken": "..."}` の値部分）。
/// `Debug` ではトークン本体を出さない。
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}
