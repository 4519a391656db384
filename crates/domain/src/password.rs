//! # パスワード
//!
//! ログイン時に扱うパスワード関連の値オブジェクト。
//!
//! | 型 | 用途 |
//! |---|------|
//! | [`PlainPassword`] | ログインリクエストで受け取った平文 |
//! | [`PasswordHash`] | ユーザーに紐づく Argon2id の PHC 文字列 |
//! | [`PasswordVerifyResult`] | 平文とハッシュの照合結果 |

use std::fmt;

/// 平文パスワード
///
/// `Debug` では値を出さない。ログに平文が混ざるのを型で防ぐ。
#[derive(Clone, PartialEq, Eq)]
pub struct PlainPassword(String);

impl PlainPassword {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PlainPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PlainPassword([REDACTED])")
    }
}

/// パスワードハッシュ（PHC 文字列形式）
///
/// 形式の正しさはここでは検証しない。照合時に
/// `PasswordChecker` がパースし、不正ならエラーにする。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// パスワード照合結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordVerifyResult {
    Match,
    Mismatch,
}

impl PasswordVerifyResult {
    pub fn is_match(self) -> bool {
        self == Self::Match
    }
}

impl From<bool> for PasswordVerifyResult {
    fn from(matched: bool) -> Self {
        if matched { Self::Match } else { Self::Mismatch }
    }
}
