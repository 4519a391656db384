//! # パスワード照合
//!
//! Argon2id の PHC 文字列と平文パスワードを照合する。
//! 照合パラメータ（m, t, p）はハッシュ文字列側に埋め込まれた値が使われる。

use argon2::{Argon2, PasswordVerifier as _, password_hash::PasswordHash as PhcHash};
use passgate_domain::password::{PasswordHash, PasswordVerifyResult, PlainPassword};

use crate::InfraError;

/// パスワード照合を担当するトレイト
pub trait PasswordChecker: Send + Sync {
    /// パスワードを照合する
    ///
    /// # Errors
    ///
    /// - ハッシュが PHC 文字列としてパースできない場合
    fn verify(
        &self,
        password: &PlainPassword,
        hash: &PasswordHash,
    ) -> Result<PasswordVerifyResult, InfraError>;
}

/// Argon2id による照合の実装
#[derive(Default)]
pub struct Argon2PasswordChecker {
    argon2: Argon2<'static>,
}

impl Argon2PasswordChecker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordChecker for Argon2PasswordChecker {
    fn verify(
        &self,
        password: &PlainPassword,
        hash: &PasswordHash,
    ) -> Result<PasswordVerifyResult, InfraError> {
        let parsed = PhcHash::new(hash.as_str())
            .map_err(|e| InfraError::unexpected(format!("不正なハッシュ形式: {e}")))?;

        let matched = self
            .argon2
            .verify_password(password.as_str().as_bytes(), &parsed)
            .is_ok();

        Ok(PasswordVerifyResult::from(matched))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    // "password123" の Argon2id ハッシュ
    const TEST_HASH: &str = "$argon2id$v=19$m=65536,t=1,p=1$olntqw+EoVpwH4B1vUAI0A$5yCA1izLODgz8nQOInDGwbuQB/AS0sIQDwpmIilve5M";

    #[rstest]
    #[case("password123", true)]
    #[case("wrongpassword", false)]
    #[case("", false)]
    fn test_パスワードを照合できる(#[case] input: &str, #[case] expected: bool) {
        let sut = Argon2PasswordChecker::new();

        let result = sut
            .verify(&PlainPassword::new(input), &PasswordHash::new(TEST_HASH))
            .unwrap();

        assert_eq!(result.is_match(), expected);
    }

    #[test]
    fn test_不正なハッシュ形式はエラー() {
        let sut = Argon2PasswordChecker::new();

        let result = sut.verify(
            &PlainPassword::new("password123"),
            &PasswordHash::new("not-a-valid-hash"),
        );

        assert!(result.is_err());
    }
}
