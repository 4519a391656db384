//! # Login Service 設定
//!
//! 環境変数から Login Service サーバーの設定を読み込む。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `LOGIN_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `LOGIN_PORT` | **Yes** | ポート番号 |
//! | `SEED_USER_EMAIL` | No | 起動時に登録するユーザーのメールアドレス |
//! | `SEED_USER_PASSWORD_HASH` | `SEED_USER_EMAIL` と同時 | 登録ユーザーの Argon2id ハッシュ（PHC 形式） |

use std::env;

use passgate_domain::{
    password::PasswordHash,
    user::{Email, User, UserId},
};
use passgate_infra::EmailValidator;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";

/// 設定読み込みエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    #[error("LOGIN_PORT は有効なポート番号である必要があります: {0}")]
    InvalidPort(String),

    #[error("SEED_USER_EMAIL と SEED_USER_PASSWORD_HASH は両方設定する必要があります")]
    IncompleteSeed,

    #[error("SEED_USER_EMAIL の形式が不正です: {0}")]
    InvalidSeedEmail(String),
}

/// 起動時に登録するユーザー
#[derive(Clone, PartialEq, Eq)]
pub struct SeedUser {
    pub email:         String,
    pub password_hash: String,
}

impl std::fmt::Debug for SeedUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedUser")
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

impl SeedUser {
    /// メールアドレスの書式を確認し、ドメインのユーザーに変換する
    pub fn to_user(&self, email_validator: &dyn EmailValidator) -> Result<User, ConfigError> {
        let invalid = || ConfigError::InvalidSeedEmail(self.email.clone());

        if !email_validator.is_valid(&self.email) {
            return Err(invalid());
        }
        let email = Email::new(self.email.as_str()).map_err(|_| invalid())?;

        Ok(User::new(
            UserId::new(),
            email,
            PasswordHash::new(self.password_hash.as_str()),
        ))
    }
}

/// Login Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginServiceConfig {
    /// バインドアドレス
    pub host:      String,
    /// ポート番号
    pub port:      u16,
    /// 起動時に登録するユーザー
    pub seed_user: Option<SeedUser>,
}

impl LoginServiceConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// 空文字の値は未設定として扱う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let host = get("LOGIN_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = get("LOGIN_PORT").ok_or(ConfigError::Missing("LOGIN_PORT"))?;
        let port = port
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port.clone()))?;

        let seed_user = match (get("SEED_USER_EMAIL"), get("SEED_USER_PASSWORD_HASH")) {
            (Some(email), Some(password_hash)) => Some(SeedUser {
                email,
                password_hash,
            }),
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteSeed),
        };

        Ok(Self {
            host,
            port,
            seed_user,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use passgate_infra::ValidatorEmailValidator;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_必須項目のみでデフォルト値を補う() {
        // Given
        let lookup = lookup_from(&[("LOGIN_PORT", "13010")]);

        // When
        let config = LoginServiceConfig::from_lookup(lookup).unwrap();

        // Then
        assert_eq!(
            config,
            LoginServiceConfig {
                host:      "0.0.0.0".to_string(),
                port:      13010,
                seed_user: None,
            }
        );
    }

    #[test]
    fn test_シードユーザーを読み込む() {
        let lookup = lookup_from(&[
            ("LOGIN_HOST", "127.0.0.1"),
            ("LOGIN_PORT", "13010"),
            ("SEED_USER_EMAIL", "user@example.com"),
            ("SEED_USER_PASSWORD_HASH", "$argon2id$dummy"),
        ]);

        let config = LoginServiceConfig::from_lookup(lookup).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(
            config.seed_user,
            Some(SeedUser {
                email:         "user@example.com".to_string(),
                password_hash: "$argon2id$dummy".to_string(),
            })
        );
    }

    #[rstest]
    #[case::ポート未設定(&[], ConfigError::Missing("LOGIN_PORT"))]
    #[case::ポート空文字(&[("LOGIN_PORT", "")], ConfigError::Missing("LOGIN_PORT"))]
    #[case::ポートが数値でない(
        &[("LOGIN_PORT", "http")],
        ConfigError::InvalidPort("http".to_string())
    )]
    #[case::ポートが範囲外(
        &[("LOGIN_PORT", "70000")],
        ConfigError::InvalidPort("70000".to_string())
    )]
    #[case::ハッシュなし(
        &[("LOGIN_PORT", "13010"), ("SEED_USER_EMAIL", "user@example.com")],
        ConfigError::IncompleteSeed
    )]
    #[case::メールアドレスなし(
        &[("LOGIN_PORT", "13010"), ("SEED_USER_PASSWORD_HASH", "$argon2id$dummy")],
        ConfigError::IncompleteSeed
    )]
    fn test_不正な設定はエラー(
        #[case] vars: &[(&str, &str)],
        #[case] expected: ConfigError,
    ) {
        let result = LoginServiceConfig::from_lookup(lookup_from(vars));

        assert_eq!(result, Err(expected));
    }

    #[test]
    fn test_シードユーザーをドメインのユーザーに変換する() {
        let seed = SeedUser {
            email:         "user@example.com".to_string(),
            password_hash: "$argon2id$dummy".to_string(),
        };

        let user = seed.to_user(&ValidatorEmailValidator).unwrap();

        assert_eq!(user.email().as_str(), "user@example.com");
        assert_eq!(user.password_hash().as_str(), "$argon2id$dummy");
        assert!(user.access_token().is_none());
    }

    #[rstest]
    #[case::アットマークなし("not-an-email")]
    #[case::ドメインなし("user@")]
    #[case::空白を含む("us er@example.com")]
    fn test_不正なメールアドレスのシードユーザーは変換できない(#[case] email: &str) {
        let seed = SeedUser {
            email:         email.to_string(),
            password_hash: "$argon2id$dummy".to_string(),
        };

        assert_eq!(
            seed.to_user(&ValidatorEmailValidator),
            Err(ConfigError::InvalidSeedEmail(email.to_string()))
        );
    }

    #[test]
    fn test_シードユーザーのdebug出力はハッシュをマスクする() {
        let seed = SeedUser {
            email:         "user@example.com".to_string(),
            password_hash: "$argon2id$dummy".to_string(),
        };

        assert!(!format!("{seed:?}").contains("argon2id"));
    }
}
