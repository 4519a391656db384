//! # リクエスト検証
//!
//! ログインリクエストの形と必須パラメータの有無だけを確認する。
//! 書式チェック（メールアドレスとして妥当か等）はここでは行わない。
//!
//! 判定順序:
//!
//! 1. リクエスト自体またはボディが無い → [`ValidationError::MalformedRequest`]
//! 2. `email` が無いか空 → `MissingParam("email")`
//! 3. `password` が無いか空 → `MissingParam("password")`
//!
//! 不足が複数あっても、最初に見つかった 1 つだけを返す。

use std::fmt;

use thiserror::Error;

use crate::http::HttpRequest;

/// 検証済みの認証情報
///
/// リクエストの値を加工せずに借用する。
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Credentials<'a> {
    pub email:    &'a str,
    pub password: &'a str,
}

impl fmt::Debug for Credentials<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// 検証エラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// リクエストまたはボディが存在しない
    #[error("リクエストボディが存在しません")]
    MalformedRequest,

    /// 必須パラメータが無いか空
    #[error("必須パラメータがありません: {0}")]
    MissingParam(&'static str),
}

/// ログインリクエストを検証する
pub fn validate(request: Option<&HttpRequest>) -> Result<Credentials<'_>, ValidationError> {
    let body = request
        .and_then(|r| r.body.as_ref())
        .ok_or(ValidationError::MalformedRequest)?;

    let email = required(body.email.as_deref(), "email")?;
    let password = required(body.password.as_deref(), "password")?;

    Ok(Credentials { email, password })
}

fn required<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str, ValidationError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ValidationError::MissingParam(name))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::http::LoginBody;

    #[test]
    fn test_リクエストが無い場合はmalformed() {
        assert_eq!(validate(None), Err(ValidationError::MalformedRequest));
    }

    #[test]
    fn test_ボディが無い場合はmalformed() {
        let request = HttpRequest { body: None };

        assert_eq!(
            validate(Some(&request)),
            Err(ValidationError::MalformedRequest)
        );
    }

    #[rstest]
    #[case::email_なし(None, Some("any_password"), "email")]
    #[case::email_空文字(Some(""), Some("any_password"), "email")]
    #[case::両方なしはemailを優先(None, None, "email")]
    #[case::両方空文字はemailを優先(Some(""), Some(""), "email")]
    #[case::password_なし(Some("any_email@mail.com"), None, "password")]
    #[case::password_空文字(Some("any_email@mail.com"), Some(""), "password")]
    fn test_必須パラメータ不足(
        #[case] email: Option<&str>,
        #[case] password: Option<&str>,
        #[case] expected: &'static str,
    ) {
        let request = HttpRequest::with_body(LoginBody::new(email, password));

        assert_eq!(
            validate(Some(&request)),
            Err(ValidationError::MissingParam(expected))
        );
    }

    #[test]
    fn test_両方あれば値をそのまま返す() {
        let request = HttpRequest::with_body(LoginBody::new(
            Some(" Any_Email@Mail.com "),
            Some(" any password "),
        ));

        let credentials = validate(Some(&request)).unwrap();

        assert_eq!(credentials.email, " Any_Email@Mail.com ");
        assert_eq!(credentials.password, " any password ");
    }

    #[test]
    fn test_credentialsのdebug出力はパスワードをマスクする() {
        let credentials = Credentials {
            email:    "user@example.com",
            password: "secret",
        };

        assert!(!format!("{credentials:?}").contains("secret"));
    }
}
