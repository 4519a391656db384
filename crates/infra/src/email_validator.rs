//! # メールアドレス書式チェック
//!
//! 書式判定そのものは `validator` クレートに委譲する。
//! ログインフローからは呼ばれず、起動時に登録するユーザーの入力チェックに使う。

use validator::ValidateEmail as _;

/// メールアドレスの書式を判定するトレイト
pub trait EmailValidator: Send + Sync {
    /// 書式として妥当なら `true` を返す
    fn is_valid(&self, email: &str) -> bool;
}

/// `validator` クレートによる実装
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatorEmailValidator;

impl EmailValidator for ValidatorEmailValidator {
    fn is_valid(&self, email: &str) -> bool {
        email.validate_email()
    }
}
