//! # 認証ユースケース
//!
//! メールアドレスでユーザーを引き、パスワードを照合し、
//! 一致した場合だけアクセストークンを払い出して保存する。
//!
//! ## タイミング攻撃対策
//!
//! ユーザーが存在しない場合もダミーハッシュで照合を実行し、
//! 存在する場合と処理時間をそろえる。

use std::sync::Arc;

use passgate_domain::{
    access_token::AccessToken,
    password::{PasswordHash, PlainPassword},
    user::Email,
};
use passgate_infra::{PasswordChecker, TokenGenerator, repository::UserRepository};

use crate::error::AuthError;

/// 存在しないユーザー用のダミーハッシュ（有効な Argon2id 形式）
const DUMMY_HASH: &str = "$argon2id$v=19$m=65536,t=1,p=1$AAAAAAAAAAAAAAAAAAAAAA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// 認証ユースケースの実装
pub struct AuthUseCaseImpl {
    user_repository:  Arc<dyn UserRepository>,
    password_checker: Arc<dyn PasswordChecker>,
    token_generator:  Arc<dyn TokenGenerator>,
}

impl AuthUseCaseImpl {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        password_checker: Arc<dyn PasswordChecker>,
        token_generator: Arc<dyn TokenGenerator>,
    ) -> Self {
        Self {
            user_repository,
            password_checker,
            token_generator,
        }
    }

    /// 認証してアクセストークンを払い出す
    ///
    /// 認証情報が一致しない理由（ユーザー不存在・パスワード不一致・
    /// 保存できない形式のメールアドレス）は呼び出し側に区別させない。
    #[tracing::instrument(skip_all)]
    pub async fn auth(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<AccessToken>, AuthError> {
        let password = PlainPassword::new(password);

        let Ok(email) = Email::new(email) else {
            tracing::debug!("メールアドレスの形式が不正");
            self.dummy_verification(&password);
            return Ok(None);
        };

        let Some(user) = self.user_repository.find_by_email(&email).await? else {
            tracing::debug!("ユーザーが見つからない");
            self.dummy_verification(&password);
            return Ok(None);
        };

        let result = self
            .password_checker
            .verify(&password, user.password_hash())?;
        if !result.is_match() {
            tracing::debug!(user_id = %user.id(), "パスワード不一致");
            return Ok(None);
        }

        let access_token = self.token_generator.generate(user.id())?;
        self.user_repository
            .update_access_token(user.id(), &access_token)
            .await?;

        Ok(Some(access_token))
    }

    /// ダミーハッシュで照合を実行する（結果は捨てる）
    fn dummy_verification(&self, password: &PlainPassword) {
        let _ = self
            .password_checker
            .verify(password, &PasswordHash::new(DUMMY_HASH));
    }
}
