//! # UserRepository
//!
//! ログイン対象ユーザーの検索と、払い出したアクセストークンの保存を担当する。
//!
//! 永続ストレージは持たず、プロセス内のインメモリ実装のみを提供する。
//! 起動時に設定からシードしたユーザーだけがログイン可能になる。

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use passgate_domain::{
    access_token::AccessToken,
    user::{Email, User, UserId},
};

use crate::error::InfraError;

/// ユーザーリポジトリトレイト
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// メールアドレスでユーザーを検索する
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(user))`: ユーザーが見つかった場合
    /// - `Ok(None)`: ユーザーが見つからない場合
    /// - `Err(_)`: ストレージエラー
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, InfraError>;

    /// ユーザーのアクセストークンを更新する
    ///
    /// # エラー
    ///
    /// - 対象ユーザーが存在しない場合は NotFound
    async fn update_access_token(
        &self,
        user_id: &UserId,
        access_token: &AccessToken,
    ) -> Result<(), InfraError>;
}

/// インメモリ実装
///
/// `Clone` しても同じ保存領域を共有する。
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// ユーザーを追加する
    ///
    /// # エラー
    ///
    /// - 同じメールアドレスのユーザーが既に存在する場合は Conflict
    pub fn add(&self, user: User) -> Result<(), InfraError> {
        let mut users = self.lock()?;
        if users.iter().any(|u| u.email() == user.email()) {
            return Err(InfraError::conflict("User", user.email().as_str()));
        }
        users.push(user);
        Ok(())
    }

    /// 登録済みユーザー数を返す
    pub fn len(&self) -> Result<usize, InfraError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, InfraError> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<User>>, InfraError> {
        self.users
            .lock()
            .map_err(|e| InfraError::storage(format!("ユーザー領域のロックに失敗: {e}")))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, InfraError> {
        let users = self.lock()?;
        Ok(users.iter().find(|u| u.email() == email).cloned())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%user_id))]
    async fn update_access_token(
        &self,
        user_id: &UserId,
        access_token: &AccessToken,
    ) -> Result<(), InfraError> {
        let mut users = self.lock()?;
        let Some(index) = users.iter().position(|u| u.id() == user_id) else {
            return Err(InfraError::not_found("User", user_id.to_string()));
        };

        let updated = users[index].clone().with_access_token(access_token.clone());
        users[index] = updated;
        Ok(())
    }
}
