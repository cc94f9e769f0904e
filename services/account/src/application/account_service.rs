//! 账户服务
//!
//! 领域级操作，不涉及任何协议类型

use std::sync::Arc;

use bank_errors::{AppError, AppResult};
use tracing::{debug, info};

use crate::domain::{Account, AccountId, AccountRepository, AccountStats, AccountType};

pub struct AccountService {
    repo: Arc<dyn AccountRepository>,
}

impl AccountService {
    pub fn new(repo: Arc<dyn AccountRepository>) -> Self {
        Self { repo }
    }

    /// 全部账户
    pub async fn list_all(&self) -> AppResult<Vec<Account>> {
        let accounts = self.repo.find_all().await?;
        debug!(count = accounts.len(), "Listed accounts");
        Ok(accounts)
    }

    /// 按 ID 获取账户，不存在时返回 None
    pub async fn get_by_id(&self, id: &AccountId) -> AppResult<Option<Account>> {
        self.repo.find_by_id(id).await
    }

    /// 新建（无 ID）或整体替换（有 ID）
    ///
    /// ID 只由存储层生成：带 ID 但记录不存在时返回 NotFound，不插入。
    pub async fn save(&self, account: Account) -> AppResult<Account> {
        let is_new = account.is_new();
        if let Some(id) = &account.id {
            if !self.repo.exists_by_id(id).await? {
                return Err(AppError::not_found(format!("account {id} not found")));
            }
        }
        let saved = self.repo.save(account).await?;

        if let Some(id) = &saved.id {
            if is_new {
                info!(account_id = %id, account_type = %saved.account_type, "Account created");
            } else {
                info!(account_id = %id, "Account replaced");
            }
        }

        Ok(saved)
    }

    /// 按类型过滤
    pub async fn list_by_type(&self, account_type: AccountType) -> AppResult<Vec<Account>> {
        self.repo.find_by_type(account_type).await
    }

    /// 余额总额（全表扫描，不缓存）
    ///
    /// 处理器走 `stats()`，一次查询同时得到数量和总额。
    pub async fn total_balance(&self) -> AppResult<f64> {
        let accounts = self.repo.find_all().await?;
        Ok(accounts.iter().map(|a| a.balance).sum())
    }

    /// 数量与总额，一次存储往返
    pub async fn stats(&self) -> AppResult<AccountStats> {
        self.repo.stats().await
    }

    /// 删除账户，返回记录是否存在并已删除
    pub async fn delete_by_id(&self, id: &AccountId) -> AppResult<bool> {
        if !self.repo.exists_by_id(id).await? {
            debug!(account_id = %id, "Delete requested for unknown account");
            return Ok(false);
        }

        let deleted = self.repo.delete_by_id(id).await?;
        if deleted {
            info!(account_id = %id, "Account deleted");
        }
        Ok(deleted)
    }
}
