//! 内存仓储
//!
//! 本地开发和测试用，进程退出即丢失

use async_trait::async_trait;
use bank_errors::AppResult;
use tokio::sync::RwLock;

use crate::domain::{Account, AccountId, AccountRepository, AccountStats, AccountType};

/// 按插入顺序保存账户
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<Vec<Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn has_id(account: &Account, id: &AccountId) -> bool {
    account.id.as_ref() == Some(id)
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_all(&self) -> AppResult<Vec<Account>> {
        Ok(self.accounts.read().await.clone())
    }

    async fn find_by_id(&self, id: &AccountId) -> AppResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| has_id(a, id)).cloned())
    }

    async fn find_by_type(&self, account_type: AccountType) -> AppResult<Vec<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .filter(|a| a.account_type == account_type)
            .cloned()
            .collect())
    }

    async fn save(&self, mut account: Account) -> AppResult<Account> {
        let id = account.id.take().unwrap_or_else(AccountId::generate);
        let account = account.with_id(id.clone());

        let mut accounts = self.accounts.write().await;
        match accounts.iter_mut().find(|a| has_id(a, &id)) {
            Some(existing) => *existing = account.clone(),
            None => accounts.push(account.clone()),
        }

        Ok(account)
    }

    async fn exists_by_id(&self, id: &AccountId) -> AppResult<bool> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().any(|a| has_id(a, id)))
    }

    async fn delete_by_id(&self, id: &AccountId) -> AppResult<bool> {
        let mut accounts = self.accounts.write().await;
        let before = accounts.len();
        accounts.retain(|a| !has_id(a, id));
        Ok(accounts.len() < before)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.accounts.read().await.len() as u64)
    }

    async fn stats(&self) -> AppResult<AccountStats> {
        let accounts = self.accounts.read().await;
        Ok(AccountStats::from_accounts(accounts.iter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checking(balance: f64) -> Account {
        Account::new(balance, "2024-01-01T00:00:00", AccountType::Checking)
    }

    #[tokio::test]
    async fn test_save_assigns_id() {
        let repo = InMemoryAccountRepository::new();
        let saved = repo.save(checking(10.0)).await.unwrap();

        let id = saved.id.clone().unwrap();
        assert_eq!(repo.find_by_id(&id).await.unwrap(), Some(saved));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_save_with_existing_id_replaces() {
        let repo = InMemoryAccountRepository::new();
        let first = repo.save(checking(10.0)).await.unwrap();
        repo.save(checking(20.0)).await.unwrap();

        let replacement = Account::new(99.0, "2025-06-01T12:00:00", AccountType::Savings)
            .with_id(first.id.clone().unwrap());
        repo.save(replacement).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[0].balance, 99.0);
        assert_eq!(all[0].account_type, AccountType::Savings);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryAccountRepository::new();
        let id = repo.save(checking(1.0)).await.unwrap().id.unwrap();

        assert!(repo.delete_by_id(&id).await.unwrap());
        assert!(!repo.delete_by_id(&id).await.unwrap());
        assert_eq!(repo.find_by_id(&id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_by_type_and_stats() {
        let repo = InMemoryAccountRepository::new();
        repo.save(checking(1000.0)).await.unwrap();
        repo.save(Account::new(5000.0, "2024-01-01T00:00:00", AccountType::Savings))
            .await
            .unwrap();

        let savings = repo.find_by_type(AccountType::Savings).await.unwrap();
        assert_eq!(savings.len(), 1);
        assert_eq!(savings[0].balance, 5000.0);

        let stats = repo.stats().await.unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.sum, 6000.0);
    }
}
