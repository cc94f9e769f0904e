//! 账户仓储接口

use async_trait::async_trait;
use bank_errors::AppResult;

use super::account::{Account, AccountId, AccountStats, AccountType};

/// 账户仓储接口
///
/// 以账户 ID 为键的存储。缺失记录用 `Option` / `bool` 表达，
/// 只有非预期故障（连接断开等）才返回 `Err`。
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// 查询全部账户（插入顺序）
    async fn find_all(&self) -> AppResult<Vec<Account>>;

    /// 根据 ID 查找账户
    async fn find_by_id(&self, id: &AccountId) -> AppResult<Option<Account>>;

    /// 按账户类型查询
    async fn find_by_type(&self, account_type: AccountType) -> AppResult<Vec<Account>>;

    /// 保存账户（按 ID upsert）
    ///
    /// 没有 ID 时生成新 ID 并插入；返回存储后的账户。
    async fn save(&self, account: Account) -> AppResult<Account>;

    /// 检查账户是否存在
    async fn exists_by_id(&self, id: &AccountId) -> AppResult<bool>;

    /// 删除账户，返回是否删除了记录
    async fn delete_by_id(&self, id: &AccountId) -> AppResult<bool>;

    /// 统计账户数量
    async fn count(&self) -> AppResult<u64>;

    /// 一次查询得到数量与余额总额
    async fn stats(&self) -> AppResult<AccountStats>;
}
