//! 演示数据
//!
//! 存储为空时写入一个活期账户和一个储蓄账户

use bank_errors::AppResult;
use tracing::{debug, info};

use crate::domain::{Account, AccountRepository, AccountType, creation_timestamp};

pub const DEMO_CHECKING_BALANCE: f64 = 1000.0;
pub const DEMO_SAVINGS_BALANCE: f64 = 5000.0;

/// 写入演示账户，返回写入数量
///
/// 已有任何账户时不做任何事。
pub async fn seed_demo_accounts(repo: &dyn AccountRepository) -> AppResult<usize> {
    let existing = repo.count().await?;
    if existing > 0 {
        debug!(existing, "Store not empty, skipping demo accounts");
        return Ok(0);
    }

    let demo = [
        (DEMO_CHECKING_BALANCE, AccountType::Checking),
        (DEMO_SAVINGS_BALANCE, AccountType::Savings),
    ];
    for (balance, account_type) in demo {
        repo.save(Account::new(balance, creation_timestamp(), account_type))
            .await?;
    }

    info!(count = demo.len(), "Demo accounts seeded");
    Ok(demo.len())
}
