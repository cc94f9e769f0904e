//! Proto <-> Domain conversions

use bank_errors::{AppError, AppResult};

use crate::domain::{Account, AccountId, AccountStats, AccountType, creation_timestamp};
use crate::proto;

// ========== AccountType ==========

/// 线上枚举 -> 领域枚举
///
/// UNSPECIFIED 和未知数值都视为参数错误。
pub fn account_type_from_proto(value: i32) -> AppResult<AccountType> {
    match proto::AccountType::try_from(value) {
        Ok(proto::AccountType::Checking) => Ok(AccountType::Checking),
        Ok(proto::AccountType::Savings) => Ok(AccountType::Savings),
        Ok(proto::AccountType::Unspecified) => {
            Err(AppError::validation("account type must be specified"))
        }
        Err(_) => Err(AppError::validation(format!(
            "unknown account type: {value}"
        ))),
    }
}

pub fn account_type_to_proto(account_type: AccountType) -> proto::AccountType {
    match account_type {
        AccountType::Checking => proto::AccountType::Checking,
        AccountType::Savings => proto::AccountType::Savings,
    }
}

// ========== Account ==========

pub fn account_to_proto(account: &Account) -> proto::Account {
    proto::Account {
        id: account
            .id
            .as_ref()
            .map(|id| id.as_str().to_string())
            .unwrap_or_default(),
        balance: account.balance,
        created_at: account.created_at.clone(),
        r#type: account_type_to_proto(account.account_type) as i32,
    }
}

/// 请求载荷 -> 领域账户
///
/// - 空 id 表示新建
/// - 空 created_at 使用当前时间
/// - 余额必须是有限数
pub fn account_from_input(input: proto::AccountInput) -> AppResult<Account> {
    if !input.balance.is_finite() {
        return Err(AppError::validation("balance must be a finite number"));
    }

    let account_type = account_type_from_proto(input.r#type)?;
    let created_at = if input.created_at.is_empty() {
        creation_timestamp()
    } else {
        input.created_at
    };

    let account = Account::new(input.balance, created_at, account_type);
    Ok(if input.id.is_empty() {
        account
    } else {
        account.with_id(AccountId(input.id))
    })
}

// ========== AccountStats ==========

pub fn stats_to_proto(stats: &AccountStats) -> proto::AccountStats {
    proto::AccountStats {
        count: i64::try_from(stats.count).unwrap_or(i64::MAX),
        sum: stats.sum,
        average: stats.average(),
    }
}
