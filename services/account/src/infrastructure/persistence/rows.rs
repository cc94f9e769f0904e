//! 数据库行映射结构

use bank_errors::{AppError, AppResult};
use sqlx::FromRow;

use crate::domain::{Account, AccountId, AccountType};

/// 账户数据库行
#[derive(Debug, FromRow)]
pub struct AccountRow {
    pub id: String,
    pub balance: f64,
    pub created_at: String,
    pub account_type: String,
}

impl TryFrom<AccountRow> for Account {
    type Error = AppError;

    fn try_from(row: AccountRow) -> AppResult<Self> {
        let account_type: AccountType = row
            .account_type
            .parse()
            .map_err(|e| AppError::database_with(format!("账户 {} 类型无效", row.id), e))?;

        Ok(Account::new(row.balance, row.created_at, account_type).with_id(AccountId(row.id)))
    }
}

/// 统计查询结果
#[derive(Debug, FromRow)]
pub struct StatsRow {
    pub count: i64,
    pub sum: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_into_account() {
        let row = AccountRow {
            id: "a-1".to_string(),
            balance: 12.5,
            created_at: "2024-01-01T00:00:00".to_string(),
            account_type: "SAVINGS".to_string(),
        };
        let account = Account::try_from(row).unwrap();
        assert_eq!(account.id, Some(AccountId::from("a-1")));
        assert_eq!(account.account_type, AccountType::Savings);
    }

    #[test]
    fn test_unknown_type_is_internal() {
        let row = AccountRow {
            id: "a-2".to_string(),
            balance: 0.0,
            created_at: String::new(),
            account_type: "EPARGNE".to_string(),
        };
        let err = Account::try_from(row).unwrap_err();
        assert_eq!(err.kind(), bank_errors::ErrorKind::Internal);
    }
}
