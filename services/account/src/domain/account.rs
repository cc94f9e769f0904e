//! 账户实体

use std::fmt;
use std::str::FromStr;

use derive_more::{Display, From};
use thiserror::Error;
use uuid::Uuid;

/// 创建时间格式（ISO-8601，本地时间，不带时区）
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// 当前时间的创建时间字符串
pub fn creation_timestamp() -> String {
    chrono::Local::now().format(CREATED_AT_FORMAT).to_string()
}

/// 账户 ID
///
/// 由存储层在首次保存时生成，之后不再变化。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From)]
#[display("{_0}")]
pub struct AccountId(pub String);

impl AccountId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// 账户类型（封闭集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountType {
    /// 活期（COURANT）
    Checking,
    /// 储蓄（EPARGNE）
    Savings,
}

impl AccountType {
    pub const ALL: [AccountType; 2] = [AccountType::Checking, AccountType::Savings];

    /// 存储用的名称
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Checking => "CHECKING",
            AccountType::Savings => "SAVINGS",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown account type: {0}")]
pub struct UnknownAccountType(pub String);

impl FromStr for AccountType {
    type Err = UnknownAccountType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CHECKING" => Ok(AccountType::Checking),
            "SAVINGS" => Ok(AccountType::Savings),
            other => Err(UnknownAccountType(other.to_string())),
        }
    }
}

/// 银行账户
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// None 表示尚未保存
    pub id: Option<AccountId>,
    /// 余额，允许为负
    pub balance: f64,
    /// 预格式化的创建时间，业务逻辑不解析
    pub created_at: String,
    pub account_type: AccountType,
}

impl Account {
    /// 创建一个未保存的账户
    pub fn new(balance: f64, created_at: impl Into<String>, account_type: AccountType) -> Self {
        Self {
            id: None,
            balance,
            created_at: created_at.into(),
            account_type,
        }
    }

    pub fn with_id(mut self, id: AccountId) -> Self {
        self.id = Some(id);
        self
    }

    /// 是否尚未保存
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

/// 余额统计
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AccountStats {
    pub count: u64,
    pub sum: f64,
}

impl AccountStats {
    /// 单次遍历计算数量与总额
    pub fn from_accounts<'a>(accounts: impl IntoIterator<Item = &'a Account>) -> Self {
        accounts.into_iter().fold(Self::default(), |acc, account| Self {
            count: acc.count + 1,
            sum: acc.sum + account.balance,
        })
    }

    /// 平均余额，空集合为 0
    pub fn average(&self) -> f64 {
        if self.count > 0 {
            self.sum / self.count as f64
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_round_trip_names() {
        for account_type in AccountType::ALL {
            let parsed: AccountType = account_type.as_str().parse().unwrap();
            assert_eq!(parsed, account_type);
        }
        assert!("COURANT".parse::<AccountType>().is_err());
    }

    #[test]
    fn test_new_account_has_no_id() {
        let account = Account::new(-25.5, "2024-01-01T00:00:00", AccountType::Checking);
        assert!(account.is_new());
        assert_eq!(account.balance, -25.5);

        let stored = account.with_id(AccountId::generate());
        assert!(!stored.is_new());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = AccountId::generate();
        let b = AccountId::generate();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn test_stats_empty() {
        let stats = AccountStats::from_accounts(&Vec::<Account>::new());
        assert_eq!(stats.count, 0);
        assert_eq!(stats.sum, 0.0);
        assert_eq!(stats.average(), 0.0);
    }

    #[test]
    fn test_stats_single_pass() {
        let accounts = vec![
            Account::new(1000.0, "2024-01-01T00:00:00", AccountType::Checking),
            Account::new(5000.0, "2024-01-01T00:00:00", AccountType::Savings),
        ];
        let stats = AccountStats::from_accounts(&accounts);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.sum, 6000.0);
        assert_eq!(stats.average(), 3000.0);
    }

    #[test]
    fn test_creation_timestamp_format() {
        let ts = creation_timestamp();
        assert!(chrono::NaiveDateTime::parse_from_str(&ts, CREATED_AT_FORMAT).is_ok());
    }
}
