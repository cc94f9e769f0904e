//! PostgreSQL repository implementation

use async_trait::async_trait;
use bank_adapter_postgres::map_sqlx_error;
use bank_errors::AppResult;
use sqlx::PgPool;
use tracing::info;

use crate::domain::{Account, AccountId, AccountRepository, AccountStats, AccountType};

use super::rows::{AccountRow, StatsRow};

/// `seq` 只用于保持插入顺序
const CREATE_ACCOUNTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS accounts (
        seq          BIGSERIAL        NOT NULL,
        id           TEXT             PRIMARY KEY,
        balance      DOUBLE PRECISION NOT NULL,
        created_at   TEXT             NOT NULL,
        account_type TEXT             NOT NULL CHECK (account_type IN ('CHECKING', 'SAVINGS'))
    )
"#;

pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 建表（已存在则跳过）
    pub async fn ensure_schema(&self) -> AppResult<()> {
        sqlx::query(CREATE_ACCOUNTS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("创建 accounts 表失败", e))?;

        info!("accounts table ready");
        Ok(())
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn find_all(&self) -> AppResult<Vec<Account>> {
        let rows = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, balance, created_at, account_type
            FROM accounts
            ORDER BY seq
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("查询账户列表失败", e))?;

        rows.into_iter().map(Account::try_from).collect()
    }

    async fn find_by_id(&self, id: &AccountId) -> AppResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, balance, created_at, account_type
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("查询账户失败", e))?;

        row.map(Account::try_from).transpose()
    }

    async fn find_by_type(&self, account_type: AccountType) -> AppResult<Vec<Account>> {
        let rows = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, balance, created_at, account_type
            FROM accounts
            WHERE account_type = $1
            ORDER BY seq
            "#,
        )
        .bind(account_type.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("按类型查询账户失败", e))?;

        rows.into_iter().map(Account::try_from).collect()
    }

    async fn save(&self, account: Account) -> AppResult<Account> {
        let id = account.id.unwrap_or_else(AccountId::generate);

        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            INSERT INTO accounts (id, balance, created_at, account_type)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                balance = EXCLUDED.balance,
                created_at = EXCLUDED.created_at,
                account_type = EXCLUDED.account_type
            RETURNING id, balance, created_at, account_type
            "#,
        )
        .bind(id.as_str())
        .bind(account.balance)
        .bind(&account.created_at)
        .bind(account.account_type.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("保存账户失败", e))?;

        Account::try_from(row)
    }

    async fn exists_by_id(&self, id: &AccountId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM accounts WHERE id = $1)")
            .bind(id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("检查账户是否存在失败", e))
    }

    async fn delete_by_id(&self, id: &AccountId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("删除账户失败", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM accounts")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("统计账户数量失败", e))?;

        Ok(count.max(0) as u64)
    }

    async fn stats(&self) -> AppResult<AccountStats> {
        let row = sqlx::query_as::<_, StatsRow>(
            r#"
            SELECT COUNT(*) AS count, COALESCE(SUM(balance), 0)::DOUBLE PRECISION AS sum
            FROM accounts
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("统计账户余额失败", e))?;

        Ok(AccountStats {
            count: row.count.max(0) as u64,
            sum: row.sum,
        })
    }
}
