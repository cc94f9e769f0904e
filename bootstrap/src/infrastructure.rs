//! 基础设施资源管理

use bank_adapter_postgres::{PostgresConfig, create_pool};
use bank_config::{AppConfig, StorageBackend};
use bank_errors::{AppError, AppResult};
use secrecy::ExposeSecret;
use sqlx::PgPool;
use tracing::info;

use crate::retry::{RetryConfig, with_retry};

/// 基础设施资源容器
///
/// 内存后端下没有连接池，服务自行决定使用哪种仓储实现。
#[derive(Clone)]
pub struct Infrastructure {
    config: AppConfig,
    postgres_pool: Option<PgPool>,
}

impl Infrastructure {
    /// 从配置创建基础设施资源（数据库连接带重试）
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        let postgres_pool = match config.storage.backend {
            StorageBackend::Postgres => {
                let database = config.database.as_ref().ok_or_else(|| {
                    AppError::internal("PostgreSQL backend selected without database config")
                })?;
                let pg_config = PostgresConfig::new(database.url.expose_secret())
                    .with_max_connections(database.max_connections);

                let pool = with_retry(&RetryConfig::default(), "PostgreSQL connection", || {
                    let cfg = pg_config.clone();
                    async move { create_pool(&cfg).await }
                })
                .await?;
                info!(
                    max_connections = database.max_connections,
                    "PostgreSQL connection pool created"
                );
                Some(pool)
            }
            StorageBackend::Memory => {
                info!("In-memory storage selected, skipping PostgreSQL");
                None
            }
        };

        Ok(Self {
            config,
            postgres_pool,
        })
    }

    /// 获取应用配置
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.config.storage.backend
    }

    /// 获取 PostgreSQL 连接池（内存后端时为 None）
    pub fn postgres_pool(&self) -> Option<PgPool> {
        self.postgres_pool.clone()
    }
}
