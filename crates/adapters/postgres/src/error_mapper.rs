//! 数据库错误映射工具
//!
//! 提供统一的 SQLx 错误到 AppError 的转换，原始错误作为 source 保留

use bank_errors::AppError;

/// 将 SQLx 错误转换为 AppError
///
/// `context` 描述失败的操作，例如 "insert account"。
pub fn map_sqlx_error(context: &str, e: sqlx::Error) -> AppError {
    match &e {
        sqlx::Error::PoolTimedOut => {
            AppError::internal_with(format!("{}: connection pool timeout", context), e)
        }
        sqlx::Error::PoolClosed => {
            AppError::internal_with(format!("{}: connection pool is closed", context), e)
        }
        sqlx::Error::Database(db_err) => {
            let message = match db_err.code() {
                Some(code) => format!("{} ({})", context, code),
                None => context.to_string(),
            };
            AppError::database_with(message, e)
        }
        _ => AppError::database_with(context.to_string(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bank_errors::ErrorKind;
    use std::error::Error;

    #[test]
    fn test_pool_timeout() {
        let err = map_sqlx_error("list accounts", sqlx::Error::PoolTimedOut);
        assert!(matches!(err, AppError::Internal { .. }));
        assert!(err.to_string().contains("connection pool timeout"));
    }

    #[test]
    fn test_row_not_found_is_internal() {
        // 缺失记录由仓储返回 Option 表达，走到这里说明是非预期错误
        let err = map_sqlx_error("find account", sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Database { .. }));
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(err.source().is_some());
    }
}
