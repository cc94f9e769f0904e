//! bank-errors - 统一错误处理
//!
//! 服务边界只暴露三类失败：NotFound / InvalidArgument / Internal

use std::error::Error as StdError;
use std::sync::Arc;

use thiserror::Error;

/// 原始错误（用于诊断，透传给 `tonic::Status`）
pub type ErrorSource = Arc<dyn StdError + Send + Sync + 'static>;

/// 对外可见的失败类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    InvalidArgument,
    Internal,
}

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {message}")]
    Internal {
        message: String,
        source: Option<ErrorSource>,
    },

    #[error("Database error: {message}")]
    Database {
        message: String,
        source: Option<ErrorSource>,
    },
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal {
            message: msg.into(),
            source: None,
        }
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database {
            message: msg.into(),
            source: None,
        }
    }

    /// 携带原始错误的内部错误
    pub fn internal_with<E>(msg: impl Into<String>, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Internal {
            message: msg.into(),
            source: Some(Arc::new(source)),
        }
    }

    /// 携带原始错误的数据库错误
    pub fn database_with<E>(msg: impl Into<String>, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Database {
            message: msg.into(),
            source: Some(Arc::new(source)),
        }
    }

    /// 把任意错误包装为内部错误，描述固定，原因保留
    ///
    /// 边界层用它把非预期故障统一成 `Internal`。
    pub fn into_internal(self, description: impl Into<String>) -> Self {
        match self {
            Self::NotFound(_) | Self::Validation(_) => self,
            other => Self::Internal {
                message: description.into(),
                source: Some(Arc::new(other)),
            },
        }
    }

    /// 失败类别
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Validation(_) => ErrorKind::InvalidArgument,
            Self::Internal { .. } | Self::Database { .. } => ErrorKind::Internal,
        }
    }

    /// 转换为 gRPC 状态码
    pub fn grpc_code(&self) -> tonic::Code {
        match self.kind() {
            ErrorKind::NotFound => tonic::Code::NotFound,
            ErrorKind::InvalidArgument => tonic::Code::InvalidArgument,
            ErrorKind::Internal => tonic::Code::Internal,
        }
    }

    /// 对外描述（不含内部细节）
    pub fn description(&self) -> &str {
        match self {
            Self::NotFound(msg) | Self::Validation(msg) => msg,
            Self::Internal { message, .. } | Self::Database { message, .. } => message,
        }
    }

    fn error_source(&self) -> Option<ErrorSource> {
        match self {
            Self::Internal { source, .. } | Self::Database { source, .. } => source.clone(),
            _ => None,
        }
    }
}

impl From<AppError> for tonic::Status {
    fn from(err: AppError) -> Self {
        let mut status = tonic::Status::new(err.grpc_code(), err.description().to_string());
        if let Some(source) = err.error_source() {
            status.set_source(source);
        }
        status
    }
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
