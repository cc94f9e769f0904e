//! account-service - 银行账户 gRPC 服务
//!
//! 分层：api（请求处理） → application（账户服务） → domain（实体与仓储接口）
//! → infrastructure（PostgreSQL / 内存仓储、演示数据）

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;

// Proto generated code
pub mod bank_account {
    pub mod v1 {
        tonic::include_proto!("bank.account.v1");
    }
}

pub use bank_account::v1 as proto;

/// 文件描述符集 (用于 gRPC 反射)
pub const FILE_DESCRIPTOR_SET: &[u8] =
    tonic::include_file_descriptor_set!("bank_account_descriptor");
