//! 集成测试公共工具

#![allow(dead_code)]

use std::sync::Arc;

use account_service::api::AccountGrpcService;
use account_service::application::AccountService;
use account_service::domain::AccountRepository;
use account_service::infrastructure::persistence::InMemoryAccountRepository;
use account_service::proto::account_service_server::AccountService as _;
use account_service::proto::{self, AccountInput, CreateOrUpdateRequest};
use tonic::Request;

pub fn grpc_service(repo: Arc<dyn AccountRepository>) -> AccountGrpcService {
    AccountGrpcService::new(Arc::new(AccountService::new(repo)))
}

/// 内存仓储支撑的服务，同时返回仓储以便直接检查存储状态
pub fn in_memory_service() -> (AccountGrpcService, Arc<InMemoryAccountRepository>) {
    let repo = Arc::new(InMemoryAccountRepository::new());
    (grpc_service(repo.clone()), repo)
}

pub fn input(balance: f64, account_type: proto::AccountType) -> AccountInput {
    AccountInput {
        id: String::new(),
        balance,
        created_at: "2024-03-15T10:30:00".to_string(),
        r#type: account_type as i32,
    }
}

/// 通过 CreateOrUpdate 新建账户
pub async fn create(
    service: &AccountGrpcService,
    balance: f64,
    account_type: proto::AccountType,
) -> proto::Account {
    service
        .create_or_update(Request::new(CreateOrUpdateRequest {
            account: Some(input(balance, account_type)),
        }))
        .await
        .unwrap()
        .into_inner()
        .account
        .unwrap()
}
