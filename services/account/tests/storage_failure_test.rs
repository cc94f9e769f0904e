//! 存储故障测试：非预期错误统一为 INTERNAL，原因保留

mod common;

use std::error::Error;
use std::sync::Arc;

use account_service::domain::{Account, AccountId, AccountRepository, AccountStats, AccountType};
use account_service::proto::account_service_server::AccountService as _;
use account_service::proto::{
    self, CreateOrUpdateRequest, DeleteByIdRequest, GetByIdRequest, ListAllRequest,
    ListByTypeRequest, TotalStatsRequest,
};
use async_trait::async_trait;
use bank_errors::{AppError, AppResult};
use mockall::mock;
use tonic::{Code, Request};

use common::{grpc_service, input};

mock! {
    pub AccountRepo {}

    #[async_trait]
    impl AccountRepository for AccountRepo {
        async fn find_all(&self) -> AppResult<Vec<Account>>;
        async fn find_by_id(&self, id: &AccountId) -> AppResult<Option<Account>>;
        async fn find_by_type(&self, account_type: AccountType) -> AppResult<Vec<Account>>;
        async fn save(&self, account: Account) -> AppResult<Account>;
        async fn exists_by_id(&self, id: &AccountId) -> AppResult<bool>;
        async fn delete_by_id(&self, id: &AccountId) -> AppResult<bool>;
        async fn count(&self) -> AppResult<u64>;
        async fn stats(&self) -> AppResult<AccountStats>;
    }
}

fn connection_lost() -> AppError {
    AppError::database("connection reset by peer")
}

#[tokio::test]
async fn test_save_failure_is_internal_with_cause() {
    let mut repo = MockAccountRepo::new();
    repo.expect_save()
        .times(1)
        .returning(|_| Err(connection_lost()));
    let service = grpc_service(Arc::new(repo));

    let status = service
        .create_or_update(Request::new(CreateOrUpdateRequest {
            account: Some(input(10.0, proto::AccountType::Checking)),
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Internal);
    assert_eq!(status.message(), "failed to save account");
    let cause = status.source().map(|s| s.to_string()).unwrap_or_default();
    assert!(cause.contains("connection reset by peer"));
}

#[tokio::test]
async fn test_missing_payload_never_reaches_storage() {
    let mut repo = MockAccountRepo::new();
    repo.expect_save().never();
    let service = grpc_service(Arc::new(repo));

    let status = service
        .create_or_update(Request::new(CreateOrUpdateRequest { account: None }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn test_read_failures_are_internal() {
    let mut repo = MockAccountRepo::new();
    repo.expect_find_all().returning(|| Err(connection_lost()));
    repo.expect_find_by_id().returning(|_| Err(connection_lost()));
    repo.expect_stats().returning(|| Err(connection_lost()));
    let service = grpc_service(Arc::new(repo));

    let status = service
        .list_all(Request::new(ListAllRequest {}))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Internal);

    let status = service
        .get_by_id(Request::new(GetByIdRequest {
            id: "a-1".to_string(),
        }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Internal);

    let status = service
        .total_stats(Request::new(TotalStatsRequest {}))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Internal);
    assert!(status.source().is_some());
}

#[tokio::test]
async fn test_list_by_type_failure_is_internal() {
    let mut repo = MockAccountRepo::new();
    repo.expect_find_by_type()
        .withf(|account_type| *account_type == AccountType::Savings)
        .times(1)
        .returning(|_| Err(connection_lost()));
    let service = grpc_service(Arc::new(repo));

    let status = service
        .list_by_type(Request::new(ListByTypeRequest {
            r#type: proto::AccountType::Savings as i32,
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Internal);
    assert_eq!(status.message(), "failed to list accounts by type");
    let cause = status.source().map(|s| s.to_string()).unwrap_or_default();
    assert!(cause.contains("connection reset by peer"));
}

#[tokio::test]
async fn test_update_existence_check_failure_is_internal() {
    let mut repo = MockAccountRepo::new();
    repo.expect_exists_by_id()
        .returning(|_| Err(connection_lost()));
    repo.expect_save().never();
    let service = grpc_service(Arc::new(repo));

    let mut account = input(10.0, proto::AccountType::Checking);
    account.id = "a-1".to_string();
    let status = service
        .create_or_update(Request::new(CreateOrUpdateRequest {
            account: Some(account),
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Internal);
    assert_eq!(status.message(), "failed to save account");
}

#[tokio::test]
async fn test_delete_failure_is_internal() {
    let mut repo = MockAccountRepo::new();
    repo.expect_exists_by_id().returning(|_| Ok(true));
    repo.expect_delete_by_id()
        .returning(|_| Err(connection_lost()));
    let service = grpc_service(Arc::new(repo));

    let status = service
        .delete_by_id(Request::new(DeleteByIdRequest {
            id: "a-1".to_string(),
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Internal);
    assert_eq!(status.message(), "failed to delete account");
}

#[tokio::test]
async fn test_delete_unknown_skips_storage_delete() {
    let mut repo = MockAccountRepo::new();
    repo.expect_exists_by_id().returning(|_| Ok(false));
    repo.expect_delete_by_id().never();
    let service = grpc_service(Arc::new(repo));

    let response = service
        .delete_by_id(Request::new(DeleteByIdRequest {
            id: "a-1".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();

    assert!(!response.success);
}
