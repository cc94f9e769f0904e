//! gRPC service implementation

use std::error::Error as _;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use bank_bootstrap::request_span;
use bank_errors::{AppError, AppResult, ErrorKind};
use bank_telemetry::record_grpc_request;
use tonic::{Request, Response, Status};
use tracing::{Instrument, Span, error, warn};

use crate::application::AccountService;
use crate::domain::AccountId;
use crate::proto::account_service_server::AccountService as AccountServiceRpc;
use crate::proto::*;

use super::conversions::*;

/// 完整服务名，用作 metrics 标签
pub const SERVICE_NAME: &str = "bank.account.v1.AccountService";

pub struct AccountGrpcService {
    service: Arc<AccountService>,
}

impl AccountGrpcService {
    pub fn new(service: Arc<AccountService>) -> Self {
        Self { service }
    }

    /// 在 span 中执行一次调用，记录 metrics 并把错误转换为 Status
    async fn observe<T, Fut>(
        &self,
        method: &'static str,
        span: Span,
        call: Fut,
    ) -> Result<Response<T>, Status>
    where
        Fut: Future<Output = AppResult<T>>,
    {
        let started = Instant::now();
        let result = call.instrument(span.clone()).await;

        let code = match &result {
            Ok(_) => tonic::Code::Ok,
            Err(err) => err.grpc_code(),
        };
        record_grpc_request(SERVICE_NAME, method, &format!("{code:?}"), started.elapsed());

        match result {
            Ok(body) => Ok(Response::new(body)),
            Err(err) => {
                span.in_scope(|| log_failure(method, &err));
                Err(err.into())
            }
        }
    }
}

fn log_failure(method: &str, err: &AppError) {
    match err.kind() {
        ErrorKind::NotFound | ErrorKind::InvalidArgument => {
            warn!(method, error = %err, "Request rejected");
        }
        ErrorKind::Internal => {
            let cause = err.source().map(|s| s.to_string()).unwrap_or_default();
            error!(method, error = %err, cause = %cause, "Request failed");
        }
    }
}

#[tonic::async_trait]
impl AccountServiceRpc for AccountGrpcService {
    async fn list_all(
        &self,
        request: Request<ListAllRequest>,
    ) -> Result<Response<ListAllResponse>, Status> {
        let span = request_span(&request, "ListAll");

        self.observe("ListAll", span, async {
            let accounts = self
                .service
                .list_all()
                .await
                .map_err(|e| e.into_internal("failed to list accounts"))?;

            Ok(ListAllResponse {
                accounts: accounts.iter().map(account_to_proto).collect(),
            })
        })
        .await
    }

    async fn get_by_id(
        &self,
        request: Request<GetByIdRequest>,
    ) -> Result<Response<GetByIdResponse>, Status> {
        let span = request_span(&request, "GetById");
        let req = request.into_inner();

        self.observe("GetById", span, async {
            let id = AccountId::from(req.id);
            let account = self
                .service
                .get_by_id(&id)
                .await
                .map_err(|e| e.into_internal("failed to fetch account"))?
                .ok_or_else(|| AppError::not_found(format!("account {id} not found")))?;

            Ok(GetByIdResponse {
                account: Some(account_to_proto(&account)),
            })
        })
        .await
    }

    async fn total_stats(
        &self,
        request: Request<TotalStatsRequest>,
    ) -> Result<Response<TotalStatsResponse>, Status> {
        let span = request_span(&request, "TotalStats");

        self.observe("TotalStats", span, async {
            let stats = self
                .service
                .stats()
                .await
                .map_err(|e| e.into_internal("failed to compute account statistics"))?;

            Ok(TotalStatsResponse {
                stats: Some(stats_to_proto(&stats)),
            })
        })
        .await
    }

    async fn create_or_update(
        &self,
        request: Request<CreateOrUpdateRequest>,
    ) -> Result<Response<CreateOrUpdateResponse>, Status> {
        let span = request_span(&request, "CreateOrUpdate");
        let req = request.into_inner();

        self.observe("CreateOrUpdate", span, async {
            let input = req
                .account
                .ok_or_else(|| AppError::validation("account is required"))?;
            let account = account_from_input(input)?;

            let saved = self
                .service
                .save(account)
                .await
                .map_err(|e| e.into_internal("failed to save account"))?;

            Ok(CreateOrUpdateResponse {
                account: Some(account_to_proto(&saved)),
            })
        })
        .await
    }

    async fn list_by_type(
        &self,
        request: Request<ListByTypeRequest>,
    ) -> Result<Response<ListByTypeResponse>, Status> {
        let span = request_span(&request, "ListByType");
        let req = request.into_inner();

        self.observe("ListByType", span, async {
            let account_type = account_type_from_proto(req.r#type)?;
            let accounts = self
                .service
                .list_by_type(account_type)
                .await
                .map_err(|e| e.into_internal("failed to list accounts by type"))?;

            Ok(ListByTypeResponse {
                accounts: accounts.iter().map(account_to_proto).collect(),
            })
        })
        .await
    }

    async fn delete_by_id(
        &self,
        request: Request<DeleteByIdRequest>,
    ) -> Result<Response<DeleteByIdResponse>, Status> {
        let span = request_span(&request, "DeleteById");
        let req = request.into_inner();

        self.observe("DeleteById", span, async {
            let id = AccountId::from(req.id);
            let deleted = self
                .service
                .delete_by_id(&id)
                .await
                .map_err(|e| e.into_internal("failed to delete account"))?;

            let message = if deleted {
                "account deleted"
            } else {
                "account not found"
            };
            Ok(DeleteByIdResponse {
                success: deleted,
                message: message.to_string(),
            })
        })
        .await
    }
}
