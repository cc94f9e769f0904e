//! account-service - 银行账户 gRPC 服务

use std::sync::Arc;

use account_service::FILE_DESCRIPTOR_SET;
use account_service::api::AccountGrpcService;
use account_service::application::AccountService;
use account_service::domain::AccountRepository;
use account_service::infrastructure::persistence::{
    InMemoryAccountRepository, PostgresAccountRepository,
};
use account_service::infrastructure::seed_demo_accounts;
use account_service::proto::account_service_server::AccountServiceServer;
use bank_bootstrap::{Infrastructure, run_server, tracing_interceptor};
use bank_config::StorageBackend;
use bank_errors::AppError;
use tonic_reflection::server::Builder as ReflectionBuilder;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_server("config", |infra: Infrastructure, mut server| async move {
        info!("Initializing account service...");

        let repo: Arc<dyn AccountRepository> =
            match (infra.storage_backend(), infra.postgres_pool()) {
                (StorageBackend::Postgres, Some(pool)) => {
                    let repo = PostgresAccountRepository::new(pool);
                    repo.ensure_schema().await?;
                    Arc::new(repo)
                }
                (StorageBackend::Postgres, None) => {
                    return Err(AppError::internal("PostgreSQL pool not initialized"));
                }
                (StorageBackend::Memory, _) => Arc::new(InMemoryAccountRepository::new()),
            };
        info!(backend = ?infra.storage_backend(), "Repository initialized");

        if infra.config().seed.enabled {
            seed_demo_accounts(repo.as_ref()).await?;
        }

        let service = Arc::new(AccountService::new(repo));
        let grpc_service = AccountGrpcService::new(service);

        let reflection_service = ReflectionBuilder::configure()
            .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
            .build_v1()
            .map_err(|e| AppError::internal_with("failed to build reflection service", e))?;

        Ok(server
            .add_service(AccountServiceServer::with_interceptor(
                grpc_service,
                tracing_interceptor,
            ))
            .add_service(reflection_service))
    })
    .await
}
