//! 服务启动器
//!
//! 所有服务共用的启动流程

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use bank_config::AppConfig;
use bank_errors::AppResult;
use bank_telemetry::MetricsRecorder;
use tonic::transport::Server;
use tonic::transport::server::Router;
use tracing::{error, info};

use crate::health::{HealthChecker, HealthServer};
use crate::infrastructure::Infrastructure;
use crate::runtime::{init_runtime, shutdown_signal};

/// 健康检查端口相对 gRPC 端口的偏移
pub const HEALTH_PORT_OFFSET: u16 = 1000;

/// 运行 gRPC 服务
///
/// 1. 加载配置并初始化日志
/// 2. 安装 Prometheus recorder
/// 3. 创建基础设施（数据库连接带重试）
/// 4. 在 gRPC 端口 + 1000 上启动健康检查 HTTP 服务器
/// 5. 调用 `build` 注册 gRPC 服务
/// 6. 启动服务器，收到信号后优雅关闭
///
/// # 示例
///
/// ```ignore
/// run_server("config", |infra, mut server| async move {
///     let service = MyServiceImpl::new(infra.postgres_pool());
///     Ok(server.add_service(MyServiceServer::new(service)))
/// })
/// .await
/// ```
pub async fn run_server<F, Fut>(config_dir: &str, build: F) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(Infrastructure, Server) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    let config = AppConfig::load(config_dir)?;
    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    let metrics = Arc::new(MetricsRecorder::install()?);
    let infra = Infrastructure::from_config(config.clone()).await?;

    let health_port = config.server.port.saturating_add(HEALTH_PORT_OFFSET);
    let checker = Arc::new(HealthChecker::new(infra.postgres_pool()));
    let health_server = HealthServer::new(checker, metrics, health_port);
    let health_handle = tokio::spawn(async move {
        if let Err(e) = health_server.serve().await {
            error!("Health server error: {}", e);
        }
    });

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    let router = build(infra, Server::builder()).await?;

    info!(%addr, "gRPC server starting");
    router.serve_with_shutdown(addr, shutdown_signal()).await?;

    health_handle.abort();
    info!("Service stopped");

    Ok(())
}
