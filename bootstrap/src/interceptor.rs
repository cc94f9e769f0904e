//! gRPC 追踪拦截器
//!
//! 从请求元数据中提取追踪 ID 并放入请求扩展，处理器用它创建 span

use tonic::{Request, Status};
use tracing::info_span;
use uuid::Uuid;

const TRACE_HEADERS: [&str; 3] = ["x-trace-id", "x-request-id", "x-correlation-id"];

/// 追踪信息
#[derive(Debug, Clone)]
pub struct TraceInfo {
    pub trace_id: String,
}

/// gRPC 拦截器：提取追踪 ID，都没有则生成一个
#[allow(clippy::result_large_err)]
pub fn tracing_interceptor(mut req: Request<()>) -> Result<Request<()>, Status> {
    let trace_id = TRACE_HEADERS
        .iter()
        .find_map(|key| {
            req.metadata()
                .get(*key)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        })
        .unwrap_or_else(|| Uuid::now_v7().to_string());

    req.extensions_mut().insert(TraceInfo { trace_id });
    Ok(req)
}

/// 为一次 gRPC 调用创建 span
pub fn request_span<T>(req: &Request<T>, method: &'static str) -> tracing::Span {
    let trace_id = req
        .extensions()
        .get::<TraceInfo>()
        .map(|t| t.trace_id.as_str())
        .unwrap_or("unknown");

    info_span!("grpc_request", method, trace_id = %trace_id)
}
