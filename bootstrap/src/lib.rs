//! bank-bootstrap - 统一服务启动骨架
//!
//! 配置加载、日志、基础设施、健康检查与 gRPC 服务器的生命周期

mod health;
mod infrastructure;
mod interceptor;
mod retry;
mod runtime;
mod starter;

pub use health::*;
pub use infrastructure::*;
pub use interceptor::*;
pub use retry::*;
pub use runtime::*;
pub use starter::*;
