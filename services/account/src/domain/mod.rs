//! 领域层
//!
//! 账户实体、账户类型、统计值和仓储接口，不依赖任何协议类型

mod account;
mod repository;

pub use account::*;
pub use repository::AccountRepository;
