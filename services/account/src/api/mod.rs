//! API layer

pub mod conversions;
mod grpc_service;

pub use grpc_service::{AccountGrpcService, SERVICE_NAME};
