//! Persistence implementations

mod in_memory;
mod postgres;
mod rows;

pub use in_memory::InMemoryAccountRepository;
pub use postgres::PostgresAccountRepository;
