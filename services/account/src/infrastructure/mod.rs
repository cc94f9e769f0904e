//! Infrastructure layer

pub mod persistence;
mod seed;

pub use seed::{DEMO_CHECKING_BALANCE, DEMO_SAVINGS_BALANCE, seed_demo_accounts};
