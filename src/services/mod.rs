// Service exports
pub mod postgres;

pub use postgres::{PostgresStore, StoreError};
