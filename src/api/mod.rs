pub mod client;
pub mod worker;

pub use client::{StoreClient, StoreError, DEFAULT_BASE_URL};
pub use worker::spawn_store_worker;
