// Service exports
pub mod json_store;
pub mod memory;
pub mod store;

pub use json_store::JsonFileStore;
pub use memory::MemoryStore;
pub use store::{ProfileStore, StoreError};
