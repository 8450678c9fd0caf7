pub mod cache;
pub mod database;
pub mod impls;
pub mod model;
pub mod service;
pub mod store;

pub use cache::KeywordCache;
pub use database::{Database, MIGRATOR};
pub use service::KeywordService;
pub use store::KeywordStore;
#[cfg(any(test, feature = "test-util"))]
pub use store::MemoryKeywordStore;
