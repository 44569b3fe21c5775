// Adapters layer: concrete implementations of the domain ports.

pub mod appsync;
pub mod storage;

pub use appsync::AppSyncService;
pub use storage::LocalStorage;
