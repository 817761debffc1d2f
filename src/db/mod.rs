pub mod initialize;
pub mod pool;
pub mod store;

pub use store::{RecordStore, SqliteStore};
