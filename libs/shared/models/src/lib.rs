pub mod error;
pub mod store;

pub use error::{RecordKind, StoreError};
pub use store::{Record, RecordStore, DEFAULT_CAPACITY};
