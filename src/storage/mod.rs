pub mod codec;
pub mod models;
pub mod store;

pub use codec::{Snapshot, load, read_snapshot, save};
pub use models::PersistedRecord;
pub use store::KvStore;
