// Service exports
pub mod notifications;
pub mod posts;
pub mod profile;
pub mod storage;

pub use notifications::{InboxError, NotificationInbox};
pub use posts::{PostRepository, RepositoryError};
pub use profile::{ProfileError, ProfileStore};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError, StorageKey};
