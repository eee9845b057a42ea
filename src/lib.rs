pub mod config;
pub mod data;
pub mod error;
pub mod ids;
pub mod locks;
pub mod model;
pub mod persistence;
pub mod provider;
pub mod store;
pub mod view_models;

pub use config::{ProgressConfig, STORAGE_KEY};
pub use error::{ProgressError, StorageError};
pub use model::{Lesson, LessonDraft, LessonId, Module, ModuleFilter, ModuleId};
pub use persistence::{FileStorage, MemoryStorage, Persistence, SnapshotStorage};
pub use provider::{ModulosProvider, SharedStore, use_modulos};
pub use store::{ProgressionStore, Snapshot, SubscriptionId};
