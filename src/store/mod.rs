use std::sync::Arc;

use log::debug;

use crate::config::ProgressConfig;
use crate::error::{ProgressError, Result};
use crate::ids::IdAllocator;
use crate::locks::derive_all;
use crate::model::{Lesson, LessonDraft, LessonId, Module, ModuleFilter, ModuleId};
use crate::persistence::{MemoryStorage, Persistence, SnapshotStorage};

// Submódulos
pub mod actions;
pub mod observers;
pub mod queries;

pub use observers::SubscriptionId;
use observers::Observers;

/// Copia inmutable de la colección en un momento dado.
pub type Snapshot = Arc<Vec<Module>>;

/// Dueño de la colección de módulos y única vía para modificarla.
///
/// Cada mutación construye una colección nueva, la publica a los
/// observadores y la guarda en el almacén.
pub struct ProgressionStore<S: SnapshotStorage> {
    modules: Snapshot,
    ids: IdAllocator,
    persistence: Persistence<S>,
    observers: Observers,
    config: ProgressConfig,
}

impl<S: SnapshotStorage> ProgressionStore<S> {
    /// Carga el snapshot (o la semilla), rederiva los bloqueos de aula y lo
    /// vuelve a escribir. Los overrides de `set_lesson_locked` no sobreviven.
    pub fn open(storage: S, config: ProgressConfig) -> Self {
        let persistence = Persistence::new(storage, config.storage_key.clone());
        let mut modules = persistence.load();
        derive_all(&mut modules);
        let mut store = Self {
            ids: IdAllocator::seeded_from(&modules),
            modules: Arc::new(modules),
            persistence,
            observers: Observers::default(),
            config,
        };
        store.persistence.save(&store.modules);
        store
    }

    pub fn with_storage(storage: S) -> Self {
        Self::open(storage, ProgressConfig::default())
    }

    pub fn config(&self) -> &ProgressConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        self.persistence.storage()
    }

    /// Devuelve el almacén, p. ej. para reabrir el store tras un reinicio.
    pub fn into_storage(self) -> S {
        self.persistence.into_storage()
    }

    /// Sustituye la colección de golpe, avisa y guarda.
    fn commit(&mut self, modules: Vec<Module>) {
        self.modules = Arc::new(modules);
        self.observers.notify(&self.modules);
        self.persistence.save(&self.modules);
    }

    fn draft_modules(&self) -> Vec<Module> {
        self.modules.as_ref().clone()
    }
}

impl ProgressionStore<MemoryStorage> {
    pub fn in_memory() -> Self {
        Self::with_storage(MemoryStorage::new())
    }
}

fn find_module_mut(modules: &mut [Module], module_id: ModuleId) -> Result<&mut Module> {
    modules
        .iter_mut()
        .find(|m| m.id == module_id)
        .ok_or(ProgressError::ModuleNotFound(module_id))
}
