//! Espejo durable del snapshot actual bajo una clave fija.

use log::{info, warn};

use crate::data::seed_modules;
use crate::error::{ProgressError, Result};
use crate::model::Module;

pub mod storage;
pub mod wire;

pub use storage::{FileStorage, MemoryStorage, SnapshotStorage};

pub struct Persistence<S> {
    storage: S,
    key: String,
}

impl<S: SnapshotStorage> Persistence<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Nunca falla: si no hay snapshot o no se puede leer, devuelve la semilla
    /// con los bloqueos ya derivados.
    pub fn load(&self) -> Vec<Module> {
        match self.try_load() {
            Ok(Some(modules)) => {
                info!("snapshot '{}' cargado ({} módulos)", self.key, modules.len());
                modules
            }
            Ok(None) => {
                info!("sin snapshot en '{}', usando dataset semilla", self.key);
                seed_modules()
            }
            Err(err) => {
                warn!("{err}; usando dataset semilla");
                seed_modules()
            }
        }
    }

    pub fn try_load(&self) -> Result<Option<Vec<Module>>> {
        let raw = self
            .storage
            .get(&self.key)
            .map_err(|e| ProgressError::MalformedSnapshot(format!("almacén ilegible: {e}")))?;
        match raw {
            None => Ok(None),
            Some(text) => wire::decode(&text)
                .map(Some)
                .map_err(ProgressError::MalformedSnapshot),
        }
    }

    /// Guardado best-effort: un fallo se registra y se descarta.
    pub fn save(&mut self, modules: &[Module]) {
        if let Err(err) = self.try_save(modules) {
            warn!("{err}; el progreso sigue solo en memoria");
        }
    }

    pub fn try_save(&mut self, modules: &[Module]) -> Result<()> {
        let json = wire::encode(modules)
            .map_err(|e| ProgressError::PersistenceWriteFailed(e.to_string()))?;
        self.storage
            .set(&self.key, json)
            .map_err(|e| ProgressError::PersistenceWriteFailed(e.to_string()))
    }
}
