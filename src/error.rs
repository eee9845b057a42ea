use thiserror::Error;

use crate::model::{LessonId, ModuleId};

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("no existe el módulo {0}")]
    ModuleNotFound(ModuleId),
    #[error("no existe la aula {lesson_id} en el módulo {module_id}")]
    LessonNotFound {
        module_id: ModuleId,
        lesson_id: LessonId,
    },
    /// Snapshot guardado ilegible; se recupera con el dataset semilla.
    #[error("snapshot guardado inválido: {0}")]
    MalformedSnapshot(String),
    /// Fallo al escribir; la sesión sigue solo en memoria.
    #[error("no se pudo guardar el snapshot: {0}")]
    PersistenceWriteFailed(String),
    #[error("no quedan ids libres")]
    IdSpaceExhausted,
    #[error("configuración inválida: {0}")]
    InvalidConfig(#[from] serde_yaml::Error),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("error de E/S: {0}")]
    Io(#[from] std::io::Error),
    #[error("cuota excedida: se necesitan {needed} bytes, cuota {quota}")]
    QuotaExceeded { needed: usize, quota: usize },
}

pub type Result<T, E = ProgressError> = std::result::Result<T, E>;
