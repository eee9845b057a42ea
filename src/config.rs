use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Clave fija bajo la que se guarda el snapshot.
pub const STORAGE_KEY: &str = "modulos_area_membros";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ProgressConfig {
    pub storage_key: String,
    /// Si es `true`, una aula añadida a un módulo vacío queda abierta
    /// (cabeza de cadena). Por defecto se añade siempre bloqueada.
    pub unlock_first_appended_lesson: bool,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            unlock_first_appended_lesson: false,
        }
    }
}

impl ProgressConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}
