// src/data.rs

use crate::locks::derive_all;
use crate::model::Module;
use crate::persistence::wire::ModuleRecord;

/// Carga el dataset semilla desde el YAML embebido, con los bloqueos derivados
pub fn seed_modules() -> Vec<Module> {
    let file_content = include_str!("data/seed_modules.yaml");
    let records: Vec<ModuleRecord> =
        serde_yaml::from_str(file_content).expect("No se pudo parsear el dataset semilla YAML");
    let mut modules: Vec<Module> = records.into_iter().map(Module::from).collect();
    derive_all(&mut modules);
    modules
}
