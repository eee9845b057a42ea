// src/view_models.rs

use crate::model::{LessonId, Module, ModuleId};

/// Resumen de avance de un módulo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleProgress {
    pub total: usize,
    pub watched: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

impl ModuleProgress {
    pub fn of(module: &Module) -> Self {
        let total = module.lessons.len();
        let watched = module.watched_count();
        Self {
            total,
            watched,
            remaining: total - watched,
            is_complete: module.is_completed(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ModuleInfo {
    pub id: ModuleId,
    pub name: String,
    pub cover: String, // ya con la portada de reserva aplicada
    pub track: String,
    pub locked: bool,
    pub progress: ModuleProgress,
}

#[derive(Clone, Debug)]
pub struct LessonRow {
    pub id: LessonId,
    pub number: usize, // posición "humana" (1,2,3…)
    pub title: String,
    pub watched: bool,
    pub locked: bool,
}

impl ModuleInfo {
    pub fn from_module(module: &Module) -> Self {
        Self {
            id: module.id,
            name: module.name.clone(),
            cover: module.cover_or_fallback().to_string(),
            track: module.track.clone(),
            locked: module.locked,
            progress: ModuleProgress::of(module),
        }
    }

    pub fn label(&self) -> String {
        if self.locked {
            format!("{} 🔒", self.name)
        } else if self.progress.is_complete {
            format!("{} ✅", self.name)
        } else {
            format!(
                "{} 🔓 ({}/{})",
                self.name, self.progress.watched, self.progress.total
            )
        }
    }
}

impl LessonRow {
    pub fn rows_for(module: &Module) -> Vec<LessonRow> {
        module
            .lessons
            .iter()
            .enumerate()
            .map(|(i, l)| LessonRow {
                id: l.id,
                number: i + 1,
                title: l.title.clone(),
                watched: l.watched,
                locked: l.locked,
            })
            .collect()
    }

    pub fn label(&self) -> String {
        if self.watched {
            format!("{}. {} ✅", self.number, self.title)
        } else if self.locked {
            format!("{}. {} 🔒", self.number, self.title)
        } else {
            format!("{}. {}", self.number, self.title)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_modules;

    #[test]
    fn labels_reflect_lock_and_completion() {
        let mut modules = seed_modules();
        let info = ModuleInfo::from_module(&modules[0]);
        assert_eq!(info.label(), "Módulo 1 🔓 (1/2)");

        modules[0].lessons[1].watched = true;
        assert_eq!(ModuleInfo::from_module(&modules[0]).label(), "Módulo 1 ✅");

        modules[1].locked = true;
        assert_eq!(ModuleInfo::from_module(&modules[1]).label(), "Módulo 2 🔒");
    }

    #[test]
    fn lesson_rows_are_numbered_from_one() {
        let modules = seed_modules();
        let rows = LessonRow::rows_for(&modules[0]);
        assert_eq!(rows[0].number, 1);
        assert_eq!(rows[0].label(), "1. Aula 1 ✅");
        assert_eq!(rows[1].label(), "2. Aula 2");
    }
}
