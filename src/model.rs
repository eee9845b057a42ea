// src/model.rs

/// Identificador de módulo.
pub type ModuleId = u64;
/// Identificador de aula, único dentro de su módulo.
pub type LessonId = u64;

/// Portada que se muestra cuando un módulo no tiene `cover`.
pub const FALLBACK_COVER: &str = "https://placehold.co/300x400?text=Sem+Capa";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    pub video_ref: String, // URL del vídeo
    pub watched: bool,
    /// Derivado: la aula anterior no está vista. Ver `locks::derive_lesson_locks`.
    pub locked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Module {
    pub id: ModuleId,
    pub name: String,
    pub cover: String,
    pub track: String, // "linha": agrupación libre
    /// Bloqueo administrativo, independiente del estado de las aulas.
    pub locked: bool,
    pub lessons: Vec<Lesson>,
}

/// Datos de entrada de una aula nueva o editada (sin id ni flags).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonDraft {
    pub title: String,
    pub video_ref: String,
}

impl LessonDraft {
    pub fn new(title: impl Into<String>, video_ref: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            video_ref: video_ref.into(),
        }
    }
}

/// Filtro de módulos por estado de bloqueo, tal como lo pide la vista.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModuleFilter {
    #[default]
    All,
    LockedOnly,
    UnlockedOnly,
}

impl ModuleFilter {
    pub fn accepts(self, module: &Module) -> bool {
        match self {
            ModuleFilter::All => true,
            ModuleFilter::LockedOnly => module.locked,
            ModuleFilter::UnlockedOnly => !module.locked,
        }
    }
}

impl Lesson {
    pub fn is_open(&self) -> bool {
        !self.locked
    }
}

impl Module {
    pub fn lesson(&self, lesson_id: LessonId) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == lesson_id)
    }

    pub fn lesson_position(&self, lesson_id: LessonId) -> Option<usize> {
        self.lessons.iter().position(|l| l.id == lesson_id)
    }

    pub fn cover_or_fallback(&self) -> &str {
        if self.cover.trim().is_empty() {
            FALLBACK_COVER
        } else {
            &self.cover
        }
    }

    pub fn watched_count(&self) -> usize {
        self.lessons.iter().filter(|l| l.watched).count()
    }

    /// Un módulo sin aulas no cuenta como completado.
    pub fn is_completed(&self) -> bool {
        !self.lessons.is_empty() && self.lessons.iter().all(|l| l.watched)
    }
}
