use crate::model::{Lesson, LessonId, Module, ModuleId};

/// Recalcula el bloqueo de cada aula a partir de la anterior:
/// la primera siempre abierta, el resto bloqueada si la previa no está vista.
pub fn derive_lesson_locks(lessons: &mut [Lesson]) {
    let mut prev_watched: Option<bool> = None;
    for lesson in lessons.iter_mut() {
        lesson.locked = expected_lock(prev_watched);
        prev_watched = Some(lesson.watched);
    }
}

/// Aplica `derive_lesson_locks` a todos los módulos. No toca `Module::locked`.
pub fn derive_all(modules: &mut [Module]) {
    for module in modules.iter_mut() {
        derive_lesson_locks(&mut module.lessons);
    }
}

pub(crate) fn expected_lock(prev_watched: Option<bool>) -> bool {
    match prev_watched {
        None => false,
        Some(watched) => !watched,
    }
}

/// Aula cuyo bloqueo guardado no coincide con el derivado.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainViolation {
    pub module_id: ModuleId,
    pub lesson_id: LessonId,
    pub position: usize,
    pub expected_locked: bool,
}

pub fn chain_violations(modules: &[Module]) -> Vec<ChainViolation> {
    let mut out = Vec::new();
    for module in modules {
        let mut prev_watched = None;
        for (position, lesson) in module.lessons.iter().enumerate() {
            let expected = expected_lock(prev_watched);
            if lesson.locked != expected {
                out.push(ChainViolation {
                    module_id: module.id,
                    lesson_id: lesson.id,
                    position,
                    expected_locked: expected,
                });
            }
            prev_watched = Some(lesson.watched);
        }
    }
    out
}
