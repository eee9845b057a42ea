use super::*;
use crate::locks::{ChainViolation, chain_violations};
use crate::view_models::{LessonRow, ModuleInfo, ModuleProgress};

impl<S: SnapshotStorage> ProgressionStore<S> {
    /// Snapshot actual. Barato: solo clona el `Arc`.
    pub fn modules(&self) -> Snapshot {
        Arc::clone(&self.modules)
    }

    pub fn module(&self, module_id: ModuleId) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == module_id)
    }

    pub fn lesson(&self, module_id: ModuleId, lesson_id: LessonId) -> Option<&Lesson> {
        self.module(module_id)?.lesson(lesson_id)
    }

    pub fn modules_filtered(&self, filter: ModuleFilter) -> Vec<&Module> {
        self.modules.iter().filter(|m| filter.accepts(m)).collect()
    }

    /// Una aula se puede abrir si ni el módulo ni la aula están bloqueados.
    pub fn can_open_lesson(&self, module_id: ModuleId, lesson_id: LessonId) -> Result<bool> {
        let module = self
            .module(module_id)
            .ok_or(ProgressError::ModuleNotFound(module_id))?;
        let lesson = module
            .lesson(lesson_id)
            .ok_or(ProgressError::LessonNotFound { module_id, lesson_id })?;
        Ok(!module.locked && lesson.is_open())
    }

    pub fn module_progress(&self, module_id: ModuleId) -> Option<ModuleProgress> {
        self.module(module_id).map(ModuleProgress::of)
    }

    pub fn module_infos(&self) -> Vec<ModuleInfo> {
        self.modules.iter().map(ModuleInfo::from_module).collect()
    }

    pub fn lesson_rows(&self, module_id: ModuleId) -> Option<Vec<LessonRow>> {
        self.module(module_id).map(LessonRow::rows_for)
    }

    pub fn chain_violations(&self) -> Vec<ChainViolation> {
        chain_violations(&self.modules)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::ModuleFilter;
    use crate::store::ProgressionStore;

    #[test]
    fn locked_module_blocks_its_open_lessons() {
        let mut store = ProgressionStore::in_memory();
        assert!(store.can_open_lesson(1, 1).expect("ids resolve"));
        store.set_module_locked(1, true).expect("lock ok");
        assert!(!store.can_open_lesson(1, 1).expect("ids resolve"));
        assert!(store.can_open_lesson(5, 1).is_err());
    }

    #[test]
    fn filtered_views_follow_module_lock() {
        let mut store = ProgressionStore::in_memory();
        store.set_module_locked(2, true).expect("lock ok");
        let locked: Vec<u64> = store
            .modules_filtered(ModuleFilter::LockedOnly)
            .iter()
            .map(|m| m.id)
            .collect();
        let open: Vec<u64> = store
            .modules_filtered(ModuleFilter::UnlockedOnly)
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(locked, vec![2]);
        assert_eq!(open, vec![1]);
        assert_eq!(store.modules_filtered(ModuleFilter::All).len(), 2);
    }

    #[test]
    fn progress_counts_watched_lessons() {
        let store = ProgressionStore::in_memory();
        let p = store.module_progress(1).expect("seed module");
        assert_eq!((p.total, p.watched, p.remaining), (2, 1, 1));
        assert!(!p.is_complete);
        assert!(store.module_progress(42).is_none());
    }
}
