use super::*;

impl<S: SnapshotStorage> ProgressionStore<S> {
    /// Añade un módulo al final. La primera aula queda abierta y el resto
    /// bloqueadas; después se rederiva toda la colección.
    pub fn add_module(
        &mut self,
        name: impl Into<String>,
        cover: impl Into<String>,
        lessons: Vec<LessonDraft>,
        track: impl Into<String>,
    ) -> Result<ModuleId> {
        let module_id = self.ids.next_id()?;
        let lessons = lessons
            .into_iter()
            .enumerate()
            .map(|(i, draft)| -> Result<Lesson> {
                Ok(Lesson {
                    id: self.ids.next_id()?,
                    title: draft.title,
                    video_ref: draft.video_ref,
                    watched: false,
                    locked: i != 0,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        debug!("add_module {module_id} con {} aulas", lessons.len());

        let mut modules = self.draft_modules();
        modules.push(Module {
            id: module_id,
            name: name.into(),
            cover: cover.into(),
            track: track.into(),
            locked: false,
            lessons,
        });
        derive_all(&mut modules);
        self.commit(modules);
        Ok(module_id)
    }

    /// Añade una aula al final de un módulo, siempre bloqueada, salvo que
    /// `unlock_first_appended_lesson` esté activo y el módulo esté vacío.
    pub fn add_lesson(
        &mut self,
        module_id: ModuleId,
        title: impl Into<String>,
        video_ref: impl Into<String>,
    ) -> Result<LessonId> {
        let unlock_head = self.config.unlock_first_appended_lesson;
        let mut modules = self.draft_modules();
        let module = find_module_mut(&mut modules, module_id)?;
        let lesson_id = self.ids.next_id()?;
        let locked = !(unlock_head && module.lessons.is_empty());
        module.lessons.push(Lesson {
            id: lesson_id,
            title: title.into(),
            video_ref: video_ref.into(),
            watched: false,
            locked,
        });
        debug!("add_lesson {lesson_id} en módulo {module_id} (locked={locked})");
        self.commit(modules);
        Ok(lesson_id)
    }

    /// Marca la aula como vista y la abre, junto con la siguiente.
    pub fn mark_lesson_watched(&mut self, module_id: ModuleId, lesson_id: LessonId) -> Result<()> {
        let mut modules = self.draft_modules();
        let module = find_module_mut(&mut modules, module_id)?;
        let pos = module
            .lesson_position(lesson_id)
            .ok_or(ProgressError::LessonNotFound { module_id, lesson_id })?;
        let target = &mut module.lessons[pos];
        target.watched = true;
        target.locked = false;
        if let Some(next) = module.lessons.get_mut(pos + 1) {
            next.locked = false;
        }
        debug!("mark_lesson_watched {lesson_id} en módulo {module_id}");
        self.commit(modules);
        Ok(())
    }

    /// Reemplaza metadatos y reconstruye las aulas por posición: la aula i
    /// conserva id y `watched` de la que ocupaba esa posición, si existía.
    /// Los bloqueos se recalculan desde cero.
    pub fn edit_module(
        &mut self,
        module_id: ModuleId,
        name: impl Into<String>,
        cover: impl Into<String>,
        lessons: Vec<LessonDraft>,
        track: impl Into<String>,
    ) -> Result<()> {
        let mut modules = self.draft_modules();
        let module = find_module_mut(&mut modules, module_id)?;
        let previous = std::mem::take(&mut module.lessons);
        let ids = &mut self.ids;
        module.lessons = lessons
            .into_iter()
            .enumerate()
            .map(|(i, draft)| -> Result<Lesson> {
                let (id, watched) = match previous.get(i) {
                    Some(old) => (old.id, old.watched),
                    None => (ids.next_id()?, false),
                };
                Ok(Lesson {
                    id,
                    title: draft.title,
                    video_ref: draft.video_ref,
                    watched,
                    locked: false,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        module.name = name.into();
        module.cover = cover.into();
        module.track = track.into();
        debug!(
            "edit_module {module_id}: {} -> {} aulas",
            previous.len(),
            module.lessons.len()
        );
        derive_all(&mut modules);
        self.commit(modules);
        Ok(())
    }

    /// Solo toca el flag del módulo; las aulas no cambian.
    pub fn set_module_locked(&mut self, module_id: ModuleId, locked: bool) -> Result<()> {
        let mut modules = self.draft_modules();
        find_module_mut(&mut modules, module_id)?.locked = locked;
        debug!("set_module_locked {module_id} = {locked}");
        self.commit(modules);
        Ok(())
    }

    /// Override administrativo: fija el bloqueo de una aula sin pasar por la
    /// cadena. Dura hasta la próxima rederivación (`add_module`/`edit_module`).
    pub fn set_lesson_locked(
        &mut self,
        module_id: ModuleId,
        lesson_id: LessonId,
        locked: bool,
    ) -> Result<()> {
        let mut modules = self.draft_modules();
        let module = find_module_mut(&mut modules, module_id)?;
        let lesson = module
            .lessons
            .iter_mut()
            .find(|l| l.id == lesson_id)
            .ok_or(ProgressError::LessonNotFound { module_id, lesson_id })?;
        lesson.locked = locked;
        debug!("set_lesson_locked {lesson_id} en módulo {module_id} = {locked}");
        self.commit(modules);
        Ok(())
    }
}
