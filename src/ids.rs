use crate::error::{ProgressError, Result};
use crate::model::Module;

/// Contador monótono de ids. Arranca por encima de cualquier id
/// (de módulo o de aula) presente en la colección, así los nuevos nunca chocan.
/// `None` significa que el espacio de ids está agotado.
#[derive(Clone, Debug)]
pub struct IdAllocator {
    next: Option<u64>,
}

impl IdAllocator {
    pub fn seeded_from(modules: &[Module]) -> Self {
        let max = modules
            .iter()
            .flat_map(|m| std::iter::once(m.id).chain(m.lessons.iter().map(|l| l.id)))
            .max();
        Self {
            next: match max {
                Some(max) => max.checked_add(1),
                None => Some(1),
            },
        }
    }

    pub fn next_id(&mut self) -> Result<u64> {
        let id = self.next.ok_or(ProgressError::IdSpaceExhausted)?;
        self.next = id.checked_add(1);
        Ok(id)
    }

    pub fn peek(&self) -> Option<u64> {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Lesson;

    fn module_with_ids(module_id: u64, lesson_id: u64) -> Module {
        Module {
            id: module_id,
            name: "M".into(),
            cover: String::new(),
            track: String::new(),
            locked: false,
            lessons: vec![Lesson {
                id: lesson_id,
                title: "A".into(),
                video_ref: "v".into(),
                watched: false,
                locked: false,
            }],
        }
    }

    #[test]
    fn starts_above_every_existing_id() {
        let mut ids = IdAllocator::seeded_from(&[module_with_ids(2, 40)]);
        assert_eq!(ids.peek(), Some(41));
        assert_eq!(ids.next_id().expect("id"), 41);
        assert_eq!(ids.next_id().expect("id"), 42);
    }

    #[test]
    fn empty_collection_starts_at_one() {
        let mut ids = IdAllocator::seeded_from(&[]);
        assert_eq!(ids.next_id().expect("id"), 1);
    }

    #[test]
    fn never_repeats_the_last_id() {
        let mut ids = IdAllocator::seeded_from(&[module_with_ids(u64::MAX, 1)]);
        assert!(matches!(ids.next_id(), Err(ProgressError::IdSpaceExhausted)));

        let mut ids = IdAllocator::seeded_from(&[module_with_ids(u64::MAX - 1, 1)]);
        assert_eq!(ids.next_id().expect("last id"), u64::MAX);
        assert!(matches!(ids.next_id(), Err(ProgressError::IdSpaceExhausted)));
    }
}
