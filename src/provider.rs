//! Ámbito de proceso para el store: la capa de presentación accede a él con
//! `use_modulos` solo dentro de `ModulosProvider::provide`. Fuera del ámbito
//! es un error de programación y se aborta con pánico.

use std::cell::RefCell;

use crate::persistence::SnapshotStorage;
use crate::store::ProgressionStore;

pub type SharedStore = ProgressionStore<Box<dyn SnapshotStorage>>;

thread_local! {
    static ACTIVE: RefCell<Option<SharedStore>> = const { RefCell::new(None) };
}

pub struct ModulosProvider;

impl ModulosProvider {
    /// Instala `store` mientras dura `body` y lo devuelve al terminar.
    /// Los ámbitos se pueden anidar; el anterior se restaura al salir.
    pub fn provide<R>(store: SharedStore, body: impl FnOnce() -> R) -> (R, SharedStore) {
        let previous = ACTIVE.with(|slot| slot.replace(Some(store)));
        let guard = ScopeGuard {
            previous: Some(previous),
        };
        let out = body();
        (out, guard.finish())
    }

    pub fn is_active() -> bool {
        // prestado = hay un `use_modulos` en curso, luego el ámbito existe
        ACTIVE.with(|slot| slot.try_borrow().map_or(true, |s| s.is_some()))
    }
}

/// Acceso al store activo.
///
/// # Panics
/// Si se llama fuera de `ModulosProvider::provide`, o de forma anidada
/// (p. ej. desde un observador) mientras otra llamada está en curso.
pub fn use_modulos<R>(f: impl FnOnce(&mut SharedStore) -> R) -> R {
    ACTIVE.with(|slot| {
        let Ok(mut slot) = slot.try_borrow_mut() else {
            panic!("use_modulos no es reentrante: ya hay una llamada en curso en este hilo");
        };
        let store = slot
            .as_mut()
            .expect("use_modulos debe usarse dentro de ModulosProvider::provide");
        f(store)
    })
}

struct ScopeGuard {
    previous: Option<Option<SharedStore>>,
}

impl ScopeGuard {
    fn finish(mut self) -> SharedStore {
        let previous = self.previous.take().flatten();
        ACTIVE
            .with(|slot| slot.replace(previous))
            .expect("el ámbito de ModulosProvider perdió su store")
    }
}

impl Drop for ScopeGuard {
    // solo actúa si `body` hizo pánico
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            ACTIVE.with(|slot| {
                slot.replace(previous);
            });
        }
    }
}
