// ============================================================================
// APP STATE - Estado compartido entre handlers
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Coordinate;
use crate::utils::storage::RouteCache;

/// Ruta cuyas notas se están mostrando
#[derive(Debug, Clone, PartialEq)]
pub struct NotesTarget {
    pub user_id: String,
    pub trail_id: String,
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    /// Centro resuelto por geolocalización (solo se registra en logs)
    pub center: Rc<RefCell<Option<Coordinate>>>,
    /// Caché temporal entre ajuste y guardado
    pub cache: RouteCache,
    pub notes_target: Rc<RefCell<Option<NotesTarget>>>,
}

impl AppState {
    pub fn new(cache: RouteCache) -> Self {
        Self {
            center: Rc::new(RefCell::new(None)),
            cache,
            notes_target: Rc::new(RefCell::new(None)),
        }
    }

    pub fn center(&self) -> Option<Coordinate> {
        *self.center.borrow()
    }

    pub fn set_notes_target(&self, target: Option<NotesTarget>) {
        *self.notes_target.borrow_mut() = target;
    }

    pub fn notes_target(&self) -> Option<NotesTarget> {
        self.notes_target.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStore;

    #[test]
    fn test_clones_share_state() {
        let state = AppState::new(RouteCache::new(Rc::new(MemoryStore::new())));
        let other = state.clone();
        *other.center.borrow_mut() = Some(Coordinate::new(1.0, 2.0));
        other.set_notes_target(Some(NotesTarget { user_id: "1".into(), trail_id: "2".into() }));

        assert_eq!(state.center(), Some(Coordinate::new(1.0, 2.0)));
        assert_eq!(state.notes_target().unwrap().trail_id, "2");
    }
}
