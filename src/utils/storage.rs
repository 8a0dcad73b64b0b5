// ============================================================================
// STORAGE - localStorage + caché temporal de la ruta ajustada
// ============================================================================

use serde::{de::DeserializeOwned, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::{window, Storage};

use crate::error::TrailError;
use crate::models::{LineString, TripStats};
use crate::utils::constants::{CACHE_KEY_COORDS, CACHE_KEY_DISTANCE, CACHE_KEY_DURATION};

/// Almacén clave/valor de texto (localStorage o memoria)
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, TrailError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), TrailError>;
    fn remove_item(&self, key: &str) -> Result<(), TrailError>;
}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// localStorage del navegador
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub fn open() -> Option<Self> {
        get_local_storage().map(|storage| Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, TrailError> {
        self.storage
            .get_item(key)
            .map_err(|_| TrailError::Storage(format!("Error leyendo '{}' de localStorage", key)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), TrailError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| TrailError::Storage(format!("Error guardando '{}' en localStorage", key)))
    }

    fn remove_item(&self, key: &str) -> Result<(), TrailError> {
        self.storage
            .remove_item(key)
            .map_err(|_| TrailError::Storage(format!("Error eliminando '{}' de localStorage", key)))
    }
}

/// Almacén en memoria, para cuando localStorage no está disponible (modo privado)
#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, TrailError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), TrailError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), TrailError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), TrailError> {
    let json = serde_json::to_string(value)?;
    store.set_item(key, &json)
}

pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, TrailError> {
    match store.get_item(key)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// Último ajuste calculado: lo que necesita el formulario de guardado
#[derive(Debug, Clone, PartialEq)]
pub struct CachedRoute {
    pub geometry: LineString,
    pub stats: TripStats,
}

/// Caché temporal entre el ajuste de la ruta y su guardado
/// Las tres claves se escriben siempre juntas
#[derive(Clone)]
pub struct RouteCache {
    store: Rc<dyn KeyValueStore>,
}

impl RouteCache {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// localStorage si existe, memoria si no
    pub fn open() -> Self {
        match LocalStore::open() {
            Some(local) => Self::new(Rc::new(local)),
            None => {
                log::warn!("⚠️ localStorage no disponible, la caché de ruta será solo en memoria");
                Self::new(Rc::new(MemoryStore::new()))
            }
        }
    }

    /// Borra la caché antes de cada nueva petición de ajuste
    pub fn clear(&self) -> Result<(), TrailError> {
        for key in [CACHE_KEY_COORDS, CACHE_KEY_DURATION, CACHE_KEY_DISTANCE] {
            self.store.remove_item(key)?;
        }
        Ok(())
    }

    pub fn store(&self, route: &CachedRoute) -> Result<(), TrailError> {
        let result = save_json(self.store.as_ref(), CACHE_KEY_COORDS, &route.geometry)
            .and_then(|_| save_json(self.store.as_ref(), CACHE_KEY_DURATION, &route.stats.duration))
            .and_then(|_| save_json(self.store.as_ref(), CACHE_KEY_DISTANCE, &route.stats.distance));

        // Nunca dejar la caché a medias
        if result.is_err() {
            let _ = self.clear();
        }
        result
    }

    pub fn load(&self) -> Result<CachedRoute, TrailError> {
        let geometry: LineString = load_json(self.store.as_ref(), CACHE_KEY_COORDS)?
            .ok_or(TrailError::MissingCache(CACHE_KEY_COORDS))?;
        let duration: String = load_json(self.store.as_ref(), CACHE_KEY_DURATION)?
            .ok_or(TrailError::MissingCache(CACHE_KEY_DURATION))?;
        let distance: String = load_json(self.store.as_ref(), CACHE_KEY_DISTANCE)?
            .ok_or(TrailError::MissingCache(CACHE_KEY_DISTANCE))?;

        Ok(CachedRoute {
            geometry,
            stats: TripStats { duration, distance },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;

    fn sample_route() -> CachedRoute {
        CachedRoute {
            geometry: LineString::new(vec![Coordinate::new(-121.6, 36.7), Coordinate::new(-121.61, 36.71)]),
            stats: TripStats::from_metric(600.0, 1609.344),
        }
    }

    #[test]
    fn test_store_then_load() {
        let memory = MemoryStore::new();
        let cache = RouteCache::new(Rc::new(memory.clone()));
        cache.store(&sample_route()).unwrap();

        assert_eq!(memory.len(), 3);
        assert_eq!(memory.get_item("duration").unwrap().as_deref(), Some("\"10.0\""));
        assert_eq!(cache.load().unwrap(), sample_route());
    }

    #[test]
    fn test_clear_only_touches_route_keys() {
        let memory = MemoryStore::new();
        memory.set_item("theme", "dark").unwrap();
        let cache = RouteCache::new(Rc::new(memory.clone()));
        cache.store(&sample_route()).unwrap();

        cache.clear().unwrap();
        assert_eq!(memory.len(), 1);
        assert_eq!(cache.load().unwrap_err(), TrailError::MissingCache("coords"));
    }

    #[test]
    fn test_partial_cache_reports_missing_key() {
        let memory = MemoryStore::new();
        save_json(&memory, "coords", &sample_route().geometry).unwrap();
        let cache = RouteCache::new(Rc::new(memory));
        assert_eq!(cache.load().unwrap_err(), TrailError::MissingCache("duration"));
    }
}
