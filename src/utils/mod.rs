// Utils compartidos

pub mod constants;
pub mod mapbox_ffi;
pub mod storage;

pub use constants::*;
pub use storage::{CachedRoute, KeyValueStore, LocalStore, MemoryStore, RouteCache};
