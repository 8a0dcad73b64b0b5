// Views: solo generan HTML / escriben en el DOM, sin lógica

pub mod directions;
pub mod error_slots;
pub mod notes;
pub mod trails;

pub use directions::{escape_html, render_directions, render_instructions};
pub use error_slots::DomErrorSlots;
pub use notes::render_notes;
pub use trails::render_trail_list;
