use crate::dom::{require_element, set_text_content};
use crate::error::TrailError;
use crate::maps::ErrorSlots;

/// Escribe cada mensaje en `#{campo}-err`
pub struct DomErrorSlots;

pub fn slot_id(field: &str) -> String {
    format!("{}-err", field)
}

impl ErrorSlots for DomErrorSlots {
    fn show_error(&mut self, field: &str, message: &str) -> Result<(), TrailError> {
        let id = slot_id(field);
        let slot = require_element(&id)?;
        set_text_content(&slot, message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_id_per_field() {
        assert_eq!(slot_id("name"), "name-err");
        assert_eq!(slot_id("coordinates"), "coordinates-err");
    }
}
