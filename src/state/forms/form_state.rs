//! Form state management

use super::field::{FieldDescriptor, FieldValue};

/// Ordered collection of field descriptors with an active-field cursor
///
/// This is caller-side state: values, errors, and touched flags live here
/// and are handed to the renderer read-only on every draw.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub fields: Vec<FieldDescriptor>,
    pub active_field_index: usize,
}

impl FormState {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self {
            fields,
            active_field_index: 0,
        }
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn active_field(&self) -> usize {
        self.active_field_index
    }

    pub fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len().saturating_sub(1));
    }

    /// Move to the next field (wraps around)
    pub fn next_field(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.active_field_index = (self.active_field_index + 1) % self.fields.len();
    }

    /// Move to the previous field (wraps around)
    pub fn prev_field(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        if self.active_field_index == 0 {
            self.active_field_index = self.fields.len() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    pub fn get_field(&self, index: usize) -> Option<&FieldDescriptor> {
        self.fields.get(index)
    }

    pub fn get_field_mut(&mut self, index: usize) -> Option<&mut FieldDescriptor> {
        self.fields.get_mut(index)
    }

    pub fn get_active_field(&self) -> Option<&FieldDescriptor> {
        self.fields.get(self.active_field_index)
    }

    /// Set a field's value
    pub fn set_value(&mut self, index: usize, value: FieldValue) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value;
        }
    }

    /// Set or clear a field's validation error
    pub fn set_error(&mut self, index: usize, error: Option<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.error = error;
        }
    }

    /// Mark a field as touched (after its first blur)
    pub fn mark_touched(&mut self, index: usize) {
        if let Some(field) = self.fields.get_mut(index) {
            field.touched = true;
        }
    }

    /// True when no field carries a validation error
    pub fn is_valid(&self) -> bool {
        self.fields
            .iter()
            .all(|f| f.error.as_deref().map_or(true, str::is_empty))
    }
}
