//! Form domain layer
//!
//! Field descriptors, caller-side form state, and the key-to-event mapping
//! that stands in for change/blur callbacks.

#![allow(dead_code)]

mod events;
mod field;
mod form_state;

pub use events::{handle_key, FieldEvent};
pub use field::{
    ControlKind, FieldDescription, FieldDescriptor, FieldValue, ParseControlKindError,
    SelectOption, TEXTAREA_DEFAULT_ROWS,
};
pub use form_state::FormState;
