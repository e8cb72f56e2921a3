//! Validation module - pure semantic validators for raw user inputs.
//!
//! Every validator is a pure function: deterministic given the input
//! text and the already-accumulated name sets, with no side effects.
//! A rejection carries a specific reason plus user guidance; the
//! conversation stage is re-prompted, never advanced.

mod input_validator;

pub use input_validator::{
    validate_count, validate_decision_description, validate_name, validate_scale,
    COUNT_MAX, COUNT_MIN, MIN_DESCRIPTION_CHARS, MIN_NAME_CHARS,
};
