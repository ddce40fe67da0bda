//! Translator tests.
//!
//! One module per feature area of the translation surface:
//! - data classes: accessors, components, utilities, explicit-wins
//! - delegation: forwarder synthesis and degradation
//! - objects and companions: static promotion
//! - overload expansion and opt-out
//! - property translation: fields, lateinit, renames, exclusion
//! - function translation: suspend, throws, varargs, interfaces
//! - class shapes: modifiers, nesting, enums, value classes, records
//! - generics: wildcard optimization and boxing

pub mod tests_functions;
pub mod tests_objects;
pub mod tests_overloads;
pub mod tests_properties;
