//! Tagrun common core types.

pub mod annotation;

pub use annotation::{reserved_arguments, Annotation, Arguments, PATH_KEY, TYPE_KEY};
