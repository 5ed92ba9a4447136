//! Core utilities for the smelt client generator: the file-emission sink
//! and shared naming helpers.

mod file;
mod naming;

pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
pub use naming::{to_lower_camel_case, to_snake_case, to_upper_camel_case};

/// Header line stamped onto every generated source file.
pub const GENERATED_HEADER: &str = "// Code generated by smelt. DO NOT EDIT.";
