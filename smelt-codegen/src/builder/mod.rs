//! Code generation building blocks.
//!
//! The [`CodeBuilder`] is deliberately a minimal primitive — an ordered
//! line buffer with an indent counter — not a template engine. All control
//! flow (loops over operations, conditionals on feature flags) lives in the
//! delegates, where it is testable independently of string formatting.

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
