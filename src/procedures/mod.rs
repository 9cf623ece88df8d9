//! The procedures of a validation.
//!
//! The [validate](validate::validate) procedure sequences the others, and is the entry point for most uses.

pub mod braces;
pub mod debrace;
pub mod decompose;
pub mod lex;
pub mod symmetry;
pub mod syntax;
pub mod validate;
